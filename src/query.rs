use crate::scan;
use std::collections::HashMap;

/// Collect the parameters of the query string in the given URL, or in a
/// request line containing it.  The query string starts after the first `?`
/// and ends at the first space after that, if any.  Pieces which are not of
/// the form `key=value` are dropped, and a repeated key keeps the value
/// appearing last.  No percent-decoding is performed.
#[must_use]
pub fn extract(url: &[u8]) -> HashMap<String, String> {
    let mut parameters = HashMap::new();
    let query = match url.iter().position(|&byte| byte == b'?') {
        Some(question_mark) => &url[question_mark + 1..],
        None => return parameters,
    };
    let query = query.iter()
        .position(|&byte| byte == b' ')
        .map_or(query, |space| &query[..space]);
    for parameter in scan::split(query, b"&") {
        match parameter.iter().position(|&byte| byte == b'=') {
            Some(equals) => {
                parameters.insert(
                    String::from_utf8_lossy(&parameter[..equals]).into_owned(),
                    String::from_utf8_lossy(&parameter[equals + 1..]).into_owned(),
                );
            },
            _ => {
                crate::log::trace!(
                    "dropping query parameter {:?}",
                    String::from_utf8_lossy(parameter)
                );
            },
        }
    }
    parameters
}
