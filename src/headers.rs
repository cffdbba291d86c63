//! Extraction of the header block of a message into a name/value mapping.
//!
//! Lines without a colon are treated as folded continuations of the previous
//! header and are dropped rather than appended to it.  When a header name is
//! repeated, the value appearing last is kept.

use crate::{
    scan,
    separator::LineSeparator,
};
use std::collections::HashMap;

fn is_valid_name(name: &[u8]) -> bool {
    !scan::is_blank(name)
        && !name.iter().any(|&byte| {
            scan::is_control(byte) || byte == b'/' || byte == b'{'
        })
}

fn is_valid_value(value: &[u8]) -> bool {
    scan::is_blank(value) || !scan::has_control(value)
}

fn parse_header_line(line: &[u8]) -> Option<(String, String)> {
    let colon = line.iter().position(|&byte| byte == b':')?;
    let (name_end, value_start) = match scan::find(line, ": ") {
        Some(delimiter) => (delimiter, delimiter + 2),
        None => (colon, colon + 1),
    };
    let name = scan::trim_spaces(&line[..name_end]);
    let value = &line[value_start..];
    if is_valid_name(name) && is_valid_value(value) {
        Some((
            String::from_utf8_lossy(name).into_owned(),
            String::from_utf8_lossy(value).into_owned(),
        ))
    } else {
        None
    }
}

/// Collect the headers of the given message.  The header block is whatever
/// lies between the end of the start line and the empty line which ends the
/// block; a message without such an empty line yields no headers.
#[must_use]
pub fn extract(buffer: &[u8]) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    let separator = match LineSeparator::resolve(buffer) {
        Ok(separator) => separator,
        Err(_) => return headers,
    };
    let line_end = separator.as_str().as_bytes();
    let block_start = scan::find(buffer, line_end)
        .map_or(buffer.len(), |start_line_end| start_line_end + line_end.len());
    let block_end = scan::find(buffer, separator.terminator())
        .unwrap_or(0);
    if block_start >= block_end {
        return headers;
    }
    for line in scan::split(&buffer[block_start..block_end], line_end) {
        if let Some((name, value)) = parse_header_line(line) {
            headers.insert(name, value);
        } else {
            crate::log::trace!(
                "dropping header line {:?}",
                String::from_utf8_lossy(line)
            );
        }
    }
    headers
}
