use crate::{
    error::Error,
    scan,
    status,
    HTTP_CONSTANT,
    MAX_REASON_PHRASE_LENGTH,
    STATUS_CODE_CEILING,
};

const STATUS_CODE_DIGITS: usize = 3;

fn parse_status_code(status_line: &[u8]) -> Result<u16, Error> {
    let digits = status_line.get(..STATUS_CODE_DIGITS)
        .filter(|digits| digits.iter().all(u8::is_ascii_digit))
        .ok_or(Error::InvalidHttpStatusCode)?;
    if status_line.get(STATUS_CODE_DIGITS) != Some(&b' ') {
        return Err(Error::InvalidHttpStatusCode);
    }
    let code = digits.iter()
        .fold(0, |code, digit| code * 10 + u16::from(digit - b'0'));
    if code == 0 || code >= STATUS_CODE_CEILING {
        return Err(Error::InvalidHttpStatusCode);
    }
    Ok(code)
}

fn parse_reason_phrase(
    reason_phrase: &[u8],
    code: u16,
) -> Result<(), Error> {
    let end = reason_phrase.iter()
        .position(|&byte| byte == b'\r' || byte == b'\n')
        .unwrap_or(reason_phrase.len());
    if end == 0 {
        return Err(Error::StatusCodeMessageNotFound);
    }
    let reason_phrase = scan::trim(
        &reason_phrase[..end.min(MAX_REASON_PHRASE_LENGTH)]
    );
    match status::reason_phrase(code) {
        Some(expected) if expected.as_bytes() == reason_phrase => Ok(()),
        _ => Err(Error::InvalidStatusCodeMessage),
    }
}

/// Parse the status code of a response and check that the reason phrase
/// which follows it is the one registered for that code.  The given
/// `version` is the already-parsed protocol version, which is skipped along
/// with the protocol constant.
pub fn parse_status_line(
    buffer: &[u8],
    version: &str,
) -> Result<u16, Error> {
    let protocol = scan::find(buffer, HTTP_CONSTANT)
        .ok_or(Error::StatusCodeNotFound)?;
    let status_line = buffer.get(protocol + HTTP_CONSTANT.len() + version.len()..)
        .unwrap_or_default();
    let status_line = &status_line[scan::count_leading_space(status_line)..];
    let code = parse_status_code(status_line)?;
    let reason_phrase = &status_line[STATUS_CODE_DIGITS..];
    let reason_phrase = &reason_phrase[scan::count_leading_space(reason_phrase)..];
    parse_reason_phrase(reason_phrase, code)?;
    Ok(code)
}
