//! Extraction of the headers which determine how the message body is
//! delimited.  Both headers are located by searching the whole message, not
//! just its header block, so the same text inside a body is also picked up.

use crate::{
    error::Error,
    scan,
    MAX_CONTENT_LENGTH_DIGITS,
    MAX_TRANSFER_ENCODING_LENGTH,
};

const CONTENT_LENGTH_HEADER: &str = "Content-Length: ";
const TRANSFER_ENCODING_HEADER: &str = "Transfer-Encoding: ";

/// Return the value of the `Content-Length` header, or zero if the header is
/// missing or does not start with a digit.  At most
/// [`MAX_CONTENT_LENGTH_DIGITS`] digits are read, which always fit.
pub fn content_length(buffer: &[u8]) -> u64 {
    scan::find(buffer, CONTENT_LENGTH_HEADER).map_or(0, |header| {
        buffer[header + CONTENT_LENGTH_HEADER.len()..].iter()
            .take(MAX_CONTENT_LENGTH_DIGITS)
            .take_while(|byte| byte.is_ascii_digit())
            .fold(0, |length, digit| length * 10 + u64::from(digit - b'0'))
    })
}

/// Return the raw value of the `Transfer-Encoding` header, up to the next
/// carriage return and at most [`MAX_TRANSFER_ENCODING_LENGTH`] bytes long,
/// or an empty string if the header is missing.
pub fn transfer_encoding(buffer: &[u8]) -> String {
    scan::find(buffer, TRANSFER_ENCODING_HEADER).map_or_else(String::new, |header| {
        let value = &buffer[header + TRANSFER_ENCODING_HEADER.len()..];
        let length = value.iter()
            .take(MAX_TRANSFER_ENCODING_LENGTH)
            .take_while(|&&byte| byte != b'\r')
            .count();
        String::from_utf8_lossy(&value[..length]).into_owned()
    })
}

/// A message may declare its body length through `Content-Length` or frame
/// it with chunked transfer coding, but not both.
pub fn check_body_framing(
    transfer_encoding: &str,
    content_length: u64,
) -> Result<(), Error> {
    if transfer_encoding.contains("chunked") && content_length > 0 {
        Err(Error::UnexpectedContentLength)
    } else {
        Ok(())
    }
}
