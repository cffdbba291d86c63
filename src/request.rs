use crate::{
    error::Error,
    method::Method,
    scan,
    HTTP_CONSTANT,
    MAX_METHOD_LENGTH,
    MAX_URI_PATH_LENGTH,
};

/// Parse the method which opens the request line.  The method is read from
/// the very start of the message up to the first whitespace, but never more
/// than [`MAX_METHOD_LENGTH`] bytes.
pub fn parse_method(buffer: &[u8]) -> Result<Method, Error> {
    let name_length = buffer.iter()
        .take(MAX_METHOD_LENGTH)
        .take_while(|&&byte| !scan::is_space(byte))
        .count();
    let name = &buffer[..name_length];
    if scan::is_blank(name) {
        return Err(Error::NotFoundHttpMethod);
    }
    Method::from_bytes(name).ok_or(Error::NoSuchHttpMethod)
}

/// Parse the path of the request target.  The path starts at the first `/`
/// of the message, which must come before the protocol constant, and runs
/// until whitespace or the start of the query string.
pub fn parse_uri_path(buffer: &[u8]) -> Result<String, Error> {
    let protocol = scan::find(buffer, HTTP_CONSTANT)
        .ok_or(Error::UriPathNotFound)?;
    let slash = buffer.iter()
        .position(|&byte| byte == b'/')
        .filter(|&slash| slash < protocol)
        .ok_or(Error::UriPathNotFound)?;
    if protocol - slash + 1 > MAX_URI_PATH_LENGTH {
        return Err(Error::UriPathTooLong);
    }
    let target = &buffer[slash..];
    let path_length = target.iter()
        .position(|&byte| scan::is_space(byte) || byte == b'?')
        .unwrap_or(target.len());
    let copied = &target[..path_length.min(MAX_URI_PATH_LENGTH)];
    if scan::has_control(copied) {
        return Err(Error::InvalidUriPath);
    }
    if path_length > MAX_URI_PATH_LENGTH {
        return Err(Error::UriPathTooLong);
    }
    Ok(String::from_utf8_lossy(copied).into_owned())
}
