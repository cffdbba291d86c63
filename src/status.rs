//! Registered HTTP status codes and the reason phrase which must accompany
//! each of them in a status line.

pub const CONTINUE: u16 = 100;
pub const OK: u16 = 200;
pub const NO_CONTENT: u16 = 204;
pub const NOT_MODIFIED: u16 = 304;
pub const BAD_REQUEST: u16 = 400;
pub const INTERNAL_SERVER_ERROR: u16 = 500;

/// Return the canonical reason phrase for the given status code, or `None`
/// if the code is not registered.
#[must_use]
pub fn reason_phrase(code: u16) -> Option<&'static str> {
    let phrase = match code {
        100 => "Continue",
        101 => "Switching Protocols",
        102 => "Processing",
        103 => "Early Hints",
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        203 => "Non-Authoritative Information",
        204 => "No Content",
        205 => "Reset Content",
        206 => "Partial Content",
        207 => "Multi-Status",
        208 => "Already Reported",
        226 => "IM Used",
        300 => "Multiple Choices",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        304 => "Not Modified",
        305 => "Use Proxy",
        307 => "Temporary Redirect",
        308 => "Permanent Redirect",
        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        407 => "Proxy Authentication Required",
        408 => "Request Timeout",
        409 => "Conflict",
        410 => "Gone",
        411 => "Length Required",
        412 => "Precondition Failed",
        413 => "Payload Too Large",
        414 => "URI Too Long",
        415 => "Unsupported Media Type",
        416 => "Range Not Satisfiable",
        417 => "Expectation Failed",
        418 => "I'm a teapot",
        421 => "Misdirected Request",
        422 => "Unprocessable Entity",
        423 => "Locked",
        424 => "Failed Dependency",
        425 => "Too Early",
        426 => "Upgrade Required",
        428 => "Precondition Required",
        429 => "Too Many Requests",
        431 => "Request Header Fields Too Large",
        451 => "Unavailable For Legal Reasons",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        505 => "HTTP Version Not Supported",
        506 => "Variant Also Negotiates",
        507 => "Insufficient Storage",
        508 => "Loop Detected",
        510 => "Not Extended",
        511 => "Network Authentication Required",
        _ => return None,
    };
    Some(phrase)
}

/// Determine whether a response with the given status code never carries a
/// message body.
#[must_use]
pub fn forbids_body(code: u16) -> bool {
    code < OK || code == NO_CONTENT || code == NOT_MODIFIED
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn registered_codes_have_phrases() {
        assert_eq!(Some("OK"), reason_phrase(OK));
        assert_eq!(Some("Bad Request"), reason_phrase(BAD_REQUEST));
        assert_eq!(
            Some("Internal Server Error"),
            reason_phrase(INTERNAL_SERVER_ERROR)
        );
        assert_eq!(Some("Not Modified"), reason_phrase(NOT_MODIFIED));
    }

    #[test]
    fn unregistered_codes_have_no_phrase() {
        assert_eq!(None, reason_phrase(0));
        assert_eq!(None, reason_phrase(299));
        assert_eq!(None, reason_phrase(924));
    }

    #[test]
    fn bodiless_status_codes() {
        assert!(forbids_body(CONTINUE));
        assert!(forbids_body(199));
        assert!(forbids_body(NO_CONTENT));
        assert!(forbids_body(NOT_MODIFIED));
        assert!(!forbids_body(OK));
        assert!(!forbids_body(BAD_REQUEST));
    }

}
