/// This is the enumeration of all the different kinds of errors which this
/// crate generates.  They are listed in the order in which the message
/// pipeline can detect them; only the first one detected is ever reported.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, thiserror::Error)]
pub enum Error {
    /// The message buffer was empty or contained only whitespace.
    #[error("message buffer is empty")]
    EmptyData,

    /// Neither a CRLF nor an LF header terminator was found in the message.
    #[error("unable to find header terminator (CRLF CRLF or LF LF)")]
    InvalidLineSeparators,

    /// The `HTTP/` protocol constant does not appear anywhere in the message.
    #[error("unable to find HTTP protocol constant")]
    NotFoundHttpConstant,

    /// The `HTTP/` protocol constant does not open the status line of a
    /// response.
    #[error("HTTP protocol constant is not at the start of the status line")]
    InvalidHttpConstant,

    /// The characters following the `HTTP/` protocol constant are not of the
    /// form `digit '.' digit`.
    #[error("malformed HTTP version")]
    InvalidHttpVersion,

    /// The HTTP version is well formed, but is neither 1.0 nor 1.1.
    #[error("unsupported HTTP version")]
    NotSupportedHttpVersion,

    /// The request line does not begin with a method.
    #[error("unable to find method in request line")]
    NotFoundHttpMethod,

    /// The request line begins with a token which is not a known method.
    #[error("unknown method in request line")]
    NoSuchHttpMethod,

    /// No `/` precedes the protocol constant in the request line.
    #[error("unable to find target URI path in request line")]
    UriPathNotFound,

    /// The target URI path does not fit in the space reserved for it.
    #[error("target URI path too long")]
    UriPathTooLong,

    /// The target URI path contains a control character.
    #[error("invalid character in target URI path")]
    InvalidUriPath,

    /// No status line could be located in the response.
    #[error("unable to find status code in status line")]
    StatusCodeNotFound,

    /// The status code is not exactly three digits followed by a space, or is
    /// out of range.
    #[error("invalid status code")]
    InvalidHttpStatusCode,

    /// Nothing follows the status code in the status line.
    #[error("unable to find reason phrase in status line")]
    StatusCodeMessageNotFound,

    /// The reason phrase does not match the one registered for the status
    /// code.
    #[error("reason phrase does not match status code")]
    InvalidStatusCodeMessage,

    /// The message has a `Content-Length` header as well as a chunked
    /// `Transfer-Encoding`.
    #[error("Content-Length not allowed together with chunked Transfer-Encoding")]
    UnexpectedContentLength,

    /// The start of the message body could not be located.
    #[error("unable to locate message body")]
    MalformedMessageBody,
}
