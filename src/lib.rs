#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

//! This crate validates and decodes complete HTTP/1.0 and HTTP/1.1 messages
//! which are already held in memory.  See [`Message::parse`].

mod error;
pub mod headers;
mod log;
mod message;
mod metadata;
mod method;
pub mod query;
mod request;
mod response;
mod scan;
mod separator;
pub mod status;

pub use crate::error::Error;
pub use crate::message::{
    Kind,
    Message,
};
pub use crate::method::Method;
pub use crate::separator::LineSeparator;

// This is the character sequence corresponding to a carriage return (CR)
// followed by a line feed (LF), which officially delimits each
// line of an HTTP message.
pub const CRLF: &str = "\r\n";

// Some messages delimit their lines with a bare line feed instead.
pub const LF: &str = "\n";

// Every start line carries this constant in front of the protocol version.
const HTTP_CONSTANT: &str = "HTTP/";

/// The protocol versions accepted in a start line.
pub const SUPPORTED_VERSIONS: [&str; 2] = ["1.0", "1.1"];

/// The longest method name read from a request line.
pub const MAX_METHOD_LENGTH: usize = 7;

/// The most bytes a request target path may occupy, counted from its leading
/// `/` through the start of the protocol constant.
pub const MAX_URI_PATH_LENGTH: usize = 80;

/// The most bytes of the `Transfer-Encoding` header value which are kept.
pub const MAX_TRANSFER_ENCODING_LENGTH: usize = 35;

/// The most bytes of a reason phrase which are compared against the
/// registered one.
pub const MAX_REASON_PHRASE_LENGTH: usize = 50;

/// The most digits of the `Content-Length` header value which are read.
pub const MAX_CONTENT_LENGTH_DIGITS: usize = 19;

/// Status codes must be below this value.
pub const STATUS_CODE_CEILING: u16 = 600;
