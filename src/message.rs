use crate::{
    error::Error,
    headers,
    metadata,
    method::Method,
    query,
    request,
    response,
    scan,
    separator::LineSeparator,
    status,
    HTTP_CONSTANT,
    SUPPORTED_VERSIONS,
};
use std::collections::HashMap;

const HTTP_VERSION_LENGTH: usize = 3;

/// This is the enumeration of the two kinds of HTTP message.  The caller
/// decides which kind a buffer holds before parsing it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    Request,
    Response,
}

fn parse_version(
    buffer: &[u8],
    kind: Kind,
) -> Result<String, Error> {
    let protocol = scan::find(buffer, HTTP_CONSTANT)
        .ok_or(Error::NotFoundHttpConstant)?;
    if kind == Kind::Response && protocol != 0 {
        return Err(Error::InvalidHttpConstant);
    }
    let version = &buffer[protocol + HTTP_CONSTANT.len()..];
    match version.get(..HTTP_VERSION_LENGTH) {
        Some([major, b'.', minor])
            if major.is_ascii_digit() && minor.is_ascii_digit() =>
        {
            let version = format!("{}.{}", char::from(*major), char::from(*minor));
            if SUPPORTED_VERSIONS.contains(&version.as_str()) {
                Ok(version)
            } else {
                Err(Error::NotSupportedHttpVersion)
            }
        },
        _ => Err(Error::InvalidHttpVersion),
    }
}

fn locate_body(buffer: &[u8]) -> Result<&[u8], Error> {
    [LineSeparator::Crlf, LineSeparator::Lf].iter()
        .find_map(|separator| {
            let terminator = separator.terminator();
            scan::find(buffer, terminator)
                .map(|headers_end| &buffer[headers_end + terminator.len()..])
        })
        .ok_or(Error::MalformedMessageBody)
}

/// This holds everything decoded from one complete HTTP message.
///
/// Parsing never fails outright; instead the first problem found is recorded
/// and can be retrieved with [`Message::status`].  Once an error is recorded,
/// the values of the other fields should not be relied upon.
///
/// The message body is not copied.  It is a view into the buffer given to
/// [`Message::parse`], which is why a `Message` cannot outlive that buffer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Message<'a> {
    body: Option<&'a [u8]>,
    content_length: u64,
    headers: Option<HashMap<String, String>>,
    kind: Kind,
    line_separator: Option<LineSeparator>,
    method: Option<Method>,
    query_parameters: Option<HashMap<String, String>>,
    status: Result<(), Error>,
    status_code: Option<u16>,
    transfer_encoding: String,
    uri_path: String,
    version: String,
}

impl<'a> Message<'a> {
    fn new(kind: Kind) -> Self {
        Self{
            body: None,
            content_length: 0,
            headers: None,
            kind,
            line_separator: None,
            method: None,
            query_parameters: None,
            status: Ok(()),
            status_code: None,
            transfer_encoding: String::new(),
            uri_path: String::new(),
            version: String::new(),
        }
    }

    /// Decode the complete HTTP message held in the given buffer.
    ///
    /// The message is run through every validation stage in turn, stopping
    /// at the first one which fails.  Headers and query parameters are not
    /// collected here; see [`Message::parse_headers`] and
    /// [`Message::parse_query_parameters`].
    pub fn parse<B>(
        buffer: &'a B,
        kind: Kind,
    ) -> Self
        where B: AsRef<[u8]> + ?Sized
    {
        let mut message = Self::new(kind);
        if let Err(error) = message.parse_buffer(buffer.as_ref()) {
            crate::log::debug!("rejected HTTP {:?}: {}", kind, error);
            message.status = Err(error);
        }
        message
    }

    fn parse_buffer(
        &mut self,
        buffer: &'a [u8],
    ) -> Result<(), Error> {
        if scan::is_blank(buffer) {
            return Err(Error::EmptyData);
        }
        self.line_separator = Some(LineSeparator::resolve(buffer)?);
        self.version = parse_version(buffer, self.kind)?;
        self.content_length = metadata::content_length(buffer);
        match self.kind {
            Kind::Request => {
                self.method = Some(request::parse_method(buffer)?);
                self.uri_path = request::parse_uri_path(buffer)?;
            },
            Kind::Response => {
                self.status_code = Some(
                    response::parse_status_line(buffer, &self.version)?
                );
            },
        }
        self.transfer_encoding = metadata::transfer_encoding(buffer);
        metadata::check_body_framing(
            &self.transfer_encoding,
            self.content_length
        )?;
        if !self.is_body_forbidden() {
            self.body = Some(locate_body(buffer)?);
        }
        Ok(())
    }

    fn is_body_forbidden(&self) -> bool {
        self.kind == Kind::Response
            && self.status_code.map_or(false, status::forbids_body)
    }

    /// Collect the headers of the given message, replacing any collected
    /// earlier.  Nothing happens if the buffer is blank.  Malformed header
    /// lines are dropped without affecting [`Message::status`].
    pub fn parse_headers<B>(
        &mut self,
        buffer: &B,
    )
        where B: AsRef<[u8]> + ?Sized
    {
        let buffer = buffer.as_ref();
        if !scan::is_blank(buffer) {
            self.headers = Some(headers::extract(buffer));
        }
    }

    /// Collect the query parameters of the given URL, replacing any collected
    /// earlier.  Nothing happens if the URL is blank.
    pub fn parse_query_parameters<U>(
        &mut self,
        url: &U,
    )
        where U: AsRef<[u8]> + ?Sized
    {
        let url = url.as_ref();
        if !scan::is_blank(url) {
            self.query_parameters = Some(query::extract(url));
        }
    }

    /// Drop the collected headers and query parameters.
    pub fn release(&mut self) {
        self.headers = None;
        self.query_parameters = None;
    }

    /// Return `Ok(())` if the message passed every validation stage, or the
    /// error raised by the first stage which failed.
    ///
    /// # Errors
    ///
    /// This returns the recorded [`Error`] for a rejected message.
    pub fn status(&self) -> Result<(), Error> {
        self.status
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn line_separator(&self) -> Option<LineSeparator> {
        self.line_separator
    }

    /// Return the protocol version, such as `"1.1"`, or an empty string if it
    /// was not parsed.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn method(&self) -> Option<Method> {
        self.method
    }

    /// Return the path of the request target, without any query string.
    #[must_use]
    pub fn uri_path(&self) -> &str {
        &self.uri_path
    }

    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    #[must_use]
    pub fn content_length(&self) -> u64 {
        self.content_length
    }

    /// Return the raw `Transfer-Encoding` header value, or an empty string.
    #[must_use]
    pub fn transfer_encoding(&self) -> &str {
        &self.transfer_encoding
    }

    /// Return everything following the header block, or `None` if the
    /// message has no body (which is always the case for responses with
    /// status 1xx, 204 or 304).  The body is not limited to the declared
    /// `Content-Length`.
    #[must_use]
    pub fn body(&self) -> Option<&'a [u8]> {
        self.body
    }

    /// Return the body as text, if there is a body and it is valid UTF-8.
    #[must_use]
    pub fn body_str(&self) -> Option<&'a str> {
        self.body.and_then(|body| std::str::from_utf8(body).ok())
    }

    #[must_use]
    pub fn headers(&self) -> Option<&HashMap<String, String>> {
        self.headers.as_ref()
    }

    #[must_use]
    pub fn query_parameters(&self) -> Option<&HashMap<String, String>> {
        self.query_parameters.as_ref()
    }
}
