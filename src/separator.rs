use crate::{
    error::Error,
    scan,
    CRLF,
    LF,
};

/// This is the enumeration of the line-ending conventions a message may use.
/// One convention is chosen for the whole message; a message mixing both is
/// not detected as such.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LineSeparator {
    /// Lines end with a carriage return followed by a line feed.
    Crlf,

    /// Lines end with a bare line feed.
    Lf,
}

impl LineSeparator {
    /// Determine the line-ending convention of the given message by looking
    /// for the empty line which terminates its header block.  CRLF wins when
    /// both kinds of terminator are present.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLineSeparators`] is returned if the message contains
    /// neither `"\r\n\r\n"` nor `"\n\n"`.
    pub fn resolve(buffer: &[u8]) -> Result<Self, Error> {
        [LineSeparator::Crlf, LineSeparator::Lf].iter()
            .copied()
            .find(|separator| scan::contains(buffer, separator.terminator()))
            .ok_or(Error::InvalidLineSeparators)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LineSeparator::Crlf => CRLF,
            LineSeparator::Lf => LF,
        }
    }

    /// Return the doubled separator, which marks the end of the header
    /// block.
    #[must_use]
    pub fn terminator(self) -> &'static str {
        match self {
            LineSeparator::Crlf => "\r\n\r\n",
            LineSeparator::Lf => "\n\n",
        }
    }
}
