//! Opaque continuation tokens for search pagination.
//!
//! A [`Cursor`] is a zero-based offset into a search's flattened result
//! sequence. On the wire it is the decimal offset encoded as URL-safe
//! base64 without padding. Tokens carry no server-side state and no
//! integrity protection: the only thing a client can express through one
//! is an offset.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Reasons a continuation token is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CursorError {
    /// The token is not valid URL-safe base64.
    #[error("page token is not valid base64")]
    Encoding,

    /// The decoded token is not a non-negative decimal offset.
    #[error("page token does not encode an offset")]
    Offset,
}

/// Resume position within a search result sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cursor(usize);

impl Cursor {
    /// The start of the result sequence.
    pub const START: Self = Self(0);

    /// Creates a cursor at the given offset.
    #[must_use]
    pub const fn new(offset: usize) -> Self {
        Self(offset)
    }

    /// Returns the zero-based offset.
    #[must_use]
    pub const fn offset(self) -> usize {
        self.0
    }

    /// Encodes the cursor as an opaque token.
    #[must_use]
    pub fn encode(self) -> String {
        URL_SAFE_NO_PAD.encode(self.0.to_string())
    }

    /// Decodes a token produced by [`Cursor::encode`].
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::Encoding`] if the token is not base64 or not
    /// UTF-8, and [`CursorError::Offset`] if it does not hold a plain
    /// decimal integer that fits in `usize`.
    pub fn decode(token: &str) -> Result<Self, CursorError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(token.as_bytes())
            .map_err(|_| CursorError::Encoding)?;
        let text = String::from_utf8(bytes).map_err(|_| CursorError::Encoding)?;

        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CursorError::Offset);
        }
        text.parse().map(Self).map_err(|_| CursorError::Offset)
    }

    /// Resolves an optional token: absent or empty means the start.
    ///
    /// # Errors
    ///
    /// Propagates [`Cursor::decode`] failures for non-empty tokens.
    pub fn from_token(token: Option<&str>) -> Result<Self, CursorError> {
        match token {
            None | Some("") => Ok(Self::START),
            Some(token) => Self::decode(token),
        }
    }
}
