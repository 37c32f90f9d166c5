/// Failure to turn a share token back into state, or to build a share URL.
///
/// [`crate::decode_state`] swallows these; [`crate::try_decode_state`]
/// hands them to callers that want to log the reason.
#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    /// The state could not be serialized to JSON.
    #[error("could not serialize state: {0}")]
    Encode(#[source] serde_json::Error),

    /// The token is not valid base64.
    #[error("share token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded bytes are not UTF-8.
    #[error("share token does not decode to UTF-8 text: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The decoded text is not the expected JSON document.
    #[error("share token does not hold valid state JSON: {0}")]
    Json(#[source] serde_json::Error),

    /// The base URL could not be parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// An unknown name was given for one of the string-backed enums
/// (block type, mode, layout mode, color scheme).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        ParseEnumError {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}
