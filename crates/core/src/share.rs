//! Share tokens: state serialized to JSON, then base64 over its UTF-8
//! bytes, carried in the `s` query parameter of a share link.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::ShareError;
use crate::types::SavedState;

/// Query parameter holding the share token.
pub const SHARE_PARAM: &str = "s";

/// Standard alphabet; padding written on encode, optional on decode.
const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode any serializable value as a share token.
pub fn encode_state<T: Serialize + ?Sized>(value: &T) -> Result<String, ShareError> {
    let json = serde_json::to_string(value).map_err(ShareError::Encode)?;
    Ok(TOKEN_ENGINE.encode(json.as_bytes()))
}

/// Decode a share token, reporting why it failed.
pub fn try_decode_state<T: DeserializeOwned>(token: &str) -> Result<T, ShareError> {
    let bytes = TOKEN_ENGINE.decode(token.trim())?;
    let json = String::from_utf8(bytes)?;
    serde_json::from_str(&json).map_err(ShareError::Json)
}

/// Decode a share token; any malformed input yields `None`.
pub fn decode_state<T: DeserializeOwned>(token: &str) -> Option<T> {
    try_decode_state(token).ok()
}

/// `base` with its `s` parameter set to the encoded state. Other query
/// parameters are kept; an existing `s` is replaced.
pub fn build_share_url(base: &str, state: &SavedState) -> Result<Url, ShareError> {
    let token = encode_state(state)?;
    let mut url = strip_share_param(base)?;
    url.query_pairs_mut().append_pair(SHARE_PARAM, &token);
    Ok(url)
}

/// The share token carried by `url`, if it parses and has one.
pub fn share_token_from_url(url: &str) -> Option<String> {
    let url = Url::parse(url).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == SHARE_PARAM)
        .map(|(_, value)| value.into_owned())
}

/// `url` without its share parameter.
pub fn strip_share_param(url: &str) -> Result<Url, ShareError> {
    let mut parsed = Url::parse(url)?;
    let kept: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(key, _)| key != SHARE_PARAM)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    if kept.is_empty() {
        parsed.set_query(None);
    } else {
        parsed.query_pairs_mut().clear().extend_pairs(kept);
    }
    Ok(parsed)
}
