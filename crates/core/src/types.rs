//! Block, theme and workspace data types.
//!
//! Field names and enum spellings match the JSON exchanged with the
//! browser front end, so these types are used directly on the wire and in
//! local storage.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ParseEnumError;

/// Free-form key/value payload attached to a block.
pub type BlockData = serde_json::Map<String, serde_json::Value>;

/// The fixed set of block kinds a mockup is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockType {
    Header,
    Hero,
    Search,
    List,
    CardGrid,
    Form,
    Detail,
    CtaBar,
}

impl BlockType {
    /// Every block type, in inspector order.
    pub const ALL: [BlockType; 8] = [
        BlockType::Header,
        BlockType::Hero,
        BlockType::Search,
        BlockType::List,
        BlockType::CardGrid,
        BlockType::Form,
        BlockType::Detail,
        BlockType::CtaBar,
    ];

    /// Wire spelling, e.g. `CARD_GRID`.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Header => "HEADER",
            BlockType::Hero => "HERO",
            BlockType::Search => "SEARCH",
            BlockType::List => "LIST",
            BlockType::CardGrid => "CARD_GRID",
            BlockType::Form => "FORM",
            BlockType::Detail => "DETAIL",
            BlockType::CtaBar => "CTA_BAR",
        }
    }

    /// Lower-case prefix used for generated block ids, e.g. `card_grid`.
    pub fn id_prefix(self) -> &'static str {
        match self {
            BlockType::Header => "header",
            BlockType::Hero => "hero",
            BlockType::Search => "search",
            BlockType::List => "list",
            BlockType::CardGrid => "card_grid",
            BlockType::Form => "form",
            BlockType::Detail => "detail",
            BlockType::CtaBar => "cta_bar",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for BlockType {
    type Err = ParseEnumError;

    /// Accepts the wire spelling case-insensitively, with `-` or `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        BlockType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| {
                ParseEnumError::new(
                    "block type",
                    s,
                    "HEADER, HERO, SEARCH, LIST, CARD_GRID, FORM, DETAIL, CTA_BAR",
                )
            })
    }
}

/// One visual unit of a mockup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiBlock {
    /// Opaque identifier, unique within a list.
    pub id: String,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Desktop grid span hint (1..=12).
    #[serde(
        default,
        deserialize_with = "lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub cols: Option<i64>,
    /// Display sort key.
    #[serde(
        default,
        deserialize_with = "lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub order: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<BlockData>,
}

impl UiBlock {
    /// A bare block with only an id and a type.
    pub fn new(id: impl Into<String>, block_type: BlockType) -> Self {
        UiBlock {
            id: id.into(),
            block_type,
            title: None,
            description: None,
            hint: None,
            cols: None,
            order: None,
            data: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_cols(mut self, cols: i64) -> Self {
        self.cols = Some(cols);
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_data(mut self, data: BlockData) -> Self {
        self.data = Some(data);
        self
    }

    /// Shallow merge: every field set in `patch` overwrites the block's.
    pub fn apply_patch(&mut self, patch: BlockPatch) {
        if let Some(block_type) = patch.block_type {
            self.block_type = block_type;
        }
        if let Some(title) = patch.title {
            self.title = Some(title);
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(hint) = patch.hint {
            self.hint = Some(hint);
        }
        if let Some(cols) = patch.cols {
            self.cols = Some(cols);
        }
        if let Some(data) = patch.data {
            self.data = Some(data);
        }
    }
}

/// Accept any JSON number for an integer field; non-integral values are
/// read as absent.
fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(number.and_then(|n| {
        n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        })
    }))
}

/// Partial block produced by the inspector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockPatch {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub block_type: Option<BlockType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cols: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<BlockData>,
}

impl BlockPatch {
    pub fn is_empty(&self) -> bool {
        *self == BlockPatch::default()
    }
}

/// Palette applied to the mockup as CSS custom properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTokens {
    pub primary: String,
    pub grad_from: String,
    pub grad_mid: String,
    pub grad_to: String,
}

impl ThemeTokens {
    /// `(custom property, value)` pairs, in the order they are applied.
    pub fn css_vars(&self) -> [(&'static str, &str); 4] {
        [
            ("--primary", self.primary.as_str()),
            ("--grad-from", self.grad_from.as_str()),
            ("--grad-mid", self.grad_mid.as_str()),
            ("--grad-to", self.grad_to.as_str()),
        ]
    }
}

/// Output of one generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratePayload {
    pub blocks: Vec<UiBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeTokens>,
}

/// Generation strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Merge suggestions into the previous blocks.
    #[default]
    Append,
    /// Start over from a lone header.
    Replace,
}

impl Mode {
    /// Anything other than `"replace"` means append.
    pub fn from_wire(value: &str) -> Mode {
        if value == "replace" {
            Mode::Replace
        } else {
            Mode::Append
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Append => "append",
            Mode::Replace => "replace",
        }
    }
}

impl FromStr for Mode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "append" => Ok(Mode::Append),
            "replace" => Ok(Mode::Replace),
            _ => Err(ParseEnumError::new("mode", s, "append, replace")),
        }
    }
}

/// Which preview frames are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    Mobile,
    Desktop,
    #[default]
    Both,
}

impl LayoutMode {
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutMode::Mobile => "mobile",
            LayoutMode::Desktop => "desktop",
            LayoutMode::Both => "both",
        }
    }
}

impl FromStr for LayoutMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" => Ok(LayoutMode::Mobile),
            "desktop" => Ok(LayoutMode::Desktop),
            "both" => Ok(LayoutMode::Both),
            _ => Err(ParseEnumError::new("layout mode", s, "mobile, desktop, both")),
        }
    }
}

/// Light/dark UI preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> ColorScheme {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }
}

impl FromStr for ColorScheme {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            _ => Err(ParseEnumError::new("color scheme", s, "light, dark")),
        }
    }
}

/// What gets persisted, shared and exported: the idea and its blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedState {
    #[serde(default, deserialize_with = "null_as_default")]
    pub idea: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub blocks: Vec<UiBlock>,
}

/// Read an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
