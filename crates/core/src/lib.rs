//! mockup-core: turns a short app idea into an editable block mockup.
//!
//! The crate is pure and synchronous. It holds the block data model, the
//! keyword rule engine that suggests blocks and picks a color theme, the
//! layout helpers used by the preview, the share-token codec and the
//! page-level workspace state.
//!
//! # Public API
//!
//! - [`generate_blocks()`] -- merge keyword-triggered blocks into a list
//! - [`pick_theme()`] -- first-match-wins palette selection
//! - [`Workspace`] -- idea, blocks, selection and layout mode
//! - [`encode_state()`] / [`decode_state()`] -- share tokens
//! - [`col_span_class()`] / [`move_item()`] -- layout helpers

pub mod error;
pub mod generate;
pub mod layout;
pub mod onboarding;
pub mod rules;
pub mod share;
pub mod theme;
pub mod types;
pub mod workspace;

pub use error::{ParseEnumError, ShareError};
pub use generate::{
    default_header, generate_blocks, generate_blocks_with_rng, has_similar, CTA_SENTINEL_ORDER,
    DEFAULT_COLS,
};
pub use layout::{col_span_class, desktop_span, move_item, COLUMN_CHOICES};
pub use share::{
    build_share_url, decode_state, encode_state, share_token_from_url, strip_share_param,
    try_decode_state, SHARE_PARAM,
};
pub use theme::{pick_palette, pick_theme, Palette, DEFAULT_PALETTE};
pub use types::{
    BlockData, BlockPatch, BlockType, ColorScheme, GeneratePayload, LayoutMode, Mode, SavedState,
    ThemeTokens, UiBlock,
};
pub use workspace::{bootstrap_blocks, Workspace, MAX_IDEA_CHARS};
