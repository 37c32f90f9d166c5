//! Page-level mockup state: the idea, its blocks, the selected block and
//! the preview layout.
//!
//! Every edit a user can make from the composer, the inspector or the
//! desktop reorder controls is a method here. Persistence is the caller's
//! job: read [`Workspace::saved_state`] after a change and hand it to a
//! store.

use crate::generate::generate_blocks;
use crate::layout::move_item;
use crate::share::decode_state;
use crate::types::{
    BlockPatch, BlockType, GeneratePayload, LayoutMode, Mode, SavedState, ThemeTokens, UiBlock,
};

/// Composer input limit, in characters.
pub const MAX_IDEA_CHARS: usize = 1000;

/// Blocks shown before anything has been generated.
pub fn bootstrap_blocks() -> Vec<UiBlock> {
    vec![
        UiBlock::new("hdr", BlockType::Header)
            .with_title("App Name")
            .with_cols(12)
            .with_order(0),
        UiBlock::new("hero", BlockType::Hero)
            .with_title("Bienvenue")
            .with_description("Pitch court")
            .with_cols(12)
            .with_order(1),
        UiBlock::new("search", BlockType::Search)
            .with_title("Recherche / Scanner")
            .with_cols(12)
            .with_order(2),
        UiBlock::new("list", BlockType::List)
            .with_title("Liste")
            .with_cols(12)
            .with_order(3),
        UiBlock::new("cta", BlockType::CtaBar)
            .with_title("Action principale")
            .with_cols(12)
            .with_order(99),
    ]
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workspace {
    idea: String,
    blocks: Vec<UiBlock>,
    selected_id: Option<String>,
    layout_mode: LayoutMode,
}

impl Workspace {
    /// An empty workspace: no idea, no blocks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore saved or shared state. The idea is kept as is; only the
    /// composer input is capped.
    pub fn from_state(state: SavedState) -> Self {
        Workspace {
            idea: state.idea,
            blocks: state.blocks,
            ..Workspace::default()
        }
    }

    /// Initial state on load.
    ///
    /// A share token, when given, takes precedence over stored state even if
    /// it fails to decode. Whatever source is used, an empty block list is
    /// replaced by [`bootstrap_blocks`].
    pub fn hydrate(share_token: Option<&str>, stored: Option<SavedState>) -> Self {
        let state = match share_token {
            Some(token) => {
                let decoded = decode_state::<SavedState>(token);
                if decoded.is_none() {
                    tracing::warn!("ignoring malformed share token");
                }
                decoded.unwrap_or_default()
            }
            None => stored.unwrap_or_default(),
        };
        let mut workspace = Workspace::from_state(state);
        if workspace.blocks.is_empty() {
            workspace.blocks = bootstrap_blocks();
        }
        workspace
    }

    pub fn idea(&self) -> &str {
        &self.idea
    }

    /// Replace the idea text, truncated to [`MAX_IDEA_CHARS`].
    pub fn set_idea(&mut self, idea: &str) {
        self.idea = idea.chars().take(MAX_IDEA_CHARS).collect();
    }

    pub fn blocks(&self) -> &[UiBlock] {
        &self.blocks
    }

    pub fn has_results(&self) -> bool {
        !self.blocks.is_empty()
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout_mode
    }

    pub fn set_layout_mode(&mut self, mode: LayoutMode) {
        self.layout_mode = mode;
    }

    pub fn shows_mobile(&self) -> bool {
        matches!(self.layout_mode, LayoutMode::Mobile | LayoutMode::Both)
    }

    pub fn shows_desktop(&self) -> bool {
        matches!(self.layout_mode, LayoutMode::Desktop | LayoutMode::Both)
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Select a block by id. Unknown ids clear the selection.
    pub fn select(&mut self, id: Option<&str>) {
        self.selected_id = id
            .filter(|id| self.blocks.iter().any(|b| b.id == *id))
            .map(str::to_string);
    }

    pub fn selected(&self) -> Option<&UiBlock> {
        let id = self.selected_id.as_deref()?;
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Merge `patch` into the selected block. Returns false when nothing
    /// is selected.
    pub fn update_selected(&mut self, patch: BlockPatch) -> bool {
        let Some(id) = self.selected_id.as_deref() else {
            return false;
        };
        match self.blocks.iter_mut().find(|b| b.id == id) {
            Some(block) => {
                block.apply_patch(patch);
                true
            }
            None => false,
        }
    }

    /// Remove the selected block and clear the selection.
    pub fn delete_selected(&mut self) -> Option<UiBlock> {
        let id = self.selected_id.take()?;
        let index = self.blocks.iter().position(|b| b.id == id)?;
        Some(self.blocks.remove(index))
    }

    /// Relocate the block at `from` to `to`.
    pub fn move_block(&mut self, from: usize, to: usize) {
        self.blocks = move_item(&self.blocks, from, to);
    }

    /// Move the block at `index` one slot up. No-op for the first block.
    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.blocks.len() {
            return false;
        }
        self.move_block(index, index - 1);
        true
    }

    /// Move the block at `index` one slot down. No-op for the last block.
    pub fn move_down(&mut self, index: usize) -> bool {
        if index >= self.blocks.len() || index + 1 == self.blocks.len() {
            return false;
        }
        self.move_block(index, index + 1);
        true
    }

    /// Take a generation result: replace the blocks, drop the selection
    /// and hand back the theme for the caller to apply.
    pub fn apply_generated(&mut self, payload: GeneratePayload) -> Option<ThemeTokens> {
        self.blocks = payload.blocks;
        self.selected_id = None;
        payload.theme
    }

    /// Run the generator against the current idea and blocks.
    pub fn generate(&mut self, refine: Option<&str>, mode: Mode) -> Option<ThemeTokens> {
        let payload = generate_blocks(&self.idea, refine.unwrap_or(""), &self.blocks, mode);
        self.apply_generated(payload)
    }

    /// Reset idea, blocks and selection. The layout mode is kept.
    pub fn clear(&mut self) {
        self.idea.clear();
        self.blocks.clear();
        self.selected_id = None;
    }

    pub fn saved_state(&self) -> SavedState {
        SavedState {
            idea: self.idea.clone(),
            blocks: self.blocks.clone(),
        }
    }

    /// Pretty-printed `{ idea, blocks }`, the `mockup.json` export.
    pub fn export_json(&self) -> String {
        // SavedState holds only strings, numbers and JSON maps.
        serde_json::to_string_pretty(&self.saved_state()).unwrap_or_default()
    }
}
