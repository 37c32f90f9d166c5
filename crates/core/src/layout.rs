//! Desktop grid spans and list reordering for the preview canvas.

use crate::types::{BlockType, UiBlock};

/// Column counts offered by the inspector, widest first.
pub const COLUMN_CHOICES: [i64; 7] = [12, 9, 8, 6, 4, 3, 2];

const FULL_SPAN: &str = "md:col-span-12";
const HALF_SPAN: &str = "md:col-span-6";

/// Tailwind span class for a column count. Unsupported or missing counts
/// get the full width.
pub fn col_span_class(cols: Option<i64>) -> &'static str {
    match cols.unwrap_or(12) {
        12 => FULL_SPAN,
        9 => "md:col-span-9",
        8 => "md:col-span-8",
        6 => HALF_SPAN,
        4 => "md:col-span-4",
        3 => "md:col-span-3",
        2 => "md:col-span-2",
        _ => FULL_SPAN,
    }
}

/// Span used in the desktop frame: the block's own `cols` if set,
/// otherwise a per-type default so every block stays visible.
pub fn desktop_span(block: &UiBlock) -> &'static str {
    if block.cols.is_some() {
        return col_span_class(block.cols);
    }
    match block.block_type {
        BlockType::Header
        | BlockType::Hero
        | BlockType::Detail
        | BlockType::CtaBar
        | BlockType::CardGrid => FULL_SPAN,
        BlockType::Form | BlockType::List | BlockType::Search => HALF_SPAN,
    }
}

/// Copy of `items` with the element at `from` relocated to `to`.
///
/// An out-of-range `from` returns an unchanged copy; `to` is clamped to
/// the end of the list.
pub fn move_item<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut next = items.to_vec();
    if from >= next.len() {
        return next;
    }
    let item = next.remove(from);
    let to = to.min(next.len());
    next.insert(to, item);
    next
}
