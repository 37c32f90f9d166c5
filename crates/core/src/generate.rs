//! Block generation.
//!
//! The idea and the refine command are joined, lower-cased and matched
//! against two ordered rule tables. Each hit proposes a block built from a
//! template; a proposal is kept only if no similar block is already in the
//! list (see [`has_similar`]). A call-to-action bar is always present, and
//! block orders are renumbered to list positions at the end.

use rand::Rng;

use crate::rules::{all_matches, KeywordRule};
use crate::theme::pick_theme;
use crate::types::{BlockData, BlockType, GeneratePayload, Mode, UiBlock};

/// Grid span given to every generated block unless its template says otherwise.
pub const DEFAULT_COLS: i64 = 12;

/// Order given to a freshly added call-to-action bar before renumbering.
pub const CTA_SENTINEL_ORDER: i64 = 99;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 6;

/// Fields a rule stamps onto a new block.
#[derive(Debug)]
struct BlockTemplate {
    block_type: BlockType,
    title: &'static str,
    description: Option<&'static str>,
    cols: Option<i64>,
    order: Option<i64>,
    data_cols: Option<i64>,
}

impl BlockTemplate {
    const fn titled(block_type: BlockType, title: &'static str) -> Self {
        BlockTemplate {
            block_type,
            title,
            description: None,
            cols: None,
            order: None,
            data_cols: None,
        }
    }

    /// Build the block that would sit at `len` in a list of that length.
    fn instantiate(&self, id: String, len: usize) -> UiBlock {
        let mut block = UiBlock::new(id, self.block_type)
            .with_title(self.title)
            .with_cols(self.cols.unwrap_or(DEFAULT_COLS))
            .with_order(self.order.unwrap_or(len as i64 + 1));
        if let Some(description) = self.description {
            block = block.with_description(description);
        }
        if let Some(cols) = self.data_cols {
            let mut data = BlockData::new();
            data.insert("cols".to_string(), serde_json::Value::from(cols));
            block = block.with_data(data);
        }
        block
    }
}

/// Intent rules, applied first.
const INTENT_RULES: &[KeywordRule<BlockTemplate>] = &[
    KeywordRule::new(
        &["accueil", "hero", "landing"],
        BlockTemplate {
            description: Some("Pitch court"),
            ..BlockTemplate::titled(BlockType::Hero, "Bienvenue")
        },
    ),
    KeywordRule::new(
        &["recherche", "search", "scanner", "scan"],
        BlockTemplate::titled(BlockType::Search, "Rechercher / Scanner"),
    ),
    KeywordRule::new(
        &[
            "liste", "feed", "fil", "articles", "recettes", "workouts", "tasks",
        ],
        BlockTemplate::titled(BlockType::List, "Liste"),
    ),
    KeywordRule::new(
        &["carte", "grid", "cards"],
        BlockTemplate {
            data_cols: Some(2),
            ..BlockTemplate::titled(BlockType::CardGrid, "Cartes")
        },
    ),
    KeywordRule::new(
        &[
            "form",
            "formulaire",
            "inscription",
            "profil",
            "ajouter",
            "nouveau",
        ],
        BlockTemplate::titled(BlockType::Form, "Formulaire"),
    ),
    KeywordRule::new(
        &["détail", "detail", "fiche", "profil détaillé"],
        BlockTemplate::titled(BlockType::Detail, "Détail"),
    ),
];

const CTA_TEMPLATE: BlockTemplate = BlockTemplate {
    order: Some(CTA_SENTINEL_ORDER),
    ..BlockTemplate::titled(BlockType::CtaBar, "Action principale")
};

/// Refinement rules, applied after the call-to-action bar. They read the
/// same combined text as the intent rules, so they also fire on a first
/// generation.
const REFINE_RULES: &[KeywordRule<BlockTemplate>] = &[
    KeywordRule::new(
        &["feed", "articles"],
        BlockTemplate::titled(BlockType::List, "Feed d’articles"),
    ),
    KeywordRule::new(
        &["emphase", "cartes", "grid"],
        BlockTemplate {
            cols: Some(12),
            ..BlockTemplate::titled(BlockType::CardGrid, "Cartes (emphase)")
        },
    ),
    KeywordRule::new(
        &["auth", "login", "signup", "s'inscrire"],
        BlockTemplate::titled(BlockType::Form, "Inscription / Connexion"),
    ),
];

/// The lone header every fresh mockup starts from.
pub fn default_header() -> UiBlock {
    UiBlock::new("hdr", BlockType::Header)
        .with_title("App Name")
        .with_cols(DEFAULT_COLS)
        .with_order(0)
}

/// True if `blocks` already holds a block similar to the probe.
///
/// Types must match. A probe with a non-empty title also needs a block
/// whose title is equal ignoring case; an untitled block never matches a
/// titled probe. A probe without a title matches any block of its type.
pub fn has_similar(blocks: &[UiBlock], block_type: BlockType, title: Option<&str>) -> bool {
    let probe = title.filter(|t| !t.is_empty()).map(str::to_lowercase);
    blocks.iter().any(|b| {
        b.block_type == block_type
            && match &probe {
                Some(wanted) => b.title.as_deref().map(str::to_lowercase).as_ref() == Some(wanted),
                None => true,
            }
    })
}

/// Generate blocks with thread-local randomness for ids.
pub fn generate_blocks(idea: &str, refine: &str, prev: &[UiBlock], mode: Mode) -> GeneratePayload {
    generate_blocks_with_rng(idea, refine, prev, mode, &mut rand::thread_rng())
}

/// Generate blocks, drawing id suffixes from `rng`.
///
/// `prev` is never modified; the returned list holds copies.
pub fn generate_blocks_with_rng<R: Rng + ?Sized>(
    idea: &str,
    refine: &str,
    prev: &[UiBlock],
    mode: Mode,
    rng: &mut R,
) -> GeneratePayload {
    let text = format!("{} {}", idea, refine).to_lowercase();
    let text = text.trim();
    let theme = pick_theme(text);

    let mut blocks: Vec<UiBlock> = match mode {
        Mode::Append if !prev.is_empty() => prev.to_vec(),
        _ => vec![default_header()],
    };

    for template in all_matches(INTENT_RULES, text) {
        push_if_new(&mut blocks, template, rng);
    }

    if !blocks.iter().any(|b| b.block_type == BlockType::CtaBar) {
        push_if_new(&mut blocks, &CTA_TEMPLATE, rng);
    }

    for template in all_matches(REFINE_RULES, text) {
        push_if_new(&mut blocks, template, rng);
    }

    for (index, block) in blocks.iter_mut().enumerate() {
        block.order = Some(index as i64);
    }

    tracing::debug!(
        mode = mode.as_str(),
        prev = prev.len(),
        blocks = blocks.len(),
        "generated blocks"
    );

    GeneratePayload {
        blocks,
        theme: Some(theme),
    }
}

fn push_if_new<R: Rng + ?Sized>(blocks: &mut Vec<UiBlock>, template: &BlockTemplate, rng: &mut R) {
    if has_similar(blocks, template.block_type, Some(template.title)) {
        tracing::trace!(block_type = %template.block_type, title = template.title, "skipped similar block");
        return;
    }
    let id = block_id(template.block_type, rng);
    let block = template.instantiate(id, blocks.len());
    blocks.push(block);
}

/// `<type prefix>-<6 base-36 chars>`.
fn block_id<R: Rng + ?Sized>(block_type: BlockType, rng: &mut R) -> String {
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("{}-{}", block_type.id_prefix(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run(idea: &str, refine: &str, prev: &[UiBlock], mode: Mode) -> GeneratePayload {
        let mut rng = StdRng::seed_from_u64(7);
        generate_blocks_with_rng(idea, refine, prev, mode, &mut rng)
    }

    fn types(payload: &GeneratePayload) -> Vec<BlockType> {
        payload.blocks.iter().map(|b| b.block_type).collect()
    }

    #[test]
    fn empty_input_yields_header_and_cta() {
        let payload = run("", "", &[], Mode::Append);
        assert_eq!(types(&payload), vec![BlockType::Header, BlockType::CtaBar]);
        assert_eq!(payload.blocks[0].id, "hdr");
        assert_eq!(payload.blocks[1].order, Some(1));
    }

    #[test]
    fn cta_sentinel_order_is_renumbered() {
        let payload = run("landing", "", &[], Mode::Append);
        let cta = payload
            .blocks
            .iter()
            .find(|b| b.block_type == BlockType::CtaBar)
            .unwrap();
        assert_eq!(cta.order, Some(2));
    }

    #[test]
    fn hero_template_fields() {
        let payload = run("page d'accueil", "", &[], Mode::Append);
        let hero = &payload.blocks[1];
        assert_eq!(hero.block_type, BlockType::Hero);
        assert_eq!(hero.title.as_deref(), Some("Bienvenue"));
        assert_eq!(hero.description.as_deref(), Some("Pitch court"));
        assert_eq!(hero.cols, Some(12));
        assert!(hero.id.starts_with("hero-"));
        assert_eq!(hero.id.len(), "hero-".len() + 6);
    }

    #[test]
    fn card_grid_carries_data_cols() {
        let payload = run("des cards", "", &[], Mode::Append);
        let grid = payload
            .blocks
            .iter()
            .find(|b| b.block_type == BlockType::CardGrid)
            .unwrap();
        assert_eq!(grid.title.as_deref(), Some("Cartes"));
        assert_eq!(
            grid.data.as_ref().and_then(|d| d.get("cols")),
            Some(&serde_json::json!(2))
        );
    }

    #[test]
    fn refine_rules_fire_on_first_generation() {
        let payload = run("un feed", "", &[], Mode::Append);
        let titles: Vec<_> = payload
            .blocks
            .iter()
            .map(|b| b.title.as_deref().unwrap_or(""))
            .collect();
        assert_eq!(
            titles,
            vec!["App Name", "Liste", "Action principale", "Feed d’articles"]
        );
    }

    #[test]
    fn replace_discards_previous_blocks() {
        let prev = vec![
            UiBlock::new("x", BlockType::Detail).with_title("Old"),
            UiBlock::new("y", BlockType::CtaBar).with_title("Go"),
        ];
        let payload = run("", "", &prev, Mode::Replace);
        assert_eq!(types(&payload), vec![BlockType::Header, BlockType::CtaBar]);
        assert_eq!(payload.blocks[1].title.as_deref(), Some("Action principale"));
    }

    #[test]
    fn append_keeps_previous_and_existing_cta() {
        let prev = vec![
            UiBlock::new("x", BlockType::Detail).with_title("Old").with_order(5),
            UiBlock::new("y", BlockType::CtaBar).with_title("Go").with_order(99),
        ];
        let payload = run("", "", &prev, Mode::Append);
        assert_eq!(payload.blocks.len(), 2);
        assert_eq!(payload.blocks[0].id, "x");
        assert_eq!(payload.blocks[0].order, Some(0));
        assert_eq!(payload.blocks[1].title.as_deref(), Some("Go"));
        // caller's copy untouched
        assert_eq!(prev[0].order, Some(5));
    }

    #[test]
    fn dedup_ignores_title_case() {
        let prev = vec![UiBlock::new("f", BlockType::Form).with_title("FORMULAIRE")];
        let payload = run("un formulaire", "", &prev, Mode::Append);
        let forms = payload
            .blocks
            .iter()
            .filter(|b| b.block_type == BlockType::Form)
            .count();
        assert_eq!(forms, 1);
    }

    #[test]
    fn has_similar_is_asymmetric() {
        let untitled = vec![UiBlock::new("a", BlockType::List)];
        assert!(has_similar(&untitled, BlockType::List, None));
        assert!(!has_similar(&untitled, BlockType::List, Some("Liste")));

        let titled = vec![UiBlock::new("b", BlockType::List).with_title("Liste")];
        assert!(has_similar(&titled, BlockType::List, None));
        assert!(has_similar(&titled, BlockType::List, Some("")));
        assert!(has_similar(&titled, BlockType::List, Some("LISTE")));
        assert!(!has_similar(&titled, BlockType::Form, Some("Liste")));
    }

    #[test]
    fn auth_keywords_add_signup_form() {
        let payload = run("", "login", &[], Mode::Append);
        assert!(payload
            .blocks
            .iter()
            .any(|b| b.title.as_deref() == Some("Inscription / Connexion")));
    }

    #[test]
    fn theme_follows_combined_text() {
        let payload = run("app", "budget", &[], Mode::Append);
        assert_eq!(payload.theme, Some(crate::theme::THEME_RULES[0].result.tokens()));
    }

    #[test]
    fn ids_are_unique_within_a_call() {
        let payload = run(
            "landing search liste cards formulaire détail feed emphase login",
            "",
            &[],
            Mode::Append,
        );
        let mut ids: Vec<&str> = payload.blocks.iter().map(|b| b.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
