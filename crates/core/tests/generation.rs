//! Behavioral tests for block generation and theme picking.
//!
//! Covers the documented scenarios (recipes idea, signup refine) and the
//! list-level guarantees that must hold for any input: no similar
//! duplicates, a single call-to-action bar, and orders equal to positions.

use mockup_core::theme::THEME_RULES;
use mockup_core::{
    generate_blocks, generate_blocks_with_rng, pick_palette, pick_theme, BlockType,
    GeneratePayload, Mode, UiBlock, DEFAULT_PALETTE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ──────────────────────────────────────────────
// Fixtures
// ──────────────────────────────────────────────

const SAMPLE_TEXTS: &[&str] = &[
    "",
    "   ",
    "Je veux une app de recettes avec une liste de recettes",
    "ajouter un formulaire d'inscription",
    "landing page avec hero, search, cards et grid",
    "feed d'articles, emphase sur les cartes, login et signup",
    "fiche détail du profil détaillé",
    "budget santé voyage gaming",
    "TASKS WORKOUTS FORM",
    "une app pour compter les moutons",
];

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn run(idea: &str, refine: &str, prev: &[UiBlock], mode: Mode) -> GeneratePayload {
    generate_blocks_with_rng(idea, refine, prev, mode, &mut seeded(1))
}

fn titles_of(payload: &GeneratePayload, block_type: BlockType) -> Vec<String> {
    payload
        .blocks
        .iter()
        .filter(|b| b.block_type == block_type)
        .map(|b| b.title.clone().unwrap_or_default())
        .collect()
}

fn assert_list_invariants(payload: &GeneratePayload) {
    let ctas = payload
        .blocks
        .iter()
        .filter(|b| b.block_type == BlockType::CtaBar)
        .count();
    assert_eq!(ctas, 1, "exactly one CTA_BAR: {:?}", payload.blocks);

    for (index, block) in payload.blocks.iter().enumerate() {
        assert_eq!(block.order, Some(index as i64), "order of {}", block.id);
    }

    let mut keys: Vec<(BlockType, String)> = payload
        .blocks
        .iter()
        .map(|b| {
            (
                b.block_type,
                b.title.as_deref().unwrap_or("").to_lowercase(),
            )
        })
        .collect();
    let total = keys.len();
    keys.sort_by(|a, b| a.0.as_str().cmp(b.0.as_str()).then(a.1.cmp(&b.1)));
    keys.dedup();
    assert_eq!(keys.len(), total, "duplicate (type, title) pair");
}

// ──────────────────────────────────────────────
// 1. Scenarios
// ──────────────────────────────────────────────

#[test]
fn recipes_idea_builds_list_and_food_theme() {
    let payload = run(
        "Je veux une app de recettes avec une liste de recettes",
        "",
        &[],
        Mode::Append,
    );

    let types: Vec<BlockType> = payload.blocks.iter().map(|b| b.block_type).collect();
    assert!(types.contains(&BlockType::Header));
    assert!(types.contains(&BlockType::CtaBar));
    assert_eq!(titles_of(&payload, BlockType::List), vec!["Liste"]);
    assert_eq!(payload.theme, Some(pick_palette("recette").tokens()));
    assert_eq!(pick_palette("recette").name, "food");
}

#[test]
fn signup_refine_adds_form_once() {
    let prev = vec![
        UiBlock::new("hdr", BlockType::Header)
            .with_title("App Name")
            .with_order(0),
        UiBlock::new("cta", BlockType::CtaBar)
            .with_title("Action principale")
            .with_order(1),
    ];

    let first = run("", "ajouter un formulaire d'inscription", &prev, Mode::Append);
    assert_eq!(titles_of(&first, BlockType::Form), vec!["Formulaire"]);

    let second = run(
        "",
        "ajouter un formulaire d'inscription",
        &first.blocks,
        Mode::Append,
    );
    assert_eq!(titles_of(&second, BlockType::Form), vec!["Formulaire"]);
    assert_eq!(second.blocks.len(), first.blocks.len());
}

#[test]
fn successive_refines_accumulate() {
    let first = run("app de voyage", "", &[], Mode::Append);
    let second = run("app de voyage", "ajouter un feed d’articles", &first.blocks, Mode::Append);
    let third = run(
        "app de voyage",
        "mettre l’accent sur les cartes (grid)",
        &second.blocks,
        Mode::Append,
    );

    assert_eq!(
        titles_of(&third, BlockType::List),
        vec!["Liste", "Feed d’articles"]
    );
    assert_eq!(
        titles_of(&third, BlockType::CardGrid),
        vec!["Cartes", "Cartes (emphase)"]
    );
    assert_eq!(third.blocks[0].id, "hdr");
    assert_list_invariants(&third);
}

#[test]
fn replace_starts_from_single_header() {
    let prev = run("landing search liste cards", "", &[], Mode::Append).blocks;
    let payload = run("", "", &prev, Mode::Replace);
    assert_eq!(payload.blocks[0].block_type, BlockType::Header);
    assert_eq!(payload.blocks[0].title.as_deref(), Some("App Name"));
    assert_eq!(payload.blocks.len(), 2);
}

#[test]
fn append_with_empty_prev_matches_replace() {
    let append = run("un hero", "", &[], Mode::Append);
    let replace = run("un hero", "", &[], Mode::Replace);
    assert_eq!(append, replace);
}

// ──────────────────────────────────────────────
// 2. List invariants over many inputs
// ──────────────────────────────────────────────

#[test]
fn invariants_hold_for_sample_texts() {
    for (i, idea) in SAMPLE_TEXTS.iter().enumerate() {
        for refine in SAMPLE_TEXTS {
            for mode in [Mode::Append, Mode::Replace] {
                let fresh = generate_blocks_with_rng(idea, refine, &[], mode, &mut seeded(i as u64));
                assert_list_invariants(&fresh);

                let again =
                    generate_blocks_with_rng(idea, refine, &fresh.blocks, mode, &mut seeded(99));
                assert_list_invariants(&again);
            }
        }
    }
}

#[test]
fn generation_does_not_touch_input() {
    let prev = vec![
        UiBlock::new("a", BlockType::Detail)
            .with_title("X")
            .with_order(42),
    ];
    let snapshot = prev.clone();
    let _ = generate_blocks("liste", "feed", &prev, Mode::Append);
    assert_eq!(prev, snapshot);
}

#[test]
fn existing_cta_is_kept_not_duplicated() {
    let prev = vec![UiBlock::new("mine", BlockType::CtaBar).with_title("Commander")];
    let payload = run("landing", "", &prev, Mode::Append);
    let cta: Vec<&UiBlock> = payload
        .blocks
        .iter()
        .filter(|b| b.block_type == BlockType::CtaBar)
        .collect();
    assert_eq!(cta.len(), 1);
    assert_eq!(cta[0].id, "mine");
}

// ──────────────────────────────────────────────
// 3. Theme
// ──────────────────────────────────────────────

#[test]
fn theme_without_keyword_is_default() {
    for text in ["", "bonjour", "une app pour compter les moutons", "12345"] {
        assert_eq!(pick_theme(text), DEFAULT_PALETTE.tokens(), "text: {text}");
    }
}

#[test]
fn theme_first_match_wins() {
    assert_eq!(pick_palette("santé finance").name, "finance");
    assert_eq!(pick_palette("jardin gaming").name, "gaming");
    assert_eq!(pick_palette("yoga recette").name, "food");
}

#[test]
fn every_text_gets_exactly_one_known_palette() {
    let known: Vec<_> = THEME_RULES
        .iter()
        .map(|r| r.result.tokens())
        .chain(std::iter::once(DEFAULT_PALETTE.tokens()))
        .collect();
    for text in SAMPLE_TEXTS {
        let theme = pick_theme(text);
        assert_eq!(known.iter().filter(|t| **t == theme).count(), 1);
    }
}
