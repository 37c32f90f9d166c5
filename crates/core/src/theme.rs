//! Theme picking: map the idea text to one of a few fixed palettes.
//!
//! Topics are checked in a fixed priority order and the first topic whose
//! keywords appear in the text wins, so "finance santé" gets the finance
//! palette. Text with no known topic gets [`DEFAULT_PALETTE`].

use crate::rules::{first_match, KeywordRule};
use crate::types::ThemeTokens;

/// A named palette of OKLCH color strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub primary: &'static str,
    pub grad_from: &'static str,
    pub grad_mid: &'static str,
    pub grad_to: &'static str,
}

impl Palette {
    pub fn tokens(&self) -> ThemeTokens {
        ThemeTokens {
            primary: self.primary.to_string(),
            grad_from: self.grad_from.to_string(),
            grad_mid: self.grad_mid.to_string(),
            grad_to: self.grad_to.to_string(),
        }
    }
}

/// Energetic violet, used when no topic matches.
pub const DEFAULT_PALETTE: Palette = Palette {
    name: "default",
    primary: "oklch(62% 0.23 280)",
    grad_from: "oklch(62% 0.23 280)",
    grad_mid: "oklch(58% 0.20 320)",
    grad_to: "oklch(56% 0.19 30)",
};

/// Topic rules in priority order.
pub const THEME_RULES: &[KeywordRule<Palette>] = &[
    KeywordRule::new(
        &["finance", "budget", "banque", "invest", "trading", "fintech"],
        Palette {
            name: "finance",
            primary: "oklch(60% 0.14 160)",
            grad_from: "oklch(62% 0.16 160)",
            grad_mid: "oklch(58% 0.14 180)",
            grad_to: "oklch(55% 0.12 140)",
        },
    ),
    KeywordRule::new(
        &["santé", "health", "bien-être", "wellness", "médical", "care"],
        Palette {
            name: "health",
            primary: "oklch(65% 0.12 230)",
            grad_from: "oklch(68% 0.14 230)",
            grad_mid: "oklch(64% 0.12 250)",
            grad_to: "oklch(60% 0.10 210)",
        },
    ),
    KeywordRule::new(
        &["éducation", "cours", "learning", "learn", "school", "formation"],
        Palette {
            name: "education",
            primary: "oklch(60% 0.20 270)",
            grad_from: "oklch(62% 0.21 270)",
            grad_mid: "oklch(58% 0.19 300)",
            grad_to: "oklch(56% 0.17 240)",
        },
    ),
    KeywordRule::new(
        &["recette", "food", "cuisine", "restaurant", "meal", "calorie"],
        Palette {
            name: "food",
            primary: "oklch(70% 0.18 60)",
            grad_from: "oklch(72% 0.20 50)",
            grad_mid: "oklch(68% 0.18 30)",
            grad_to: "oklch(64% 0.16 80)",
        },
    ),
    KeywordRule::new(
        &["voyage", "travel", "trip", "vol", "hotel", "itinéraire"],
        Palette {
            name: "travel",
            primary: "oklch(70% 0.14 210)",
            grad_from: "oklch(72% 0.16 210)",
            grad_mid: "oklch(68% 0.13 250)",
            grad_to: "oklch(72% 0.10 85)",
        },
    ),
    KeywordRule::new(
        &["fitness", "workout", "sport", "run", "yoga", "gym"],
        Palette {
            name: "fitness",
            primary: "oklch(75% 0.17 150)",
            grad_from: "oklch(76% 0.18 150)",
            grad_mid: "oklch(70% 0.16 175)",
            grad_to: "oklch(68% 0.12 120)",
        },
    ),
    KeywordRule::new(
        &["gaming", "jeu", "stream", "twitch", "e-sport", "entertainment"],
        Palette {
            name: "gaming",
            primary: "oklch(65% 0.24 320)",
            grad_from: "oklch(68% 0.24 320)",
            grad_mid: "oklch(60% 0.20 280)",
            grad_to: "oklch(58% 0.18 340)",
        },
    ),
    KeywordRule::new(
        &["nature", "écologie", "environnement", "plante", "jardin"],
        Palette {
            name: "nature",
            primary: "oklch(70% 0.12 140)",
            grad_from: "oklch(72% 0.14 140)",
            grad_mid: "oklch(66% 0.10 120)",
            grad_to: "oklch(68% 0.11 180)",
        },
    ),
];

/// The palette for `text`. Case-insensitive; total over all strings.
pub fn pick_palette(text: &str) -> &'static Palette {
    let lowered = text.to_lowercase();
    first_match(THEME_RULES, &lowered).unwrap_or(&DEFAULT_PALETTE)
}

/// Theme tokens for `text`.
pub fn pick_theme(text: &str) -> ThemeTokens {
    pick_palette(text).tokens()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_gets_default() {
        assert_eq!(pick_palette("").name, "default");
        assert_eq!(pick_theme(""), DEFAULT_PALETTE.tokens());
    }

    #[test]
    fn unknown_topic_gets_default() {
        assert_eq!(pick_palette("une app pour compter les moutons").name, "default");
    }

    #[test]
    fn finance_beats_health() {
        assert_eq!(pick_palette("santé et finance").name, "finance");
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(pick_palette("My RESTAURANT app").name, "food");
        assert_eq!(pick_palette("SANTÉ").name, "health");
    }

    #[test]
    fn priority_order_is_fixed() {
        let names: Vec<&str> = THEME_RULES.iter().map(|r| r.result.name).collect();
        assert_eq!(
            names,
            vec![
                "finance",
                "health",
                "education",
                "food",
                "travel",
                "fitness",
                "gaming",
                "nature"
            ]
        );
    }

    #[test]
    fn substring_hits_count() {
        // "run" hides inside "brunch"; substring matching is intended.
        assert_eq!(pick_palette("brunch spots").name, "fitness");
        // "care" inside "careers" lands on health before education's "school".
        assert_eq!(pick_palette("school careers").name, "health");
    }

    #[test]
    fn each_topic_reachable() {
        let cases = [
            ("budget perso", "finance"),
            ("wellness tracker", "health"),
            ("cours de piano", "education"),
            ("meal planner", "food"),
            ("itinéraire de voyage", "travel"),
            ("yoga daily", "fitness"),
            ("twitch companion", "gaming"),
            ("mon jardin", "nature"),
        ];
        for (text, expected) in cases {
            assert_eq!(pick_palette(text).name, expected, "text: {text}");
        }
    }
}
