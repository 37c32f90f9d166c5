//! First-visit walkthrough content.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub title: &'static str,
    pub text: &'static str,
    pub emoji: &'static str,
}

pub const SLIDES: [Slide; 5] = [
    Slide {
        title: "Bienvenue 👋",
        text: "Décris ton idée d’app en langage naturel. On transforme ton texte en une maquette interactive.",
        emoji: "✨",
    },
    Slide {
        title: "Tape ton idée",
        text: "Explique simplement : fonctionnalités, public visé, écran d’accueil, liste, carte, formulaire… Pas besoin de jargon.",
        emoji: "📝",
    },
    Slide {
        title: "Génère un mockup",
        text: "Clique sur “Générer”. Nous créons une structure d’écran (header, hero, listes, cartes, formulaires…).",
        emoji: "⚡",
    },
    Slide {
        title: "Itère rapidement",
        text: "Affinage en un clic : ajoute une section, remplace une liste par un feed, mets l’emphase sur un grid de cartes, etc.",
        emoji: "🛠️",
    },
    Slide {
        title: "Prêt à prototyper",
        text: "Aperçu responsive, thème clair/sombre et export JSON pour réutiliser ailleurs. Lance-toi !",
        emoji: "🚀",
    },
];

/// Progress bar value for a zero-based step, in whole percent.
/// Steps past the end count as complete.
pub fn progress_percent(step: usize) -> u8 {
    let shown = (step + 1).min(SLIDES.len());
    ((shown * 100 + SLIDES.len() / 2) / SLIDES.len()) as u8
}

pub fn is_last(step: usize) -> bool {
    step + 1 >= SLIDES.len()
}
