use mockup_core::onboarding::{is_last, progress_percent, SLIDES};
use mockup_core::ColorScheme;
use serde_json::json;

use super::workspace::print_theme;
use super::Context;
use crate::OutputFormat;

/// Show, set or toggle the light/dark preference. Also prints the palette
/// saved by the last generation.
pub(crate) fn cmd_theme(ctx: &Context, scheme: Option<ColorScheme>, toggle: bool) {
    let session = super::open_session(ctx);
    let persistence = &session.persistence;

    let current = ctx
        .unwrap_or_fail(persistence.load_color_scheme())
        .unwrap_or_default();
    let next = match (scheme, toggle) {
        (_, true) => current.toggled(),
        (Some(scheme), false) => scheme,
        (None, false) => current,
    };
    if next != current || scheme.is_some() {
        ctx.unwrap_or_fail(persistence.save_color_scheme(next));
    }
    let vars = ctx.unwrap_or_fail(persistence.load_theme_vars());

    match ctx.output {
        OutputFormat::Json => ctx.print_json(&json!({ "scheme": next, "vars": vars })),
        OutputFormat::Text => {
            if ctx.quiet {
                return;
            }
            println!("Scheme: {}", next.as_str());
            if let Some(vars) = &vars {
                print_theme(vars);
            }
        }
    }
}

/// Print the walkthrough. `--done` records that it was completed.
pub(crate) fn cmd_onboarding(ctx: &Context, done: bool) {
    let session = super::open_session(ctx);
    let persistence = &session.persistence;
    if done {
        ctx.unwrap_or_fail(persistence.mark_onboarded());
    }
    let onboarded = ctx.unwrap_or_fail(persistence.has_onboarded());

    match ctx.output {
        OutputFormat::Json => {
            let slides: Vec<serde_json::Value> = SLIDES
                .iter()
                .enumerate()
                .map(|(step, slide)| {
                    json!({
                        "title": slide.title,
                        "text": slide.text,
                        "emoji": slide.emoji,
                        "progress": progress_percent(step),
                    })
                })
                .collect();
            ctx.print_json(&json!({ "onboarded": onboarded, "slides": slides }));
        }
        OutputFormat::Text => {
            if ctx.quiet {
                return;
            }
            for (step, slide) in SLIDES.iter().enumerate() {
                println!(
                    "[{}/{} {:>3}%] {} {}",
                    step + 1,
                    SLIDES.len(),
                    progress_percent(step),
                    slide.emoji,
                    slide.title
                );
                println!("    {}", slide.text);
                if is_last(step) {
                    println!();
                }
            }
            if onboarded {
                println!("Onboarding completed.");
            } else {
                println!("Run `mockup onboarding --done` to skip this next time.");
            }
        }
    }
}
