use std::path::Path;

use mockup_core::{
    strip_share_param, BlockPatch, BlockType, LayoutMode, Mode, ThemeTokens, COLUMN_CHOICES,
};
use serde_json::json;

use super::{describe, index_of, open_session, print_blocks, save_session, Context, Session};
use crate::OutputFormat;

/// Inspector fields accepted by `mockup edit`.
pub(crate) struct EditArgs {
    pub(crate) block_type: Option<BlockType>,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) hint: Option<String>,
    pub(crate) cols: Option<i64>,
}

impl EditArgs {
    fn into_patch(self) -> BlockPatch {
        BlockPatch {
            block_type: self.block_type,
            title: self.title,
            description: self.description,
            hint: self.hint,
            cols: self.cols,
            data: None,
        }
    }
}

pub(crate) fn cmd_generate(ctx: &Context, idea: Option<&str>, mode: Mode) {
    let mut session = open_session(ctx);
    if let Some(idea) = idea {
        session.workspace.set_idea(idea);
    }
    run_generation(ctx, &mut session, None, mode);
}

pub(crate) fn cmd_refine(ctx: &Context, text: &str, mode: Mode) {
    if text.trim().is_empty() {
        ctx.fail("refine text is empty");
    }
    let mut session = open_session(ctx);
    run_generation(ctx, &mut session, Some(text), mode);
}

fn run_generation(ctx: &Context, session: &mut Session, refine: Option<&str>, mode: Mode) {
    let theme = session.workspace.generate(refine, mode);
    if let Some(theme) = &theme {
        let result = session.persistence.save_theme_vars(theme);
        ctx.unwrap_or_fail(result);
    }
    save_session(ctx, session);

    match ctx.output {
        OutputFormat::Json => ctx.print_json(&json!({
            "blocks": session.workspace.blocks(),
            "theme": theme,
        })),
        OutputFormat::Text => {
            if ctx.quiet {
                return;
            }
            println!(
                "{} block(s) ({}):",
                session.workspace.blocks().len(),
                mode.as_str()
            );
            print_blocks(session.workspace.blocks(), LayoutMode::Both);
            if let Some(theme) = &theme {
                print_theme(theme);
            }
        }
    }
}

pub(crate) fn print_theme(theme: &ThemeTokens) {
    println!("Theme:");
    for (name, value) in theme.css_vars() {
        println!("  {}: {}", name, value);
    }
}

pub(crate) fn cmd_show(ctx: &Context, layout: LayoutMode) {
    let mut session = open_session(ctx);
    session.workspace.set_layout_mode(layout);
    let workspace = &session.workspace;

    match ctx.output {
        OutputFormat::Json => ctx.print_json(&json!({
            "idea": workspace.idea(),
            "layout": layout,
            "reset": session.reset,
            "blocks": workspace.blocks(),
        })),
        OutputFormat::Text => {
            if ctx.quiet {
                return;
            }
            if session.reset {
                println!("(workspace was reset; showing starter blocks)");
            }
            let idea = if workspace.idea().is_empty() {
                "-"
            } else {
                workspace.idea()
            };
            println!("Idea: {}", idea);
            if workspace.shows_mobile() {
                println!("Mobile:");
                print_blocks(workspace.blocks(), LayoutMode::Mobile);
            }
            if workspace.shows_desktop() {
                println!("Desktop:");
                print_blocks(workspace.blocks(), LayoutMode::Desktop);
            }
        }
    }
}

pub(crate) fn cmd_edit(ctx: &Context, id: &str, args: EditArgs) {
    if let Some(cols) = args.cols {
        if !COLUMN_CHOICES.contains(&cols) {
            let choices: Vec<String> = COLUMN_CHOICES.iter().map(|c| c.to_string()).collect();
            ctx.fail(&format!(
                "invalid cols {}: expected one of {}",
                cols,
                choices.join(", ")
            ));
        }
    }
    let patch = args.into_patch();
    if patch.is_empty() {
        ctx.fail("nothing to change: pass at least one of --type, --title, --description, --hint, --cols");
    }

    let mut session = open_session(ctx);
    session.workspace.select(Some(id));
    if !session.workspace.update_selected(patch) {
        ctx.fail(&format!("no block with id '{}'", id));
    }
    save_session(ctx, &session);

    let Some(block) = session.workspace.selected() else {
        return;
    };
    match ctx.output {
        OutputFormat::Json => ctx.print_json(block),
        OutputFormat::Text => {
            if !ctx.quiet {
                println!("updated {}", describe(block));
            }
        }
    }
}

pub(crate) fn cmd_delete(ctx: &Context, id: &str) {
    let mut session = open_session(ctx);
    session.workspace.select(Some(id));
    let Some(removed) = session.workspace.delete_selected() else {
        ctx.fail(&format!("no block with id '{}'", id));
    };
    save_session(ctx, &session);

    match ctx.output {
        OutputFormat::Json => ctx.print_json(&json!({ "deleted": removed })),
        OutputFormat::Text => {
            if !ctx.quiet {
                println!("deleted {}", describe(&removed));
            }
        }
    }
}

/// `mockup move`: FROM and TO accept an index or a block id.
pub(crate) fn cmd_move(ctx: &Context, from: &str, to: &str) {
    let mut session = open_session(ctx);
    let from = resolve_position(ctx, &session, from);
    let to = resolve_position(ctx, &session, to);
    if from >= session.workspace.blocks().len() {
        ctx.fail(&format!(
            "index {} is out of range (0..{})",
            from,
            session.workspace.blocks().len()
        ));
    }
    session.workspace.move_block(from, to);
    finish_reorder(ctx, &session);
}

pub(crate) fn cmd_up(ctx: &Context, target: &str) {
    let mut session = open_session(ctx);
    let index = resolve_position(ctx, &session, target);
    if !session.workspace.move_up(index) {
        ctx.fail(&format!("block at {} cannot move up", index));
    }
    finish_reorder(ctx, &session);
}

pub(crate) fn cmd_down(ctx: &Context, target: &str) {
    let mut session = open_session(ctx);
    let index = resolve_position(ctx, &session, target);
    if !session.workspace.move_down(index) {
        ctx.fail(&format!("block at {} cannot move down", index));
    }
    finish_reorder(ctx, &session);
}

fn resolve_position(ctx: &Context, session: &Session, value: &str) -> usize {
    match value.parse::<usize>() {
        Ok(index) => index,
        Err(_) => index_of(ctx, &session.workspace, value),
    }
}

fn finish_reorder(ctx: &Context, session: &Session) {
    save_session(ctx, session);
    match ctx.output {
        OutputFormat::Json => ctx.print_json(session.workspace.blocks()),
        OutputFormat::Text => {
            if !ctx.quiet {
                print_blocks(session.workspace.blocks(), LayoutMode::Both);
            }
        }
    }
}

/// `mockup export`: `-` writes to stdout.
pub(crate) fn cmd_export(ctx: &Context, out: &Path) {
    let session = open_session(ctx);
    let document = session.workspace.export_json();

    if out == Path::new("-") {
        println!("{}", document);
        return;
    }
    if let Err(e) = std::fs::write(out, format!("{}\n", document)) {
        ctx.fail(&format!("error writing '{}': {}", out.display(), e));
    }
    match ctx.output {
        OutputFormat::Json => ctx.print_json(&json!({ "path": out.display().to_string() })),
        OutputFormat::Text => {
            if !ctx.quiet {
                println!("exported to {}", out.display());
            }
        }
    }
}

/// `mockup clear`: forget the saved workspace. With `--url`, also print
/// the page URL without its share token.
pub(crate) fn cmd_clear(ctx: &Context, url: Option<&str>) {
    let session = open_session(ctx);
    let result = session.persistence.clear_state();
    ctx.unwrap_or_fail(result);

    let stripped = match url.map(strip_share_param) {
        Some(Ok(url)) => Some(url.to_string()),
        Some(Err(e)) => ctx.fail(&format!("error: {}", e)),
        None => None,
    };

    match ctx.output {
        OutputFormat::Json => ctx.print_json(&json!({ "cleared": true, "url": stripped })),
        OutputFormat::Text => {
            if ctx.quiet {
                return;
            }
            println!("workspace cleared");
            if let Some(url) = stripped {
                println!("{}", url);
            }
        }
    }
}
