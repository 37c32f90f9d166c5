use mockup_core::{build_share_url, share_token_from_url, LayoutMode, Workspace};
use serde_json::json;

use super::{open_session, print_blocks, save_session, Context};
use crate::OutputFormat;

/// Print a link that reopens the current workspace.
pub(crate) fn cmd_share(ctx: &Context, base_url: &str) {
    let session = open_session(ctx);
    let url = match build_share_url(base_url, &session.workspace.saved_state()) {
        Ok(url) => url,
        Err(e) => ctx.fail(&format!("error: {}", e)),
    };

    match ctx.output {
        OutputFormat::Json => ctx.print_json(&json!({ "url": url.as_str() })),
        OutputFormat::Text => {
            if !ctx.quiet {
                println!("{}", url);
            }
        }
    }
}

/// Load a shared workspace from a link or a bare token, replacing the
/// saved one.
pub(crate) fn cmd_open(ctx: &Context, source: &str) {
    let token = if source.contains("://") {
        match share_token_from_url(source) {
            Some(token) => token,
            None => ctx.fail(&format!("no share token in '{}'", source)),
        }
    } else {
        source.trim().to_string()
    };

    let mut session = open_session(ctx);
    session.workspace = Workspace::hydrate(Some(&token), None);
    save_session(ctx, &session);

    let workspace = &session.workspace;
    match ctx.output {
        OutputFormat::Json => ctx.print_json(&workspace.saved_state()),
        OutputFormat::Text => {
            if ctx.quiet {
                return;
            }
            if !workspace.idea().is_empty() {
                println!("Idea: {}", workspace.idea());
            }
            println!("{} block(s):", workspace.blocks().len());
            print_blocks(workspace.blocks(), LayoutMode::Both);
        }
    }
}
