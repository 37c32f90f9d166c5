//! Local workspace commands.
//!
//! Every command opens the workspace kept under the state directory,
//! applies one change, saves it back and prints the result.

mod preferences;
mod share;
mod workspace;

use std::path::{Path, PathBuf};
use std::process;

use mockup_core::{LayoutMode, UiBlock, Workspace};
use mockup_storage::{FileStore, Persistence, StateStore, StorageError};
use serde::Serialize;

use crate::{report_error, OutputFormat};

pub(crate) use preferences::{cmd_onboarding, cmd_theme};
pub(crate) use share::{cmd_open, cmd_share};
pub(crate) use workspace::{
    cmd_clear, cmd_delete, cmd_down, cmd_edit, cmd_export, cmd_generate, cmd_move, cmd_refine,
    cmd_show, cmd_up, EditArgs,
};

/// Subdirectory of the state directory holding session values.
const SESSION_DIR: &str = "session";

/// Resolved global options shared by every command.
pub(crate) struct Context {
    pub(crate) state_dir: PathBuf,
    pub(crate) output: OutputFormat,
    pub(crate) quiet: bool,
}

impl Context {
    /// Report `msg` and exit with status 1.
    pub(crate) fn fail(&self, msg: &str) -> ! {
        report_error(msg, self.output, self.quiet);
        process::exit(1);
    }

    fn unwrap_or_fail<T>(&self, result: Result<T, StorageError>) -> T {
        match result {
            Ok(value) => value,
            Err(e) => self.fail(&format!("storage error: {}", e)),
        }
    }

    /// Print a JSON document on stdout.
    fn print_json<T: Serialize + ?Sized>(&self, value: &T) {
        if self.quiet {
            return;
        }
        println!(
            "{}",
            serde_json::to_string_pretty(value)
                .unwrap_or_else(|e| format!("serialization error: {}", e))
        );
    }
}

/// An open workspace and the store it came from.
pub(crate) struct Session {
    persistence: Persistence,
    workspace: Workspace,
    /// The previous session ended with a reset and nothing was saved since.
    reset: bool,
}

impl Session {
    fn open(dir: &Path) -> Result<Session, StorageError> {
        let persistence = Persistence::new(
            Box::new(FileStore::new(dir)),
            Box::new(FileStore::new(dir.join(SESSION_DIR))),
        );
        let stored = persistence.load()?;
        let reset = stored.is_none() && persistence.was_cleared()?;
        let workspace = Workspace::hydrate(None, stored);
        tracing::debug!(
            dir = %dir.display(),
            blocks = workspace.blocks().len(),
            "opened workspace"
        );
        Ok(Session {
            persistence,
            workspace,
            reset,
        })
    }

    fn save(&self) -> Result<(), StorageError> {
        self.persistence.save(&self.workspace.saved_state())
    }
}

/// Open the session or exit.
fn open_session(ctx: &Context) -> Session {
    let result = Session::open(&ctx.state_dir);
    ctx.unwrap_or_fail(result)
}

/// Save the session or exit.
fn save_session(ctx: &Context, session: &Session) {
    let result = session.save();
    ctx.unwrap_or_fail(result);
}

/// Print the block list as a table.
fn print_blocks(blocks: &[UiBlock], layout: LayoutMode) {
    let with_span = layout != LayoutMode::Mobile;
    for (index, block) in blocks.iter().enumerate() {
        let title = block.title.as_deref().unwrap_or("-");
        if with_span {
            println!(
                "  {:>2}  {:<14} {:<10} {:<16} {}",
                index,
                block.id,
                block.block_type,
                mockup_core::desktop_span(block),
                title
            );
        } else {
            println!(
                "  {:>2}  {:<14} {:<10} {}",
                index, block.id, block.block_type, title
            );
        }
    }
}

/// Look up a block index by id, or exit.
fn index_of(ctx: &Context, workspace: &Workspace, id: &str) -> usize {
    match workspace.blocks().iter().position(|b| b.id == id) {
        Some(index) => index,
        None => ctx.fail(&format!("no block with id '{}'", id)),
    }
}

/// Text label for a block in confirmations, e.g. `LIST "Liste" (list-a1b2c3)`.
fn describe(block: &UiBlock) -> String {
    match &block.title {
        Some(title) => format!("{} \"{}\" ({})", block.block_type, title, block.id),
        None => format!("{} ({})", block.block_type, block.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockup_core::SavedState;

    #[test]
    fn fresh_directory_opens_with_starter_blocks() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::open(dir.path()).unwrap();
        assert_eq!(session.workspace.blocks().len(), 5);
        assert!(!session.reset);
    }

    #[test]
    fn save_then_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::open(dir.path()).unwrap();
        session.workspace.set_idea("une app de recettes");
        session.save().unwrap();

        let reopened = Session::open(dir.path()).unwrap();
        assert_eq!(reopened.workspace.idea(), "une app de recettes");
        assert_eq!(reopened.workspace.blocks(), session.workspace.blocks());
    }

    #[test]
    fn reset_is_reported_until_next_save() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::open(dir.path()).unwrap();
        session.save().unwrap();
        session.persistence.clear_state().unwrap();

        let after_clear = Session::open(dir.path()).unwrap();
        assert!(after_clear.reset);
        assert_eq!(after_clear.workspace.idea(), "");

        after_clear.save().unwrap();
        assert!(!Session::open(dir.path()).unwrap().reset);
    }

    #[test]
    fn session_values_live_apart_from_local_ones() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::open(dir.path()).unwrap();
        session.persistence.clear_state().unwrap();
        assert!(dir.path().join(SESSION_DIR).join("state-cleared").is_file());
        assert!(!dir.path().join("state").exists());
    }

    #[test]
    fn empty_saved_blocks_fall_back_to_starter_blocks() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::open(dir.path()).unwrap();
        session
            .persistence
            .save(&SavedState {
                idea: "x".into(),
                blocks: vec![],
            })
            .unwrap();
        let reopened = Session::open(dir.path()).unwrap();
        assert_eq!(reopened.workspace.idea(), "x");
        assert_eq!(reopened.workspace.blocks().len(), 5);
    }
}
