mod commands;
mod config;
mod logging;
mod serve;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use mockup_core::{BlockType, ColorScheme, LayoutMode, Mode};

use crate::commands::{Context, EditArgs};
use crate::config::Config;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Turn an app idea into an editable UI mockup.
#[derive(Parser)]
#[command(
    name = "mockup",
    version,
    about = "Turn an app idea into an editable UI mockup"
)]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Path to a TOML config file (default: ./mockup.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the saved workspace
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate blocks from the idea
    Generate {
        /// The app idea (default: the saved idea)
        idea: Option<String>,
        /// append merges into the current blocks, replace starts over
        #[arg(long, default_value = "append")]
        mode: Mode,
    },

    /// Refine the mockup with a free-text command
    Refine {
        /// e.g. "ajouter un formulaire d'inscription"
        text: String,
        #[arg(long, default_value = "append")]
        mode: Mode,
    },

    /// Print the current workspace
    Show {
        /// Preview frames to show (mobile, desktop or both)
        #[arg(long, default_value = "both")]
        layout: LayoutMode,
    },

    /// Edit a block's fields
    Edit {
        /// Block id
        id: String,
        #[arg(long = "type")]
        block_type: Option<BlockType>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        hint: Option<String>,
        /// Desktop column span (12, 9, 8, 6, 4, 3 or 2)
        #[arg(long)]
        cols: Option<i64>,
    },

    /// Delete a block
    Delete {
        /// Block id
        id: String,
    },

    /// Move a block to another position
    Move {
        /// Index or id of the block to move
        from: String,
        /// Target index (clamped to the list)
        to: String,
    },

    /// Move a block one slot up
    Up {
        /// Index or id of the block
        block: String,
    },

    /// Move a block one slot down
    Down {
        /// Index or id of the block
        block: String,
    },

    /// Print a link that reopens the current workspace
    Share {
        /// Page URL the share token is attached to
        #[arg(long, default_value = "http://localhost:3000/")]
        base_url: String,
    },

    /// Replace the workspace with a shared one
    Open {
        /// Share link or bare token
        source: String,
    },

    /// Write the workspace as JSON
    Export {
        /// Output file, or - for stdout
        #[arg(long, default_value = "mockup.json")]
        out: PathBuf,
    },

    /// Forget the saved workspace
    Clear {
        /// Also print this page URL with its share token removed
        #[arg(long)]
        url: Option<String>,
    },

    /// Show or change the light/dark preference
    Theme {
        /// light or dark
        scheme: Option<ColorScheme>,
        /// Switch to the other scheme
        #[arg(long, conflicts_with = "scheme")]
        toggle: bool,
    },

    /// Show the first-visit walkthrough
    Onboarding {
        /// Record the walkthrough as completed
        #[arg(long)]
        done: bool,
    },

    /// Start the HTTP API server
    Serve {
        /// Port to listen on (default: 3000)
        #[arg(long)]
        port: Option<u16>,
        /// Address to bind (default: 0.0.0.0)
        #[arg(long)]
        host: Option<String>,
        /// Do not redirect first-time visitors to /onboarding
        #[arg(long)]
        no_onboarding_gate: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet);

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            report_error(&e.to_string(), cli.output, cli.quiet);
            process::exit(1);
        }
    };
    if let Err(e) = config.apply_env() {
        report_error(&e.to_string(), cli.output, cli.quiet);
        process::exit(1);
    }
    if let Some(dir) = cli.state_dir {
        config.storage.dir = Some(dir);
    }

    let ctx = Context {
        state_dir: config.state_dir(),
        output: cli.output,
        quiet: cli.quiet,
    };

    match cli.command {
        Commands::Generate { idea, mode } => commands::cmd_generate(&ctx, idea.as_deref(), mode),
        Commands::Refine { text, mode } => commands::cmd_refine(&ctx, &text, mode),
        Commands::Show { layout } => commands::cmd_show(&ctx, layout),
        Commands::Edit {
            id,
            block_type,
            title,
            description,
            hint,
            cols,
        } => commands::cmd_edit(
            &ctx,
            &id,
            EditArgs {
                block_type,
                title,
                description,
                hint,
                cols,
            },
        ),
        Commands::Delete { id } => commands::cmd_delete(&ctx, &id),
        Commands::Move { from, to } => commands::cmd_move(&ctx, &from, &to),
        Commands::Up { block } => commands::cmd_up(&ctx, &block),
        Commands::Down { block } => commands::cmd_down(&ctx, &block),
        Commands::Share { base_url } => commands::cmd_share(&ctx, &base_url),
        Commands::Open { source } => commands::cmd_open(&ctx, &source),
        Commands::Export { out } => commands::cmd_export(&ctx, &out),
        Commands::Clear { url } => commands::cmd_clear(&ctx, url.as_deref()),
        Commands::Theme { scheme, toggle } => commands::cmd_theme(&ctx, scheme, toggle),
        Commands::Onboarding { done } => commands::cmd_onboarding(&ctx, done),
        Commands::Serve {
            port,
            host,
            no_onboarding_gate,
        } => {
            let mut settings = config.server;
            if let Some(port) = port {
                settings.port = port;
            }
            if let Some(host) = host {
                settings.host = host;
            }
            if no_onboarding_gate {
                settings.onboarding_gate = false;
            }
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    report_error(
                        &format!("failed to create tokio runtime: {}", e),
                        cli.output,
                        cli.quiet,
                    );
                    process::exit(1);
                }
            };
            if let Err(e) = rt.block_on(serve::start_server(settings)) {
                report_error(&format!("Server error: {}", e), cli.output, cli.quiet);
                process::exit(1);
            }
        }
    }
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}
