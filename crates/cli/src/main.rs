mod cmd;
mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use inkvault_core::config::ConfigLoader;
use inkvault_core::{Workspace, WorkspaceOptions};

#[derive(Debug, Parser)]
#[command(name = "ikv", version, about = "Local note-vault backend")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/inkvault/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the vault base path from the config
    #[arg(long, global = true)]
    base_path: Option<PathBuf>,

    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Vault lifecycle
    #[command(subcommand)]
    Vault(VaultCmd),

    /// Note lifecycle
    #[command(subcommand)]
    Note(NoteCmd),

    /// Ranked full-text search within a vault
    Search { vault: String, query: String },

    /// Titles referenced by a note, in order of appearance
    Links { vault: String, title: String },

    /// Titles of notes linking to the given title
    Backlinks { vault: String, title: String },

    /// Render a vault's link graph as Graphviz DOT
    Graph { vault: String },

    /// Rebuild a vault's index from the notes on disk
    Reindex { vault: String },

    /// Render markdown to display HTML (argument, or stdin if omitted)
    Render { content: Option<String> },

    /// Plain-text projection of markdown (argument, or stdin if omitted)
    Plain { content: Option<String> },

    /// Dispatch a raw wire request, e.g.
    /// '{"command":"read_note","vault":"Notes","title":"Todo"}'
    Request { payload: String },
}

#[derive(Debug, Subcommand)]
enum VaultCmd {
    /// Create and register a vault
    Create {
        name: String,
        /// Storage root parent; the configured base path when omitted
        #[arg(long)]
        at: Option<PathBuf>,
    },
    /// List vault names in registration order
    List,
    /// Delete a vault, its notes and all derived state
    Delete { name: String },
}

#[derive(Debug, Subcommand)]
enum NoteCmd {
    /// Create or overwrite a note (content argument, or stdin if omitted)
    Create { vault: String, title: String, content: Option<String> },
    /// Print a note's raw content
    Read { vault: String, title: String },
    /// Delete a note
    Delete { vault: String, title: String },
    /// List note titles in a vault
    List { vault: String },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let rc = ConfigLoader::load(cli.config.as_deref())?;
    logging::init(&rc.logging);

    let mut options = WorkspaceOptions::from(&rc);
    if let Some(base_path) = cli.base_path {
        options.base_path = base_path;
    }
    let workspace = Workspace::open(&options)?;

    match cli.command {
        Commands::Vault(VaultCmd::Create { name, at }) => {
            cmd::vault::create(&workspace, &name, at.as_deref())
        }
        Commands::Vault(VaultCmd::List) => cmd::vault::list(&workspace, cli.json),
        Commands::Vault(VaultCmd::Delete { name }) => {
            cmd::vault::delete(&workspace, &name)
        }
        Commands::Note(NoteCmd::Create { vault, title, content }) => {
            cmd::note::create(&workspace, &vault, &title, content)
        }
        Commands::Note(NoteCmd::Read { vault, title }) => {
            cmd::note::read(&workspace, &vault, &title)
        }
        Commands::Note(NoteCmd::Delete { vault, title }) => {
            cmd::note::delete(&workspace, &vault, &title)
        }
        Commands::Note(NoteCmd::List { vault }) => {
            cmd::note::list(&workspace, &vault, cli.json)
        }
        Commands::Search { vault, query } => {
            cmd::query::search(&workspace, &vault, &query, cli.json)
        }
        Commands::Links { vault, title } => {
            cmd::query::links(&workspace, &vault, &title, cli.json)
        }
        Commands::Backlinks { vault, title } => {
            cmd::query::backlinks(&workspace, &vault, &title, cli.json)
        }
        Commands::Graph { vault } => cmd::query::graph(&workspace, &vault),
        Commands::Reindex { vault } => cmd::query::reindex(&workspace, &vault),
        Commands::Render { content } => cmd::markup::render(&workspace, content),
        Commands::Plain { content } => cmd::markup::plain(&workspace, content),
        Commands::Request { payload } => cmd::request::run(&workspace, &payload),
    }
}
