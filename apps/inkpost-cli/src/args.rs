//! Command-line surface for `inkpost-cli`.

use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "inkpost-cli", version, about = "Inkpost blog client", long_about = None)]
pub struct Cli {
    /// API base URL
    #[arg(long, env = "INKPOST_SERVER", default_value = "http://127.0.0.1:8080")]
    pub server: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List posts, newest first
    List(ListArgs),
    /// Search interactively: each stdin line replaces the query
    Browse(BrowseArgs),
    /// Show a single post
    Show { id: Uuid },
    /// Create a post
    Create(CreateArgs),
    /// Replace a post; omitted fields keep their current values
    Edit(EditArgs),
    /// Delete a post
    Delete {
        id: Uuid,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// List categories
    Categories,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Substring to look for in title or content
    #[arg(long, short)]
    pub search: Option<String>,
    /// Category id or name
    #[arg(long, short)]
    pub category: Option<String>,
}

#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// Category id or name
    #[arg(long, short)]
    pub category: Option<String>,
    /// Idle time before a query is sent
    #[arg(long, default_value_t = 300)]
    pub debounce_ms: u64,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[arg(long, short)]
    pub title: String,
    #[arg(long)]
    pub content: String,
    /// Category id or name
    #[arg(long, short)]
    pub category: Option<String>,
    #[arg(long)]
    pub featured_image: Option<String>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    pub id: Uuid,
    #[arg(long, short)]
    pub title: Option<String>,
    #[arg(long)]
    pub content: Option<String>,
    /// Category id or name; empty clears it
    #[arg(long, short)]
    pub category: Option<String>,
    /// Empty clears it
    #[arg(long)]
    pub featured_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_edit_fields_are_optional() {
        let id = Uuid::new_v4().to_string();
        let cli = Cli::try_parse_from(["inkpost-cli", "edit", &id, "--category", ""]).unwrap();

        match cli.command {
            Commands::Edit(args) => {
                assert_eq!(args.title, None);
                assert_eq!(args.category.as_deref(), Some(""));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
