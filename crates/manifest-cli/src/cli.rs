//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Manifest - Write resource bundles to a directory tree
#[derive(Parser, Debug)]
#[command(name = "manifest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write every document in a bundle under the destination
    ///
    /// The bundle is a YAML (or .json) mapping of relative file path to
    /// document. Each document is rendered as YAML, or JSON for .json paths.
    ///
    /// Examples:
    ///   manifest write -b bundle.yaml -d ~/manifest
    ///   manifest write -b bundle.yaml -d ./gitops --dry-run
    Write {
        /// Bundle file mapping relative paths to documents
        #[arg(short, long)]
        bundle: PathBuf,

        /// Destination directory; a leading ~ expands to the home directory
        #[arg(short, long, env = "MANIFEST_DESTINATION")]
        destination: String,

        /// Show what would be written without touching the filesystem
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the directory a destination resolves to
    Resolve {
        /// Destination directory; a leading ~ expands to the home directory
        #[arg(env = "MANIFEST_DESTINATION")]
        destination: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_write_command() {
        let cli = Cli::try_parse_from([
            "manifest", "write", "--bundle", "bundle.yaml", "--destination", "~/manifest",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Commands::Write {
                bundle: PathBuf::from("bundle.yaml"),
                destination: "~/manifest".into(),
                dry_run: false,
            }
        );
    }

    #[test]
    fn parse_dry_run_with_short_flags() {
        let cli = Cli::try_parse_from([
            "manifest", "-v", "write", "-b", "b.yaml", "-d", "out", "--dry-run",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Write { dry_run: true, .. }));
    }

    #[test]
    fn parse_resolve_command() {
        let cli = Cli::try_parse_from(["manifest", "resolve", "~"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Resolve {
                destination: "~".into()
            }
        );
    }
}
