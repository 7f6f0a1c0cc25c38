//! Ripple CLI — the command-line interface for build-impact digest tooling.
//!
//! Provides `ripple hash` for computing a stable content digest of every
//! rule in a build dependency graph. Diffing two digest sets to find
//! affected targets is a separate step over the emitted output.

#![warn(missing_docs)]

mod hash;
mod resolver;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// Ripple — build-impact analysis tooling.
#[derive(Parser, Debug)]
#[command(name = "ripple", version, about = "Ripple build-impact tooling")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print informational observations as well as warnings.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `ripple.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute content digests for every rule in a build graph.
    Hash(HashArgs),
}

/// Arguments for the `ripple hash` subcommand.
#[derive(Parser, Debug)]
pub struct HashArgs {
    /// Path to the JSON graph file (overrides `graph.file` from the config).
    #[arg(short, long)]
    pub graph: Option<String>,

    /// Seed string mixed into every digest (overrides `hash.seed`).
    #[arg(long)]
    pub seed: Option<String>,

    /// Recursion depth budget (overrides `hash.depth`; omitted = unbounded).
    #[arg(long)]
    pub depth: Option<u32>,

    /// External repositories receiving fine-grained (file-level) treatment.
    #[arg(long = "fine-grained-repo", num_args = 1..)]
    pub fine_grained_repos: Vec<String>,

    /// Root directory for resolving source-file inputs on disk.
    #[arg(long)]
    pub root: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    pub out: Option<String>,
}

/// Digest output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `label digest` pair per line.
    Text,
    /// A JSON object mapping label to digest.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print informational observations.
    pub verbose: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Hash(ref args) => hash::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_hash_default() {
        let cli = Cli::parse_from(["ripple", "hash"]);
        match cli.command {
            Command::Hash(ref args) => {
                assert!(args.graph.is_none());
                assert!(args.seed.is_none());
                assert!(args.depth.is_none());
                assert!(args.fine_grained_repos.is_empty());
                assert_eq!(args.format, OutputFormat::Text);
                assert!(args.out.is_none());
            }
        }
    }

    #[test]
    fn parse_hash_with_args() {
        let cli = Cli::parse_from([
            "ripple",
            "hash",
            "--graph",
            "out/deps.json",
            "--seed",
            "release-2024",
            "--depth",
            "3",
            "--format",
            "json",
        ]);
        match cli.command {
            Command::Hash(ref args) => {
                assert_eq!(args.graph.as_deref(), Some("out/deps.json"));
                assert_eq!(args.seed.as_deref(), Some("release-2024"));
                assert_eq!(args.depth, Some(3));
                assert_eq!(args.format, OutputFormat::Json);
            }
        }
    }

    #[test]
    fn parse_hash_depth_zero() {
        let cli = Cli::parse_from(["ripple", "hash", "--depth", "0"]);
        match cli.command {
            Command::Hash(ref args) => assert_eq!(args.depth, Some(0)),
        }
    }

    #[test]
    fn parse_hash_multiple_fine_grained_repos() {
        let cli = Cli::parse_from([
            "ripple",
            "hash",
            "--fine-grained-repo",
            "rules_rust",
            "crates",
        ]);
        match cli.command {
            Command::Hash(ref args) => {
                assert_eq!(args.fine_grained_repos, vec!["rules_rust", "crates"]);
            }
        }
    }

    #[test]
    fn parse_hash_with_out_file() {
        let cli = Cli::parse_from(["ripple", "hash", "--out", "digests.json"]);
        match cli.command {
            Command::Hash(ref args) => assert_eq!(args.out.as_deref(), Some("digests.json")),
        }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from(["ripple", "--quiet", "hash"]);
        assert!(cli.quiet);
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_verbose_flag() {
        let cli = Cli::parse_from(["ripple", "--verbose", "hash"]);
        assert!(cli.verbose);
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::parse_from(["ripple", "--config", "/path/to/ripple.toml", "hash"]);
        assert_eq!(cli.config.as_deref(), Some("/path/to/ripple.toml"));
    }

    #[test]
    fn output_format_debug() {
        assert_eq!(format!("{:?}", OutputFormat::Text), "Text");
        assert_eq!(format!("{:?}", OutputFormat::Json), "Json");
    }
}
