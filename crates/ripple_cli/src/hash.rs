//! `ripple hash` — compute content digests for every rule in a build graph.
//!
//! Loads the configuration and the graph, then digests all rules in
//! parallel. Worker threads share one digest cache pair; the engine itself
//! stays synchronous, so parallelism comes entirely from digesting many
//! root rules at once.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use ripple_common::ContentDigest;
use ripple_config::RippleConfig;
use ripple_graph::{load_graph, Graph, Rule};
use ripple_hash::{
    DepPath, DepthBudget, DigestCache, MemorySink, RuleDigester, Severity, SourceResolver,
};

use crate::resolver::FileResolver;
use crate::{GlobalArgs, HashArgs, OutputFormat};

/// Runs the `ripple hash` command. Returns the process exit code.
pub fn run(args: &HashArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let (config, config_dir) = load_configuration(global)?;

    let graph_path = match &args.graph {
        Some(path) => PathBuf::from(path),
        None => config_dir.join(&config.graph.file),
    };
    let graph = load_graph(&graph_path)?;

    if !global.quiet {
        eprintln!("   Hashing {} rules from {}", graph.len(), graph_path.display());
    }

    let fine_grained = if args.fine_grained_repos.is_empty() {
        config.hash.fine_grained_repos.clone()
    } else {
        args.fine_grained_repos.iter().cloned().collect()
    };
    let seed = args.seed.clone().or(config.hash.seed);
    let depth = DepthBudget::from(args.depth.or(config.hash.depth));

    let root = match &args.root {
        Some(root) => PathBuf::from(root),
        None => graph_path.parent().unwrap_or(Path::new(".")).to_path_buf(),
    };
    let resolver = FileResolver::new(root);

    let digester = RuleDigester::new(fine_grained);
    let cache = DigestCache::new();
    let sink = MemorySink::new();

    let digests = digest_all(
        &digester,
        &graph,
        &cache,
        &resolver,
        &sink,
        seed.as_deref().map(str::as_bytes),
        depth,
    )?;

    report_events(&sink, global);
    write_output(&digests, args)?;

    if !global.quiet {
        eprintln!("   Produced {} digests", digests.len());
    }
    Ok(0)
}

/// Digests every rule in the graph in parallel over a shared cache pair.
///
/// Results are collected into a label-sorted map so output is stable
/// regardless of scheduling.
fn digest_all(
    digester: &RuleDigester,
    graph: &Graph,
    cache: &DigestCache,
    resolver: &dyn SourceResolver,
    sink: &MemorySink,
    seed: Option<&[u8]>,
    depth: DepthBudget,
) -> Result<BTreeMap<String, ContentDigest>, ripple_hash::HashError> {
    let rules: Vec<&Rule> = graph.iter().collect();
    rules
        .par_iter()
        .map(|rule| {
            digester
                .digest(
                    rule,
                    graph,
                    cache,
                    resolver,
                    sink,
                    seed,
                    &DepPath::new(),
                    depth,
                )
                .map(|digest| (rule.label.clone(), digest))
        })
        .collect()
}

/// Prints accumulated observations to stderr.
///
/// Warnings are printed unless `--quiet`; informational observations only
/// with `--verbose`.
fn report_events(sink: &MemorySink, global: &GlobalArgs) {
    if global.quiet {
        return;
    }
    for event in sink.take_all() {
        match event.severity {
            Severity::Warning => eprintln!("warning: {}", event.message),
            Severity::Info if global.verbose => eprintln!("info: {}", event.message),
            Severity::Info => {}
        }
    }
}

/// Writes the digest map to `--out` or stdout in the selected format.
fn write_output(
    digests: &BTreeMap<String, ContentDigest>,
    args: &HashArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let rendered = match args.format {
        OutputFormat::Text => {
            let mut out = String::new();
            for (label, digest) in digests {
                out.push_str(label);
                out.push(' ');
                out.push_str(&digest.to_string());
                out.push('\n');
            }
            out
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(digests)?;
            json.push('\n');
            json
        }
    };

    match &args.out {
        Some(path) => std::fs::write(path, rendered)?,
        None => std::io::stdout().write_all(rendered.as_bytes())?,
    }
    Ok(())
}

/// Loads the configuration named by `--config`, falling back to
/// `./ripple.toml` when present, then to built-in defaults.
///
/// Also returns the directory the config was loaded from, so relative paths
/// inside it resolve against the config file rather than the working
/// directory.
fn load_configuration(
    global: &GlobalArgs,
) -> Result<(RippleConfig, PathBuf), Box<dyn std::error::Error>> {
    match &global.config {
        Some(path) => {
            let path = PathBuf::from(path);
            let config = ripple_config::load_config(&path)?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."))
                .to_path_buf();
            Ok((config, dir))
        }
        None => {
            let default_path = Path::new("ripple.toml");
            if default_path.exists() {
                Ok((ripple_config::load_config(default_path)?, PathBuf::from(".")))
            } else {
                Ok((RippleConfig::default(), PathBuf::from(".")))
            }
        }
    }
}
