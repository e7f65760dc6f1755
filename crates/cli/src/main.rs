//! Stressmark CLI: build a stress dictionary and mark stress in text.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use stressmark_core::cache;
use stressmark_core::lexicon::canonical::load_entries;
use stressmark_core::lexicon::{CanonicalDictionary, PhonemeDictConfig, PhonemeDictionary};
use stressmark_core::types::CanonicalEntry;
use stressmark_core::{Resolver, StressConfig};

// ─── Top-level CLI ───────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "stressmark",
    about = "Stress-annotated pronouncing dictionary and text stress marker",
    version,
)]
struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the canonical dictionary from extracted entries
    Build(BuildArgs),
    /// Mark stress on every word of a text
    Apply(ApplyArgs),
    /// Resolve a single word
    Lookup(LookupArgs),
    /// Show a word's phoneme pronunciation and stress shape
    Phonemes(PhonemesArgs),
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// JSON array of [word_line, gloss_line] pairs
    entries: PathBuf,

    /// Where to write the canonical dictionary
    #[arg(short, long, default_value = "stressmark.json")]
    output: PathBuf,

    /// Disable file-based caching
    #[arg(long, default_value_t = false)]
    no_cache: bool,
}

#[derive(Parser, Debug)]
struct ApplyArgs {
    /// Canonical dictionary JSON
    dictionary: PathBuf,

    /// Text file to mark (default: stdin)
    input: Option<PathBuf>,

    /// Drop secondary-stress marks
    #[arg(long, default_value_t = false)]
    no_secondary: bool,
}

#[derive(Parser, Debug)]
struct LookupArgs {
    /// Canonical dictionary JSON
    dictionary: PathBuf,

    /// Word to resolve
    word: String,

    /// Penn-style part-of-speech tag (NN, VBD, JJ, RB, ...)
    #[arg(long)]
    pos: Option<String>,

    /// Drop secondary-stress marks
    #[arg(long, default_value_t = false)]
    no_secondary: bool,
}

#[derive(Parser, Debug)]
struct PhonemesArgs {
    /// CMU-format pronouncing dictionary
    cmudict: PathBuf,

    /// Word to look up
    word: String,

    /// Include monosyllables
    #[arg(long, default_value_t = false)]
    keep_mono: bool,

    /// Include words whose variants differ in stress
    #[arg(long, default_value_t = false)]
    keep_dupls: bool,
}

// ─── Main ────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Command::Build(args) => run_build(args),
        Command::Apply(args) => run_apply(args),
        Command::Lookup(args) => run_lookup(args),
        Command::Phonemes(args) => run_phonemes(args),
    };

    if let Err(e) = result {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

// ─── Helpers ─────────────────────────────────────────────────────

fn validate_input(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("File not found: {}", path.display());
    }
    Ok(())
}

fn load_resolver(path: &Path, no_secondary: bool) -> Result<Resolver> {
    validate_input(path)?;
    let dict = CanonicalDictionary::load(path)?;
    Ok(Resolver::new(dict, StressConfig { no_secondary }))
}

// ─── Subcommands ─────────────────────────────────────────────────

fn run_build(args: BuildArgs) -> Result<()> {
    validate_input(&args.entries)?;

    let cache_root = cache::cache_dir();
    let hash = if args.no_cache {
        None
    } else {
        Some(cache::file_hash(&args.entries)?)
    };

    let cached = hash
        .as_deref()
        .and_then(|h| cache::get_cached_dictionary(&cache_root, h));
    let dict = match cached {
        Some(dict) => dict,
        None => {
            let entries = load_entries(&args.entries)?;
            log::info!("Loaded {} entries from {}", entries.len(), args.entries.display());
            let dict = CanonicalDictionary::build(&entries);
            if let Some(h) = hash.as_deref() {
                if let Err(e) = cache::store_dictionary_cache(&cache_root, h, &dict) {
                    log::warn!("Could not cache dictionary: {:#}", e);
                }
            }
            dict
        }
    };

    dict.save(&args.output)?;
    log::info!("Wrote {} words to {}", dict.len(), args.output.display());
    Ok(())
}

fn run_apply(args: ApplyArgs) -> Result<()> {
    let resolver = load_resolver(&args.dictionary, args.no_secondary)?;

    let text = match &args.input {
        Some(path) => {
            validate_input(path)?;
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input: {}", path.display()))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let marked = resolver.apply(&text);
    let mut stdout = io::stdout().lock();
    stdout.write_all(marked.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn run_lookup(args: LookupArgs) -> Result<()> {
    let resolver = load_resolver(&args.dictionary, args.no_secondary)?;

    if let Some(CanonicalEntry::ByPartOfSpeech(variants)) = resolver.dictionary().get(&args.word) {
        for (spelling, tags) in variants {
            log::debug!("{} [{}]", spelling, tags.join(", "));
        }
        if args.pos.is_none() {
            log::info!("'{}' depends on part of speech; pass --pos to choose", args.word);
        }
    }

    println!("{}", resolver.resolve(&args.word, args.pos.as_deref()));
    Ok(())
}

fn run_phonemes(args: PhonemesArgs) -> Result<()> {
    validate_input(&args.cmudict)?;
    let config = PhonemeDictConfig {
        ignore_mono: !args.keep_mono,
        ignore_dupls: !args.keep_dupls,
    };
    let dict = PhonemeDictionary::open(&args.cmudict, config)?;

    match dict.clusters(&args.word) {
        Some(c) => {
            println!("{}", dict.pronunciation(&args.word).unwrap_or_default());
            println!("{}", c.shape);
        }
        None => bail!("No usable pronunciation for '{}'", args.word),
    }
    Ok(())
}
