use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};

use crate::cache::IndexCache;
use crate::cli::table::render_table;
use crate::models::{ArtifactType, Entry, Index};
use crate::utils::indexes_dir;

/// Default minimum similarity score for keyword search.
const DEFAULT_MIN_SCORE: f64 = 0.65;

#[derive(Parser)]
#[command(name = "artifact-scout")]
#[command(version = "0.1.0")]
#[command(about = "Locate plugins and rules files across registry indexes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search artifacts by keywords
    Search(SearchArgs),
    /// Show registry references for named artifacts
    Info {
        /// Artifact names to resolve
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Manage locally cached indexes
    #[command(subcommand)]
    Index(IndexCommands),
}

#[derive(Args)]
pub struct SearchArgs {
    /// Keywords to match against artifact names
    #[arg(required = true)]
    pub keywords: Vec<String>,

    /// Minimum score used to match artifact names with search keywords
    #[arg(long, default_value_t = DEFAULT_MIN_SCORE)]
    pub min_score: f64,

    /// Only show artifacts of a specific type
    #[arg(long = "type", value_name = "TYPE")]
    pub artifact_type: Option<ArtifactType>,
}

impl SearchArgs {
    fn validate(&self) -> Result<()> {
        if self.min_score <= 0.0 || self.min_score > 1.0 {
            bail!("min-score must be a number within (0,1]");
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum IndexCommands {
    /// Add an index from a local entries file
    Add {
        /// Name the index is cached under
        name: String,
        /// Path to a JSON file holding the entry list
        file: PathBuf,
        /// URL the entries were fetched from
        #[arg(long)]
        source: Option<String>,
    },
    /// Replace the entries of a cached index from a local file
    Update {
        name: String,
        file: PathBuf,
    },
    /// Remove a cached index
    Remove { name: String },
    /// List cached indexes
    List,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let dir = indexes_dir()?;
    let mut cache = IndexCache::new(&dir)
        .with_context(|| format!("failed to load index cache from {}", dir.display()))?;

    match cli.command {
        Commands::Search(args) => run_search(&cache, &args),
        Commands::Info { names } => run_info(&cache, &names),
        Commands::Index(cmd) => run_index(&mut cache, cmd),
    }
}

fn run_search(cache: &IndexCache, args: &SearchArgs) -> Result<()> {
    args.validate()?;

    let merged = cache.merged();
    let results = merged.search_by_keywords(args.min_score, &args.keywords);

    let rows: Vec<Vec<String>> = results
        .iter()
        // Type filtering happens after scoring so it never affects ranking.
        .filter(|r| args.artifact_type.is_none_or(|t| t == r.entry.artifact_type))
        .map(|r| {
            vec![
                r.index.clone(),
                r.entry.name.clone(),
                r.entry.artifact_type.to_string(),
                r.entry.registry.clone(),
                r.entry.repository.clone(),
            ]
        })
        .collect();

    if rows.is_empty() {
        println!("No artifacts found matching the given keywords");
    } else {
        print!("{}", render_table(&["INDEX", "ARTIFACT", "TYPE", "REGISTRY", "REPOSITORY"], &rows));
    }
    Ok(())
}

fn run_info(cache: &IndexCache, names: &[String]) -> Result<()> {
    let mut rows = Vec::new();
    for name in names {
        match cache.entry_by_name(name) {
            Some((entry, index)) => {
                rows.push(vec![
                    entry.name.clone(),
                    entry.artifact_type.to_string(),
                    entry.reference(),
                    index,
                    entry.description.clone().unwrap_or_default(),
                ]);
            }
            None => {
                eprintln!("Warning: cannot find {name:?}, skipping");
            }
        }
    }

    if !rows.is_empty() {
        print!("{}", render_table(&["ARTIFACT", "TYPE", "REFERENCE", "INDEX", "DESCRIPTION"], &rows));
    }
    Ok(())
}

fn run_index(cache: &mut IndexCache, cmd: IndexCommands) -> Result<()> {
    match cmd {
        IndexCommands::Add { name, file, source } => {
            let entries = read_entries_file(&file)?;
            let count = entries.len();
            let index = Index::new(&name, source).with_entries(entries);
            cache.add(index)?;
            println!("Added index {name:?} ({count} entries)");
        }
        IndexCommands::Update { name, file } => {
            let entries = read_entries_file(&file)?;
            let count = entries.len();
            cache.update(&name, entries)?;
            println!("Updated index {name:?} ({count} entries)");
        }
        IndexCommands::Remove { name } => {
            if cache.remove(&name)? {
                println!("Removed index {name:?}");
            } else {
                eprintln!("Warning: index {name:?} was not cached, nothing to remove");
            }
        }
        IndexCommands::List => {
            let rows: Vec<Vec<String>> = cache
                .iter()
                .map(|index| {
                    vec![
                        index.name.clone(),
                        index.len().to_string(),
                        index.source.clone().unwrap_or_else(|| "-".to_string()),
                        index
                            .fetched_at
                            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                            .unwrap_or_else(|| "-".to_string()),
                    ]
                })
                .collect();

            if rows.is_empty() {
                println!("No indexes cached in {}", cache.dir().display());
            } else {
                print!("{}", render_table(&["NAME", "ENTRIES", "SOURCE", "FETCHED"], &rows));
            }
        }
    }
    Ok(())
}

/// Parse a local JSON file holding an entry list, as produced by an external
/// index fetch.
fn read_entries_file(path: &Path) -> Result<Vec<Entry>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read entries file {}", path.display()))?;
    let entries: Vec<Entry> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse entries file {}", path.display()))?;

    for entry in &entries {
        if entry.name.is_empty() {
            bail!("entries file {} contains an entry with an empty name", path.display());
        }
    }
    Ok(entries)
}
