use anyhow::Result;
use clap::{Parser, Subcommand};
use search_cli::{format_result, load_config, load_corpus, run_console, search_corpus};
use search_core::{ExclusionPolicy, ScoredDocument, SearchConfig};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "search")]
#[command(about = "Rank a small set of documents against a query with TF-IDF", long_about = None)]
struct Cli {
    /// JSON file with search settings (max_results, exclusion)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Maximum number of results to print
    #[arg(long, global = true)]
    max_results: Option<usize>,
    /// Drop documents containing any -word of the query
    #[arg(long, global = true, default_value_t = false)]
    exclude_minus_words: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read stop words, document count, documents and a query from stdin, one per line
    Console,
    /// Search documents loaded from JSON/JSONL files or a directory of them
    Query {
        /// Input path (file or directory)
        #[arg(long)]
        input: PathBuf,
        /// Space-separated stop words
        #[arg(long, default_value = "")]
        stop_words: String,
        /// Raw query, -word marks a minus word
        #[arg(long)]
        query: String,
        /// Print the response as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

impl Cli {
    fn search_config(&self) -> Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SearchConfig::default(),
        };
        if let Some(n) = self.max_results {
            config.max_results = n;
        }
        if self.exclude_minus_words {
            config.exclusion = ExclusionPolicy::Enforce;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();
    let config = cli.search_config()?;
    tracing::debug!(?config, "search settings");

    match cli.command {
        Commands::Console => run_console(io::stdin().lock(), io::stdout().lock(), config),
        Commands::Query { input, stop_words, query, json } => {
            let docs = load_corpus(&input)?;
            let response = search_corpus(&docs, &stop_words, &query, config)?;
            let mut out = io::stdout().lock();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
            } else {
                for hit in &response.results {
                    writeln!(out, "{}", format_result(&ScoredDocument { id: hit.doc_id, relevance: hit.relevance }))?;
                }
            }
            Ok(())
        }
    }
}
