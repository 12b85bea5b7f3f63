use anyhow::{bail, Context, Result};
use search_core::{DocId, IndexBuilder, ScoredDocument, SearchConfig, SearchServer};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Deserialize)]
pub struct InputDoc {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub total_docs: u32,
    pub results: Vec<SearchHit>,
}

#[derive(Debug, Serialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub relevance: f64,
    pub external_id: Option<String>,
    pub title: Option<String>,
}

/// Render one result the way the console protocol expects it.
pub fn format_result(doc: &ScoredDocument) -> String {
    format!("{{ document_id = {}, relevance = {} }}", doc.id, doc.relevance)
}

/// Console session: stop words line, document count line, one line per document, query line.
pub fn run_console<R: BufRead, W: Write>(reader: R, mut writer: W, config: SearchConfig) -> Result<()> {
    let mut lines = reader.lines();
    let mut next_line = || -> Result<Option<String>> { lines.next().transpose().context("reading stdin") };

    let stop_words = next_line()?.unwrap_or_default();
    let count_line = next_line()?.context("missing document count line")?;
    let count: u32 = count_line
        .trim()
        .parse()
        .with_context(|| format!("invalid document count {count_line:?}"))?;

    let mut builder = IndexBuilder::new();
    builder.set_stop_words(&stop_words)?;
    builder.set_document_count(count);
    for doc_id in 0..count {
        let Some(doc) = next_line()? else { break };
        builder.add_document(doc_id, &doc)?;
    }
    let query = next_line()?.unwrap_or_default();

    let index = builder.build().context("building index from console input")?;
    let server = SearchServer::new(index, config)?;
    tracing::info!(num_docs = server.document_count(), "index ready");
    for doc in server.find_top_documents(&query) {
        writeln!(writer, "{}", format_result(&doc))?;
    }
    Ok(())
}

/// Collect `.json`/`.jsonl` files under `input` (or `input` itself), in a stable order.
pub fn corpus_files(input: &Path) -> Result<Vec<PathBuf>> {
    if !input.exists() {
        bail!("input path {} does not exist", input.display());
    }
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(input).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walking {}", input.display()))?;
        let p = entry.path();
        if p.is_file() && matches!(p.extension().and_then(|s| s.to_str()), Some("json" | "jsonl")) {
            files.push(p.to_path_buf());
        }
    }
    Ok(files)
}

pub fn load_corpus(input: &Path) -> Result<Vec<InputDoc>> {
    let mut docs = Vec::new();
    for file in corpus_files(input)? {
        if file.extension().and_then(|s| s.to_str()) == Some("jsonl") {
            load_jsonl(&file, &mut docs)?;
        } else {
            load_json(&file, &mut docs)?;
        }
    }
    tracing::info!(input = %input.display(), num_docs = docs.len(), "loaded corpus");
    Ok(docs)
}

fn load_jsonl(file: &Path, docs: &mut Vec<InputDoc>) -> Result<()> {
    let reader = BufReader::new(File::open(file).with_context(|| format!("opening {}", file.display()))?);
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let doc: InputDoc = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: invalid document", file.display(), n + 1))?;
        docs.push(doc);
    }
    Ok(())
}

fn load_json(file: &Path, docs: &mut Vec<InputDoc>) -> Result<()> {
    let text = fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let json: serde_json::Value = serde_json::from_str(&text)?;
    match json {
        serde_json::Value::Array(arr) => {
            for v in arr {
                docs.push(serde_json::from_value(v)?);
            }
        }
        serde_json::Value::Object(_) => docs.push(serde_json::from_value(json)?),
        _ => bail!("{}: expected a document object or an array of documents", file.display()),
    }
    Ok(())
}

/// Index `docs` in load order and answer a single query.
pub fn search_corpus(docs: &[InputDoc], stop_words: &str, query: &str, config: SearchConfig) -> Result<SearchResponse> {
    let server = SearchServer::from_documents(stop_words, docs.iter().map(|d| d.body.as_str()), config)?;
    let results = server
        .find_top_documents(query)
        .into_iter()
        .map(|scored| {
            let doc = &docs[scored.id as usize];
            SearchHit { doc_id: scored.id, relevance: scored.relevance, external_id: doc.id.clone(), title: doc.title.clone() }
        })
        .collect();
    Ok(SearchResponse { query: query.to_string(), total_docs: server.document_count(), results })
}

/// Read a JSON `SearchConfig` file. Missing fields take their defaults.
pub fn load_config(path: &Path) -> Result<SearchConfig> {
    let text = fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    let config: SearchConfig = serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}
