//! Counts word shingles from a text file (or stdin) and reports prefix counts as JSON.
//!
//! ```text
//! cargo run --example shingle_counts -- --order 3 corpus.txt -q "the cat" -q "a"
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use shingle_trie::collections::ShingleTrie;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

const SENTENCE_START: &str = "^";
const SENTENCE_END: &str = "$";

#[derive(Parser)]
#[command(name = "shingle_counts")]
#[command(about = "Count word shingles and query prefix frequencies", long_about = None)]
struct Cli {
    /// Input file, one sentence per line. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Maximum shingle length
    #[arg(long, default_value_t = 3)]
    order: usize,

    /// Prefix to report, as space-separated words (repeatable)
    #[arg(short, long = "query")]
    queries: Vec<String>,
}

#[derive(Serialize)]
struct Report {
    total: u64,
    nodes: usize,
    single_positions: usize,
    multi_positions: usize,
    max_depth: usize,
    queries: Vec<QueryResult>,
}

#[derive(Serialize)]
struct QueryResult {
    prefix: Vec<String>,
    count: Option<u64>,
    continuations: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    anyhow::ensure!(cli.order > 0, "--order must be at least 1");

    let text = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let mut trie: ShingleTrie<String, u64> = ShingleTrie::new();
    for line in text.lines() {
        add_sentence(&mut trie, line, cli.order);
    }

    let stats = trie.stats();
    let queries = cli
        .queries
        .iter()
        .map(|query| {
            let prefix: Vec<String> = query.split_whitespace().map(String::from).collect();
            QueryResult {
                count: trie.count(&prefix),
                continuations: trie.children(&prefix).len(),
                prefix,
            }
        })
        .collect();

    let report = Report {
        total: trie.total(),
        nodes: stats.nodes,
        single_positions: stats.single_positions,
        multi_positions: stats.multi_positions,
        max_depth: stats.max_depth,
        queries,
    };

    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    println!("{json}");

    Ok(())
}

/// Brackets a sentence with boundary markers and records every window of up
/// to `order` tokens, including the shorter ones at the end.
fn add_sentence(trie: &mut ShingleTrie<String, u64>, line: &str, order: usize) {
    let words = line.split_whitespace();
    if words.clone().next().is_none() {
        return;
    }

    let tokens: Vec<String> = std::iter::once(SENTENCE_START)
        .chain(words)
        .chain(std::iter::once(SENTENCE_END))
        .map(String::from)
        .collect();

    for start in 0..tokens.len() - 1 {
        let end = (start + order).min(tokens.len());
        trie.insert(&tokens[start..end], 1);
    }
}
