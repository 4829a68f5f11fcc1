use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::Parser;
use qa_core::{load_files, Answer, AnswerConfig, IdfWeighting, LoaderConfig, QuestionAnswerer, Tokenizer, TokenizerConfig};
use tracing_subscriber::{EnvFilter, fmt};

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "qa")]
#[command(about = "Answer a question with the most relevant sentences of a text corpus", long_about = None)]
struct Cli {
    /// Directory holding the corpus files
    corpus: PathBuf,
    /// Number of top files whose sentences are ranked
    #[arg(long, default_value_t = 1, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    files: usize,
    /// Number of sentences to print
    #[arg(long, default_value_t = 1, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    sentences: usize,
    /// Query text; prompts on stdin when omitted
    #[arg(long)]
    query: Option<String>,
    /// Only load files with this extension, e.g. `txt`
    #[arg(long)]
    extension: Option<String>,
    /// Stem words before matching
    #[arg(long, default_value_t = false)]
    stem: bool,
    /// Use smoothed IDF = ln(1 + N/df) instead of ln(N/df)
    #[arg(long, default_value_t = false)]
    smoothed_idf: bool,
    /// Print matched files and sentences with their scores as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl Cli {
    fn answer_config(&self) -> AnswerConfig {
        AnswerConfig {
            file_matches: self.files,
            sentence_matches: self.sentences,
            idf_weighting: if self.smoothed_idf { IdfWeighting::Smoothed } else { IdfWeighting::Standard },
        }
    }
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let loader = LoaderConfig { extension: cli.extension.clone() };
    let texts = load_files(&cli.corpus, &loader)
        .with_context(|| format!("failed to load corpus from {}", cli.corpus.display()))?;

    let tokenizer = Tokenizer::new(TokenizerConfig { stem: cli.stem, ..Default::default() });
    let qa = QuestionAnswerer::new(texts, tokenizer, cli.answer_config())
        .with_context(|| format!("cannot answer questions over {}", cli.corpus.display()))?;

    let query = match &cli.query {
        Some(q) => q.clone(),
        None => prompt("Query: ")?,
    };
    let answer = qa.answer(&query)?;
    tracing::info!(query = %query, files = answer.files.len(), sentences = answer.sentences.len(), "answered query");
    print_answer(&answer, cli.json)
}

fn prompt(label: &str) -> Result<String> {
    prompt_from(io::stdin().lock(), io::stdout(), label)
}

fn prompt_from(mut input: impl BufRead, mut output: impl Write, label: &str) -> Result<String> {
    write!(output, "{label}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("failed to read query")?;
    Ok(line.trim_end().to_string())
}

fn print_answer(answer: &Answer, json: bool) -> Result<()> {
    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, answer)?;
        writeln!(out)?;
    } else {
        for sentence in &answer.sentences {
            writeln!(out, "{}", sentence.text)?;
        }
    }
    Ok(())
}
