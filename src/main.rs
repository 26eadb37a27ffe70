//! blockdoc - block-tree document tool

use std::collections::HashSet;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::Value;

use blockdoc::io::{read_document, read_document_from};
use blockdoc::{
    ContentPipeline, PipelineConfig, derive_slug, excerpt, extract_all_text, extract_text,
    parse_document, render_with_stats, resolve_unique_slug,
};

#[derive(Parser)]
#[command(name = "blockdoc")]
#[command(version, about = "Render and summarize block-tree documents", long_about = None)]
#[command(after_help = "EXAMPLES:
    blockdoc render post.json               Render a document to HTML
    blockdoc excerpt -n 120 post.json       Summarize a document
    cat post.json | blockdoc text -         Plain text from stdin
    blockdoc slug \"Hello, World!\"           Derive a slug from a title
    blockdoc derive -t \"Release 2\" post.json  Print the stored projection as JSON")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON pipeline configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a document and render it to HTML
    Render {
        /// Document JSON file, or - for stdin
        input: String,
    },
    /// Print the plain text of a document
    Text {
        input: String,
        /// Include nested children
        #[arg(short, long)]
        all: bool,
    },
    /// Print a bounded-length excerpt
    Excerpt {
        input: String,
        /// Maximum length before the ellipsis
        #[arg(short = 'n', long)]
        max_length: Option<usize>,
    },
    /// Derive a slug from a title
    Slug {
        title: String,
        /// Slug already taken in the target scope (repeatable)
        #[arg(long = "taken", value_name = "SLUG")]
        taken: Vec<String>,
    },
    /// Print the HTML, excerpt and slug projection as JSON
    Derive {
        input: String,
        /// Entry title
        #[arg(short, long)]
        title: String,
        /// Use this excerpt instead of generating one
        #[arg(short, long)]
        excerpt: Option<String>,
        /// Slug already taken in the target scope (repeatable)
        #[arg(long = "taken", value_name = "SLUG")]
        taken: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> blockdoc::Result<()> {
    let config = match &cli.config {
        Some(path) => PipelineConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => PipelineConfig::default(),
    };

    match cli.command {
        Command::Render { input } => {
            let document = parse_document(&load(&input)?)?;
            let result = render_with_stats(&document, &config.render);
            log::debug!(
                "rendered {} blocks, {} subtrees truncated",
                result.blocks_rendered,
                result.truncated
            );
            println!("{}", result.html);
        }
        Command::Text { input, all } => {
            let document = parse_document(&load(&input)?)?;
            if all {
                println!("{}", extract_all_text(&document, config.render.max_depth));
            } else {
                println!("{}", extract_text(&document));
            }
        }
        Command::Excerpt { input, max_length } => {
            let document = parse_document(&load(&input)?)?;
            let max_length = max_length.unwrap_or(config.excerpt_length);
            println!("{}", excerpt(&document, max_length));
        }
        Command::Slug { title, taken } => {
            let candidate = derive_slug(&title);
            if candidate.is_empty() {
                return Err(blockdoc::Error::EmptySlug);
            }
            let taken: HashSet<String> = taken.into_iter().collect();
            println!("{}", resolve_unique_slug(&candidate, &taken)?);
        }
        Command::Derive {
            input,
            title,
            excerpt,
            taken,
        } => {
            let taken: HashSet<String> = taken.into_iter().collect();
            let projection = ContentPipeline::with_config(config).derive(
                &load(&input)?,
                &title,
                excerpt.as_deref(),
                &taken,
            )?;
            println!("{}", serde_json::to_string_pretty(&projection)?);
        }
    }

    Ok(())
}

fn load(input: &str) -> blockdoc::Result<Value> {
    if input == "-" {
        read_document_from(std::io::stdin().lock())
    } else {
        read_document(input)
    }
}
