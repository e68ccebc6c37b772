#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # gradegenius
//!
//! Serves the grading API, or runs the local submission classifier against a
//! file for quick inspection.
//!
//! Configuration comes from the environment (a `.env` file is honored):
//! `OPENAI_API_KEY` is required to serve; `OPENAI_ENDPOINT`, `OPENAI_MODEL`,
//! `GRADEGENIUS_BIND`, and `GRADEGENIUS_REFINEMENT` are optional.

use std::sync::Arc;

use anyhow::{Context, Result};
use bpaf::*;
use dotenvy::dotenv;
use gradegenius::{
    classify::heuristic,
    config,
    grade::Grader,
    provider::OpenAiChat,
    server,
};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Run the grading HTTP service
    Serve,
    /// Print the heuristic classification of a file's contents
    Classify(String),
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the file to classify
    fn f() -> impl Parser<String> {
        positional("FILENAME").help("File whose contents should be classified")
    }

    let serve = pure(Cmd::Serve)
        .to_options()
        .command("serve")
        .help("Serve the grading API");

    let classify = construct!(Cmd::Classify(f()))
        .to_options()
        .command("classify")
        .help("Classify a file as code or essay using the local heuristic");

    let cmd = construct!([serve, classify]);

    cmd.to_options().descr("AI grading service").run()
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let cmd = options();

    match cmd {
        Cmd::Serve => {
            let cfg = config::ensure_initialized()?;
            let openai = cfg
                .openai()
                .context("OPENAI_API_KEY must be set to serve grading requests")?;

            let provider = Arc::new(OpenAiChat::new(
                openai.api_base(),
                openai.api_key(),
                openai.model(),
            ));
            let grader = Arc::new(Grader::new(provider, cfg.refinement_enabled()));

            server::serve(cfg.bind_addr(), grader).await?;
        }
        Cmd::Classify(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Could not read {path}"))?;
            println!("{}", heuristic::detect(&text));
        }
    }

    Ok(())
}
