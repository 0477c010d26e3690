use std::path::PathBuf;

use clap::Parser;

/// Tutor: ask programming questions, get answers from a language model.
#[derive(Parser, Debug)]
#[command(name = "tutor", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override, e.g. `debug` or `tutor_ai=debug`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Model identifier (overrides config and TUTOR_MODEL).
    #[arg(short, long)]
    pub model: Option<String>,

    /// System instruction for the conversation (overrides config).
    #[arg(long)]
    pub system_prompt: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
