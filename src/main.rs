mod cli;
mod core;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tokrep", about = "Token usage HTML report generator", version)]
struct Cli {
    /// Input token log CSV (model, prompt_tokens, completion_tokens per row)
    csv: PathBuf,

    /// Output HTML report file
    output: PathBuf,

    /// Run summary format (text|json)
    #[arg(short, long)]
    format: Option<String>,

    /// Shorthand for --format json
    #[arg(short = 'j', long = "json")]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Verbose logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let output_opts = cli::output::OutputOptions::from_flags(
        cli.format.as_deref(),
        cli.json,
        cli.pretty,
        cli.no_color,
        cli.verbose,
    );

    cli::report_cmd::run(&cli.csv, &cli.output, &output_opts)
}
