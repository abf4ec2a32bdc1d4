use clap::Parser;
use eyre::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;
use commands::EmbedCommand;

mod constants;

mod encoder;

mod header;

mod names;

/// Embed a file into a C header as a comma separated list of byte values.
#[derive(Debug, Parser)]
#[clap(
    name = "embed",
    override_usage = "embed [-o output] [-d define] [-f] filename",
    args_override_self = true,
    disable_help_flag = true
)]
struct Cli {
    #[clap(flatten)]
    command: EmbedCommand,
}

fn main() -> Result<()> {
    // Failures print as a color-eyre report: the message, its cause chain and location.
    color_eyre::install()?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    cli.command.run()
}
