use anyhow::Result;
use binarch_cli::{commands, InputFormat, DEFAULT_MAX_DEPTH};
use binarch_core::CodecConfig;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "binarch")]
#[command(about = "Binarch - type-driven binary archives of JSON documents", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Largest length field accepted on encode and decode
    #[arg(long, global = true)]
    max_length: Option<u64>,

    /// Deepest document nesting accepted on decode
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack JSON documents into an archive
    Pack {
        /// Input file (`-` for stdin)
        #[arg(short, long)]
        input: String,

        /// Output archive
        #[arg(short, long)]
        output: String,

        /// Input layout
        #[arg(long, value_enum, default_value = "json")]
        format: InputFormat,

        /// Show a progress bar
        #[arg(long)]
        progress: bool,
    },

    /// Unpack an archive back to a JSON array
    Unpack {
        /// Input archive (`-` for stdin)
        #[arg(short, long)]
        input: String,

        /// Output JSON file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Decode an archive and print a summary
    Inspect {
        /// Input archive (`-` for stdin)
        #[arg(short, long)]
        input: String,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mut config = CodecConfig::new().with_max_depth(cli.max_depth);
    if let Some(max_length) = cli.max_length {
        config = config.with_max_length(max_length);
    }

    match cli.command {
        Commands::Pack {
            input,
            output,
            format,
            progress,
        } => commands::pack::execute(&input, &output, format, config, progress),

        Commands::Unpack { input, output } => {
            commands::unpack::execute(&input, output.as_deref(), config)
        }

        Commands::Inspect { input, json } => commands::inspect::execute(&input, json, config),
    }
}
