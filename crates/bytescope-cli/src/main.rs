//! CLI for bytescope — watch randomness happen.

mod client;
mod commands;
mod tui;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bytescope")]
#[command(about = "bytescope — serve random byte streams and watch their patterns")]
#[command(version = bytescope_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP byte server
    Serve {
        /// Bind address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Bind port
        #[arg(long, default_value_t = 3000)]
        port: u16,

        /// Random device path backing the `urandom` source
        #[arg(long, default_value = bytescope_core::sources::DEFAULT_DEVICE_PATH)]
        device: String,
    },

    /// Poll a running server and draw live visualizations in the terminal
    Watch {
        /// Server base URL
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        url: String,

        /// Source to watch first (switchable with `s` at runtime)
        #[arg(long, default_value = "lcg", value_parser = ["urandom", "lcg", "math"])]
        source: String,

        /// Visualization to start with (cycle with `m` at runtime)
        #[arg(long, default_value = "bits", value_parser = ["bits", "distribution", "scatter", "color"])]
        mode: String,

        /// Bytes fetched per tick
        #[arg(long, default_value_t = 5000)]
        count: usize,

        /// Delay after each completed tick, in milliseconds
        #[arg(long, default_value_t = 500)]
        interval_ms: u64,
    },

    /// Dump bytes from a source directly, no server involved
    Sample {
        /// Source id
        #[arg(long, default_value = "lcg", value_parser = ["urandom", "lcg", "math"])]
        source: String,

        /// Number of bytes
        #[arg(long, default_value_t = 256)]
        count: usize,

        /// Output format
        #[arg(long, default_value = "hex", value_parser = ["hex", "raw"])]
        format: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { host, port, device } => commands::serve::run(&host, port, &device),
        Commands::Watch {
            url,
            source,
            mode,
            count,
            interval_ms,
        } => commands::watch::run(&url, &source, &mode, count, interval_ms),
        Commands::Sample {
            source,
            count,
            format,
        } => commands::sample::run(&source, count, &format),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
