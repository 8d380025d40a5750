use clap::Parser;
use folio::core::config;
use folio::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "folio", about = "Terminal browser for paginated posts")]
struct Args {
    /// Base URL of the posts API
    #[arg(long)]
    base_url: Option<String>,

    /// Posts fetched per page
    #[arg(long)]
    page_size: Option<u32>,

    /// Milliseconds a fetched page stays fresh before a refetch
    #[arg(long)]
    stale_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to folio.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("folio.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("folio: {}", e);
            std::process::exit(1);
        }
    };

    let resolved = config::resolve(
        file_config,
        config::Overrides {
            base_url: args.base_url,
            page_size: args.page_size,
            stale_ms: args.stale_ms,
        },
    );

    log::info!(
        "Folio starting up (base_url={}, page_size={}, stale_after={}ms)",
        resolved.base_url,
        resolved.page_size,
        resolved.stale_ms
    );

    tui::run(resolved)
}
