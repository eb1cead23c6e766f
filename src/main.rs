use anyhow::Result;
use clap::Parser;
use tabstrip::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Route log::info!() etc. to the debug log file. When RUST_LOG is set,
    // also mirrors to stderr. --log-level takes precedence over both.
    tabstrip::debug::init_log_bridge(cli.log_level.map(|l| l.to_level_filter()));

    log::info!("Starting tabstrip {}", tabstrip::VERSION);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = cli::run(&cli, &mut out) {
        tabstrip::debug_error!("CLI", "{:#}", e);
        eprintln!("tabstrip: error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
