//! Parlay Engine Binary
//!
//! Serves the engine over a JSON-lines protocol: one request per stdin
//! line, one response per stdout line. Logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! echo '{"op":"simulate","legIds":[1,2],"outcomes":["Yes","Yes"],"stake":"10","probabilities":[500000,500000]}' \
//!   | cargo run --bin parlay-engine
//! ```
//!
//! # Environment Variables
//!
//! - `PARLAY_ENGINE_CONFIG`: Config file path (default: parlay-engine.yaml)
//! - `RUST_LOG`: Log filter (default: parlay_engine=<observability.logging.level>)

use std::io::{BufRead, Write};

use parlay_engine::config::load_config;
use parlay_engine::infrastructure::config::Container;
use parlay_engine::infrastructure::stdio::Dispatcher;
use parlay_engine::observability::init_tracing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    load_dotenv();

    let config = load_config(None)?;
    init_tracing(&config.observability.logging)?;

    tracing::info!(
        base_fee_bps = config.fees.base_fee_bps,
        per_leg_fee_bps = config.fees.per_leg_fee_bps,
        min_legs = config.limits.min_legs,
        max_legs = config.limits.max_legs,
        catalog_legs = config.catalog.legs.len(),
        "Starting parlay engine"
    );

    let container = Container::from_config(&config);
    let dispatcher = Dispatcher::new(&container);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    let mut handled: u64 = 0;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = dispatcher.handle_line(&line);
        writeln!(stdout, "{response}")?;
        stdout.flush()?;
        handled += 1;
    }

    tracing::info!(handled, "Input closed, shutting down");
    Ok(())
}

/// Load .env file from current directory or any ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}
