//! # Founder's Compass
//!
//! Terminal front end for the founder journey.
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │              apps/compass (THE BINARY)        │
//! │                                               │
//! │   ┌────────────┐  ┌────────────┐  ┌────────┐  │
//! │   │    CLI     │  │ Interactive│  │ Config │  │
//! │   │   (clap)   │  │   shell    │  │ (toml) │  │
//! │   └─────┬──────┘  └─────┬──────┘  └───┬────┘  │
//! │         └───────────────┼─────────────┘       │
//! │                         ▼                     │
//! │                ┌────────────────┐             │
//! │                │  compass-core  │             │
//! │                │  (THE LOGIC)   │             │
//! │                └────────────────┘             │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! compass                                   # interactive journey
//! compass estimate --team-size 5 --timeline 18
//! compass walk --choose funding-source=bootstrap --choose investor-type=micro-vc
//! compass --json-mode stages
//! ```

use clap::Parser;
use compass::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();

    // COMPASS_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("COMPASS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let default_filter = if cli.verbose {
        "compass=debug"
    } else {
        "compass=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
   ___                                   
  / __|___ _ __  _ __  __ _ ______ 
 | (__/ _ \ '  \| '_ \/ _` (_-<_-< 
  \___\___/_|_|_| .__/\__,_/__/__/ 
                |_|                

  The Founder's Financial Compass v{}

  Plan • Decide • Fund
"#,
        env!("CARGO_PKG_VERSION")
    );
}
