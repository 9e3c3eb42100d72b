//! dyimport - Dynamic module loading with an authenticated TTL cache
//!
//! Loads each file name given on the command line through a module loader
//! and prints the resulting cache status as JSON.

use anyhow::{bail, Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dyimport::{Config, ModuleLoader};

/// Main entry point for the dyimport CLI.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the module loader (token, cache, search roots)
/// 4. Load every requested module
/// 5. Print the cache status
#[tokio::main]
async fn main() -> Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dyimport=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let file_names: Vec<String> = std::env::args().skip(1).collect();
    if file_names.is_empty() {
        bail!("usage: dyimport <file name>...");
    }

    let config = Config::from_env();
    info!(
        "Configuration loaded: capacity={:?}, default_ttl={}s, manifest={}",
        config.capacity,
        config.default_ttl,
        config.manifest.display()
    );

    let loader = ModuleLoader::from_config(&config)
        .await
        .context("Failed to initialize module loader")?;

    let mut failures = 0usize;
    for name in &file_names {
        match loader.load(name).await {
            Ok(module) => info!(
                "{} -> {} ({} bytes, sha256 {})",
                name,
                module.path.display(),
                module.len(),
                module.checksum
            ),
            Err(err) => {
                error!("Error importing module {}: {}", name, err);
                failures += 1;
            }
        }
    }

    let status = loader.status().context("Failed to read cache status")?;
    println!("{}", serde_json::to_string_pretty(&status)?);

    if failures > 0 {
        bail!("{} of {} modules failed to load", failures, file_names.len());
    }
    Ok(())
}
