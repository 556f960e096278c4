//! CLI command implementations
//!
//! `init` prepares a data directory; `serve` opens it (replaying the
//! journal) and runs the HTTP server on a tokio runtime. `--ephemeral`
//! skips the journal entirely and serves from memory.

use std::path::Path;

use crate::domain::PlanetService;
use crate::http::{HttpConfig, HttpServer};
use crate::observability::{Logger, Severity};
use crate::store::{JournalStore, MemoryStore, PlanetStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Init { data_dir } => init(&data_dir),
        Command::Serve {
            data_dir,
            host,
            port,
            ephemeral,
        } => serve(&data_dir, &host, port, ephemeral),
    }
}

/// Initialize a data directory with an empty journal.
pub fn init(data_dir: &Path) -> CliResult<()> {
    if JournalStore::is_initialized(data_dir) {
        return Err(CliError::already_initialized());
    }

    JournalStore::init(data_dir).map_err(|e| CliError::io_error(e.to_string()))?;

    Logger::log(
        Severity::Info,
        "data_dir_initialized",
        &[("path", &data_dir.display().to_string())],
    );
    Ok(())
}

/// Open the store and run the HTTP server until the process exits.
pub fn serve(data_dir: &Path, host: &str, port: u16, ephemeral: bool) -> CliResult<()> {
    let config = HttpConfig::bind(host, port);

    if ephemeral {
        Logger::log(Severity::Info, "store_opened", &[("backend", "memory")]);
        return run_server(config, PlanetService::new(MemoryStore::new()));
    }

    if !JournalStore::is_initialized(data_dir) {
        return Err(CliError::not_initialized());
    }

    // Journal replay happens here; corruption fails the boot.
    let store = match JournalStore::open(data_dir) {
        Ok(store) => store,
        Err(e) => {
            Logger::log_stderr(
                Severity::Error,
                "store_open_failed",
                &[("error", &e.to_string())],
            );
            return Err(CliError::boot_failed(e.to_string()));
        }
    };
    let planets = store
        .count()
        .map_err(|e| CliError::boot_failed(e.to_string()))?;
    Logger::log(
        Severity::Info,
        "store_opened",
        &[("backend", "journal"), ("planets", &planets.to_string())],
    );

    run_server(config, PlanetService::new(store))
}

fn run_server<S: PlanetStore + 'static>(
    config: HttpConfig,
    service: PlanetService<S>,
) -> CliResult<()> {
    let server = HttpServer::new(config, service);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("failed to create tokio runtime: {e}")))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {e}")))
    })
}
