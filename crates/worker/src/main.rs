//! `elections-worker` -- one-shot election status reconciler.
//!
//! Intended to be run on a schedule by cron or a similar trigger. Each run
//! recomputes every election's status and writes back the ones that changed.
//!
//! # Environment variables
//!
//! | Variable      | Required | Default | Description              |
//! |---------------|----------|---------|--------------------------|
//! | `DB_NAME`     | yes      | --      | Database name            |
//! | `DB_USER`     | yes      | --      | Database role            |
//! | `DB_PASSWORD` | no       | --      | Password for `DB_USER`   |
//! | `DB_HOST`     | yes      | --      | Database host            |
//! | `DB_PORT`     | no       | `5432`  | Database port            |
//!
//! Exits with status 0 when every election was reconciled, 1 otherwise.

use std::process::ExitCode;

use elections_worker::config::DbConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "elections_worker=info,elections_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match DbConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid database configuration");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        host = %config.host,
        port = config.port,
        dbname = %config.dbname,
        "Loaded database configuration"
    );

    let now = chrono::Local::now().naive_local();

    match elections_worker::run(&config, now).await {
        Ok(report) if report.is_clean() => {
            tracing::info!(
                scanned = report.scanned,
                updated = report.updated,
                unchanged = report.unchanged,
                skipped = report.skipped,
                "Election status reconciliation complete"
            );
            ExitCode::SUCCESS
        }
        Ok(report) => {
            tracing::error!(
                scanned = report.scanned,
                updated = report.updated,
                failed = report.failed(),
                failed_ids = ?report.failed_ids,
                "Election status reconciliation finished with failures"
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!(error = %e, "Election status reconciliation aborted");
            ExitCode::FAILURE
        }
    }
}
