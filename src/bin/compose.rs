//! Composes the application declared by the process environment.
//!
//! Usage:
//!
//! ```text
//! CONFIG=gropius.yml EXTENSIONS=audit ROOT_KIND=in_memory compose
//! ```
//!
//! `CONFIG` names a YAML (or `.json`) mapping of capability names to
//! settings. `RUST_LOG` overrides the default `gropius=info` log filter. The
//! process exits non-zero when startup fails.

use gropius::application::{self, Startup, StartupSettings};
use gropius::composition::adapters::ExtensionCatalog;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gropius=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let settings = StartupSettings::from_env();
    let startup = Startup::standard(Arc::new(ExtensionCatalog::new()));

    match application::initialize(|| startup.run(&settings)) {
        Ok(app) => {
            let root = app.root();
            for name in root.unit_names() {
                if let Some(unit) = root.unit(&name) {
                    info!(capability = %name, route = unit.route_prefix(), "serving");
                }
            }
            for (name, reason) in app.report().skipped() {
                info!(capability = %name, %reason, "not served");
            }
            info!(
                extensions = ?app.extensions(),
                started_at = %app.started_at(),
                "application composed"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "startup failed");
            ExitCode::FAILURE
        }
    }
}
