use std::process::ExitCode;

use service::seed::{seed, SeedPlan};
use service::AppServices;
use tracing::{error, info};

/// Usage: `seed [--reset]`. Volumes come from the `[seed]` config section.
fn main() -> ExitCode {
    let cfg = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => {
            common::utils::logging::init_logging(&cfg.logging.format, &cfg.logging.filter);
            cfg
        }
        Err(e) => {
            common::utils::logging::init_logging_default("");
            error!(service = "seed", event = "config_invalid", error = %e, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let mut plan = SeedPlan::from(&cfg.seed);
    plan.reset = std::env::args().skip(1).any(|a| a == "--reset");

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = cfg.runtime.worker_threads {
        builder.worker_threads(w);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "seed", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(service = "seed", event = "start", ?plan, backend = ?cfg.storage.backend, "seeding");

    rt.block_on(async move {
        let app = match AppServices::from_config(&cfg).await {
            Ok(app) => app,
            Err(e) => {
                error!(service = "seed", event = "services_failed", error = %e, "failed to build services");
                return ExitCode::FAILURE;
            }
        };
        match seed(&app, plan).await {
            Ok(report) => {
                info!(service = "seed", event = "stop", ?report, "seed completed");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(service = "seed", event = "seed_failed", error = %e, "seeding failed");
                ExitCode::FAILURE
            }
        }
    })
}
