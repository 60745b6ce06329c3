use std::process::ExitCode;

use service::AppServices;
use tracing::{error, info};
use uuid::Uuid;

fn load_config() -> Option<configs::AppConfig> {
    // loads .env as well, so RUST_LOG and DATABASE_URL apply from here on
    match configs::AppConfig::load_and_validate() {
        Ok(cfg) => {
            common::utils::logging::init_logging(&cfg.logging.format, &cfg.logging.filter);
            Some(cfg)
        }
        Err(e) => {
            common::utils::logging::init_logging_default("");
            error!(service = "bootstrap", event = "config_invalid", error = %e, "failed to load configuration");
            None
        }
    }
}

fn main() -> ExitCode {
    let Some(cfg) = load_config() else { return ExitCode::FAILURE };

    let run_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(service = "bootstrap", event = "panic", %run_id, pid, message = %info, "unhandled panic occurred");
    }));

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = cfg.runtime.worker_threads {
        builder.worker_threads(w);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "bootstrap", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = "bootstrap",
        event = "start",
        %run_id,
        pid,
        version,
        backend = ?cfg.storage.backend,
        threads = cfg.runtime.worker_threads.unwrap_or_default(),
        "bootstrap starting"
    );

    rt.block_on(async move {
        let app = match AppServices::from_config(&cfg).await {
            Ok(app) => app,
            Err(e) => {
                error!(service = "bootstrap", event = "services_failed", error = %e, "failed to build services");
                return ExitCode::FAILURE;
            }
        };
        match app.inventory().await {
            Ok(inv) => {
                info!(
                    service = "bootstrap",
                    event = "inventory",
                    users = inv.users,
                    posts = inv.posts,
                    comments = inv.comments,
                    images = inv.images,
                    roles = inv.roles,
                    permissions = inv.permissions,
                    "collections ready"
                );
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(service = "bootstrap", event = "inventory_failed", error = %e, "failed to count records");
                ExitCode::FAILURE
            }
        }
    })
}
