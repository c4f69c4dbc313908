//! Bootstrap entry point.
//!
//! # Responsibility
//! - Read configuration from the environment and run the first-run bootstrap.
//! - Exit non-zero on failure so startup aborts before serving traffic.

use petcatalog_core::{
    core_version, default_log_level, init_logging, run_bootstrap, Argon2Hasher, BootstrapOutcome,
    BootstrapSettings,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let settings = BootstrapSettings::from_env();

    if let Some(log_dir) = &settings.log_dir {
        let level = settings.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("petcatalog: logging disabled: {err}");
        }
    }

    log::info!("event=cli_start module=cli version={}", core_version());
    match run_bootstrap(&settings, &Argon2Hasher) {
        Ok(BootstrapOutcome::AlreadySeeded(counts)) => {
            println!(
                "petcatalog: store already has data ({} users, {} pets); nothing to seed",
                counts.users, counts.pets
            );
            ExitCode::SUCCESS
        }
        Ok(BootstrapOutcome::Seeded {
            admin_created,
            pets_created,
        }) => {
            println!(
                "petcatalog: seeded {} pets{}",
                pets_created,
                if admin_created {
                    " and the administrator account"
                } else {
                    ""
                }
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("event=cli_exit module=cli status=error error={err}");
            eprintln!("petcatalog: bootstrap failed: {err}");
            ExitCode::FAILURE
        }
    }
}
