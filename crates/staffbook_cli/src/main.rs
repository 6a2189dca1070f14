//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `staffbook_core` linkage by running a fixed directory scenario.
//! - Optionally route core logs to `STAFFBOOK_LOG_DIR`.

use staffbook_core::{
    core_version, init_logging, EmployeeRepository, EmployeeService, InMemoryEmployeeRepository,
    LoggingConfig,
};
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "STAFFBOOK_LOG_DIR";
const LOG_LEVEL_ENV: &str = "STAFFBOOK_LOG_LEVEL";

fn main() -> ExitCode {
    if let Some(log_dir) = std::env::var_os(LOG_DIR_ENV) {
        let config = match std::env::var(LOG_LEVEL_ENV) {
            Ok(level) => LoggingConfig::new(level, log_dir),
            Err(_) => LoggingConfig::with_default_level(log_dir),
        };
        if let Err(err) = init_logging(&config) {
            eprintln!("staffbook: {err}");
            return ExitCode::FAILURE;
        }
    }

    println!("staffbook_core version={}", core_version());
    match run_scenario() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("staffbook: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_scenario() -> Result<(), Box<dyn std::error::Error>> {
    let service = EmployeeService::new(InMemoryEmployeeRepository::new());
    service.create_employee("Ivan", "Test", "QA")?;
    service.create_employee("Maksim", "Dev", "Frontend")?;
    service.create_employee("Alex", "Dev", "Backend")?;

    println!("departments={}", service.unique_departments()?.join(","));
    service.update_employee("Alex", None, Some("Fullstack"))?;

    let mut store = service.into_inner()?;
    store.formatted();
    for (index, slot) in store.read().iter().enumerate() {
        match slot {
            Some(employee) => println!("{index}: {employee}"),
            None => println!("{index}: <deleted>"),
        }
    }
    log::info!(
        "event=cli_scenario module=cli status=ok live={}",
        store.live_count()
    );
    Ok(())
}
