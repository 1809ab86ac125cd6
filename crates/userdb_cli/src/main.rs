//! CLI entry point over `userdb_core`.
//!
//! # Responsibility
//! - Resolve configuration from flags and environment.
//! - Route `create`/`get` through the service and `update`/`delete`
//!   through the store the service holds.

mod args;

use args::{Cli, Commands};
use clap::Parser;
use std::process::ExitCode;
use userdb_core::{
    core_version, default_log_level, init_logging, ping, SqliteUserStore, StoreResult,
    UserResponse, UserService, UserStore, UserUpdate,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    if let Commands::Ping = cli.command {
        println!("userdb_core ping={} version={}", ping(), core_version());
        return ExitCode::SUCCESS;
    }

    let store = match open_store(&cli) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let service = UserService::new(store);
    let code = match cli.command {
        Commands::Create { name, age } => print_response(service.create_user(&name, age)),
        Commands::Get { id } => print_response(service.get_user(id)),
        Commands::Update { id, name, age } => {
            let update = UserUpdate { name, age };
            print_rows(service.store().update_user(id, &update))
        }
        Commands::Delete { id } => print_rows(service.store().delete_user(id)),
        Commands::Ping => ExitCode::SUCCESS,
    };
    service.shutdown();
    code
}

fn open_store(cli: &Cli) -> StoreResult<SqliteUserStore> {
    if cli.memory {
        SqliteUserStore::open_in_memory()
    } else {
        SqliteUserStore::open(&cli.db)
    }
}

/// Prints `<status> <payload>`; 4xx and 5xx exit non-zero.
fn print_response(response: UserResponse) -> ExitCode {
    let (payload, status) = response.into_parts();
    println!("{status} {payload}");
    if status < 400 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_rows(result: StoreResult<usize>) -> ExitCode {
    match result {
        Ok(rows) => {
            println!("rows_affected={rows}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
