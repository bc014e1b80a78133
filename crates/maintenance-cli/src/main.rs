//! `pims-maint` — operator CLI for the PIMS maintenance module.
//!
//! Inspects the module's route table without a running server (`routes`,
//! `resolve`, `reverse`) and pings a live server's health endpoint
//! (`check`). The table printed here is the one the server serves; both
//! come from the same declarations.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use maintenance_core::route::RouteName;
use maintenance_core::table::RouteTable;
use maintenance_server::routes;

/// PIMS maintenance module — route table inspector.
#[derive(Parser)]
#[command(
    name = "pims-maint",
    version,
    about = "Inspect the maintenance route table and check a running server",
    after_help = "Environment variables:\n  \
        PIMS_ADDR    Server address for `check` (default: http://127.0.0.1:8088)\n\n\
        Examples:\n  \
        pims-maint routes\n  \
        pims-maint resolve /maintenance/42/edit/\n  \
        pims-maint reverse api_month_events 2024 3\n  \
        pims-maint check"
)]
struct Cli {
    /// Maintenance server address.
    #[arg(long, env = "PIMS_ADDR", default_value = "http://127.0.0.1:8088")]
    addr: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full route table.
    Routes,
    /// Resolve a request path to its route name and parameters.
    Resolve {
        /// Concrete path, e.g. `/maintenance/42/edit/`.
        path: String,
    },
    /// Build the URL for a named route.
    Reverse {
        /// Symbolic route name, e.g. `edit`.
        name: String,
        /// Integer parameters in pattern order.
        args: Vec<i64>,
    },
    /// Ping a running server's health endpoint.
    Check,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let table = routes::table().context("route table construction failed")?;

    match cli.command {
        Commands::Routes => {
            print_routes(&table);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Resolve { path } => Ok(resolve(&table, &path)),
        Commands::Reverse { name, args } => {
            let name: RouteName = name.parse()?;
            let url = table.reverse(name, &args)?;
            println!("{url}");
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check => check(&cli.addr).await,
    }
}

fn print_routes(table: &RouteTable) {
    for def in table.iter() {
        // Width formatting needs `&str`; custom `Display` impls ignore it.
        println!(
            "{:<6} {:<52} {}",
            def.method.as_str(),
            def.pattern.as_str(),
            def.name.as_str()
        );
    }
}

fn resolve(table: &RouteTable, path: &str) -> ExitCode {
    match table.resolve(path) {
        Some(m) => {
            let mut line = m.def.name.to_string();
            for (param, value) in &m.params {
                line.push_str(&format!("  {param}={value}"));
            }
            println!("{line}");
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("no route matches '{path}'");
            ExitCode::FAILURE
        }
    }
}

async fn check(addr: &str) -> Result<ExitCode> {
    let url = format!("{}/health", addr.trim_end_matches('/'));

    let response = reqwest::get(&url)
        .await
        .with_context(|| format!("failed to reach {url}"))?
        .error_for_status()
        .context("health check failed")?;

    let health: serde_json::Value = response.json().await.context("invalid health response")?;
    println!("{}", serde_json::to_string_pretty(&health)?);

    Ok(ExitCode::SUCCESS)
}
