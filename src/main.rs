//! failticket - open a Jira ticket from a failed task's log
//!
//! CLI binary that files one ticket per invocation and records the outcome
//! in an append-only audit log.

use anyhow::{Context, Result};
use clap::Parser;
use failticket::audit::AuditLog;
use failticket::types::Invocation;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "failticket")]
#[command(about = "Crear un ticket en Jira desde una tarea fallida")]
#[command(version)]
struct Cli {
    /// Nombre de la empresa
    #[arg(long, visible_alias = "company")]
    empresa: String,

    /// Nombre del servicio
    #[arg(long, visible_alias = "service")]
    servicio: String,

    /// Nombre del servidor
    #[arg(long, visible_alias = "server")]
    servidor: String,

    /// Nombre de la tarea fallida
    #[arg(long, visible_alias = "task")]
    tarea: String,

    /// Env file to load instead of ./.env
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Audit log path (defaults to registro_tickets.log next to the binary)
    #[arg(long, value_name = "PATH")]
    audit_log: Option<PathBuf>,

    /// Debug logging on stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default_directive = if verbose { "failticket=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .context("invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(anyhow::Error::msg)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let invocation = Invocation {
        company: cli.empresa,
        service: cli.servicio,
        server: cli.servidor,
        task: cli.tarea,
    };
    let audit = cli
        .audit_log
        .map_or_else(AuditLog::beside_executable, AuditLog::new);

    Ok(cli::run_create(&invocation, cli.env_file.as_deref(), &audit).await)
}
