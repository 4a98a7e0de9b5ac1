//! Append-only audit log
//!
//! Every run, successful or not, leaves exactly one line:
//!
//! ```text
//! [2026-10-16 03:12:45] Empresa: Acme | Servicio: Billing | Servidor: db01 | Tarea: nightly-sync | Resultado: ✅ Ticket creado: PROJ-42
//! ```

use crate::error::{Error, Result};
use crate::types::Invocation;
use chrono::{DateTime, Local};
use std::env;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// File name used when the log sits next to the executable
pub const DEFAULT_AUDIT_FILE: &str = "registro_tickets.log";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Appends run outcomes to a text file
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    /// Audit log at an explicit path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Audit log in the directory of the running executable
    ///
    /// Falls back to the working directory if the executable path is
    /// unavailable.
    pub fn beside_executable() -> Self {
        let dir = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir.join(DEFAULT_AUDIT_FILE))
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line for this run, stamped with the current local time
    pub async fn record(&self, invocation: &Invocation, outcome: &str) -> Result<()> {
        let line = format_entry(Local::now(), invocation, outcome);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|source| self.write_error(source))?;

        file.write_all(line.as_bytes())
            .await
            .map_err(|source| self.write_error(source))?;
        file.flush().await.map_err(|source| self.write_error(source))?;

        tracing::debug!(path = %self.path.display(), "recorded audit entry");
        Ok(())
    }

    fn write_error(&self, source: std::io::Error) -> Error {
        Error::AuditLog {
            path: self.path.clone(),
            source,
        }
    }
}

/// Render one audit line, newline included
///
/// Line breaks inside the invocation fields or the outcome are collapsed so
/// an entry never spans more than one line.
pub fn format_entry(timestamp: DateTime<Local>, invocation: &Invocation, outcome: &str) -> String {
    format!(
        "[{}] Empresa: {} | Servicio: {} | Servidor: {} | Tarea: {} | Resultado: {}\n",
        timestamp.format(TIMESTAMP_FORMAT),
        single_line(&invocation.company),
        single_line(&invocation.service),
        single_line(&invocation.server),
        single_line(&invocation.task),
        single_line(outcome)
    )
}

fn single_line(text: &str) -> String {
    text.split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn invocation() -> Invocation {
        Invocation {
            company: "Acme".to_string(),
            service: "Billing".to_string(),
            server: "db01".to_string(),
            task: "nightly-sync".to_string(),
        }
    }

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 9, 7, 5, 1).unwrap()
    }

    #[test]
    fn test_format_entry() {
        let line = format_entry(fixed_time(), &invocation(), "✅ Ticket creado: PROJ-42");
        assert_eq!(
            line,
            "[2026-03-09 07:05:01] Empresa: Acme | Servicio: Billing | Servidor: db01 | Tarea: nightly-sync | Resultado: ✅ Ticket creado: PROJ-42\n"
        );
    }

    #[test]
    fn test_multiline_outcome_collapsed() {
        let line = format_entry(fixed_time(), &invocation(), "❌ boom | Respuesta: {\n  \"a\": 1\r\n}");
        assert_eq!(line.matches('\n').count(), 1);
        assert!(line.ends_with("Resultado: ❌ boom | Respuesta: {   \"a\": 1 }\n"));
    }

    #[test]
    fn test_multiline_invocation_fields_collapsed() {
        let invocation = Invocation {
            company: "A\nB".to_string(),
            service: "Billing\r\n".to_string(),
            server: "db01".to_string(),
            task: "nightly\n\nsync".to_string(),
        };
        let line = format_entry(fixed_time(), &invocation, "ok");

        assert_eq!(line.matches('\n').count(), 1);
        assert_eq!(
            line,
            "[2026-03-09 07:05:01] Empresa: A B | Servicio: Billing | Servidor: db01 | Tarea: nightly sync | Resultado: ok\n"
        );
    }

    #[tokio::test]
    async fn test_record_appends() {
        let dir = tempfile::tempdir().unwrap();
        let log = AuditLog::new(dir.path().join(DEFAULT_AUDIT_FILE));

        log.record(&invocation(), "first").await.unwrap();
        log.record(&invocation(), "second").await.unwrap();

        let content = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("Resultado: first"));
        assert!(lines[1].ends_with("Resultado: second"));
    }

    #[tokio::test]
    async fn test_record_keeps_existing_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_AUDIT_FILE);
        std::fs::write(&path, "[2020-01-01 00:00:00] earlier run\n").unwrap();

        AuditLog::new(&path).record(&invocation(), "later").await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[2020-01-01 00:00:00] earlier run\n"));
        assert_eq!(content.lines().count(), 2);
    }

    #[tokio::test]
    async fn test_unwritable_location() {
        let dir = tempfile::tempdir().unwrap();
        let log = AuditLog::new(dir.path().join("missing-dir").join(DEFAULT_AUDIT_FILE));

        assert!(matches!(
            log.record(&invocation(), "x").await,
            Err(Error::AuditLog { .. })
        ));
    }
}
