//! Error types for failticket
//!
//! Display strings double as the user-facing outcome text, so they are
//! kept in the same language as the audit log.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the ticket pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// One or more required environment variables are absent or empty
    #[error("Faltan variables en el archivo .env: {}", .0.join(", "))]
    MissingConfiguration(Vec<&'static str>),

    /// A variable is present but cannot be used
    #[error("Configuración inválida en {variable}: {reason}")]
    InvalidConfiguration {
        /// Environment variable name
        variable: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// An explicitly requested env file could not be loaded
    #[error("No se pudo cargar {}: {source}", .path.display())]
    EnvFile {
        /// Path of the env file
        path: PathBuf,
        /// Underlying dotenvy error
        #[source]
        source: dotenvy::Error,
    },

    /// The token webservice call failed or returned a non-success status
    #[error("Error al obtener token: {0}")]
    TokenFetch(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The task log could not be read
    #[error("Error al leer el archivo log {}: {source}", .path.display())]
    LogRead {
        /// Configured log path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The issue tracker rejected or never answered the create request
    #[error(
        "Error al crear el ticket: {cause} | Respuesta: {}",
        .body.as_deref().unwrap_or("<sin respuesta>")
    )]
    TicketSubmission {
        /// Proximate cause (transport error, HTTP status, bad response)
        cause: String,
        /// Raw response body, if a response was received at all
        body: Option<String>,
    },

    /// The audit log could not be appended to
    #[error("No se pudo escribir el registro {}: {source}", .path.display())]
    AuditLog {
        /// Audit log path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Result type alias for failticket operations
pub type Result<T> = std::result::Result<T, Error>;
