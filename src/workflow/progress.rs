//! Progress callback trait for interface-agnostic updates

use async_trait::async_trait;
use std::fmt;

/// Pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Exchanging the bearer credential for a session token
    FetchingToken,
    /// Reading the failed task's log
    ReadingLog,
    /// Submitting the ticket
    CreatingIssue,
    /// Pipeline finished (successfully or not)
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::FetchingToken => "Obteniendo token",
            Self::ReadingLog => "Leyendo log",
            Self::CreatingIssue => "Creando ticket",
            Self::Complete => "Terminado",
        };
        f.write_str(label)
    }
}

/// Progress callback trait
///
/// The CLI drives a spinner from it; tests use [`NoopProgress`].
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
}
