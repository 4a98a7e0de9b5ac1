//! Test data factories for failticket types
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use failticket::types::{CreatedIssue, Invocation};
use std::path::{Path, PathBuf};

/// The invocation used throughout the docs and tests
pub fn acme_invocation() -> Invocation {
    Invocation {
        company: "Acme".to_string(),
        service: "Billing".to_string(),
        server: "db01".to_string(),
        task: "nightly-sync".to_string(),
    }
}

/// An invocation with separators and non-ASCII text in every field
pub fn awkward_invocation() -> Invocation {
    Invocation {
        company: "Müller & Söhne | GmbH".to_string(),
        service: "Facturación".to_string(),
        server: "db-01.internal".to_string(),
        task: "sync *nightly* [prod]".to_string(),
    }
}

/// A created issue with the given key
pub fn make_issue(key: &str) -> CreatedIssue {
    CreatedIssue {
        id: Some("10042".to_string()),
        key: key.to_string(),
        self_url: Some(format!("https://acme.atlassian.net/rest/api/3/issue/{key}")),
    }
}

/// Write a task log into `dir` and return its path
pub fn write_log(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("task.log");
    std::fs::write(&path, content).expect("write task log");
    path
}
