//! Issue creation payload
//!
//! Jira Cloud v3 takes descriptions in Atlassian Document Format (ADF). The
//! whole ticket text goes into a single paragraph with a single text node.

use crate::types::Invocation;
use serde::Serialize;

/// Issue type used for every ticket
pub const ISSUE_TYPE: &str = "Task";

/// Body of `POST /rest/api/3/issue`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuePayload {
    /// Issue fields
    pub fields: IssueFields,
}

/// Fields of a new issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueFields {
    /// Target project
    pub project: ProjectRef,
    /// One-line title
    pub summary: String,
    /// Rich-text body
    pub description: AdfDocument,
    /// Issue type
    #[serde(rename = "issuetype")]
    pub issue_type: IssueTypeRef,
}

/// Project reference by key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRef {
    /// Project key (e.g., "PROJ")
    pub key: String,
}

/// Issue type reference by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueTypeRef {
    /// Issue type name
    pub name: String,
}

/// Top-level ADF document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdfDocument {
    #[serde(rename = "type")]
    kind: &'static str,
    version: u8,
    content: Vec<AdfNode>,
}

/// ADF block or inline node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AdfNode {
    /// Paragraph holding inline nodes
    Paragraph {
        /// Inline children
        content: Vec<AdfNode>,
    },
    /// Plain text
    Text {
        /// Literal text, line breaks included
        text: String,
    },
}

impl AdfDocument {
    /// A document made of one paragraph of plain text
    pub fn plain_text(text: String) -> Self {
        Self {
            kind: "doc",
            version: 1,
            content: vec![AdfNode::Paragraph {
                content: vec![AdfNode::Text { text }],
            }],
        }
    }
}

impl IssuePayload {
    /// Build the ticket for a failed task
    pub fn for_failed_task(project_key: &str, invocation: &Invocation, log: &str) -> Self {
        Self {
            fields: IssueFields {
                project: ProjectRef {
                    key: project_key.to_string(),
                },
                summary: ticket_summary(invocation),
                description: AdfDocument::plain_text(ticket_description(invocation, log)),
                issue_type: IssueTypeRef {
                    name: ISSUE_TYPE.to_string(),
                },
            },
        }
    }
}

/// Ticket title: `Tarea fallida - <server> - <company>`
pub fn ticket_summary(invocation: &Invocation) -> String {
    format!(
        "Tarea fallida - {} - {}",
        invocation.server, invocation.company
    )
}

/// Ticket body: the four invocation parameters followed by the full log
pub fn ticket_description(invocation: &Invocation, log: &str) -> String {
    format!(
        "*Empresa:* {}\n*Servicio:* {}\n*Servidor:* {}\n*Tarea fallida:* {}\n\n*Log:*\n{}",
        invocation.company, invocation.service, invocation.server, invocation.task, log
    )
}
