use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque identifier assigned by the API when an issue is created.
pub type IssueId = String;

/// A tracked work item as delivered by the API.
///
/// The client never writes `id`, `created_at` or `updated_at`; they are kept exactly as the
/// server sent them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Issue {
    pub id: IssueId,
    pub title: String,
    pub status: IssueStatus,
    pub priority: IssuePriority,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "null_as_empty")
    )]
    pub assignee: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Issue {
    /// Creation timestamp formatted for display.
    pub fn created_at_display(&self) -> String {
        display_timestamp(&self.created_at)
    }

    /// Last update timestamp formatted for display.
    pub fn updated_at_display(&self) -> String {
        display_timestamp(&self.updated_at)
    }

    /// The assignee, or a placeholder when nobody is assigned.
    pub fn assignee_display(&self) -> &str {
        if self.assignee.trim().is_empty() {
            "Unassigned"
        } else {
            &self.assignee
        }
    }
}

/// Renders an RFC 3339 timestamp as `YYYY-MM-DD HH:MM`. Anything else is returned verbatim.
fn display_timestamp(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(feature = "serde")]
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The partial record sent to the API on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct IssueDraft {
    pub title: String,
    pub status: IssueStatus,
    pub priority: IssuePriority,
    pub assignee: String,
}

impl From<&Issue> for IssueDraft {
    fn from(issue: &Issue) -> Self {
        IssueDraft {
            title: issue.title.clone(),
            status: issue.status,
            priority: issue.priority,
            assignee: issue.assignee.clone(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} value: '{value}'")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

/// Workflow state of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IssueStatus {
    #[default]
    Open,
    InProgress,
    Done,
}

impl IssueStatus {
    pub const ALL: [IssueStatus; 3] = [
        IssueStatus::Open,
        IssueStatus::InProgress,
        IssueStatus::Done,
    ];

    /// The value used on the wire and in query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Open => "Open",
            IssueStatus::InProgress => "InProgress",
            IssueStatus::Done => "Done",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            IssueStatus::Open => "Open",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Done => "Done",
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IssueStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "status",
                value: s.to_string(),
            })
    }
}

/// How urgent an issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IssuePriority {
    Low,
    #[default]
    Medium,
    High,
}

impl IssuePriority {
    pub const ALL: [IssuePriority; 3] = [
        IssuePriority::Low,
        IssuePriority::Medium,
        IssuePriority::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssuePriority::Low => "Low",
            IssuePriority::Medium => "Medium",
            IssuePriority::High => "High",
        }
    }
}

impl fmt::Display for IssuePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssuePriority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IssuePriority::ALL
            .into_iter()
            .find(|priority| priority.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "priority",
                value: s.to_string(),
            })
    }
}
