//! Enumerations for task categorisation.
//!
//! This module defines the closed field types used on every task: the work
//! kind, the priority level, and the workflow status. The serde spellings
//! are part of the persisted JSON contract and must not change.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What kind of work a task represents.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    #[default]
    Feature,
    Bug,
    Refactor,
}

/// Priority classification for task importance.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

/// Workflow status. Tasks move pending -> in-progress -> completed by
/// convention, but no transition is forbidden by the store.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Completed,
}

/// Format a task kind for display.
pub fn format_kind(k: Kind) -> &'static str {
    match k {
        Kind::Feature => "Feature",
        Kind::Bug => "Bug",
        Kind::Refactor => "Refactor",
    }
}

/// Format a priority level for display.
pub fn format_priority(p: Priority) -> &'static str {
    match p {
        Priority::High => "High",
        Priority::Medium => "Medium",
        Priority::Low => "Low",
    }
}

/// Format a task status for display.
pub fn format_status(s: Status) -> &'static str {
    match s {
        Status::Pending => "Pending",
        Status::InProgress => "InProgress",
        Status::Completed => "Completed",
    }
}
