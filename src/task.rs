//! Task data structure and creation input.
//!
//! This module defines the core `Task` struct that represents a single work
//! item. The serde field names (`type`, `estimatedTime`, `createdAt`, ...)
//! are the persisted JSON contract; renaming any of them breaks round-trip
//! compatibility with previously stored collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::fields::{Kind, Priority, Status};

/// A single trackable unit of work.
///
/// Only `status` is mutable after creation; every other field is fixed at
/// creation time. `deadline` and `estimated_time` are opaque strings the
/// core never interprets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: Kind,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(rename = "estimatedTime", default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied input for creating a task.
///
/// `tags` is the raw comma-separated form; the store normalises it. The id
/// and creation timestamp are assigned by the store, never by the caller.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub kind: Kind,
    pub priority: Priority,
    pub deadline: Option<String>,
    pub estimated_time: Option<String>,
    pub tags: String,
    pub description: String,
}
