//! The authoritative task collection and its mutation surface.
//!
//! `TaskStore` owns the ordered `Vec<Task>` and is the only place tasks are
//! created, re-statused, or deleted. Every mutation writes the whole
//! collection back through the persistence collaborator. Writes are gated
//! on the store having completed its initial `load`, so a freshly
//! constructed store can never clobber persisted data with an empty
//! collection.

use chrono::Utc;
use uuid::Uuid;

use crate::storage::Storage;
use crate::task::{Task, TaskDraft};
use crate::fields::Status;

/// Whether the initial read from the persistence collaborator has happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Uninitialized,
    Loaded,
}

pub struct TaskStore<S: Storage> {
    tasks: Vec<Task>,
    storage: S,
    lifecycle: Lifecycle,
}

impl<S: Storage> TaskStore<S> {
    /// Construct an empty, not-yet-loaded store over the given medium.
    /// Call [`TaskStore::load`] before mutating; until then `save` is a
    /// no-op.
    pub fn new(storage: S) -> Self {
        TaskStore {
            tasks: Vec::new(),
            storage,
            lifecycle: Lifecycle::Uninitialized,
        }
    }

    /// Read the persisted collection. A missing or unparsable payload
    /// degrades to an empty collection; the failure is logged, never
    /// surfaced. Once hydrated, the collection is written back through the
    /// collaborator, which creates the slot on first run and replaces a
    /// corrupt payload with the recovered state.
    pub fn load(&mut self) {
        self.tasks = match self.storage.read_all() {
            Some(payload) => match serde_json::from_str(&payload) {
                Ok(tasks) => tasks,
                Err(e) => {
                    tracing::warn!(error = %e, "stored tasks unparsable, starting fresh");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        self.lifecycle = Lifecycle::Loaded;
        self.save();
    }

    /// Read-only view of the collection, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Create a task from a draft and append it to the collection.
    ///
    /// A draft whose title is empty after trimming is silently refused:
    /// no mutation, no write, `None` returned. On success the new task gets
    /// a fresh unique id and the current timestamp, its raw tag string is
    /// normalised, and the collection is persisted. The title itself is
    /// stored exactly as supplied; trimming is only the emptiness check.
    pub fn create(&mut self, draft: TaskDraft) -> Option<&Task> {
        if draft.title.trim().is_empty() {
            tracing::debug!("refusing task with blank title");
            return None;
        }
        let task = Task {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            kind: draft.kind,
            priority: draft.priority,
            status: Status::Pending,
            deadline: draft.deadline,
            estimated_time: draft.estimated_time,
            tags: split_tags(&draft.tags),
            description: draft.description,
            created_at: Utc::now(),
        };
        self.tasks.push(task);
        self.save();
        self.tasks.last()
    }

    /// Set the status of the task with the given id, leaving every other
    /// field untouched. Unknown ids are a harmless no-op. Any of the three
    /// statuses may be set regardless of the current one; the conventional
    /// one-way workflow lives in the UI, not here.
    pub fn set_status(&mut self, id: &str, status: Status) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            tracing::debug!(id, "set_status on unknown id");
            return;
        };
        task.status = status;
        self.save();
    }

    /// Remove the task with the given id, preserving the relative order of
    /// the remaining tasks. Unknown ids are a no-op.
    pub fn delete(&mut self, id: &str) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            self.save();
        }
    }

    /// Serialize the collection and write it through the collaborator.
    /// Skipped while the store has not completed its initial load. Write
    /// failures are logged and swallowed.
    pub fn save(&mut self) {
        if self.lifecycle != Lifecycle::Loaded {
            tracing::debug!("skipping save before initial load");
            return;
        }
        // Task serialization has no fallible fields.
        let payload = serde_json::to_string_pretty(&self.tasks)
            .unwrap_or_else(|_| "[]".to_string());
        if let Err(e) = self.storage.write_all(&payload) {
            tracing::warn!(error = %e, "failed to persist tasks");
        }
    }

    /// Consume the store, returning the underlying medium. Test seam.
    #[cfg(test)]
    fn into_storage(self) -> S {
        self.storage
    }
}

/// Split a raw comma-separated tag string: trim whitespace, drop empties.
/// Input order and duplicates are preserved.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
