//! Command implementations for the CLI interface.
//!
//! The handlers here are the rendering collaborator: they call the store's
//! mutation operations, run the query functions over a borrowed snapshot,
//! and print. No invariant lives in this module.

use std::collections::BTreeMap;

use clap::{CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::fields::*;
use crate::query;
use crate::storage::Storage;
use crate::store::TaskStore;
use crate::task::{Task, TaskDraft};

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task.
    Add {
        /// Short title for the task.
        title: String,
        /// Task type: feature | bug | refactor.
        #[arg(long = "type", value_enum, default_value_t = Kind::Feature)]
        kind: Kind,
        /// Priority: high | medium | low.
        #[arg(long, value_enum, default_value_t = Priority::Medium)]
        priority: Priority,
        /// Deadline, stored verbatim (e.g. 2026-09-15).
        #[arg(long)]
        deadline: Option<String>,
        /// Estimated hours, stored verbatim.
        #[arg(long)]
        estimate: Option<String>,
        /// Comma-separated tags.
        #[arg(long, default_value = "")]
        tags: String,
        /// Optional longer description.
        #[arg(long, default_value = "")]
        desc: String,
    },

    /// Set a task's status. Conventionally pending -> in-progress ->
    /// completed, but any transition is accepted.
    Status {
        /// Task id (or unique id prefix).
        id: String,
        /// New status: pending | in-progress | completed.
        #[arg(value_enum)]
        status: Status,
    },

    /// Delete a task by id.
    Delete {
        /// Task id (or unique id prefix).
        id: String,
    },

    /// List tasks grouped into the three workflow buckets.
    List {
        /// Free-text search over title, description and tags.
        #[arg(long, short, default_value = "")]
        query: String,
        /// Filter by type.
        #[arg(long = "type", value_enum)]
        kind: Option<Kind>,
        /// Filter by priority.
        #[arg(long, value_enum)]
        priority: Option<Priority>,
        /// Show only one bucket.
        #[arg(long, value_enum)]
        status: Option<Status>,
    },

    /// Show aggregate task statistics.
    Stats,

    /// List distinct tags and counts.
    Tags,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Add a task. Blank titles are refused by the store; report that rather
/// than exiting nonzero, matching the no-op contract.
pub fn cmd_add<S: Storage>(
    store: &mut TaskStore<S>,
    title: String,
    kind: Kind,
    priority: Priority,
    deadline: Option<String>,
    estimate: Option<String>,
    tags: String,
    desc: String,
) {
    let draft = TaskDraft {
        title,
        kind,
        priority,
        deadline,
        estimated_time: estimate,
        tags,
        description: desc,
    };
    match store.create(draft) {
        Some(task) => println!("Added {} ({})", task.title, short_id(&task.id)),
        None => println!("Nothing added: title is empty."),
    }
}

/// Update a task's status by id or unique id prefix.
pub fn cmd_status<S: Storage>(store: &mut TaskStore<S>, id: &str, status: Status) {
    match resolve_id(store.tasks(), id) {
        Ok(full_id) => {
            store.set_status(&full_id, status);
            println!("{} -> {}", short_id(&full_id), format_status(status));
        }
        Err(msg) => println!("{msg}"),
    }
}

/// Delete a task by id or unique id prefix.
pub fn cmd_delete<S: Storage>(store: &mut TaskStore<S>, id: &str) {
    match resolve_id(store.tasks(), id) {
        Ok(full_id) => {
            store.delete(&full_id);
            println!("Deleted {}", short_id(&full_id));
        }
        Err(msg) => println!("{msg}"),
    }
}

/// List tasks, optionally filtered, grouped into status buckets.
pub fn cmd_list(
    tasks: &[Task],
    query: &str,
    kind: Option<Kind>,
    priority: Option<Priority>,
    status: Option<Status>,
) {
    let matched = query::filter(tasks, query, kind, priority);
    let buckets = match status {
        Some(s) => vec![s],
        None => vec![Status::Pending, Status::InProgress, Status::Completed],
    };
    for bucket in buckets {
        let rows = query::by_status(matched.iter().copied(), bucket);
        println!("{} ({})", format_status(bucket), rows.len());
        print_table(&rows);
        println!();
    }
}

/// Print the aggregate statistics block.
pub fn cmd_stats(tasks: &[Task]) {
    let s = query::statistics(tasks);
    println!("Total:       {}", s.total);
    println!("Pending:     {}", s.pending);
    println!("In progress: {}", s.in_progress);
    println!("Completed:   {}", s.completed);
    println!();
    println!("Features:    {}", s.features);
    println!("Bugs:        {}", s.bugs);
    println!("Refactors:   {}", s.refactors);
}

/// List distinct tags with usage counts.
pub fn cmd_tags(tasks: &[Task]) {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for t in tasks {
        for tag in &t.tags {
            *counts.entry(tag.as_str()).or_default() += 1;
        }
    }
    if counts.is_empty() {
        println!("No tags.");
        return;
    }
    for (tag, n) in counts {
        println!("{tag}  {n}");
    }
}

/// Emit a completion script for the given shell to stdout.
pub fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "devtask", &mut std::io::stdout());
}

/// Resolve a full or prefix id against the collection. Ambiguous prefixes
/// are refused with the candidates listed; unknown ids report cleanly
/// (the store would no-op anyway, but the user deserves a message).
fn resolve_id(tasks: &[Task], id: &str) -> Result<String, String> {
    if tasks.iter().any(|t| t.id == id) {
        return Ok(id.to_string());
    }
    let matches: Vec<&Task> = tasks.iter().filter(|t| t.id.starts_with(id)).collect();
    match matches.len() {
        0 => Err(format!("No task with id '{id}'.")),
        1 => Ok(matches[0].id.clone()),
        _ => {
            let mut msg = format!("Id prefix '{id}' is ambiguous:\n");
            for t in matches {
                msg.push_str(&format!("  {}  {}\n", short_id(&t.id), t.title));
            }
            msg.push_str("Use a longer prefix.");
            Err(msg)
        }
    }
}

/// First segment of a UUID, enough to act on from the table output.
fn short_id(id: &str) -> &str {
    id.split('-').next().unwrap_or(id)
}

/// Print tasks in a formatted table.
fn print_table(tasks: &[&Task]) {
    if tasks.is_empty() {
        println!("  (none)");
        return;
    }
    println!(
        "  {:<10} {:<9} {:<7} {:<12} {}",
        "ID", "Type", "Pri", "Deadline", "Title [tags]"
    );
    for t in tasks {
        let tags = if t.tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", t.tags.join(","))
        };
        let deadline = t.deadline.as_deref().unwrap_or("-");
        println!(
            "  {:<10} {:<9} {:<7} {:<12} {}{}",
            short_id(&t.id),
            format_kind(t.kind),
            format_priority(t.priority),
            truncate(deadline, 12),
            truncate(&t.title, 50),
            tags
        );
    }
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out = String::new();
        for (i, ch) in s.chars().enumerate() {
            if i + 1 >= width {
                out.push('…');
                break;
            }
            out.push(ch);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn task(id: &str, title: &str) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            kind: Kind::Feature,
            priority: Priority::Medium,
            status: Status::Pending,
            deadline: None,
            estimated_time: None,
            tags: Vec::new(),
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn resolve_id_accepts_exact_and_unique_prefix() {
        let tasks = vec![task("abc123-x", "a"), task("def456-y", "b")];
        assert_eq!(resolve_id(&tasks, "abc123-x").unwrap(), "abc123-x");
        assert_eq!(resolve_id(&tasks, "def").unwrap(), "def456-y");
    }

    #[test]
    fn resolve_id_rejects_unknown_and_ambiguous() {
        let tasks = vec![task("abc123-x", "a"), task("abc999-y", "b")];
        assert!(resolve_id(&tasks, "zzz").is_err());
        assert!(resolve_id(&tasks, "abc").is_err());
    }

    #[test]
    fn truncate_short_strings_unchanged() {
        assert_eq!(truncate("short", 12), "short");
        assert_eq!(truncate("exactly12chr", 12), "exactly12chr");
        assert_eq!(truncate("this one is too long", 8), "this on…");
    }
}
