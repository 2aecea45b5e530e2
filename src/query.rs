//! Pure read-side queries over a task collection snapshot.
//!
//! Nothing here mutates or persists; every function borrows the slice the
//! store owns and returns either borrowed subsequences (order preserved)
//! or computed counts.

use crate::fields::{Kind, Priority, Status};
use crate::task::Task;

/// Select the tasks matching a free-text query and optional kind/priority
/// filters, preserving collection order.
///
/// The query matches case-insensitively as a substring of the title, the
/// description, or any tag; an empty query matches everything. `None` for
/// either filter means "all".
pub fn filter<'a>(
    tasks: &'a [Task],
    query: &str,
    kind: Option<Kind>,
    priority: Option<Priority>,
) -> Vec<&'a Task> {
    let needle = query.to_lowercase();
    tasks
        .iter()
        .filter(|t| {
            let matches_query = needle.is_empty()
                || t.title.to_lowercase().contains(&needle)
                || t.description.to_lowercase().contains(&needle)
                || t.tags.iter().any(|tag| tag.to_lowercase().contains(&needle));
            let matches_kind = kind.is_none_or(|k| t.kind == k);
            let matches_priority = priority.is_none_or(|p| t.priority == p);
            matches_query && matches_kind && matches_priority
        })
        .collect()
}

/// The ordered subsequence of tasks in the given workflow bucket.
///
/// Accepts either a whole collection or the borrowed output of [`filter`];
/// both predicates are order-preserving, so the composition commutes.
pub fn by_status<'a>(
    tasks: impl IntoIterator<Item = &'a Task>,
    status: Status,
) -> Vec<&'a Task> {
    tasks.into_iter().filter(|t| t.status == status).collect()
}

/// Aggregate counts over a collection. Both the status counts and the
/// per-kind counts sum to `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub features: usize,
    pub bugs: usize,
    pub refactors: usize,
}

/// Compute aggregate statistics in a single pass.
pub fn statistics(tasks: &[Task]) -> Stats {
    let mut stats = Stats {
        total: tasks.len(),
        pending: 0,
        in_progress: 0,
        completed: 0,
        features: 0,
        bugs: 0,
        refactors: 0,
    };
    for t in tasks {
        match t.status {
            Status::Pending => stats.pending += 1,
            Status::InProgress => stats.in_progress += 1,
            Status::Completed => stats.completed += 1,
        }
        match t.kind {
            Kind::Feature => stats.features += 1,
            Kind::Bug => stats.bugs += 1,
            Kind::Refactor => stats.refactors += 1,
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn task(title: &str, kind: Kind, priority: Priority, status: Status, tags: &[&str]) -> Task {
        Task {
            id: format!("id-{title}"),
            title: title.to_string(),
            kind,
            priority,
            status,
            deadline: None,
            estimated_time: None,
            tags: tags.iter().map(|s| s.to_string()).collect(),
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_query_and_no_filters_is_identity() {
        let tasks = vec![
            task("a", Kind::Feature, Priority::Low, Status::Pending, &[]),
            task("b", Kind::Bug, Priority::High, Status::Completed, &[]),
        ];
        let out = filter(&tasks, "", None, None);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].title, "a");
        assert_eq!(out[1].title, "b");
    }

    #[test]
    fn query_matches_title_description_and_tags() {
        let mut t = task(
            "Fix login bug",
            Kind::Bug,
            Priority::High,
            Status::Pending,
            &["auth"],
        );
        t.description = "session token expiry".to_string();
        let tasks = vec![t];

        assert_eq!(filter(&tasks, "login", None, None).len(), 1);
        assert_eq!(filter(&tasks, "LOGIN", None, None).len(), 1);
        assert_eq!(filter(&tasks, "token", None, None).len(), 1);
        assert_eq!(filter(&tasks, "auth", None, None).len(), 1);
        assert_eq!(filter(&tasks, "deploy", None, None).len(), 0);
    }

    #[test]
    fn kind_and_priority_filters_compose_with_query() {
        let tasks = vec![task(
            "Fix login bug",
            Kind::Bug,
            Priority::High,
            Status::Pending,
            &["auth"],
        )];
        assert_eq!(filter(&tasks, "login", Some(Kind::Feature), None).len(), 0);
        assert_eq!(filter(&tasks, "login", Some(Kind::Bug), None).len(), 1);
        assert_eq!(filter(&tasks, "", None, Some(Priority::Low)).len(), 0);
        assert_eq!(filter(&tasks, "", Some(Kind::Bug), Some(Priority::High)).len(), 1);
    }

    #[test]
    fn filter_preserves_collection_order() {
        let tasks = vec![
            task("alpha one", Kind::Feature, Priority::Medium, Status::Pending, &[]),
            task("beta", Kind::Feature, Priority::Medium, Status::Pending, &[]),
            task("alpha two", Kind::Feature, Priority::Medium, Status::Pending, &[]),
        ];
        let out = filter(&tasks, "alpha", None, None);
        let titles: Vec<_> = out.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["alpha one", "alpha two"]);
    }

    #[test]
    fn by_status_partitions_the_collection() {
        let tasks = vec![
            task("p", Kind::Feature, Priority::Medium, Status::Pending, &[]),
            task("i", Kind::Bug, Priority::Medium, Status::InProgress, &[]),
            task("c", Kind::Refactor, Priority::Medium, Status::Completed, &[]),
        ];
        assert_eq!(by_status(&tasks, Status::Pending)[0].title, "p");
        assert_eq!(by_status(&tasks, Status::InProgress)[0].title, "i");
        assert_eq!(by_status(&tasks, Status::Completed)[0].title, "c");
    }

    #[test]
    fn statistics_counts_sum_to_total() {
        let tasks = vec![
            task("p", Kind::Feature, Priority::Medium, Status::Pending, &[]),
            task("i", Kind::Bug, Priority::Medium, Status::InProgress, &[]),
            task("c", Kind::Refactor, Priority::Medium, Status::Completed, &[]),
            task("c2", Kind::Bug, Priority::High, Status::Completed, &[]),
        ];
        let s = statistics(&tasks);
        assert_eq!(s.total, 4);
        assert_eq!(s.pending + s.in_progress + s.completed, s.total);
        assert_eq!(s.features + s.bugs + s.refactors, s.total);
        assert_eq!(s.pending, 1);
        assert_eq!(s.in_progress, 1);
        assert_eq!(s.completed, 2);
        assert_eq!(s.bugs, 2);
    }

    #[test]
    fn statistics_of_empty_collection_is_all_zero() {
        let s = statistics(&[]);
        assert_eq!(s.total, 0);
        assert_eq!(s.pending + s.in_progress + s.completed, 0);
    }
}
