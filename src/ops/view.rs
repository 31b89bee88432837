//! Derived views over the task collection: filtering, the pending/completed
//! split, pending-task ordering and due-date arithmetic. Everything here is
//! a pure function of its inputs and is recomputed on every render.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

use crate::model::task::{Priority, Task};

use super::search::matches_search;

/// Priority restriction applied to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    /// The choices offered by the filter popover, in display order
    pub const CHOICES: [PriorityFilter; 4] = [
        PriorityFilter::All,
        PriorityFilter::Only(Priority::High),
        PriorityFilter::Only(Priority::Medium),
        PriorityFilter::Only(Priority::Low),
    ];

    pub fn allows(self, task: &Task) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(p) => task.priority == p,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PriorityFilter::All => "all",
            PriorityFilter::Only(p) => p.label(),
        }
    }
}

impl fmt::Display for PriorityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Search ∧ priority filter, preserving order
pub fn filter_tasks<'a>(tasks: &'a [Task], query: &str, filter: PriorityFilter) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| matches_search(t, query) && filter.allows(t))
        .collect()
}

/// Partition into (pending, completed), preserving relative order
pub fn split<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> (Vec<&'a Task>, Vec<&'a Task>) {
    tasks.into_iter().partition(|t| !t.completed)
}

/// Pending-task ordering: priority descending, then dated before undated,
/// then earlier due date first. Undated ties compare equal.
pub fn compare_pending(a: &Task, b: &Task) -> Ordering {
    b.priority
        .rank()
        .cmp(&a.priority.rank())
        .then_with(|| match (a.due_date, b.due_date) {
            (Some(da), Some(db)) => da.cmp(&db),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

/// Sort pending tasks in place. `sort_by` is stable, so ties keep their
/// original (newest-first) order.
pub fn sort_pending(tasks: &mut [&Task]) {
    tasks.sort_by(|a, b| compare_pending(a, b));
}

/// The two sections of the board after search, filter, split and sort
#[derive(Debug, Default)]
pub struct BoardView<'a> {
    pub pending: Vec<&'a Task>,
    pub completed: Vec<&'a Task>,
}

impl<'a> BoardView<'a> {
    pub fn derive(tasks: &'a [Task], query: &str, filter: PriorityFilter) -> Self {
        let (mut pending, completed) = split(filter_tasks(tasks, query, filter));
        sort_pending(&mut pending);
        BoardView { pending, completed }
    }

    pub fn len(&self) -> usize {
        self.pending.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row `idx` in display order: pending rows first, then completed
    pub fn row(&self, idx: usize) -> Option<&'a Task> {
        if idx < self.pending.len() {
            self.pending.get(idx).copied()
        } else {
            self.completed.get(idx - self.pending.len()).copied()
        }
    }

    /// Display index of the task with this id
    pub fn position(&self, id: crate::model::TaskId) -> Option<usize> {
        self.pending
            .iter()
            .chain(self.completed.iter())
            .position(|t| t.id == id)
    }
}

/// Whole calendar days from `today` until `due`. Negative when overdue.
pub fn days_remaining(due: Option<NaiveDate>, today: NaiveDate) -> Option<i64> {
    due.map(|d| (d - today).num_days())
}

/// "Due", "1 day left" or "N days left"
pub fn due_label(days: i64) -> String {
    match days {
        d if d <= 0 => "Due".to_string(),
        1 => "1 day left".to_string(),
        d => format!("{} days left", d),
    }
}

/// Display band for a due date; never used for ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Overdue,
    Near,
    Safe,
}

impl Urgency {
    pub fn from_days(days: i64) -> Self {
        match days {
            d if d <= 0 => Urgency::Overdue,
            1..=3 => Urgency::Near,
            _ => Urgency::Safe,
        }
    }
}
