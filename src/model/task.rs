use std::fmt;

use chrono::{DateTime, Local, NaiveDate};

/// Unique task identifier, derived from the creation time in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Work,
    Personal,
    Shopping,
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Work,
        Category::Personal,
        Category::Shopping,
        Category::Other,
    ];

    /// Lowercase label shown next to a task
    pub fn label(self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Shopping => "shopping",
            Category::Other => "other",
        }
    }

    /// Next value in `ALL`, wrapping around
    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    /// Previous value in `ALL`, wrapping around
    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Sort weight: high=3, medium=2, low=1
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, step: usize) -> T {
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(idx + step) % all.len()]
}

/// The values a new task is created from (the staged draft of the add form)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
}

impl NewTask {
    /// A draft with only a title, everything else defaulted
    pub fn titled(title: impl Into<String>) -> Self {
        NewTask {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// A single to-do item
#[derive(Debug, Clone)]
pub struct Task {
    pub id: TaskId,
    /// Display text, never blank once stored
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub created_at: DateTime<Local>,
}

impl Task {
    /// Build a task from a draft. Callers are responsible for title validation.
    pub fn from_draft(id: TaskId, draft: NewTask, created_at: DateTime<Local>) -> Self {
        Task {
            id,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            priority: draft.priority,
            due_date: draft.due_date,
            completed: false,
            created_at,
        }
    }
}

// Identity is the id alone.
impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Task {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let draft = NewTask::titled("Write report");
        assert_eq!(draft.category, Category::Work);
        assert_eq!(draft.priority, Priority::Medium);
        assert_eq!(draft.due_date, None);
        assert!(draft.description.is_empty());
    }

    #[test]
    fn test_priority_rank() {
        assert!(Priority::High.rank() > Priority::Medium.rank());
        assert!(Priority::Medium.rank() > Priority::Low.rank());
    }

    #[test]
    fn test_category_cycle_wraps() {
        assert_eq!(Category::Other.next(), Category::Work);
        assert_eq!(Category::Work.prev(), Category::Other);
        assert_eq!(Priority::Low.next(), Priority::High);
        assert_eq!(Priority::High.prev(), Priority::Low);
    }

    #[test]
    fn test_task_equality_is_by_id() {
        let now = Local::now();
        let a = Task::from_draft(TaskId(1), NewTask::titled("a"), now);
        let mut b = a.clone();
        b.title = "changed".into();
        b.completed = true;
        assert_eq!(a, b);
        let c = Task::from_draft(TaskId(2), NewTask::titled("a"), now);
        assert_ne!(a, c);
    }
}
