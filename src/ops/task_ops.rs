use chrono::{DateTime, Local};

use crate::model::task::{NewTask, Task, TaskId};

/// The owned, ordered task collection (newest first).
///
/// All mutation goes through the methods here. Every operation is total:
/// a blank title or an unknown id is a silent no-op, reported only through
/// the return value.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    last_id: Option<TaskId>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All tasks, newest first
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Add a task created now. See [`TaskStore::add_task_at`].
    pub fn add_task(&mut self, draft: NewTask) -> Option<TaskId> {
        self.add_task_at(draft, Local::now())
    }

    /// Prepend a new task built from `draft`, timestamped `now`.
    ///
    /// Returns `None` without touching the collection when the title is
    /// blank after trimming. The stored title keeps the text as entered.
    pub fn add_task_at(&mut self, draft: NewTask, now: DateTime<Local>) -> Option<TaskId> {
        if draft.title.trim().is_empty() {
            tracing::debug!("add rejected: blank title");
            return None;
        }
        let id = self.next_id(now);
        let task = Task::from_draft(id, draft, now);
        tracing::info!(
            id = %id,
            category = %task.category,
            priority = %task.priority,
            due = ?task.due_date,
            "task added"
        );
        self.tasks.insert(0, task);
        Some(id)
    }

    /// Millisecond timestamp, bumped past the previous id when the clock
    /// hasn't advanced (or went backwards).
    fn next_id(&mut self, now: DateTime<Local>) -> TaskId {
        let stamp = now.timestamp_millis();
        let id = match self.last_id {
            Some(TaskId(prev)) if stamp <= prev => TaskId(prev + 1),
            _ => TaskId(stamp),
        };
        self.last_id = Some(id);
        id
    }

    /// Flip `completed`. Returns false if no task has this id.
    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        match self.get_mut(id) {
            Some(task) => {
                task.completed = !task.completed;
                tracing::info!(id = %id, completed = task.completed, "task toggled");
                true
            }
            None => false,
        }
    }

    /// Replace the title. Blank titles are rejected so a stored title is
    /// never empty; returns true only if the task exists and was updated.
    pub fn update_title(&mut self, id: TaskId, new_title: &str) -> bool {
        if new_title.trim().is_empty() {
            tracing::debug!(id = %id, "title update rejected: blank title");
            return false;
        }
        match self.get_mut(id) {
            Some(task) => {
                task.title = new_title.to_string();
                tracing::info!(id = %id, "task title updated");
                true
            }
            None => false,
        }
    }

    /// Remove and return the task with this id, if any.
    pub fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        let task = self.tasks.remove(idx);
        tracing::info!(id = %id, "task deleted");
        Some(task)
    }
}
