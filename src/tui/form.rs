use chrono::NaiveDate;

use crate::model::task::{Category, NewTask, Priority};

use super::app::TextInput;

/// Date format accepted by the due-date field
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Fields of the add-task form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
    Category,
    DueDate,
    Priority,
}

impl FormField {
    pub const ORDER: [FormField; 5] = [
        FormField::Title,
        FormField::Description,
        FormField::Category,
        FormField::DueDate,
        FormField::Priority,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::Category => "Category",
            FormField::DueDate => "Due date",
            FormField::Priority => "Priority",
        }
    }

    /// Free-text fields take typed characters; the others cycle values
    pub fn is_text(self) -> bool {
        matches!(
            self,
            FormField::Title | FormField::Description | FormField::DueDate
        )
    }
}

/// Why the staged draft can't be added yet
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("title is required")]
    EmptyTitle,
    #[error("due date must look like YYYY-MM-DD: {0:?}")]
    InvalidDueDate(String),
    #[error("due date {0} is before today")]
    DueDateInPast(NaiveDate),
}

/// The staged, uncommitted draft shown by the add-task modal
#[derive(Debug, Clone, Default)]
pub struct AddForm {
    pub title: TextInput,
    pub description: TextInput,
    pub category: Category,
    pub priority: Priority,
    /// Raw due-date text; empty means no due date
    pub due_date: TextInput,
    pub focus: FormField,
}

impl AddForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The text input behind the focused field, if it is a text field
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            FormField::Title => Some(&mut self.title),
            FormField::Description => Some(&mut self.description),
            FormField::DueDate => Some(&mut self.due_date),
            FormField::Category | FormField::Priority => None,
        }
    }

    /// Step the focused enum field forward or backward
    pub fn cycle_focused(&mut self, forward: bool) {
        match self.focus {
            FormField::Category => {
                self.category = if forward {
                    self.category.next()
                } else {
                    self.category.prev()
                };
            }
            FormField::Priority => {
                self.priority = if forward {
                    self.priority.next()
                } else {
                    self.priority.prev()
                };
            }
            _ => {}
        }
    }

    /// Parse the due-date field. Empty text is no due date; the earliest
    /// accepted date is `today`.
    pub fn parse_due_date(&self, today: NaiveDate) -> Result<Option<NaiveDate>, FormError> {
        let raw = self.due_date.text().trim();
        if raw.is_empty() {
            return Ok(None);
        }
        let date = NaiveDate::parse_from_str(raw, DUE_DATE_FORMAT)
            .map_err(|_| FormError::InvalidDueDate(raw.to_string()))?;
        if date < today {
            return Err(FormError::DueDateInPast(date));
        }
        Ok(Some(date))
    }

    /// Build the draft for `add_task`, or the first reason it can't be added.
    pub fn validate(&self, today: NaiveDate) -> Result<NewTask, FormError> {
        if self.title.text().trim().is_empty() {
            return Err(FormError::EmptyTitle);
        }
        let due_date = self.parse_due_date(today)?;
        Ok(NewTask {
            title: self.title.text().to_string(),
            description: self.description.text().to_string(),
            category: self.category,
            priority: self.priority,
            due_date,
        })
    }

    /// Whether "Add Task" is enabled
    pub fn can_submit(&self, today: NaiveDate) -> bool {
        self.validate(today).is_ok()
    }
}
