use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::input::{FieldEdit, RawTaskUpdate};
use crate::model::difficulty::Difficulty;
use crate::model::status::Status;

pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Validated input for [`Task::new`]. Status and difficulty default to
/// `Pending` and `Easy`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: Status,
    pub difficulty: Difficulty,
    pub due_at: Option<DateTime<Utc>>,
}

impl NewTask {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// A decoded edit request. `None` on status or difficulty keeps the current value;
/// those two fields cannot be cleared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskUpdate {
    pub description: FieldEdit<String>,
    pub status: Option<Status>,
    pub difficulty: Option<Difficulty>,
    pub due_at: FieldEdit<DateTime<Utc>>,
}

/// Fields are private: every change goes through [`Task::update`] or
/// [`Task::apply`] so the validation and atomicity rules always hold.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Task {
    id: Uuid,
    title: String,
    description: Option<String>,
    status: Status,
    difficulty: Difficulty,
    due_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    last_edited_at: DateTime<Utc>,
}

impl Task {
    pub fn new(new_task: NewTask) -> Result<Self, ValidationError> {
        let title = validate_title(&new_task.title)?;
        let description = match new_task.description {
            Some(d) => normalize_description(&d)?,
            None => None,
        };

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            description,
            status: new_task.status,
            difficulty: new_task.difficulty,
            due_at: new_task.due_at,
            created_at: now,
            last_edited_at: now,
        })
    }

    /// Decodes raw prompt text and applies it. See [`RawTaskUpdate`] for the
    /// empty / single-space convention.
    pub fn update(&mut self, raw: &RawTaskUpdate) -> Result<(), ValidationError> {
        let update = raw.decode()?;
        self.apply(update)
    }

    /// Applies every field of `update` or none of them. On success
    /// `last_edited_at` moves to now.
    pub fn apply(&mut self, update: TaskUpdate) -> Result<(), ValidationError> {
        let description = match update.description {
            FieldEdit::Keep => self.description.clone(),
            FieldEdit::Clear => None,
            FieldEdit::Set(d) => normalize_description(&d)?,
        };
        let due_at = match update.due_at {
            FieldEdit::Keep => self.due_at,
            FieldEdit::Clear => None,
            FieldEdit::Set(d) => Some(d),
        };

        // Nothing below can fail.
        self.description = description;
        self.due_at = due_at;
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(difficulty) = update.difficulty {
            self.difficulty = difficulty;
        }
        self.last_edited_at = Utc::now().max(self.created_at);
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn due_at(&self) -> Option<DateTime<Utc>> {
        self.due_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_edited_at(&self) -> DateTime<Utc> {
        self.last_edited_at
    }
}

pub(crate) fn validate_title(title: &str) -> Result<String, ValidationError> {
    let title = title.trim();
    let len = title.chars().count();
    if len == 0 || len > TITLE_MAX_CHARS {
        return Err(ValidationError::Title);
    }
    Ok(title.to_string())
}

/// Length is checked on the text as typed; whitespace-only collapses to `None`.
pub(crate) fn normalize_description(description: &str) -> Result<Option<String>, ValidationError> {
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        return Err(ValidationError::Description);
    }
    let trimmed = description.trim();
    Ok(if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    })
}
