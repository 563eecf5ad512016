use chrono::{DateTime, Utc};

use crate::error::ValidationError;
use crate::model::difficulty::Difficulty;
use crate::model::status::Status;
use crate::model::task::{normalize_description, validate_title, NewTask, TaskUpdate};
use crate::time::parse_date_time;

/// Typed edit for a nullable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit<T> {
    Keep,
    Clear,
    Set(T),
}

impl<T> Default for FieldEdit<T> {
    fn default() -> Self {
        FieldEdit::Keep
    }
}

/// Typed at a prompt to erase a description or due date.
pub const CLEAR_SENTINEL: &str = " ";

/// Edit request exactly as typed at the prompts. `None` means the field was not asked.
///
/// For every field an empty string keeps the current value. For description and
/// due date a single space clears it; anything else is parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTaskUpdate {
    pub description: Option<String>,
    pub status: Option<String>,
    pub difficulty: Option<String>,
    pub due_at: Option<String>,
}

impl RawTaskUpdate {
    /// Fails on the first invalid field, in prompt order.
    pub fn decode(&self) -> Result<TaskUpdate, ValidationError> {
        let description = decode_clearable(self.description.as_deref(), |s| {
            Ok(match normalize_description(s)? {
                Some(d) => FieldEdit::Set(d),
                None => FieldEdit::Clear,
            })
        })?;
        let status = decode_required(
            self.status.as_deref(),
            Status::from_input,
            ValidationError::Status,
        )?;
        let difficulty = decode_required(
            self.difficulty.as_deref(),
            Difficulty::from_input,
            ValidationError::Difficulty,
        )?;
        let due_at = decode_clearable(self.due_at.as_deref(), |s| {
            parse_date_time(s).map(FieldEdit::Set).ok_or(ValidationError::DueDate)
        })?;

        Ok(TaskUpdate {
            description,
            status,
            difficulty,
            due_at,
        })
    }
}

fn decode_clearable<T>(
    raw: Option<&str>,
    parse: impl FnOnce(&str) -> Result<FieldEdit<T>, ValidationError>,
) -> Result<FieldEdit<T>, ValidationError> {
    match raw {
        None | Some("") => Ok(FieldEdit::Keep),
        Some(CLEAR_SENTINEL) => Ok(FieldEdit::Clear),
        Some(s) => parse(s),
    }
}

fn decode_required<T>(
    raw: Option<&str>,
    parse: impl FnOnce(&str) -> Option<T>,
    err: ValidationError,
) -> Result<Option<T>, ValidationError> {
    match raw {
        None | Some("") => Ok(None),
        Some(s) => parse(s).map(Some).ok_or(err),
    }
}

/// Creation request as typed. Blank status, difficulty or due date fall back to
/// the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawNewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub difficulty: Option<String>,
    pub due_at: Option<String>,
}

impl RawNewTask {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn decode(&self) -> Result<NewTask, ValidationError> {
        let title = validate_title(&self.title)?;
        let status = match non_blank(&self.status) {
            Some(s) => Status::from_input(s).ok_or(ValidationError::Status)?,
            None => Status::default(),
        };
        let difficulty = match non_blank(&self.difficulty) {
            Some(s) => Difficulty::from_input(s).ok_or(ValidationError::Difficulty)?,
            None => Difficulty::default(),
        };
        let due_at: Option<DateTime<Utc>> = match non_blank(&self.due_at) {
            Some(s) => Some(parse_date_time(s).ok_or(ValidationError::DueDate)?),
            None => None,
        };
        if let Some(d) = &self.description {
            normalize_description(d)?;
        }

        Ok(NewTask {
            title,
            description: self.description.clone(),
            status,
            difficulty,
            due_at,
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}
