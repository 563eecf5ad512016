use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// Editable task fields, used to point a validation failure at its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    Status,
    Difficulty,
    DueDate,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Status => "status",
            Field::Difficulty => "difficulty",
            Field::DueDate => "due date",
        };
        f.write_str(name)
    }
}

/// Raised by task construction and update on the first violated constraint.
/// The task is never left partially modified when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid title")]
    Title,
    #[error("invalid description")]
    Description,
    #[error("invalid status")]
    Status,
    #[error("invalid difficulty")]
    Difficulty,
    #[error("invalid due date")]
    DueDate,
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Title => Field::Title,
            ValidationError::Description => Field::Description,
            ValidationError::Status => Field::Status,
            ValidationError::Difficulty => Field::Difficulty,
            ValidationError::DueDate => Field::DueDate,
        }
    }

    /// User-facing hint, in the same label set as the enumerations.
    pub fn hint(&self) -> &'static str {
        match self {
            ValidationError::Title => "Título inválido: obligatorio, 1..100 caracteres.",
            ValidationError::Description => "Descripción inválida: hasta 500 caracteres.",
            ValidationError::Status => "Estado inválido. Use P/E/T/C o su nombre.",
            ValidationError::Difficulty => "Dificultad inválida. Use 1/2/3 o F/M/D.",
            ValidationError::DueDate => "Fecha de vencimiento inválida.",
        }
    }
}

#[derive(Debug, Error)]
pub enum TaskError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("task not found: {0}")]
    NotFound(Uuid),
}

pub type TaskResult<T> = Result<T, TaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(ValidationError::Title.to_string(), "invalid title");
        assert_eq!(ValidationError::Description.to_string(), "invalid description");
        assert_eq!(ValidationError::Status.to_string(), "invalid status");
        assert_eq!(ValidationError::Difficulty.to_string(), "invalid difficulty");
        assert_eq!(ValidationError::DueDate.to_string(), "invalid due date");
    }

    #[test]
    fn test_validation_error_points_at_field() {
        assert_eq!(ValidationError::DueDate.field(), Field::DueDate);
        assert_eq!(ValidationError::Status.field().to_string(), "status");
    }

    #[test]
    fn test_task_error_is_transparent_over_validation() {
        let err: TaskError = ValidationError::Title.into();
        assert_eq!(err.to_string(), "invalid title");
    }
}
