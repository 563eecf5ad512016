use serde::Serialize;
use uuid::Uuid;

use crate::model::task::Task;
use crate::time::format_date_time;

pub const NO_DESCRIPTION: &str = "(Sin descripción)";

/// Display projection of a task, every field already rendered as text.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: String,
    pub difficulty: String,
    pub due_at: String,
    pub created_at: String,
    pub last_edited_at: String,
}

impl TaskView {
    pub fn from_entity(task: &Task) -> Self {
        Self {
            id: task.id(),
            title: task.title().to_string(),
            description: task.description().unwrap_or(NO_DESCRIPTION).to_string(),
            status: task.status().label().to_string(),
            difficulty: task.difficulty().to_string(),
            due_at: format_date_time(task.due_at().as_ref()),
            created_at: format_date_time(&task.created_at()),
            last_edited_at: format_date_time(&task.last_edited_at()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::difficulty::Difficulty;
    use crate::model::status::Status;
    use crate::model::task::NewTask;
    use crate::time::{parse_date_time, NO_DATA};

    #[test]
    fn test_from_entity_renders_placeholders() {
        let task = Task::new(NewTask::titled("Comprar Huevos")).unwrap();
        let view = TaskView::from_entity(&task);
        assert_eq!(view.description, NO_DESCRIPTION);
        assert_eq!(view.status, "Pendiente");
        assert_eq!(view.difficulty, "Fácil (★☆☆)");
        assert_eq!(view.due_at, NO_DATA);
        assert_eq!(view.created_at, view.last_edited_at);
    }

    #[test]
    fn test_from_entity_renders_values() {
        let task = Task::new(NewTask {
            description: Some("Ejercitar 30 minutos".to_string()),
            status: Status::InProgress,
            difficulty: Difficulty::Medium,
            due_at: parse_date_time("2025-12-01 18:00"),
            ..NewTask::titled("Pasear al perro")
        })
        .unwrap();
        let view = TaskView::from_entity(&task);
        assert_eq!(view.description, "Ejercitar 30 minutos");
        assert_eq!(view.status, "En curso");
        assert_eq!(view.difficulty, "Medio (★★☆)");
        assert_eq!(view.due_at, "2025-12-01 18:00");
    }

    #[test]
    fn test_view_serializes() {
        let task = Task::new(NewTask::titled("t")).unwrap();
        let json = serde_json::to_value(TaskView::from_entity(&task)).unwrap();
        assert_eq!(json["title"], "t");
        assert_eq!(json["status"], "Pendiente");
    }
}
