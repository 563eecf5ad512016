use tracing::info;

use crate::error::TaskResult;
use crate::model::difficulty::Difficulty;
use crate::model::status::Status;
use crate::model::task::NewTask;
use crate::repository::TaskRepository;
use crate::service::task_service::TaskService;
use crate::time::parse_date_time;

/// Adds a few example tasks when the store is empty. Returns how many were added.
pub fn seed_demo<R: TaskRepository>(service: &mut TaskService<R>) -> TaskResult<usize> {
    if !service.is_empty() {
        return Ok(0);
    }

    let tasks = [
        NewTask {
            description: Some("Ir al súper y comprar una docena".to_string()),
            status: Status::Pending,
            difficulty: Difficulty::Easy,
            ..NewTask::titled("Comprar Huevos")
        },
        NewTask {
            description: Some("Ejercitar 30 minutos".to_string()),
            status: Status::InProgress,
            difficulty: Difficulty::Medium,
            due_at: parse_date_time("2025-12-01 18:00"),
            ..NewTask::titled("Pasear al perro")
        },
        NewTask {
            status: Status::Done,
            difficulty: Difficulty::Hard,
            ..NewTask::titled("Terminar práctico de BD")
        },
    ];

    let count = tasks.len();
    for task in tasks {
        service.add_task(task)?;
    }
    info!(count, "seeded demo tasks");
    Ok(count)
}
