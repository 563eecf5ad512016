pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;

pub use error::{Field, TaskError, TaskResult, ValidationError};
pub use input::{FieldEdit, RawNewTask, RawTaskUpdate, CLEAR_SENTINEL};
pub use model::difficulty::Difficulty;
pub use model::status::Status;
pub use model::task::{NewTask, Task, TaskUpdate};
pub use repository::{InMemoryTaskRepository, TaskRepository};
pub use service::demo::seed_demo;
pub use service::dto::TaskView;
pub use service::task_service::{sort_by_title, TaskService};
pub use time::{format_date_time, parse_date_time, NO_DATA};
