use tracing::debug;
use uuid::Uuid;

use crate::model::status::Status;
use crate::model::task::Task;
use crate::repository::traits::TaskRepository;

#[derive(Debug, Default, Clone)]
pub struct InMemoryTaskRepository {
    tasks: Vec<Task>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn add(&mut self, task: Task) -> Uuid {
        let id = task.id();
        debug!(%id, title = task.title(), "task added");
        self.tasks.push(task);
        id
    }

    fn get_all(&self) -> Vec<&Task> {
        self.tasks.iter().collect()
    }

    fn get_by_index(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    fn get(&self, id: &Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == *id)
    }

    fn get_mut(&mut self, id: &Uuid) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id() == *id)
    }

    fn filter_by_status(&self, status: Status) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status() == status).collect()
    }

    fn search_by_title(&self, query: &str) -> Vec<&Task> {
        let query = query.trim().to_lowercase();
        self.tasks
            .iter()
            .filter(|t| t.title().to_lowercase().contains(&query))
            .collect()
    }

    fn len(&self) -> usize {
        self.tasks.len()
    }
}
