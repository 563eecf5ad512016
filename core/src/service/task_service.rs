use tracing::debug;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;
use uuid::Uuid;

use crate::error::{TaskError, TaskResult};
use crate::input::{RawNewTask, RawTaskUpdate};
use crate::model::status::Status;
use crate::model::task::{NewTask, Task};
use crate::repository::TaskRepository;

/// The operations the interactive shell drives.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Decodes prompt text and stores the task. Nothing is stored on failure.
    pub fn create_task(&mut self, raw: &RawNewTask) -> TaskResult<Uuid> {
        let new_task = raw.decode().inspect_err(|e| {
            debug!(field = %e.field(), "rejected new task");
        })?;
        self.add_task(new_task)
    }

    pub fn add_task(&mut self, new_task: NewTask) -> TaskResult<Uuid> {
        let task = Task::new(new_task)?;
        Ok(self.repo.add(task))
    }

    pub fn update_task(&mut self, id: &Uuid, raw: &RawTaskUpdate) -> TaskResult<()> {
        let task = self.repo.get_mut(id).ok_or(TaskError::NotFound(*id))?;
        match task.update(raw) {
            Ok(()) => {
                debug!(%id, "task updated");
                Ok(())
            }
            Err(e) => {
                debug!(%id, field = %e.field(), "rejected task update");
                Err(e.into())
            }
        }
    }

    pub fn get(&self, id: &Uuid) -> Option<&Task> {
        self.repo.get(id)
    }

    pub fn task_at(&self, index: usize) -> Option<&Task> {
        self.repo.get_by_index(index)
    }

    pub fn list_all(&self) -> Vec<&Task> {
        self.repo.get_all()
    }

    pub fn list_by_status(&self, status: Status) -> Vec<&Task> {
        self.repo.filter_by_status(status)
    }

    pub fn search(&self, query: &str) -> Vec<&Task> {
        self.repo.search_by_title(query)
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

}

/// Ascending title order ignoring case and accents, the default for listings.
/// Titles equal under that folding fall back to plain ordering.
pub fn sort_by_title(tasks: &mut [&Task]) {
    tasks.sort_by_cached_key(|t| (fold_title(t.title()), t.title().to_string()));
}

fn fold_title(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
