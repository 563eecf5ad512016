use uuid::Uuid;

use crate::model::status::Status;
use crate::model::task::Task;

/// Ordered, append-only task store. Queries return borrowed views in insertion
/// order; membership only changes through [`TaskRepository::add`].
pub trait TaskRepository {
    fn add(&mut self, task: Task) -> Uuid;
    fn get_all(&self) -> Vec<&Task>;
    fn get_by_index(&self, index: usize) -> Option<&Task>;
    fn get(&self, id: &Uuid) -> Option<&Task>;
    fn get_mut(&mut self, id: &Uuid) -> Option<&mut Task>;
    fn filter_by_status(&self, status: Status) -> Vec<&Task>;
    /// Case-insensitive substring match on the title. The query is trimmed;
    /// an empty query matches everything.
    fn search_by_title(&self, query: &str) -> Vec<&Task>;

    fn len(&self) -> usize {
        self.get_all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
