pub mod memory;
pub mod traits;

pub use memory::InMemoryTaskRepository;
pub use traits::TaskRepository;
