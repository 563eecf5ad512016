pub mod difficulty;
pub mod status;
pub mod task;
