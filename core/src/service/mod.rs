pub mod demo;
pub mod dto;
pub mod task_service;
