pub mod dataset_service;
pub mod history_service;
pub mod visibility_service;
