// External service clients

pub mod storage;

pub use storage::{StorageConfig, StorageService};
