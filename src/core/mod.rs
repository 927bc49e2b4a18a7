// src/core/mod.rs
//! Core plumbing: configuration, file system, storage

pub mod config_manager;
pub mod fs_ops;
pub mod persistence;
pub mod storage;

pub use config_manager::{ConfigManager, RendererConfig};
pub use fs_ops::FsOps;
pub use persistence::{deserialize, serialize, DocumentStore, STORAGE_KEY};
pub use storage::{KeyValueStore, MemoryStore, SqliteStore};
