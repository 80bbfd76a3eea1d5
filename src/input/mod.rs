//! Input processing module
//! Detects file types, extracts plain text, and caches extracted documents

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use manager::InputManager;
