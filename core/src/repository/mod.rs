pub mod codec;
pub mod file;
pub mod traits;

// Re-export
pub use file::FileRecordRepository;
pub use traits::RecordRepository;
