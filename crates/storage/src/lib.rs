#![forbid(unsafe_code)]

pub mod fs;
pub mod repository;

pub use fs::FileExportSink;
pub use repository::{ExportReceipt, ExportSink, InMemoryExportSink, Storage, StorageError};
