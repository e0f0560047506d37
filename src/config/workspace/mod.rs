pub mod listing;
pub mod storage_paths;
