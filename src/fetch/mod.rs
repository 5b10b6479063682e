pub mod batch;
pub mod pagination;
pub mod region;

// Re-exports for convenience
pub use batch::BatchFetchScheduler;
pub use pagination::{PageCursor, PageOutcome, PaginatedListFetcher};
pub use region::RegionFetcher;
