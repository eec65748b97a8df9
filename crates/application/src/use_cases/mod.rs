pub mod list_entries;
pub mod render_cache;

// Re-export use cases
pub use list_entries::ListEntriesUseCase;
pub use render_cache::{RenderCacheUseCase, RenderedCache};
