
pub use mock_sources::*;
