pub mod image;
pub mod source;

pub use image::MemoryImage;
pub use source::ImageRecordSource;
