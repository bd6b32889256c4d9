pub mod catalog;
pub mod media;
pub mod tryon;
pub mod upload;
