pub mod catalog;
pub mod tryon;
pub mod upload;
