
mod catalog;
mod upload;
