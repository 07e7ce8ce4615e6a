pub mod catalog;
pub mod config;
pub mod logger;
pub mod post;
pub mod project;
pub mod topic;
pub mod text_utils;
mod data;
mod test_data;
