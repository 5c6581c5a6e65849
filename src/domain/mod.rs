pub mod bookmarks;
pub mod gateway;
pub mod models;
pub mod ranking;
pub mod similarity;
