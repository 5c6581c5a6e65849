//! Keyboard-driven palette for searching and acting on browser tabs,
//! bookmarks, history and fixed browser operations.

pub mod app;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
