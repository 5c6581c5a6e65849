pub mod action;
pub mod command;
pub mod fixed_actions;
pub mod handler;
pub mod input;
pub mod keymap;
pub mod r#loop;
pub mod modes;
pub mod reducer;
pub mod state;
