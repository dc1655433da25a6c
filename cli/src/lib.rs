pub mod app;
pub mod commands;
pub mod config;
pub mod state;
pub mod views;
pub mod widgets;
