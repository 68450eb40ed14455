mod app;
mod cli;
mod config;
mod effects;
mod input;
mod logging;
mod persistence;
mod timers;
mod ui;

pub use app::run_app;
