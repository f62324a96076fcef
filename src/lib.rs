pub mod app;
pub mod config;
pub mod handlers;
pub mod input;
pub mod storage;
pub mod terminal;
pub mod ui;
