pub mod app;
pub mod cli;
pub mod info;
pub mod logging;
pub mod markup;
pub mod service;
pub mod state;
pub mod theme;
pub mod ui;
