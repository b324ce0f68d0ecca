pub mod cli;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod print;
pub mod shutdown;
pub mod ui;
