pub mod bench;
pub mod cli;
pub mod config;
pub mod display;
pub mod fetch;
pub mod models;
pub mod scaffold;
