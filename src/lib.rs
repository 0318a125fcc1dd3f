pub mod auth;
pub mod cli;
pub mod config;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod secrets;
pub mod vault;
