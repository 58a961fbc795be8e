pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod services;
pub mod sink;
pub mod webclass;
