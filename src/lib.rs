// Public API exports
pub mod config;
pub mod domain;
pub mod shared;

pub mod app;
