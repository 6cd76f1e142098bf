// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod fetch;
pub mod model;
pub mod rank;

pub mod csv;
pub mod file;
pub mod gui;
pub mod progress;
pub mod store;
pub mod update;
