// src/gui/mod.rs
pub mod actions;
pub mod app;
pub mod components;
pub mod source;
pub mod table_model;

pub use app::run;
