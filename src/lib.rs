// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod api;
pub mod cli;
pub mod config;
pub mod form;
pub mod gui;
pub mod notify;
pub mod render;
