// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod extract;
pub mod file;
pub mod progress;
pub mod runner;
pub mod table;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
