// src/core/mod.rs
pub mod sanitize;
