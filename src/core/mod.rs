// src/core/mod.rs

pub mod format;
