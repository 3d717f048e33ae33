// src/gui/components/mod.rs
pub mod data_table;
pub mod filter_panel;
pub mod summary_strip;
