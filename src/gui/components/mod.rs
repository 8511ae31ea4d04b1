// src/gui/components/mod.rs
pub mod action_buttons;
pub mod attribute_panel;
pub mod data_table;
pub mod input_bar;
