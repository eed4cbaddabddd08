pub mod data_table;
pub mod error;
pub mod fetch_hook;
pub mod fetch_render;
pub mod form_dialog;
pub mod loading;
pub mod resource_controller;
pub mod toast;
