pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod templates_structs;
