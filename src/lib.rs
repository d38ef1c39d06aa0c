pub mod api;
pub mod app;
pub mod components;
pub mod constants;
pub mod models;
pub mod session;
