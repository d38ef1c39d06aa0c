pub mod fetch;
pub mod filters;
pub mod review;
pub mod tool;
pub mod user;
