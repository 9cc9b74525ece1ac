pub mod commands;
pub mod constants;
pub mod context;
pub mod core;
pub mod error;
pub mod router;
