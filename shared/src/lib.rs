pub mod constants;
pub mod error;
pub mod types;
pub mod node;
pub mod api;
pub mod session;
pub mod listing;
pub mod route;
pub mod utils;
