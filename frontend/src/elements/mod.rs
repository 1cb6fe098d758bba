pub mod app_auth;
pub mod app_pages;
pub mod app_root;
