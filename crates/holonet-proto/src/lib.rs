pub mod config;
pub mod filter;
pub mod loader;
pub mod payload;
pub mod platform;
pub mod reachability;
pub mod record;
pub mod screen;
