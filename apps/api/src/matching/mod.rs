pub mod handlers;
pub mod ranking;
pub mod repo;
