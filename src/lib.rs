pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod models;
pub mod orchestrator;
pub mod prompt;
pub mod provider;
pub mod routes;
pub mod session;
pub mod strategy;
pub mod template;
pub mod themes;
