pub mod config;
pub mod orchestrator;
pub mod phase;
pub mod stage;
pub mod timeline;
