pub mod app;
pub mod history;
