pub mod api;
pub mod app;
pub mod config;
pub mod container;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
pub mod viewmodel;

#[cfg(test)]
mod tests;
