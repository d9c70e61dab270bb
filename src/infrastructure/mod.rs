pub mod models;
pub mod remote;
