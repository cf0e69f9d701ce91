pub mod error;
pub mod host;
pub mod models;
pub mod suggest;
