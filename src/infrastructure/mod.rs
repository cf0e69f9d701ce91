pub mod browser;
pub mod preference_file;
pub mod suggest_http;
