pub mod api_key;
pub mod app;
pub mod cli;
pub mod config;
pub mod llm;
pub mod paths;
pub mod quiz;
pub mod subjects;
