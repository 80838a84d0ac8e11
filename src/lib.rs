pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod scoring;
pub mod tokenizer;

// Application use cases and the ports they depend on
pub mod app;
// Adapters implementing those ports
pub mod infra;
