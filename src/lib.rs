// Library crate for the topic configuration screen - exposes all modules for
// the binary and for integration tests

pub mod app;
pub mod config;
pub mod model;
pub mod services;
pub mod view;
