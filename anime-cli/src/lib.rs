// ABOUTME: Library exports for anime-list modules for testing and external use
// ABOUTME: Makes internal modules available to integration tests and benchmarks

pub mod cli;
pub mod cli_output;
pub mod config;
pub mod constants;
pub mod controller;
pub mod covers;
pub mod display;
pub mod output;
pub mod types;
pub mod watchlist;
