pub mod app;
pub mod batch;
pub mod client;
pub mod config;
pub mod export;
pub mod geometry;
pub mod model;
pub mod pipeline;
pub mod ratio;
