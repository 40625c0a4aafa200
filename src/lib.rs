pub mod analysis;
pub mod api;
pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod logger;
pub mod model;
pub mod youtube;
