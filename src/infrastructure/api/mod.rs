//! Processing service HTTP client

pub mod http;

pub use http::HttpJobService;
