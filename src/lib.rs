//! Podforge - podcast audio to publishable content
//!
//! This crate provides a command-line client for an asynchronous processing
//! service that turns podcast audio into written content (blog posts, SEO
//! elements, FAQs, social media posts, newsletters, and quotes).
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core business logic, value objects, entities, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (HTTP API, config store, notifications)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
