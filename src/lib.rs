//! Core library functions for the social graph analyzer

pub mod commands;
pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod report;

pub use anyhow::{Result, anyhow};
pub use config::Config;
pub use error::{GraphError, GraphResult};
pub use graph::{GraphBuilder, SocialGraph};
