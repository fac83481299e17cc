//! Graph representation and algorithms module

pub mod social;
pub mod builder;
pub mod algorithms;

pub use builder::GraphBuilder;
pub use social::SocialGraph;
