//! JSON network description

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::GraphError;
use crate::graph::{GraphBuilder, SocialGraph};

/// `{"users": [...], "friendships": [["a", "b"], ...]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkFile {
    pub users: Vec<String>,
    
    #[serde(default)]
    pub friendships: Vec<(String, String)>,
}

impl NetworkFile {
    /// Build a graph from this description. Names are trimmed and must not be empty.
    pub fn into_graph(self, config: Config) -> Result<SocialGraph> {
        let mut builder = GraphBuilder::with_capacity(self.users.len(), self.friendships.len())
            .config(config);
        
        for user in &self.users {
            builder.add_user(clean_name(user)?);
        }
        for (first, second) in &self.friendships {
            builder.add_friendship(clean_name(first)?, clean_name(second)?);
        }
        
        Ok(builder.build()?)
    }
}

fn clean_name(name: &str) -> Result<&str, GraphError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(GraphError::InvalidArgument("user names must not be empty".to_string()));
    }
    Ok(trimmed)
}

/// Parse a JSON network description
pub fn parse_network(input: &str, config: Config) -> Result<SocialGraph> {
    let network: NetworkFile = serde_json::from_str(input)
        .context("Malformed JSON network description")?;
    network.into_graph(config)
}

pub fn load(path: &Path, config: Config) -> Result<SocialGraph> {
    log::info!("Reading JSON network: {}", path.display());
    
    let input = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_network(&input, config)
}
