//! Graph construction module

use crate::config::Config;
use crate::error::GraphResult;
use crate::graph::SocialGraph;

/// Collects users and friendships for the bulk-load phase, then builds a
/// [`SocialGraph`] with all users registered before any friendship.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// User names in registration order
    users: Vec<String>,
    
    /// Friendships as pairs of user names
    friendships: Vec<(String, String)>,
    
    config: Config,
}

impl GraphBuilder {
    /// Create a new graph builder with the given capacity
    pub fn with_capacity(users: usize, friendships: usize) -> Self {
        Self {
            users: Vec::with_capacity(users),
            friendships: Vec::with_capacity(friendships),
            config: Config::default(),
        }
    }
    
    /// Use `config` for the graph being built
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }
    
    pub fn add_user(&mut self, name: impl Into<String>) -> &mut Self {
        self.users.push(name.into());
        self
    }
    
    pub fn add_friendship(&mut self, first: impl Into<String>, second: impl Into<String>) -> &mut Self {
        self.friendships.push((first.into(), second.into()));
        self
    }
    
    /// Build the graph, failing on the first user or friendship it rejects
    pub fn build(self) -> GraphResult<SocialGraph> {
        let mut graph = SocialGraph::with_config(self.config);
        
        for name in &self.users {
            graph.add_vertex(name)?;
        }
        
        for (first, second) in &self.friendships {
            graph.add_edge(first, second)?;
        }
        
        log::info!(
            "Built graph with {} users and {} friendships",
            graph.user_count(),
            graph.friendship_count()
        );
        
        Ok(graph)
    }
}
