//! Undirected friendship graph over named users

use std::collections::HashMap;
use std::mem;

use crate::config::Config;
use crate::error::{GraphError, GraphResult};

/// Upper bound on up-front allocation when a user limit is configured
const PREALLOCATED_USERS: usize = 1024;

/// Undirected graph of users keyed by insertion order.
///
/// A user's index is the number of users registered before it. Each user's
/// neighbor list is kept sorted by index, so traversals visit neighbors in
/// ascending index order and edge lookups are a binary search.
#[derive(Debug, Clone, Default)]
pub struct SocialGraph {
    /// User names, indexed by user index
    names: Vec<String>,
    
    /// First index registered under each name
    name_index: HashMap<String, u32>,
    
    /// Sorted neighbor lists, indexed by user index
    adjacency: Vec<Vec<u32>>,
    
    config: Config,
}

impl SocialGraph {
    /// Create an empty, unbounded graph
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Create an empty graph governed by `config`
    pub fn with_config(config: Config) -> Self {
        let capacity = config.max_users.unwrap_or(0).min(PREALLOCATED_USERS);
        Self {
            names: Vec::with_capacity(capacity),
            name_index: HashMap::with_capacity(capacity),
            adjacency: Vec::with_capacity(capacity),
            config,
        }
    }
    
    /// Register a user and return its index
    pub fn add_vertex(&mut self, name: &str) -> GraphResult<u32> {
        if !self.config.has_room_for(self.names.len()) {
            return Err(GraphError::CapacityExceeded(self.names.len()));
        }
        
        let idx = next_index(self.names.len())?;
        if self.name_index.contains_key(name) {
            if !self.config.allow_duplicate_names {
                return Err(GraphError::DuplicateName(name.to_string()));
            }
            log::warn!("User {} registered twice, later entry is unreachable by name", name);
        } else {
            self.name_index.insert(name.to_string(), idx);
        }
        
        self.names.push(name.to_string());
        self.adjacency.push(Vec::new());
        
        Ok(idx)
    }
    
    /// Look up the first user registered under `name`
    pub fn find_vertex(&self, name: &str) -> Option<u32> {
        self.name_index.get(name).copied()
    }
    
    /// Like [`find_vertex`](Self::find_vertex), but reports a missing user as an error
    pub fn resolve(&self, name: &str) -> GraphResult<u32> {
        self.find_vertex(name)
            .ok_or_else(|| GraphError::NotFound(name.to_string()))
    }
    
    /// Add a friendship between two registered users.
    ///
    /// Both names are resolved before anything is touched. Adding an existing
    /// friendship again is a no-op.
    pub fn add_edge(&mut self, first: &str, second: &str) -> GraphResult<()> {
        let a = self.resolve(first)?;
        let b = self.resolve(second)?;
        self.connect(a, b);
        Ok(())
    }
    
    fn connect(&mut self, a: u32, b: u32) {
        insert_sorted(&mut self.adjacency[a as usize], b);
        insert_sorted(&mut self.adjacency[b as usize], a);
    }
    
    /// Neighbors of a user in ascending index order
    pub fn neighbors(&self, user: u32) -> &[u32] {
        &self.adjacency[user as usize]
    }
    
    /// Check if two users are friends
    pub fn has_edge(&self, a: u32, b: u32) -> bool {
        self.neighbors(a).binary_search(&b).is_ok()
    }
    
    /// Number of friendships of a user
    pub fn degree(&self, user: u32) -> usize {
        self.adjacency[user as usize].len()
    }
    
    pub fn name(&self, user: u32) -> &str {
        &self.names[user as usize]
    }
    
    /// All user names in index order
    pub fn names(&self) -> &[String] {
        &self.names
    }
    
    /// All user indices in ascending order
    pub fn users(&self) -> impl Iterator<Item = u32> {
        (0u32..).take(self.names.len())
    }
    
    pub fn user_count(&self) -> usize {
        self.names.len()
    }
    
    /// Number of distinct friendships (each undirected edge counted once)
    pub fn friendship_count(&self) -> usize {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(user, list)| list.iter().filter(|&&other| other as usize >= user).count())
            .sum()
    }
    
    /// Estimate memory usage in bytes
    pub fn memory_usage(&self) -> usize {
        let base = mem::size_of::<Self>();
        let names = self.names.iter().map(|s| s.capacity()).sum::<usize>()
            + self.names.capacity() * mem::size_of::<String>();
        let index = self.name_index.capacity() * (mem::size_of::<String>() + mem::size_of::<u32>());
        let adjacency = self.adjacency.iter()
            .map(|list| list.capacity() * mem::size_of::<u32>())
            .sum::<usize>()
            + self.adjacency.capacity() * mem::size_of::<Vec<u32>>();
        
        base + names + index + adjacency
    }
}

/// Index for the next user, rejecting counts that no longer fit a `u32`
fn next_index(current_users: usize) -> GraphResult<u32> {
    u32::try_from(current_users).map_err(|_| GraphError::CapacityExceeded(current_users))
}

fn insert_sorted(list: &mut Vec<u32>, value: u32) {
    if let Err(pos) = list.binary_search(&value) {
        list.insert(pos, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_users(names: &[&str]) -> SocialGraph {
        let mut g = SocialGraph::new();
        for name in names {
            g.add_vertex(name).unwrap();
        }
        g
    }

    #[test]
    fn vertices_get_insertion_indices() {
        let mut g = SocialGraph::new();
        assert_eq!(g.add_vertex("alice").unwrap(), 0);
        assert_eq!(g.add_vertex("bob").unwrap(), 1);
        assert_eq!(g.find_vertex("bob"), Some(1));
        assert_eq!(g.find_vertex("carol"), None);
        assert_eq!(g.resolve("carol"), Err(GraphError::NotFound("carol".into())));
    }

    #[test]
    fn capacity_limit_is_enforced() {
        let mut g = SocialGraph::with_config(Config::new(Some(2), false));
        g.add_vertex("a").unwrap();
        g.add_vertex("b").unwrap();
        assert_eq!(g.add_vertex("c"), Err(GraphError::CapacityExceeded(2)));
        assert_eq!(g.user_count(), 2);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn index_space_is_bounded() {
        assert_eq!(next_index(7), Ok(7));
        assert_eq!(next_index(u32::MAX as usize), Ok(u32::MAX));
        let overflow = u32::MAX as usize + 1;
        assert_eq!(next_index(overflow), Err(GraphError::CapacityExceeded(overflow)));
    }

    #[test]
    fn users_iterates_in_index_order() {
        let g = with_users(&["a", "b", "c"]);
        assert_eq!(g.users().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(SocialGraph::new().users().count(), 0);
    }

    #[test]
    fn duplicates_rejected_by_default() {
        let mut g = with_users(&["alice"]);
        assert_eq!(g.add_vertex("alice"), Err(GraphError::DuplicateName("alice".into())));
        assert_eq!(g.user_count(), 1);
    }

    #[test]
    fn duplicates_shadowed_when_allowed() {
        let mut g = SocialGraph::with_config(Config::new(None, true));
        g.add_vertex("alice").unwrap();
        assert_eq!(g.add_vertex("alice").unwrap(), 1);
        assert_eq!(g.find_vertex("alice"), Some(0));
        assert_eq!(g.user_count(), 2);
    }

    #[test]
    fn edges_are_symmetric() {
        let mut g = with_users(&["a", "b", "c"]);
        g.add_edge("a", "c").unwrap();
        assert!(g.has_edge(0, 2));
        assert!(g.has_edge(2, 0));
        assert!(!g.has_edge(0, 1));
    }

    #[test]
    fn adding_edge_twice_is_idempotent() {
        let mut g = with_users(&["a", "b"]);
        g.add_edge("a", "b").unwrap();
        let before = g.adjacency.clone();
        g.add_edge("b", "a").unwrap();
        assert_eq!(g.adjacency, before);
        assert_eq!(g.friendship_count(), 1);
    }

    #[test]
    fn edge_with_unknown_user_leaves_graph_unchanged() {
        let mut g = with_users(&["a", "b"]);
        assert_eq!(g.add_edge("a", "zed"), Err(GraphError::NotFound("zed".into())));
        assert_eq!(g.add_edge("zed", "a"), Err(GraphError::NotFound("zed".into())));
        assert!(g.adjacency.iter().all(Vec::is_empty));
    }

    #[test]
    fn neighbors_stay_sorted() {
        let mut g = with_users(&["a", "b", "c", "d"]);
        g.add_edge("a", "d").unwrap();
        g.add_edge("a", "b").unwrap();
        g.add_edge("c", "a").unwrap();
        assert_eq!(g.neighbors(0), &[1, 2, 3]);
        assert_eq!(g.degree(0), 3);
        assert_eq!(g.friendship_count(), 3);
    }

    #[test]
    fn self_loop_counts_once() {
        let mut g = with_users(&["a"]);
        g.add_edge("a", "a").unwrap();
        assert_eq!(g.neighbors(0), &[0]);
        assert_eq!(g.friendship_count(), 1);
    }
}
