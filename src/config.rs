//! Configuration management for the social graph analyzer

/// Engine configuration applied while the graph is being populated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Upper bound on the number of users, `None` for unbounded
    pub max_users: Option<usize>,
    
    /// Keep duplicate user names instead of rejecting them.
    /// Lookups by name then resolve to the first user registered under it.
    pub allow_duplicate_names: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_users: None,
            allow_duplicate_names: false,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(max_users: Option<usize>, allow_duplicate_names: bool) -> Self {
        Self {
            max_users,
            allow_duplicate_names,
        }
    }
    
    /// Whether another user fits given the current user count
    pub fn has_room_for(&self, current_users: usize) -> bool {
        self.max_users.map_or(true, |limit| current_users < limit)
    }
}
