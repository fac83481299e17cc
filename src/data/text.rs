//! Line-based network description
//!
//! ```text
//! 3            number of users
//! Alice        one user name per line
//! Bob
//! Carol
//! 2            number of friendships
//! Alice Bob    one pair of names per line
//! Bob Carol
//! ```
//!
//! Blank user lines still count toward the declared number of users but
//! register nobody. Blank lines elsewhere are ignored.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};

use crate::config::Config;
use crate::error::GraphError;
use crate::graph::{GraphBuilder, SocialGraph};

/// Line iterator that remembers line numbers for error messages
struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Lines<'a> {
    fn new(input: &'a str) -> Self {
        Self { inner: input.lines().enumerate() }
    }
    
    /// Next line, 1-based line number included
    fn next_line(&mut self, expected: &str) -> Result<(usize, &'a str)> {
        self.inner.next()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .ok_or_else(|| anyhow!("Unexpected end of input, expected {}", expected))
    }
    
    fn next_non_blank(&mut self, expected: &str) -> Result<(usize, &'a str)> {
        loop {
            let (number, line) = self.next_line(expected)?;
            if !line.is_empty() {
                return Ok((number, line));
            }
        }
    }
    
    fn next_count(&mut self, expected: &str) -> Result<usize> {
        let (number, line) = self.next_non_blank(expected)?;
        line.parse()
            .with_context(|| format!("Line {}: expected {}, found {:?}", number, expected, line))
    }
}

/// Parse the text format into a graph
pub fn parse_network(input: &str, config: Config) -> Result<SocialGraph> {
    let mut lines = Lines::new(input);
    
    let user_count = lines.next_count("number of users")?;
    if user_count == 0 {
        bail!("A network needs at least one user");
    }
    
    if let Some(limit) = config.max_users {
        if user_count > limit {
            return Err(GraphError::CapacityExceeded(limit).into());
        }
    }
    
    let max_friendships = user_count
        .checked_mul(user_count - 1)
        .map(|pairs| pairs / 2)
        .ok_or_else(|| anyhow!("{} users declared, too many to load", user_count))?;
    
    let mut users = Vec::new();
    for _ in 0..user_count {
        let (_, name) = lines.next_line("a user name")?;
        if !name.is_empty() {
            users.push(name);
        }
    }
    
    let friendship_count = lines.next_count("number of friendships")?;
    if friendship_count > max_friendships {
        bail!(
            "{} friendships declared, at most {} possible between {} users",
            friendship_count,
            max_friendships,
            user_count
        );
    }
    
    let mut builder = GraphBuilder::with_capacity(users.len(), 0).config(config);
    for name in users {
        builder.add_user(name);
    }
    
    for _ in 0..friendship_count {
        let (number, line) = lines.next_non_blank("a friendship")?;
        let mut names = line.split_whitespace();
        match (names.next(), names.next()) {
            (Some(first), Some(second)) => {
                builder.add_friendship(first, second);
            }
            _ => bail!("Line {}: expected two names separated by space, found {:?}", number, line),
        }
    }
    
    Ok(builder.build()?)
}

pub fn load(path: &Path, config: Config) -> Result<SocialGraph> {
    log::info!("Reading text network: {}", path.display());
    
    let input = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_network(&input, config)
}
