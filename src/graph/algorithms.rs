//! Traversal and ranking queries over the friendship graph

use std::cmp::Reverse;
use std::collections::VecDeque;

use itertools::{EitherOrBoth, Itertools};
use serde::Serialize;

use crate::error::{GraphError, GraphResult};
use crate::graph::SocialGraph;

/// Breadth-first search tree rooted at a single user.
///
/// `distance[u]` is the hop count from the root, `None` when `u` was not
/// reached. `parent[u]` is the user `u` was discovered from, `None` for the
/// root and for unreached users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsTree {
    pub distance: Vec<Option<u32>>,
    pub parent: Vec<Option<u32>>,
    /// Users in the order they were discovered, root excluded
    pub discovered: Vec<u32>,
}

impl BfsTree {
    pub fn distance_to(&self, user: u32) -> Option<u32> {
        self.distance[user as usize]
    }
    
    /// Walk parent pointers from `target` back to the root.
    /// Returns the users from root to target, or `None` if unreached.
    pub fn path_to(&self, target: u32) -> Option<Vec<u32>> {
        self.distance_to(target)?;
        
        let mut path = vec![target];
        let mut current = target;
        while let Some(parent) = self.parent[current as usize] {
            path.push(parent);
            current = parent;
        }
        
        path.reverse();
        Some(path)
    }
}

/// BFS from `start` over the whole graph.
///
/// Neighbors are visited in ascending index order, so when several shortest
/// paths exist the parent recorded is the first one discovered.
pub fn breadth_first_search(graph: &SocialGraph, start: u32) -> BfsTree {
    explore(graph, start, None)
}

/// BFS that does not expand users whose distance has reached `max_depth`
fn explore(graph: &SocialGraph, start: u32, max_depth: Option<u32>) -> BfsTree {
    let n = graph.user_count();
    let mut distance = vec![None; n];
    let mut parent = vec![None; n];
    let mut discovered = Vec::new();
    let mut queue = VecDeque::new();
    
    distance[start as usize] = Some(0);
    queue.push_back((start, 0u32));
    
    while let Some((current, depth)) = queue.pop_front() {
        if max_depth.map_or(false, |limit| depth >= limit) {
            continue;
        }
        
        for &next in graph.neighbors(current) {
            if distance[next as usize].is_none() {
                distance[next as usize] = Some(depth + 1);
                parent[next as usize] = Some(current);
                discovered.push(next);
                queue.push_back((next, depth + 1));
            }
        }
    }
    
    BfsTree {
        distance,
        parent,
        discovered,
    }
}

/// Shortest chain of friendships from `from` to `to`, both ends included
pub fn shortest_path<'g>(graph: &'g SocialGraph, from: &str, to: &str) -> GraphResult<Vec<&'g str>> {
    let start = graph.resolve(from)?;
    let end = graph.resolve(to)?;
    
    let tree = breadth_first_search(graph, start);
    let path = tree.path_to(end).ok_or_else(|| GraphError::NoPathExists {
        from: from.to_string(),
        to: to.to_string(),
    })?;
    
    log::debug!("Path from {} to {} has {} hops", from, to, path.len() - 1);
    
    Ok(names(graph, path))
}

/// Users who are friends with both `first` and `second`, in index order
pub fn mutual_friends<'g>(graph: &'g SocialGraph, first: &str, second: &str) -> GraphResult<Vec<&'g str>> {
    let a = graph.resolve(first)?;
    let b = graph.resolve(second)?;
    
    let common = graph.neighbors(a).iter()
        .merge_join_by(graph.neighbors(b).iter(), |x, y| x.cmp(y))
        .filter_map(|pair| match pair {
            EitherOrBoth::Both(&user, _) => Some(user),
            _ => None,
        });
    
    Ok(names(graph, common))
}

/// Friends of `name` in index order
pub fn list_friends<'g>(graph: &'g SocialGraph, name: &str) -> GraphResult<Vec<&'g str>> {
    let user = graph.resolve(name)?;
    Ok(names(graph, graph.neighbors(user).iter().copied()))
}

/// Users within `max_hops` friendships of `name` who are not already its
/// friends, in discovery order. `max_hops` must be at least 1.
pub fn recommend_friends<'g>(
    graph: &'g SocialGraph,
    name: &str,
    max_hops: u32,
) -> GraphResult<Vec<&'g str>> {
    if max_hops == 0 {
        return Err(GraphError::InvalidArgument(
            "Degree must be a positive number".to_string(),
        ));
    }
    
    let start = graph.resolve(name)?;
    let tree = explore(graph, start, Some(max_hops));
    
    let recommended = tree.discovered.iter()
        .copied()
        .filter(|&user| user != start && !graph.has_edge(start, user));
    
    Ok(names(graph, recommended))
}

/// A user and how many friendships they have
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Popularity<'g> {
    pub name: &'g str,
    pub connections: usize,
}

/// Users with at least one friendship, most connected first.
/// Ties keep index order.
pub fn rank_by_popularity(graph: &SocialGraph) -> Vec<Popularity<'_>> {
    graph.users()
        .map(|user| (user, graph.degree(user)))
        .filter(|&(_, connections)| connections > 0)
        .sorted_by_key(|&(_, connections)| Reverse(connections))
        .map(|(user, connections)| Popularity {
            name: graph.name(user),
            connections,
        })
        .collect()
}

/// A user together with all of their friends
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adjacency<'g> {
    pub name: &'g str,
    pub friends: Vec<&'g str>,
}

/// Every user in index order with their friends
pub fn adjacency_listing(graph: &SocialGraph) -> Vec<Adjacency<'_>> {
    graph.users()
        .map(|user| Adjacency {
            name: graph.name(user),
            friends: names(graph, graph.neighbors(user).iter().copied()),
        })
        .collect()
}

fn names<'g>(graph: &'g SocialGraph, users: impl IntoIterator<Item = u32>) -> Vec<&'g str> {
    users.into_iter().map(|user| graph.name(user)).collect()
}
