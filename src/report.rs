//! Presentation of command results

use serde::Serialize;
use serde_json::json;

use crate::commands::{CommandError, Outcome};
use crate::error::GraphError;
use crate::graph::SocialGraph;

pub const HELP: &str = "\
Available commands:
1. print_graph - Display the network
2. mutual_friends <user1> <user2> - Find mutual friends
3. shortest_path <user1> <user2> - Find shortest path
4. recommend_friends <user> <degree> - Get friend recommendations
5. most_popular - List users by popularity
6. list_friends <user> - List friends of a user
7. help - Show this list
8. exit - Exit the program";

/// Output format for results and errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Render a command result
pub fn render(outcome: &Outcome<'_>, format: Format) -> String {
    match format {
        Format::Text => render_text(outcome),
        Format::Json => serde_json::to_string_pretty(outcome)
            .unwrap_or_else(|err| json!({ "error": "serialization", "message": err.to_string() }).to_string()),
    }
}

fn render_text(outcome: &Outcome<'_>) -> String {
    match outcome {
        Outcome::Graph { users } => {
            let mut out = String::from("Graph Structure:");
            for user in users {
                out.push_str(&format!("\n{}: {}", user.name, user.friends.join(", ")));
            }
            out
        }
        Outcome::MutualFriends { first, second, friends } => bullet_list(
            format!("Mutual friends between {} and {}:", first, second),
            friends,
            "No mutual friends found.",
        ),
        Outcome::Path { from, to, path } => {
            format!("Shortest path from {} to {}:\n{}", from, to, path.join(" -> "))
        }
        Outcome::Recommendations { user, max_hops, users } => bullet_list(
            format!("Friend recommendations for {} within {} levels:", user, max_hops),
            users,
            &format!("No recommendations found within {} degrees.", max_hops),
        ),
        Outcome::Popularity { users } => {
            let mut out = String::from("Most popular users:");
            for user in users {
                out.push_str(&format!("\n- {} ({} connections)", user.name, user.connections));
            }
            out
        }
        Outcome::Friends { user, friends } => {
            bullet_list(format!("Friends of {}:", user), friends, "No friends found.")
        }
        Outcome::Help => HELP.to_string(),
        Outcome::Exit => String::new(),
    }
}

fn bullet_list(mut out: String, names: &[&str], empty: &str) -> String {
    if names.is_empty() {
        out.push('\n');
        out.push_str(empty);
    }
    for name in names {
        out.push_str("\n- ");
        out.push_str(name);
    }
    out
}

/// Render a failed command
pub fn render_error(err: &CommandError, format: Format) -> String {
    match format {
        Format::Text => err.to_string(),
        Format::Json => json!({ "error": error_kind(err), "message": err.to_string() }).to_string(),
    }
}

fn error_kind(err: &CommandError) -> &'static str {
    match err {
        CommandError::Usage(_) => "usage",
        CommandError::Unknown(_) => "unknown_command",
        CommandError::Graph(GraphError::NotFound(_)) => "not_found",
        CommandError::Graph(GraphError::NoPathExists { .. }) => "no_path_exists",
        CommandError::Graph(GraphError::CapacityExceeded(_)) => "capacity_exceeded",
        CommandError::Graph(GraphError::InvalidArgument(_)) => "invalid_argument",
        CommandError::Graph(GraphError::DuplicateName(_)) => "duplicate_name",
    }
}

/// Size statistics of a loaded graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub users: usize,
    pub friendships: usize,
    pub avg_connections: f64,
    pub memory_bytes: usize,
}

pub fn summarize(graph: &SocialGraph) -> Summary {
    let users = graph.user_count();
    let friendships = graph.friendship_count();
    let total_connections: usize = graph.users().map(|user| graph.degree(user)).sum();
    
    Summary {
        users,
        friendships,
        avg_connections: if users == 0 { 0.0 } else { total_connections as f64 / users as f64 },
        memory_bytes: graph.memory_usage(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{execute, Command};
    use crate::graph::GraphBuilder;

    fn triangle_with_loner() -> SocialGraph {
        let mut builder = GraphBuilder::default();
        builder
            .add_user("a")
            .add_user("b")
            .add_user("c")
            .add_user("d")
            .add_friendship("a", "b")
            .add_friendship("b", "c")
            .add_friendship("c", "a");
        builder.build().unwrap()
    }

    fn text(graph: &SocialGraph, line: &str) -> String {
        let command = Command::parse(line).unwrap().unwrap();
        render(&execute(graph, &command).unwrap(), Format::Text)
    }

    #[test]
    fn renders_text_like_the_console() {
        let g = triangle_with_loner();
        assert_eq!(text(&g, "print_graph"), "Graph Structure:\na: b, c\nb: a, c\nc: a, b\nd: ");
        assert_eq!(text(&g, "shortest_path a c"), "Shortest path from a to c:\na -> c");
        assert_eq!(text(&g, "mutual_friends a d"), "Mutual friends between a and d:\nNo mutual friends found.");
        assert_eq!(
            text(&g, "most_popular"),
            "Most popular users:\n- a (2 connections)\n- b (2 connections)\n- c (2 connections)"
        );
        assert_eq!(
            text(&g, "recommend_friends a 2"),
            "Friend recommendations for a within 2 levels:\nNo recommendations found within 2 degrees."
        );
    }

    #[test]
    fn renders_non_empty_lists_and_help() {
        let g = triangle_with_loner();
        assert_eq!(text(&g, "list_friends a"), "Friends of a:\n- b\n- c");
        assert_eq!(text(&g, "list_friends d"), "Friends of d:\nNo friends found.");
        assert_eq!(text(&g, "help"), HELP);
    }

    #[test]
    fn renders_json_with_kind_tag() {
        let g = triangle_with_loner();
        let outcome = execute(&g, &Command::ListFriends("b".into())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&render(&outcome, Format::Json)).unwrap();
        assert_eq!(value, json!({ "kind": "friends", "user": "b", "friends": ["a", "c"] }));
    }

    #[test]
    fn renders_errors() {
        let err = CommandError::Graph(GraphError::NoPathExists { from: "a".into(), to: "d".into() });
        assert_eq!(render_error(&err, Format::Text), "No path exists between a and d");
        let value: serde_json::Value = serde_json::from_str(&render_error(&err, Format::Json)).unwrap();
        assert_eq!(value["error"], "no_path_exists");
    }

    #[test]
    fn summary_counts() {
        let summary = summarize(&triangle_with_loner());
        assert_eq!(summary.users, 4);
        assert_eq!(summary.friendships, 3);
        assert_eq!(summary.avg_connections, 1.5);
    }
}
