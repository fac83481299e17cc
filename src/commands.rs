//! Command parsing and dispatch onto the graph queries

use std::io::{BufRead, Write};

use anyhow::Result;
use serde::Serialize;
use thiserror::Error;

use crate::error::GraphError;
use crate::graph::algorithms::{self, Adjacency, Popularity};
use crate::graph::SocialGraph;
use crate::report::{self, Format};

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    PrintGraph,
    MutualFriends(String, String),
    ShortestPath(String, String),
    RecommendFriends { user: String, max_hops: u32 },
    MostPopular,
    ListFriends(String),
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid command {0:?}! Type 'help' for available commands.")]
    Unknown(String),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl Command {
    /// Parse one line. Blank lines yield `Ok(None)`. Extra arguments are ignored.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        
        let command = match name {
            "print_graph" => Command::PrintGraph,
            "mutual_friends" => match (words.next(), words.next()) {
                (Some(a), Some(b)) => Command::MutualFriends(a.to_string(), b.to_string()),
                _ => return Err(CommandError::Usage("mutual_friends <user1> <user2>")),
            },
            "shortest_path" => match (words.next(), words.next()) {
                (Some(a), Some(b)) => Command::ShortestPath(a.to_string(), b.to_string()),
                _ => return Err(CommandError::Usage("shortest_path <user1> <user2>")),
            },
            "recommend_friends" => match (words.next(), words.next()) {
                (Some(user), Some(degree)) => Command::RecommendFriends {
                    user: user.to_string(),
                    max_hops: parse_degree(degree)?,
                },
                _ => return Err(CommandError::Usage("recommend_friends <user> <degree>")),
            },
            "most_popular" => Command::MostPopular,
            "list_friends" => match words.next() {
                Some(user) => Command::ListFriends(user.to_string()),
                None => return Err(CommandError::Usage("list_friends <user>")),
            },
            "help" => Command::Help,
            "exit" => Command::Exit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        
        Ok(Some(command))
    }
}

fn parse_degree(raw: &str) -> Result<u32, GraphError> {
    match raw.parse::<i64>() {
        Ok(degree) if degree > 0 => u32::try_from(degree)
            .map_err(|_| GraphError::InvalidArgument(format!("Degree {} is too large", degree))),
        Ok(_) => Err(GraphError::InvalidArgument("Degree must be a positive number".to_string())),
        Err(_) => Err(GraphError::InvalidArgument(format!("Degree {:?} is not a number", raw))),
    }
}

/// Structured result of a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome<'g> {
    Graph { users: Vec<Adjacency<'g>> },
    MutualFriends { first: String, second: String, friends: Vec<&'g str> },
    Path { from: String, to: String, path: Vec<&'g str> },
    Recommendations { user: String, max_hops: u32, users: Vec<&'g str> },
    Popularity { users: Vec<Popularity<'g>> },
    Friends { user: String, friends: Vec<&'g str> },
    Help,
    Exit,
}

/// Run a command against the graph
pub fn execute<'g>(graph: &'g SocialGraph, command: &Command) -> Result<Outcome<'g>, GraphError> {
    log::debug!("Executing {:?}", command);
    
    let outcome = match command {
        Command::PrintGraph => Outcome::Graph {
            users: algorithms::adjacency_listing(graph),
        },
        Command::MutualFriends(first, second) => Outcome::MutualFriends {
            friends: algorithms::mutual_friends(graph, first, second)?,
            first: first.clone(),
            second: second.clone(),
        },
        Command::ShortestPath(from, to) => Outcome::Path {
            path: algorithms::shortest_path(graph, from, to)?,
            from: from.clone(),
            to: to.clone(),
        },
        Command::RecommendFriends { user, max_hops } => Outcome::Recommendations {
            users: algorithms::recommend_friends(graph, user, *max_hops)?,
            user: user.clone(),
            max_hops: *max_hops,
        },
        Command::MostPopular => Outcome::Popularity {
            users: algorithms::rank_by_popularity(graph),
        },
        Command::ListFriends(user) => Outcome::Friends {
            friends: algorithms::list_friends(graph, user)?,
            user: user.clone(),
        },
        Command::Help => Outcome::Help,
        Command::Exit => Outcome::Exit,
    };
    
    Ok(outcome)
}

/// Parse, execute and render one line. Returns `None` for blank lines.
pub fn run_line<'g>(
    graph: &'g SocialGraph,
    line: &str,
    format: Format,
) -> Result<Option<(Outcome<'g>, String)>, CommandError> {
    let Some(command) = Command::parse(line)? else {
        return Ok(None);
    };
    let outcome = execute(graph, &command)?;
    let rendered = report::render(&outcome, format);
    Ok(Some((outcome, rendered)))
}

/// Read commands from `input` until `exit` or end of input, writing results
/// and errors to `output`. Errors never end the session.
pub fn run_session<R: BufRead, W: Write>(
    graph: &SocialGraph,
    input: R,
    mut output: W,
    format: Format,
    prompt: bool,
) -> Result<()> {
    let mut lines = input.lines();
    loop {
        if prompt {
            write!(output, "\nEnter command: ")?;
            output.flush()?;
        }
        
        let Some(line) = lines.next() else {
            break;
        };
        
        match run_line(graph, &line?, format) {
            Ok(Some((Outcome::Exit, _))) => break,
            Ok(Some((_, rendered))) => writeln!(output, "{}", rendered)?,
            Ok(None) => {}
            Err(err) => {
                log::warn!("Command failed: {}", err);
                writeln!(output, "{}", report::render_error(&err, format))?;
            }
        }
    }
    
    Ok(())
}
