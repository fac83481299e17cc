use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use social_graph_analyzer::commands;
use social_graph_analyzer::data;
use social_graph_analyzer::report::{self, Format};
use social_graph_analyzer::Config;

#[derive(Parser, Debug)]
#[clap(
    name = "social-graph-analyzer",
    about = "Friendship network queries: mutual friends, shortest paths, recommendations"
)]
struct Cli {
    /// Network description (.json, or the line-based text format)
    #[clap(long)]
    input: PathBuf,
    
    /// Maximum number of users the graph accepts
    #[clap(long)]
    max_users: Option<usize>,
    
    /// Keep duplicate user names (later duplicates are unreachable by name)
    #[clap(long)]
    allow_duplicates: bool,
    
    /// Command to run instead of reading commands from stdin (repeatable)
    #[clap(long = "command", short = 'c')]
    commands: Vec<String>,
    
    /// Print results as JSON
    #[clap(long)]
    json: bool,
    
    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();
    
    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();
    
    let config = Config::new(args.max_users, args.allow_duplicates);
    let format = if args.json { Format::Json } else { Format::Text };
    
    let graph = data::load_network(&args.input, config)?;
    
    let summary = report::summarize(&graph);
    log::info!(
        "Loaded graph with {} users and {} friendships ({:.2} connections per user, ~{} bytes)",
        summary.users,
        summary.friendships,
        summary.avg_connections,
        summary.memory_bytes
    );
    
    if !args.commands.is_empty() {
        let script = args.commands.join("\n");
        return commands::run_session(&graph, script.as_bytes(), io::stdout().lock(), format, false);
    }
    
    let interactive = io::stdin().is_terminal();
    if interactive {
        println!("{}", report::HELP);
    }
    commands::run_session(&graph, io::stdin().lock(), io::stdout().lock(), format, interactive)
}
