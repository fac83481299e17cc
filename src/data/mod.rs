//! Loading friendship networks from disk

pub mod json;
pub mod text;

use std::path::Path;

use anyhow::Result;

use crate::config::Config;
use crate::graph::SocialGraph;

/// Load a network, choosing the format from the file extension:
/// `.json` files are read as JSON, anything else as the line-based text format.
pub fn load_network(path: &Path, config: Config) -> Result<SocialGraph> {
    let is_json = path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
    
    if is_json {
        json::load(path, config)
    } else {
        text::load(path, config)
    }
}
