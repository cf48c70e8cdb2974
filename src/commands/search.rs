use anyhow::{Context, Result};
use std::path::PathBuf;

use super::resolve_root;
use crate::metrics::gather_metrics;
use crate::search::{GrepSearch, Search};
use crate::sections::CodeSections;
use crate::Config;

/// Run the search command
///
/// # Arguments
///
/// * `query` - Pattern passed to git grep
/// * `json` - Print the collection as JSON instead of a listing
/// * `root` - Working tree to search
/// * `timeout_secs` - Override for `search.timeout_secs`
/// * `metrics` - Print Prometheus metrics to stderr afterwards
pub async fn run(
    query: &str,
    json: bool,
    root: Option<PathBuf>,
    timeout_secs: Option<u64>,
    metrics: bool,
) -> Result<()> {
    let root = resolve_root(root)?;
    let mut config = Config::load(&root)?;
    if let Some(secs) = timeout_secs {
        config.search.timeout_secs = secs;
    }

    let search = GrepSearch::from_config(&root, &config);
    let sections = search.search(query).await;

    if json {
        let output =
            serde_json::to_string_pretty(&sections).context("Failed to encode results")?;
        println!("{}", output);
    } else {
        print!("{}", format_sections(&sections));
    }

    if metrics {
        eprint!("{}", gather_metrics());
    }

    Ok(())
}

/// Human-readable listing of a result collection.
fn format_sections(sections: &CodeSections) -> String {
    if sections.is_empty() {
        return format!("No matches found for: {}\n", sections.search_query);
    }

    let mut output = format!(
        "Found {} file(s) matching \"{}\"\n\n",
        sections.len(),
        sections.search_query
    );

    for (i, section) in sections.sections.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, section.file_path));
        output.push_str(&format!("   {}\n", section.search_result.trim()));
        if !section.included_defs.is_empty() {
            output.push_str(&format!("   defines: {}\n", section.included_defs.join(", ")));
        }
        output.push('\n');
    }

    output
}
