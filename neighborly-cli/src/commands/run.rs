//! Run command - full pipeline plus report

use anyhow::Result;
use colored::Colorize;

use super::{get_context, print_warnings, resolve_source};
use crate::output;

pub fn run(
    source_name: &str,
    users_url: Option<String>,
    posts_url: Option<String>,
    json: bool,
) -> Result<()> {
    let ctx = get_context()?;
    let source = resolve_source(&ctx, source_name, users_url, posts_url)?;
    let report = ctx.pipeline_service.run(source.as_ref())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_warnings(&report.parse_warnings);
    print_warnings(&report.join.warnings);
    print_warnings(&report.geo.warnings);
    if !report.parse_warnings.is_empty()
        || !report.join.warnings.is_empty()
        || !report.geo.warnings.is_empty()
    {
        println!();
    }

    println!("{}", "Post counts".bold());
    for entry in &report.post_counts {
        println!("  {} wrote {} post(s)", entry.username, entry.posts);
    }
    println!();

    if report.titles.all_unique {
        output::success("All post titles are unique");
    } else {
        output::warning("These post titles are not unique:");
        for title in &report.titles.duplicates {
            println!("  {}", title);
        }
    }
    println!();

    println!("{}", "Nearest neighbors".bold());
    for entry in &report.nearest {
        match &entry.closest_username {
            Some(closest) => println!("  {} lives closest to {}", entry.username, closest),
            None => println!("  {} has no reachable neighbor", entry.username),
        }
    }

    if !report.complete {
        println!();
        output::info("Some records were skipped; see warnings above.");
    }

    Ok(())
}
