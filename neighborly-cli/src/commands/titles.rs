//! Titles command - title uniqueness verdict

use anyhow::Result;

use neighborly_core::records;

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

    let parsed_posts = records::posts_from_value(&source.fetch_posts()?)?;
    let report = ctx.title_service.titles_unique(&parsed_posts.posts)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_warnings(&parsed_posts.warnings);

    if report.all_unique {
        output::success(&format!(
            "All {} post titles are unique",
            report.titles.len()
        ));
    } else {
        output::warning("These post titles are not unique:");
        for title in &report.duplicates {
            println!("  {}", title);
        }
    }

    Ok(())
}
