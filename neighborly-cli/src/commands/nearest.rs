//! Nearest command - nearest-neighbor pass only

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

    let parsed_users = records::users_from_value(&source.fetch_users()?)?;
    let mut users = parsed_users.users;

    let outcome = ctx.geo_service.assign_closest_user(&mut users)?;
    let nearest = ctx.report_service.nearest_neighbors(&users);

    if json {
        println!("{}", serde_json::to_string_pretty(&nearest)?);
        return Ok(());
    }

    print_warnings(&parsed_users.warnings);
    print_warnings(&outcome.warnings);

    for entry in &nearest {
        match &entry.closest_username {
            Some(closest) => println!("{} lives closest to {}", entry.username, closest),
            None => println!("{} has no reachable neighbor", entry.username),
        }
    }

    if !outcome.complete {
        output::info(&format!(
            "{} user(s) had no usable coordinates",
            outcome.skipped
        ));
    }

    Ok(())
}
