//! Posts command - join posts and show per-user counts

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
    let parsed_posts = records::posts_from_value(&source.fetch_posts()?)?;

    let mut users = parsed_users.users;
    let outcome = ctx.join_service.assign_posts(&mut users, &parsed_posts.posts);
    let counts = ctx.report_service.post_counts(&users);

    if json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(());
    }

    print_warnings(&parsed_users.warnings);
    print_warnings(&parsed_posts.warnings);
    print_warnings(&outcome.warnings);

    if output::stdout_is_tty() {
        let mut table = output::create_table();
        table.set_header(vec!["User", "Posts"]);
        for entry in &counts {
            table.add_row(vec![entry.username.clone(), entry.posts.to_string()]);
        }
        println!("{}", table);
    } else {
        for entry in &counts {
            println!("{}\t{}", entry.username, entry.posts);
        }
    }

    Ok(())
}
