//! Search command
//!
//! List matching providers, featured first, then by rating.

use super::AppContext;
use anyhow::Result;
use clap::Args;
use ndis_core::search::ServiceListing;

/// Arguments for the search command
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text matched against name, location, category and description
    #[arg(default_value = "")]
    pub query: String,

    /// Maximum number of results (defaults to the configured limit)
    #[arg(long, short)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the search command
pub fn execute(ctx: &AppContext, args: SearchArgs) -> Result<()> {
    let limit = args.limit.unwrap_or(ctx.config.search.default_limit);
    let results: Vec<ServiceListing> = ctx
        .directory()?
        .search(&args.query)?
        .into_iter()
        .take(limit)
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No providers found.");
        return Ok(());
    }

    for listing in &results {
        print_listing(listing);
    }
    Ok(())
}

pub(crate) fn print_listing(listing: &ServiceListing) {
    use colored::Colorize;

    let service = &listing.service;
    let badge = if listing.is_featured {
        " FEATURED ".on_yellow().black().to_string()
    } else {
        String::new()
    };
    println!(
        "{} {} {}",
        format!("[{}]", service.id).dimmed(),
        service.name.bold(),
        badge
    );

    if listing.summary.review_count == 0 {
        println!("    {}", "No reviews yet".dimmed());
    } else {
        println!(
            "    {} {:.1} ({} reviews)",
            "★".yellow(),
            listing.summary.average_rating,
            listing.summary.review_count
        );
    }

    if let Some(location) = &service.location {
        println!("    {}", location);
    }
    if !service.category.is_empty() {
        println!("    {}", service.category.join(", ").dimmed());
    }
}
