//! Show command
//!
//! Display one listing with its rating summary and reviews.

use super::review::print_review;
use super::search::print_listing;
use super::AppContext;
use anyhow::Result;
use clap::Args;
use ndis_core::types::ServiceId;

/// Arguments for the show command
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Listing id
    pub service_id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the show command
pub fn execute(ctx: &AppContext, args: ShowArgs) -> Result<()> {
    use colored::Colorize;

    let id = ServiceId::from_string(&args.service_id);
    let detail = ctx.directory()?.service_detail(&id)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
        return Ok(());
    }

    print_listing(&detail.listing);
    if let Some(description) = &detail.listing.service.description {
        println!();
        println!("{}", description);
    }

    println!();
    println!("{}", "Reviews".bold().underline());
    if detail.reviews.is_empty() {
        println!("No reviews yet. Be the first to share your experience!");
    }
    for review in &detail.reviews {
        print_review(review);
    }
    Ok(())
}
