//! Review command
//!
//! Submit a review for a listing or list a listing's reviews.

use super::AppContext;
use anyhow::Result;
use clap::Subcommand;
use ndis_core::rating::aggregate;
use ndis_core::review::Review;
use ndis_core::types::{Rating, ServiceId};

/// Review subcommands
#[derive(Debug, Subcommand)]
pub enum ReviewCommand {
    /// Submit a review
    Add {
        /// Listing id
        service_id: String,

        /// Star rating, a whole number from 1 to 5
        #[arg(long, short, allow_hyphen_values = true)]
        rating: String,

        /// Review text
        #[arg(long)]
        comment: String,

        /// Reviewer display name
        #[arg(long, short)]
        author: String,

        /// Accept ids that are not in the listings file
        #[arg(long)]
        unlisted: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List reviews for a listing, newest first
    List {
        /// Listing id
        service_id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Execute the review command
pub fn execute(ctx: &AppContext, cmd: ReviewCommand) -> Result<()> {
    match cmd {
        ReviewCommand::Add {
            service_id,
            rating,
            comment,
            author,
            unlisted,
            json,
        } => add_review(ctx, &service_id, &rating, &comment, &author, unlisted, json),
        ReviewCommand::List { service_id, json } => list_reviews(ctx, &service_id, json),
    }
}

fn add_review(
    ctx: &AppContext,
    service_id: &str,
    rating: &str,
    comment: &str,
    author: &str,
    unlisted: bool,
    as_json: bool,
) -> Result<()> {
    use colored::Colorize;

    let rating = Rating::parse(rating)?;
    let id = ServiceId::from_string(service_id);
    let directory = ctx.directory()?;

    let review = if unlisted {
        directory
            .reviews()
            .add_review(id, rating.value() as i64, comment, author)?
    } else {
        directory.submit_review(&id, rating.value() as i64, comment, author)?
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&review)?);
    } else {
        println!("{} Review submitted!", "✓".green());
        print_review(&review);
    }
    Ok(())
}

fn list_reviews(ctx: &AppContext, service_id: &str, as_json: bool) -> Result<()> {
    use colored::Colorize;

    let id = ServiceId::from_string(service_id);
    let reviews = ctx.directory()?.reviews().get_reviews(&id)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&reviews)?);
        return Ok(());
    }

    if reviews.is_empty() {
        println!("No reviews yet for {}.", id.to_string().cyan());
        return Ok(());
    }

    let summary = aggregate(&reviews);
    println!(
        "{} {} ({} reviews)",
        "Average:".bold(),
        format!("{:.1}", summary.average_rating).yellow(),
        summary.review_count
    );
    println!();
    for review in &reviews {
        print_review(review);
    }
    Ok(())
}

pub(crate) fn print_review(review: &Review) {
    use colored::Colorize;

    println!(
        "  {} {}  {}",
        review.rating.stars().yellow(),
        review.rating.to_string().dimmed(),
        review.created_at.format("%Y-%m-%d %H:%M").to_string().dimmed()
    );
    println!("  \"{}\"", review.comment);
    println!("  - {}", review.author.cyan());
    println!();
}
