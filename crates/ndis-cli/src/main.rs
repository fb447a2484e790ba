//! ndis-directory - NDIS service provider directory CLI
//!
//! Browse listings, read and submit star-rating reviews.
//!
//! ## Quick Start
//!
//! ```bash
//! # Create config and data files in the current project
//! ndis-directory init
//!
//! # Search listings (featured first, then by rating)
//! ndis-directory search therapy
//!
//! # Review a listing
//! ndis-directory review add 12 --rating 5 --comment "Great support" --author Sam
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
