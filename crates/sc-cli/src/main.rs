//! static-comments - threaded comments for static sites
//!
//! Inspect and export the comment threads of a site's comment directory.
//!
//! ## Quick Start
//!
//! ```bash
//! # Write a default configuration
//! static-comments config init
//!
//! # Show every thread as a tree
//! static-comments tree
//!
//! # Export one article's thread
//! static-comments export my-first-post --format json
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
