//! # CLI Argument Definitions
//!
//! `clap` derive types for the `cargo xtask` entry point: the top-level
//! parser plus one enum per subcommand group.

use clap::{Parser, Subcommand};

/// Top-level parser invoked as `cargo xtask <command>`.
#[derive(Debug, Parser)]
#[command(name = "cargo xtask")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Developer toolkit for the LinkHub workspace")]
pub struct Cli {
    /// Subcommand to dispatch.
    #[command(subcommand)]
    pub command: AppCommands,
}

/// Every task the toolkit knows how to run.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Install the cargo tools and compilation targets the workspace needs
    Setup {},
    /// Create or list page-section crates (crates/features/)
    Features {
        #[command(subcommand)]
        action: FeatureAction,
    },
    /// Create or list infrastructure crates (infra/)
    Libs {
        #[command(subcommand)]
        action: LibraryAction,
    },
    /// Create or list application crates (apps/)
    Apps {
        #[command(subcommand)]
        action: AppAction,
    },
    /// Serve a web app through dioxus-cli with hot reload
    Serve {
        /// App to serve; the 'lhub-' prefix may be omitted (defaults to the shell)
        project: Option<String>,
    },
    /// Run tests for one crate or the whole workspace
    Test {
        /// Crate to test; the 'lhub-' prefix may be omitted (omit for all)
        project: Option<String>,
    },
    /// Run doc tests for one crate or the whole workspace
    Doctest {
        /// Crate to doc-test; the 'lhub-' prefix may be omitted (omit for all)
        project: Option<String>,
    },
    /// Build and run a binary crate natively
    Run {
        /// Crate to run; the 'lhub-' prefix may be omitted
        project: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum FeatureAction {
    /// Scaffold a page-section crate from the bundled template
    Add {
        /// Section name; the crate is published as 'lhub-<name>'
        name: String,
    },
    /// Show all page sections with their descriptions
    List {},
}

#[derive(Debug, Subcommand)]
pub enum LibraryAction {
    /// Scaffold an infrastructure crate from the bundled template
    Add {
        /// Library name; the crate is published as 'lhub-<name>'
        name: String,
    },
    /// Show all infrastructure crates with their descriptions
    List {},
}

#[derive(Debug, Subcommand)]
pub enum AppAction {
    /// Scaffold an application crate from the bundled template
    Add {
        /// Application name; the crate is published as 'lhub-<name>'
        name: String,
    },
    /// Show all applications with their descriptions
    List {},
}
