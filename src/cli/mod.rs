//! CLI module for the unit converter
//!
//! Provides subcommands:
//! - `serve`: conversion API + frontend
//! - `activity`: print a GitHub user's recent public activity

pub mod activity;
pub mod serve;

use clap::{Parser, Subcommand};

/// Unit Converter - length, weight and temperature conversions
#[derive(Parser)]
#[command(name = "unit-converter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the conversion API and frontend
    Serve(serve::ServeArgs),

    /// Show recent public GitHub activity for a user
    Activity(activity::ActivityArgs),
}
