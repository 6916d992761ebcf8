//! # trueka-cli
//!
//! Command-line front end for the Trueka skill board.
//!
//! ## Commands
//!
//! - `trueka add` — Post a skill you offer or seek
//! - `trueka post` — Post a skill through an interactive form
//! - `trueka list` — Show posted skills, optionally filtered by kind
//! - `trueka matches` — Show seekers paired with offerers of the same skill
//! - `trueka config` — Show the effective configuration
//! - `trueka completions` — Generate shell completions

pub mod commands;

pub use commands::Cli;
