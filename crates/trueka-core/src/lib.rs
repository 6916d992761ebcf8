//! # trueka-core
//!
//! Core types and primitives for the Trueka skill-exchange board.
//! This crate defines the shared vocabulary used by every other crate in the workspace.

pub mod draft;
pub mod error;
pub mod types;

pub use draft::SkillDraft;
pub use error::{Result, TruekaError};
pub use types::*;
