//! # trueka-board
//!
//! The skill board itself:
//!
//! - **Store**: the ordered list of posted skills, mirrored into a snapshot slot
//!   after every change.
//! - **Slots**: key-value backends the snapshot lives in (SQLite file or in-memory).
//! - **Filter**: select entries by kind.
//! - **Matching**: pair every seeker with every offerer of the same skill.
//!
//! Filtering and matching are pure functions recomputed on demand from
//! [`SkillStore::entries`].

pub mod filter;
pub mod matching;
pub mod slots;
pub mod store;

pub use filter::{KindCounts, count_by_kind, filter};
pub use matching::find_matches;
pub use slots::{MemorySlots, SnapshotSlots, SqliteSlots};
pub use store::SkillStore;
