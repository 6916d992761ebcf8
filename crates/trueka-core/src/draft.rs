use serde::{Deserialize, Serialize};

use crate::error::{Result, TruekaError};
use crate::types::{SkillEntry, SkillKind};

/// Unvalidated form input collected by the presentation layer.
///
/// A draft only becomes a [`SkillEntry`] through [`SkillDraft::validate`],
/// which is the single place the non-empty invariant is enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDraft {
    pub name: String,
    pub user: String,
    pub kind: SkillKind,
}

impl SkillDraft {
    pub fn new(name: impl Into<String>, user: impl Into<String>, kind: SkillKind) -> Self {
        Self {
            name: name.into(),
            user: user.into(),
            kind,
        }
    }

    /// Turn the draft into an entry, rejecting empty `name` or `user`.
    ///
    /// Text is kept verbatim; no trimming is applied, so a whitespace-only
    /// name is accepted just like the board always has.
    pub fn validate(self) -> Result<SkillEntry> {
        if self.name.is_empty() {
            return Err(TruekaError::InvalidDraft { field: "name" });
        }
        if self.user.is_empty() {
            return Err(TruekaError::InvalidDraft { field: "user" });
        }
        Ok(SkillEntry {
            name: self.name,
            user: self.user,
            kind: self.kind,
        })
    }
}
