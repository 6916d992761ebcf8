use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TruekaError;

/// Whether an entry offers a skill or seeks it.
///
/// Serialized with the board's historical wire values: `"ofrece"` and `"busca"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SkillKind {
    #[default]
    #[serde(rename = "ofrece")]
    Offer,
    #[serde(rename = "busca")]
    Seek,
}

impl SkillKind {
    /// Human-facing verb used when listing entries.
    pub fn label(self) -> &'static str {
        match self {
            SkillKind::Offer => "Offers",
            SkillKind::Seek => "Seeks",
        }
    }
}

impl fmt::Display for SkillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillKind::Offer => write!(f, "offer"),
            SkillKind::Seek => write!(f, "seek"),
        }
    }
}

impl FromStr for SkillKind {
    type Err = TruekaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "offer" | "ofrece" => Ok(SkillKind::Offer),
            "seek" | "busca" => Ok(SkillKind::Seek),
            _ => Err(TruekaError::UnknownKind(s.to_string())),
        }
    }
}

/// A posted skill: who offers or seeks what.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    /// Free-text skill label, compared case-insensitively when matching.
    pub name: String,
    /// Name of the person posting.
    pub user: String,
    #[serde(rename = "type")]
    pub kind: SkillKind,
}

impl SkillEntry {
    pub fn new(name: impl Into<String>, user: impl Into<String>, kind: SkillKind) -> Self {
        Self {
            name: name.into(),
            user: user.into(),
            kind,
        }
    }

    pub fn offer(name: impl Into<String>, user: impl Into<String>) -> Self {
        Self::new(name, user, SkillKind::Offer)
    }

    pub fn seek(name: impl Into<String>, user: impl Into<String>) -> Self {
        Self::new(name, user, SkillKind::Seek)
    }
}

/// Selection used by the filtered view. `All` keeps every entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    Only(SkillKind),
}

impl KindFilter {
    pub fn accepts(self, kind: SkillKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Only(k) => k == kind,
        }
    }
}

impl From<SkillKind> for KindFilter {
    fn from(kind: SkillKind) -> Self {
        KindFilter::Only(kind)
    }
}

impl FromStr for KindFilter {
    type Err = TruekaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "todos" => Ok(KindFilter::All),
            other => other.parse::<SkillKind>().map(KindFilter::Only),
        }
    }
}

/// A seeker paired with someone offering the same skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMatch {
    /// The skill as spelled by the seeker.
    pub skill: String,
    pub seeker: String,
    pub offerer: String,
}

impl fmt::Display for SkillMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} seeks {}, and {} offers it.",
            self.seeker, self.skill, self.offerer
        )
    }
}
