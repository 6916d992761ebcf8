use std::collections::HashMap;

use tracing::debug;
use trueka_core::{SkillEntry, SkillKind, SkillMatch};

/// Pair every seeker with every offerer of the same skill.
///
/// Names are compared after lowercasing, with no trimming and no partial
/// matches. Output is grouped by seek entry in insertion order, and within a
/// group offers appear in insertion order, so N offers and M seeks of one
/// skill yield N×M matches. The label is the seeker's spelling.
pub fn find_matches(entries: &[SkillEntry]) -> Vec<SkillMatch> {
    let mut offers_by_name: HashMap<String, Vec<&SkillEntry>> = HashMap::new();
    for offer in entries.iter().filter(|e| e.kind == SkillKind::Offer) {
        offers_by_name
            .entry(normalize(&offer.name))
            .or_default()
            .push(offer);
    }

    let matches: Vec<SkillMatch> = entries
        .iter()
        .filter(|e| e.kind == SkillKind::Seek)
        .flat_map(|seek| {
            offers_by_name
                .get(&normalize(&seek.name))
                .into_iter()
                .flatten()
                .map(move |offer| SkillMatch {
                    skill: seek.name.clone(),
                    seeker: seek.user.clone(),
                    offerer: offer.user.clone(),
                })
        })
        .collect();

    debug!(entries = entries.len(), matches = matches.len(), "computed matches");
    matches
}

fn normalize(name: &str) -> String {
    name.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_is_unicode_aware() {
        assert_eq!(normalize("ÁRBOL"), normalize("árbol"));
    }

    #[test]
    fn normalize_keeps_whitespace() {
        assert_ne!(normalize("yoga "), normalize("yoga"));
    }
}
