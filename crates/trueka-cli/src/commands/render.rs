use std::fmt::Write;

use console::style;
use trueka_board::KindCounts;
use trueka_core::{SkillEntry, SkillMatch};

pub(super) fn added(entry: &SkillEntry) -> String {
    format!(
        "{} {} {} {}",
        style("✔").green(),
        entry.user,
        entry.kind.label().to_lowercase(),
        style(&entry.name).bold()
    )
}

/// Card-style listing followed by a board-wide summary line.
pub(super) fn entries(view: &[&SkillEntry], counts: KindCounts) -> String {
    let mut out = String::new();
    if view.is_empty() {
        out.push_str("No skills to show.\n");
    }
    for entry in view {
        let _ = writeln!(out, "  {}", style(&entry.name).bold().magenta());
        let _ = writeln!(out, "    User: {}", entry.user);
        let _ = writeln!(out, "    {}", style(entry.kind.label()).italic().dim());
        out.push('\n');
    }
    let _ = write!(out, "{} offering, {} seeking", counts.offers, counts.seeks);
    out
}

pub(super) fn matches(matches: &[SkillMatch]) -> String {
    if matches.is_empty() {
        return "No matches yet.".to_string();
    }
    let mut out = format!("{}\n", style("Matches found").bold().green());
    for m in matches {
        let _ = writeln!(out, "  {m}");
    }
    out.truncate(out.trim_end().len());
    out
}
