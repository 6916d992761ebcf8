use tracing::info;
use trueka_board::{SkillStore, count_by_kind, filter, find_matches};
use trueka_core::{KindFilter, SkillDraft, SkillKind, TruekaError};

use super::render;

pub(super) fn cmd_add(
    store: &mut SkillStore,
    name: String,
    user: String,
    kind: SkillKind,
) -> trueka_core::Result<()> {
    submit(store, SkillDraft::new(name, user, kind))
}

/// Interactive form: skill, your name, offer or seek.
pub(super) fn cmd_post(store: &mut SkillStore) -> trueka_core::Result<()> {
    use dialoguer::{Input, Select, theme::ColorfulTheme};

    let theme = ColorfulTheme::default();
    println!();
    println!("{}", console::style("Add a new skill").bold().blue());

    let name: String = Input::with_theme(&theme)
        .with_prompt("Skill (e.g. Clases de costura)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| TruekaError::Prompt(e.to_string()))?;
    let user: String = Input::with_theme(&theme)
        .with_prompt("Your name (e.g. María)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| TruekaError::Prompt(e.to_string()))?;
    let kind = match Select::with_theme(&theme)
        .with_prompt("Type")
        .items(["Offer", "Seek"])
        .default(0)
        .interact()
        .map_err(|e| TruekaError::Prompt(e.to_string()))?
    {
        0 => SkillKind::Offer,
        _ => SkillKind::Seek,
    };

    submit(store, SkillDraft::new(name, user, kind))
}

/// Validate a draft and, only if it holds, append it to the board.
/// The confirmation is printed only once the snapshot has been written.
fn submit(store: &mut SkillStore, draft: SkillDraft) -> trueka_core::Result<()> {
    let entry = draft.validate()?;
    let confirmation = render::added(&entry);
    store.add(entry)?;
    info!(slot = store.slot(), count = store.len(), "skill posted");
    println!("{confirmation}");
    Ok(())
}

pub(super) fn cmd_list(
    store: &SkillStore,
    kind: KindFilter,
    json: bool,
) -> trueka_core::Result<()> {
    let view = filter(store.entries(), kind);
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }
    println!("{}", render::entries(&view, count_by_kind(store.entries())));
    Ok(())
}

pub(super) fn cmd_matches(store: &SkillStore, json: bool) -> trueka_core::Result<()> {
    let matches = find_matches(store.entries());
    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }
    println!("{}", render::matches(&matches));
    Ok(())
}
