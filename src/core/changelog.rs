use crate::core::identity::base_identity;
use crate::models::changeset::ChangeSet;
use crate::models::mod_dto::{ModRecord, UpdatedMod};
use std::collections::BTreeMap;

/// Classifies mods of two manifests into added, removed and updated.
///
/// Mods are paired by [`base_identity`]. An update is only reported when
/// both versions are known and differ.
pub fn compare(
    old: &BTreeMap<String, ModRecord>,
    new: &BTreeMap<String, ModRecord>,
) -> ChangeSet {
    let old_mods = by_identity(old);
    let new_mods = by_identity(new);

    let added = new_mods
        .iter()
        .filter(|(id, _)| !old_mods.contains_key(*id))
        .map(|(_, record)| (*record).clone())
        .collect();

    let removed = old_mods
        .iter()
        .filter(|(id, _)| !new_mods.contains_key(*id))
        .map(|(_, record)| (*record).clone())
        .collect();

    let updated = new_mods
        .iter()
        .filter_map(|(id, new_record)| {
            let old_record = old_mods.get(id)?;
            let comparable = old_record.has_known_version() && new_record.has_known_version();
            (comparable && old_record.version != new_record.version).then(|| UpdatedMod {
                identity: id.clone(),
                old_version: old_record.version.clone(),
                new_version: new_record.version.clone(),
            })
        })
        .collect();

    ChangeSet::new(added, removed, updated)
}

// Raw names that collapse onto one identity: the one sorting last is kept.
fn by_identity(index: &BTreeMap<String, ModRecord>) -> BTreeMap<String, &ModRecord> {
    index
        .values()
        .map(|record| (base_identity(&record.raw_name), record))
        .collect()
}

/// Markdown changelog. Sections without entries are left out.
pub fn render(changes: &ChangeSet, new_label: &str, old_label: &str) -> String {
    let mut lines = vec![format!("# Changelog: {new_label} (compared to {old_label})")];

    let sections = [
        ("Added Mods", changes.added.iter().map(ModRecord::display_line).collect::<Vec<_>>()),
        ("Removed Mods", changes.removed.iter().map(ModRecord::display_line).collect()),
        ("Updated Mods", changes.updated.iter().map(UpdatedMod::display_line).collect()),
    ];

    for (title, mut entries) in sections {
        if entries.is_empty() {
            continue;
        }
        entries.sort();
        lines.push(String::new());
        lines.push(format!("## {title} ({})", entries.len()));
        lines.extend(entries);
    }

    lines.join("\n")
}
