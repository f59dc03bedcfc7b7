use crate::core::version::{extract_version, file_stem};
use crate::models::manifest::{ManifestFile, ModrinthIndex};
use crate::models::mod_dto::ModRecord;
use crate::models::paths::MODS_PREFIX;
use std::collections::BTreeMap;

/// Mods of one manifest keyed by raw name. A later entry with the same raw name replaces an earlier one.
pub fn build_mod_index(manifest: &ModrinthIndex) -> BTreeMap<String, ModRecord> {
    manifest
        .files
        .iter()
        .filter_map(to_mod_record)
        .map(|record| (record.raw_name.clone(), record))
        .collect()
}

/// `None` for anything outside `mods/`.
pub fn to_mod_record(file: &ManifestFile) -> Option<ModRecord> {
    if !file.path.starts_with(MODS_PREFIX) {
        return None;
    }

    let raw_name = file_stem(&file.path).to_string();
    Some(ModRecord {
        version: extract_version(&raw_name),
        raw_name,
        path: file.path.clone(),
        file_size_bytes: file.file_size.unwrap_or(0),
        checksum_sha1: file.hashes.get("sha1").cloned().unwrap_or_default(),
    })
}
