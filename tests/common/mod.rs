#![allow(dead_code)]

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::json;
use std::fs::File;
use std::io::Write;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

/// Temporary release directory.
pub fn setup_release_dir() -> (TempDir, Utf8PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();
    let release = root.join("release");
    std::fs::create_dir_all(&release).unwrap();
    (tmp, release)
}

/// Writes a zip with the given `(entry name, contents)` pairs.
pub fn write_archive(dir: &Utf8Path, file_name: &str, entries: &[(&str, &str)]) -> Utf8PathBuf {
    let path = dir.join(file_name);
    let mut zip = zip::ZipWriter::new(File::create(&path).unwrap());
    for (name, contents) in entries {
        zip.start_file(*name, SimpleFileOptions::default()).unwrap();
        zip.write_all(contents.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
    path
}

/// `modrinth.index.json` listing one `mods/<name>.jar` per jar name, plus a config file.
pub fn index_json(jars: &[&str]) -> String {
    let mut files: Vec<_> = jars
        .iter()
        .enumerate()
        .map(|(i, jar)| {
            json!({
                "path": format!("mods/{jar}.jar"),
                "hashes": { "sha1": format!("{i:040x}"), "sha512": "00" },
                "env": { "client": "required", "server": "required" },
                "downloads": [format!("https://cdn.example.test/{jar}.jar")],
                "fileSize": 1024 + i
            })
        })
        .collect();
    files.push(json!({
        "path": "config/options.txt",
        "hashes": { "sha1": "ffff" },
        "fileSize": 12
    }));

    json!({
        "formatVersion": 1,
        "game": "minecraft",
        "versionId": "1.0.0",
        "name": "Test Pack",
        "files": files,
        "dependencies": { "minecraft": "1.20.1", "fabric-loader": "0.15.3" }
    })
    .to_string()
}

/// A complete `.mrpack` holding the given mod jars.
pub fn write_mrpack(dir: &Utf8Path, file_name: &str, jars: &[&str]) -> Utf8PathBuf {
    let index = index_json(jars);
    write_archive(
        dir,
        file_name,
        &[
            ("modrinth.index.json", index.as_str()),
            ("overrides/config/readme.txt", "bundled override"),
        ],
    )
}

/// An empty file with an archive name, for tests that only look at names.
pub fn touch(dir: &Utf8Path, file_name: &str) -> Utf8PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, b"").unwrap();
    path
}
