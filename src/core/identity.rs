//! Version-independent mod names.
//!
//! Jar names drift between releases (`sodium-fabric-0.5.8+mc1.20.1` becomes
//! `sodium-fabric-0.5.11+mc1.20.4`). Matching two manifests on the raw name
//! would report every such bump as one removal plus one addition, so both
//! sides are keyed by a base identity instead.
//!
//! The loader suffix is stripped and case is kept, so the example above
//! resolves to `sodium` on both sides.

use lazy_static::lazy_static;
use regex::Regex;

/// `1.20`, `1.20.1`, `mc1.20.1`. Bare tokens need a minor of 7 or more so
/// that ordinary mod versions such as `1.0.0` are not taken for one.
pub const MINECRAFT_TOKEN: &str = r"(?:mc1\.\d{1,2}|1\.(?:[7-9]|[12]\d))(?:\.\d{1,2})?";

lazy_static! {
    /// `-<version>+<build>`, e.g. `-0.92.0+1.20.1`.
    static ref BUILD_RUN: Regex = Regex::new(r"[-_]v?\d[\w.]*\+[\w.]*").unwrap();
    /// The delimiter after the token is captured and put back.
    static ref MC_TOKEN: Regex =
        Regex::new(&format!(r"(?i)[-_]{MINECRAFT_TOKEN}([-_+]|$)")).unwrap();
    /// Trailing numeric segments with at most one alphabetic qualifier.
    static ref TRAILING_VERSION: Regex =
        Regex::new(r"(?i)(?:[-_]v?\d[\w.]*)+(?:[-_][a-z][\w.]*)?$").unwrap();
    static ref LOADER_SUFFIX: Regex =
        Regex::new(r"(?i)(?:[-_](?:fabric|forge|neoforge|quilt))+$").unwrap();
}

/// Key under which the same mod is matched across two manifests.
/// Never empty: falls back to `raw_name` when stripping leaves nothing.
pub fn base_identity(raw_name: &str) -> String {
    let name = BUILD_RUN.replace_all(raw_name, "").into_owned();
    let name = strip_minecraft_tokens(name);
    let name = TRAILING_VERSION.replace(&name, "").into_owned();
    let name = LOADER_SUFFIX.replace(&name, "");
    let name = name.trim_matches(|c| c == '-' || c == '_');

    if name.is_empty() {
        raw_name.to_string()
    } else {
        name.to_string()
    }
}

// Adjacent tokens share a delimiter, so one pass can leave the second behind.
fn strip_minecraft_tokens(mut name: String) -> String {
    loop {
        let next = MC_TOKEN.replace_all(&name, "$1").into_owned();
        if next == name {
            return name;
        }
        name = next;
    }
}
