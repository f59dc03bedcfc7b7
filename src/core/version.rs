use crate::core::identity::MINECRAFT_TOKEN;
use crate::models::mod_dto::UNKNOWN_VERSION;
use crate::models::paths::MOD_SUFFIX;
use lazy_static::lazy_static;
use regex::Regex;
use semver::Version;
use std::cmp::Ordering;

struct VersionRule {
    pattern: Regex,
    /// Whether a capture shaped like a Minecraft version is taken as the mod's version.
    accepts_minecraft: bool,
}

impl VersionRule {
    fn new(pattern: &str, accepts_minecraft: bool) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            accepts_minecraft,
        }
    }

    /// Every capture in `stem`, in order. Matches may share their boundary characters.
    fn captures<'h>(&self, stem: &'h str) -> Vec<&'h str> {
        let mut found = Vec::new();
        let mut start = 0;
        while let Some(m) = self
            .pattern
            .captures_at(stem, start)
            .and_then(|caps| caps.get(1))
        {
            found.push(m.as_str());
            start = m.end();
        }
        found
    }
}

lazy_static! {
    /// Ordered rules, first accepted capture wins.
    static ref VERSION_RULES: [VersionRule; 4] = [
        // -<mc>-<version>
        VersionRule::new(&format!(r"(?i)[-_]{MINECRAFT_TOKEN}[-_]v?(\d+\.\d+\.\d+)(?:[-+_.]|$)"), false),
        // -<version>[-<loader>]-<mc>
        VersionRule::new(&format!(r"(?i)[-_]v?(\d+\.\d+\.\d+)(?:[-_](?:fabric|forge|neoforge|quilt))?[-_]{MINECRAFT_TOKEN}(?:[-+_]|$)"), true),
        // trailing version, optionally followed by a loader or a build qualifier
        VersionRule::new(r"(?i)[-_]v?(\d+\.\d+\.\d+)(?:\.\d+)*(?:[-_](?:fabric|forge|neoforge|quilt))?(?:\+[\w.\-]*)?$", false),
        // any dotted triple
        VersionRule::new(r"(?:^|\D)(\d+\.\d+\.\d+)(?:\D|$)", false),
    ];
    static ref MINECRAFT_VERSION: Regex =
        Regex::new(&format!(r"(?i)^{MINECRAFT_TOKEN}$")).unwrap();
}

/// Reads a mod's own version out of a jar name or manifest path.
/// Returns `"unknown"` when no rule matches.
///
/// A triple that looks like a Minecraft version is passed over unless it sits
/// right before another Minecraft token. When nothing else is left, the first
/// triple in the name is used as is.
pub fn extract_version(name_or_path: &str) -> String {
    let stem = file_stem(name_or_path);

    VERSION_RULES
        .iter()
        .find_map(|rule| {
            rule.captures(stem)
                .into_iter()
                .find(|v| rule.accepts_minecraft || !is_minecraft_version(v))
        })
        .or_else(|| VERSION_RULES[3].captures(stem).into_iter().next())
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_VERSION.to_string())
}

pub fn is_minecraft_version(version: &str) -> bool {
    MINECRAFT_VERSION.is_match(version)
}

/// Strips any directory part and the `.jar` suffix.
pub fn file_stem(name_or_path: &str) -> &str {
    let name = name_or_path.rsplit('/').next().unwrap_or(name_or_path);
    name.strip_suffix(MOD_SUFFIX).unwrap_or(name)
}

/// Semantic-version precedence: build metadata does not take part.
pub fn cmp_precedence(a: &Version, b: &Version) -> Ordering {
    (a.major, a.minor, a.patch, &a.pre).cmp(&(b.major, b.minor, b.patch, &b.pre))
}
