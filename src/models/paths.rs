use camino::Utf8PathBuf;

/// Archive extension, without the dot.
pub const ARCHIVE_EXTENSION: &str = "mrpack";
pub const MANIFEST_ENTRY: &str = "modrinth.index.json";
pub const MODS_PREFIX: &str = "mods/";
pub const MOD_SUFFIX: &str = ".jar";

/// Declares a set of directories with their default locations, relative to the working directory.
macro_rules! define_paths {
    ($name:ident { $($field:ident : $default:expr),* $(,)? }) => {
        #[derive(Clone, Debug)]
        pub struct $name {
            $(pub $field: Utf8PathBuf,)*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $($field: $default.into(),)*
                }
            }
        }
    };
}

define_paths!(ReleasePathRules {
    release: "release",
    docs: "docs",
});
