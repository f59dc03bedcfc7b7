pub mod changelog;
pub mod identity;
pub mod locator;
pub mod manifest;
pub mod mod_index;
pub mod pipeline;
pub mod publisher;
pub mod version;
