pub mod archive;
pub mod changeset;
pub mod error;
pub mod manifest;
pub mod mod_dto;
pub mod paths;
