//! Data models mirroring the Sonarr v3 resource shapes. Optional wire fields
//! are `Field<T>` so that absence, explicit null, and a concrete value stay
//! distinguishable across decode and encode.

pub mod command;
pub mod common;
pub mod episode;
pub mod episode_file;
pub mod history;
pub mod indexer;
pub mod localization;
pub mod log;
pub mod notification;
pub mod profile;
pub mod provider;
pub mod quality;
pub mod queue;
pub mod release;
pub mod rootfolder;
pub mod series;
pub mod system;
pub mod tag;
