//! Per-resource operations on [`SonarrClient`](crate::client::SonarrClient).
//! Each module is one `impl` block covering the REST operations of a single
//! resource; request descriptors are built here, transport lives in
//! `crate::http`.

mod calendar;
mod command;
mod episode;
mod episode_file;
mod history;
mod indexer;
mod log;
mod notification;
mod profile;
mod queue;
mod release;
mod rootfolder;
mod series;
mod system;
mod tag;
