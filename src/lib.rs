// src/lib.rs
//! Results lookup and statistics for a recurring road race.
//!
//! Pipeline: raw JSON rows -> `normalize` -> `competitors` / `stats` ->
//! `table` + `chart` -> GUI or CLI.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod progress;
pub mod schema;

pub mod competitors;
pub mod normalize;
pub mod stats;
pub mod store;

pub mod chart;
pub mod csv;
pub mod file;
pub mod table;

pub mod cli;
pub mod gui;
