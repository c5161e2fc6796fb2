// src/normalize/mod.rs
//
// Raw corpus rows -> canonical records.
//
//   raw JSON row ─┬─ schema rules (which key holds what)
//                 ├─ event::parse_event   (event identity)
//                 ├─ time::*              (finish time)
//                 └─ record::normalize_record -> NormalizedRecord | dropped

pub mod event;
pub mod record;
pub mod time;

pub use event::parse_event;
pub use record::{normalize_all, normalize_record, NormalizeOutcome};
