// src/core/mod.rs

pub mod text;

pub use text::normalize_text;
