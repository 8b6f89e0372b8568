// src/lib.rs

pub mod core;
pub mod jsonl;

pub use crate::core::engine::detect;
pub use crate::core::types::{DetectionResult, Evidence, PrimaryLanguage, Script};
