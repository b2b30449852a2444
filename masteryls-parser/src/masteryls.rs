//! Main module for masteryls quiz functionality

pub mod extraction;
pub mod inlines;
pub mod quiz;
pub mod rendering;
pub mod scoring;

/// The fence language tag that marks a quiz block. Matched case-sensitively and exactly.
pub const QUIZ_LANGUAGE: &str = "masteryls";
