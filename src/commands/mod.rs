//! CLI commands for rubric

pub mod dispatch;
pub mod format;
pub mod input;
pub mod normalize;
pub mod render;
pub mod status;
pub mod totals;
