//! CLI commands for starpath

pub mod dispatch;
pub mod helpers;
pub mod info;
pub mod search;
pub mod vertices;
