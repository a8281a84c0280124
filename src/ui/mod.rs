//! UI components for ClauseWise

pub mod classify;
pub mod entities;
pub mod file_bar;
pub mod home;
pub mod qa;
pub mod sidebar;
pub mod simplify;
