//! Core functionality: clause rewriting, session state, and configuration

pub mod analysis;
pub mod config;
pub mod panels;
pub mod rewrite;
pub mod session;
