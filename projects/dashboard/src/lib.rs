//! GitHub repositories dashboard
//!
//! - Credential loading in `config`
//! - Upstream fetch, stats and display shaping in `domain/`
//! - Console listing in `console`
//! - Web dashboard route in `endpoints/`, HTML in `views/`
//! - Requires GITHUB_USER and GITHUB_PAT env vars (or a `.env` file)

pub mod config;
pub mod console;
pub mod domain;
pub mod endpoints;
pub mod views;
