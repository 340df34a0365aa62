//! Raw GitHub REST access for a user's repository listing
//!
//! - `index`: the authenticated `GET /users/{username}/repos` call
//! - `models`: wire shapes of the response bodies

pub mod index;
pub mod models;
