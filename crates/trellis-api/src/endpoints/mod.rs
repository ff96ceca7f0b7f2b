//! Typed endpoint groups, each an `impl` block on [`crate::ApiClient`].

pub mod auth;
pub mod boards;
pub mod cards;
pub mod invitations;
pub mod lists;
