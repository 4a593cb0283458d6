//! Payload types shared by handlers and collaborators.

pub mod role;
pub mod stats;
pub mod user;
