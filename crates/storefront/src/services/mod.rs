//! Services built on top of the snapshot repositories.

pub mod auth;
