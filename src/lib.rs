//! Minimal blog article CRUD REST API backed by PostgreSQL.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
