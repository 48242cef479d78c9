//! Library exports for the storefront catalog service
//!
//! This module exposes internal components for testing and potential library usage.

pub mod database;
pub mod handler;
pub mod model;
pub mod query;
pub mod route;
pub mod search;
