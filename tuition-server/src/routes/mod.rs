//! Route handlers for the enrollment API
//!
//! Organized by resource type:
//! - health: liveness marker
//! - enrollments: submission intake and listing

pub mod enrollments;
pub mod health;
