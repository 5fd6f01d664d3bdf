//! TutorTrack - Tutoring Session Tracking Backend
//!
//! This crate tracks billable tutoring sessions between instructors and
//! their students: creation, full-field updates, and instructor-scoped
//! listing, with ownership and referential validation in front of every
//! mutation.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
