//! DISC assessment scoring.
//!
//! The [`scoring`] module turns forced-choice answers into normalized trait scores and a
//! primary/secondary profile; [`config`], [`telemetry`] and [`error`] carry the service plumbing
//! shared with the API binary.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
