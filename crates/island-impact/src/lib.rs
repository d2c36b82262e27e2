//! Island-adjusted sustainability scoring.
//!
//! The [`scoring`] module holds the impact engine; [`config`], [`telemetry`]
//! and [`error`] carry the ambient pieces the API service builds on.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
