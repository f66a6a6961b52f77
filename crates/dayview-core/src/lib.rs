#![forbid(unsafe_code)]

//! Shared model and configuration for the day viewer.
//!
//! This crate provides the primitives the layout and render crates build on:
//!
//! - [`Event`] - a validated time interval in minutes
//! - [`ViewParams`] - day window, ruler, and scale configuration
//! - [`BorderMetrics`] - border thickness constants and derived offsets

pub mod event;
pub mod params;

pub use event::{Event, EventError};
pub use params::{BorderMetrics, ParamsError, ViewParams};
