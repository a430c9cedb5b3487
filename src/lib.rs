// SPDX-License-Identifier: MPL-2.0

//! Darkroom - a photo filter application
//!
//! This library provides the core functionality for the darkroom
//! application: a filter catalog, an editing session that maps two generic
//! sliders onto filter-specific parameters, and a software render engine.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`editor`]: Editing session state and the filter pipeline core
//! - [`engine`]: Render engine boundary and the software implementation
//! - [`filters`]: The fixed filter catalog and slider settings
//! - [`picker`]: Async source photo loading
//! - [`review`]: Filter-usage counter behind the review prompt
//! - [`config`]: User configuration handling
//! - [`storage`]: Export of rendered photos

pub mod config;
pub mod constants;
pub mod editor;
pub mod engine;
pub mod errors;
pub mod filters;
pub mod picker;
pub mod review;
pub mod storage;

// Re-export commonly used types
pub use config::Config;
pub use editor::{Editor, LoadGeneration};
pub use engine::{FilterParams, RenderEngine, SoftwareEngine};
pub use errors::{AppError, AppResult, LoadError, RenderError};
pub use filters::{FilterKind, FilterSettings, ParamSlot};
pub use review::FilterUsageCounter;
