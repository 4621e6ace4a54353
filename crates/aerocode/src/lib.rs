//! `aerocode` - Core of an aircraft production management console
//!
//! This library holds the record types of the five production domains
//! (aircraft, employees, parts, production stages and tests) and the pure
//! functions the console is built on: case-insensitive search, status
//! tallies, stage timelines grouped by aircraft, and status classification.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod aggregate;
pub mod auth;
pub mod classify;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod query;
pub mod render;
pub mod store;
pub mod timeline;
pub mod view;

pub use aggregate::{count_by, status_summary, StatusSummary, Tile};
pub use auth::{authenticate, register, Credentials, Registration, RegistrationError};
pub use classify::{classify, Classification, StageIcon, Tone};
pub use config::Config;
pub use domain::{Aircraft, Categorized, Category, Domain, Employee, Inspection, Part, Record, Stage};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use query::{filter, search, SearchQuery};
pub use render::OutputFormat;
pub use store::{Catalog, RecordStore, Seed};
pub use timeline::{group_by_parent, Timeline, TimelineEntry};
pub use view::{Dialog, Submission, View, ViewState};
