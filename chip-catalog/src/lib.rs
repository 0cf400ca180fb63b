//! Chip samples, chip-group overflow strategies and their preview tooling.
//!
//! [`samples`] holds the chip usage samples, including the two chip groups
//! that either open a menu or reflow when there are too many chips for one
//! line. [`catalog`] lists them with preview metadata, and [`preview`]
//! renders, activates and lays them out headlessly.
//!
//! ```
//! use chip_catalog::{config::PreviewConfig, preview::PreviewSession};
//!
//! let mut session =
//!     PreviewSession::open("chip_group_reflow", PreviewConfig::default()).unwrap();
//! session.click_label("Show All").unwrap();
//! assert!(session.dump().unwrap().contains("[selected]"));
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod catalog;
pub mod config;
pub mod preview;
pub mod samples;
