//! Chip usage samples.
//!
//! Every sample is a plain component function: render it inside a
//! [`Composition`](chip_catalog_ui::Composition) to get its tree. The
//! [`catalog`](crate::catalog) lists them with their preview metadata.

pub mod assist;
pub mod chip_group;
pub mod filter;
pub mod input;
pub mod suggestion;
