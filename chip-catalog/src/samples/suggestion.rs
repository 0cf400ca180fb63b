//! Suggestion chip samples.

use chip_catalog_components::chip::{ChipArgs, ChipStyle, chip};
use tracing::debug;

/// A flat suggestion chip.
pub fn suggestion_chip_sample() {
    chip(ChipArgs::suggestion("Suggestion Chip").on_click(|| debug!("suggestion chip activated")));
}

/// An elevated suggestion chip.
pub fn elevated_suggestion_chip_sample() {
    chip(
        ChipArgs::suggestion("Suggestion Chip")
            .style(ChipStyle::Elevated)
            .on_click(|| debug!("elevated suggestion chip activated")),
    );
}
