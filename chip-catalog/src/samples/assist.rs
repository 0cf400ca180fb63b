//! Assist chip samples.

use chip_catalog_components::{
    chip::{ChipArgs, ChipStyle, chip},
    icon::IconArgs,
    material_icons::filled,
};
use tracing::debug;

fn settings_icon() -> IconArgs {
    IconArgs::from(filled::settings_icon()).content_description("Localized description")
}

/// A flat assist chip with a leading settings icon.
pub fn assist_chip_sample() {
    chip(
        ChipArgs::assist("Assist Chip")
            .leading_icon(settings_icon())
            .on_click(|| debug!("assist chip activated")),
    );
}

/// The elevated variant of [`assist_chip_sample`].
pub fn elevated_assist_chip_sample() {
    chip(
        ChipArgs::assist("Assist Chip")
            .style(ChipStyle::Elevated)
            .leading_icon(settings_icon())
            .on_click(|| debug!("elevated assist chip activated")),
    );
}
