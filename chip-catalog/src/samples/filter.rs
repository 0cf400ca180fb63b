//! Filter chip samples.
//!
//! Each sample remembers its own selection flag and flips it on activation.

use chip_catalog_components::{
    chip::{ChipArgs, ChipStyle, chip},
    icon::{IconArgs, IconContent},
    material_icons::filled,
};
use chip_catalog_ui::remember;

fn selectable_filter_chip(style: ChipStyle, unselected_icon: Option<IconContent>) {
    let selected = remember(|| false);
    let is_selected = selected.get();

    let leading = if is_selected {
        Some(IconArgs::from(filled::done_icon()).content_description("Localized Description"))
    } else {
        unselected_icon
            .map(|content| IconArgs::from(content).content_description("Localized description"))
    };

    let mut args = ChipArgs::filter("Filter chip")
        .style(style)
        .selected(is_selected)
        .on_click(move || {
            selected.toggle();
        });
    if let Some(icon_args) = leading {
        args = args.leading_icon(icon_args);
    }
    chip(args);
}

/// A flat filter chip that shows a check mark while selected.
pub fn filter_chip_sample() {
    selectable_filter_chip(ChipStyle::Flat, None);
}

/// An elevated filter chip that shows a check mark while selected.
pub fn elevated_filter_chip_sample() {
    selectable_filter_chip(ChipStyle::Elevated, None);
}

/// A filter chip that swaps a home icon for a check mark when selected.
pub fn filter_chip_with_leading_icon_sample() {
    selectable_filter_chip(ChipStyle::Flat, Some(filled::home_icon()));
}
