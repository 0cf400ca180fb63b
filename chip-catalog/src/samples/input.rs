//! Input chip samples.

use chip_catalog_components::{
    chip::{ChipArgs, chip},
    icon::IconArgs,
    material_icons::filled,
};
use chip_catalog_ui::remember;

/// An input chip that toggles its selection.
pub fn input_chip_sample() {
    let selected = remember(|| false);
    chip(
        ChipArgs::input("Input Chip")
            .selected(selected.get())
            .on_click(move || {
                selected.toggle();
            }),
    );
}

/// An input chip with a person avatar.
pub fn input_chip_with_avatar_sample() {
    let selected = remember(|| false);
    chip(
        ChipArgs::input("Input Chip")
            .selected(selected.get())
            .avatar(IconArgs::from(filled::person_icon()).content_description("Localized description"))
            .on_click(move || {
                selected.toggle();
            }),
    );
}
