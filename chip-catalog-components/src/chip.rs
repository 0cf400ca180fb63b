//! Material Design chip components.
//!
//! ## Usage
//!
//! Present compact actions, filters, or input tokens in dense UIs.

use std::{fmt, sync::Arc};

use chip_catalog_ui::{Callback, Dp, Modifier, NodeSpec, Padding, Role, emit};
use derive_setters::Setters;
use tracing::trace;

use crate::{
    alignment::CrossAxisAlignment,
    icon::{IconArgs, icon},
    linear::LinearLayout,
    text::{TextArgs, text},
};

/// Visual variants supported by [`chip`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChipVariant {
    /// A compact action chip for context-aware suggestions.
    #[default]
    Assist,
    /// A chip for offering suggested actions or next steps.
    Suggestion,
    /// A selectable chip for filtering content.
    Filter,
    /// A selectable chip representing an input token.
    Input,
}

impl ChipVariant {
    /// Returns `true` for variants that carry a selection state.
    pub fn is_selectable(self) -> bool {
        matches!(self, ChipVariant::Filter | ChipVariant::Input)
    }
}

impl fmt::Display for ChipVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChipVariant::Assist => "assist",
            ChipVariant::Suggestion => "suggestion",
            ChipVariant::Filter => "filter",
            ChipVariant::Input => "input",
        })
    }
}

/// Container styles for chips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChipStyle {
    /// Flat, outlined style.
    #[default]
    Flat,
    /// Elevated style with a subtle shadow.
    Elevated,
}

impl fmt::Display for ChipStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChipStyle::Flat => "flat",
            ChipStyle::Elevated => "elevated",
        })
    }
}

/// Default values for chip components.
pub struct ChipDefaults;

impl ChipDefaults {
    /// Minimum height for chips.
    pub const HEIGHT: Dp = Dp(32.0);
    /// Default icon size used inside chips.
    pub const ICON_SIZE: Dp = Dp(18.0);
    /// Avatar size used by input chips.
    pub const AVATAR_SIZE: Dp = Dp(24.0);
    /// Spacing between icons and label content.
    pub const ELEMENT_SPACING: Dp = Dp(8.0);
    /// Horizontal padding applied to most chip variants.
    pub const HORIZONTAL_PADDING: Dp = Dp(8.0);
    /// Input chip horizontal padding when no leading or trailing icon exists.
    pub const INPUT_EDGE_PADDING: Dp = Dp(4.0);
    /// Input chip horizontal padding when leading or trailing icon is present.
    pub const INPUT_ICON_PADDING: Dp = Dp(8.0);

    /// Border width for a chip in the given state, `None` when borderless.
    pub fn border(variant: ChipVariant, style: ChipStyle, selected: bool) -> Option<Dp> {
        match style {
            ChipStyle::Elevated => None,
            ChipStyle::Flat if selected && variant.is_selectable() => None,
            ChipStyle::Flat => Some(Dp(1.0)),
        }
    }

    /// Default elevation used for elevated chips.
    pub fn elevation(style: ChipStyle) -> Option<Dp> {
        match style {
            ChipStyle::Flat => None,
            ChipStyle::Elevated => Some(Dp(1.0)),
        }
    }
}

/// Arguments for the [`chip`] component.
#[derive(Clone, Setters)]
pub struct ChipArgs {
    /// Variant of the chip.
    pub variant: ChipVariant,
    /// Visual style of the chip.
    pub style: ChipStyle,
    /// Text label rendered inside the chip.
    #[setters(into)]
    pub label: String,
    /// Optional leading icon shown before the label.
    #[setters(strip_option, into)]
    pub leading_icon: Option<IconArgs>,
    /// Optional trailing icon shown after the label.
    #[setters(strip_option, into)]
    pub trailing_icon: Option<IconArgs>,
    /// Optional avatar shown in the leading slot of input chips.
    #[setters(strip_option, into)]
    pub avatar: Option<IconArgs>,
    /// Whether the chip is selected (used by selectable variants).
    pub selected: bool,
    /// Whether the chip is enabled.
    pub enabled: bool,
    /// Optional modifier chain applied to the chip.
    pub modifier: Modifier,
    /// Optional elevation override.
    #[setters(strip_option)]
    pub elevation: Option<Dp>,
    /// Optional click handler for the chip.
    #[setters(skip)]
    pub on_click: Option<Callback>,
    /// Optional accessibility label announced instead of the text label.
    #[setters(strip_option, into)]
    pub accessibility_label: Option<String>,
}

impl ChipArgs {
    /// Sets the on_click handler.
    pub fn on_click<F>(mut self, on_click: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(on_click));
        self
    }

    /// Sets the on_click handler using a shared callback.
    pub fn on_click_shared(mut self, on_click: Callback) -> Self {
        self.on_click = Some(on_click);
        self
    }
}

impl ChipArgs {
    /// Creates a default assist chip configuration with the provided label.
    pub fn assist(label: impl Into<String>) -> Self {
        ChipArgs::default()
            .variant(ChipVariant::Assist)
            .label(label)
    }

    /// Creates a default suggestion chip configuration with the provided label.
    pub fn suggestion(label: impl Into<String>) -> Self {
        ChipArgs::default()
            .variant(ChipVariant::Suggestion)
            .label(label)
    }

    /// Creates a default filter chip configuration with the provided label.
    pub fn filter(label: impl Into<String>) -> Self {
        ChipArgs::default()
            .variant(ChipVariant::Filter)
            .label(label)
    }

    /// Creates a default input chip configuration with the provided label.
    pub fn input(label: impl Into<String>) -> Self {
        ChipArgs::default().variant(ChipVariant::Input).label(label)
    }
}

impl Default for ChipArgs {
    fn default() -> Self {
        Self {
            variant: ChipVariant::default(),
            style: ChipStyle::default(),
            label: String::new(),
            leading_icon: None,
            trailing_icon: None,
            avatar: None,
            selected: false,
            enabled: true,
            modifier: Modifier::new(),
            elevation: None,
            on_click: None,
            accessibility_label: None,
        }
    }
}

impl fmt::Debug for ChipArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChipArgs")
            .field("variant", &self.variant)
            .field("style", &self.style)
            .field("label", &self.label)
            .field("selected", &self.selected)
            .field("enabled", &self.enabled)
            .field("has_on_click", &self.on_click.is_some())
            .finish_non_exhaustive()
    }
}

/// # chip
///
/// Renders a compact chip for actions, filters, and input tokens with optional
/// icons.
///
/// ## Usage
///
/// Use for filters, suggestions, and compact actions in dense layouts.
///
/// ## Parameters
///
/// - `args` configures the chip label, variant, and appearance; see
///   [`ChipArgs`].
///
/// ## Examples
///
/// ```
/// use chip_catalog_components::chip::{ChipArgs, chip};
/// use chip_catalog_ui::{Composition, remember};
///
/// let mut composition = Composition::new();
/// let tree = composition.render(|| {
///     let selected = remember(|| false);
///     selected.with_mut(|value| *value = true);
///     let args = ChipArgs::filter("Favorites").selected(selected.get());
///     assert!(args.selected);
///     chip(args);
/// });
/// let favorites = tree.find_by_label("Favorites").unwrap();
/// assert_eq!(tree.get(favorites).unwrap().semantics.selected, Some(true));
/// ```
pub fn chip(args: impl Into<ChipArgs>) {
    let args: ChipArgs = args.into();
    let variant = args.variant;
    let style = args.style;
    let selectable = variant.is_selectable();
    let selected = args.selected && selectable;
    let elevation = args.elevation.or_else(|| ChipDefaults::elevation(style));
    let border = ChipDefaults::border(variant, style, selected);

    // Only input chips show an avatar; it takes the leading slot.
    let leading = match (variant, args.avatar) {
        (ChipVariant::Input, Some(avatar)) => Some(IconArgs {
            size: ChipDefaults::AVATAR_SIZE,
            ..avatar
        }),
        _ => args.leading_icon.map(|icon_args| IconArgs {
            size: ChipDefaults::ICON_SIZE,
            ..icon_args
        }),
    };
    let trailing = args.trailing_icon.map(|icon_args| IconArgs {
        size: ChipDefaults::ICON_SIZE,
        ..icon_args
    });
    let padding = chip_padding(variant, leading.is_some(), trailing.is_some());

    let label = args.label;
    let accessibility_label = args
        .accessibility_label
        .or_else(|| (!label.is_empty()).then(|| label.clone()));

    let describe = |value: Option<Dp>| value.map_or_else(|| "none".to_string(), |v| v.to_string());
    let mut spec = NodeSpec::new(
        "chip",
        LinearLayout::row(ChipDefaults::ELEMENT_SPACING, CrossAxisAlignment::Center),
    )
    .role(if selectable { Role::Toggle } else { Role::Button })
    .enabled(args.enabled)
    .attribute("variant", variant)
    .attribute("style", style)
    .attribute("elevation", describe(elevation))
    .attribute("border", describe(border))
    .modifier(
        args.modifier
            .wrap_content_width_unbounded()
            .size_in(None, None, Some(ChipDefaults::HEIGHT), None)
            .padding(padding),
    );
    if selectable {
        spec = spec.selected(selected);
    }
    if let Some(label) = accessibility_label {
        spec = spec.label(label);
    }
    if let Some(on_click) = args.on_click {
        spec = spec.on_click_shared(on_click);
    }

    trace!(%variant, label = %label, selected, "emitting chip");
    emit(spec, move || {
        if let Some(icon_args) = leading {
            icon(icon_args);
        }
        if !label.is_empty() {
            text(TextArgs::default().text(label));
        }
        if let Some(icon_args) = trailing {
            icon(icon_args);
        }
    });
}

fn chip_padding(variant: ChipVariant, has_leading_icon: bool, has_trailing_icon: bool) -> Padding {
    match variant {
        ChipVariant::Input => {
            let start = if has_leading_icon {
                ChipDefaults::INPUT_ICON_PADDING
            } else {
                ChipDefaults::INPUT_EDGE_PADDING
            };
            let end = if has_trailing_icon {
                ChipDefaults::INPUT_ICON_PADDING
            } else {
                ChipDefaults::INPUT_EDGE_PADDING
            };
            Padding::only(start, Dp::ZERO, end, Dp::ZERO)
        }
        _ => Padding::symmetric(ChipDefaults::HORIZONTAL_PADDING, Dp::ZERO),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chip_catalog_ui::{
        Composition, Constraint, InteractionError, LayoutEnv, Px, PxPosition, remember,
    };

    use super::*;
    use crate::material_icons::filled;

    #[test]
    fn test_chip_padding_by_variant() {
        assert_eq!(
            chip_padding(ChipVariant::Assist, true, false),
            Padding::symmetric(Dp(8.0), Dp::ZERO)
        );
        assert_eq!(
            chip_padding(ChipVariant::Input, false, false),
            Padding::only(Dp(4.0), Dp::ZERO, Dp(4.0), Dp::ZERO)
        );
        assert_eq!(
            chip_padding(ChipVariant::Input, true, false),
            Padding::only(Dp(8.0), Dp::ZERO, Dp(4.0), Dp::ZERO)
        );
    }

    #[test]
    fn test_border_and_elevation_defaults() {
        assert_eq!(
            ChipDefaults::border(ChipVariant::Assist, ChipStyle::Flat, false),
            Some(Dp(1.0))
        );
        assert_eq!(
            ChipDefaults::border(ChipVariant::Assist, ChipStyle::Flat, true),
            Some(Dp(1.0))
        );
        assert_eq!(
            ChipDefaults::border(ChipVariant::Filter, ChipStyle::Flat, true),
            None
        );
        assert_eq!(
            ChipDefaults::border(ChipVariant::Filter, ChipStyle::Elevated, false),
            None
        );
        assert_eq!(ChipDefaults::elevation(ChipStyle::Elevated), Some(Dp(1.0)));
        assert_eq!(ChipDefaults::elevation(ChipStyle::Flat), None);
    }

    #[test]
    fn test_click_invokes_callback_once() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = clicks.clone();
        let mut composition = Composition::new();
        let tree = composition.render(move || {
            let counter = counter.clone();
            chip(ChipArgs::assist("Assist Chip").on_click(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }));
        });
        assert_eq!(clicks.load(Ordering::SeqCst), 0);

        let id = tree.find_clickable("Assist Chip").unwrap();
        tree.click(id).unwrap();
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
        tree.click(id).unwrap();
        assert_eq!(clicks.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_chip_without_handler_is_not_clickable() {
        let mut composition = Composition::new();
        let tree = composition.render(|| chip(ChipArgs::suggestion("Idle")));
        let id = tree.find_by_label("Idle").unwrap();
        assert!(matches!(
            tree.click(id),
            Err(InteractionError::NotClickable { .. })
        ));
    }

    #[test]
    fn test_disabled_chip_rejects_activation() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = clicks.clone();
        let mut composition = Composition::new();
        let tree = composition.render(move || {
            let counter = counter.clone();
            chip(
                ChipArgs::assist("Off")
                    .enabled(false)
                    .on_click(move || {
                        counter.fetch_add(1, Ordering::SeqCst);
                    }),
            );
        });
        let id = tree.find_by_label("Off").unwrap();
        assert!(matches!(
            tree.click(id),
            Err(InteractionError::Disabled { .. })
        ));
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_selection_toggle_is_self_inverse() {
        fn filter() {
            let selected = remember(|| false);
            let handle = selected.clone();
            chip(
                ChipArgs::filter("Filter chip")
                    .selected(selected.get())
                    .on_click(move || {
                        handle.toggle();
                    }),
            );
        }

        let mut composition = Composition::new();
        let selected_of = |tree: &chip_catalog_ui::RenderTree| {
            let id = tree.find_by_label("Filter chip").unwrap();
            tree.get(id).unwrap().semantics.selected
        };

        let initial = composition.render(filter);
        assert_eq!(selected_of(&initial), Some(false));
        let id = initial.find_clickable("Filter chip").unwrap();
        initial.click(id).unwrap();

        let toggled = composition.render(filter);
        assert_eq!(selected_of(&toggled), Some(true));
        let id = toggled.find_clickable("Filter chip").unwrap();
        toggled.click(id).unwrap();

        let restored = composition.render(filter);
        assert_eq!(selected_of(&restored), Some(false));
    }

    #[test]
    fn test_non_selectable_variant_ignores_selected() {
        let mut composition = Composition::new();
        let tree = composition.render(|| chip(ChipArgs::assist("Assist").selected(true)));
        let node = tree.get(tree.find_by_label("Assist").unwrap()).unwrap();
        assert_eq!(node.semantics.selected, None);
        assert_eq!(node.semantics.role, Role::Button);
        assert_eq!(node.attribute("border"), Some("1dp"));
    }

    #[test]
    fn test_avatar_takes_leading_slot_of_input_chip() {
        let mut composition = Composition::new();
        let tree = composition.render(|| {
            chip(
                ChipArgs::input("Input Chip")
                    .leading_icon(filled::home_icon())
                    .avatar(filled::person_icon()),
            );
        });
        let icons = tree.nodes_named("icon");
        assert_eq!(icons.len(), 1);
        let avatar = tree.get(icons[0]).unwrap();
        assert_eq!(avatar.attribute("glyph"), Some("person"));
        assert_eq!(avatar.attribute("size"), Some("24dp"));
    }

    #[test]
    fn test_chip_geometry() {
        let mut composition = Composition::new();
        let tree = composition.render(|| {
            chip(ChipArgs::assist("Assist Chip").leading_icon(filled::settings_icon()));
        });
        let layout = tree
            .layout(Constraint::bounded(Px(400), Px(400)), &LayoutEnv::default())
            .unwrap();

        let chip_layout = layout.get(tree.nodes_named("chip")[0]).unwrap();
        // 8 + 18 + 8 + 77 + 8 at 7px per glyph.
        assert_eq!(chip_layout.size.width, Px(119));
        assert_eq!(chip_layout.size.height, Px(32));

        let icon_layout = layout.get(tree.nodes_named("icon")[0]).unwrap();
        assert_eq!(icon_layout.position, PxPosition::new(Px(8), Px(7)));
        let label = layout.get(tree.nodes_named("text")[0]).unwrap();
        assert_eq!(label.position, PxPosition::new(Px(34), Px(6)));
    }

    #[test]
    fn test_narrow_parent_does_not_squeeze_label() {
        let mut composition = Composition::new();
        let tree = composition.render(|| chip(ChipArgs::assist("Transparent 9")));
        let layout = tree
            .layout(Constraint::bounded(Px(60), Px(400)), &LayoutEnv::default())
            .unwrap();

        // 8 + 91 + 8: the chip overflows rather than clipping its label.
        let chip_layout = layout.get(tree.nodes_named("chip")[0]).unwrap();
        assert_eq!(chip_layout.size.width, Px(107));
        let label = layout.get(tree.nodes_named("text")[0]).unwrap();
        assert_eq!(label.size.width, Px(91));
    }
}
