//! Material Design 3 dropdown menus.
//!
//! ## Usage
//!
//! Present overflowed actions in a floating list anchored below the
//! component that opened it.

use std::sync::Arc;

use chip_catalog_ui::{Callback, Dp, Modifier, NodeSpec, Overlay, Role, emit};
use closure::closure;
use derive_setters::Setters;
use tracing::debug;

use crate::{
    alignment::CrossAxisAlignment,
    icon::{IconArgs, icon},
    linear::LinearLayout,
    text::text,
};

/// Default values for menus.
pub struct MenuDefaults;

impl MenuDefaults {
    /// Minimum menu width.
    pub const MIN_WIDTH: Dp = Dp(112.0);
    /// Maximum menu width.
    pub const MAX_WIDTH: Dp = Dp(280.0);
    /// Maximum menu height; taller content scrolls.
    pub const MAX_HEIGHT: Dp = Dp(320.0);
    /// Gap between the anchor and the menu.
    pub const VERTICAL_GAP: Dp = Dp(4.0);
    /// Padding above the first and below the last item.
    pub const VERTICAL_PADDING: Dp = Dp(8.0);
    /// Minimum height of an item row.
    pub const ITEM_HEIGHT: Dp = Dp(48.0);
    /// Horizontal padding of an item row.
    pub const ITEM_HORIZONTAL_PADDING: Dp = Dp(12.0);
    /// Spacing between the icons and the text of an item row.
    pub const ITEM_ELEMENT_SPACING: Dp = Dp(12.0);
}

/// Arguments for [`dropdown_menu`].
#[derive(Clone, Default, Setters)]
pub struct DropdownMenuArgs {
    /// Whether the menu is shown.
    pub expanded: bool,
    /// Modifier chain applied to the menu surface.
    pub modifier: Modifier,
    /// Invoked when the user asks to dismiss the menu, e.g. by tapping
    /// outside of it.
    #[setters(skip)]
    pub on_dismiss_request: Option<Callback>,
}

impl DropdownMenuArgs {
    /// Sets the dismiss-request handler.
    pub fn on_dismiss_request<F>(mut self, on_dismiss_request: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_dismiss_request = Some(Arc::new(on_dismiss_request));
        self
    }

    /// Sets the dismiss-request handler using a shared callback.
    pub fn on_dismiss_request_shared(mut self, on_dismiss_request: Callback) -> Self {
        self.on_dismiss_request = Some(on_dismiss_request);
        self
    }
}

/// Scope for adding items inside a [`dropdown_menu`].
pub struct MenuScope<'a> {
    items: &'a mut Vec<Box<dyn FnOnce()>>,
}

impl MenuScope<'_> {
    /// Adds a menu child, typically a [`dropdown_menu_item`].
    pub fn item<F>(&mut self, child: F)
    where
        F: FnOnce() + 'static,
    {
        self.items.push(Box::new(child));
    }
}

/// # dropdown_menu
///
/// Shows a floating, vertically scrolling list of items while `expanded`.
///
/// The menu is anchored below the component it is emitted in and takes no
/// space in that component's layout. Nothing is emitted while collapsed.
///
/// ## Examples
///
/// ```
/// use chip_catalog_components::menus::{
///     DropdownMenuArgs, DropdownMenuItemArgs, dropdown_menu, dropdown_menu_item,
/// };
/// use chip_catalog_ui::Composition;
///
/// let mut composition = Composition::new();
/// let tree = composition.render(|| {
///     dropdown_menu(DropdownMenuArgs::default().expanded(true), |scope| {
///         scope.item(|| dropdown_menu_item(DropdownMenuItemArgs::new("Copy")));
///     });
/// });
/// assert!(tree.find_by_label("Copy").is_some());
/// ```
pub fn dropdown_menu<F>(args: DropdownMenuArgs, content: F)
where
    F: FnOnce(&mut MenuScope),
{
    if !args.expanded {
        return;
    }

    let mut items = Vec::new();
    content(&mut MenuScope { items: &mut items });
    debug!(items = items.len(), "showing dropdown menu");

    let mut spec = NodeSpec::new(
        "dropdown_menu",
        LinearLayout::column(Dp::ZERO, CrossAxisAlignment::Start),
    )
    .role(Role::Menu)
    .expanded(true)
    .overlay(Overlay {
        min_width: MenuDefaults::MIN_WIDTH,
        max_width: MenuDefaults::MAX_WIDTH,
        max_height: MenuDefaults::MAX_HEIGHT,
        vertical_offset: MenuDefaults::VERTICAL_GAP,
    })
    .modifier(
        args.modifier
            .vertical_scroll()
            .padding_vertical(MenuDefaults::VERTICAL_PADDING),
    );
    if let Some(on_dismiss) = args.on_dismiss_request {
        spec = spec.on_dismiss_request_shared(on_dismiss);
    }
    emit(spec, || {
        for item in items {
            item();
        }
    });
}

/// Arguments for [`dropdown_menu_item`].
#[derive(Clone, Setters)]
pub struct DropdownMenuItemArgs {
    /// Text of the item.
    #[setters(into)]
    pub text: String,
    /// Optional icon before the text.
    #[setters(strip_option, into)]
    pub leading_icon: Option<IconArgs>,
    /// Optional icon after the text.
    #[setters(strip_option, into)]
    pub trailing_icon: Option<IconArgs>,
    /// Whether the item can be activated.
    pub enabled: bool,
    /// Modifier chain applied to the item row.
    pub modifier: Modifier,
    /// Invoked when the item is activated.
    #[setters(skip)]
    pub on_click: Option<Callback>,
}

impl DropdownMenuItemArgs {
    /// Creates an enabled item with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            leading_icon: None,
            trailing_icon: None,
            enabled: true,
            modifier: Modifier::new(),
            on_click: None,
        }
    }

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

/// # dropdown_menu_item
///
/// Renders one activatable row of a [`dropdown_menu`].
pub fn dropdown_menu_item(args: DropdownMenuItemArgs) {
    let label = args.text.clone();
    let mut spec = NodeSpec::new(
        "dropdown_menu_item",
        LinearLayout::row(MenuDefaults::ITEM_ELEMENT_SPACING, CrossAxisAlignment::Center),
    )
    .role(Role::MenuItem)
    .label(label.clone())
    .enabled(args.enabled)
    .modifier(
        args.modifier
            .size_in(None, None, Some(MenuDefaults::ITEM_HEIGHT), None)
            .padding_horizontal(MenuDefaults::ITEM_HORIZONTAL_PADDING),
    );
    if let Some(on_click) = args.on_click {
        spec = spec.on_click_shared(Arc::new(closure!(clone label, || {
            debug!(item = %label, "menu item activated");
            on_click();
        })));
    }

    let leading = args.leading_icon;
    let trailing = args.trailing_icon;
    emit(spec, move || {
        if let Some(icon_args) = leading {
            icon(icon_args);
        }
        text(args.text);
        if let Some(icon_args) = trailing {
            icon(icon_args);
        }
    });
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chip_catalog_ui::{
        Composition, Constraint, InteractionError, LayoutEnv, Px, PxPosition, ScrollAxis,
    };

    use super::*;
    use crate::{
        boxed::{BoxedArgs, boxed},
        material_icons::automirrored,
    };

    fn anchored_menu(count: usize) {
        boxed(
            BoxedArgs::default().modifier(Modifier::new().size(Dp(100.0), Dp(40.0))),
            move |scope| {
                scope.child(move || {
                    dropdown_menu(DropdownMenuArgs::default().expanded(true), |menu| {
                        for index in 0..count {
                            menu.item(move || {
                                dropdown_menu_item(
                                    DropdownMenuItemArgs::new(format!("Item {index}"))
                                        .trailing_icon(automirrored::filled::arrow_right_icon()),
                                );
                            });
                        }
                    });
                });
            },
        );
    }

    #[test]
    fn test_collapsed_menu_emits_nothing() {
        let mut composition = Composition::new();
        let tree = composition.render(|| {
            dropdown_menu(DropdownMenuArgs::default(), |menu| {
                menu.item(|| dropdown_menu_item(DropdownMenuItemArgs::new("Hidden")));
            });
        });
        assert!(tree.nodes_named("dropdown_menu").is_empty());
        assert!(tree.find_by_label("Hidden").is_none());
    }

    #[test]
    fn test_menu_is_anchored_below_parent_without_taking_space() {
        let mut composition = Composition::new();
        let tree = composition.render(|| anchored_menu(2));
        let layout = tree
            .layout(Constraint::bounded(Px(400), Px(800)), &LayoutEnv::default())
            .unwrap();

        let anchor = layout.get(tree.nodes_named("boxed")[0]).unwrap();
        assert_eq!(anchor.size.height, Px(40));

        let menu = layout.get(tree.nodes_named("dropdown_menu")[0]).unwrap();
        assert_eq!(menu.position, PxPosition::new(Px(0), Px(44)));
        assert_eq!(menu.size.width, Px(112));
        assert_eq!(menu.size.height, Px(8 + 48 * 2 + 8));

        let first = layout.get(tree.find_by_label("Item 0").unwrap()).unwrap();
        assert_eq!(first.position, PxPosition::new(Px(0), Px(52)));
        assert_eq!(first.size.height, Px(48));
    }

    #[test]
    fn test_long_menu_scrolls_within_max_height() {
        let mut composition = Composition::new();
        let tree = composition.render(|| anchored_menu(9));
        let layout = tree
            .layout(Constraint::bounded(Px(400), Px(800)), &LayoutEnv::default())
            .unwrap();
        let menu = layout.get(tree.nodes_named("dropdown_menu")[0]).unwrap();
        assert_eq!(menu.size.height, Px(320));
        let scroll = menu.scroll.unwrap();
        assert_eq!(scroll.axis, ScrollAxis::Vertical);
        assert_eq!(scroll.content.height, Px(8 + 48 * 9 + 8));
        assert!(scroll.overflows());
    }

    #[test]
    fn test_dismiss_request_reaches_handler() {
        let dismissed = Arc::new(AtomicUsize::new(0));
        let counter = dismissed.clone();
        let mut composition = Composition::new();
        let tree = composition.render(move || {
            let counter = counter.clone();
            dropdown_menu(
                DropdownMenuArgs::default()
                    .expanded(true)
                    .on_dismiss_request(move || {
                        counter.fetch_add(1, Ordering::SeqCst);
                    }),
                |_| {},
            );
        });
        let menu = tree.nodes_named("dropdown_menu")[0];
        tree.dismiss(menu).unwrap();
        assert_eq!(dismissed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_item_click_and_disabled_item() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = clicks.clone();
        let mut composition = Composition::new();
        let tree = composition.render(move || {
            let counter = counter.clone();
            dropdown_menu(DropdownMenuArgs::default().expanded(true), move |menu| {
                let enabled_counter = counter.clone();
                menu.item(move || {
                    dropdown_menu_item(DropdownMenuItemArgs::new("Copy").on_click(move || {
                        enabled_counter.fetch_add(1, Ordering::SeqCst);
                    }));
                });
                menu.item(move || {
                    dropdown_menu_item(
                        DropdownMenuItemArgs::new("Paste")
                            .enabled(false)
                            .on_click(move || {
                                counter.fetch_add(1, Ordering::SeqCst);
                            }),
                    );
                });
            });
        });

        tree.click(tree.find_clickable("Copy").unwrap()).unwrap();
        let paste = tree.find_clickable("Paste").unwrap();
        assert!(matches!(
            tree.click(paste),
            Err(InteractionError::Disabled { .. })
        ));
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }
}
