//! Chip groups that hold more chips than fit on one line.
//!
//! Two overflow policies are provided:
//!
//! - [`overflow_menu_chip_group`] keeps a single scrolling row and adds a
//!   "Show All" chip that opens a dropdown menu listing every item.
//! - [`reflow_chip_group`] puts a "Show All" filter chip in front of the
//!   items; selecting it reflows the collapsed single line into a vertically
//!   scrolling multi-line flow.
//!
//! Both take the expansion flag as a [`State<bool>`] owned by the host, so
//! the host decides how long the flag lives.

use std::sync::Arc;

use chip_catalog_components::{
    alignment::{Alignment, CrossAxisAlignment},
    boxed::{BoxedArgs, boxed},
    chip::{ChipArgs, ChipDefaults, chip},
    column::{ColumnArgs, column},
    divider::{DividerArgs, vertical_divider},
    flow_row::{FlowRowArgs, flow_row},
    icon::IconArgs,
    menus::{DropdownMenuArgs, DropdownMenuItemArgs, dropdown_menu, dropdown_menu_item},
    material_icons::{automirrored, filled},
    row::{RowArgs, row},
};
use chip_catalog_ui::{Dp, Modifier, State, remember};
use closure::closure;
use derive_setters::Setters;
use tracing::debug;

/// Label of the chip that expands a group.
pub const SHOW_ALL_LABEL: &str = "Show All";

/// Names used by the reflow sample.
pub const COLOR_NAMES: [&str; 10] = [
    "Blue",
    "Yellow",
    "Red",
    "Orange",
    "Black",
    "Green",
    "White",
    "Magenta",
    "Gray",
    "Transparent",
];

/// Horizontal padding around each chip of a group.
const GROUP_CHIP_PADDING: Dp = Dp(4.0);

/// One entry of a chip group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChipItem {
    /// Text shown on the chip.
    pub label: String,
    /// Position of the item in its group.
    pub index: usize,
}

impl ChipItem {
    /// `Chip 0` through `Chip {count - 1}`.
    pub fn numbered(count: usize) -> Vec<ChipItem> {
        (0..count)
            .map(|index| ChipItem {
                label: format!("Chip {index}"),
                index,
            })
            .collect()
    }

    /// One item per name, labelled `"{name} {index}"`.
    pub fn labeled(names: &[&str]) -> Vec<ChipItem> {
        names
            .iter()
            .enumerate()
            .map(|(index, name)| ChipItem {
                label: format!("{name} {index}"),
                index,
            })
            .collect()
    }
}

/// Invoked with the index of an activated item.
pub type ItemCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Arguments shared by both chip-group strategies.
#[derive(Clone, Default, Setters)]
pub struct ChipGroupArgs {
    /// Items of the group, in display order.
    pub items: Vec<ChipItem>,
    /// Invoked when an item chip or an item's menu row is activated.
    #[setters(skip)]
    pub on_item_click: Option<ItemCallback>,
}

impl ChipGroupArgs {
    /// Sets the item handler.
    pub fn on_item_click<F>(mut self, on_item_click: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.on_item_click = Some(Arc::new(on_item_click));
        self
    }
}

fn forward(on_item_click: &Option<ItemCallback>, index: usize) {
    match on_item_click {
        Some(handler) => handler(index),
        None => debug!(index, "chip group item activated"),
    }
}

fn show_all_icon() -> IconArgs {
    IconArgs::from(filled::tune_icon())
        .size(ChipDefaults::ICON_SIZE)
        .content_description("Localized Description")
}

/// # overflow_menu_chip_group
///
/// A single horizontally scrolling row of assist chips led by a "Show All"
/// chip. Activating "Show All" toggles `expanded`; while expanded a dropdown
/// menu anchored below the row lists every item.
///
/// The full row stays rendered while the menu is open. Activating a menu row
/// or dismissing the menu collapses it.
pub fn overflow_menu_chip_group(args: ChipGroupArgs, expanded: State<bool>) {
    let ChipGroupArgs {
        items,
        on_item_click,
    } = args;

    column(
        ColumnArgs::default()
            .modifier(Modifier::new().fill_max_width())
            .cross_axis_alignment(CrossAxisAlignment::Center),
        move |scope| {
            scope.child(move || {
                row(
                    RowArgs::default()
                        .modifier(Modifier::new().horizontal_scroll())
                        .cross_axis_alignment(CrossAxisAlignment::Center),
                    move |row_scope| {
                        let is_expanded = expanded.get();

                        row_scope.child(closure!(clone expanded, || {
                            chip(
                                ChipArgs::assist(SHOW_ALL_LABEL)
                                    .leading_icon(show_all_icon())
                                    .on_click(move || {
                                        let now = expanded.toggle();
                                        debug!(expanded = now, "toggled overflow menu");
                                    }),
                            );
                        }));

                        row_scope.child(closure!(clone expanded, clone items, clone on_item_click, || {
                            let dismiss = expanded.clone();
                            dropdown_menu(
                                DropdownMenuArgs::default()
                                    .expanded(is_expanded)
                                    .on_dismiss_request(move || dismiss.set(false)),
                                move |menu| {
                                    for item in items {
                                        menu.item(closure!(clone expanded, clone on_item_click, || {
                                            let index = item.index;
                                            dropdown_menu_item(
                                                DropdownMenuItemArgs::new(item.label)
                                                    .trailing_icon(
                                                        automirrored::filled::arrow_right_icon(),
                                                    )
                                                    .on_click(move || {
                                                        expanded.set(false);
                                                        forward(&on_item_click, index);
                                                    }),
                                            );
                                        }));
                                    }
                                },
                            );
                        }));

                        for item in items {
                            row_scope.child(closure!(clone on_item_click, || {
                                let index = item.index;
                                chip(
                                    ChipArgs::assist(item.label)
                                        .modifier(
                                            Modifier::new().padding_horizontal(GROUP_CHIP_PADDING),
                                        )
                                        .trailing_icon(filled::arrow_drop_down_icon())
                                        .on_click(move || forward(&on_item_click, index)),
                                );
                            }));
                        }
                    },
                );
            });
        },
    );
}

/// # reflow_chip_group
///
/// A flow of assist chips led by a "Show All" filter chip and a divider.
///
/// - Collapsed: one line that scrolls horizontally.
/// - Expanded: as many lines as the width requires, filling the width and
///   scrolling vertically.
///
/// Activating "Show All" toggles `expanded`.
pub fn reflow_chip_group(args: ChipGroupArgs, expanded: State<bool>) {
    let ChipGroupArgs {
        items,
        on_item_click,
    } = args;
    let is_expanded = expanded.get();

    let modifier = Modifier::new().fill_max_width().wrap_content_height();
    let (modifier, max_lines) = if is_expanded {
        (modifier.vertical_scroll(), usize::MAX)
    } else {
        (modifier.horizontal_scroll(), 1)
    };

    flow_row(
        FlowRowArgs::default()
            .modifier(modifier)
            .cross_axis_alignment(CrossAxisAlignment::Center)
            .max_lines(max_lines),
        move |scope| {
            scope.child(move || {
                chip(
                    ChipArgs::filter(SHOW_ALL_LABEL)
                        .selected(is_expanded)
                        .modifier(Modifier::new().padding_horizontal(GROUP_CHIP_PADDING))
                        .leading_icon(show_all_icon())
                        .on_click(move || {
                            let now = expanded.toggle();
                            debug!(expanded = now, "toggled chip reflow");
                        }),
                );
            });

            scope.child(|| {
                boxed(
                    BoxedArgs::default()
                        .alignment(Alignment::Center)
                        .modifier(Modifier::new().height(ChipDefaults::HEIGHT)),
                    |box_scope| box_scope.child(|| vertical_divider(DividerArgs::default())),
                );
            });

            for item in items {
                scope.child(closure!(clone on_item_click, || {
                    let index = item.index;
                    chip(
                        ChipArgs::assist(item.label)
                            .modifier(Modifier::new().padding_horizontal(GROUP_CHIP_PADDING))
                            .on_click(move || forward(&on_item_click, index)),
                    );
                }));
            }
        },
    );
}

/// Nine numbered chips behind an overflow menu.
pub fn chip_group_single_line_sample() {
    let expanded = remember(|| false);
    overflow_menu_chip_group(
        ChipGroupArgs::default().items(ChipItem::numbered(9)),
        expanded,
    );
}

/// Ten color chips that reflow when "Show All" is selected.
pub fn chip_group_reflow_sample() {
    let selected = remember(|| false);
    column(ColumnArgs::default(), move |scope| {
        scope.child(move || {
            reflow_chip_group(
                ChipGroupArgs::default().items(ChipItem::labeled(&COLOR_NAMES)),
                selected,
            );
        });
    });
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use chip_catalog_ui::{
        Composition, Constraint, LayoutEnv, LayoutResult, Px, RenderTree, Role,
    };

    use super::*;

    const ITEM_COUNTS: [usize; 4] = [0, 1, 3, 9];

    fn render_menu(
        composition: &mut Composition,
        args: &ChipGroupArgs,
        expanded: &State<bool>,
    ) -> RenderTree {
        let args = args.clone();
        let expanded = expanded.clone();
        composition.render(move || overflow_menu_chip_group(args, expanded))
    }

    fn render_reflow(
        composition: &mut Composition,
        args: &ChipGroupArgs,
        expanded: &State<bool>,
    ) -> RenderTree {
        let args = args.clone();
        let expanded = expanded.clone();
        composition.render(move || reflow_chip_group(args, expanded))
    }

    fn phone_layout(tree: &RenderTree) -> LayoutResult {
        tree.layout(Constraint::bounded(Px(360), Px(640)), &LayoutEnv::default())
            .unwrap()
    }

    fn item_chips(tree: &RenderTree) -> usize {
        tree.nodes_named("chip")
            .into_iter()
            .filter(|id| tree.get(*id).unwrap().label() != Some(SHOW_ALL_LABEL))
            .count()
    }

    fn click_show_all(tree: &RenderTree) {
        tree.click(tree.find_clickable(SHOW_ALL_LABEL).unwrap())
            .unwrap();
    }

    #[test]
    fn test_item_labels() {
        let numbered = ChipItem::numbered(3);
        assert_eq!(numbered[2].label, "Chip 2");
        let colors = ChipItem::labeled(&COLOR_NAMES);
        assert_eq!(colors.len(), 10);
        assert_eq!(colors[0].label, "Blue 0");
        assert_eq!(colors[9].label, "Transparent 9");
    }

    #[test]
    fn test_menu_double_toggle_restores_initial_render() {
        for count in ITEM_COUNTS {
            let args = ChipGroupArgs::default().items(ChipItem::numbered(count));
            let expanded = State::new(false);
            let mut composition = Composition::new();

            let initial = render_menu(&mut composition, &args, &expanded);
            assert!(initial.nodes_named("dropdown_menu").is_empty());

            click_show_all(&initial);
            let opened = render_menu(&mut composition, &args, &expanded);
            assert!(expanded.get());
            assert_eq!(opened.nodes_named("dropdown_menu").len(), 1);
            assert_eq!(opened.nodes_named("dropdown_menu_item").len(), count);
            // The row is kept while the menu is open.
            assert_eq!(item_chips(&opened), count);

            click_show_all(&opened);
            let closed = render_menu(&mut composition, &args, &expanded);
            assert!(!expanded.get());
            assert_eq!(closed.to_string(), initial.to_string());
        }
    }

    #[test]
    fn test_menu_row_activation_always_collapses() {
        let items = ChipItem::numbered(9);
        for target in 0..items.len() {
            let args = ChipGroupArgs::default().items(items.clone());
            let expanded = State::new(true);
            let mut composition = Composition::new();
            let tree = render_menu(&mut composition, &args, &expanded);

            let menu = tree.nodes_named("dropdown_menu")[0];
            let rows = tree.nodes_named_under(menu, "dropdown_menu_item");
            tree.click(rows[target]).unwrap();
            assert!(!expanded.get());

            let tree = render_menu(&mut composition, &args, &expanded);
            assert!(tree.nodes_named("dropdown_menu").is_empty());
        }
    }

    #[test]
    fn test_menu_dismiss_collapses() {
        let args = ChipGroupArgs::default().items(ChipItem::numbered(2));
        let expanded = State::new(true);
        let mut composition = Composition::new();
        let tree = render_menu(&mut composition, &args, &expanded);
        tree.dismiss(tree.nodes_named("dropdown_menu")[0]).unwrap();
        assert!(!expanded.get());
    }

    #[test]
    fn test_item_callbacks_fire_once_per_activation() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let args = ChipGroupArgs::default()
            .items(ChipItem::numbered(4))
            .on_item_click(move |index| sink.lock().unwrap().push(index));
        let expanded = State::new(true);
        let mut composition = Composition::new();
        let tree = render_menu(&mut composition, &args, &expanded);

        let menu = tree.nodes_named("dropdown_menu")[0];
        tree.click(tree.nodes_named_under(menu, "dropdown_menu_item")[2])
            .unwrap();
        let row_chip = tree
            .nodes_named("chip")
            .into_iter()
            .find(|id| tree.get(*id).unwrap().label() == Some("Chip 1"))
            .unwrap();
        tree.click(row_chip).unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![2, 1]);
    }

    #[test]
    fn test_menu_is_anchored_below_row() {
        let args = ChipGroupArgs::default().items(ChipItem::numbered(9));
        let expanded = State::new(true);
        let mut composition = Composition::new();
        let tree = render_menu(&mut composition, &args, &expanded);
        let layout = phone_layout(&tree);

        let row = layout.get(tree.nodes_named("row")[0]).unwrap();
        let menu = layout.get(tree.nodes_named("dropdown_menu")[0]).unwrap();
        assert_eq!(row.size.height, Px(32));
        assert_eq!(menu.position.y, row.position.y + row.size.height + Px(4));
        assert_eq!(menu.size.height, Px(320));
        assert!(row.scroll.unwrap().overflows());
    }

    #[test]
    fn test_reflow_double_toggle_is_idempotent() {
        for count in ITEM_COUNTS {
            let args = ChipGroupArgs::default().items(ChipItem::numbered(count));
            let expanded = State::new(false);
            let mut composition = Composition::new();

            let initial = render_reflow(&mut composition, &args, &expanded);
            click_show_all(&initial);
            let expanded_tree = render_reflow(&mut composition, &args, &expanded);
            let toggle = expanded_tree.find_clickable(SHOW_ALL_LABEL).unwrap();
            assert_eq!(
                expanded_tree.get(toggle).unwrap().semantics.selected,
                Some(true)
            );
            assert_eq!(
                expanded_tree
                    .get(expanded_tree.nodes_named("flow_row")[0])
                    .unwrap()
                    .attribute("max_lines"),
                Some("unbounded")
            );

            click_show_all(&expanded_tree);
            let restored = render_reflow(&mut composition, &args, &expanded);
            assert_eq!(restored.to_string(), initial.to_string());
        }
    }

    #[test]
    fn test_reflow_collapsed_is_single_line() {
        for count in [0, 3, 10, 40] {
            let names: Vec<String> = (0..count).map(|i| format!("Item {i}")).collect();
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            let args = ChipGroupArgs::default().items(ChipItem::labeled(&names));
            let expanded = State::new(false);
            let mut composition = Composition::new();
            let tree = render_reflow(&mut composition, &args, &expanded);
            let layout = phone_layout(&tree);

            let chips = tree.nodes_named("chip");
            assert_eq!(chips.len(), count + 1);
            for id in chips {
                let chip_layout = layout.get(id).unwrap();
                assert_eq!(chip_layout.position.y, Px(0));
            }
            let flow = layout.get(tree.nodes_named("flow_row")[0]).unwrap();
            assert_eq!(flow.size.width, Px(360));
            assert_eq!(flow.size.height, Px(32));
        }
    }

    #[test]
    fn test_reflow_expanded_wraps_and_fills_width() {
        let args = ChipGroupArgs::default().items(ChipItem::labeled(&COLOR_NAMES));
        let expanded = State::new(true);
        let mut composition = Composition::new();
        let tree = render_reflow(&mut composition, &args, &expanded);
        let layout = phone_layout(&tree);

        let mut rows: Vec<Px> = tree
            .nodes_named("chip")
            .into_iter()
            .map(|id| layout.get(id).unwrap().position.y)
            .collect();
        rows.dedup();
        assert!(rows.len() > 1);

        let flow = layout.get(tree.nodes_named("flow_row")[0]).unwrap();
        assert_eq!(flow.size.width, Px(360));
        assert_eq!(
            flow.scroll.unwrap().axis,
            chip_catalog_ui::ScrollAxis::Vertical
        );
    }

    #[test]
    fn test_reflow_keeps_chip_labels_whole_on_narrow_screens() {
        let args = ChipGroupArgs::default().items(ChipItem::labeled(&COLOR_NAMES));
        let expanded = State::new(true);
        let mut composition = Composition::new();
        let tree = render_reflow(&mut composition, &args, &expanded);
        let layout = tree
            .layout(Constraint::bounded(Px(60), Px(640)), &LayoutEnv::default())
            .unwrap();

        for id in tree.nodes_named("chip") {
            let label = tree.get(id).unwrap().label().unwrap().to_string();
            let text = tree.nodes_named_under(id, "text")[0];
            let text_width = layout.get(text).unwrap().size.width;
            assert_eq!(text_width, Px(7 * label.len() as i32), "{label}");
            assert!(layout.get(id).unwrap().size.width >= text_width + Px(16));
        }
    }

    #[test]
    fn test_empty_groups_render_only_fixed_controls() {
        let args = ChipGroupArgs::default();
        let mut composition = Composition::new();
        let menu_tree = render_menu(&mut composition, &args, &State::new(false));
        assert_eq!(menu_tree.nodes_named("chip").len(), 1);
        assert_eq!(item_chips(&menu_tree), 0);

        let mut composition = Composition::new();
        let reflow_tree = render_reflow(&mut composition, &args, &State::new(false));
        assert_eq!(reflow_tree.nodes_named("chip").len(), 1);
        assert_eq!(reflow_tree.nodes_named("vertical_divider").len(), 1);
        assert_eq!(item_chips(&reflow_tree), 0);
        let layout = phone_layout(&reflow_tree);
        let flow = layout.get(reflow_tree.nodes_named("flow_row")[0]).unwrap();
        assert_eq!(flow.size.height, Px(32));
    }

    #[test]
    fn test_divider_is_boxed_to_chip_height() {
        let args = ChipGroupArgs::default().items(ChipItem::numbered(2));
        let mut composition = Composition::new();
        let tree = render_reflow(&mut composition, &args, &State::new(false));
        let layout = phone_layout(&tree);
        let divider_id = tree.nodes_named("vertical_divider")[0];
        assert_eq!(tree.get(divider_id).unwrap().semantics.role, Role::Separator);
        assert_eq!(layout.get(divider_id).unwrap().size.height, Px(32));
    }

    #[test]
    fn test_item_chip_fires_once_per_click() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = clicks.clone();
        let args = ChipGroupArgs::default()
            .items(ChipItem::numbered(1))
            .on_item_click(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        let mut composition = Composition::new();
        let tree = render_reflow(&mut composition, &args, &State::new(false));
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
        tree.click(tree.find_clickable("Chip 0").unwrap()).unwrap();
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }
}
