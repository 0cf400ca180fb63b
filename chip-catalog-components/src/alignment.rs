//! Alignment options shared by layout components.

use chip_catalog_ui::Px;

/// Distribution of children along a layout's main axis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MainAxisAlignment {
    /// Pack children at the start.
    #[default]
    Start,
    /// Center children.
    Center,
    /// Pack children at the end.
    End,
    /// Put the free space between children.
    SpaceBetween,
}

impl MainAxisAlignment {
    /// Returns the leading offset and the extra gap inserted between
    /// consecutive children.
    pub(crate) fn distribute(self, free: Px, count: usize) -> (Px, Px) {
        let free = free.max(Px::ZERO);
        match self {
            MainAxisAlignment::Start => (Px::ZERO, Px::ZERO),
            MainAxisAlignment::Center => (Px(free.0 / 2), Px::ZERO),
            MainAxisAlignment::End => (free, Px::ZERO),
            MainAxisAlignment::SpaceBetween => {
                if count > 1 {
                    let gaps = i32::try_from(count - 1).unwrap_or(i32::MAX);
                    (Px::ZERO, Px(free.0 / gaps))
                } else {
                    (Px::ZERO, Px::ZERO)
                }
            }
        }
    }
}

/// Placement of children across a layout's main axis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CrossAxisAlignment {
    /// Align to the start edge.
    #[default]
    Start,
    /// Center within the line.
    Center,
    /// Align to the end edge.
    End,
}

impl CrossAxisAlignment {
    /// Offset of a child of size `child` inside `available`.
    pub(crate) fn offset(self, available: Px, child: Px) -> Px {
        let free = (available - child).max(Px::ZERO);
        match self {
            CrossAxisAlignment::Start => Px::ZERO,
            CrossAxisAlignment::Center => Px(free.0 / 2),
            CrossAxisAlignment::End => free,
        }
    }
}

/// Two-dimensional alignment for box-like containers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Top-left.
    #[default]
    TopStart,
    /// Top edge, horizontally centered.
    TopCenter,
    /// Vertically centered on the start edge.
    CenterStart,
    /// Centered on both axes.
    Center,
    /// Vertically centered on the end edge.
    CenterEnd,
    /// Bottom edge, horizontally centered.
    BottomCenter,
}

impl Alignment {
    pub(crate) fn split(self) -> (CrossAxisAlignment, CrossAxisAlignment) {
        use CrossAxisAlignment::{Center, End, Start};
        match self {
            Alignment::TopStart => (Start, Start),
            Alignment::TopCenter => (Center, Start),
            Alignment::CenterStart => (Start, Center),
            Alignment::Center => (Center, Center),
            Alignment::CenterEnd => (End, Center),
            Alignment::BottomCenter => (Center, End),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribute() {
        assert_eq!(
            MainAxisAlignment::Center.distribute(Px(10), 3),
            (Px(5), Px(0))
        );
        assert_eq!(
            MainAxisAlignment::SpaceBetween.distribute(Px(10), 3),
            (Px(0), Px(5))
        );
        assert_eq!(
            MainAxisAlignment::End.distribute(Px(-4), 1),
            (Px(0), Px(0))
        );
    }

    #[test]
    fn test_cross_offset() {
        assert_eq!(CrossAxisAlignment::Center.offset(Px(32), Px(20)), Px(6));
        assert_eq!(CrossAxisAlignment::End.offset(Px(32), Px(20)), Px(12));
        assert_eq!(CrossAxisAlignment::Start.offset(Px(32), Px(40)), Px(0));
    }
}
