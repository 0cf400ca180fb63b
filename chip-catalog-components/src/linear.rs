//! Single-line layout shared by `row`, `column`, chips and menus.

use chip_catalog_ui::{
    ComputedData, Constraint, DimensionValue, Dp, LayoutOutput, LayoutSpec, MeasureInput,
    MeasurementError, Px, PxPosition,
};

use crate::alignment::{CrossAxisAlignment, MainAxisAlignment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct LinearLayout {
    pub axis: Axis,
    pub main_axis_alignment: MainAxisAlignment,
    pub cross_axis_alignment: CrossAxisAlignment,
    pub spacing: Dp,
}

impl LinearLayout {
    pub fn row(spacing: Dp, cross_axis_alignment: CrossAxisAlignment) -> Self {
        Self {
            axis: Axis::Horizontal,
            main_axis_alignment: MainAxisAlignment::Start,
            cross_axis_alignment,
            spacing,
        }
    }

    pub fn column(spacing: Dp, cross_axis_alignment: CrossAxisAlignment) -> Self {
        Self {
            axis: Axis::Vertical,
            main_axis_alignment: MainAxisAlignment::Start,
            cross_axis_alignment,
            spacing,
        }
    }

    fn split(&self, constraint: &Constraint) -> (DimensionValue, DimensionValue) {
        match self.axis {
            Axis::Horizontal => (constraint.width, constraint.height),
            Axis::Vertical => (constraint.height, constraint.width),
        }
    }

    fn join(&self, main: Px, cross: Px) -> (Px, Px) {
        match self.axis {
            Axis::Horizontal => (main, cross),
            Axis::Vertical => (cross, main),
        }
    }

    fn main_of(&self, size: ComputedData) -> Px {
        match self.axis {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    fn cross_of(&self, size: ComputedData) -> Px {
        match self.axis {
            Axis::Horizontal => size.height,
            Axis::Vertical => size.width,
        }
    }
}

impl LayoutSpec for LinearLayout {
    fn measure(
        &self,
        input: &MeasureInput<'_>,
        output: &mut LayoutOutput,
    ) -> Result<ComputedData, MeasurementError> {
        let (main_dim, cross_dim) = self.split(input.parent_constraint());
        let spacing = input.px(self.spacing).max(Px::ZERO);
        let main_max = main_dim.get_max();
        let cross_max = cross_dim.get_max();

        let mut sizes = Vec::with_capacity(input.children_ids().len());
        let mut used = Px::ZERO;
        for (index, &child) in input.children_ids().iter().enumerate() {
            if index > 0 {
                used += spacing;
            }
            let remaining = main_max.map(|max| max.shrink_by(used));
            let (width, height) = self.join_dims(
                DimensionValue::Wrap {
                    min: None,
                    max: remaining,
                },
                DimensionValue::Wrap {
                    min: None,
                    max: cross_max,
                },
            );
            let size = input.measure_child(child, Constraint::new(width, height))?;
            used += self.main_of(size);
            sizes.push((child, size));
        }

        let content_cross = sizes
            .iter()
            .map(|(_, size)| self.cross_of(*size))
            .max()
            .unwrap_or(Px::ZERO);
        let final_main = main_dim.resolve(used)?;
        let final_cross = cross_dim.resolve(content_cross)?;

        let (mut cursor, extra_gap) = self
            .main_axis_alignment
            .distribute(final_main - used, sizes.len());
        for (child, size) in sizes {
            let cross = self
                .cross_axis_alignment
                .offset(final_cross, self.cross_of(size));
            let (x, y) = self.join(cursor, cross);
            output.place_child(child, PxPosition::new(x, y));
            cursor += self.main_of(size) + spacing + extra_gap;
        }

        let (width, height) = self.join(final_main, final_cross);
        Ok(ComputedData { width, height })
    }
}

impl LinearLayout {
    fn join_dims(
        &self,
        main: DimensionValue,
        cross: DimensionValue,
    ) -> (DimensionValue, DimensionValue) {
        match self.axis {
            Axis::Horizontal => (main, cross),
            Axis::Vertical => (cross, main),
        }
    }
}
