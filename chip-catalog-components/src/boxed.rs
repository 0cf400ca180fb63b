//! A container that stacks its children on top of each other.
//!
//! ## Usage
//!
//! Give a child a fixed frame and align it inside, e.g. a divider boxed to
//! the height of a chip.

use chip_catalog_ui::{
    ComputedData, LayoutOutput, LayoutSpec, MeasureInput, MeasurementError, Modifier, NodeSpec,
    Px, PxPosition, emit,
};
use derive_setters::Setters;

use crate::alignment::Alignment;

/// Arguments for the [`boxed`] component.
#[derive(Clone, Debug, Default, Setters)]
pub struct BoxedArgs {
    /// The alignment of children within the container.
    pub alignment: Alignment,
    /// Modifier chain applied to the container.
    pub modifier: Modifier,
}

/// A scope for declaratively adding children to a [`boxed`] container.
pub struct BoxedScope<'a> {
    children: &'a mut Vec<Box<dyn FnOnce()>>,
}

impl BoxedScope<'_> {
    /// Adds a child component to the container.
    pub fn child<F>(&mut self, child: F)
    where
        F: FnOnce() + 'static,
    {
        self.children.push(Box::new(child));
    }
}

struct BoxLayout {
    alignment: Alignment,
}

impl LayoutSpec for BoxLayout {
    fn measure(
        &self,
        input: &MeasureInput<'_>,
        output: &mut LayoutOutput,
    ) -> Result<ComputedData, MeasurementError> {
        let constraint = *input.parent_constraint();
        let mut sizes = Vec::with_capacity(input.children_ids().len());
        let mut content_width = Px::ZERO;
        let mut content_height = Px::ZERO;
        for &child in input.children_ids() {
            let size = input.measure_child(child, constraint.loosen())?;
            content_width = content_width.max(size.width);
            content_height = content_height.max(size.height);
            sizes.push((child, size));
        }

        let width = constraint.width.resolve(content_width)?;
        let height = constraint.height.resolve(content_height)?;
        let (horizontal, vertical) = self.alignment.split();
        for (child, size) in sizes {
            output.place_child(
                child,
                PxPosition::new(
                    horizontal.offset(width, size.width),
                    vertical.offset(height, size.height),
                ),
            );
        }
        Ok(ComputedData { width, height })
    }
}

/// # boxed
///
/// Overlays its children within one frame and aligns each of them.
pub fn boxed<F>(args: BoxedArgs, scope_config: F)
where
    F: FnOnce(&mut BoxedScope),
{
    let mut children = Vec::new();
    scope_config(&mut BoxedScope {
        children: &mut children,
    });

    emit(
        NodeSpec::new(
            "boxed",
            BoxLayout {
                alignment: args.alignment,
            },
        )
        .modifier(args.modifier),
        || {
            for child in children {
                child();
            }
        },
    );
}
