//! Preview metadata for every sample.

use serde::Serialize;

use crate::samples::{assist, chip_group, filter, input, suggestion};

/// Errors raised while resolving samples.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// No sample has the requested name.
    #[error("unknown sample `{name}`; run `chip-catalog list` to see the available samples")]
    UnknownSample {
        /// The requested name.
        name: String,
    },
}

/// The family a sample belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleKind {
    /// Assist chips.
    Assist,
    /// Filter chips.
    Filter,
    /// Input chips.
    Input,
    /// Suggestion chips.
    Suggestion,
    /// Groups of chips with an overflow policy.
    ChipGroup,
}

/// Static preview metadata of one sample.
#[derive(Clone, Copy, Serialize)]
pub struct SampleInfo {
    /// Stable identifier used on the command line.
    pub name: &'static str,
    /// Human readable title.
    pub title: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Family of the sample.
    pub kind: SampleKind,
    /// The sample component.
    #[serde(skip)]
    pub content: fn(),
}

impl std::fmt::Debug for SampleInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SampleInfo")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

const SAMPLES: &[SampleInfo] = &[
    SampleInfo {
        name: "assist_chip",
        title: "Assist chip",
        description: "Flat assist chip with a leading settings icon",
        kind: SampleKind::Assist,
        content: assist::assist_chip_sample,
    },
    SampleInfo {
        name: "elevated_assist_chip",
        title: "Elevated assist chip",
        description: "Elevated assist chip with a leading settings icon",
        kind: SampleKind::Assist,
        content: assist::elevated_assist_chip_sample,
    },
    SampleInfo {
        name: "filter_chip",
        title: "Filter chip",
        description: "Filter chip that shows a check mark while selected",
        kind: SampleKind::Filter,
        content: filter::filter_chip_sample,
    },
    SampleInfo {
        name: "elevated_filter_chip",
        title: "Elevated filter chip",
        description: "Elevated filter chip that shows a check mark while selected",
        kind: SampleKind::Filter,
        content: filter::elevated_filter_chip_sample,
    },
    SampleInfo {
        name: "filter_chip_with_leading_icon",
        title: "Filter chip with leading icon",
        description: "Filter chip that swaps a home icon for a check mark",
        kind: SampleKind::Filter,
        content: filter::filter_chip_with_leading_icon_sample,
    },
    SampleInfo {
        name: "input_chip",
        title: "Input chip",
        description: "Selectable input chip",
        kind: SampleKind::Input,
        content: input::input_chip_sample,
    },
    SampleInfo {
        name: "input_chip_with_avatar",
        title: "Input chip with avatar",
        description: "Selectable input chip with a person avatar",
        kind: SampleKind::Input,
        content: input::input_chip_with_avatar_sample,
    },
    SampleInfo {
        name: "suggestion_chip",
        title: "Suggestion chip",
        description: "Flat suggestion chip",
        kind: SampleKind::Suggestion,
        content: suggestion::suggestion_chip_sample,
    },
    SampleInfo {
        name: "elevated_suggestion_chip",
        title: "Elevated suggestion chip",
        description: "Elevated suggestion chip",
        kind: SampleKind::Suggestion,
        content: suggestion::elevated_suggestion_chip_sample,
    },
    SampleInfo {
        name: "chip_group_single_line",
        title: "Chip group with overflow menu",
        description: "Single scrolling line of chips; \"Show All\" opens a menu of every chip",
        kind: SampleKind::ChipGroup,
        content: chip_group::chip_group_single_line_sample,
    },
    SampleInfo {
        name: "chip_group_reflow",
        title: "Chip group with reflow",
        description: "Single line of chips that reflows to multiple lines when \"Show All\" is selected",
        kind: SampleKind::ChipGroup,
        content: chip_group::chip_group_reflow_sample,
    },
];

/// Every sample, in catalog order.
pub fn samples() -> &'static [SampleInfo] {
    SAMPLES
}

/// Looks up a sample by name.
pub fn find_sample(name: &str) -> Result<&'static SampleInfo, CatalogError> {
    SAMPLES
        .iter()
        .find(|sample| sample.name == name)
        .ok_or_else(|| CatalogError::UnknownSample {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chip_catalog_ui::Composition;

    use super::*;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = samples().iter().map(|sample| sample.name).collect();
        assert_eq!(names.len(), samples().len());
    }

    #[test]
    fn test_find_sample() {
        assert_eq!(
            find_sample("chip_group_reflow").unwrap().kind,
            SampleKind::ChipGroup
        );
        assert_eq!(
            find_sample("nope").unwrap_err(),
            CatalogError::UnknownSample {
                name: "nope".to_string()
            }
        );
    }

    #[test]
    fn test_every_sample_renders_a_chip() {
        for sample in samples() {
            let mut composition = Composition::new();
            let tree = composition.render(sample.content);
            assert!(
                !tree.nodes_named("chip").is_empty(),
                "{} rendered no chip",
                sample.name
            );
        }
    }
}
