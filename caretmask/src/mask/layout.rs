//! Display layout: rendering and raw/display offset mapping.
//!
//! One traversal produces everything derived from a raw value: the display
//! string and both offset tables. The traversal emits a sequence of cells,
//! each either backed by a raw character or a separator inserted by the
//! policy; every derived artifact falls out of that cell sequence, so the
//! formatter and the offset mapper can never disagree about where separators
//! sit.

use super::raw::{IdentifierParts, RawValue};
use crate::policy::{MaskPolicy, SeparatorAffinity};

/// One rendered character: either a raw character or an inserted separator.
enum Cell {
    Raw(char),
    Separator(char),
}

/// Bidirectional cursor mapping between raw and display coordinates.
///
/// Both functions are total, non-decreasing step functions, clamped to their
/// domain. A display index that falls exactly on a separator maps to the raw
/// index of the character immediately following it: separators belong to the
/// character after them.
///
/// For every raw value whose characters all render, the mapping round-trips:
/// `display_to_raw(raw_to_display(i)) == i` for every `i` in `[0, raw_len]`.
/// The one exception is the degenerate empty-body identifier, which renders
/// nothing at all and therefore collapses every raw index onto display
/// index 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OffsetMap {
    /// `raw_to_display[i]` = display position of a caret after `i` raw chars.
    raw_to_display: Vec<usize>,
    /// `display_to_raw[d]` = number of raw-backed cells before display
    /// position `d`.
    display_to_raw: Vec<usize>,
}

impl OffsetMap {
    /// Maps a caret in raw coordinates to display coordinates.
    ///
    /// Indices past the end of the raw value clamp to `raw_len`.
    #[must_use]
    pub fn raw_to_display(&self, raw_index: usize) -> usize {
        self.raw_to_display[raw_index.min(self.raw_len())]
    }

    /// Maps a caret in display coordinates to raw coordinates.
    ///
    /// Indices past the end of the display value clamp to `display_len`.
    #[must_use]
    pub fn display_to_raw(&self, display_index: usize) -> usize {
        self.display_to_raw[display_index.min(self.display_len())]
    }

    /// Length of the raw value this map was built from.
    #[must_use]
    pub fn raw_len(&self) -> usize {
        self.raw_to_display.len() - 1
    }

    /// Length of the rendered display value.
    #[must_use]
    pub fn display_len(&self) -> usize {
        self.display_to_raw.len() - 1
    }
}

/// A rendered raw value together with its offset map.
///
/// Pure, ephemeral derivation: recomputed from scratch on every edit, never
/// mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayLayout {
    display: String,
    offsets: OffsetMap,
}

impl DisplayLayout {
    /// Renders `raw` through `policy` and builds the offset tables.
    ///
    /// Degenerate rule for [`MaskPolicy::CheckedIdentifier`], preserved for
    /// compatibility with the behavior being modeled: when the body is empty
    /// the display is the empty string, even if a hyphen or check character
    /// was typed. A lone hyphen before any digit is not shown.
    #[must_use]
    pub fn compute(policy: &MaskPolicy, raw: &RawValue) -> Self {
        let cells = cells_for(policy, raw);
        let affinity = policy.affinity();

        let mut display = String::with_capacity(cells.len());
        let mut raw_to_display = vec![0usize; raw.len() + 1];
        let mut display_to_raw = Vec::with_capacity(cells.len() + 1);
        display_to_raw.push(0);

        let mut raw_seen = 0;
        for cell in &cells {
            match cell {
                Cell::Raw(ch) => {
                    display.push(*ch);
                    raw_seen += 1;
                    raw_to_display[raw_seen] = display.len();
                    display_to_raw.push(raw_seen);
                }
                Cell::Separator(ch) => {
                    display.push(*ch);
                    if affinity == SeparatorAffinity::After {
                        raw_to_display[raw_seen] = display.len();
                    }
                    display_to_raw.push(raw_seen);
                }
            }
        }
        // Raw characters that rendered nothing (the degenerate identifier)
        // leave their table entries at zero, collapsing onto the empty
        // display.

        Self {
            display,
            offsets: OffsetMap {
                raw_to_display,
                display_to_raw,
            },
        }
    }

    /// The rendered, separator-decorated string.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The offset map for this rendering.
    #[must_use]
    pub fn offsets(&self) -> &OffsetMap {
        &self.offsets
    }

    /// Splits the layout into display string and offset map.
    #[must_use]
    pub fn into_parts(self) -> (String, OffsetMap) {
        (self.display, self.offsets)
    }
}

/// Renders `raw` through `policy`, discarding the offset map.
#[must_use]
pub fn render(policy: &MaskPolicy, raw: &RawValue) -> String {
    DisplayLayout::compute(policy, raw).display
}

fn cells_for(policy: &MaskPolicy, raw: &RawValue) -> Vec<Cell> {
    match policy {
        MaskPolicy::GroupedDigits(_) | MaskPolicy::SplitDate => {
            digit_cells(policy, raw.as_str())
        }
        MaskPolicy::CheckedIdentifier => {
            let parts = IdentifierParts::parse(raw.as_str());
            if parts.body().is_empty() {
                return Vec::new();
            }
            let mut cells = digit_cells(policy, parts.body());
            if parts.has_hyphen() {
                cells.push(Cell::Raw('-'));
            } else if parts.check_char().is_some() {
                // The hyphen was never typed; render it as a separator owned
                // by the check character that follows.
                cells.push(Cell::Separator('-'));
            }
            if let Some(check) = parts.check_char() {
                cells.push(Cell::Raw(check));
            }
            cells
        }
    }
}

/// Emits a digit run with the policy's group separators interleaved.
fn digit_cells(policy: &MaskPolicy, digits: &str) -> Vec<Cell> {
    let boundaries = policy.group_boundaries(digits.len());
    let separator = policy.separator();
    let mut cells = Vec::with_capacity(digits.len() + boundaries.len());
    for (index, ch) in digits.chars().enumerate() {
        if boundaries.contains(&index) {
            cells.push(Cell::Separator(separator));
        }
        cells.push(Cell::Raw(ch));
    }
    cells
}
