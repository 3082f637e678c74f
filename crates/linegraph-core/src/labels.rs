// File: crates/linegraph-core/src/labels.rs
// Summary: Tick label layout: evenly spaced pixel positions along an axis span.

use tracing::trace;

use crate::axis::{AxisKind, AxisLabelSet, Label};
use crate::error::Result;

/// Pixel distance between neighbouring slots. `count` must be at least 2.
fn spacing(count: usize, span: u32) -> f64 {
    span as f64 / (count - 1) as f64
}

#[inline]
fn slot_position(index: usize, spacing: f64) -> u32 {
    (index as f64 * spacing).round() as u32
}

/// Positions of every slot along a span, blanks included. Used for gridlines.
pub fn tick_positions(set: &AxisLabelSet, span: u32) -> Result<impl Iterator<Item = u32>> {
    set.validate()?;
    let count = set.labels.len();
    let spacing = spacing(count, span);
    Ok((0..count).map(move |i| slot_position(i, spacing)))
}

/// Lazily yields `(position, text)` for each label that is drawn.
///
/// Positions are in visual order: left to right for x, top to bottom for y. The y labels
/// are supplied bottom to top, so they are walked in reverse.
pub fn label_positions(set: &AxisLabelSet, kind: AxisKind, span: u32) -> Result<LabelPositions<'_>> {
    set.validate()?;
    let count = set.labels.len();
    // the slot nearest the origin: leftmost on x, bottom-most on y
    let suppressed = set.suppress_origin.then_some(match kind {
        AxisKind::X => 0,
        AxisKind::Y => count - 1,
    });
    trace!(axis = %kind, name = %set.name, count, span, "label layout");
    Ok(LabelPositions { labels: &set.labels, kind, spacing: spacing(count, span), next: 0, suppressed })
}

#[derive(Clone, Debug)]
pub struct LabelPositions<'a> {
    labels: &'a [Label],
    kind: AxisKind,
    spacing: f64,
    next: usize,
    suppressed: Option<usize>,
}

impl<'a> Iterator for LabelPositions<'a> {
    type Item = (u32, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.labels.len();
        while self.next < n {
            let slot = self.next;
            self.next += 1;
            if self.suppressed == Some(slot) {
                continue;
            }
            let label = match self.kind {
                AxisKind::X => &self.labels[slot],
                AxisKind::Y => &self.labels[n - 1 - slot],
            };
            if let Some(text) = label.text() {
                return Some((slot_position(slot, self.spacing), text));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.labels.len() - self.next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_labels_are_evenly_spaced() {
        let set = AxisLabelSet::new("Year", [2008, 2009, 2010, 2011, 2012]);
        let got: Vec<_> = label_positions(&set, AxisKind::X, 700).unwrap().collect();
        assert_eq!(
            got,
            vec![(0, "2008"), (175, "2009"), (350, "2010"), (525, "2011"), (700, "2012")]
        );
    }

    #[test]
    fn y_labels_are_reversed_and_blank_keeps_its_slot() {
        let set = AxisLabelSet::new("Price", [None, Some(5), Some(10), Some(14)]);
        let got: Vec<_> = label_positions(&set, AxisKind::Y, 480).unwrap().collect();
        assert_eq!(got, vec![(0, "14"), (160, "10"), (320, "5")]);
    }

    #[test]
    fn suppression_drops_label_nearest_origin() {
        let x = AxisLabelSet::new("x", ["a", "b", "c"]).with_origin_suppressed(true);
        let got: Vec<_> = label_positions(&x, AxisKind::X, 10).unwrap().collect();
        assert_eq!(got, vec![(5, "b"), (10, "c")]);

        let y = AxisLabelSet::new("y", ["lo", "mid", "hi"]).with_origin_suppressed(true);
        let got: Vec<_> = label_positions(&y, AxisKind::Y, 10).unwrap().collect();
        assert_eq!(got, vec![(0, "hi"), (5, "mid")]);
    }

    #[test]
    fn positions_round_to_nearest() {
        let set = AxisLabelSet::new("t", [None, None, None, Some("x")]);
        let got: Vec<_> = tick_positions(&set, 100).unwrap().collect();
        assert_eq!(got, vec![0, 33, 67, 100]);
    }

    #[test]
    fn too_few_labels_is_an_error() {
        let set = AxisLabelSet::new("Empty", Vec::<Label>::new());
        assert!(label_positions(&set, AxisKind::X, 100).is_err());
    }
}
