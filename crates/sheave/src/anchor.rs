use smallvec::SmallVec;

use crate::error::PositionSetError;

/// A named discrete sheet position.
///
/// Offsets are measured upward from the closed/bottom state, in the same
/// unit space as gesture translations (device points). Anchors are immutable
/// once part of a [`PositionSet`].
#[derive(Clone, Debug, PartialEq)]
pub struct Anchor {
    pub name: String,
    pub offset: f32,
}

impl Anchor {
    pub fn new(name: impl Into<String>, offset: f32) -> Self {
        Self {
            name: name.into(),
            offset,
        }
    }
}

/// Ordered set of anchors, sorted ascending by offset once at construction.
///
/// `bottom` is the smallest offset (sheet closed), `top` the largest (fully
/// open). The set is never empty and offsets are pairwise distinct; both are
/// enforced by [`PositionSet::new`].
#[derive(Clone, Debug)]
pub struct PositionSet {
    anchors: SmallVec<[Anchor; 4]>,
}

impl PositionSet {
    pub fn new(anchors: impl IntoIterator<Item = Anchor>) -> Result<Self, PositionSetError> {
        let mut anchors: SmallVec<[Anchor; 4]> = anchors.into_iter().collect();
        if anchors.is_empty() {
            return Err(PositionSetError::Empty);
        }
        for anchor in &anchors {
            // NaN would also slip past the duplicate check below.
            if !anchor.offset.is_finite() {
                return Err(PositionSetError::NonFiniteOffset {
                    name: anchor.name.clone(),
                    offset: anchor.offset,
                });
            }
        }
        anchors.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        for pair in anchors.windows(2) {
            if pair[0].offset == pair[1].offset {
                return Err(PositionSetError::DuplicateOffset {
                    first: pair[0].name.clone(),
                    second: pair[1].name.clone(),
                    offset: pair[0].offset,
                });
            }
        }
        Ok(Self { anchors })
    }

    /// All anchors, ascending by offset.
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn bottom(&self) -> &Anchor {
        &self.anchors[0]
    }

    pub fn top(&self) -> &Anchor {
        &self.anchors[self.anchors.len() - 1]
    }

    /// Distance between the top and bottom anchors. Hosts size the sheet's
    /// container to `top().offset`; content taller than the span is what
    /// makes inner scrolling worth arbitrating at all.
    pub fn span(&self) -> f32 {
        self.top().offset - self.bottom().offset
    }

    /// The anchor whose offset exactly equals `offset`, if any. A miss is
    /// the normal mid-drag state, not an error.
    pub fn anchor_at(&self, offset: f32) -> Option<&Anchor> {
        self.anchors.iter().find(|a| a.offset == offset)
    }

    /// Clamp a translation into `[bottom, top]`.
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.bottom().offset, self.top().offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_ascending_by_offset() {
        let set = PositionSet::new([
            Anchor::new("expanded", 600.0),
            Anchor::new("collapsed", 0.0),
            Anchor::new("half", 300.0),
        ])
        .unwrap();

        let names: Vec<&str> = set.anchors().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["collapsed", "half", "expanded"]);
        assert_eq!(set.bottom().offset, 0.0);
        assert_eq!(set.top().offset, 600.0);
        assert_eq!(set.span(), 600.0);
    }

    #[test]
    fn single_anchor_is_valid() {
        let set = PositionSet::new([Anchor::new("only", 120.0)]).unwrap();
        assert_eq!(set.bottom(), set.top());
        assert_eq!(set.span(), 0.0);
    }

    #[test]
    fn empty_set_is_rejected() {
        assert!(matches!(PositionSet::new([]), Err(PositionSetError::Empty)));
    }

    #[test]
    fn duplicate_offsets_are_rejected() {
        let err = PositionSet::new([Anchor::new("a", 10.0), Anchor::new("b", 10.0)]).unwrap_err();
        assert!(matches!(err, PositionSetError::DuplicateOffset { .. }));
    }

    #[test]
    fn non_finite_offsets_are_rejected() {
        let err = PositionSet::new([Anchor::new("a", f32::NAN), Anchor::new("b", f32::NAN)])
            .unwrap_err();
        assert!(matches!(err, PositionSetError::NonFiniteOffset { .. }));

        let err = PositionSet::new([Anchor::new("a", 0.0), Anchor::new("b", f32::INFINITY)])
            .unwrap_err();
        assert!(matches!(err, PositionSetError::NonFiniteOffset { .. }));
    }

    #[test]
    fn anchor_at_is_exact_match_only() {
        let set =
            PositionSet::new([Anchor::new("closed", 0.0), Anchor::new("open", 400.0)]).unwrap();
        assert_eq!(set.anchor_at(400.0).map(|a| a.name.as_str()), Some("open"));
        assert_eq!(set.anchor_at(399.9), None);
    }

    #[test]
    fn clamp_stays_between_bottom_and_top() {
        let set =
            PositionSet::new([Anchor::new("closed", 50.0), Anchor::new("open", 500.0)]).unwrap();
        assert_eq!(set.clamp(-10.0), 50.0);
        assert_eq!(set.clamp(250.0), 250.0);
        assert_eq!(set.clamp(900.0), 500.0);
    }
}
