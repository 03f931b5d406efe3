use crate::anchor::PositionSet;

/// Transient state of one continuous gesture.
///
/// Zeroed at gesture start and again after the gesture commits; nothing in
/// here survives across gestures.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragSession {
    /// Accumulated inner-scroll displacement subtracted from the raw pan
    /// translation, so content the user already scrolled is not counted as
    /// sheet travel a second time.
    pub correction: f32,
    /// Previous frame's corrected pan translation, for delta computation.
    pub last_translation: f32,
    /// Peak positive inner-scroll offset seen while resting at the top
    /// anchor; promoted to `correction` once the drag takes over.
    pub peak_offset: f32,
}

impl DragSession {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Apply one drag delta to the current sheet translation.
///
/// Deltas are in device coordinates (positive = downward), so dragging up
/// increases openness and dragging down decreases it. The result never
/// leaves `[bottom, top]`.
pub fn apply_delta(current: f32, delta: f32, positions: &PositionSet) -> f32 {
    positions.clamp(current - delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::Anchor;

    fn set() -> PositionSet {
        PositionSet::new([Anchor::new("closed", 0.0), Anchor::new("open", 600.0)]).unwrap()
    }

    #[test]
    fn dragging_up_opens_dragging_down_closes() {
        let set = set();
        let opened = apply_delta(100.0, -40.0, &set);
        assert_eq!(opened, 140.0);
        let closed = apply_delta(opened, 90.0, &set);
        assert_eq!(closed, 50.0);
    }

    #[test]
    fn translation_stays_in_range_for_any_delta_sequence() {
        let set = set();
        let deltas = [
            -250.0, -500.0, 30.0, -1.5, 999.0, -999.0, 0.0, 123.4, -0.1, 700.0,
        ];
        let mut t = 0.0;
        for d in deltas {
            t = apply_delta(t, d, &set);
            assert!((0.0..=600.0).contains(&t), "t = {t} after delta {d}");
        }
    }

    #[test]
    fn session_reset_zeroes_everything() {
        let mut session = DragSession {
            correction: 12.0,
            last_translation: -4.0,
            peak_offset: 30.0,
        };
        session.reset();
        assert_eq!(session, DragSession::default());
    }
}
