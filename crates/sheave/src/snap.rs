use crate::anchor::{Anchor, PositionSet};

/// Velocity, in normalized progress per time unit, beyond which a gesture
/// snaps in its own direction instead of to the nearest anchor.
pub const FLING_VELOCITY: f32 = 1.8;

/// Pick the anchor a gesture ending at `translation` with `velocity` should
/// commit to.
///
/// Progress is `translation` normalized over `[bottom, top]` and matched
/// against adjacent anchor pairs as closed-closed intervals. Every progress
/// in `[0, 1]` lands in at least one pair; at an exact interior anchor two
/// pairs match and the *last* one wins. Within the chosen pair:
///
/// - strong velocity (`|velocity| > FLING_VELOCITY`) with the inner surface
///   at rest snaps in the velocity's direction, positive meaning the upper
///   anchor;
/// - otherwise the pair's midpoint decides, with the upper anchor winning an
///   exact tie.
///
/// The caller commits the result by jumping translation to the anchor's
/// exact offset; easing toward it is the host's business.
pub fn resolve<'a>(
    positions: &'a PositionSet,
    translation: f32,
    velocity: f32,
    scroll_at_rest: bool,
) -> &'a Anchor {
    let anchors = positions.anchors();
    if anchors.len() == 1 {
        return &anchors[0];
    }

    let bottom = positions.bottom().offset;
    let span = positions.span();
    let progress = ((translation - bottom) / span).clamp(0.0, 1.0);

    let mut chosen = (0, 0.0, (anchors[1].offset - bottom) / span);
    for (i, pair) in anchors.windows(2).enumerate() {
        let lo = (pair[0].offset - bottom) / span;
        let hi = (pair[1].offset - bottom) / span;
        if progress >= lo && progress <= hi {
            chosen = (i, lo, hi);
        }
    }
    let (lower, lo, hi) = chosen;

    let upward = if velocity.abs() > FLING_VELOCITY && scroll_at_rest {
        velocity > 0.0
    } else {
        progress >= (lo + hi) / 2.0
    };

    if upward {
        &anchors[lower + 1]
    } else {
        &anchors[lower]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions() -> PositionSet {
        PositionSet::new([
            Anchor::new("collapsed", 0.0),
            Anchor::new("half", 300.0),
            Anchor::new("expanded", 600.0),
        ])
        .unwrap()
    }

    #[test]
    fn strong_upward_velocity_snaps_to_upper_anchor() {
        let set = positions();
        // Barely open, but flung hard upward.
        let target = resolve(&set, 50.0, 2.0, true);
        assert_eq!(target.name, "half");
    }

    #[test]
    fn strong_downward_velocity_snaps_to_lower_anchor() {
        let set = positions();
        let target = resolve(&set, 550.0, -2.0, true);
        assert_eq!(target.name, "half");
    }

    #[test]
    fn fling_is_ignored_while_content_still_scrolled() {
        let set = positions();
        // Same fling as above, but the inner surface is not at rest, so the
        // midpoint rule applies instead.
        let target = resolve(&set, 50.0, 2.0, false);
        assert_eq!(target.name, "collapsed");
    }

    #[test]
    fn midpoint_rule_without_velocity() {
        let set = positions();
        assert_eq!(resolve(&set, 100.0, 0.0, true).name, "collapsed");
        assert_eq!(resolve(&set, 200.0, 0.0, true).name, "half");
        assert_eq!(resolve(&set, 400.0, 0.0, true).name, "half");
        assert_eq!(resolve(&set, 500.0, 0.0, true).name, "expanded");
    }

    #[test]
    fn exact_midpoint_goes_to_upper_anchor() {
        let set = positions();
        // 450 is exactly halfway between half and expanded.
        assert_eq!(resolve(&set, 450.0, 0.0, true).name, "expanded");
    }

    #[test]
    fn exact_anchor_resolves_to_itself() {
        // At an interior anchor the closed-closed intervals double-match;
        // the last pair wins and its midpoint rule lands back on the anchor.
        let set = positions();
        assert_eq!(resolve(&set, 300.0, 0.0, true).name, "half");
        assert_eq!(resolve(&set, 0.0, 0.0, true).name, "collapsed");
        assert_eq!(resolve(&set, 600.0, 0.0, true).name, "expanded");
    }

    #[test]
    fn resolving_twice_commits_the_same_anchor() {
        let set = positions();
        let first = resolve(&set, 420.0, 0.4, true).clone();
        let second = resolve(&set, first.offset, 0.4, true);
        assert_eq!(&first, second);
    }

    #[test]
    fn every_progress_resolves_to_some_anchor() {
        let set = positions();
        for i in 0..=600 {
            let t = i as f32;
            let target = resolve(&set, t, 0.0, true);
            assert!(set.anchor_at(target.offset).is_some());
        }
    }

    #[test]
    fn out_of_range_translation_still_resolves() {
        let set = positions();
        assert_eq!(resolve(&set, -80.0, 0.0, true).name, "collapsed");
        assert_eq!(resolve(&set, 900.0, 0.0, true).name, "expanded");
    }

    #[test]
    fn single_anchor_set_resolves_to_it() {
        let set = PositionSet::new([Anchor::new("only", 200.0)]).unwrap();
        assert_eq!(resolve(&set, 0.0, 5.0, true).name, "only");
    }
}
