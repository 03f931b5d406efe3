use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::anchor::{Anchor, PositionSet};
use crate::arbiter::{self, ScrollDecision, ScrollFrame};
use crate::binding::Binding;
use crate::drag::{self, DragSession};
use crate::snap;

/// Device pan velocities arrive in points per second; the snap resolver
/// thinks in normalized progress per time unit.
const PAN_VELOCITY_SCALE: f32 = 1000.0;

/// Content offset the inner surface is pinned back to while the sheet is
/// being dragged.
const REST_OFFSET: f32 = 0.0;

/// Outer pan gesture notifications, for drags that land on the sheet itself
/// (header, grabber) rather than on the inner scrollable content.
#[derive(Clone, Copy, Debug)]
pub enum PanEvent {
    /// The gesture began or moved; carries this frame's translation delta
    /// in device points, positive downward.
    Changed { translation: f32 },
    /// The gesture ended; carries its velocity in device points per second,
    /// positive downward.
    Ended { velocity: f32 },
}

/// The inner scrollable surface, as the host toolkit exposes it.
///
/// The coordinator holds the surface weakly: it observes and occasionally
/// repositions it, but owns nothing (the host's view hierarchy does).
pub trait ScrollSurface {
    fn content_offset(&self) -> f32;
    fn set_content_offset(&self, offset: f32);
    fn content_height(&self) -> f32;
    /// True while a finger is actively on the surface.
    fn is_tracking(&self) -> bool;
    /// The surface's own pan translation, measured in the sheet's superview
    /// space in device points.
    fn pan_translation(&self) -> f32;
}

/// State machine bridging an outer pan gesture and an inner scrollable
/// surface into one sheet offset.
///
/// The coordinator owns the sheet's [`Binding`]s: `translation`, the
/// continuous offset clamped to the anchor range, and `position`, the
/// anchor the sheet rests at (`None` mid-drag). Both are two-way: the view
/// layer reads them to place the sheet and may write them to open or close
/// it programmatically; the coordinator keeps them consistent either way.
///
/// Events arrive as plain synchronous calls from the host's main thread, in
/// delivery order: any number of [`handle_pan`](Self::handle_pan) /
/// [`scroll_changed`](Self::scroll_changed) frames, then exactly one
/// `Ended` or [`scroll_will_end`](Self::scroll_will_end) closing the
/// gesture and wiping its session state.
pub struct SheetCoordinator {
    positions: PositionSet,
    translation: Binding<f32>,
    position: Binding<Option<Anchor>>,
    session: RefCell<DragSession>,
    surface: RefCell<Option<Weak<dyn ScrollSurface>>>,
}

impl SheetCoordinator {
    /// Build a coordinator resting at the bottom anchor (sheet closed).
    pub fn new(positions: PositionSet) -> Rc<Self> {
        let bottom = positions.bottom().clone();
        let this = Rc::new(Self {
            translation: Binding::new(bottom.offset),
            position: Binding::new(Some(bottom)),
            positions,
            session: RefCell::new(DragSession::default()),
            surface: RefCell::new(None),
        });

        // Keep `translation` clamped and `position` derived from it, and
        // honor external writes to `position` by moving `translation`. The
        // equality guards stop the pair from ping-ponging.
        let weak = Rc::downgrade(&this);
        this.translation.subscribe(move |t| {
            if let Some(c) = weak.upgrade() {
                // Out-of-range writes (external ones included) are clamped,
                // never an error; the re-entrant set re-runs this
                // subscriber with the clamped value.
                let clamped = c.positions.clamp(*t);
                if clamped != *t {
                    c.translation.set(clamped);
                    return;
                }
                let resting = c.positions.anchor_at(*t).cloned();
                if c.position.get() != resting {
                    c.position.set(resting);
                }
            }
        });
        let weak = Rc::downgrade(&this);
        this.position.subscribe(move |p| {
            if let (Some(c), Some(anchor)) = (weak.upgrade(), p.as_ref()) {
                if c.translation.get() != anchor.offset {
                    c.translation.set(anchor.offset);
                }
            }
        });

        this
    }

    pub fn positions(&self) -> &PositionSet {
        &self.positions
    }

    /// The sheet's continuous offset. Readable and writable from outside;
    /// writes are reconciled into `position`.
    pub fn translation(&self) -> Binding<f32> {
        self.translation.clone()
    }

    /// The anchor the sheet rests at, `None` while it is between anchors.
    /// Writing `Some(anchor)` jumps the sheet there.
    pub fn position(&self) -> Binding<Option<Anchor>> {
        self.position.clone()
    }

    /// Attach the inner scrollable surface. Held weakly; detaching is just
    /// dropping the host's `Rc`.
    pub fn attach_scroll_surface(&self, surface: &Rc<impl ScrollSurface + 'static>) {
        let surface: Rc<dyn ScrollSurface> = surface.clone();
        *self.surface.borrow_mut() = Some(Rc::downgrade(&surface));
    }

    fn surface(&self) -> Option<Rc<dyn ScrollSurface>> {
        self.surface.borrow().as_ref()?.upgrade()
    }

    fn set_translation(&self, value: f32) {
        if self.translation.get() != value {
            self.translation.set(value);
        }
    }

    /// Resolve and commit the snap target for a gesture ending with
    /// `velocity` (already in normalized units).
    fn commit(&self, velocity: f32) {
        let at_rest = self
            .surface()
            .map(|s| s.content_offset() == REST_OFFSET)
            .unwrap_or(true);
        let target =
            snap::resolve(&self.positions, self.translation.get(), velocity, at_rest).clone();
        log::debug!(
            "snap: {} -> `{}` (velocity {velocity})",
            self.translation.get(),
            target.name
        );
        self.set_translation(target.offset);
        if self.position.get().as_ref() != Some(&target) {
            self.position.set(Some(target));
        }
    }

    /// Feed one outer pan notification.
    pub fn handle_pan(&self, event: PanEvent) {
        match event {
            PanEvent::Changed { translation } => {
                let next = drag::apply_delta(self.translation.get(), translation, &self.positions);
                self.set_translation(next);
            }
            PanEvent::Ended { velocity } => {
                self.commit(-velocity / PAN_VELOCITY_SCALE);
                self.session.borrow_mut().reset();
            }
        }
    }

    /// The inner surface reported a content-offset change.
    ///
    /// Consults the arbiter; on a drag decision the sheet absorbs the
    /// surface's pan translation (minus the session's correction) and the
    /// content offset is pinned back to rest so the same finger movement
    /// does not also scroll the content.
    pub fn scroll_changed(&self) {
        let Some(surface) = self.surface() else {
            return;
        };
        let frame = ScrollFrame {
            content_offset: surface.content_offset(),
            content_height: surface.content_height(),
            tracking: surface.is_tracking(),
        };
        let current = self.position.get();
        let decision = arbiter::arbitrate(
            &self.positions,
            current.as_ref(),
            &mut self.session.borrow_mut(),
            frame,
        );
        log::trace!("arbiter: {decision:?} at offset {}", frame.content_offset);
        if decision == ScrollDecision::Scroll {
            return;
        }

        let delta = {
            let mut session = self.session.borrow_mut();
            let corrected = surface.pan_translation() - session.correction;
            let delta = corrected - session.last_translation;
            session.last_translation = corrected;
            delta
        };
        let next = drag::apply_delta(self.translation.get(), delta, &self.positions);
        self.set_translation(next);
        surface.set_content_offset(REST_OFFSET);
    }

    /// The inner surface's drag is ending. `target_offset` is the host's
    /// inertial scroll target; unless the sheet rests at the top anchor it
    /// is pinned to rest so deceleration does not fight the sheet. The raw
    /// delegate velocity then picks the snap target and the drag session is
    /// wiped.
    pub fn scroll_will_end(&self, velocity: f32, target_offset: &mut f32) {
        let at_top = self.position.get().map(|a| a.offset) == Some(self.positions.top().offset);
        if !at_top {
            *target_offset = REST_OFFSET;
        }
        self.commit(velocity);
        self.session.borrow_mut().reset();
    }
}
