//! # Sheave
//!
//! A gesture-to-position engine for draggable, multi-position bottom sheets.
//!
//! A sheet has a fixed set of named [`Anchor`]s (collapsed / half / expanded
//! and so on) and one continuous offset, its *translation*. Sheave owns the
//! hard part of the widget: deciding, frame by frame and at gesture end, how
//! a drag or an inner-content scroll maps onto those anchors. Rendering,
//! layout, and the animation that eases toward a committed anchor stay with
//! the host toolkit.
//!
//! There are four pieces:
//!
//! - [`PositionSet`] — the ordered anchor list, sorted once at construction.
//! - [`arbiter`] — decides per scroll frame whether the gesture moves the
//!   sheet or scrolls the inner content.
//! - [`snap`] — picks the anchor a finished gesture commits to.
//! - [`SheetCoordinator`] — bridges an outer pan gesture and an inner
//!   [`ScrollSurface`] into one state machine and exposes the result as
//!   observable [`Binding`]s.
//!
//! ```rust
//! use sheave::*;
//!
//! let positions = PositionSet::new([
//!     Anchor::new("collapsed", 0.0),
//!     Anchor::new("half", 300.0),
//!     Anchor::new("expanded", 600.0),
//! ])
//! .unwrap();
//!
//! let sheet = SheetCoordinator::new(positions);
//!
//! // Dragging up 50 device points opens the sheet by 50.
//! sheet.handle_pan(PanEvent::Changed { translation: -50.0 });
//! assert_eq!(sheet.translation().get(), 50.0);
//!
//! // A strong upward fling snaps to the next anchor up.
//! sheet.handle_pan(PanEvent::Ended { velocity: -2000.0 });
//! assert_eq!(sheet.position().get().map(|a| a.name), Some("half".into()));
//! ```
//!
//! The `translation` and `position` cells are two-way: the view layer reads
//! them to place the sheet and may also write them (for example to
//! force-close the sheet programmatically); the coordinator keeps the two
//! consistent.
//!
//! Sign conventions follow the device: pan translations and velocities are
//! positive downward, anchor offsets grow upward from the closed state. The
//! coordinator does the flipping.

pub mod anchor;
pub mod arbiter;
pub mod binding;
pub mod coordinator;
pub mod drag;
pub mod error;
pub mod snap;

pub use anchor::*;
pub use arbiter::*;
pub use binding::*;
pub use coordinator::*;
pub use drag::*;
pub use error::*;
pub use snap::*;
