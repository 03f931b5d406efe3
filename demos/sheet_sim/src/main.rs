//! Drives the sheet engine with a scripted gesture and logs every state
//! transition. Run with `RUST_LOG=sheave=trace` to watch the arbiter work.

use std::cell::Cell;
use std::rc::Rc;

use sheave::{Anchor, PanEvent, PositionSet, PositionSetError, ScrollSurface, SheetCoordinator};

/// A pretend scroll view: offset, size, and pan state are plain cells the
/// script pokes between frames.
#[derive(Default)]
struct SimSurface {
    offset: Cell<f32>,
    content_height: Cell<f32>,
    tracking: Cell<bool>,
    pan: Cell<f32>,
}

impl ScrollSurface for SimSurface {
    fn content_offset(&self) -> f32 {
        self.offset.get()
    }
    fn set_content_offset(&self, offset: f32) {
        self.offset.set(offset);
    }
    fn content_height(&self) -> f32 {
        self.content_height.get()
    }
    fn is_tracking(&self) -> bool {
        self.tracking.get()
    }
    fn pan_translation(&self) -> f32 {
        self.pan.get()
    }
}

fn main() -> Result<(), PositionSetError> {
    env_logger::init();

    let positions = PositionSet::new([
        Anchor::new("collapsed", 0.0),
        Anchor::new("half", 300.0),
        Anchor::new("expanded", 600.0),
    ])?;
    let sheet = SheetCoordinator::new(positions);

    sheet
        .translation()
        .subscribe(|t| log::info!("translation = {t}"));
    sheet.position().subscribe(|p| match p {
        Some(anchor) => log::info!("resting at `{}`", anchor.name),
        None => log::info!("between anchors"),
    });

    let surface = Rc::new(SimSurface::default());
    surface.content_height.set(1400.0);
    sheet.attach_scroll_surface(&surface);

    // Drag the header up a bit, then fling: snaps to `half`.
    for _ in 0..5 {
        sheet.handle_pan(PanEvent::Changed { translation: -30.0 });
    }
    sheet.handle_pan(PanEvent::Ended { velocity: -2100.0 });
    println!(
        "after fling: {:?}",
        sheet.position().get().map(|a| a.name)
    );

    // Pull the content upward at `half`: the sheet absorbs the whole drag.
    surface.tracking.set(true);
    for pan in [-60.0, -140.0, -230.0] {
        surface.pan.set(pan);
        surface.offset.set(8.0);
        sheet.scroll_changed();
    }
    let mut target = 0.0;
    sheet.scroll_will_end(0.4, &mut target);
    println!(
        "after pulling content up: {:?}",
        sheet.position().get().map(|a| a.name)
    );

    // Drag down past the content top at `expanded`: the sheet closes.
    for (offset, pan) in [(-40.0, 40.0), (-40.0, 200.0), (-40.0, 380.0)] {
        surface.offset.set(offset);
        surface.pan.set(pan);
        sheet.scroll_changed();
    }
    let mut target = 0.0;
    sheet.scroll_will_end(-2.2, &mut target);
    surface.tracking.set(false);
    println!(
        "after dragging down: {:?} (translation {})",
        sheet.position().get().map(|a| a.name),
        sheet.translation().get()
    );

    Ok(())
}
