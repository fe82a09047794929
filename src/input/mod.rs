//! Input interception and re-dispatch
//!
//! Events arriving at a [`DisplaySurface`](crate::surface::DisplaySurface) are
//! rescaled into browser-surface coordinates and re-synthesized for the
//! offscreen engine, which never receives OS input on its own.

mod events;
mod remap;

pub use events::{
    InputEvent, KeyEvent, KeyKind, Modifiers, MouseButton, MouseButtons, PointerEvent,
    PointerKind, ScrollPhase, WheelEvent, WheelSource,
};
pub use remap::{InputRemapper, map_to_browser};
