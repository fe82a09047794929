//! Input event types delivered to a browser surface
//!
//! These carry the same semantic fields the host reports, so an event can be
//! re-synthesized for the offscreen surface with only its position changed.

use crate::geometry::Point;

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Back,
    Forward,
}

impl MouseButton {
    fn bit(self) -> u8 {
        match self {
            Self::Left => 1 << 0,
            Self::Right => 1 << 1,
            Self::Middle => 1 << 2,
            Self::Back => 1 << 3,
            Self::Forward => 1 << 4,
        }
    }
}

/// Set of buttons held while an event happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct MouseButtons(u8);

impl MouseButtons {
    pub const NONE: MouseButtons = MouseButtons(0);

    pub fn from_bits(bits: u8) -> Self {
        Self(bits & 0x1f)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn insert(&mut self, button: MouseButton) {
        self.0 |= button.bit();
    }

    pub fn remove(&mut self, button: MouseButton) {
        self.0 &= !button.bit();
    }

    pub fn with(mut self, button: MouseButton) -> Self {
        self.insert(button);
        self
    }

    pub fn contains(self, button: MouseButton) -> bool {
        self.0 & button.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Keyboard modifier keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Press,
    Release,
    Move,
}

/// Mouse press, release or move
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    /// Position relative to the receiving surface
    pub position: Point,
    /// Button that changed state; `None` for moves
    pub button: Option<MouseButton>,
    pub buttons: MouseButtons,
    pub modifiers: Modifiers,
}

/// Where a scroll gesture is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollPhase {
    #[default]
    NoPhase,
    Begin,
    Update,
    End,
    Momentum,
}

/// Device class that produced a wheel event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WheelSource {
    #[default]
    Mouse,
    Touchpad,
    Synthesized,
}

/// Scroll wheel or touchpad scroll
#[derive(Debug, Clone, PartialEq)]
pub struct WheelEvent {
    /// Position relative to the receiving surface
    pub position: Point,
    /// Position in screen space; never remapped
    pub global_position: Point,
    /// High-resolution delta in pixels, zero when the device has none
    pub pixel_delta: Point,
    /// Wheel rotation in eighths of a degree (120 per notch)
    pub angle_delta: Point,
    pub buttons: MouseButtons,
    pub modifiers: Modifiers,
    pub phase: ScrollPhase,
    /// Natural-scrolling flag reported by the device
    pub inverted: bool,
    pub source: WheelSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Press,
    Release,
}

/// Key press or release
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    pub kind: KeyKind,
    pub key_code: u32,
    pub modifiers: Modifiers,
    pub native_scan_code: u32,
    pub native_virtual_key: u32,
    pub native_modifiers: u32,
    /// Text produced by the key, empty for non-printing keys
    pub text: String,
    pub auto_repeat: bool,
    pub repeat_count: u16,
}

impl KeyEvent {
    /// A plain press or release with no native details
    pub fn new(kind: KeyKind, key_code: u32, modifiers: Modifiers) -> Self {
        Self {
            kind,
            key_code,
            modifiers,
            native_scan_code: 0,
            native_virtual_key: 0,
            native_modifiers: 0,
            text: String::new(),
            auto_repeat: false,
            repeat_count: 1,
        }
    }
}

/// Any input event the display surface intercepts
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Wheel(WheelEvent),
    Key(KeyEvent),
}
