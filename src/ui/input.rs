//! Translation of egui input into browser input events

use egui::{Event, InputState, MouseWheelUnit, PointerButton, Pos2, Rect};

use crate::geometry::Point;
use crate::input::{
    InputEvent, KeyEvent, KeyKind, Modifiers, MouseButton, MouseButtons, PointerEvent,
    PointerKind, ScrollPhase, WheelEvent, WheelSource,
};

/// Qt-style wheel rotation for one notch
const ANGLE_PER_LINE: f32 = 120.0;

const POINTER_BUTTONS: [PointerButton; 5] = [
    PointerButton::Primary,
    PointerButton::Secondary,
    PointerButton::Middle,
    PointerButton::Extra1,
    PointerButton::Extra2,
];

/// Where the browser view sits and what it may receive this frame
#[derive(Debug, Clone, Copy)]
pub struct ViewContext {
    pub rect: Rect,
    pub hover_pos: Option<Pos2>,
    pub held: MouseButtons,
    /// A press started on the view and has not been released
    pub captured: bool,
    /// The view has keyboard focus
    pub keyboard: bool,
}

impl ViewContext {
    pub fn new(input: &InputState, rect: Rect, captured: bool, keyboard: bool) -> Self {
        let mut held = MouseButtons::NONE;
        for button in POINTER_BUTTONS {
            if input.pointer.button_down(button) {
                held.insert(mouse_button(button));
            }
        }

        Self {
            rect,
            hover_pos: input.pointer.hover_pos(),
            held,
            captured,
            keyboard,
        }
    }

    fn accepts_pointer(&self, pos: Pos2) -> bool {
        self.captured || self.rect.contains(pos)
    }

    fn local(&self, pos: Pos2) -> Point {
        Point::new(pos.x - self.rect.min.x, pos.y - self.rect.min.y)
    }
}

pub fn mouse_button(button: PointerButton) -> MouseButton {
    match button {
        PointerButton::Primary => MouseButton::Left,
        PointerButton::Secondary => MouseButton::Right,
        PointerButton::Middle => MouseButton::Middle,
        PointerButton::Extra1 => MouseButton::Back,
        PointerButton::Extra2 => MouseButton::Forward,
    }
}

pub fn modifiers(m: egui::Modifiers) -> Modifiers {
    Modifiers {
        ctrl: m.ctrl,
        alt: m.alt,
        shift: m.shift,
        meta: m.mac_cmd,
    }
}

/// Events from one frame that belong to the view described by `view`.
///
/// Text input is folded into the key press that produced it.
pub fn translate(events: &[Event], view: &ViewContext) -> Vec<InputEvent> {
    let mut out: Vec<InputEvent> = Vec::new();

    for event in events {
        match event {
            // No hover tracking: moves count only while a press on the view is held
            Event::PointerMoved(pos) if view.captured => {
                out.push(InputEvent::Pointer(PointerEvent {
                    kind: PointerKind::Move,
                    position: view.local(*pos),
                    button: None,
                    buttons: view.held,
                    modifiers: Modifiers::default(),
                }));
            }
            Event::PointerButton {
                pos,
                button,
                pressed,
                modifiers: mods,
                ..
            } if view.accepts_pointer(*pos) => {
                let button = mouse_button(*button);
                let mut buttons = view.held;
                let kind = if *pressed {
                    buttons.insert(button);
                    PointerKind::Press
                } else {
                    buttons.remove(button);
                    PointerKind::Release
                };

                out.push(InputEvent::Pointer(PointerEvent {
                    kind,
                    position: view.local(*pos),
                    button: Some(button),
                    buttons,
                    modifiers: modifiers(*mods),
                }));
            }
            Event::MouseWheel {
                unit,
                delta,
                modifiers: mods,
                ..
            } => {
                let Some(pos) = view.hover_pos.filter(|p| view.rect.contains(*p)) else {
                    continue;
                };
                let delta = Point::new(delta.x, delta.y);
                let (pixel_delta, angle_delta, source) = match unit {
                    MouseWheelUnit::Point => (delta, Point::ORIGIN, WheelSource::Touchpad),
                    MouseWheelUnit::Line | MouseWheelUnit::Page => (
                        Point::ORIGIN,
                        Point::new(delta.x * ANGLE_PER_LINE, delta.y * ANGLE_PER_LINE),
                        WheelSource::Mouse,
                    ),
                };

                out.push(InputEvent::Wheel(WheelEvent {
                    position: view.local(pos),
                    global_position: Point::new(pos.x, pos.y),
                    pixel_delta,
                    angle_delta,
                    buttons: view.held,
                    modifiers: modifiers(*mods),
                    phase: ScrollPhase::NoPhase,
                    inverted: false,
                    source,
                }));
            }
            Event::Key {
                key,
                pressed,
                repeat,
                modifiers: mods,
                ..
            } if view.keyboard => {
                let kind = if *pressed {
                    KeyKind::Press
                } else {
                    KeyKind::Release
                };
                let mut key_event = KeyEvent::new(kind, *key as u32, modifiers(*mods));
                key_event.auto_repeat = *repeat;
                out.push(InputEvent::Key(key_event));
            }
            Event::Text(text) if view.keyboard => match out.last_mut() {
                Some(InputEvent::Key(last)) if last.kind == KeyKind::Press && last.text.is_empty() => {
                    last.text = text.clone();
                }
                _ => {
                    let mut key_event = KeyEvent::new(KeyKind::Press, 0, Modifiers::default());
                    key_event.text = text.clone();
                    out.push(InputEvent::Key(key_event));
                }
            },
            _ => {}
        }
    }

    out
}
