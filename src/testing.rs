//! Recording engine shared by unit tests

use std::cell::RefCell;
use std::rc::Rc;

use crate::geometry::Size;
use crate::input::{KeyEvent, PointerEvent, WheelEvent};
use crate::surface::{BrowserEngine, Snapshot};

/// Everything a [`FakeEngine`] was asked to do
#[derive(Debug, Default)]
pub struct EngineState {
    pub size: Size,
    pub offscreen: bool,
    pub visible: bool,
    pub loads: Vec<String>,
    pub frame: Option<Snapshot>,
    pub grabs: usize,
    pub pointers: Vec<PointerEvent>,
    pub wheels: Vec<WheelEvent>,
    pub keys: Vec<KeyEvent>,
}

pub struct FakeEngine {
    state: Rc<RefCell<EngineState>>,
}

impl FakeEngine {
    pub fn new() -> (Self, Rc<RefCell<EngineState>>) {
        let state = Rc::new(RefCell::new(EngineState::default()));
        (
            Self {
                state: Rc::clone(&state),
            },
            state,
        )
    }
}

impl BrowserEngine for FakeEngine {
    fn load(&mut self, url: &str) {
        self.state.borrow_mut().loads.push(url.to_string());
    }

    fn size(&self) -> Size {
        self.state.borrow().size
    }

    fn resize(&mut self, size: Size) {
        self.state.borrow_mut().size = size;
    }

    fn set_offscreen(&mut self, offscreen: bool) {
        self.state.borrow_mut().offscreen = offscreen;
    }

    fn set_visible(&mut self, visible: bool) {
        self.state.borrow_mut().visible = visible;
    }

    fn grab(&mut self) -> Option<Snapshot> {
        let mut state = self.state.borrow_mut();
        state.grabs += 1;
        state.frame.clone()
    }

    fn send_pointer(&mut self, event: &PointerEvent) {
        self.state.borrow_mut().pointers.push(event.clone());
    }

    fn send_wheel(&mut self, event: &WheelEvent) {
        self.state.borrow_mut().wheels.push(event.clone());
    }

    fn send_key(&mut self, event: &KeyEvent) {
        self.state.borrow_mut().keys.push(event.clone());
    }
}
