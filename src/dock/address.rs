//! Single-line address field

/// Text the user is editing plus its hint
#[derive(Debug, Clone, Default)]
pub struct AddressBar {
    text: String,
    placeholder: String,
}

impl AddressBar {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            placeholder: placeholder.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Editable buffer for host text widgets
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
}
