// A small numeric text box (resolution, brush strength).
// The field only edits text; the controller decides on commit whether the
// text is accepted or the field is reverted.

pub const MAX_FIELD_CHARS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Resolution,
    BrushStrength,
}

impl FieldId {
    /// Where Tab moves focus; the last field hands it to the page.
    pub fn next(self) -> Option<FieldId> {
        match self {
            FieldId::Resolution => Some(FieldId::BrushStrength),
            FieldId::BrushStrength => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumericField {
    text: String,
    focused: bool,
}

impl NumericField {
    pub fn new(value: impl ToString) -> Self {
        Self { text: value.to_string(), focused: false }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Returns true when the field had focus (a commit is due).
    pub fn blur(&mut self) -> bool {
        std::mem::replace(&mut self.focused, false)
    }

    /// Digits only; other characters are ignored.
    pub fn push(&mut self, ch: char) {
        if self.focused && ch.is_ascii_digit() && self.text.len() < MAX_FIELD_CHARS {
            self.text.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if self.focused {
            self.text.pop();
        }
    }

    pub fn set_text(&mut self, value: impl ToString) {
        self.text = value.to_string();
    }
}
