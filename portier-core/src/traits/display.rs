//! Character display trait for the 16x2 status display

/// Write-only text display
///
/// The terminal never reads display contents back, and a display fault is
/// not observable, so nothing here returns an error.
pub trait CharacterDisplay {
    /// Blank the display and home the cursor
    fn clear(&mut self);

    /// Write ASCII text at the cursor
    fn write_text(&mut self, text: &str);
}

/// Helper trait for common display sequences
pub trait DisplayExt: CharacterDisplay {
    /// Replace whatever is shown with `message`
    fn show(&mut self, message: &str) {
        self.clear();
        self.write_text(message);
    }
}

// Blanket implementation for all CharacterDisplay types
impl<T: CharacterDisplay> DisplayExt for T {}
