//! Masked amount input widget
//!
//! A text input that re-applies the currency mask after every edit, so the
//! field always shows a formatted amount while the user types digits.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::mask::CurrencyMask;

/// A currency-masked input field
///
/// Edits are one-directional: every keystroke mutates the buffer and the
/// buffer is immediately replaced with `mask.format(buffer)`. The cursor
/// therefore always sits at the end of the field, matching how currency
/// masks behave (new digits enter from the right).
#[derive(Debug, Clone, Default)]
pub struct AmountInput {
    /// Currently displayed (formatted) text
    content: String,
    /// Mask applied after each edit
    mask: CurrencyMask,
    /// Whether the input is focused
    pub focused: bool,
    /// Label
    pub label: String,
    /// Placeholder text shown while empty
    pub placeholder: String,
}

impl AmountInput {
    /// Create a new amount input with the given mask
    pub fn new(mask: CurrencyMask) -> Self {
        Self {
            content: String::new(),
            mask,
            focused: false,
            label: String::new(),
            placeholder: String::new(),
        }
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Handle a typed character, reapplying the mask
    ///
    /// Non-digit characters are stripped by the mask, so stray keys leave
    /// the field unchanged.
    pub fn insert(&mut self, c: char) {
        self.content.push(c);
        self.reformat();
    }

    /// Handle backspace: drop the last digit, reapplying the mask
    pub fn backspace(&mut self) {
        self.content.pop();
        self.reformat();
    }

    /// Clear the field
    pub fn clear(&mut self) {
        self.content.clear();
    }

    /// Get the formatted display text
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Get the numeric value of the current content (0.0 while empty)
    pub fn amount(&self) -> f64 {
        self.mask.unmask(&self.content)
    }

    fn reformat(&mut self) {
        self.content = self.mask.format(&self.content);
    }
}

impl Widget for &AmountInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = if self.label.is_empty() {
            0
        } else {
            self.label.len() + 2
        };

        let input_start = area.x + label_width as u16;

        if !self.label.is_empty() {
            let label_line = Line::from(vec![
                Span::styled(&self.label, Style::default().fg(Color::Cyan)),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width as u16);
        }

        let show_placeholder = self.content.is_empty();
        let display_text = if show_placeholder {
            &self.placeholder
        } else {
            &self.content
        };

        let text_style = if self.focused && !show_placeholder {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Yellow)
        };

        buf.set_string(input_start, area.y, display_text, text_style);

        // Block cursor at the end of the field
        if self.focused {
            let cursor_x = input_start + self.content.len() as u16;
            if cursor_x < area.x + area.width {
                buf.set_string(
                    cursor_x,
                    area.y,
                    "_",
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::CurrencyStyle;

    fn input() -> AmountInput {
        AmountInput::new(CurrencyMask::new(CurrencyStyle::pt_br()))
    }

    #[test]
    fn test_digits_enter_from_the_right() {
        let mut field = input();
        field.insert('5');
        assert_eq!(field.value(), "R$ 0,05");
        field.insert('0');
        assert_eq!(field.value(), "R$ 0,50");
        field.insert('0');
        assert_eq!(field.value(), "R$ 5,00");
    }

    #[test]
    fn test_non_digit_keys_are_ignored() {
        let mut field = input();
        field.insert('a');
        assert_eq!(field.value(), "");
        field.insert('5');
        field.insert('x');
        assert_eq!(field.value(), "R$ 0,05");
    }

    #[test]
    fn test_backspace_drops_last_digit() {
        let mut field = input();
        for c in "500".chars() {
            field.insert(c);
        }
        field.backspace();
        assert_eq!(field.value(), "R$ 0,50");
        field.backspace();
        field.backspace();
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_amount_tracks_content() {
        let mut field = input();
        assert_eq!(field.amount(), 0.0);
        for c in "123456".chars() {
            field.insert(c);
        }
        assert_eq!(field.value(), "R$ 1.234,56");
        assert_eq!(field.amount(), 1234.56);
        field.clear();
        assert_eq!(field.amount(), 0.0);
    }
}
