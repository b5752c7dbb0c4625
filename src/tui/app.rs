//! Application state for the amount-entry screen

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::mask::CurrencyMask;
use crate::tui::widgets::AmountInput;

/// State for the interactive amount-entry screen
pub struct App {
    /// The masked amount field
    pub input: AmountInput,
    /// Whether the main loop should exit
    pub should_quit: bool,
}

impl App {
    /// Create the app with the given mask
    pub fn new(mask: CurrencyMask) -> Self {
        Self {
            input: AmountInput::new(mask)
                .label("Amount")
                .placeholder("type digits")
                .focused(true),
            should_quit: false,
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.clear(),
            KeyCode::Char(c) => self.input.insert(c),
            _ => {}
        }
    }
}

/// Render the amount-entry screen
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_input(frame, app, chunks[0]);

    let preview = Line::from(vec![
        Span::styled("Value: ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}", app.input.amount())),
    ]);
    frame.render_widget(Paragraph::new(preview), chunks[1]);

    let hint = Line::from(Span::styled(
        "digits: enter amount | Backspace: delete | Del: clear | Esc: quit",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(hint), chunks[3]);
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("centavos");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(&app.input, inner);
}
