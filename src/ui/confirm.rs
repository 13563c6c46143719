//! Blocking yes/no dialog drawn over the last screen.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::phonebook::Confirm;
use crate::ui::app::Screen;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::render::draw;
use crate::ui::terminal_guard::Tui;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, POPUP_BORDER};

const DIALOG_WIDTH: u16 = 56;

/// What a key press means while the dialog is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKey {
    Answer(bool),
    Toggle,
    Ignore,
}

pub fn classify(key: KeyEvent, yes_selected: bool) -> ModalKey {
    if key.kind != KeyEventKind::Press {
        return ModalKey::Ignore;
    }
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => ModalKey::Answer(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => ModalKey::Answer(false),
        KeyCode::Enter => ModalKey::Answer(yes_selected),
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => ModalKey::Toggle,
        _ => ModalKey::Ignore,
    }
}

/// [`Confirm`] backed by the terminal.
///
/// `confirm` keeps the caller waiting until the user answers. Events that
/// arrive meanwhile are held back and handed out by
/// [`into_deferred`](Self::into_deferred) in arrival order.
pub struct ModalConfirm<'a> {
    terminal: &'a mut Tui,
    events: &'a EventHandler,
    backdrop: Screen,
    tick_rate: Duration,
    deferred: Vec<AppEvent>,
}

impl<'a> ModalConfirm<'a> {
    pub fn new(
        terminal: &'a mut Tui,
        events: &'a EventHandler,
        backdrop: Screen,
        tick_rate: Duration,
    ) -> Self {
        Self {
            terminal,
            events,
            backdrop,
            tick_rate,
            deferred: Vec::new(),
        }
    }

    pub fn into_deferred(self) -> Vec<AppEvent> {
        self.deferred
    }
}

impl Confirm for ModalConfirm<'_> {
    fn confirm(&mut self, message: &str) -> bool {
        tracing::debug!(prompt = %message, "awaiting confirmation");
        let mut yes_selected = true;

        loop {
            let backdrop = &self.backdrop;
            if let Err(err) = self.terminal.draw(|frame| {
                draw(frame, backdrop);
                render_dialog(frame, message, yes_selected);
            }) {
                tracing::warn!(error = %err, "failed to draw confirmation, declining");
                return false;
            }

            match self.events.next(self.tick_rate) {
                Ok(AppEvent::Key(key)) => match classify(key, yes_selected) {
                    ModalKey::Answer(answer) => {
                        tracing::debug!(answer, "confirmation answered");
                        return answer;
                    }
                    ModalKey::Toggle => yes_selected = !yes_selected,
                    ModalKey::Ignore => {}
                },
                Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
                Ok(other) => self.deferred.push(other),
                Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
                Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => return false,
            }
        }
    }
}

fn render_dialog(frame: &mut Frame, message: &str, yes_selected: bool) {
    let inner_width = DIALOG_WIDTH.saturating_sub(4) as usize;
    let text_lines = message.chars().count().div_ceil(inner_width.max(1)).max(1) as u16;
    let area = centered_rect_by_size(frame.area(), DIALOG_WIDTH, text_lines + 5);

    frame.render_widget(Clear, area);

    let button = |label: &'static str, active: bool| {
        let style = if active {
            Style::default()
                .fg(ACCENT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        Span::styled(label, style)
    };

    let lines = vec![
        Line::from(Span::styled(message.to_string(), Style::default().fg(HEADER_TEXT))),
        Line::from(""),
        Line::from(vec![
            button("[ Yes ]", yes_selected),
            Span::raw("   "),
            button("[ No ]", !yes_selected),
        ])
        .alignment(Alignment::Center),
    ];

    let block = Block::default()
        .title(Span::styled(" Confirm ", Style::default().fg(ACCENT)))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
