//! # EventFormView Component
//!
//! Editable rendering of one trip event.
//!
//! ## Responsibilities
//!
//! - Hold a draft of the event being edited
//! - Edit type, destination, dates, price and offer selection
//! - Validate the draft on submit and report problems inline
//! - Emit roll-up, submit and delete events to the owning presenter
//!
//! ## State Management
//!
//! `original` is the last committed event; `draft` is what the user is typing.
//! [`EventFormView::reset`] throws the draft away. The view never changes
//! `original`: a successful submit hands a new `TripEvent` upward and the
//! presenter rebuilds the form from it.

mod text_field;

use chrono::{DateTime, NaiveDateTime, Utc};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget};

use crate::core::config::DisplaySettings;
use crate::core::trip_event::{EventType, Offer, TripEvent};
use crate::tui::component::{EventHandler, ListEntry};
use crate::tui::event::TuiEvent;

use text_field::TextField;

/// Date-time format typed into the start/end fields.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Fixed rows: type, destination, start, end, price, offers, help.
const FIELD_ROWS: u16 = 7;
/// Top + bottom borders
const VERTICAL_OVERHEAD: u16 = 2;

/// High-level events emitted by the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// Close the form without saving (Ctrl+E).
    RollUp,
    /// The draft validated; carries the edited event (Enter).
    Submit(TripEvent),
    /// Delete the event being edited (Ctrl+D).
    Delete(TripEvent),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("destination cannot be empty")]
    EmptyDestination,
    #[error("{field} must look like YYYY-MM-DD HH:MM, got '{value}'")]
    InvalidDate { field: &'static str, value: String },
    #[error("price must be a whole number, got '{0}'")]
    InvalidPrice(String),
    #[error("end must not be before start")]
    EndsBeforeStart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Type,
    Destination,
    Start,
    End,
    Price,
    Offers,
}

impl FormField {
    const ORDER: [FormField; 6] = [
        FormField::Type,
        FormField::Destination,
        FormField::Start,
        FormField::End,
        FormField::Price,
        FormField::Offers,
    ];

    fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    fn label(self) -> &'static str {
        match self {
            FormField::Type => "Type",
            FormField::Destination => "Destination",
            FormField::Start => "From",
            FormField::End => "To",
            FormField::Price => "Price",
            FormField::Offers => "Offers",
        }
    }
}

#[derive(Debug, Clone)]
struct FormDraft {
    kind: EventType,
    destination: TextField,
    start: TextField,
    end: TextField,
    price: TextField,
    offers: Vec<Offer>,
    offer_cursor: usize,
}

impl FormDraft {
    fn from_event(event: &TripEvent) -> Self {
        Self {
            kind: event.kind,
            destination: TextField::new(event.destination.clone()),
            start: TextField::new(event.date_from.format(INPUT_DATE_FORMAT).to_string()),
            end: TextField::new(event.date_to.format(INPUT_DATE_FORMAT).to_string()),
            price: TextField::new(event.base_price.to_string()),
            offers: event.offers.clone(),
            offer_cursor: 0,
        }
    }

    /// Equal when every edited value matches; cursor positions are ignored.
    fn same_values(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.destination.value == other.destination.value
            && self.start.value == other.start.value
            && self.end.value == other.end.value
            && self.price.value == other.price.value
            && self.offers == other.offers
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<DateTime<Utc>, FormError> {
    NaiveDateTime::parse_from_str(value.trim(), INPUT_DATE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| FormError::InvalidDate {
            field,
            value: value.to_string(),
        })
}

/// Editable event form.
///
/// # Props
///
/// - `original`: the committed event this form was built from
///
/// # State
///
/// - `draft`: field values being edited
/// - `focus`: which field receives keystrokes
/// - `error`: last validation failure, shown until the next edit or reset
pub struct EventFormView {
    original: TripEvent,
    draft: FormDraft,
    focus: FormField,
    error: Option<FormError>,
}

impl EventFormView {
    pub fn new(event: TripEvent) -> Self {
        let draft = FormDraft::from_event(&event);
        Self {
            original: event,
            draft,
            focus: FormField::Destination,
            error: None,
        }
    }

    pub fn original(&self) -> &TripEvent {
        &self.original
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    /// True when the draft differs from the committed event.
    pub fn is_dirty(&self) -> bool {
        !self.draft.same_values(&FormDraft::from_event(&self.original))
    }

    /// Restore the last committed values.
    pub fn reset(&mut self) {
        self.draft = FormDraft::from_event(&self.original);
        self.focus = FormField::Destination;
        self.error = None;
    }

    /// Validate the draft and build the edited event from it.
    pub fn parse_draft(&self) -> Result<TripEvent, FormError> {
        let destination = self.draft.destination.value.trim();
        if destination.is_empty() {
            return Err(FormError::EmptyDestination);
        }
        let date_from = parse_date("start", &self.draft.start.value)?;
        let date_to = parse_date("end", &self.draft.end.value)?;
        if date_to < date_from {
            return Err(FormError::EndsBeforeStart);
        }
        let price_text = self.draft.price.value.trim();
        let base_price = price_text
            .parse::<u32>()
            .map_err(|_| FormError::InvalidPrice(price_text.to_string()))?;

        Ok(TripEvent {
            id: self.original.id.clone(),
            kind: self.draft.kind,
            destination: destination.to_string(),
            date_from,
            date_to,
            base_price,
            offers: self.draft.offers.clone(),
            is_favorite: self.original.is_favorite,
        })
    }

    fn focused_text(&mut self) -> Option<&mut TextField> {
        match self.focus {
            FormField::Destination => Some(&mut self.draft.destination),
            FormField::Start => Some(&mut self.draft.start),
            FormField::End => Some(&mut self.draft.end),
            FormField::Price => Some(&mut self.draft.price),
            FormField::Type | FormField::Offers => None,
        }
    }

    fn move_sideways(&mut self, forward: bool) {
        match self.focus {
            FormField::Type => {
                self.draft.kind = if forward {
                    self.draft.kind.next()
                } else {
                    self.draft.kind.prev()
                };
            }
            FormField::Offers => {
                let count = self.draft.offers.len();
                if count > 0 {
                    self.draft.offer_cursor = if forward {
                        (self.draft.offer_cursor + 1).min(count - 1)
                    } else {
                        self.draft.offer_cursor.saturating_sub(1)
                    };
                }
            }
            _ => {
                if let Some(field) = self.focused_text() {
                    if forward {
                        field.move_right();
                    } else {
                        field.move_left();
                    }
                }
            }
        }
    }

    fn type_char(&mut self, c: char) {
        match self.focus {
            FormField::Offers if c == ' ' => {
                let cursor = self.draft.offer_cursor;
                if let Some(offer) = self.draft.offers.get_mut(cursor) {
                    offer.is_selected = !offer.is_selected;
                }
            }
            FormField::Price if !c.is_ascii_digit() => {}
            _ => {
                if let Some(field) = self.focused_text() {
                    field.insert(c);
                }
            }
        }
    }

    fn field_line(&self, field: FormField, focused_form: bool) -> Line<'_> {
        let is_focused = focused_form && self.focus == field;
        let label_style = if is_focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut spans = vec![Span::styled(format!("{:<12}", field.label()), label_style)];

        let text_field = match field {
            FormField::Destination => Some(&self.draft.destination),
            FormField::Start => Some(&self.draft.start),
            FormField::End => Some(&self.draft.end),
            FormField::Price => Some(&self.draft.price),
            FormField::Type | FormField::Offers => None,
        };

        if let Some(text) = text_field {
            if is_focused {
                let (before, after) = text.split_at_cursor();
                spans.push(Span::raw(before));
                spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
                spans.push(Span::raw(after));
            } else {
                spans.push(Span::raw(text.value.as_str()));
            }
            return Line::from(spans);
        }

        match field {
            FormField::Type => {
                let marker = if is_focused { "◂ " } else { "" };
                let end = if is_focused { " ▸" } else { "" };
                spans.push(Span::raw(format!("{marker}{}{end}", self.draft.kind.label())));
            }
            _ if self.draft.offers.is_empty() => {
                spans.push(Span::styled("no offers", Style::default().fg(Color::DarkGray)));
            }
            _ => {
                for (i, offer) in self.draft.offers.iter().enumerate() {
                    let check = if offer.is_selected { "[x]" } else { "[ ]" };
                    let mut style = Style::default();
                    if is_focused && i == self.draft.offer_cursor {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    spans.push(Span::styled(
                        format!("{check} {} +{}", offer.title, offer.price),
                        style,
                    ));
                    spans.push(Span::raw("  "));
                }
            }
        }
        Line::from(spans)
    }
}

impl EventHandler for EventFormView {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Submit => match self.parse_draft() {
                Ok(edited) => {
                    self.error = None;
                    Some(FormEvent::Submit(edited))
                }
                Err(e) => {
                    log::debug!("Form for {} rejected: {}", self.original.id, e);
                    self.error = Some(e);
                    None
                }
            },
            TuiEvent::RollUp => Some(FormEvent::RollUp),
            TuiEvent::DeleteEvent => Some(FormEvent::Delete(self.original.clone())),
            TuiEvent::NextField | TuiEvent::CursorDown => {
                self.focus = self.focus.next();
                None
            }
            TuiEvent::PrevField | TuiEvent::CursorUp => {
                self.focus = self.focus.prev();
                None
            }
            TuiEvent::CursorLeft => {
                self.move_sideways(false);
                None
            }
            TuiEvent::CursorRight => {
                self.move_sideways(true);
                None
            }
            TuiEvent::InputChar(c) => {
                self.type_char(*c);
                self.error = None;
                None
            }
            TuiEvent::Backspace => {
                if let Some(field) = self.focused_text() {
                    field.backspace();
                }
                None
            }
            TuiEvent::Delete => {
                if let Some(field) = self.focused_text() {
                    field.delete();
                }
                None
            }
            _ => None,
        }
    }
}

impl ListEntry for EventFormView {
    fn height(&self, _width: u16) -> u16 {
        FIELD_ROWS + VERTICAL_OVERHEAD + u16::from(self.error.is_some())
    }

    fn render_entry(&self, area: Rect, buf: &mut Buffer, focused: bool, display: &DisplaySettings) {
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let title = if self.is_dirty() {
            format!(" Editing {} * ", self.original.destination)
        } else {
            format!(" Editing {} ", self.original.destination)
        };

        let mut lines: Vec<Line> = FormField::ORDER
            .iter()
            .map(|field| self.field_line(*field, focused))
            .collect();

        if let Some(error) = &self.error {
            lines.push(Line::styled(error.to_string(), Style::default().fg(Color::Red)));
        }

        let total = self
            .parse_draft()
            .map(|e| format!("{} {}", display.currency, e.total_price()))
            .unwrap_or_else(|_| "-".to_string());
        lines.push(Line::styled(
            format!("Total {total}   Enter Save  Ctrl+E Close  Ctrl+D Delete  Esc Cancel"),
            Style::default().fg(Color::DarkGray),
        ));

        Paragraph::new(lines)
            .block(
                Block::bordered()
                    .title(title)
                    .border_style(border_style)
                    .padding(Padding::horizontal(1)),
            )
            .render(area, buf);
    }
}
