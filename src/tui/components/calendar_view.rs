//! # Calendar Screens
//!
//! `MonthGrid` is the month overview: a 7-column grid of day cells with
//! today outlined in red. `DayWindow` is the detail view for one day's
//! six task slots; it doubles as the read-only Today screen.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::calendar::MONTH_NAMES;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::ui;

pub struct MonthGrid<'a> {
    pub app: &'a App,
}

impl Component for MonthGrid<'_> {
    fn render(&self, frame: &mut Frame, area: Rect) {
        let regions = ui::calendar_regions(area);
        let cal = &self.app.calendar;

        let header = Span::styled(
            format!("{} {}", cal.month_name(), cal.year),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(header, regions.header);

        let today = self.app.today_indices();
        let month0 = cal.month as usize - 1;
        for (i, rect) in ui::day_cells(regions.grid, cal.days_in_view())
            .iter()
            .enumerate()
        {
            if rect.area() == 0 {
                continue;
            }
            let is_today = today == Some((month0, i));
            let style = if is_today {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Gray)
            };
            let initial = cal
                .weekday_of(i)
                .map(|w| w.to_string().chars().next().unwrap_or(' '))
                .unwrap_or(' ');
            let cell = Paragraph::new(format!("{} {}", i + 1, initial))
                .style(style)
                .block(Block::bordered().border_style(style));
            frame.render_widget(cell, *rect);
        }
    }
}

/// Detail view for a single day's task slots. `editable` is false on the
/// Today screen, which is a read-only shortcut to today's day window.
pub struct DayWindow<'a> {
    pub app: &'a App,
    pub month0: usize,
    pub day0: usize,
    pub editable: bool,
}

impl Component for DayWindow<'_> {
    fn render(&self, frame: &mut Frame, area: Rect) {
        let (header_area, slot_rects) = ui::day_window_regions(area);

        let Some(slots) = self.app.calendar.slots_at(self.month0, self.day0) else {
            return;
        };

        let header = Span::styled(
            format!("{} {}", MONTH_NAMES[self.month0.min(11)], self.day0 + 1),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(header, header_area);

        let selected = self
            .app
            .calendar
            .selected_slot
            .filter(|_| self.editable && self.app.is_editing());
        for (i, rect) in slot_rects.iter().enumerate() {
            if rect.area() == 0 {
                continue;
            }
            let border = if selected == Some(i) {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let slot = Paragraph::new(slots[i].as_str())
                .style(Style::default().fg(Color::Blue))
                .wrap(Wrap { trim: false })
                .block(Block::bordered().border_style(border));
            frame.render_widget(slot, *rect);
        }
    }
}
