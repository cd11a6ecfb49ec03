//! # Menu Screen
//!
//! Left half: the date, the navigation buttons, and the timetable
//! now/next panels. Right half: the subject checklist with its tick
//! marks. Clicking the now/next panels re-evaluates the timetable;
//! clicks on checklist rows adjust ticks.

use chrono::Datelike;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::state::App;
use crate::core::timetable::SlotView;
use crate::tui::component::Component;
use crate::tui::ui;

pub struct MenuView<'a> {
    pub app: &'a App,
}

impl Component for MenuView<'_> {
    fn render(&self, frame: &mut Frame, area: Rect) {
        let regions = ui::menu_regions(area, self.app.checklist.len());

        let day_type = self.app.rules.classify(self.app.today.weekday());
        let date = Span::styled(
            format!(
                "{} [{}]",
                self.app.today.format("%A, %Y-%m-%d"),
                day_type.label()
            ),
            Style::default().fg(Color::DarkGray),
        );
        frame.render_widget(date, regions.date);

        for (rect, label) in regions.buttons.iter().zip(["Tasks", "Today", "Calendar"]) {
            let button = Paragraph::new(label)
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::BOLD))
                .block(Block::bordered());
            frame.render_widget(button, *rect);
        }

        let (now_text, next_text) = describe(&self.app.now_next);
        frame.render_widget(
            Paragraph::new(next_text).block(Block::bordered()),
            regions.next_panel,
        );
        frame.render_widget(
            Paragraph::new(now_text)
                .style(Style::default().add_modifier(Modifier::BOLD))
                .block(Block::bordered()),
            regions.now_panel,
        );

        for (i, rect) in regions.checklist_rows.iter().enumerate() {
            let subject = &self.app.checklist.subjects()[i];
            let ticks = self.app.checklist.ticks()[i] as usize;
            let line = Line::from(vec![
                Span::styled(format!("{subject:<12}"), Style::default().fg(Color::White)),
                Span::styled("✓ ".repeat(ticks), Style::default().fg(Color::Green)),
            ]);
            frame.render_widget(line, *rect);
        }
    }
}

/// Render the evaluator result as the NOW and NEXT panel texts.
fn describe(view: &SlotView) -> (String, String) {
    match view {
        SlotView::Between {
            current,
            next,
            next_at,
        } => (
            format!("NOW - {current}"),
            format!("NEXT @ {} - {next}", next_at.format("%I:%M %p")),
        ),
        SlotView::Sleeping => ("NOW - sleeping".to_string(), "NEXT - sleeping".to_string()),
    }
}
