//! # Task/Notes Board
//!
//! Two columns: tasks on the left third, their notes on the right.
//! Row `i` of each column is one pair. The focused cell is rendered
//! reversed; everything is single-line with width-aware truncation.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

use crate::core::board::BoardColumn;
use crate::core::state::{App, EditTarget};
use crate::tui::component::Component;
use crate::tui::ui;

pub struct BoardView<'a> {
    pub app: &'a App,
}

impl Component for BoardView<'_> {
    fn render(&self, frame: &mut Frame, area: Rect) {
        let regions = ui::board_regions(area, self.app.board.rows());

        if let (Some(t), Some(n)) = (regions.task_cells.first(), regions.note_cells.first()) {
            let header_style = Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD);
            frame.render_widget(
                Span::styled("TASKS", header_style),
                Rect { x: t.x, height: 1, ..regions.header },
            );
            frame.render_widget(
                Span::styled("NOTES", header_style),
                Rect { x: n.x, height: 1, ..regions.header },
            );
        }

        self.render_column(frame, BoardColumn::Tasks, &regions.task_cells, Color::Red);
        self.render_column(frame, BoardColumn::Notes, &regions.note_cells, Color::Green);
    }
}

impl BoardView<'_> {
    fn render_column(&self, frame: &mut Frame, column: BoardColumn, cells: &[Rect], fg: Color) {
        for (row, rect) in cells.iter().enumerate() {
            if rect.area() == 0 {
                continue;
            }
            let focused = self.app.focus == Some(EditTarget::BoardCell { column, row });
            let style = if focused {
                Style::default().fg(fg).add_modifier(Modifier::REVERSED)
            } else {
                Style::default().fg(fg)
            };
            let text = self.app.board.cell(column, row).unwrap_or("");
            let gutter = format!("{:>2} ", row + 1);
            let budget = (rect.width as usize).saturating_sub(gutter.len());
            let line = Line::from(vec![
                Span::styled(gutter, Style::default().fg(Color::DarkGray)),
                Span::styled(truncate_to_width(text, budget), style),
            ]);
            frame.render_widget(line, *rect);
        }
    }
}

/// Cut a string down to at most `max_width` terminal columns.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        out.push(c);
    }
    out
}
