//! Screen layout and hit testing.
//!
//! Every clickable region is produced by a `*_regions` function that
//! both the draw pass and `hit_test` call, so what you see is exactly
//! what the pointer math checks against. Keeping the two on one code
//! path is what makes click routing testable without a terminal.

use crate::core::action::Action;
use crate::core::board::BoardColumn;
use crate::core::calendar::SLOTS_PER_DAY;
use crate::core::state::{App, Screen};
use crate::tui::component::Component;
use crate::tui::components::{BoardView, DayWindow, MenuView, MonthGrid};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// What a pointer click resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum Hit {
    Action(Action),
    /// The now/next panel was clicked; the caller supplies the clock.
    RefreshNow,
}

pub fn draw_ui(frame: &mut Frame, app: &App) {
    let [title_area, body, status_area] = root_areas(frame.area());

    draw_title_bar(frame, title_area, app);

    match app.screen {
        Screen::Menu => MenuView { app }.render(frame, body),
        Screen::Tasks => BoardView { app }.render(frame, body),
        Screen::Calendar => MonthGrid { app }.render(frame, body),
        Screen::CalendarDay => {
            if let Some(day) = app.calendar.selected_day {
                DayWindow {
                    app,
                    month0: app.calendar.month as usize - 1,
                    day0: day,
                    editable: true,
                }
                .render(frame, body);
            }
        }
        Screen::Today => match app.today_indices() {
            Some((month0, day0)) => DayWindow {
                app,
                month0,
                day0,
                editable: false,
            }
            .render(frame, body),
            None => {
                let msg = Paragraph::new("Today falls outside the plan year.")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::DarkGray));
                frame.render_widget(msg, body);
            }
        },
    }

    draw_status_bar(frame, status_area, app);
}

/// Resolve a pointer click to an action for the active screen.
pub fn hit_test(app: &App, area: Rect, x: u16, y: u16, right_click: bool) -> Option<Hit> {
    let pos = Position::new(x, y);
    let [title_area, body, _status] = root_areas(area);

    if app.screen != Screen::Menu && !right_click && back_region(title_area).contains(pos) {
        return Some(Hit::Action(Action::Back));
    }

    match app.screen {
        Screen::Menu => {
            let regions = menu_regions(body, app.checklist.len());
            if let Some(i) = regions.checklist_rows.iter().position(|r| r.contains(pos)) {
                return Some(Hit::Action(if right_click {
                    Action::TickDecrement(i)
                } else {
                    Action::TickIncrement(i)
                }));
            }
            if right_click {
                return None;
            }
            if regions.now_panel.contains(pos) || regions.next_panel.contains(pos) {
                return Some(Hit::RefreshNow);
            }
            let actions = [Action::OpenTasks, Action::OpenToday, Action::OpenCalendar];
            regions
                .buttons
                .iter()
                .zip(actions)
                .find(|(rect, _)| rect.contains(pos))
                .map(|(_, action)| Hit::Action(action))
        }
        Screen::Tasks => {
            let regions = board_regions(body, app.board.rows());
            for (column, cells) in [
                (BoardColumn::Tasks, &regions.task_cells),
                (BoardColumn::Notes, &regions.note_cells),
            ] {
                if let Some(row) = cells.iter().position(|r| r.contains(pos)) {
                    return Some(Hit::Action(if right_click {
                        Action::ClearCell { column, row }
                    } else {
                        Action::SelectCell { column, row }
                    }));
                }
            }
            None
        }
        Screen::Calendar => {
            if right_click {
                return None;
            }
            let regions = calendar_regions(body);
            day_cells(regions.grid, app.calendar.days_in_view())
                .iter()
                .position(|r| r.contains(pos))
                .map(|i| Hit::Action(Action::SelectDay(i)))
        }
        Screen::CalendarDay => {
            if right_click {
                return None;
            }
            let (_, slots) = day_window_regions(body);
            slots
                .iter()
                .position(|r| r.contains(pos))
                .map(|i| Hit::Action(Action::SelectSlot(i)))
        }
        Screen::Today => None,
    }
}

// ============================================================================
// Region math (shared between drawing and hit testing)
// ============================================================================

/// Title row, body, status row.
pub fn root_areas(area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Min(0), Length(1)]).areas(area)
}

/// The `[ Back ]` region at the right end of the title row.
pub fn back_region(title_area: Rect) -> Rect {
    let width = 8.min(title_area.width);
    Rect {
        x: title_area.right().saturating_sub(width),
        y: title_area.y,
        width,
        height: title_area.height,
    }
}

pub struct MenuRegions {
    pub date: Rect,
    /// Top to bottom: Tasks, Today, Calendar.
    pub buttons: [Rect; 3],
    pub next_panel: Rect,
    pub now_panel: Rect,
    pub checklist_rows: Vec<Rect>,
}

pub fn menu_regions(body: Rect, subject_count: usize) -> MenuRegions {
    use Constraint::{Length, Min, Percentage};
    let [left, right] = Layout::horizontal([Percentage(50), Percentage(50)]).areas(body);
    let [date, _, tasks, today, calendar, _, next_panel, now_panel] = Layout::vertical([
        Length(1),
        Length(1),
        Length(3),
        Length(3),
        Length(3),
        Min(0),
        Length(3),
        Length(3),
    ])
    .areas(left);

    let checklist_rows = (0..subject_count)
        .map(|i| {
            Rect {
                x: right.x,
                y: right.y.saturating_add(i as u16),
                width: right.width,
                height: 1,
            }
            .intersection(right)
        })
        .collect();

    MenuRegions {
        date,
        buttons: [tasks, today, calendar],
        next_panel,
        now_panel,
        checklist_rows,
    }
}

pub struct CalendarRegions {
    pub header: Rect,
    pub grid: Rect,
}

pub fn calendar_regions(body: Rect) -> CalendarRegions {
    use Constraint::{Length, Min};
    let [header, grid] = Layout::vertical([Length(1), Min(0)]).areas(body);
    CalendarRegions { header, grid }
}

/// One rect per day of the month, laid out as a 7-column grid.
pub fn day_cells(grid: Rect, days: usize) -> Vec<Rect> {
    const COLS: u16 = 7;
    if grid.width < COLS || grid.height == 0 || days == 0 {
        return vec![Rect::ZERO; days];
    }
    let rows = days.div_ceil(COLS as usize) as u16;
    let cell_w = grid.width / COLS;
    let cell_h = (grid.height / rows).max(1);
    (0..days)
        .map(|i| {
            let c = (i as u16) % COLS;
            let r = (i as u16) / COLS;
            Rect::new(grid.x + c * cell_w, grid.y + r * cell_h, cell_w, cell_h).intersection(grid)
        })
        .collect()
}

/// Header plus one rect per task slot of a day window.
pub fn day_window_regions(body: Rect) -> (Rect, Vec<Rect>) {
    use Constraint::{Length, Min};
    let [header, grid] = Layout::vertical([Length(1), Min(0)]).areas(body);
    let slot_h = (grid.height / SLOTS_PER_DAY as u16).max(1);
    let slots = (0..SLOTS_PER_DAY)
        .map(|i| {
            Rect::new(grid.x, grid.y + i as u16 * slot_h, grid.width, slot_h).intersection(grid)
        })
        .collect();
    (header, slots)
}

pub struct BoardRegions {
    pub header: Rect,
    pub task_cells: Vec<Rect>,
    pub note_cells: Vec<Rect>,
}

pub fn board_regions(body: Rect, rows: usize) -> BoardRegions {
    use Constraint::{Length, Min, Ratio};
    let [header, grid] = Layout::vertical([Length(1), Min(0)]).areas(body);
    let [tasks_col, notes_col] = Layout::horizontal([Ratio(1, 3), Ratio(2, 3)]).areas(grid);
    let row_h = (grid.height / rows.max(1) as u16).max(1);
    let cells = |col: Rect| -> Vec<Rect> {
        (0..rows)
            .map(|i| {
                Rect::new(col.x, col.y + i as u16 * row_h, col.width, row_h).intersection(col)
            })
            .collect()
    };
    BoardRegions {
        header,
        task_cells: cells(tasks_col),
        note_cells: cells(notes_col),
    }
}

// ============================================================================
// Chrome
// ============================================================================

fn draw_title_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = if app.status_message.is_empty() {
        format!("Taskdeck | {}", app.screen.title())
    } else {
        format!("Taskdeck | {} | {}", app.screen.title(), app.status_message)
    };
    frame.render_widget(Span::raw(text), area);

    if app.screen != Screen::Menu {
        let back = Paragraph::new("[ Back ]")
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Right);
        frame.render_widget(back, back_region(area));
    }
}

fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let help = match app.screen {
        Screen::Menu => "click a button | checklist: left +1, right -1 | q quit",
        Screen::Tasks => "click a cell to edit | right click clears | Esc done",
        Screen::Calendar => "click a day | ←/→ month | Esc back",
        Screen::CalendarDay => "click a slot to edit | Esc done/back",
        Screen::Today => "Esc back",
    };
    let mut spans = vec![Span::styled(help, Style::default().fg(Color::DarkGray))];
    // The original showed a red dot while text editing was live.
    if app.is_editing() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "EDITING",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }
    frame.render_widget(Line::from(spans), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::update;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn area() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    fn draw(app: &App) {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app)).unwrap();
    }

    #[test]
    fn test_draw_every_screen() {
        let mut app = test_app();
        draw(&app);
        for action in [
            Action::OpenTasks,
            Action::Back,
            Action::OpenToday,
            Action::Back,
            Action::OpenCalendar,
            Action::SelectDay(0),
        ] {
            update(&mut app, action);
            draw(&app);
        }
    }

    #[test]
    fn test_menu_button_click_opens_tasks() {
        let app = test_app();
        let [_, body, _] = root_areas(area());
        let regions = menu_regions(body, app.checklist.len());
        let b = regions.buttons[0];
        let hit = hit_test(&app, area(), b.x + 1, b.y + 1, false);
        assert_eq!(hit, Some(Hit::Action(Action::OpenTasks)));
    }

    #[test]
    fn test_checklist_clicks_map_to_ticks() {
        let app = test_app();
        let [_, body, _] = root_areas(area());
        let regions = menu_regions(body, app.checklist.len());
        let row = regions.checklist_rows[2];
        assert_eq!(
            hit_test(&app, area(), row.x, row.y, false),
            Some(Hit::Action(Action::TickIncrement(2)))
        );
        assert_eq!(
            hit_test(&app, area(), row.x, row.y, true),
            Some(Hit::Action(Action::TickDecrement(2)))
        );
    }

    #[test]
    fn test_now_panel_click_requests_refresh() {
        let app = test_app();
        let [_, body, _] = root_areas(area());
        let regions = menu_regions(body, app.checklist.len());
        let hit = hit_test(&app, area(), regions.now_panel.x, regions.now_panel.y, false);
        assert_eq!(hit, Some(Hit::RefreshNow));
    }

    #[test]
    fn test_calendar_day_click() {
        let mut app = test_app();
        update(&mut app, Action::OpenCalendar);
        let [_, body, _] = root_areas(area());
        let regions = calendar_regions(body);
        let cells = day_cells(regions.grid, app.calendar.days_in_view());
        let c = cells[8];
        assert_eq!(
            hit_test(&app, area(), c.x, c.y, false),
            Some(Hit::Action(Action::SelectDay(8)))
        );
    }

    #[test]
    fn test_board_cell_clicks() {
        let mut app = test_app();
        update(&mut app, Action::OpenTasks);
        let [_, body, _] = root_areas(area());
        let regions = board_regions(body, app.board.rows());
        let t = regions.task_cells[1];
        assert_eq!(
            hit_test(&app, area(), t.x, t.y, false),
            Some(Hit::Action(Action::SelectCell {
                column: BoardColumn::Tasks,
                row: 1
            }))
        );
        let n = regions.note_cells[4];
        assert_eq!(
            hit_test(&app, area(), n.x, n.y, true),
            Some(Hit::Action(Action::ClearCell {
                column: BoardColumn::Notes,
                row: 4
            }))
        );
    }

    #[test]
    fn test_back_click_from_tasks() {
        let mut app = test_app();
        update(&mut app, Action::OpenTasks);
        let [title, _, _] = root_areas(area());
        let b = back_region(title);
        assert_eq!(
            hit_test(&app, area(), b.x, b.y, false),
            Some(Hit::Action(Action::Back))
        );
    }

    #[test]
    fn test_back_region_inactive_on_menu() {
        let app = test_app();
        let [title, _, _] = root_areas(area());
        let b = back_region(title);
        assert_eq!(hit_test(&app, area(), b.x, b.y, false), None);
    }

    #[test]
    fn test_day_cells_cover_the_month_without_overlap() {
        let grid = Rect::new(0, 1, 77, 20);
        let cells = day_cells(grid, 31);
        assert_eq!(cells.len(), 31);
        for (i, a) in cells.iter().enumerate() {
            assert!(a.width > 0 && a.height > 0);
            for b in &cells[i + 1..] {
                assert_eq!(a.intersection(*b).area(), 0);
            }
        }
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let app = test_app();
        let backend = TestBackend::new(10, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, &app)).unwrap();
        // Hit testing on a degenerate layout must not panic either.
        let _ = hit_test(&app, Rect::new(0, 0, 10, 3), 5, 1, false);
    }
}
