//! The free-form task/notes board: two parallel fixed-length columns of
//! strings where row `i` of the notes column annotates row `i` of the
//! tasks column.

/// Which column of the board a cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardColumn {
    Tasks,
    Notes,
}

#[derive(Debug, Clone)]
pub struct Board {
    tasks: Vec<String>,
    notes: Vec<String>,
}

impl Board {
    pub fn new(rows: usize) -> Self {
        Self {
            tasks: vec![String::new(); rows],
            notes: vec![String::new(); rows],
        }
    }

    /// Rebuild from persisted columns, resized to the configured row count.
    pub fn from_parts(rows: usize, mut tasks: Vec<String>, mut notes: Vec<String>) -> Self {
        tasks.resize(rows, String::new());
        notes.resize(rows, String::new());
        Self { tasks, notes }
    }

    pub fn rows(&self) -> usize {
        self.tasks.len()
    }

    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn cell(&self, column: BoardColumn, row: usize) -> Option<&str> {
        self.column(column).get(row).map(String::as_str)
    }

    pub fn push_char(&mut self, column: BoardColumn, row: usize, c: char) {
        if let Some(cell) = self.column_mut(column).get_mut(row) {
            cell.push(c);
        }
    }

    pub fn pop_char(&mut self, column: BoardColumn, row: usize) {
        if let Some(cell) = self.column_mut(column).get_mut(row) {
            cell.pop();
        }
    }

    /// Wipe a cell in one go (right click in the UI).
    pub fn clear(&mut self, column: BoardColumn, row: usize) {
        if let Some(cell) = self.column_mut(column).get_mut(row) {
            cell.clear();
        }
    }

    fn column(&self, column: BoardColumn) -> &[String] {
        match column {
            BoardColumn::Tasks => &self.tasks,
            BoardColumn::Notes => &self.notes,
        }
    }

    fn column_mut(&mut self, column: BoardColumn) -> &mut Vec<String> {
        match column {
            BoardColumn::Tasks => &mut self.tasks,
            BoardColumn::Notes => &mut self.notes,
        }
    }
}
