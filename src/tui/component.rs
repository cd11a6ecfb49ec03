use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components follow the transient-wrapper pattern: each is built per
/// frame from borrowed application state (its "props") and renders into
/// a given `Rect`. None of them hold state across frames; everything
/// they show lives in `core::state::App`.
pub trait Component {
    /// Render the component into the given area.
    fn render(&self, frame: &mut Frame, area: Rect);
}
