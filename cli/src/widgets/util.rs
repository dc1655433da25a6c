use std::rc::Rc;

use ratatui::layout::{ Constraint, Layout, Rect };

/// Stacks rows of the given heights in the vertical middle of `area`
pub fn vertically_centered_rows(area: Rect, heights: &[u16]) -> Rc<[Rect]> {
	let total: u16 = heights.iter().sum();
	let padding = area.height.saturating_sub(total) / 2;

	let [_, middle, _] = Layout::vertical([
		Constraint::Length(padding),
		Constraint::Length(total),
		Constraint::Min(0),
	])
	.areas(area);

	Layout::vertical(heights.iter().map(|height| Constraint::Length(*height))).split(middle)
}
