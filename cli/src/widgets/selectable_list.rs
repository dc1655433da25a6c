use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub struct SelectableList {
    title: String,
    items: Vec<String>,
    state: ListState,
}

impl SelectableList {
    pub fn new(title: &str, items: Vec<String>) -> Self {
        let mut state = ListState::default();
        if !items.is_empty() {
            state.select(Some(0));
        }

        Self {
            title: title.to_string(),
            items,
            state,
        }
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect) {
        let list_items: Vec<ListItem> = self.items
            .iter()
            .map(|s| ListItem::new(s.as_str()))
            .collect();

        let list = List::new(list_items)
            .block(Block::default().borders(Borders::ALL).title(self.title.clone()))
            .highlight_style(Style::new().reversed())
            .highlight_symbol(">> ");

        frame.render_stateful_widget(list, area, &mut self.state);
    }

    pub fn next(&mut self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }

        let i = self.state.selected().unwrap_or(0);
        let next = (i + 1) % self.items.len();
        self.state.select(Some(next));
        Some(next)
    }

    pub fn previous(&mut self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }

        let i = match self.state.selected() {
            Some(0) | None => self.items.len() - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
        Some(i)
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Replaces the labels; the selection is kept when still in range
    pub fn update_items(&mut self, items: Vec<String>) {
        self.items = items;
        match self.state.selected() {
            Some(i) if i < self.items.len() => {}
            _ if self.items.is_empty() => self.state.select(None),
            _ => self.state.select(Some(0)),
        }
    }
}
