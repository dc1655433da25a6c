use ratatui::text::{ Line, Text };

const LOGO: &str = include_str!("../../assets/logo.txt");

pub fn logo() -> Text<'static> {
  let lines: Vec<Line> = LOGO.lines().map(Line::raw).collect();
  Text::from(lines)
}

pub fn logo_height() -> u16 {
  LOGO.lines().count() as u16
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_logo_matches_height() {
    assert_eq!(logo().lines.len() as u16, logo_height());
    assert!(logo_height() > 0);
  }
}
