use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{Result, SoundbarError};

/// Text of the first element named `tag` anywhere in `xml`.
///
/// Matching uses the local name only, so `<u:volume>` matches `volume` and the
/// element may sit at any depth. Only the element's own text is collected,
/// text of nested children is skipped. An empty element yields `Some("")`.
pub fn find_element_text(xml: &str, tag: &str) -> Result<Option<String>> {
  let mut reader = Reader::from_str(xml);
  reader.config_mut().trim_text(true);

  loop {
    match reader.read_event() {
      Ok(Event::Start(e)) if e.local_name().as_ref() == tag.as_bytes() => {
        return read_own_text(&mut reader, tag).map(Some);
      }
      Ok(Event::Empty(e)) if e.local_name().as_ref() == tag.as_bytes() => {
        return Ok(Some(String::new()));
      }
      Ok(Event::Eof) => return Ok(None),
      Ok(_) => {}
      Err(e) => return Err(SoundbarError::ParseError(format!("malformed XML: {}", e))),
    }
  }
}

/// Like [`find_element_text`], but a missing element is an error
pub fn require_element_text(xml: &str, tag: &str) -> Result<String> {
  find_element_text(xml, tag)?.ok_or_else(|| SoundbarError::MissingElement(tag.to_string()))
}

fn read_own_text(reader: &mut Reader<&[u8]>, tag: &str) -> Result<String> {
  let mut text = String::new();
  let mut depth = 0usize;

  loop {
    match reader.read_event() {
      Ok(Event::Text(t)) if depth == 0 => {
        let unescaped = t
          .unescape()
          .map_err(|e| SoundbarError::ParseError(format!("bad text in <{}>: {}", tag, e)))?;
        text.push_str(&unescaped);
      }
      Ok(Event::CData(c)) if depth == 0 => {
        let raw = c.into_inner();
        let value = std::str::from_utf8(&raw)
          .map_err(|e| SoundbarError::ParseError(format!("bad text in <{}>: {}", tag, e)))?;
        text.push_str(value);
      }
      Ok(Event::Start(_)) => depth += 1,
      Ok(Event::End(_)) if depth == 0 => return Ok(text.trim().to_string()),
      Ok(Event::End(_)) => depth -= 1,
      Ok(Event::Eof) => {
        return Err(SoundbarError::ParseError(format!("document ended inside <{}>", tag)));
      }
      Ok(_) => {}
      Err(e) => return Err(SoundbarError::ParseError(format!("malformed XML: {}", e))),
    }
  }
}
