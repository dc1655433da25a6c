use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::model::{Action, Source};

/// Characters escaped in the `cmd` query value. `/` and `=` must stay
/// verbatim, the soundbar firmware does not decode them.
const UIC_COMMAND: &AsciiSet = &CONTROLS
  .add(b' ')
  .add(b'"')
  .add(b'<')
  .add(b'>')
  .add(b'#')
  .add(b'%')
  .add(b'&')
  .add(b'+')
  .add(b'?')
  .add(b'`')
  .add(b'{')
  .add(b'}');

#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
  Int(i64),
  Str(String),
}

impl ParamValue {
  pub fn type_tag(&self) -> &'static str {
    match self {
      ParamValue::Int(_) => "int",
      ParamValue::Str(_) => "str",
    }
  }

  fn to_attribute(&self) -> String {
    match self {
      ParamValue::Int(value) => value.to_string(),
      ParamValue::Str(value) => html_escape::encode_double_quoted_attribute(value).into_owned(),
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
  pub name: &'static str,
  pub value: ParamValue,
}

/// One UIC request, e.g. `<name>SetMute</name><p type="str" name="mute" val="on"/>`
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
  action: Action,
  params: Vec<Param>,
}

impl Command {
  pub fn new(action: Action) -> Self {
    Self { action, params: Vec::new() }
  }

  pub fn with_param(mut self, name: &'static str, value: ParamValue) -> Self {
    self.params.push(Param { name, value });
    self
  }

  pub fn set_volume(percent: u8) -> Self {
    Self::new(Action::SetVolume).with_param("volume", ParamValue::Int(percent.into()))
  }

  pub fn set_mute(muted: bool) -> Self {
    let value = if muted { "on" } else { "off" };
    Self::new(Action::SetMute).with_param("mute", ParamValue::Str(value.to_string()))
  }

  pub fn set_func(source: Source) -> Self {
    Self::new(Action::SetFunc).with_param("function", ParamValue::Str(source.as_str().to_string()))
  }

  pub fn power(on: bool) -> Self {
    Self::new(if on { Action::PowerOn } else { Action::PowerOff })
  }

  pub fn action(&self) -> Action {
    self.action
  }

  pub fn params(&self) -> &[Param] {
    &self.params
  }

  /// Unencoded pseudo-XML form
  pub fn fragment(&self) -> String {
    let mut fragment = format!("<name>{}</name>", self.action.name());
    for param in &self.params {
      fragment.push_str(&format!(
        "<p type=\"{}\" name=\"{}\" val=\"{}\"/>",
        param.value.type_tag(),
        param.name,
        param.value.to_attribute()
      ));
    }
    fragment
  }

  /// Form appended to the endpoint's `/UIC?cmd=` base
  pub fn encode(&self) -> String {
    utf8_percent_encode(&self.fragment(), UIC_COMMAND).to_string()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_get_command_encoding() {
    let command = Command::new(Action::GetVolume);

    assert_eq!(command.fragment(), "<name>GetVolume</name>");
    assert_eq!(command.encode(), "%3Cname%3EGetVolume%3C/name%3E");
  }

  #[test]
  fn test_set_volume_encoding() {
    let command = Command::set_volume(50);

    assert_eq!(
      command.encode(),
      "%3Cname%3ESetVolume%3C/name%3E%3Cp%20type=%22int%22%20name=%22volume%22%20val=%2250%22/%3E"
    );
  }

  #[test]
  fn test_set_mute_encoding() {
    assert_eq!(
      Command::set_mute(true).encode(),
      "%3Cname%3ESetMute%3C/name%3E%3Cp%20type=%22str%22%20name=%22mute%22%20val=%22on%22/%3E"
    );
    assert_eq!(
      Command::set_mute(false).fragment(),
      "<name>SetMute</name><p type=\"str\" name=\"mute\" val=\"off\"/>"
    );
  }

  #[test]
  fn test_set_func_encoding() {
    assert_eq!(
      Command::set_func(Source::Optical).encode(),
      "%3Cname%3ESetFunc%3C/name%3E%3Cp%20type=%22str%22%20name=%22function%22%20val=%22optical%22/%3E"
    );
  }

  #[test]
  fn test_power_commands() {
    assert_eq!(Command::power(true).encode(), "%3Cname%3EPowerOn%3C/name%3E");
    assert_eq!(Command::power(false).encode(), "%3Cname%3EPowerOff%3C/name%3E");
  }

  #[test]
  fn test_string_values_are_attribute_escaped() {
    let command = Command::new(Action::SetFunc)
      .with_param("function", ParamValue::Str("a\"b&c".to_string()));

    assert_eq!(
      command.fragment(),
      "<name>SetFunc</name><p type=\"str\" name=\"function\" val=\"a&quot;b&amp;c\"/>"
    );
    assert!(!command.encode().contains('"'));
    assert!(!command.encode().contains('&'));
  }

  #[test]
  fn test_params_are_kept_in_order() {
    let command = Command::new(Action::SetVolume)
      .with_param("volume", ParamValue::Int(10))
      .with_param("channel", ParamValue::Str("all".to_string()));

    assert_eq!(command.params().len(), 2);
    assert_eq!(command.params()[0].name, "volume");
    assert_eq!(command.params()[1].value.type_tag(), "str");
  }
}
