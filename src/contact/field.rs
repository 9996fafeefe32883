//! Contact form fields and their constraint checks

use regex::Regex;
use std::sync::OnceLock;

/// Address syntax accepted by `<input type="email">`
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

fn email_regex() -> &'static Regex {
  static EMAIL: OnceLock<Regex> = OnceLock::new();
  EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).unwrap())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
  Text,
  Email,
  Tel,
  Select,
  TextArea,
}

impl InputKind {
  /// Value of the `type` attribute for `<input>` kinds
  pub fn input_type(self) -> &'static str {
    match self {
      InputKind::Email => "email",
      InputKind::Tel => "tel",
      _ => "text",
    }
  }
}

/// Built-in constraints, as the matching HTML attributes define them
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Constraints {
  pub required: bool,
  pub min_len: Option<usize>,
  pub max_len: Option<usize>,
  /// Whole-value pattern, like the `pattern` attribute
  pub pattern: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceKind {
  Radio,
  Checkbox,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceOption {
  pub value: String,
  pub label: String,
}

impl ChoiceOption {
  pub fn new(value: &str, label: &str) -> Self {
    Self {
      value: value.to_string(),
      label: label.to_string(),
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Control {
  /// Single-valued control. `options` is only used by selects.
  Input {
    kind: InputKind,
    constraints: Constraints,
    options: Vec<ChoiceOption>,
    value: String,
  },
  /// Radio or checkbox group sharing one name
  Choice {
    kind: ChoiceKind,
    options: Vec<ChoiceOption>,
    checked: Vec<String>,
  },
}

/// Visual state after a field has been checked at least once
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldStatus {
  #[default]
  Unchecked,
  Valid,
  Invalid,
}

impl FieldStatus {
  pub fn from_valid(valid: bool) -> Self {
    if valid {
      FieldStatus::Valid
    } else {
      FieldStatus::Invalid
    }
  }

  /// CSS class carried by the field (or the group's container)
  pub fn css_class(self) -> Option<&'static str> {
    match self {
      FieldStatus::Unchecked => None,
      FieldStatus::Valid => Some("success"),
      FieldStatus::Invalid => Some("error"),
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
  pub name: String,
  pub label: String,
  pub control: Control,
  status: FieldStatus,
}

impl Field {
  fn input(name: &str, label: &str, kind: InputKind) -> Self {
    Self {
      name: name.to_string(),
      label: label.to_string(),
      control: Control::Input {
        kind,
        constraints: Constraints::default(),
        options: Vec::new(),
        value: String::new(),
      },
      status: FieldStatus::Unchecked,
    }
  }

  fn choice(name: &str, label: &str, kind: ChoiceKind, options: Vec<ChoiceOption>) -> Self {
    Self {
      name: name.to_string(),
      label: label.to_string(),
      control: Control::Choice {
        kind,
        options,
        checked: Vec::new(),
      },
      status: FieldStatus::Unchecked,
    }
  }

  pub fn text(name: &str, label: &str) -> Self {
    Self::input(name, label, InputKind::Text)
  }

  pub fn email(name: &str, label: &str) -> Self {
    Self::input(name, label, InputKind::Email)
  }

  pub fn tel(name: &str, label: &str) -> Self {
    Self::input(name, label, InputKind::Tel)
  }

  pub fn textarea(name: &str, label: &str) -> Self {
    Self::input(name, label, InputKind::TextArea)
  }

  /// A select; an option with an empty value acts as the placeholder.
  pub fn select(name: &str, label: &str, options: Vec<ChoiceOption>) -> Self {
    let mut field = Self::input(name, label, InputKind::Select);
    if let Control::Input { options: opts, .. } = &mut field.control {
      *opts = options;
    }
    field
  }

  pub fn radio(name: &str, label: &str, options: Vec<ChoiceOption>) -> Self {
    Self::choice(name, label, ChoiceKind::Radio, options)
  }

  pub fn checkbox(name: &str, label: &str, options: Vec<ChoiceOption>) -> Self {
    Self::choice(name, label, ChoiceKind::Checkbox, options)
  }

  pub fn required(mut self) -> Self {
    if let Control::Input { constraints, .. } = &mut self.control {
      constraints.required = true;
    }
    self
  }

  pub fn min_len(mut self, n: usize) -> Self {
    if let Control::Input { constraints, .. } = &mut self.control {
      constraints.min_len = Some(n);
    }
    self
  }

  pub fn max_len(mut self, n: usize) -> Self {
    if let Control::Input { constraints, .. } = &mut self.control {
      constraints.max_len = Some(n);
    }
    self
  }

  pub fn pattern(mut self, pattern: &str) -> Self {
    if let Control::Input { constraints, .. } = &mut self.control {
      constraints.pattern = Some(pattern.to_string());
    }
    self
  }

  pub fn status(&self) -> FieldStatus {
    self.status
  }

  pub fn is_choice(&self) -> bool {
    matches!(self.control, Control::Choice { .. })
  }

  pub fn value(&self) -> &str {
    match &self.control {
      Control::Input { value, .. } => value,
      Control::Choice { .. } => "",
    }
  }

  pub fn is_checked(&self, option: &str) -> bool {
    match &self.control {
      Control::Choice { checked, .. } => checked.iter().any(|c| c == option),
      Control::Input { .. } => false,
    }
  }

  pub fn set_value(&mut self, new_value: String) {
    if let Control::Input { value, .. } = &mut self.control {
      *value = new_value;
    }
  }

  /// Check or uncheck one member of a group. Checking a radio clears the
  /// other members. Unknown options are ignored.
  pub fn set_checked(&mut self, option: &str, on: bool) {
    if let Control::Choice {
      kind,
      options,
      checked,
    } = &mut self.control
    {
      if !options.iter().any(|o| o.value == option) {
        return;
      }
      checked.retain(|c| c != option);
      if on {
        if *kind == ChoiceKind::Radio {
          checked.clear();
        }
        checked.push(option.to_string());
        // keep document order for serialization
        checked.sort_by_key(|c| options.iter().position(|o| &o.value == c));
      }
    }
  }

  /// Constraint check without touching the displayed status
  pub fn is_valid(&self) -> bool {
    match &self.control {
      Control::Input {
        kind,
        constraints,
        value,
        ..
      } => value_satisfies(*kind, constraints, value),
      Control::Choice { checked, .. } => !checked.is_empty(),
    }
  }

  /// Check the field and record the result as its status.
  pub fn validate(&mut self) -> bool {
    let valid = self.is_valid();
    self.status = FieldStatus::from_valid(valid);
    valid
  }

  pub(crate) fn clear(&mut self) {
    match &mut self.control {
      Control::Input { value, .. } => value.clear(),
      Control::Choice { checked, .. } => checked.clear(),
    }
    self.status = FieldStatus::Unchecked;
  }

  /// `(name, value)` pairs this field contributes to the submitted form
  /// data, in document order.
  pub fn entries(&self) -> Vec<(String, String)> {
    match &self.control {
      Control::Input { value, .. } => vec![(self.name.clone(), value.clone())],
      Control::Choice { checked, .. } => checked
        .iter()
        .map(|c| (self.name.clone(), c.clone()))
        .collect(),
    }
  }
}

/// Constraint validation of a single-valued control. An empty value only
/// fails `required`; length, type and pattern checks apply to non-empty
/// values.
pub fn value_satisfies(kind: InputKind, constraints: &Constraints, value: &str) -> bool {
  if value.is_empty() {
    return !constraints.required;
  }

  let len = value.chars().count();
  if constraints.min_len.is_some_and(|min| len < min) {
    return false;
  }
  if constraints.max_len.is_some_and(|max| len > max) {
    return false;
  }
  if kind == InputKind::Email && !email_regex().is_match(value) {
    return false;
  }
  if let Some(pattern) = &constraints.pattern {
    // Browsers skip patterns that do not compile
    if let Ok(re) = Regex::new(&format!("^(?:{})$", pattern)) {
      if !re.is_match(value) {
        return false;
      }
    }
  }
  true
}
