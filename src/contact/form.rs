use serde_json::Value;

use super::field::{ChoiceOption, Field};
use super::payload::{build_payload, INTERESTS_FIELD};

/// Ordered set of fields making up the contact form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
  fields: Vec<Field>,
}

impl ContactForm {
  pub fn new(fields: Vec<Field>) -> Self {
    Self { fields }
  }

  /// The site's inquiry form
  pub fn standard() -> Self {
    Self::new(vec![
      Field::text("nombre", "Nombre y apellido")
        .required()
        .min_len(2)
        .max_len(80),
      Field::email("email", "Email").required(),
      Field::tel("telefono", "Teléfono").pattern(r"[0-9+()\s-]{6,20}"),
      Field::select(
        "operacion",
        "Operación",
        vec![
          ChoiceOption::new("", "Seleccione una opción"),
          ChoiceOption::new("compra", "Compra"),
          ChoiceOption::new("alquiler", "Alquiler"),
          ChoiceOption::new("venta", "Venta"),
          ChoiceOption::new("tasacion", "Tasación"),
        ],
      )
      .required(),
      Field::radio(
        "contacto_preferido",
        "Medio de contacto preferido",
        vec![
          ChoiceOption::new("email", "Email"),
          ChoiceOption::new("telefono", "Teléfono"),
          ChoiceOption::new("whatsapp", "WhatsApp"),
        ],
      ),
      Field::checkbox(
        INTERESTS_FIELD,
        "Intereses",
        vec![
          ChoiceOption::new("casa", "Casa"),
          ChoiceOption::new("departamento", "Departamento"),
          ChoiceOption::new("terreno", "Terreno"),
          ChoiceOption::new("local", "Local comercial"),
        ],
      ),
      Field::textarea("mensaje", "Mensaje")
        .required()
        .min_len(10)
        .max_len(1000),
    ])
  }

  pub fn fields(&self) -> &[Field] {
    &self.fields
  }

  pub fn field(&self, name: &str) -> Option<&Field> {
    self.fields.iter().find(|f| f.name == name)
  }

  fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
    self.fields.iter_mut().find(|f| f.name == name)
  }

  /// Live edit of a single-valued field; revalidates it.
  pub fn input(&mut self, name: &str, value: String) -> bool {
    match self.field_mut(name) {
      Some(field) => {
        field.set_value(value);
        field.validate()
      }
      None => false,
    }
  }

  /// Live toggle of a group member; revalidates the whole group.
  pub fn set_checked(&mut self, name: &str, option: &str, on: bool) -> bool {
    match self.field_mut(name) {
      Some(field) => {
        field.set_checked(option, on);
        field.validate()
      }
      None => false,
    }
  }

  /// Validate every field (no short-circuit, so every invalid field gets
  /// marked) and report whether the form may be submitted.
  pub fn validate_all(&mut self) -> bool {
    self
      .fields
      .iter_mut()
      .fold(true, |ok, field| field.validate() && ok)
  }

  pub fn is_valid(&self) -> bool {
    self.fields.iter().all(Field::is_valid)
  }

  /// Form data in document order
  pub fn entries(&self) -> Vec<(String, String)> {
    self.fields.iter().flat_map(Field::entries).collect()
  }

  pub fn payload(&self) -> Value {
    build_payload(&self.entries())
  }

  /// Back to the initial empty state, statuses included
  pub fn reset(&mut self) {
    self.fields.iter_mut().for_each(Field::clear);
  }
}

impl Default for ContactForm {
  fn default() -> Self {
    Self::standard()
  }
}
