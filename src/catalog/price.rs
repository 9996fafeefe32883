//! Price rendering in the es-AR number format

/// Fraction digits kept by the es-AR locale's default number format
const MAX_FRACTION_DIGITS: u32 = 3;

/// Format a number the way `toLocaleString('es-AR')` does: `.` groups
/// thousands, `,` separates decimals, at most three decimals, trailing
/// zeros dropped.
pub fn format_es_ar(value: f64) -> String {
  if value.is_nan() {
    return "NaN".to_string();
  }
  if value.is_infinite() {
    return if value < 0.0 { "-∞" } else { "∞" }.to_string();
  }

  let scale = 10u128.pow(MAX_FRACTION_DIGITS);
  let scaled = (value.abs() * scale as f64).round() as u128;
  let integer = scaled / scale;
  let fraction = scaled % scale;

  let mut out = String::new();
  if value < 0.0 && scaled != 0 {
    out.push('-');
  }
  out.push_str(&group_thousands(integer));

  if fraction != 0 {
    let digits = format!("{:0width$}", fraction, width = MAX_FRACTION_DIGITS as usize);
    out.push(',');
    out.push_str(digits.trim_end_matches('0'));
  }
  out
}

/// `Precio $1.250.000`
pub fn price_label(value: f64) -> String {
  format!("Precio ${}", format_es_ar(value))
}

fn group_thousands(n: u128) -> String {
  let digits = n.to_string();
  let mut out = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      out.push('.');
    }
    out.push(ch);
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_group_thousands() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1000), "1.000");
    assert_eq!(group_thousands(123456789), "123.456.789");
  }
}
