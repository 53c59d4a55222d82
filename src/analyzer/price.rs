use crate::model::PriceValue;

const THOUSANDS_SEPARATORS: [char; 2] = [',', '٬'];

/// Applies the configured markup to numeric model fields and passes descriptive text through.
#[derive(Debug, Clone, Copy)]
pub struct PriceNormalizer {
    markup_factor: f64,
}

impl PriceNormalizer {
    pub fn new(markup_factor: f64) -> Self {
        Self { markup_factor }
    }

    pub fn parse(&self, model: &str) -> PriceValue {
        let cleaned = strip_separators(model);
        if cleaned.chars().any(char::is_alphabetic) {
            return PriceValue::Text(cleaned);
        }

        let ascii: String = cleaned.chars().map(to_ascii_digit).collect();
        match ascii.parse::<f64>() {
            Ok(value) if value.is_finite() => PriceValue::Numeric(value),
            _ => PriceValue::Text(cleaned),
        }
    }

    pub fn normalize(&self, model: &str) -> String {
        match self.parse(model) {
            PriceValue::Numeric(value) => format_grouped(value * self.markup_factor),
            PriceValue::Text(text) => text,
        }
    }
}

fn strip_separators(text: &str) -> String {
    text.chars()
        .filter(|c| !THOUSANDS_SEPARATORS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Maps Persian and Arabic-Indic digits to ASCII, leaving everything else alone.
fn to_ascii_digit(c: char) -> char {
    let zero = match c {
        '۰'..='۹' => '۰',
        '٠'..='٩' => '٠',
        _ => return c,
    };
    let offset = c as u32 - zero as u32;
    char::from_digit(offset, 10).unwrap_or(c)
}

/// Rounds half-to-even to a whole number and groups digits by thousands with `,`.
pub fn format_grouped(value: f64) -> String {
    let rounded = value.round_ties_even();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    // Negative values that round to zero keep their sign ("-0").
    if rounded.is_sign_negative() {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
