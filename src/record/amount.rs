use serde::{Deserialize, Deserializer};

/// Currency markers accepted in front of an amount. Longer prefixes first.
const CURRENCY_PREFIXES: &[&str] = &["Rs.", "Rs", "INR", "₹", "$"];

/// Parse a form-style amount such as `"1,250.00"`, `"₹ 300"` or `"(1,200.00)"`.
///
/// Anything that does not parse to a finite number becomes `0.0`.
pub fn coerce_amount(input: &str) -> f64 {
    match parse_amount(input) {
        Some(value) => value,
        None => {
            tracing::warn!(input, "unparsable amount coerced to 0");
            0.0
        }
    }
}

fn parse_amount(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if let Ok(value) = trimmed.parse::<f64>() {
        return value.is_finite().then_some(value);
    }

    // Accounting negatives: "(1,200.00)"
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'));
    let (parenthesized, body) = match inner {
        Some(inner) => (true, inner.trim()),
        None => (false, trimmed),
    };
    let (minus, body) = match body.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, body),
    };
    let body = CURRENCY_PREFIXES
        .iter()
        .find_map(|prefix| body.strip_prefix(prefix))
        .unwrap_or(body)
        .trim();

    if !body.starts_with(|c: char| c.is_ascii_digit())
        || !body.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | ','))
    {
        return None;
    }
    let value = body.replace(',', "").parse::<f64>().ok()?;
    if !value.is_finite() || (parenthesized && minus) {
        return None;
    }
    Some(if parenthesized || minus { -value } else { value })
}

/// Serde adapter accepting either a number or a string for amount fields.
pub fn lenient_amount<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(value) if value.is_finite() => value,
        Raw::Number(value) => {
            tracing::warn!(value, "non-finite amount coerced to 0");
            0.0
        }
        Raw::Text(text) => coerce_amount(&text),
    })
}
