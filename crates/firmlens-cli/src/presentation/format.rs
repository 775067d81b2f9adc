use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use firmlens_engine::{ParseWarnings, Value};

use crate::args::OutputFormat;

/// Section heading, bold when stdout is a terminal.
pub fn heading(text: &str) -> String {
    if std::io::stdout().is_terminal() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// Thousands-separated number with one decimal place: 12345.6 → "12,345.6".
pub fn format_hours(value: f64) -> String {
    group_thousands(&format!("{:.1}", value))
}

pub fn format_money(value: f64) -> String {
    format!("${}", group_thousands(&format!("{:.2}", value)))
}

pub fn format_pct(value: f64) -> String {
    format!("{:.1}%", value)
}

pub fn format_rate(value: f64) -> String {
    format!("${:.2}/hr", value)
}

/// Render an aggregate cell for table output. Null is shown as "-".
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::Text(s) => s.clone(),
        Value::Number(n) => {
            if n.fract() == 0.0 {
                format!("{}", *n as i64)
            } else {
                format!("{:.2}", n)
            }
        }
    }
}

/// Non-fatal load warnings go to stderr as a single notice, never to the
/// JSON payload.
pub fn warn_parse_failures(format: OutputFormat, warnings: &ParseWarnings) {
    if format == OutputFormat::Json || warnings.is_clean() {
        return;
    }
    eprintln!(
        "Warning: {} cells failed coercion ({} numeric, {} date, {} rows skipped)",
        warnings.total(),
        warnings.numeric_cells,
        warnings.date_cells,
        warnings.skipped_rows
    );
}

fn group_thousands(formatted: &str) -> String {
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted, None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}
