use std::collections::HashMap;

use axum_template::engine::Engine;
use tera::{Tera, Value};

pub type AppEngine = Engine<Tera>;

pub const DASHBOARD: &str = "dashboard.html";

pub fn templates() -> tera::Result<AppEngine> {
    tera().map(Engine::from)
}

/// Compiles the templates embedded in the binary and registers the custom filters.
pub(crate) fn tera() -> tera::Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../../templates/base.html")),
        (DASHBOARD, include_str!("../../templates/dashboard.html")),
    ])?;
    tera.register_filter("thousands", thousands);

    Ok(tera)
}

fn thousands(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let number = value.as_u64().ok_or_else(|| {
        tera::Error::msg(format!("`thousands` expects an unsigned integer, got {value}"))
    })?;

    Ok(Value::String(group_digits(number)))
}

/// `1234567` becomes `1,234,567`.
pub fn group_digits(number: u64) -> String {
    let digits = number.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
