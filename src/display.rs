//! Display Helpers
//!
//! Text formatting shared by cards, the filter bar and the detail view.

/// Upper-case the first character: "grass" -> "Grass"
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Attribute key to label: "special_attack" -> "special attack"
pub fn attribute_label(key: &str) -> String {
    key.replace('_', " ")
}

/// Attribute value without a trailing ".0" for whole numbers
pub fn format_attribute(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Display index badge: "#25"
pub fn display_index(index: u32) -> String {
    format!("#{}", index)
}
