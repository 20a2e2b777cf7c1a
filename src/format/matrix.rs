use std::fmt;

/// `[a, b, c]` using each entry's `Display`.
pub fn format_vector<T: fmt::Display>(v: &[T]) -> String {
    bracketed(v.iter().map(ToString::to_string))
}

/// `[[a, b], [c, d]]` using each entry's `Display`.
pub fn format_matrix<T: fmt::Display, const C: usize>(m: &[[T; C]]) -> String {
    bracketed(m.iter().map(|row| format_vector(row)))
}

/// Like `format_vector`, but whole floats keep their fractional part (`2.0`, not `2`).
pub fn format_real_vector(v: &[f64]) -> String {
    bracketed(v.iter().map(|x| format!("{x:?}")))
}

pub fn format_real_matrix<const C: usize>(m: &[[f64; C]]) -> String {
    bracketed(m.iter().map(|row| format_real_vector(row)))
}

fn bracketed(items: impl Iterator<Item = String>) -> String {
    format!("[{}]", items.collect::<Vec<_>>().join(", "))
}
