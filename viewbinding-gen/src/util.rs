use std::fmt::{self, Display};

/// Normalized stem of a `.ui` file name: everything from the last `.` is
/// dropped, `-` becomes `_` and ASCII letters are lowercased.
pub fn base_name(file_name: &str) -> String {
    let stem = match file_name.rfind('.') {
        Some(dot) => &file_name[..dot],
        None => file_name,
    };
    stem.replace('-', "_").to_ascii_lowercase()
}

pub fn output_file_name(base_name: &str) -> String {
    format!("{base_name}_viewbinding.h")
}

/// `main_window` becomes `MainWindowBinding`.
pub fn struct_name(base_name: &str) -> String {
    format!("{}Binding", PascalCase(base_name))
}

/// Splits on `_`, drops empty segments and uppercases the first ASCII letter
/// of each one.
pub(crate) struct PascalCase<'d>(pub &'d str);

impl Display for PascalCase<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for seg in self.0.split('_').filter(|s| !s.is_empty()) {
            let mut chars = seg.chars();
            if let Some(first) = chars.next() {
                write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str())?;
            }
        }
        Ok(())
    }
}
