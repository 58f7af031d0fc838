//! View binding generator for GTK `.ui` template files.
//!
//! A `.ui` document is scanned for `<object class=".." id="..">` and
//! `<signal handler="..">` elements, and a C header is rendered that binds
//! the named widgets into a struct and registers the signal callbacks.

mod element;
pub use element::ElementKind;
mod error;
pub use error::{ConfigError, Error, FileError, ParseError};
mod parse;
pub use parse::parse;
mod generate;
pub use generate::generate;
mod util;
pub use util::{base_name, output_file_name, struct_name};
pub mod config;
pub use config::{ApplicationId, Config};
pub mod pipeline;

/// A widget declared with both a `class` and an `id` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassId {
    pub class: String,
    pub id: String,
}

/// Everything collected from one document, in document order.
///
/// A fresh value is built for every file and dropped once its header has been
/// rendered, so nothing leaks from one file into the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    pub objects: Vec<ClassId>,
    pub signals: Vec<String>,
}

impl Bindings {
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty() && self.signals.is_empty()
    }
}

/// A rendered header and the name it should be written under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewBindingFile {
    pub file_name: String,
    pub contents: String,
}

/// Scans `xml` and renders the header for the `.ui` file called `file_name`.
pub fn gen_view_binding(
    application_id: &ApplicationId,
    file_name: &str,
    xml: &[u8],
) -> Result<ViewBindingFile, Error> {
    let bindings = parse(xml)?;
    if bindings.is_empty() {
        log::debug!("{file_name}: no objects or signals to bind");
    }
    let base = base_name(file_name);
    let contents = generate(application_id, &base, &bindings)?;
    Ok(ViewBindingFile {
        file_name: output_file_name(&base),
        contents,
    })
}
