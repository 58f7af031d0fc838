use crate::generate::{gen_objects, gen_signals, Gen};
use crate::parse::{collect_object, collect_signal};
use crate::Bindings;
use std::fmt;

/// The element tags that contribute to a view binding.
///
/// Every other tag is ignored by the scanner. Adding a kind means adding a
/// variant here together with its collector and emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Object,
    Signal,
}

impl ElementKind {
    /// Registration order. Sections are rendered in this order.
    pub const ALL: [ElementKind; 2] = [ElementKind::Object, ElementKind::Signal];

    pub fn from_tag(tag: &[u8]) -> Option<ElementKind> {
        match tag {
            b"object" => Some(ElementKind::Object),
            b"signal" => Some(ElementKind::Signal),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            ElementKind::Object => "object",
            ElementKind::Signal => "signal",
        }
    }

    /// Records whatever this element contributes, given its attributes in
    /// document order.
    pub fn collect_attributes(self, attrs: &[(String, String)], bindings: &mut Bindings) {
        match self {
            ElementKind::Object => collect_object(attrs, &mut bindings.objects),
            ElementKind::Signal => collect_signal(attrs, &mut bindings.signals),
        }
    }

    /// Emits this kind's section. Emits nothing when no element of this kind
    /// was collected.
    pub(crate) fn emit_code(self, g: &mut Gen<'_>, bindings: &Bindings) -> fmt::Result {
        match self {
            ElementKind::Object => gen_objects(g, &bindings.objects),
            ElementKind::Signal => gen_signals(g, &bindings.signals),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
