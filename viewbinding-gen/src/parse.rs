use crate::{Bindings, ClassId, ElementKind, ParseError};
use log::{debug, trace};
use quick_xml::{events::BytesStart, events::Event as XEvent, reader::Reader};

fn str_lossy(bs: &[u8]) -> String {
    String::from_utf8_lossy(bs).into_owned()
}

fn attributes(e: &BytesStart<'_>, position: usize) -> Result<Vec<(String, String)>, ParseError> {
    e.attributes()
        .map(|a| {
            let a = a.map_err(|source| ParseError::Attribute { position, source })?;
            let value = a
                .unescape_value()
                .map_err(|source| ParseError::Xml { position, source })?;
            Ok((str_lossy(a.key.as_ref()), value.into_owned()))
        })
        .collect()
}

/// Scans one document and collects its bindings.
///
/// Only element-open events matter; everything else is read past. The scan is
/// strict about well-formedness so that a broken file is reported instead of
/// producing a header from half a document.
pub fn parse(xml: &[u8]) -> Result<Bindings, ParseError> {
    let mut rdr = Reader::from_reader(xml);
    rdr.trim_text(false);
    rdr.expand_empty_elements(true);
    rdr.check_end_names(true);

    let mut buf = Vec::with_capacity(1024);
    let mut open: Vec<(String, usize)> = vec![];
    let mut seen_element = false;
    let mut bindings = Bindings::default();

    loop {
        let position = rdr.buffer_position();
        let evt = rdr
            .read_event_into(&mut buf)
            .map_err(|source| ParseError::Xml { position: rdr.buffer_position(), source })?;
        match evt {
            XEvent::Start(e) => {
                seen_element = true;
                let name = e.name();
                match ElementKind::from_tag(name.as_ref()) {
                    Some(kind) => {
                        trace!("collecting <{kind}> at byte {position}");
                        let attrs = attributes(&e, position)?;
                        kind.collect_attributes(&attrs, &mut bindings);
                    }
                    None => trace!("ignoring <{}> at byte {position}", str_lossy(name.as_ref())),
                }
                open.push((str_lossy(name.as_ref()), position));
            }
            XEvent::End(_) => {
                open.pop();
            }
            XEvent::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some((name, position)) = open.pop() {
        return Err(ParseError::Unclosed { name, position });
    }
    if !seen_element {
        return Err(ParseError::Empty);
    }
    Ok(bindings)
}

/// `<object>`: records a widget when both `class` and `id` are present and
/// non-empty. The first occurrence of each attribute is the one used.
pub(crate) fn collect_object(attrs: &[(String, String)], objects: &mut Vec<ClassId>) {
    let mut class: Option<&String> = None;
    let mut id: Option<&String> = None;
    for (name, value) in attrs {
        match name.as_str() {
            "class" => {
                class.get_or_insert(value);
            }
            "id" => {
                id.get_or_insert(value);
            }
            _ => {}
        }
    }

    match (class, id) {
        (Some(class), Some(id)) if !class.is_empty() && !id.is_empty() => {
            objects.push(ClassId { class: class.clone(), id: id.clone() })
        }
        _ => debug!("skipping <object> without both class and id"),
    }
}

/// `<signal>`: records the `handler` attribute. The first `handler` wins and
/// the remaining attributes are not looked at.
pub(crate) fn collect_signal(attrs: &[(String, String)], signals: &mut Vec<String>) {
    match attrs.iter().find(|(name, _)| name == "handler") {
        Some((_, handler)) => signals.push(handler.clone()),
        None => debug!("skipping <signal> without a handler"),
    }
}
