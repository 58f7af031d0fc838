use crate::util::struct_name;
use crate::{ApplicationId, Bindings, ClassId, ElementKind};
use std::fmt::{self, Write};

macro_rules! emit {
    ($($t:tt)*) => {{
        write!($($t)*)?
    }};
}
macro_rules! emitln {
    ($($t:tt)*) => {{
        writeln!($($t)*)?
    }};
}

/// Output buffer for one header. Owned by a single `generate` call and handed
/// back by value once complete.
pub(crate) struct Gen<'g> {
    out: String,
    base_name: &'g str,
}

impl Gen<'_> {
    fn finish(self) -> String {
        self.out
    }
}

impl Write for Gen<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.out.push_str(s);
        Ok(())
    }
}

const BANNER: &str = "/* Generated By View Binding Code Generator, Do Not Edit By Hand */";

const UTILS_GUARD: &str = "VIEW_BINDING_INSIDE_UTILS";

const UTILS: &str = r#"#define view_binding_full(widget_class, WidgetType, BindingType, binding_name, widget_name) \
	gtk_widget_class_bind_template_child_full(GTK_WIDGET_CLASS(widget_class), #widget_name, FALSE, G_STRUCT_OFFSET(WidgetType, binding_name) + G_STRUCT_OFFSET(BindingType, widget_name));

#define view_binding_full_private(widget_class, WidgetType, BindingType, binding_name, widget_name) \
	gtk_widget_class_bind_template_child_full(GTK_WIDGET_CLASS(widget_class), #widget_name, FALSE, G_PRIVATE_OFFSET(WidgetType, binding_name) + G_STRUCT_OFFSET(BindingType, widget_name));
"#;

struct Guard<'a>(&'a ApplicationId, &'a str);

impl fmt::Display for Guard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_VIEW_BINDING_H_", self.0, self.1)
    }
}

/// Renders the header for one document. Identical inputs give identical
/// output.
pub fn generate(
    application_id: &ApplicationId,
    base_name: &str,
    bindings: &Bindings,
) -> Result<String, fmt::Error> {
    let mut g = Gen { out: String::with_capacity(4096), base_name };
    let guard = Guard(application_id, base_name);

    emitln!(g, "{BANNER}");
    emitln!(g);
    emitln!(g, "#ifndef {guard}");
    emitln!(g, "#define {guard}");
    emitln!(g);
    gen_utils(&mut g)?;

    for kind in ElementKind::ALL {
        kind.emit_code(&mut g, bindings)?;
    }

    emitln!(g);
    emitln!(g, "#endif /* {guard} */");
    Ok(g.finish())
}

fn gen_utils(g: &mut Gen<'_>) -> fmt::Result {
    emitln!(g, "#ifndef {UTILS_GUARD}");
    emitln!(g, "#define {UTILS_GUARD}");
    emitln!(g);
    emitln!(g, "{UTILS}");
    emitln!(g, "#endif /* {UTILS_GUARD} */");
    Ok(())
}

fn gen_bind_macro(
    g: &mut Gen<'_>,
    name: &str,
    full: &str,
    binding: &str,
    objects: &[ClassId],
) -> fmt::Result {
    let base = g.base_name;
    emitln!(g);
    emitln!(g, "#define {base}_{name}(widget_class, WidgetType, binding_name) \\");
    emitln!(g, "\tdo {{ \\");
    for ClassId { id, .. } in objects {
        emitln!(g, "\t\t{full}(widget_class, WidgetType, {binding}, binding_name, {id}) \\");
    }
    emitln!(g, "\t}} while(0) ");
    Ok(())
}

/// Binding struct plus the public and private bind macros.
pub(crate) fn gen_objects(g: &mut Gen<'_>, objects: &[ClassId]) -> fmt::Result {
    if objects.is_empty() {
        return Ok(());
    }
    let binding = struct_name(g.base_name);
    emitln!(g);
    emitln!(g, "/* Class Bindings */");
    emitln!(g, "typedef struct {{");
    for ClassId { class, id } in objects {
        emitln!(g, "\t{class} *{id};");
    }
    emit!(g, "}} {binding};\n");

    gen_bind_macro(g, "view_binding", "view_binding_full", &binding, objects)?;
    gen_bind_macro(g, "view_binding_private", "view_binding_full_private", &binding, objects)
}

/// Callback registration macro, one line per handler.
pub(crate) fn gen_signals(g: &mut Gen<'_>, handlers: &[String]) -> fmt::Result {
    if handlers.is_empty() {
        return Ok(());
    }
    let base = g.base_name;
    emitln!(g);
    emitln!(g, "/* Signal Handlers */");
    emitln!(g, "#define {base}_view_binding_callback(widget_class) \\");
    emitln!(g, "\tdo {{ \\");
    for handler in handlers {
        emitln!(
            g,
            "\t\tgtk_widget_class_bind_template_callback(GTK_WIDGET_CLASS(widget_class), {handler}); \\"
        );
    }
    emitln!(g, "\t}} while(0) ");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRELUDE: &str = "/* Generated By View Binding Code Generator, Do Not Edit By Hand */

#ifndef com_example_App_window_VIEW_BINDING_H_
#define com_example_App_window_VIEW_BINDING_H_

#ifndef VIEW_BINDING_INSIDE_UTILS
#define VIEW_BINDING_INSIDE_UTILS

#define view_binding_full(widget_class, WidgetType, BindingType, binding_name, widget_name) \\
\tgtk_widget_class_bind_template_child_full(GTK_WIDGET_CLASS(widget_class), #widget_name, FALSE, G_STRUCT_OFFSET(WidgetType, binding_name) + G_STRUCT_OFFSET(BindingType, widget_name));

#define view_binding_full_private(widget_class, WidgetType, BindingType, binding_name, widget_name) \\
\tgtk_widget_class_bind_template_child_full(GTK_WIDGET_CLASS(widget_class), #widget_name, FALSE, G_PRIVATE_OFFSET(WidgetType, binding_name) + G_STRUCT_OFFSET(BindingType, widget_name));

#endif /* VIEW_BINDING_INSIDE_UTILS */
";

    fn app_id() -> ApplicationId {
        ApplicationId::new("com_example_App").unwrap()
    }

    fn class_id(class: &str, id: &str) -> ClassId {
        ClassId { class: class.into(), id: id.into() }
    }

    #[test]
    fn empty_bindings_render_guards_and_utils_only() {
        let out = generate(&app_id(), "window", &Bindings::default()).unwrap();
        let expected = format!("{PRELUDE}\n#endif /* com_example_App_window_VIEW_BINDING_H_ */\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn renders_struct_bind_macros_and_callbacks() {
        let bindings = Bindings {
            objects: vec![class_id("GtkButton", "submit_btn"), class_id("GtkLabel", "status")],
            signals: vec!["on_submit_clicked".into()],
        };
        let out = generate(&app_id(), "window", &bindings).unwrap();
        let expected = format!(
            "{PRELUDE}
/* Class Bindings */
typedef struct {{
\tGtkButton *submit_btn;
\tGtkLabel *status;
}} WindowBinding;

#define window_view_binding(widget_class, WidgetType, binding_name) \\
\tdo {{ \\
\t\tview_binding_full(widget_class, WidgetType, WindowBinding, binding_name, submit_btn) \\
\t\tview_binding_full(widget_class, WidgetType, WindowBinding, binding_name, status) \\
\t}} while(0)\x20

#define window_view_binding_private(widget_class, WidgetType, binding_name) \\
\tdo {{ \\
\t\tview_binding_full_private(widget_class, WidgetType, WindowBinding, binding_name, submit_btn) \\
\t\tview_binding_full_private(widget_class, WidgetType, WindowBinding, binding_name, status) \\
\t}} while(0)\x20

/* Signal Handlers */
#define window_view_binding_callback(widget_class) \\
\tdo {{ \\
\t\tgtk_widget_class_bind_template_callback(GTK_WIDGET_CLASS(widget_class), on_submit_clicked); \\
\t}} while(0)\x20

#endif /* com_example_App_window_VIEW_BINDING_H_ */
"
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn signals_without_objects_emit_no_struct() {
        let bindings = Bindings { objects: vec![], signals: vec!["on_a".into(), "on_b".into()] };
        let out = generate(&app_id(), "window", &bindings).unwrap();
        assert!(!out.contains("typedef struct"));
        assert!(!out.contains("window_view_binding("));
        let a = out.find("callback(GTK_WIDGET_CLASS(widget_class), on_a);").unwrap();
        let b = out.find("callback(GTK_WIDGET_CLASS(widget_class), on_b);").unwrap();
        assert!(a < b);
    }

    #[test]
    fn fields_follow_document_order() {
        let bindings = Bindings {
            objects: vec![class_id("T", "a"), class_id("T", "b"), class_id("T", "c")],
            signals: vec![],
        };
        let out = generate(&app_id(), "window", &bindings).unwrap();
        let fields: Vec<_> = out.lines().filter(|l| l.starts_with("\tT *")).collect();
        assert_eq!(fields, ["\tT *a;", "\tT *b;", "\tT *c;"]);
        let binds: Vec<_> = out
            .lines()
            .filter(|l| l.contains("view_binding_full(widget_class, WidgetType, WindowBinding"))
            .collect();
        assert_eq!(binds.len(), 3);
        assert!(binds[0].contains(", a)") && binds[1].contains(", b)") && binds[2].contains(", c)"));
    }

    #[test]
    fn guard_keeps_application_id_case() {
        let id = ApplicationId::new("app_example_Demo").unwrap();
        let out = generate(&id, "my_window", &Bindings::default()).unwrap();
        assert!(out.contains("#ifndef app_example_Demo_my_window_VIEW_BINDING_H_\n"));
        assert!(out.ends_with("#endif /* app_example_Demo_my_window_VIEW_BINDING_H_ */\n"));

        let id = ApplicationId::new("APP_EXAMPLE_DEMO").unwrap();
        let out = generate(&id, "window", &Bindings::default()).unwrap();
        assert!(out.contains("#define APP_EXAMPLE_DEMO_window_VIEW_BINDING_H_\n"));
    }

    #[test]
    fn output_is_deterministic() {
        let bindings = Bindings {
            objects: vec![class_id("GtkButton", "ok")],
            signals: vec!["on_ok".into()],
        };
        let first = generate(&app_id(), "dialog", &bindings).unwrap();
        let second = generate(&app_id(), "dialog", &bindings).unwrap();
        assert_eq!(first, second);
    }
}
