//! C++ macro renderer
//!
//! Each reflected class becomes a helper macro named after its marker line
//! (`__DEF_CLASS_HELPER_L_<line>()`), expanded by the class marker inside
//! the class body. The macro defines a static accessor and a virtual one;
//! the static accessor builds its class data once through a function-local
//! static, whose initialisation the compiler guards across threads.

use std::path::Path;

use crate::config::CodegenConfig;
use crate::features::codegen::ports::MetadataRenderer;
use crate::features::correlation::{ClassMetadata, PropertyMetadata};

const INDENT: &str = "    ";

#[derive(Debug, Clone)]
pub struct CppMacroRenderer {
    config: CodegenConfig,
}

impl CppMacroRenderer {
    pub fn new(config: CodegenConfig) -> Self {
        Self { config }
    }

    /// Macro expanded by the class marker on `marker_line`
    pub fn helper_macro_name(&self, marker_line: u32) -> String {
        format!("{}{}", self.config.helper_macro_prefix, marker_line)
    }

    fn property_entry(&self, class_name: &str, property: &PropertyMetadata) -> String {
        let name_type = &self.config.name_type;
        format!(
            "data.Properties.push_back({{ {name_type}(\"{}\"), {name_type}(\"{}\"), offsetof({class_name}, {}) }});",
            escape_literal(&property.field_name),
            escape_literal(&property.type_spelling),
            property.field_name,
        )
    }
}

impl Default for CppMacroRenderer {
    fn default() -> Self {
        Self::new(CodegenConfig::default())
    }
}

impl MetadataRenderer for CppMacroRenderer {
    fn render_class(&self, class: &ClassMetadata) -> String {
        let data_type = &self.config.class_data_type;
        let name = &class.name;
        let body = |depth: usize, text: &str| format!("{}{}", INDENT.repeat(depth), text);

        let mut lines = vec![
            format!("#define {}()", self.helper_macro_name(class.marker_line)),
            body(1, &format!("static const {data_type}& GetClassDataStatic()")),
            body(1, "{"),
            body(2, &format!("static const {data_type} classData = []()")),
            body(2, "{"),
            body(3, &format!("{data_type} data;")),
            body(3, &format!("data.Name = \"{}\";", escape_literal(name))),
            body(3, &format!("data.Size = sizeof({name});")),
        ];
        lines.extend(
            class
                .properties
                .iter()
                .map(|p| body(3, &self.property_entry(name, p))),
        );
        lines.extend([
            body(3, "return data;"),
            body(2, "}();"),
            body(2, "return classData;"),
            body(1, "}"),
            INDENT.to_string(),
            body(1, &format!("virtual const {data_type}& GetClassData() const override")),
            body(1, "{"),
            body(2, "return GetClassDataStatic();"),
            body(1, "}"),
        ]);
        continued(&lines)
    }

    fn render_file(&self, source: &Path, blocks: &[String]) -> String {
        let file_name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut out = format!("// Generated by reflgen from {file_name}. Do not edit.\n#pragma once\n");
        if !blocks.is_empty() {
            out.push_str("\n#include <cstddef>\n");
        }
        for block in blocks {
            out.push('\n');
            out.push_str(block);
            out.push('\n');
        }
        out
    }

    fn render_registry(&self, type_names: &[String]) -> String {
        let mut lines = vec![format!("#define {}(registrar)", self.config.registry_macro)];
        lines.extend(type_names.iter().map(|ty| {
            format!(
                "{INDENT}(registrar).{}<{ty}>();",
                self.config.registration_call
            )
        }));

        format!(
            "// Generated by reflgen. Do not edit.\n#pragma once\n\n{}\n",
            continued(&lines)
        )
    }

    fn target_name(&self) -> &'static str {
        "c++"
    }
}

/// Join macro lines with trailing line continuations
fn continued(lines: &[String]) -> String {
    lines.join(" \\\n")
}

fn escape_literal(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
