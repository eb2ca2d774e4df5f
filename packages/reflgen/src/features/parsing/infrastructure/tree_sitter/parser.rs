//! Tree-sitter C++ declaration parser
//!
//! This is where the tree-sitter dependency lives. Produces a flattened
//! translation unit: `#include`d headers found on the search path are parsed
//! in turn and their declarations spliced in place of the directive, once
//! per unit.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use tracing::{debug, trace, warn};
use tree_sitter::{Node, Parser as TSParser};

use crate::features::annotation::AnnotationScanner;
use crate::features::parsing::domain::{
    DeclKind, Declaration, ParseDiagnostic, ParsedUnit,
};
use crate::features::parsing::ports::DeclarationParser;
use crate::shared::models::{ReflgenError, Result, SourceLocation};
use crate::shared::utils::path::normalize;
use crate::shared::utils::tree_sitter::{
    children_by_field, count_errors, find_child_by_kind, named_children, node_text,
    normalized_text, start_line,
};

/// Node kinds whose declarations are lifted into the enclosing level
const TRANSPARENT_KINDS: &[&str] = &[
    "template_declaration",
    "linkage_specification",
    "declaration_list",
    "preproc_if",
    "preproc_ifdef",
    "preproc_else",
    "preproc_elif",
    "preproc_elifdef",
    "ERROR",
];

/// Tree-sitter based C++ declaration parser
pub struct CppDeclarationParser {
    include_dirs: Vec<PathBuf>,
    /// Blanks marker lines before parsing
    scanner: AnnotationScanner,
}

/// Per-unit parse state
struct UnitState {
    parser: TSParser,
    included: FxHashSet<PathBuf>,
    included_files: Vec<PathBuf>,
    diagnostics: Vec<ParseDiagnostic>,
}

/// The file currently being converted
struct FileCtx<'s> {
    path: &'s Path,
    source: &'s str,
}

impl CppDeclarationParser {
    pub fn new(include_dirs: Vec<PathBuf>, scanner: AnnotationScanner) -> Self {
        Self {
            include_dirs: include_dirs.iter().map(|d| normalize(d)).collect(),
            scanner,
        }
    }

    /// Replace marker lines with empty lines, keeping line numbering intact
    fn mask_markers(&self, source: &str) -> String {
        source
            .split('\n')
            .map(|line| if self.scanner.is_marker_line(line) { "" } else { line })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Parse one file and convert its top-level declarations
    fn parse_file(&self, path: &Path, state: &mut UnitState) -> Result<Vec<Declaration>> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ReflgenError::io_at(path, "read source", e))?;
        let source = self.mask_markers(&raw);

        let tree = state
            .parser
            .parse(&source, None)
            .ok_or_else(|| ReflgenError::parse("Failed to parse source code").with_path(path))?;

        let root = tree.root_node();
        let error_count = count_errors(&root);
        if error_count > 0 {
            warn!(file = %path.display(), errors = error_count, "syntax errors in header, continuing with recovered tree");
            state.diagnostics.push(ParseDiagnostic {
                file: path.to_path_buf(),
                error_count,
            });
        }

        let file = FileCtx {
            path,
            source: &source,
        };
        let mut out = Vec::new();
        for child in named_children(&root) {
            self.collect(&child, &file, false, state, &mut out)?;
        }
        Ok(out)
    }

    /// Convert `node` into zero or more declarations appended to `out`
    fn collect(
        &self,
        node: &Node,
        file: &FileCtx,
        in_class: bool,
        state: &mut UnitState,
        out: &mut Vec<Declaration>,
    ) -> Result<()> {
        match node.kind() {
            "class_specifier" => self.collect_record(node, DeclKind::Class, file, state, out),
            "struct_specifier" => self.collect_record(node, DeclKind::Struct, file, state, out),
            "namespace_definition" => self.collect_namespace(node, file, state, out),
            "preproc_include" => self.splice_include(node, file, state, out),
            "field_declaration" if in_class => self.collect_members(node, file, state, out),
            "function_definition" => {
                let kind = if in_class {
                    DeclKind::Method
                } else {
                    DeclKind::Other("function".to_string())
                };
                if let Some((ident, _, _)) = node
                    .child_by_field_name("declarator")
                    .and_then(|d| unwrap_declarator(d, file.source))
                {
                    out.push(Declaration::new(
                        kind,
                        node_text(&ident, file.source),
                        SourceLocation::new(file.path, start_line(&ident)),
                    ));
                }
                Ok(())
            }
            "declaration" | "type_definition" | "field_declaration" => {
                self.collect_plain_declaration(node, file, in_class, state, out)
            }
            kind if TRANSPARENT_KINDS.contains(&kind) => {
                for child in named_children(node) {
                    self.collect(&child, file, in_class, state, out)?;
                }
                Ok(())
            }
            other => {
                trace!(kind = other, line = start_line(node), "skipping node");
                Ok(())
            }
        }
    }

    /// Class/struct specifier; only definitions (with a body) become records
    fn collect_record(
        &self,
        node: &Node,
        kind: DeclKind,
        file: &FileCtx,
        state: &mut UnitState,
        out: &mut Vec<Declaration>,
    ) -> Result<()> {
        let name_node = node.child_by_field_name("name");
        let name = name_node
            .map(|n| simple_type_name(node_text(&n, file.source)))
            .unwrap_or_default();
        let line = name_node.map(|n| start_line(&n)).unwrap_or_else(|| start_line(node));
        let location = SourceLocation::new(file.path, line);

        let Some(body) = node.child_by_field_name("body") else {
            out.push(Declaration::new(
                DeclKind::Other("forward_declaration".to_string()),
                name,
                location,
            ));
            return Ok(());
        };

        let mut members = Vec::new();
        for child in named_children(&body) {
            self.collect(&child, file, true, state, &mut members)?;
        }
        out.push(Declaration::new(kind, name, location).with_children(members));
        Ok(())
    }

    fn collect_namespace(
        &self,
        node: &Node,
        file: &FileCtx,
        state: &mut UnitState,
        out: &mut Vec<Declaration>,
    ) -> Result<()> {
        let name_node = node.child_by_field_name("name");
        let name = name_node
            .map(|n| node_text(&n, file.source).to_string())
            .unwrap_or_default();
        let line = name_node.map(|n| start_line(&n)).unwrap_or_else(|| start_line(node));

        let mut children = Vec::new();
        if let Some(body) = node.child_by_field_name("body") {
            for child in named_children(&body) {
                self.collect(&child, file, false, state, &mut children)?;
            }
        }
        out.push(
            Declaration::new(
                DeclKind::Other("namespace".to_string()),
                name,
                SourceLocation::new(file.path, line),
            )
            .with_children(children),
        );
        Ok(())
    }

    /// Data members and member function declarations inside a class body
    fn collect_members(
        &self,
        node: &Node,
        file: &FileCtx,
        state: &mut UnitState,
        out: &mut Vec<Declaration>,
    ) -> Result<()> {
        let type_node = node.child_by_field_name("type");
        if let Some(ty) = type_node {
            // `struct Inner { ... } inner;` defines a nested record first
            if matches!(ty.kind(), "class_specifier" | "struct_specifier") {
                self.collect(&ty, file, true, state, out)?;
            }
        }

        let is_static = storage_classes(node, file.source).contains(&"static");
        let base_type = type_spelling_prefix(node, type_node, file.source);

        for declarator in children_by_field(node, "declarator") {
            let Some((ident, suffix, is_function)) = unwrap_declarator(declarator, file.source)
            else {
                continue;
            };
            let location = SourceLocation::new(file.path, start_line(&ident));
            let name = node_text(&ident, file.source);

            let decl = if is_function {
                Declaration::new(DeclKind::Method, name, location)
            } else if is_static {
                Declaration::new(DeclKind::Other("static_member".to_string()), name, location)
            } else {
                Declaration::new(DeclKind::Field, name, location)
                    .with_type(format!("{}{}", base_type, suffix))
            };
            out.push(decl);
        }
        Ok(())
    }

    /// Variables, typedefs, constructor declarations; records defined inline are lifted
    fn collect_plain_declaration(
        &self,
        node: &Node,
        file: &FileCtx,
        in_class: bool,
        state: &mut UnitState,
        out: &mut Vec<Declaration>,
    ) -> Result<()> {
        if let Some(ty) = node.child_by_field_name("type") {
            if matches!(ty.kind(), "class_specifier" | "struct_specifier") {
                self.collect(&ty, file, in_class, state, out)?;
            }
        }

        for declarator in children_by_field(node, "declarator") {
            let Some((ident, _, is_function)) = unwrap_declarator(declarator, file.source) else {
                continue;
            };
            let kind = match (in_class, is_function) {
                (true, true) => DeclKind::Method,
                (false, true) => DeclKind::Other("function".to_string()),
                (_, false) => DeclKind::Other(node.kind().to_string()),
            };
            out.push(Declaration::new(
                kind,
                node_text(&ident, file.source),
                SourceLocation::new(file.path, start_line(&ident)),
            ));
        }
        Ok(())
    }

    /// Resolve an `#include` and splice the header's declarations in place
    fn splice_include(
        &self,
        node: &Node,
        file: &FileCtx,
        state: &mut UnitState,
        out: &mut Vec<Declaration>,
    ) -> Result<()> {
        let Some(path_node) = node.child_by_field_name("path") else {
            return Ok(());
        };
        let raw = node_text(&path_node, file.source);
        let (target, quoted) = match path_node.kind() {
            "string_literal" => (raw.trim_matches('"'), true),
            "system_lib_string" => (raw.trim_start_matches('<').trim_end_matches('>'), false),
            // computed include (`#include MACRO`)
            _ => return Ok(()),
        };

        let Some(resolved) = self.resolve_include(target, quoted, file.path) else {
            if quoted {
                warn!(include = target, from = %file.path.display(), "include not found, skipping");
            } else {
                trace!(include = target, "system include skipped");
            }
            return Ok(());
        };

        if !state.included.insert(resolved.clone()) {
            trace!(include = %resolved.display(), "already included in this unit");
            return Ok(());
        }
        debug!(include = %resolved.display(), from = %file.path.display(), "splicing include");
        state.included_files.push(resolved.clone());

        let declarations = self.parse_file(&resolved, state)?;
        out.extend(declarations);
        Ok(())
    }

    /// Quoted includes search the including file's directory first
    fn resolve_include(&self, target: &str, quoted: bool, from: &Path) -> Option<PathBuf> {
        let local = if quoted { from.parent() } else { None };
        local
            .into_iter()
            .chain(self.include_dirs.iter().map(PathBuf::as_path))
            .map(|dir| normalize(&dir.join(target)))
            .find(|candidate| candidate.is_file())
    }
}

impl DeclarationParser for CppDeclarationParser {
    fn parse_unit(&self, path: &Path) -> Result<ParsedUnit> {
        let mut parser = TSParser::new();
        parser
            .set_language(&tree_sitter_cpp::language())
            .map_err(|e| ReflgenError::parse(format!("Failed to set language: {}", e)))?;

        let root_path = normalize(path);
        let mut state = UnitState {
            parser,
            included: FxHashSet::default(),
            included_files: vec![root_path.clone()],
            diagnostics: Vec::new(),
        };
        state.included.insert(root_path.clone());

        let declarations = self.parse_file(&root_path, &mut state)?;
        let root = Declaration::new(
            DeclKind::TranslationUnit,
            "",
            SourceLocation::new(root_path.clone(), 0),
        )
        .with_children(declarations);

        let mut unit = ParsedUnit::new(root, root_path);
        unit.included_files = state.included_files;
        unit.diagnostics = state.diagnostics;
        Ok(unit)
    }

    fn language_name(&self) -> &'static str {
        "cpp"
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Declarator helpers
// ═══════════════════════════════════════════════════════════════════════════

/// Walk a declarator down to its identifier.
///
/// Returns the identifier node, the type suffix contributed by pointer,
/// reference and array declarators, and whether a function declarator was
/// crossed on the way.
fn unwrap_declarator<'a>(declarator: Node<'a>, source: &str) -> Option<(Node<'a>, String, bool)> {
    let mut current = declarator;
    let mut suffix = String::new();
    let mut is_function = false;

    loop {
        match current.kind() {
            "field_identifier" | "identifier" | "destructor_name" | "operator_name"
            | "qualified_identifier" | "template_function" => {
                return Some((current, suffix, is_function));
            }
            "pointer_declarator" => {
                suffix.push_str(" *");
                if let Some(q) = find_child_by_kind(&current, "type_qualifier") {
                    suffix.push_str(node_text(&q, source));
                }
                current = current.child_by_field_name("declarator")?;
            }
            "reference_declarator" => {
                let amp = if node_text(&current, source).trim_start().starts_with("&&") {
                    " &&"
                } else {
                    " &"
                };
                suffix.push_str(amp);
                current = current.named_child(current.named_child_count().checked_sub(1)?)?;
            }
            "array_declarator" => {
                let size = current
                    .child_by_field_name("size")
                    .map(|s| normalized_text(&s, source))
                    .unwrap_or_default();
                let inner = current.child_by_field_name("declarator")?;
                // arrays bind tighter than the pointers already collected
                suffix.push_str(&format!("[{}]", size));
                current = inner;
            }
            "function_declarator" => {
                is_function = true;
                current = current.child_by_field_name("declarator")?;
            }
            "init_declarator" => {
                current = current.child_by_field_name("declarator")?;
            }
            "parenthesized_declarator" | "attributed_declarator" => {
                current = current.named_child(0)?;
            }
            _ => return None,
        }
    }
}

/// Qualifiers followed by the written type, whitespace-normalised
fn type_spelling_prefix(node: &Node, type_node: Option<Node>, source: &str) -> String {
    let mut parts: Vec<String> = named_children(node)
        .iter()
        .filter(|c| c.kind() == "type_qualifier")
        .map(|q| node_text(q, source).to_string())
        .collect();
    if let Some(ty) = type_node {
        parts.push(normalized_text(&ty, source));
    }
    parts.join(" ")
}

fn storage_classes<'s>(node: &Node, source: &'s str) -> Vec<&'s str> {
    named_children(node)
        .iter()
        .filter(|c| c.kind() == "storage_class_specifier")
        .map(|c| node_text(c, source))
        .collect()
}

/// `ns::Foo<T>` -> `Foo`
fn simple_type_name(spelling: &str) -> String {
    let without_args = spelling.split('<').next().unwrap_or(spelling);
    without_args
        .rsplit("::")
        .next()
        .unwrap_or(without_args)
        .trim()
        .to_string()
}
