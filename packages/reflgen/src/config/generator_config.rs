//! Generator configuration
//!
//! Every field has a default matching the engine's reflection headers, so an
//! absent `reflgen.yaml` is a valid configuration. Relative paths are
//! resolved against the project root by `pipeline::ProjectLayout`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::validation::{ConfigValidator, Validatable};

/// Supported `version:` values of the YAML schema
pub const SUPPORTED_VERSIONS: &[u64] = &[1];

/// File name looked up in the project root by the CLI
pub const DEFAULT_CONFIG_FILE: &str = "reflgen.yaml";

/// Top-level generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Project source tree; only headers below it are reflected
    pub source_root: PathBuf,

    /// Include search paths handed to the structural parser
    pub include_dirs: Vec<PathBuf>,

    /// Extensions (without dot) of files treated as headers
    pub header_extensions: Vec<String>,

    /// Name of the sibling directory receiving artifacts
    pub generated_dir: String,

    /// Infix marking generated files: `foo.h` -> `foo.<infix>.h`
    pub generated_infix: String,

    /// Lexical token opening a class-level marker line
    pub class_marker: String,

    /// Lexical token opening a property-level marker line
    pub property_marker: String,

    /// Project-wide registry artifact
    pub registry_path: PathBuf,

    pub codegen: CodegenConfig,
}

/// Names used by the emitted C++ code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenConfig {
    /// Runtime structure returned by the accessors
    pub class_data_type: String,

    /// Runtime name type wrapping property names and type spellings
    pub name_type: String,

    /// Per-class helper macro prefix; the marker line is appended
    pub helper_macro_prefix: String,

    /// Registry macro enumerating every reflected type
    pub registry_macro: String,

    /// Member template invoked once per type by the registry macro
    pub registration_call: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("src"),
            include_dirs: vec![PathBuf::from("src")],
            header_extensions: vec!["h".to_string(), "hpp".to_string()],
            generated_dir: "generated".to_string(),
            generated_infix: "gen".to_string(),
            class_marker: "DEF_CLASS(".to_string(),
            property_marker: "DEF_PROPERTY(".to_string(),
            registry_path: PathBuf::from("src/generated/registry.gen.h"),
            codegen: CodegenConfig::default(),
        }
    }
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            class_data_type: "AClassData".to_string(),
            name_type: "AName".to_string(),
            helper_macro_prefix: "__DEF_CLASS_HELPER_L_".to_string(),
            registry_macro: "REGISTER_REFLECTED_TYPES".to_string(),
            registration_call: "RegisterDefault".to_string(),
        }
    }
}

impl GeneratorConfig {
    // ═══════════════════════════════════════════════════════════════════════
    // Builder API
    // ═══════════════════════════════════════════════════════════════════════

    pub fn with_source_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.source_root = root.into();
        self
    }

    pub fn with_include_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.include_dirs.push(dir.into());
        self
    }

    pub fn with_markers(mut self, class_marker: &str, property_marker: &str) -> Self {
        self.class_marker = class_marker.to_string();
        self.property_marker = property_marker.to_string();
        self
    }

    pub fn with_registry_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.registry_path = path.into();
        self
    }

    pub fn codegen(mut self, f: impl FnOnce(&mut CodegenConfig)) -> Self {
        f(&mut self.codegen);
        self
    }

    /// Validate and return self
    pub fn build(self) -> ConfigResult<Self> {
        self.validate()?;
        Ok(self)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // YAML I/O
    // ═══════════════════════════════════════════════════════════════════════

    /// Load and validate a YAML configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML text; `version` is required
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let mut document: serde_yaml::Value = serde_yaml::from_str(content)?;
        let mapping = document
            .as_mapping_mut()
            .ok_or_else(|| ConfigError::invalid("<root>", "non-mapping", "Expected a YAML mapping."))?;

        let version = mapping
            .remove("version")
            .ok_or(ConfigError::MissingVersion)?;
        let found = version
            .as_u64()
            .ok_or_else(|| ConfigError::invalid("version", format!("{:?}", version), "Expected an integer."))?;
        if !SUPPORTED_VERSIONS.contains(&found) {
            return Err(ConfigError::UnsupportedVersion {
                found,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let config: GeneratorConfig = serde_yaml::from_value(document)?;
        config.build()
    }

    /// Export as YAML (schema v1)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let mut value = serde_yaml::to_value(self)?;
        if let Some(mapping) = value.as_mapping_mut() {
            let mut ordered = serde_yaml::Mapping::new();
            ordered.insert("version".into(), SUPPORTED_VERSIONS[0].into());
            ordered.extend(std::mem::take(mapping));
            value = serde_yaml::Value::Mapping(ordered);
        }
        Ok(serde_yaml::to_string(&value)?)
    }
}

impl Validatable for GeneratorConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::non_empty("class_marker", &self.class_marker)?;
        ConfigValidator::non_empty("property_marker", &self.property_marker)?;
        let (class, property) = (self.class_marker.trim(), self.property_marker.trim());
        // the scanner matches by prefix, so neither token may start the other
        if class.starts_with(property) || property.starts_with(class) {
            return Err(ConfigError::invalid(
                "property_marker",
                &self.property_marker,
                "Class and property markers must differ and neither may be a prefix of the other.",
            ));
        }
        if self.header_extensions.is_empty() {
            return Err(ConfigError::invalid(
                "header_extensions",
                "[]",
                "At least one header extension is required.",
            ));
        }
        for ext in &self.header_extensions {
            ConfigValidator::extension("header_extensions", ext)?;
        }
        ConfigValidator::plain_segment("generated_dir", &self.generated_dir)?;
        ConfigValidator::plain_segment("generated_infix", &self.generated_infix)?;
        if self.registry_path.as_os_str().is_empty() {
            return Err(ConfigError::invalid("registry_path", "", "Value must not be empty."));
        }
        self.codegen.validate()
    }

    fn config_name(&self) -> &'static str {
        "GeneratorConfig"
    }
}

impl Validatable for CodegenConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::non_empty("codegen.class_data_type", &self.class_data_type)?;
        ConfigValidator::non_empty("codegen.name_type", &self.name_type)?;
        ConfigValidator::c_identifier("codegen.helper_macro_prefix", &self.helper_macro_prefix)?;
        ConfigValidator::c_identifier("codegen.registry_macro", &self.registry_macro)?;
        ConfigValidator::c_identifier("codegen.registration_call", &self.registration_call)
    }

    fn config_name(&self) -> &'static str {
        "CodegenConfig"
    }
}
