//! Generator configuration types

use crate::error::{GenerateError, GenerateResult};
use serde::{Deserialize, Serialize};

/// Configuration for one generation run
///
/// Every field has a default, so an empty document is a valid configuration.
///
/// ```toml
/// indent = 4
/// strict = true
///
/// [naming]
/// parser_prefix = "parse_"
///
/// [runtime]
/// alloc = "my_malloc"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Spaces per indentation level in emitted code
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Reject runs that record any diagnostic
    #[serde(default)]
    pub strict: bool,

    /// Log level used by the CLI when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Generated symbol naming
    #[serde(default)]
    pub naming: NamingConfig,

    /// Dynamic value API of the embedded script engine
    #[serde(default)]
    pub runtime: RuntimeApi,
}

fn default_indent() -> usize {
    2
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            strict: false,
            log_level: default_log_level(),
            naming: NamingConfig::default(),
            runtime: RuntimeApi::default(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> GenerateResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_json::from_slice(bytes).map_err(|e| GenerateError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Create configuration from a TOML document
    pub fn from_toml(content: &str) -> GenerateResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| GenerateError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot constrain
    pub fn validate(&self) -> GenerateResult<()> {
        if self.indent > 16 {
            return Err(GenerateError::Config(format!(
                "indent must be at most 16, got {}",
                self.indent
            )));
        }
        if self.naming.parser_prefix.is_empty() || self.naming.serializer_prefix.is_empty() {
            return Err(GenerateError::Config(
                "parser and serializer prefixes cannot be empty".to_string(),
            ));
        }
        if self.naming.parser_prefix == self.naming.serializer_prefix {
            return Err(GenerateError::Config(
                "parser and serializer prefixes must differ".to_string(),
            ));
        }
        if self.naming.length_suffix.is_empty() {
            return Err(GenerateError::Config(
                "length_suffix cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Naming of generated symbols
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Prefix of generated parser functions, followed by the exact type name
    pub parser_prefix: String,

    /// Prefix of generated serializer functions, followed by the exact type name
    pub serializer_prefix: String,

    /// Suffix of the companion length member of array fields (`<field><suffix>`)
    pub length_suffix: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            parser_prefix: "get_property_".to_string(),
            serializer_prefix: "stringify_property_".to_string(),
            length_suffix: "Len".to_string(),
        }
    }
}

/// Names of the dynamic value operations exposed by the script engine embedding.
///
/// Defaults target QuickJS plus the converter helpers the default template ships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeApi {
    /// Engine context type, passed as a pointer to every call
    pub context_type: String,
    /// Context parameter name
    pub context_name: String,
    /// Dynamic value type
    pub value_type: String,
    /// `alloc(ctx, size)`
    pub alloc: String,
    /// `get_property(ctx, object, key)`
    pub get_property: String,
    /// `has_property(ctx, object, key)`
    pub has_property: String,
    /// `free_value(ctx, value)`
    pub free_value: String,
    /// `read_string(ctx, object, key)` returning an owned copy
    pub read_string: String,
    pub read_double: String,
    pub read_int64: String,
    pub read_boolean: String,
    /// `new_object(ctx)`
    pub new_object: String,
    /// `new_array(ctx)`
    pub new_array: String,
    /// `set_property(ctx, object, key, value)`
    pub set_property: String,
    /// `set_element(ctx, array, index, value)`
    pub set_element: String,
    pub new_string: String,
    pub new_double: String,
    pub new_int64: String,
    pub new_boolean: String,
}

impl Default for RuntimeApi {
    fn default() -> Self {
        Self {
            context_type: "JSContext".to_string(),
            context_name: "ctx".to_string(),
            value_type: "JSValue".to_string(),
            alloc: "js_malloc".to_string(),
            get_property: "JS_GetPropertyStr".to_string(),
            has_property: "JS_HasPropertyStr".to_string(),
            free_value: "JS_FreeValue".to_string(),
            read_string: "get_property_string_copy".to_string(),
            read_double: "get_property_float64".to_string(),
            read_int64: "get_property_int64".to_string(),
            read_boolean: "get_property_boolean".to_string(),
            new_object: "JS_NewObject".to_string(),
            new_array: "JS_NewArray".to_string(),
            set_property: "JS_SetPropertyStr".to_string(),
            set_element: "JS_SetPropertyUint32".to_string(),
            new_string: "JS_NewString".to_string(),
            new_double: "JS_NewFloat64".to_string(),
            new_int64: "JS_NewInt64".to_string(),
            new_boolean: "JS_NewBool".to_string(),
        }
    }
}
