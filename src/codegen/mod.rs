//! Go source generation from node-type families.
//!
//! Renders one [`FamilySpec`] into a complete source unit: header, optional
//! kind enumeration, the family interface, the visitor interface, and one
//! block per concrete type.

mod header;
mod interfaces;
mod types;
mod utils;

pub use utils::{kind_constant, kind_type_name, visit_method_name, visitor_name};

use crate::config::Config;
use crate::debug_println;
use crate::family::{FamilySpec, Mode};

pub struct CodeGenerator {
    output: String,
    indent_level: usize,
    config: Config,
}

impl CodeGenerator {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Render `family` into Go source text. The generator can be reused; each
    /// call starts from an empty buffer.
    pub fn generate(&mut self, family: &FamilySpec) -> String {
        self.output.clear();
        self.indent_level = 0;

        debug_println!(
            "rendering family {} ({:?}, {} types)",
            family.name,
            family.mode,
            family.len()
        );

        self.define_ast(family);
        std::mem::take(&mut self.output)
    }

    fn define_ast(&mut self, family: &FamilySpec) {
        self.generate_header();

        if family.mode.emits_kind() {
            self.define_kind_enum(family);
        }

        self.define_base_interface(family);
        self.define_visitor(family);

        for spec in family.types() {
            self.define_type(family, spec);
        }
    }

    /// `(result, error)` return pair shared by `Accept` and visitor methods
    fn return_pair(&self, mode: Mode) -> String {
        let error_type = match mode {
            Mode::Tagged => &self.config.tagged_error_type,
            Mode::Untagged => &self.config.untagged_error_type,
        };
        format!("({}, {})", self.config.result_type, error_type)
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}
