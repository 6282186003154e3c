//! File header and the kind-tag enumeration.

use super::utils::{kind_constant, kind_type_name};
use super::CodeGenerator;
use crate::family::FamilySpec;

const GENERATED_NOTICE: &str = "// Code generated by generate_ast. DO NOT EDIT.";

impl CodeGenerator {
    pub(super) fn generate_header(&mut self) {
        self.line(GENERATED_NOTICE);
        self.blank_line();
        let package = format!("package {}", self.config.package_name);
        self.line(&package);
        self.blank_line();
    }

    /// One constant per type, numbered from zero in iteration order
    pub(super) fn define_kind_enum(&mut self, family: &FamilySpec) {
        let kind_type = kind_type_name(&family.name);
        self.line(&format!("type {} int", kind_type));
        self.blank_line();

        self.line("const (");
        self.indent_level += 1;
        for (value, spec) in family.types().enumerate() {
            let constant = kind_constant(&family.name, spec.name);
            self.line(&format!("{} {} = {}", constant, kind_type, value));
        }
        self.close_paren_block();
    }

    fn close_paren_block(&mut self) {
        self.indent_level -= 1;
        self.line(")");
        self.blank_line();
    }
}
