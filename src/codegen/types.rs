//! Concrete node types and their method implementations.

use super::utils::{kind_constant, kind_type_name, visit_method_name, visitor_name};
use super::CodeGenerator;
use crate::family::{FamilySpec, TypeSpec};

impl CodeGenerator {
    /// Struct declaration, then `Kind()` (tagged only), then `Accept`
    pub(super) fn define_type(&mut self, family: &FamilySpec, spec: TypeSpec<'_>) {
        self.open_block(&format!("type {} struct", spec.name));
        for field in spec.fields {
            self.line(field);
        }
        self.close_block();

        if family.mode.emits_kind() {
            self.open_block(&format!(
                "func (t *{}) Kind() {}",
                spec.name,
                kind_type_name(&family.name)
            ));
            self.line(&format!("return {}", kind_constant(&family.name, spec.name)));
            self.close_block();
        }

        let returns = self.return_pair(family.mode);
        self.open_block(&format!(
            "func (t *{}) Accept(visitor {}) {}",
            spec.name,
            visitor_name(&family.name),
            returns
        ));
        self.line(&format!("return visitor.{}(t)", visit_method_name(spec.name)));
        self.close_block();
    }
}
