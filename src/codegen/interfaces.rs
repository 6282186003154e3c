//! The family interface and its visitor interface.

use super::utils::{kind_type_name, visit_method_name, visitor_name};
use super::CodeGenerator;
use crate::family::FamilySpec;

impl CodeGenerator {
    pub(super) fn define_base_interface(&mut self, family: &FamilySpec) {
        let returns = self.return_pair(family.mode);

        self.open_block(&format!("type {} interface", family.name));
        if family.mode.emits_kind() {
            self.line(&format!("Kind() {}", kind_type_name(&family.name)));
        }
        self.line(&format!(
            "Accept({}) {}",
            visitor_name(&family.name),
            returns
        ));
        self.close_block();
    }

    /// One `Visit<Type>` method per concrete type
    pub(super) fn define_visitor(&mut self, family: &FamilySpec) {
        let returns = self.return_pair(family.mode);

        self.open_block(&format!("type {} interface", visitor_name(&family.name)));
        for spec in family.types() {
            self.line(&format!(
                "{}(*{}) {}",
                visit_method_name(spec.name),
                spec.name,
                returns
            ));
        }
        self.close_block();
    }
}
