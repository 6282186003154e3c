//! Emission helpers and the naming scheme shared by every block.

use super::CodeGenerator;

/// `Expr` -> `ExprKind`
pub fn kind_type_name(family: &str) -> String {
    format!("{}Kind", family)
}

/// `Expr`, `LiteralExpr` -> `ExprLiteralExpr`
pub fn kind_constant(family: &str, type_name: &str) -> String {
    format!("{}{}", family, type_name)
}

/// `Expr` -> `ExprVisitor`
pub fn visitor_name(family: &str) -> String {
    format!("{}Visitor", family)
}

/// `LiteralExpr` -> `VisitLiteralExpr`
pub fn visit_method_name(type_name: &str) -> String {
    format!("Visit{}", type_name)
}

impl CodeGenerator {
    /// Adds the current indentation level to the output, one tab per level
    pub(super) fn indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push('\t');
        }
    }

    /// Writes one indented line
    pub(super) fn line(&mut self, text: &str) {
        self.indent();
        self.output.push_str(text);
        self.output.push('\n');
    }

    pub(super) fn blank_line(&mut self) {
        self.output.push('\n');
    }

    /// Writes `opener` followed by `{` and indents the body
    pub(super) fn open_block(&mut self, opener: &str) {
        self.line(&format!("{} {{", opener));
        self.indent_level += 1;
    }

    /// Closes a block opened with [`open_block`](Self::open_block)
    pub(super) fn close_block(&mut self) {
        self.indent_level -= 1;
        self.line("}");
        self.blank_line();
    }
}
