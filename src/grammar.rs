//! The Lox expression and statement families built into the CLI.

use crate::family::{FamilySpec, Grammar};

pub fn expr() -> FamilySpec {
    FamilySpec::tagged("Expr")
        .with_type("AssignExpr", &["Name *Token", "Value Expr"])
        .with_type("BinaryExpr", &["Left Expr", "Operator *Token", "Right Expr"])
        .with_type("CallExpr", &["Callee Expr", "Paren *Token", "Arguments []Expr"])
        .with_type("GetExpr", &["Object Expr", "Name *Token"])
        .with_type("GroupingExpr", &["Expression Expr"])
        .with_type("LiteralExpr", &["Value interface{}"])
        .with_type("LogicalExpr", &["Left Expr", "Operator *Token", "Right Expr"])
        .with_type("SetExpr", &["Object Expr", "Name *Token", "Value Expr"])
        .with_type("ThisExpr", &["Keyword *Token"])
        .with_type("UnaryExpr", &["Operator *Token", "Right Expr"])
        .with_type("VarExpr", &["Name *Token"])
}

pub fn stmt() -> FamilySpec {
    FamilySpec::tagged("Stmt")
        .with_type("BlockStmt", &["Statements []Stmt"])
        .with_type("ClassStmt", &["Name *Token", "Methods []*FunctionStmt"])
        .with_type("ExpressionStmt", &["Expression Expr"])
        .with_type("FunctionStmt", &["Name *Token", "Params []*Token", "Body []Stmt"])
        .with_type("IfStmt", &["Condition Expr", "ThenBranch Stmt", "ElseBranch Stmt"])
        .with_type("ReturnStmt", &["Keyword *Token", "Value Expr"])
        .with_type("VarStmt", &["Name *Token", "Initializer Expr"])
        .with_type("WhileStmt", &["Condition Expr", "Body Stmt"])
}

/// Both Lox families, expressions first
pub fn lox() -> Grammar {
    Grammar::new(expr()).with_family(stmt())
}
