//! Snapshot tests for generated Go source

mod common;

use astgen::error::ErrorFormatter;
use astgen::{grammar, FamilySpec, Grammar};
use common::render;
use common::snapshot_utils::{assert_error_snapshot, assert_generated_snapshot};

#[test]
fn test_lox_expr_tagged() {
    assert_generated_snapshot("lox_expr_tagged", &render(&grammar::expr()));
}

#[test]
fn test_lox_stmt_tagged() {
    assert_generated_snapshot("lox_stmt_tagged", &render(&grammar::stmt()));
}

#[test]
fn test_untagged_statements() {
    let family = FamilySpec::untagged("Stmt")
        .with_type("PrintStmt", &["Expression Expr"])
        .with_type("ExpressionStmt", &["Expression Expr"]);
    assert_generated_snapshot("stmt_untagged", &render(&family));
}

#[test]
fn test_empty_manifest_error() {
    let error = Grammar::from_json(r#"{ "families": [] }"#).unwrap_err();
    let formatted = ErrorFormatter::new(&error).with_color(false).format();
    assert_error_snapshot("empty_manifest_error", &formatted);
}
