//! AST rendering: source text and tree dump.
//!
//! Two render paths share this module:
//!
//! - `Display` on the AST types produces re-parseable source text. Parsing
//!   the rendered text of a parser-produced tree yields a structurally
//!   equal tree (round-trip up to whitespace). The renderer emits no parens
//!   of its own; explicit [`ExprKind::Parenthesised`] nodes carry them, so
//!   hand-built trees must be shaped the way the grammar would shape them.
//! - [`tree_string`] produces an indented dump with one line per node, used
//!   by the driver's AST output and in debugging.

use std::fmt;

use super::{DefKind, Definition, Expr, ExprKind, Program, Stmt, StmtKind};

/// Formats an `f64` so that it lexes as a double literal again.
///
/// Plain `{}` formatting drops the decimal point for integral values
/// (`1.0` would render as `1`), which the lexer rejects.
fn format_double(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::DoubleLiteral(value) => write!(f, "{}", format_double(*value)),
            ExprKind::Identifier(name) => write!(f, "{name}"),
            ExprKind::Parenthesised(inner) => write!(f, "({inner})"),
            ExprKind::Call { callee, args } => {
                write!(f, "{callee}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
            ExprKind::Neg(inner) => write!(f, "-{inner}"),
            ExprKind::Mul(lhs, rhs) => write!(f, "{lhs} * {rhs}"),
            ExprKind::Div(lhs, rhs) => write!(f, "{lhs} / {rhs}"),
            ExprKind::Add(lhs, rhs) => write!(f, "{lhs} + {rhs}"),
            ExprKind::Sub(lhs, rhs) => write!(f, "{lhs} - {rhs}"),
            ExprKind::Mod(lhs, rhs) => write!(f, "{lhs} % {rhs}"),
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StmtKind::Return(value) => write!(f, "return {value};"),
            StmtKind::Discard(expr) => write!(f, "{expr};"),
            StmtKind::Assignment { name, value } => write!(f, "{name} = {value};"),
        }
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DefKind::Function { name, params, body } => {
                write!(f, "{name} ({}) {{", params.join(", "))?;
                if body.is_empty() {
                    return write!(f, "}}");
                }
                writeln!(f)?;
                for stmt in body {
                    writeln!(f, "    {stmt}")?;
                }
                write!(f, "}}")
            }
            DefKind::Variable { name, value } => write!(f, "{name} = {value};"),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, definition) in self.definitions.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{definition}")?;
        }
        Ok(())
    }
}

/// Renders a program as an indented tree dump.
///
/// Each node is summarized on one line; children are indented two spaces
/// below their parent.
pub fn tree_string(program: &Program) -> String {
    let mut out = String::new();
    out.push_str("Program\n");
    for definition in &program.definitions {
        definition_lines(definition, 1, &mut out);
    }
    out
}

fn indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn definition_lines(definition: &Definition, depth: usize, out: &mut String) {
    indent(depth, out);
    match &definition.kind {
        DefKind::Function { name, params, body } => {
            if params.is_empty() {
                out.push_str(&format!("Function: {name}\n"));
            } else {
                out.push_str(&format!("Function: {name} ({})\n", params.join(", ")));
            }
            for stmt in body {
                stmt_lines(stmt, depth + 1, out);
            }
        }
        DefKind::Variable { name, value } => {
            out.push_str(&format!("Variable: {name}\n"));
            expr_lines(value, depth + 1, out);
        }
    }
}

fn stmt_lines(stmt: &Stmt, depth: usize, out: &mut String) {
    indent(depth, out);
    match &stmt.kind {
        StmtKind::Return(value) => {
            out.push_str("Return\n");
            expr_lines(value, depth + 1, out);
        }
        StmtKind::Discard(expr) => {
            out.push_str("Discard\n");
            expr_lines(expr, depth + 1, out);
        }
        StmtKind::Assignment { name, value } => {
            out.push_str(&format!("Assignment: {name}\n"));
            expr_lines(value, depth + 1, out);
        }
    }
}

fn expr_lines(expr: &Expr, depth: usize, out: &mut String) {
    indent(depth, out);
    match &expr.kind {
        ExprKind::DoubleLiteral(value) => {
            out.push_str(&format!("DoubleLiteral: {}\n", format_double(*value)));
        }
        ExprKind::Identifier(name) => out.push_str(&format!("Identifier: {name}\n")),
        ExprKind::Parenthesised(inner) => {
            out.push_str("Parenthesised\n");
            expr_lines(inner, depth + 1, out);
        }
        ExprKind::Call { callee, args } => {
            out.push_str(&format!("Call: {callee}\n"));
            for arg in args {
                expr_lines(arg, depth + 1, out);
            }
        }
        ExprKind::Neg(inner) => {
            out.push_str("Neg\n");
            expr_lines(inner, depth + 1, out);
        }
        ExprKind::Mul(lhs, rhs) => binary_lines("Mul", lhs, rhs, depth, out),
        ExprKind::Div(lhs, rhs) => binary_lines("Div", lhs, rhs, depth, out),
        ExprKind::Add(lhs, rhs) => binary_lines("Add", lhs, rhs, depth, out),
        ExprKind::Sub(lhs, rhs) => binary_lines("Sub", lhs, rhs, depth, out),
        ExprKind::Mod(lhs, rhs) => binary_lines("Mod", lhs, rhs, depth, out),
    }
}

fn binary_lines(label: &str, lhs: &Expr, rhs: &Expr, depth: usize, out: &mut String) {
    out.push_str(label);
    out.push('\n');
    expr_lines(lhs, depth + 1, out);
    expr_lines(rhs, depth + 1, out);
}
