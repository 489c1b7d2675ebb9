//! Pipeline integration tests for the krait compiler.
//!
//! These tests verify the interaction between compiler stages: tokens
//! flowing into the parser, parse results flowing into codegen, and
//! failures surfacing from the stage that raised them.

mod common;

use common::{compile_to_ir, lex, parse};

use inkwell::context::Context;
use krait::ast::{DefKind, Definition, Expr, ExprKind, Program, Stmt, StmtKind};
use krait::codegen::Codegen;
use krait::parser::{Parser, ParseErrorKind};
use krait::token::{Span, TokenKind};

#[test]
fn test_lexer_parser_integration() {
    let source = "pi = 3.14;\nget_pi () { return pi; }";

    let tokens = lex(source);
    // pi = 3.14 ; get_pi ( ) { return pi ; } eof
    assert_eq!(tokens.len(), 13);
    assert!(matches!(tokens.last().unwrap().kind, TokenKind::Eof));

    let mut parser = Parser::new(tokens);
    let program = parser.parse().unwrap();
    assert_eq!(program.definitions.len(), 2);
    assert_eq!(program.definitions[0].name(), "pi");
    assert_eq!(program.definitions[1].name(), "get_pi");
}

#[test]
fn test_full_pipeline_example_program() {
    let source = "pi = 3.14;\n\
                  get_pi () {\n    return pi;\n}\n\
                  write (x) {\n    println(x);\n}\n\
                  main () {\n    write(get_pi());\n    pi = 3.0;\n    write(pi);\n    write(1.0 + (3.0 * 4.0) % 5.0);\n    return 0.0;\n}";

    let ir = compile_to_ir(source).expect("example program should compile");

    assert!(ir.contains("@pi = global double 0.000000e+00"));
    assert!(ir.contains("define double @get_pi()"));
    assert!(ir.contains("define double @write(double %x)"));
    assert!(ir.contains("define double @main_()"));
    assert!(ir.contains("define i32 @main()"));
    assert!(ir.contains("declare double @println(double)"));
    assert!(ir.contains("declare i32 @printf(ptr, ...)"));
    assert!(ir.contains("@llvm.global_ctors"));
}

#[test]
fn test_parse_render_compile_round_trip() {
    let source = "pi = 3.14;\nmain () {\n    println(pi);\n    return 0.0;\n}";

    let program = parse(source).unwrap();
    let rendered = program.to_string();
    let reparsed = parse(&rendered).unwrap();
    assert_eq!(program, reparsed);

    // The rendered source compiles the same way.
    assert!(compile_to_ir(&rendered).is_ok());
}

#[test]
fn test_lex_failure_surfaces_through_parser() {
    // `3` is not a double literal; the token stream carries the error and
    // the parser attributes the lexer's message.
    let tokens = lex("a = 3;");
    assert!(matches!(
        tokens.last().unwrap().kind,
        TokenKind::Error(_)
    ));

    let mut parser = Parser::new(tokens);
    let error = parser.parse().unwrap_err();
    assert_eq!(error.kind(), ParseErrorKind::Lex);
    assert!(error.message().contains("decimal point"));
}

#[test]
fn test_parse_failure_names_offending_token() {
    let error = parse("f () { return 0.0 }").unwrap_err();
    assert!(error.contains("'}'"), "error: {error}");
}

#[test]
fn test_codegen_failure_for_unknown_name() {
    let error = compile_to_ir("main () { return nope; }").unwrap_err();
    assert!(error.contains("nope"), "error: {error}");
}

#[test]
fn test_direct_ast_construction_to_codegen() {
    // Build the AST directly, bypassing the parser, and compile it.
    let span = Span::new(0, 0, 1, 1);
    let program = Program {
        definitions: vec![
            Definition::new(
                DefKind::Variable {
                    name: "answer".to_string(),
                    value: Expr::new(ExprKind::DoubleLiteral(42.0), span),
                },
                span,
            ),
            Definition::new(
                DefKind::Function {
                    name: "get".to_string(),
                    params: vec![],
                    body: vec![Stmt::new(
                        StmtKind::Return(Expr::new(
                            ExprKind::Identifier("answer".to_string()),
                            span,
                        )),
                        span,
                    )],
                },
                span,
            ),
        ],
    };

    let context = Context::create();
    let mut codegen = Codegen::new(&context, "direct_ast_test");
    codegen
        .compile(&program)
        .expect("direct AST compilation should succeed");

    let ir = codegen.print_ir();
    assert!(ir.contains("@answer = global double"));
    assert!(ir.contains("define double @get()"));
}

#[test]
fn test_definitions_lowered_in_source_order() {
    let ir = compile_to_ir("a = 1.0;\nb = 2.0;\nf () { return a + b; }").unwrap();

    let a_pos = ir.find("@a = global double").unwrap();
    let b_pos = ir.find("@b = global double").unwrap();
    assert!(a_pos < b_pos);

    let store_a = ir.find("ptr @a").unwrap();
    let store_b = ir.find("store double 2.000000e+00, ptr @b").unwrap();
    assert!(store_a < store_b);
}

#[test]
fn test_empty_function_body_compiles() {
    let ir = compile_to_ir("f () {}").unwrap();
    assert!(ir.contains("define double @f()"));
    assert!(ir.contains("ret double 0.000000e+00"));
}
