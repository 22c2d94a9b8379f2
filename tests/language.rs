use std::fs::{self};

use minipython::{
    error::{Error, LexError, ParseError, RuntimeError, SemanticError},
    interpreter::{
        lexer::TokenKind,
        tac::{Instruction, Machine, generate, render},
    },
    run, run_tac,
};
use walkdir::WalkDir;

struct BookExample {
    code:     String,
    expected: Option<Vec<i64>>,
}

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, example) in extract_examples(&content).into_iter().enumerate() {
            count += 1;
            let mut printed = Vec::new();
            if let Err(e) = run(&example.code, &mut printed) {
                panic!("Example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       example.code,
                       e);
            }
            if let Some(expected) = example.expected {
                assert_eq!(printed, expected, "Example {} in {path:?} printed the wrong values", i + 1);
            }
        }
    }

    assert!(count > 0, "No minipython examples found in book/src");
}

#[test]
fn book_examples_agree_across_back_ends() {
    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let content = fs::read_to_string(entry.path()).unwrap();

        for example in extract_examples(&content) {
            assert_same_output(&example.code);
        }
    }
}

/// Collects ```` ```minipython ```` blocks, each paired with the
/// ```` ```output ```` block that directly follows it, if any.
fn extract_examples(content: &str) -> Vec<BookExample> {
    let mut examples: Vec<BookExample> = Vec::new();
    let mut inside: Option<&str> = None;
    let mut buf = String::new();
    let mut awaiting_output = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if inside.is_none() {
            if trimmed.starts_with("```minipython") {
                inside = Some("code");
                buf.clear();
            } else if trimmed.starts_with("```output") && awaiting_output {
                inside = Some("output");
                buf.clear();
            } else if !trimmed.is_empty() {
                awaiting_output = false;
            }
            continue;
        }
        if trimmed.starts_with("```") {
            match inside.take() {
                Some("code") => {
                    examples.push(BookExample { code:     buf.clone(),
                                                expected: None, });
                    awaiting_output = true;
                },
                _ => {
                    let values = buf.lines()
                                    .map(|l| l.trim().parse().unwrap())
                                    .collect();
                    if let Some(last) = examples.last_mut() {
                        last.expected = Some(values);
                    }
                    awaiting_output = false;
                },
            }
            continue;
        }
        buf.push_str(line);
        buf.push('\n');
    }

    examples
}

fn output_of(src: &str) -> Vec<i64> {
    let mut printed = Vec::new();
    if let Err(e) = run(src, &mut printed) {
        panic!("Script failed: {e}");
    }
    printed
}

fn assert_success(src: &str) {
    let mut printed = Vec::new();
    if let Err(e) = run(src, &mut printed) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) -> Error {
    let mut printed = Vec::new();
    match run(src, &mut printed) {
        Ok(()) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_same_output(src: &str) {
    let mut tree = Vec::new();
    let mut tac = Vec::new();
    let tree_result = run(src, &mut tree);
    let tac_result = run_tac(src, &mut tac);

    assert_eq!(tree, tac, "back ends printed different values for:\n{src}");
    assert_eq!(tree_result.is_ok(),
               tac_result.is_ok(),
               "back ends disagree on success for:\n{src}");
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(output_of("print(1 + 2 * 3);"), [7]);
    assert_eq!(output_of("print((1 + 2) * 3);"), [9]);
    assert_eq!(output_of("print(2 * 3 + 4 * 5);"), [26]);
    assert_eq!(output_of("print(1 < 2 == 1);"), [1]);
    assert_eq!(output_of("print(1 || 0 && 0);"), [1]);
}

#[test]
fn left_associativity() {
    assert_eq!(output_of("print(10 - 4 - 3);"), [3]);
    assert_eq!(output_of("print(100 / 10 / 5);"), [2]);
}

#[test]
fn unary_operators() {
    assert_eq!(output_of("print(-5 + 2);"), [-3]);
    assert_eq!(output_of("print(--5);"), [5]);
    assert_eq!(output_of("print(!0);"), [1]);
    assert_eq!(output_of("print(!7);"), [0]);
    assert_eq!(output_of("int x; x = 4; print(-x * 2);"), [-8]);
}

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(output_of("print(7 / 2);"), [3]);
    assert_eq!(output_of("print(-7 / 2);"), [-3]);
    assert_eq!(output_of("print(7 / -2);"), [-3]);
}

#[test]
fn declaration_list_and_assignment() {
    assert_eq!(output_of("int x, y; x = 5; y = x + 2; print(y);"), [7]);
}

#[test]
fn declared_variables_start_at_zero() {
    assert_eq!(output_of("int a, b; print(a); print(b);"), [0, 0]);
}

#[test]
fn while_loop_runs_until_condition_is_zero() {
    assert_eq!(output_of("int i; i = 0; while (i < 3) { print(i); i = i + 1; }"),
               [0, 1, 2]);
    assert_eq!(output_of("int i; i = 5; while (i < 3) { print(i); }"), [] as [i64; 0]);
}

#[test]
fn if_inside_while_prints_once() {
    let src = "int x; x = 0; while (x < 3) { if (x == 1) { print(x); } x = x + 1; }";
    assert_eq!(output_of(src), [1]);
}

#[test]
fn if_else_picks_one_branch() {
    let src = "int x; x = 2;
               if (x > 1) { print(1); } else { print(2); }
               if (x > 5) { print(3); } else { print(4); }";
    assert_eq!(output_of(src), [1, 4]);
}

#[test]
fn empty_blocks_are_allowed() {
    assert_success("int x; while (x) { } if (1) { } else { }");
}

#[test]
fn empty_program_prints_nothing() {
    assert_eq!(output_of(""), [] as [i64; 0]);
    assert_eq!(output_of("  \n\t "), [] as [i64; 0]);
}

#[test]
fn logical_operators_evaluate_both_sides() {
    assert_eq!(output_of("print(2 && 3);"), [1]);
    assert_eq!(output_of("print(0 || -4);"), [1]);

    let err = assert_failure("print(0 && (1 / 0));");
    assert!(matches!(err, Error::Runtime(RuntimeError::DivisionByZero { line: 1 })));

    let err = assert_failure("print(1 || (1 / 0));");
    assert!(matches!(err, Error::Runtime(RuntimeError::DivisionByZero { .. })));
}

#[test]
fn duplicate_declaration_is_rejected() {
    let err = assert_failure("int x; int x;");
    assert_eq!(err,
               Error::Semantic(SemanticError::DuplicateDeclaration { name: "x".to_string(),
                                                                     line: 1, }));

    let err = assert_failure("int a, a;");
    assert!(matches!(err, Error::Semantic(SemanticError::DuplicateDeclaration { .. })));
}

#[test]
fn undeclared_variable_is_rejected() {
    let err = assert_failure("print(y);");
    assert_eq!(err,
               Error::Semantic(SemanticError::UndeclaredVariable { name: "y".to_string(),
                                                                   line: 1, }));

    let err = assert_failure("int x;\nx = 1;\nz = x;");
    assert_eq!(err.to_string(), "Error on line 3: Variable 'z' is not declared.");
}

#[test]
fn use_before_declaration_inside_blocks_is_rejected() {
    let err = assert_failure("int i; while (i < 1) { print(j); i = i + 1; } int j;");
    assert!(matches!(err, Error::Semantic(SemanticError::UndeclaredVariable { ref name, .. }) if name == "j"));
}

#[test]
fn semantic_errors_stop_before_execution() {
    let mut printed = Vec::new();
    assert!(run("print(1); print(y);", &mut printed).is_err());
    assert!(printed.is_empty());
}

#[test]
fn division_by_zero_prints_nothing() {
    let mut printed = Vec::new();
    let err = run("int x; x = 1/0; print(x);", &mut printed).unwrap_err();

    assert!(matches!(err, Error::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(printed.is_empty());
}

#[test]
fn output_before_a_runtime_error_is_kept() {
    let src = "int x; print(3); x = 1 / x;";

    let mut printed = Vec::new();
    assert!(run(src, &mut printed).is_err());
    assert_eq!(printed, [3]);

    let mut printed = Vec::new();
    assert!(run_tac(src, &mut printed).is_err());
    assert_eq!(printed, [3]);
}

#[test]
fn overflow_is_an_error() {
    let err = assert_failure("print(9223372036854775807 + 1);");
    assert!(matches!(err, Error::Runtime(RuntimeError::Overflow { .. })));

    let err = assert_failure("int x; x = 0 - 9223372036854775807 - 1; print(x / -1);");
    assert!(matches!(err, Error::Runtime(RuntimeError::Overflow { .. })));
}

#[test]
fn literal_too_large_is_a_parse_error() {
    let err = assert_failure("print(9223372036854775808);");
    assert!(matches!(err, Error::Parse(ParseError::LiteralTooLarge { .. })));
}

#[test]
fn tokenizer_counts_lexical_units() {
    let tokens = minipython::tokenize("int x, y;\nx = 5;").unwrap();
    assert_eq!(tokens.len(), 9);

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds[..5],
               [TokenKind::Int,
                TokenKind::Identifier,
                TokenKind::Comma,
                TokenKind::Identifier,
                TokenKind::Semicolon]);
    assert_eq!((tokens[5].line, tokens[5].column), (2, 1));
}

#[test]
fn relexing_joined_lexemes_gives_same_kinds() {
    let src = "int i; i=0; while(i<=10){if(i!=3&&!(i>=7)||i==0){print(-i);}i=i+1;}";
    let tokens = minipython::tokenize(src).unwrap();
    let joined = tokens.iter()
                       .map(|t| t.lexeme.as_str())
                       .collect::<Vec<_>>()
                       .join(" ");
    let relexed = minipython::tokenize(&joined).unwrap();

    let kinds = |ts: &[minipython::interpreter::lexer::Token]| -> Vec<TokenKind> {
        ts.iter().map(|t| t.kind).collect()
    };
    assert_eq!(kinds(&tokens), kinds(&relexed));
}

#[test]
fn keyword_prefixes_are_identifiers() {
    let tokens = minipython::tokenize("integer printer iffy").unwrap();
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Identifier));
    assert_success("int integer; integer = 2; print(integer);");
}

#[test]
fn unrecognized_character_is_a_lex_error() {
    let err = assert_failure("int x;\nx = 1 @ 2;");
    assert_eq!(err,
               Error::Lex(LexError::UnrecognizedToken { text:   "@".to_string(),
                                                        line:   2,
                                                        column: 7, }));
}

#[test]
fn reserved_literals_cannot_be_used_as_values() {
    assert!(matches!(assert_failure("int x; x = 1.5;"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(assert_failure("int x; x = true;"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(assert_failure("print(\"hi\");"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn parse_errors() {
    assert!(matches!(assert_failure("print((1 + 2);"),
                     Error::Parse(ParseError::ExpectedToken { .. })));
    assert!(matches!(assert_failure("int x; x = 1"),
                     Error::Parse(ParseError::ExpectedToken { .. })));
    assert!(matches!(assert_failure("int x; x = ;"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(assert_failure("5;"), Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(assert_failure("float f;"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn unterminated_block_reports_end_of_input() {
    let err = assert_failure("int i;\nwhile (i < 3) {\n  i = i + 1;");
    assert!(matches!(err, Error::Parse(ParseError::UnexpectedEndOfInput { line: 2 })));
}

#[test]
fn ast_rendering() {
    let program = minipython::parse("int x; x = 1 + 2 * 3; while (x) { print(-x); }").unwrap();
    assert_eq!(program.to_string(),
               "Program\n  Decl int x\n  Assign x = (1 + (2 * 3))\n  While x\n    Block\n      Print \
                (-x)\n");
}

#[test]
fn symbol_table_lists_declarations_in_order() {
    let checked = minipython::check("int b, a; int c;").unwrap();
    assert_eq!(checked.symbols.to_string(), "b: int\na: int\nc: int\n");
}

#[test]
fn tac_for_while_loop() {
    let compilation = minipython::compile("int i; while (i < 2) { i = i + 1; } print(i);").unwrap();
    assert_eq!(render(&compilation.tac),
               "DECLARE i\nLABEL L1\nLOAD t1, i\nLT t2, t1, 2\nJZ t2, L2\nLOAD t3, i\nADD t4, \
                t3, 1\nSTORE i, t4\nJMP L1\nLABEL L2\nLOAD t5, i\nPRINT t5\n");
}

#[test]
fn tac_for_if_else() {
    let compilation = minipython::compile("int x; if (x) { print(1); } else { print(2); }").unwrap();
    assert_eq!(render(&compilation.tac),
               "DECLARE x\nLOAD t1, x\nJZ t1, L1\nPRINT 1\nJMP L2\nLABEL L1\nPRINT 2\nLABEL L2\n");
}

#[test]
fn tac_for_unary_and_logical_operators() {
    let compilation = minipython::compile("int x; print(-x && !x);").unwrap();
    assert_eq!(render(&compilation.tac),
               "DECLARE x\nLOAD t1, x\nSUB t2, 0, t1\nLOAD t3, x\nEQ t4, t3, 0\nNEQ t5, t2, \
                0\nNEQ t6, t4, 0\nMUL t7, t5, t6\nPRINT t7\n");
}

#[test]
fn tac_generation_is_deterministic() {
    let src = "int x; x = 0; while (x < 3) { if (x == 1) { print(x); } x = x + 1; }";
    let checked = minipython::check(src).unwrap();
    let first = generate(&checked);
    let second = generate(&checked);
    assert_eq!(first, second);
    assert!(matches!(&first[2], Instruction::Label { name } if name.to_string() == "L1"));

    let other = minipython::compile("int y; y = y + 1;").unwrap().tac;
    assert!(matches!(&other[1], Instruction::Load { dest, .. } if dest.to_string() == "t1"));
}

#[test]
fn back_ends_agree() {
    for src in ["print(1 + 2 * 3);",
                "int x, y; x = 5; y = x + 2; print(y);",
                "int x; x = 0; while (x < 3) { if (x == 1) { print(x); } x = x + 1; }",
                "int a, b; a = 3; b = -a; print(a / 2 - b * 4); print(!(a >= b) || a == 3);",
                "int x; while (x < 4) { int y; y = y + x; print(y); x = x + 1; }",
                "int x; x = 1/0; print(x);",
                "int x; print(x); x = 9223372036854775807; x = x + 1;"]
    {
        assert_same_output(src);
    }
}

#[test]
fn machine_rejects_unknown_labels() {
    let code = [Instruction::Jump { label: minipython::interpreter::tac::Label(9) }];
    let mut printed = Vec::new();
    let err = Machine::new().run(&code, &mut printed).unwrap_err();
    assert_eq!(err.to_string(), "Error on line 1: Jump to undefined label 'L9'.");
}

fn nested_parens(n: usize) -> String {
    format!("print({}1{});", "(".repeat(n), ")".repeat(n))
}

#[test]
fn moderate_nesting_is_accepted() {
    assert_eq!(output_of(&nested_parens(100)), [1]);
    assert_eq!(output_of(&format!("print({}1);", "-".repeat(100))), [1]);

    let sum = vec!["1"; 200].join(" + ");
    assert_eq!(output_of(&format!("print({sum});")), [200]);
    assert_same_output(&format!("print({sum});"));
}

#[test]
fn deep_parentheses_are_a_parse_error() {
    let err = assert_failure(&nested_parens(10_000));
    assert!(matches!(err, Error::Parse(ParseError::NestingTooDeep { line: 1 })));
    assert_eq!(err.to_string(), "Error on line 1: Nesting is too deep.");
}

#[test]
fn deep_prefix_chains_are_a_parse_error() {
    for op in ["-", "!"] {
        let err = assert_failure(&format!("print({}1);", op.repeat(10_000)));
        assert!(matches!(err, Error::Parse(ParseError::NestingTooDeep { .. })));
    }
}

#[test]
fn deep_blocks_are_a_parse_error() {
    let src = format!("int x; {} print(x); {}",
                      "while (x) { ".repeat(10_000),
                      "} ".repeat(10_000));
    assert!(matches!(assert_failure(&src), Error::Parse(ParseError::NestingTooDeep { .. })));

    let src = format!("int x; {} print(x); {}",
                      "if (1) { ".repeat(10_000),
                      "} ".repeat(10_000));
    assert!(matches!(assert_failure(&src), Error::Parse(ParseError::NestingTooDeep { .. })));
}

#[test]
fn long_operator_chains_are_a_parse_error() {
    let sum = vec!["1"; 10_000].join(" + ");
    let err = assert_failure(&format!("print({sum});"));
    assert!(matches!(err, Error::Parse(ParseError::NestingTooDeep { .. })));
}

#[test]
fn smallest_integer_literal() {
    assert_eq!(output_of("print(-9223372036854775808);"), [i64::MIN]);
    assert_eq!(output_of("int x; x = -9223372036854775808 + 1; print(x);"), [i64::MIN + 1]);
    assert_same_output("print(-9223372036854775808);");

    let err = assert_failure("print(-9223372036854775808 / -1);");
    assert!(matches!(err, Error::Runtime(RuntimeError::Overflow { .. })));

    let err = assert_failure("print(- -9223372036854775808);");
    assert!(matches!(err, Error::Runtime(RuntimeError::Overflow { .. })));

    let err = assert_failure("print(-9223372036854775809);");
    assert!(matches!(err, Error::Parse(ParseError::LiteralTooLarge { .. })));
}
