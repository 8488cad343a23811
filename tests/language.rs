use std::fs;

use step::run;
use walkdir::WalkDir;

/// Runs a program, capturing its printed output. Returns the output on
/// success and the error rendering on failure.
fn run_program(source: &str) -> Result<String, String> {
    let mut output: Vec<u8> = Vec::new();
    match run(source, &mut output) {
        Ok(()) => Ok(String::from_utf8(output).expect("program output is valid UTF-8")),
        Err(e) => Err(e.to_string()),
    }
}

fn assert_success(src: &str) {
    if let Err(e) = run_program(src) {
        panic!("Script failed: {e}\n{src}");
    }
}

fn assert_failure(src: &str) {
    if run_program(src).is_ok() {
        panic!("Script succeeded but was expected to fail:\n{src}")
    }
}

fn assert_output(src: &str, expected: &str) {
    match run_program(src) {
        Ok(output) => assert_eq!(output, expected, "unexpected output for:\n{src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

#[test]
fn demo_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "step"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        count += 1;
        if let Err(e) = run_program(&source) {
            panic!("Demo program {path:?} failed: {e}");
        }
    }

    assert!(count > 0, "No demo programs found in demos/");
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_success("x = 1 + 2; assert(x == 3);");
    assert_success("x = 7 * 9; assert(x == 63);");
    assert_success("x = 8 - 5; assert(x == 3);");
    assert_success("x = 2 + 3 * 4; assert(x == 14);");
    assert_success("x = (2 + 3) * 4; assert(x == 20);");
}

#[test]
fn assignment_is_an_expression_and_right_associative() {
    assert_success("a = b = 5; assert(a == 5); assert(b == 5);");
    assert_success("x = [0]; y = (x[0] = 7); assert(y == 7); assert(x[0] == 7);");
}

#[test]
fn invalid_assignment_targets_are_parse_errors() {
    assert_failure("1 = 2;");
    assert_failure("f() = 3;");
    assert_failure("a + b = 3;");
}

#[test]
fn integer_division_stays_integer_when_exact() {
    assert_success("assert(10 / 2 == 5); assert(str(10 / 2) == \"5\");");
    assert_success("assert(str(7 / 2) == \"3.5\");");
    assert_success("assert(-9 / 3 == -3); assert(str(-9 / 3) == \"-3\");");
}

#[test]
fn mixed_arithmetic_promotes_to_float() {
    assert_success("assert(1 + 2.0 == 3.0); assert(str(1 + 2.0) == \"3.0\");");
    assert_success("assert(str(2 * 0.5) == \"1.0\");");
    assert_success("x = 5; assert(int(x + 0.0) == int(x));");
}

#[test]
fn modulo_follows_the_divisor_sign() {
    assert_success("assert(-6 % 4 == 2);");
    assert_success("assert(6 % -4 == -2);");
    assert_success("assert(7 % 3 == 1);");
    assert_success("assert(str(7.5 % 2) == \"1.5\");");
    assert_success("assert(str(-7.5 % 2) == \"0.5\");");
}

#[test]
fn unary_minus_preserves_the_numeric_variant() {
    assert_success("assert(str(-(3)) == \"-3\");");
    assert_success("assert(str(-(3.0)) == \"-3.0\");");
    assert_success("assert(--5 == 5);");
}

#[test]
fn comparisons_yield_integer_booleans() {
    assert_success("assert(2 < 3); assert(3 > 2); assert(2 <= 2); assert(3 >= 3);");
    assert_success("assert((2 < 3) == 1); assert((3 < 2) == 0);");
    assert_success("assert(1 < 1.5); assert(2.5 >= 2);");
}

#[test]
fn chained_comparisons_are_parse_errors() {
    assert_failure("1 < 2 < 3;");
    assert_failure("x = 1 == 1 == 1;");
}

#[test]
fn equality_is_structural_and_cross_type_unequal() {
    assert_success("assert(1 == 1.0);");
    assert_success("assert((\"a\" == 1) == 0);");
    assert_success("assert(None == None);");
    assert_success("assert([1, [2, \"x\"]] == [1, [2, \"x\"]]);");
    assert_success("assert(([1] == [1, 1]) == 0);");
    assert_success("assert((\"1\" == 1) == 0);");
    assert_success("x = [5]; assert(x == x); assert(x != [6]);");
}

#[test]
fn truthiness_table() {
    assert_success("k = 0; if (0) { k = 1; } assert(k == 0);");
    assert_success("k = 0; if (0.0) { k = 1; } assert(k == 0);");
    assert_success("k = 0; if (\"\") { k = 1; } assert(k == 0);");
    assert_success("k = 0; if ([]) { k = 1; } assert(k == 0);");
    assert_success("k = 0; if (None) { k = 1; } assert(k == 0);");
    assert_success("k = 0; if (-1) { k = 1; } assert(k == 1);");
    assert_success("k = 0; if (0.5) { k = 1; } assert(k == 1);");
    assert_success("k = 0; if (\"0\") { k = 1; } assert(k == 1);");
    assert_success("k = 0; if ([0]) { k = 1; } assert(k == 1);");
    assert_success("k = 0; if (print) { k = 1; } assert(k == 1);");
}

#[test]
fn logical_operators_produce_booleans_and_short_circuit() {
    assert_success("assert((1 and 2) == 1); assert((1 and 0) == 0);");
    assert_success("assert((0 or 3) == 1); assert((0 or 0) == 0);");
    assert_success("assert((0 and missing) == 0);");
    assert_success("assert((1 or missing) == 1);");
    assert_success("assert((1 and 2 or 0) == 1);");
}

#[test]
fn string_operations() {
    assert_success("assert(\"ab\" + \"cd\" == \"abcd\");");
    assert_success("assert(\"ab\" * 3 == \"ababab\"); assert(3 * \"ab\" == \"ababab\");");
    assert_success("assert(\"ab\" * 0 == \"\"); assert(\"ab\" * -1 == \"\");");
    assert_success("assert(len(\"abc\") == 3); assert(len(\"\") == 0);");
    assert_success("assert(\"abc\"[1] == \"b\"); assert(\"abc\"[2.0] == \"c\");");
    assert_success("s = \"ab\"; k = 3; assert(len(s * k) == len(s) * k);");
    assert_success("s = \"ab\"; k = 3; assert((s * k) + s == s * (k + 1));");
}

#[test]
fn string_literals_may_contain_newlines_and_hashes() {
    assert_success("s = \"a\nb\"; assert(len(s) == 3);");
    assert_success("s = \"# not a comment\"; assert(len(s) == 15);");
    assert_success("x = 1; # a comment\nassert(x == 1);");
}

#[test]
fn list_operations() {
    assert_success("a = [1, 2, 3]; assert(a[0] == 1); assert(a[2] == 3);");
    assert_success("assert(len([]) == 0); assert(len([1, 2]) == 2);");
    assert_success("assert([1, 2] + [3] == [1, 2, 3]);");
    assert_success("assert([1, 2] * 2 == [1, 2, 1, 2]); assert(2 * [7] == [7, 7]);");
    assert_success("assert([1] * 0 == []); assert([1] * -2 == []);");
    assert_success("a = [1, 2]; k = 4; assert(len(a * k) == len(a) * k);");
    assert_success("a = [1]; append(a, 2); assert(a == [1, 2]); assert(len(a) == 2);");
    assert_success("a = []; assert(append(a, 1) == None);");
}

#[test]
fn list_aliasing_is_observable() {
    assert_success("a = [1, 2, 3]; b = a; b[0] = 9; assert(a[0] == 9);");
    assert_success("a = [1]; b = a; append(b, 2); assert(len(a) == 2);");
    assert_success("m = [[0]]; row = m[0]; row[0] = 5; assert(m[0][0] == 5);");
}

#[test]
fn concatenation_and_replication_mint_fresh_lists() {
    assert_success("a = [1, 2]; b = a + []; b[0] = 9; assert(a[0] == 1);");
    assert_success("a = [1]; b = a * 2; b[0] = 9; assert(a[0] == 1);");
}

#[test]
fn replication_shares_element_handles() {
    assert_success("inner = [1]; outer = [inner] * 2; outer[0][0] = 9; assert(outer[1][0] == 9);");
}

#[test]
fn subscript_assignment_mutates_in_place() {
    assert_success("a = [1, 2, 3]; a[1] = 20; assert(a == [1, 20, 3]);");
    assert_success("a = [[1], [2]]; a[0][0] = 10; assert(a[0] == [10]);");
}

#[test]
fn while_loop_with_break() {
    assert_success("i = 0; while (i < 10) { if (i == 5) { break; } i = i + 1; } assert(i == 5);");
}

#[test]
fn while_loop_with_continue() {
    assert_success(
                   r"
        i = 0; k = 0;
        while (i < 10) {
            if (i % 2) { i = i + 1; continue; }
            k = k + 1;
            i = i + 1;
        }
        assert(k == 5);
    ",
    );
}

#[test]
fn nested_loops_and_break() {
    assert_success(
                   r"
        total = 0;
        i = 0;
        while (i < 3) {
            j = 0;
            while (1) {
                if (j == 2) { break; }
                total = total + 1;
                j = j + 1;
            }
            i = i + 1;
        }
        assert(total == 6);
    ",
    );
}

#[test]
fn function_definition_and_calls() {
    assert_success("def f(a, b) { return a + b; } assert(f(2, 3) == 5);");
    assert_success("def f() { return; } assert(f() == None);");
    assert_success("def f() { } assert(f() == None);");
    assert_success("def f(x) { x = x + 1; return x; } assert(f(1) == 2);");
}

#[test]
fn return_escapes_nested_loops() {
    assert_success(
                   r"
        def f(a) {
            i = 0;
            while (i < 10) {
                if (i == a) { return i; }
                i = i + 1;
            }
            return 1000;
        }
        assert(f(9) == 9);
        assert(f(10) == 1000);
    ",
    );
}

#[test]
fn recursion() {
    assert_success(
                   r"
        def fact(n) {
            if (n < 2) { return 1; }
            return n * fact(n - 1);
        }
        assert(fact(10) == 3628800);
    ",
    );
}

#[test]
fn call_locals_fall_back_to_globals() {
    assert_success("x = 1; def f() { y = 2; return x + y; } assert(f() == 3);");
    assert_success("def f() { z = 5; return z; } f(); w = 0; assert(w == 0);");
    assert_failure("def f() { z = 5; return z; } f(); z;");
}

#[test]
fn assignments_at_top_level_are_global() {
    assert_success("x = 1; def f() { return x; } x = 2; assert(f() == 2);");
}

#[test]
fn functions_are_first_class() {
    assert_success("def f(a) { return a; } g = f; assert(g(3) == 3);");
    assert_success("def f(a) { return a; } g = f; assert(g == f);");
    assert_success("def f(a) { return a; } assert((f == print) == 0);");
    assert_success("p = print; p(1);");
    assert_success("fs = [print]; fs[0](1);");
}

#[test]
fn builtin_conversions() {
    assert_success("assert(int(3.9) == 3); assert(int(-3.9) == -3);");
    assert_success("assert(int(5) == 5);");
    assert_success("assert(int(\"42\") == 42); assert(int(\" 7 \") == 7);");
    assert_success("assert(str(42) == \"42\"); assert(str(-4) == \"-4\");");
    assert_success("assert(str(2.0) == \"2.0\"); assert(str(1.5) == \"1.5\");");
    assert_success("assert(str(\"abc\") == \"abc\");");
    assert_success("assert(str(None) == \"None\");");
    assert_success("assert(str([1, 2, 3]) == \"[1, 2, 3]\");");
    assert_success("assert(str([[1], []]) == \"[[1], []]\");");
    assert_success("n = 12345; assert(int(str(n)) == n);");
}

#[test]
fn builtin_sqrt() {
    assert_success("assert(sqrt(9) == 3); assert(str(sqrt(9)) == \"3.0\");");
    assert_success("assert(sqrt(2.25) == 1.5);");
    assert_success("d = sqrt(2) * sqrt(2) - 2; assert(d * d < 0.000001);");
}

#[test]
fn print_writes_space_separated_lines() {
    assert_output("print(1, \"two\", [3, 4.0], None);", "1 two [3, 4.0] None\n");
    assert_output("print();", "\n");
    assert_output("print(\"a\"); print(\"b\");", "a\nb\n");
    assert_output("i = 0; while (i < 3) { print(i); i = i + 1; }", "0\n1\n2\n");
}

#[test]
fn assert_failure_message_reaches_the_diagnostic() {
    match run_program("assert(0, \"boom\");") {
        Err(e) => assert!(e.contains("boom"), "diagnostic missing message: {e}"),
        Ok(_) => panic!("assert(0, ...) succeeded"),
    }
}

#[test]
fn matrix_multiplication_of_ones() {
    assert_success(
                   r"
        def zeros(n) {
            m = [];
            i = 0;
            while (i < n) {
                append(m, [0.0] * n);
                i = i + 1;
            }
            return m;
        }

        def ones(n) {
            m = [];
            i = 0;
            while (i < n) {
                append(m, [1.0] * n);
                i = i + 1;
            }
            return m;
        }

        def matmul(a, b, n) {
            c = zeros(n);
            i = 0;
            while (i < n) {
                j = 0;
                while (j < n) {
                    k = 0;
                    while (k < n) {
                        c[i][j] = c[i][j] + a[i][k] * b[k][j];
                        k = k + 1;
                    }
                    j = j + 1;
                }
                i = i + 1;
            }
            return c;
        }

        n = 32;
        c = matmul(ones(n), ones(n), n);
        total = 0.0;
        i = 0;
        while (i < n) {
            j = 0;
            while (j < n) {
                total = total + c[i][j];
                j = j + 1;
            }
            i = i + 1;
        }
        assert(total == 32768);
    ",
    );
}

#[test]
fn empty_statements_and_programs() {
    assert_success("");
    assert_success(";;;");
    assert_success("# just a comment");
    assert_success("if (1) { } else { };");
}

#[test]
fn numeric_literal_forms() {
    assert_success("assert(12. == 12.0);");
    assert_success("assert(007 == 7);");
    assert_success("assert(str(1.25) == \"1.25\");");
    assert_failure("x = .5;");
}

#[test]
fn division_and_modulo_by_zero_are_errors() {
    assert_failure("6 / 0;");
    assert_failure("6.0 / 0.0;");
    assert_failure("6 % 0;");
    assert_failure("6.5 % 0;");
}

#[test]
fn type_errors_are_fatal() {
    assert_failure("\"a\" / \"b\";");
    assert_failure("\"a\" - \"b\";");
    assert_failure("[1] + \"a\";");
    assert_failure("\"a\" + 1;");
    assert_failure("\"a\" * \"b\";");
    assert_failure("\"a\" * 2.0;");
    assert_failure("None < 1;");
    assert_failure("-\"a\";");
    assert_failure("1[0];");
    assert_failure("len(1);");
    assert_failure("sqrt(\"4\");");
    assert_failure("append(\"a\", 1);");
    assert_failure("3(1);");
}

#[test]
fn subscript_errors() {
    assert_failure("[1, 2][5];");
    assert_failure("[1, 2][-1];");
    assert_failure("[1, 2][0.5];");
    assert_failure("\"ab\"[2];");
    assert_failure("\"ab\"[0] = \"c\";");
}

#[test]
fn misplaced_control_flow_is_a_runtime_error() {
    assert_failure("break;");
    assert_failure("continue;");
    assert_failure("return;");
    assert_failure("if (1) { break; }");
    assert_failure("def f() { break; } f();");
    assert_failure("def f() { while (0) { } continue; } f();");
}

#[test]
fn misplaced_control_flow_is_only_checked_when_executed() {
    assert_success("if (0) { break; }");
    assert_success("def f() { break; } assert(1);");
}

#[test]
fn assert_and_arity_failures() {
    assert_failure("assert(0);");
    assert_failure("assert(0, \"message\");");
    assert_failure("assert();");
    assert_failure("assert(1, 2, 3);");
    assert_failure("len(\"a\", \"b\");");
    assert_failure("def f(x, y) { return x + y; } f(3);");
    assert_failure("def f() { return 1; } f(3);");
}

#[test]
fn unknown_variables_are_errors() {
    assert_failure("x + 1;");
    assert_failure("assert(foo == 1);");
    assert_failure("f(1);");
}

#[test]
fn int_conversion_failures() {
    assert_failure("int(\"1.5\");");
    assert_failure("int(\"abc\");");
    assert_failure("int([1]);");
    assert_failure("int(None);");
}

#[test]
fn sqrt_of_a_negative_number_is_an_error() {
    assert_failure("sqrt(-1);");
    assert_failure("sqrt(-0.5);");
}

#[test]
fn lexical_errors() {
    assert_failure("x = \"abc");
    assert_failure("@;");
    assert_failure("x = .5;");
    assert_failure("x = 99999999999999999999;");
}

#[test]
fn parse_errors() {
    assert_failure("x = ;");
    assert_failure("if (1) { x = 1; ");
    assert_failure("while 1 { }");
    assert_failure("def f( { }");
    assert_failure("x = 1");
    assert_failure("f(1, );");
}

#[test]
fn self_referential_lists_do_not_hang() {
    assert_failure("a = [1]; a[0] = a; str(a);");
    assert_failure("a = [1]; a[0] = a; b = [2]; b[0] = b; a == b;");
    assert_success("a = [1]; a[0] = a; assert(a == a);");
}
