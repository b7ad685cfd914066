use bigdecimal::BigDecimal;
use sprig_lang::error::{EvalError, SyntaxError};
use sprig_lang::{Environment, Operand, compile, evaluate, evaluate_to_text};
use std::collections::{BTreeMap, HashMap};

fn variables() -> HashMap<&'static str, Option<&'static str>> {
    HashMap::from([
        ("a", Some("0")),
        ("b", Some("1")),
        ("c", Some("2")),
        ("d", Some("d")),
        ("f", None),
        ("g", Some("0.5")),
        ("h", Some("h")),
        ("i", Some("stringa")),
        ("j", Some("str")),
        ("k", Some("rin")),
        ("l", Some("nga")),
        ("m", Some("-1")),
    ])
}

fn eval(source: &str) -> Operand {
    compile(source)
        .unwrap_or_else(|e| panic!("{source}: {e}"))
        .evaluate(&variables())
        .unwrap_or_else(|e| panic!("{source}: {e}"))
}

fn assert_true(source: &str) {
    assert_eq!(eval(source), Operand::TRUE, "{source}");
}

fn assert_false(source: &str) {
    assert_eq!(eval(source), Operand::FALSE, "{source}");
}

fn num(n: i64) -> Operand {
    Operand::num(BigDecimal::from(n))
}

// ============================================================================
// Basics
// ============================================================================

#[test]
fn test_trivial() {
    assert_eq!(eval("1"), num(1));
    assert_true("1 == 1");
    assert_true("(%a == %b) || ((%a + %b) == 1)");
    assert_false("(%a == %b) && ((%a + %b) == 1)");
}

#[test]
fn test_null() {
    assert_true("NULL == NULL");
    assert_true("$e == NULL");
    assert_true("$f == NULL");
    assert_true("$e == $f");
    assert_true("%f == NULL");
    assert_true("?e == NULL");
}

#[test]
fn test_numeric() {
    assert_true("%a == 0");
    assert_true("%a+%b == 1");
    assert_true("%b+%b == %c");
    assert_true("%b/%c == %g");
    assert_true("%g+%g == %b");
    assert_true("%g*4 ==  %c");
    assert_true("%m < 0");
    assert_true("pow(2,3)==8");
}

#[test]
fn test_minus_forms() {
    assert_true("%m -1 == -2");
    assert_true("%m - 1 == -2");
    assert_true("1-%m == 2");
    assert_true("1- %m == 2");
    assert_true("1 -%m == 2");
    assert_true("1 - %m == 2");
}

#[test]
fn test_strings() {
    assert_true("$a == \"0\"");
    assert_true("($a+$d) == \"0d\"");
    assert_true("($h+$d) == \"hd\"");
    assert_true("startsWith(\"hd\", $h)");
    assert_true("endsWith(\"hd\", $d)");
    assert_true("startsWith($i, $j)");
    assert_true("endsWith($i, $l)");
    assert_true("contains($i, $j)");
    assert_true("contains($i, $k)");
    assert_true("contains($i, $l)");
    assert_false("endsWith($i, $j)");
    assert_false("startsWith($i, $l)");
    assert_true("trim($i+\" \") == $i");
    assert_true("left($i, 3) == $j");
    assert_true("right($i, 3) == $l");
    assert_true("right(left($i, 5), 3) == $k");
    assert_true("$j+\"i\"+$l == $i");
}

#[test]
fn test_strings_from_numbers() {
    assert_true("toString(%g*2) == $b");
    assert_true("toString(%g+%g)+\"\" == $b+\"\"");
    assert_true("trim(\" \"+toString(%g+%g)) == $b+\"\"");
}

#[test]
fn test_concatenation_uses_canonical_numbers() {
    assert_true("'a' + 1 == 'a' + '1'");
    assert_true("'a' + (0.5 + 0.5) == 'a'+'1'");
    assert_true("%g+%g + 'a' == '1a'");
    assert_true("\"a\" + $g + %g == \"a0.50.5\"");
    assert_true("\"\"+(%g+%g) == toString(1)");
    assert_true("left($i, 3) + right(left($i, 4), 1) + right($i, 3) == $i");
    assert_true("$d + (%g + %g) == $d + $b");
}

#[test]
fn test_associativity() {
    assert_true("(NULL == NULL) || startsWith(\"xyz\", \"xy\")");
    assert_true("NULL == NULL || startsWith(\"xyz\", \"xy\")");
    assert_true("2 + 3 == 10 - 5");
    assert_eq!(eval("toNum(2 + toNum(3 == 3) + 2 == 5) - 2 * 0.5"), eval("0"));
}

#[test]
fn test_boolean() {
    assert_true("~false");
    assert_false("false");
    assert_true("true");
    assert_false("~true");
    assert_false("false && true");
    assert_true("true && true");
    assert_false("false || false");
    assert_true("true || false");
    assert_true("~false && true");
    assert_false("~true && true");
    assert_true("~false || false");
    assert_false("~true || false");
    assert_true("~?a || ?a");
    assert_false("~?b || ?a");
}

#[test]
fn test_wrong_number_of_operands() {
    assert!(compile("(5*2)8").is_err());
}

// ============================================================================
// End-to-end scenarios
// ============================================================================

#[test]
fn test_substring_to_number() {
    let expr = compile("toNum(substr($myString, 13, 14)) + 1").unwrap();
    let env = HashMap::from([("myString".to_string(), "Hello, World 1!".to_string())]);
    assert_eq!(expr.evaluate(&env).unwrap(), num(2));
}

#[test]
fn test_numeric_variables() {
    let expr = compile("(%a == %b) || ((%a + %b) == 1)").unwrap();
    let env = HashMap::from([("a", "0"), ("b", "1")]);
    assert_eq!(expr.evaluate(&env).unwrap(), Operand::TRUE);
}

#[test]
fn test_concatenation_without_bindings() {
    let expr = compile("'a' + 1 == 'a' + '1'").unwrap();
    assert_eq!(expr.evaluate_unbound().unwrap(), Operand::TRUE);
}

#[test]
fn test_absent_variable_is_null() {
    let expr = compile("$f == NULL").unwrap();
    let env: HashMap<String, String> = HashMap::new();
    assert_eq!(expr.evaluate(&env).unwrap(), Operand::TRUE);
}

#[test]
fn test_operand_imbalance_fails() {
    assert_eq!(
        compile("(5*2)8").unwrap_err(),
        SyntaxError::WrongOperandCount { remaining: 2 }
    );
}

#[test]
fn test_power_call() {
    assert_eq!(compile("pow(2,3)==8").unwrap().evaluate_unbound().unwrap(), Operand::TRUE);
}

// ============================================================================
// Entry points
// ============================================================================

#[test]
fn test_evaluate_with_and_without_environment() {
    let expr = compile("%x * 2").unwrap();
    let env = BTreeMap::from([("x".to_string(), "4".to_string())]);

    assert_eq!(evaluate(&expr, Some(&env)).unwrap(), num(8));
    assert_eq!(
        evaluate(&expr, None).unwrap_err().to_string(),
        "Invalid operands for '*': expected num, num or string, num; got null, num"
    );
}

#[test]
fn test_evaluate_to_text() {
    let env = BTreeMap::from([("x".to_string(), Some("2.50".to_string()))]);
    let text = |source: &str| evaluate_to_text(&compile(source).unwrap(), Some(&env)).unwrap();

    assert_eq!(text("%x").as_deref(), Some("2.5"));
    assert_eq!(text("%x > 1").as_deref(), Some("true"));
    assert_eq!(text("$x").as_deref(), Some("2.50"));
    assert_eq!(text("''").as_deref(), Some(""));
    assert_eq!(text("NULL"), None);
    assert_eq!(text("%missing"), None);
}

#[test]
fn test_json_object_environment() {
    let serde_json::Value::Object(env) = serde_json::json!({
        "price": 19.99,
        "quantity": 3,
        "member": true,
        "coupon": null
    }) else {
        unreachable!()
    };

    let total = compile("%price * %quantity").unwrap();
    assert_eq!(total.evaluate(&env).unwrap(), Operand::num("59.97".parse::<BigDecimal>().unwrap()));

    let discounted = compile("?member && $coupon == NULL").unwrap();
    assert_eq!(discounted.evaluate(&env).unwrap(), Operand::TRUE);
}

#[test]
fn test_custom_environment() {
    struct Upper;

    impl Environment for Upper {
        fn lookup(&self, name: &str) -> Option<std::borrow::Cow<'_, str>> {
            Some(name.to_uppercase().into())
        }
    }

    let expr = compile("$abc + $de").unwrap();
    assert_eq!(expr.evaluate(&Upper).unwrap(), Operand::string("ABCDE"));
}

#[test]
fn test_eval_errors_abort() {
    let env = HashMap::from([("n", "twelve")]);
    let expr = compile("1 + %n").unwrap();
    assert_eq!(
        expr.evaluate(&env).unwrap_err(),
        EvalError::InvalidNumber { source: "variable %n".to_string(), text: "twelve".to_string() }
    );

    // The same expression succeeds against a different environment
    let env = HashMap::from([("n", "12")]);
    assert_eq!(expr.evaluate(&env).unwrap(), num(13));
}

// ============================================================================
// Reuse and concurrency
// ============================================================================

#[test]
fn test_repeated_evaluation_is_stable() {
    let expr = compile("substr($i, 1, 4) + toString(%g * 3)").unwrap();
    let env = variables();
    let first = expr.evaluate(&env).unwrap();
    for _ in 0..100 {
        assert_eq!(expr.evaluate(&env).unwrap(), first);
    }
    assert_eq!(first, Operand::string("tri1.5"));
}

#[test]
fn test_concurrent_evaluation() {
    let expr = compile("%n * %n + len($s)").unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8i64)
            .map(|n| {
                let expr = &expr;
                scope.spawn(move || {
                    let env = HashMap::from([
                        ("n".to_string(), n.to_string()),
                        ("s".to_string(), "x".repeat(n as usize)),
                    ]);
                    (0..50)
                        .map(|_| expr.evaluate(&env).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for (n, handle) in handles.into_iter().enumerate() {
            let n = n as i64;
            let results = handle.join().unwrap();
            assert!(results.iter().all(|r| *r == num(n * n + n)));
        }
    });
}

#[test]
fn test_clones_are_independent_values() {
    let expr = compile("1 + 1").unwrap();
    let copy = expr.clone();
    drop(expr);
    assert_eq!(copy.evaluate_unbound().unwrap(), num(2));
}
