use fredlang::{
    ast::{Expr, Literal},
    error::{RuntimeError, Side},
    interpreter::{
        evaluator::core::evaluate,
        token::{Token, TokenKind},
        value::Value,
    },
};

fn op(kind: TokenKind) -> Token {
    Token::fixed(kind, 1)
}

fn binary(left: impl Into<Literal>, kind: TokenKind, right: impl Into<Literal>) -> Expr {
    Expr::binary(Expr::literal(left), op(kind), Expr::literal(right))
}

#[test]
fn division_of_floats() {
    assert_eq!(binary(30.0, TokenKind::Slash, 5.0).eval(), Ok(Value::Float(6.0)));
}

#[test]
fn equality_of_booleans_and_strings() {
    assert_eq!(binary(true, TokenKind::DoubleEq, true).eval(), Ok(Value::Bool(true)));
    assert_eq!(binary("DIFFERENT", TokenKind::BangEq, "different").eval(),
               Ok(Value::Bool(true)));
    assert_eq!(binary("same", TokenKind::DoubleEq, "same").eval(), Ok(Value::Bool(true)));
}

#[test]
fn equality_never_coerces() {
    assert_eq!(binary(1, TokenKind::DoubleEq, 1.0).eval(), Ok(Value::Bool(false)));
    assert_eq!(binary(1, TokenKind::BangEq, 1.0).eval(), Ok(Value::Bool(true)));
    assert_eq!(binary("1", TokenKind::DoubleEq, 1).eval(), Ok(Value::Bool(false)));
    assert_eq!(binary(Literal::Null, TokenKind::DoubleEq, Literal::Null).eval(),
               Ok(Value::Bool(true)));
}

#[test]
fn arithmetic_yields_floats() {
    assert_eq!(binary(2, TokenKind::Plus, 3).eval(), Ok(Value::Float(5.0)));
    assert_eq!(binary(2, TokenKind::Minus, 0.5).eval(), Ok(Value::Float(1.5)));
    assert_eq!(binary(4, TokenKind::Star, 2.5).eval(), Ok(Value::Float(10.0)));
    assert_eq!(binary(7, TokenKind::Slash, 2).eval(), Ok(Value::Float(3.5)));
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_eq!(binary(1, TokenKind::Slash, 0).eval(), Ok(Value::Float(f64::INFINITY)));
    assert_eq!(binary(-1.0, TokenKind::Slash, 0.0).eval(),
               Ok(Value::Float(f64::NEG_INFINITY)));

    match binary(0, TokenKind::Slash, 0).eval() {
        Ok(Value::Float(x)) => assert!(x.is_nan()),
        other => panic!("expected NaN, got {other:?}"),
    }
}

#[test]
fn comparisons_yield_booleans() {
    assert_eq!(binary(3, TokenKind::Greater, 2.5).eval(), Ok(Value::Bool(true)));
    assert_eq!(binary(2, TokenKind::GreaterEq, 2).eval(), Ok(Value::Bool(true)));
    assert_eq!(binary(2, TokenKind::Less, 2).eval(), Ok(Value::Bool(false)));
    assert_eq!(binary(1.5, TokenKind::LessEq, 2).eval(), Ok(Value::Bool(true)));
}

#[test]
fn non_numeric_operand_names_its_side() {
    assert_eq!(binary("a", TokenKind::Plus, 1).eval(),
               Err(RuntimeError::OperandNotNumber { side:     Side::Left,
                                                    operator: "+".to_string(),
                                                    found:    "string",
                                                    line:     1, }));
    assert_eq!(binary(1, TokenKind::Less, true).eval(),
               Err(RuntimeError::OperandNotNumber { side:     Side::Right,
                                                    operator: "<".to_string(),
                                                    found:    "boolean",
                                                    line:     1, }));
}

#[test]
fn left_operand_is_checked_first() {
    let error = binary(Literal::Null, TokenKind::Star, "x").eval().unwrap_err();
    assert!(matches!(error,
                     RuntimeError::OperandNotNumber { side: Side::Left,
                                                      .. }));
}

#[test]
fn left_failure_skips_the_right_operand() {
    // Both operands fail; only the left one may be reported.
    let bad_left = Expr::unary(op(TokenKind::Bang), Expr::literal(1));
    let bad_right = Expr::unary(Token::fixed(TokenKind::Minus, 9), Expr::literal(true));
    let tree = Expr::binary(bad_left, op(TokenKind::Plus), bad_right);

    assert_eq!(tree.eval().unwrap_err().line(), 1);
}

#[test]
fn unary_minus_keeps_the_numeric_type() {
    let minus = op(TokenKind::Minus);
    assert_eq!(Expr::unary(minus.clone(), Expr::literal(10)).eval(), Ok(Value::Integer(-10)));
    assert_eq!(Expr::unary(minus.clone(), Expr::literal(2.5)).eval(), Ok(Value::Float(-2.5)));
    assert_eq!(Expr::unary(minus, Expr::literal(i64::MIN)).eval(),
               Err(RuntimeError::Overflow { line: 1 }));
}

#[test]
fn bang_requires_a_boolean() {
    let bang = op(TokenKind::Bang);
    assert_eq!(Expr::unary(bang.clone(), Expr::literal(false)).eval(), Ok(Value::Bool(true)));
    assert_eq!(Expr::unary(bang, Expr::literal(10)).eval(),
               Err(RuntimeError::InvalidUnaryOperand { operator: "!".to_string(),
                                                       found:    "integer",
                                                       line:     1, }));
}

#[test]
fn groups_evaluate_their_inner_expression() {
    let tree = Expr::binary(Expr::group(binary(1, TokenKind::Plus, 2)),
                            op(TokenKind::Star),
                            Expr::literal(3));
    assert_eq!(evaluate(&tree), Ok(Value::Float(9.0)));
}

#[test]
fn unsupported_operators_are_rejected() {
    assert_eq!(binary(1, TokenKind::Comma, 2).eval(),
               Err(RuntimeError::UnsupportedOperator { operator: ",".to_string(),
                                                       line:     1, }));
    assert_eq!(Expr::unary(op(TokenKind::Plus), Expr::literal(1)).eval(),
               Err(RuntimeError::UnsupportedOperator { operator: "+".to_string(),
                                                       line:     1, }));
}

#[test]
fn large_integers_still_coerce_to_floats() {
    let two_pow_53 = 1_i64 << 53;
    assert_eq!(binary(two_pow_53, TokenKind::Star, 1).eval(),
               Ok(Value::Float(9_007_199_254_740_992.0)));
    assert_eq!(binary(two_pow_53 + 1, TokenKind::Greater, 1).eval(), Ok(Value::Bool(true)));
    assert_eq!(binary(i64::MAX, TokenKind::Minus, 0).eval(),
               Ok(Value::Float(2_f64.powi(63))));
}

#[test]
fn literals_evaluate_to_themselves() {
    assert_eq!(Expr::literal("text").eval(), Ok(Value::from("text")));
    assert_eq!(Expr::literal(Literal::Null).eval(), Ok(Value::Null));
    assert_eq!(Value::Float(6.0).to_string(), "6");
    assert_eq!(Value::Null.type_name(), "null");
}
