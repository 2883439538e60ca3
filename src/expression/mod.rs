//! 算術式ツリー
//!
//! 数値・二項演算・関数呼び出し・変数をノードとして組み合わせ、
//! `Expression::evaluate` で値を計算する。評価は純粋で失敗しない
//! （ゼロ除算は無限大、負数の平方根は NaN になる）。

pub mod nodes;

use mockall::automock;

pub use nodes::{BinaryOperation, Function, FunctionCall, Number, Operator, Variable};

/// 式ノードの抽象化トレイト
#[automock]
pub trait Expression {
    /// 式を評価
    fn evaluate(&self) -> f64;
}

// Expression for Box<dyn Expression>
impl Expression for Box<dyn Expression> {
    fn evaluate(&self) -> f64 {
        self.as_ref().evaluate()
    }
}

/// `1.234 / -1.234`
pub fn division_sample() -> BinaryOperation {
    BinaryOperation::new(
        Box::new(Number::new(1.234)),
        Operator::Div,
        Box::new(Number::new(-1.234)),
    )
}

/// `abs(2 * sqrt(32 - 16))`
pub fn nested_call_sample() -> FunctionCall {
    let minus = BinaryOperation::new(
        Box::new(Number::new(32.0)),
        Operator::Minus,
        Box::new(Number::new(16.0)),
    );
    let call_sqrt = FunctionCall::new(Function::Sqrt, Box::new(minus));
    let mult = BinaryOperation::new(
        Box::new(Number::new(2.0)),
        Operator::Mul,
        Box::new(call_sqrt),
    );
    FunctionCall::new(Function::Abs, Box::new(mult))
}
