//! 式ノードの実装

use super::Expression;
use crate::core::{ExpressionError, ExpressionResult};
use std::fmt;
use std::str::FromStr;

/// 数値リテラル
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number {
    value: f64,
}

impl Number {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Expression for Number {
    fn evaluate(&self) -> f64 {
        self.value
    }
}

/// 二項演算子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Div,
    Mul,
}

impl Operator {
    /// 演算子の記号
    pub const fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Div => '/',
            Self::Mul => '*',
        }
    }

    /// 左右の値に演算子を適用
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Plus => left + right,
            Self::Minus => left - right,
            Self::Div => left / right,
            Self::Mul => left * right,
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = ExpressionError;

    fn try_from(symbol: char) -> ExpressionResult<Self> {
        match symbol {
            '+' => Ok(Self::Plus),
            '-' => Ok(Self::Minus),
            '/' => Ok(Self::Div),
            '*' => Ok(Self::Mul),
            other => Err(ExpressionError::unknown_operator(other)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// 二項演算
pub struct BinaryOperation {
    left: Box<dyn Expression>,
    op: Operator,
    right: Box<dyn Expression>,
}

impl BinaryOperation {
    pub fn new(left: Box<dyn Expression>, op: Operator, right: Box<dyn Expression>) -> Self {
        Self { left, op, right }
    }

    /// 記号から演算子を解決して作成
    pub fn with_symbol(
        left: Box<dyn Expression>,
        symbol: char,
        right: Box<dyn Expression>,
    ) -> ExpressionResult<Self> {
        Ok(Self::new(left, Operator::try_from(symbol)?, right))
    }

    pub fn left(&self) -> &dyn Expression {
        self.left.as_ref()
    }

    pub fn right(&self) -> &dyn Expression {
        self.right.as_ref()
    }

    pub fn operation(&self) -> Operator {
        self.op
    }
}

impl Expression for BinaryOperation {
    fn evaluate(&self) -> f64 {
        let left = self.left.evaluate();
        let right = self.right.evaluate();
        self.op.apply(left, right)
    }
}

/// 呼び出し可能な関数（sqrt と abs のみ）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sqrt,
    Abs,
}

impl Function {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
        }
    }

    pub fn apply(self, arg: f64) -> f64 {
        match self {
            Self::Sqrt => arg.sqrt(),
            Self::Abs => arg.abs(),
        }
    }
}

impl FromStr for Function {
    type Err = ExpressionError;

    fn from_str(s: &str) -> ExpressionResult<Self> {
        match s {
            "sqrt" => Ok(Self::Sqrt),
            "abs" => Ok(Self::Abs),
            _ => Err(ExpressionError::unknown_function(s)),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 関数呼び出し
pub struct FunctionCall {
    function: Function,
    arg: Box<dyn Expression>,
}

impl FunctionCall {
    pub fn new(function: Function, arg: Box<dyn Expression>) -> Self {
        Self { function, arg }
    }

    /// 関数名から作成（sqrt, abs 以外はエラー）
    pub fn named(name: &str, arg: Box<dyn Expression>) -> ExpressionResult<Self> {
        Ok(Self::new(name.parse()?, arg))
    }

    pub fn name(&self) -> &'static str {
        self.function.name()
    }

    pub fn function(&self) -> Function {
        self.function
    }

    pub fn arg(&self) -> &dyn Expression {
        self.arg.as_ref()
    }
}

impl Expression for FunctionCall {
    fn evaluate(&self) -> f64 {
        self.function.apply(self.arg.evaluate())
    }
}

/// 変数（値の束縛はなく、常に 0 と評価される）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Expression for Variable {
    fn evaluate(&self) -> f64 {
        0.0
    }
}
