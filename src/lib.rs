//! 献立を題材にした Abstract Factory パターンのデモ
//!
//! - product: スープ・メインディッシュ・デザートの定義
//! - factories: 食事タイプから献立を作る静的ファクトリー
//! - locale: 説明文の言語
//! - expression: 算術式ツリーの評価
//!
//! エントリーポイントは挨拶文を出力するだけで、ファクトリーは使わない。

pub mod cli;
pub mod core;
pub mod expression;
pub mod factories;
pub mod locale;
pub mod product;

pub use crate::core::{ExpressionError, MealError};
pub use factories::{Diet, Meal, MealFactory, MeatDietFactory, VeggieDietFactory};
pub use locale::Locale;
pub use product::{Describe, Dessert, MainCourse, Soup};
