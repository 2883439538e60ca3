//! 献立ファクトリーモジュール - コンパイル時に確定する Abstract Factory
//!
//! - Diet: 食事タイプから献立への静的ルックアップ
//! - MealFactory: 型レベルで食事タイプを固定した静的ファクトリー
//!
//! どのファクトリーもエントリーポイントからは呼ばれない（デモ用）

pub mod meal_factory;

pub use meal_factory::{Diet, Meal, MealFactory, MeatDietFactory, VeggieDietFactory};
