//! 料理（プロダクト）の定義
//!
//! カテゴリごとに閉じた列挙型で表現し、説明文は固定リテラルに対応付ける：
//! - Soup: スープ
//! - MainCourse: メインディッシュ
//! - Dessert: デザート（宣言のみで、どのファクトリーも生成しない）

use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 料理の説明文を提供するトレイト
pub trait Describe {
    /// 料理の説明文（英語）を取得
    fn description(&self) -> &'static str;

    /// 指定ロケールの説明文を取得
    ///
    /// ローカライズされたリテラルがない料理は英語の説明文を返す
    fn localized_description(&self, _locale: Locale) -> &'static str {
        self.description()
    }
}

/// スープ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Soup {
    Borscht,
    PumpkinSoup,
}

impl Soup {
    pub const ALL: [Soup; 2] = [Soup::Borscht, Soup::PumpkinSoup];
}

impl Describe for Soup {
    fn description(&self) -> &'static str {
        match self {
            Self::Borscht => "Borscht",
            Self::PumpkinSoup => "PumpkinSoup",
        }
    }

    fn localized_description(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::English, _) => self.description(),
            (Locale::Russian, Self::Borscht) => "Борщ",
            (Locale::Russian, Self::PumpkinSoup) => "Тыквенный суп",
        }
    }
}

/// メインディッシュ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MainCourse {
    FriedPotatoes,
    Cutlet,
}

impl MainCourse {
    pub const ALL: [MainCourse; 2] = [MainCourse::FriedPotatoes, MainCourse::Cutlet];
}

impl Describe for MainCourse {
    fn description(&self) -> &'static str {
        match self {
            Self::FriedPotatoes => "FriedPotatoes",
            Self::Cutlet => "Cutlet",
        }
    }
}

/// デザート
///
/// 値を持たない型。どのファクトリーもデザートを生成しない
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dessert {}

impl Describe for Dessert {
    fn description(&self) -> &'static str {
        match *self {}
    }
}

impl fmt::Display for Soup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl fmt::Display for MainCourse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
