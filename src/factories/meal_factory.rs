//! 献立ファクトリーの実装
//!
//! 食事タイプの集合は閉じているため、動的ディスパッチは使わない：
//! - Diet::meal: const fn によるルックアップテーブル
//! - MealFactory: 関連関数のみを持つ静的ファクトリー

use crate::core::{MealError, MealResult};
use crate::locale::Locale;
use crate::product::{Describe, MainCourse, Soup};
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 食事タイプ（ファミリーの選択子）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    /// 肉料理中心
    Meat,
    /// ベジタリアン
    Veggie,
}

impl Diet {
    /// 全食事タイプ
    pub const ALL: [Diet; 2] = [Diet::Meat, Diet::Veggie];

    /// 食事タイプに対応する献立を取得
    pub const fn meal(self) -> Meal {
        match self {
            Self::Meat => Meal::new(Soup::Borscht, MainCourse::Cutlet),
            Self::Veggie => Meal::new(Soup::PumpkinSoup, MainCourse::FriedPotatoes),
        }
    }

    /// スープを作成
    pub const fn create_soup(self) -> Soup {
        self.meal().soup
    }

    /// メインディッシュを作成
    pub const fn create_main_course(self) -> MainCourse {
        self.meal().main_course
    }

    /// 対応する静的ファクトリーの名前
    pub const fn factory_name(self) -> &'static str {
        match self {
            Self::Meat => MeatDietFactory::NAME,
            Self::Veggie => VeggieDietFactory::NAME,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Meat => "meat",
            Self::Veggie => "veggie",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Diet {
    type Err = MealError;

    fn from_str(s: &str) -> MealResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "meat" => Ok(Self::Meat),
            "veggie" | "vegetarian" => Ok(Self::Veggie),
            _ => Err(MealError::unknown_diet(s)),
        }
    }
}

/// 1食分の献立（スープとメインディッシュの組）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Meal {
    pub soup: Soup,
    pub main_course: MainCourse,
}

impl Meal {
    pub const fn new(soup: Soup, main_course: MainCourse) -> Self {
        Self { soup, main_course }
    }

    /// 指定ロケールでの説明文（スープ, メインディッシュ）
    pub fn descriptions(&self, locale: Locale) -> (&'static str, &'static str) {
        (
            self.soup.localized_description(locale),
            self.main_course.localized_description(locale),
        )
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.soup, self.main_course)
    }
}

/// 静的献立ファクトリー
///
/// 型パラメータで食事タイプを指定し、コンパイル時に生成される料理が確定する
pub trait MealFactory {
    /// ファクトリー名（コンパイル時文字列）
    const NAME: &'static str;

    /// 説明（コンパイル時文字列）
    const DESCRIPTION: &'static str;

    /// このファクトリーが担当する食事タイプ
    const DIET: Diet;

    /// スープを作成
    fn create_soup() -> Soup {
        Self::DIET.create_soup()
    }

    /// メインディッシュを作成
    fn create_main_course() -> MainCourse {
        Self::DIET.create_main_course()
    }

    /// スープとメインディッシュをまとめて作成
    fn create_meal() -> Meal {
        let meal = Meal::new(Self::create_soup(), Self::create_main_course());
        trace!("{}: 献立を作成 ({meal})", Self::NAME);
        meal
    }

    /// ファクトリーの説明を取得
    fn description() -> &'static str {
        Self::DESCRIPTION
    }

    /// ファクトリーの型名を取得
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// 肉料理ファクトリー（ボルシチ + カツレツ）
#[derive(Debug, Clone, Copy, Default)]
pub struct MeatDietFactory;

impl MealFactory for MeatDietFactory {
    const NAME: &'static str = "meat_diet";
    const DESCRIPTION: &'static str = "肉料理中心の献立";
    const DIET: Diet = Diet::Meat;
}

/// ベジタリアンファクトリー（パンプキンスープ + フライドポテト）
#[derive(Debug, Clone, Copy, Default)]
pub struct VeggieDietFactory;

impl MealFactory for VeggieDietFactory {
    const NAME: &'static str = "veggie_diet";
    const DESCRIPTION: &'static str = "野菜中心の献立";
    const DIET: Diet = Diet::Veggie;
}
