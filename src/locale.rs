//! 料理説明文の言語選択

use crate::core::{MealError, MealResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 説明文のロケール
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// 英語（既定）
    #[default]
    English,
    /// ロシア語
    Russian,
}

impl Locale {
    /// 全ロケール
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Russian];

    /// ロケール名（serde と同じ表記）
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Russian => "russian",
        }
    }

    /// ロケールの短縮コード
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Russian => "ru",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = MealError;

    fn from_str(s: &str) -> MealResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "ru" | "russian" => Ok(Self::Russian),
            _ => Err(MealError::unknown_locale(s)),
        }
    }
}
