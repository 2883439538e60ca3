// 献立・式評価用のカスタムエラー型定義
// 料理の生成そのものは失敗しないため、エラーは文字列からの変換でのみ発生する

use thiserror::Error;

/// 献立関連のエラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MealError {
    #[error("未サポートの食事タイプ: {input}. 利用可能: meat, veggie")]
    UnknownDiet { input: String },

    #[error("未サポートのロケール: {input}. 利用可能: en, ru")]
    UnknownLocale { input: String },
}

impl MealError {
    /// 食事タイプ不明エラーの作成
    pub fn unknown_diet(input: impl Into<String>) -> Self {
        Self::UnknownDiet {
            input: input.into(),
        }
    }

    /// ロケール不明エラーの作成
    pub fn unknown_locale(input: impl Into<String>) -> Self {
        Self::UnknownLocale {
            input: input.into(),
        }
    }

    /// エラーの原因となった入力文字列を取得
    pub fn input(&self) -> &str {
        match self {
            Self::UnknownDiet { input } | Self::UnknownLocale { input } => input,
        }
    }
}

/// 式の構築時に発生するエラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("未サポートの関数: {name}. 利用可能: sqrt, abs")]
    UnknownFunction { name: String },

    #[error("未サポートの演算子: {symbol}. 利用可能: + - * /")]
    UnknownOperator { symbol: char },
}

impl ExpressionError {
    /// 関数名不明エラーの作成
    pub fn unknown_function(name: impl Into<String>) -> Self {
        Self::UnknownFunction { name: name.into() }
    }

    /// 演算子不明エラーの作成
    pub fn unknown_operator(symbol: char) -> Self {
        Self::UnknownOperator { symbol }
    }
}

/// 献立処理の結果型
pub type MealResult<T> = std::result::Result<T, MealError>;

/// 式構築の結果型
pub type ExpressionResult<T> = std::result::Result<T, ExpressionError>;
