//! エラー型の定義
//!
//! このモジュールは、読み仮名変換の各段階で発生するすべてのエラー型を定義します。
//! いずれのエラーも回復されることはなく、呼び出し元でそのまま報告されます。

use std::error::Error;

/// yomigana専用のResult型
///
/// エラー型としてデフォルトで[`YomiganaError`]を使用します。
pub type Result<T, E = YomiganaError> = std::result::Result<T, E>;

/// yomiganaのエラー型
#[derive(Debug, thiserror::Error)]
pub enum YomiganaError {
    /// 入力の読み込みエラー
    ///
    /// 入力ストリームの読み込み中にI/Oエラーが発生した場合、
    /// または入力が有効なUTF-8でなかった場合に発生します。
    #[error("could not read input: {0}")]
    InputRead(#[source] std::io::Error),

    /// 入力が空
    ///
    /// 前後の空白を取り除いた結果、入力が空になった場合に発生します。
    #[error("No input text provided")]
    EmptyInput,

    /// 解析器の初期化エラー
    ///
    /// 辞書の読み込みやトークナイザーの構築に失敗した場合に発生します。
    #[error("failed to initialize tokenizer: {0}")]
    Initialization(#[source] Box<dyn Error + Send + Sync>),

    /// 形態素解析エラー
    ///
    /// 解析器が入力テキストを処理できなかった場合に発生します。
    #[error("failed to tokenize input: {0}")]
    Tokenization(String),
}

impl YomiganaError {
    /// 初期化エラーを生成します
    ///
    /// # 引数
    ///
    /// * `cause` - 初期化に失敗した原因
    pub fn initialization<E>(cause: E) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        Self::Initialization(cause.into())
    }

    /// 形態素解析エラーを生成します
    ///
    /// # 引数
    ///
    /// * `msg` - エラーメッセージ
    pub fn tokenization<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::Tokenization(msg.into())
    }
}
