//! 入力テキストをひらがなの読みに変換する
//!
//! [`Converter`] は形態素解析器を1つ所有し、解析結果の形態素を順に走査して
//! 読み(なければ表層形)を連結します。解析器はグローバルな共有インスタンスではなく、
//! 呼び出し側が明示的に構築して渡します。
//!
//! [`UserDictionary`] を設定した場合は、解析の前に入力テキストへ置換を適用します。

use std::io::Read;

use crate::analyzer::Analyzer;
use crate::errors::{Result, YomiganaError};
use crate::userdic::UserDictionary;

/// 読み仮名変換器
pub struct Converter<A> {
    analyzer: A,
    user_dictionary: UserDictionary,
}

impl<A> Converter<A>
where
    A: Analyzer,
{
    /// 構築済みの解析器から変換器を作成します。
    pub fn new(analyzer: A) -> Self {
        Self {
            analyzer,
            user_dictionary: UserDictionary::default(),
        }
    }

    /// 設定から解析器を初期化して変換器を作成します。
    ///
    /// # エラー
    ///
    /// 解析器の初期化に失敗した場合、[`YomiganaError::Initialization`] を返します。
    pub fn initialize(config: &A::Config) -> Result<Self> {
        Ok(Self::new(A::initialize(config)?))
    }

    /// 解析の前に適用するユーザー読み辞書を設定します。
    pub fn with_user_dictionary(mut self, user_dictionary: UserDictionary) -> Self {
        self.user_dictionary = user_dictionary;
        self
    }

    #[cfg(test)]
    pub(crate) fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// テキストをひらがなの読みに変換します。
    ///
    /// ユーザー読み辞書の置換を適用した後、各形態素について、
    /// 読みがあればそれをひらがなにしたもの、なければ表層形を、入力と同じ順序で連結します。
    ///
    /// # エラー
    ///
    /// 解析に失敗した場合は [`YomiganaError::Tokenization`] を返します。
    /// その場合、途中までの結果は返しません。
    pub fn convert(&mut self, text: &str) -> Result<String> {
        let text = self.user_dictionary.apply(text);
        let morphemes = self.analyzer.tokenize(&text)?;
        log::debug!("{} morphemes", morphemes.len());

        let mut result = String::with_capacity(text.len());
        for m in &morphemes {
            result.push_str(&m.contribution());
        }
        Ok(result)
    }
}

/// 入力を終端まで読み込みます。
///
/// # エラー
///
/// - 読み込み中のI/Oエラー、および入力が有効なUTF-8でない場合は
///   [`YomiganaError::InputRead`] を返します。
/// - 前後の空白を除いて空になる入力は [`YomiganaError::EmptyInput`] を返します。
pub fn read_input<R>(mut rdr: R) -> Result<String>
where
    R: Read,
{
    let mut text = String::new();
    rdr.read_to_string(&mut text)
        .map_err(YomiganaError::InputRead)?;
    if text.trim().is_empty() {
        return Err(YomiganaError::EmptyInput);
    }
    Ok(text)
}
