//! 形態素解析器とのインターフェース
//!
//! 変換処理は形態素解析器に対して「初期化」と「トークン化」の2つの機能だけを要求します。
//! このモジュールはその境界となる [`Analyzer`] トレイトと、解析結果を受け渡すための
//! [`Morpheme`] 型、および辞書の素性文字列から読みを取り出す [`ReadingField`] を提供します。
//!
//! vibrato-rkyv による実装は [`vibrato`] モジュールにあります。

pub mod vibrato;

use std::borrow::Cow;

use crate::errors::Result;
use crate::kana::to_hiragana;
use crate::utils::parse_csv_row;

/// 読みが未登録であることを示す素性の値
pub(crate) const UNKNOWN_READING: &str = "*";

/// 形態素解析器
///
/// 入力テキストを左から右へ隙間なく覆う形態素列に分割します。
/// 分割の境界や読みの決定方法は実装側の責務です。
pub trait Analyzer {
    /// 初期化に必要な設定
    type Config;

    /// 設定から解析器を構築します。
    ///
    /// # エラー
    ///
    /// 辞書の読み込みなどに失敗した場合、
    /// [`YomiganaError::Initialization`](crate::errors::YomiganaError::Initialization)を返します。
    fn initialize(config: &Self::Config) -> Result<Self>
    where
        Self: Sized;

    /// テキストを形態素列に分割します。
    ///
    /// # エラー
    ///
    /// 解析に失敗した場合、
    /// [`YomiganaError::Tokenization`](crate::errors::YomiganaError::Tokenization)を返します。
    fn tokenize(&mut self, text: &str) -> Result<Vec<Morpheme>>;
}

/// 解析器が返す1つの形態素
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Morpheme {
    /// 入力テキスト中の表層形
    pub surface: String,

    /// カタカナ表記の読み
    pub reading: Option<String>,
}

impl Morpheme {
    /// 新しい形態素を作成します。
    pub fn new<S>(surface: S, reading: Option<String>) -> Self
    where
        S: Into<String>,
    {
        Self {
            surface: surface.into(),
            reading,
        }
    }

    /// 読みが利用可能な場合はその読みを返します。
    ///
    /// 空文字列と `*` はどちらも読みなしとして扱います。
    pub fn reading(&self) -> Option<&str> {
        self.reading
            .as_deref()
            .filter(|r| !r.is_empty() && *r != UNKNOWN_READING)
    }

    /// 出力に連結する文字列を返します。
    ///
    /// 読みがあればひらがなに変換した読みを、なければ表層形をそのまま返します。
    /// 表層形も空であれば空文字列になります。
    ///
    /// # 例
    ///
    /// ```
    /// use yomigana::Morpheme;
    ///
    /// let m = Morpheme::new("東京", Some("トウキョウ".to_string()));
    /// assert_eq!(m.contribution(), "とうきょう");
    ///
    /// let m = Morpheme::new("ABC", None);
    /// assert_eq!(m.contribution(), "ABC");
    /// ```
    pub fn contribution(&self) -> Cow<'_, str> {
        match self.reading() {
            Some(reading) => Cow::Owned(to_hiragana(reading)),
            None => Cow::Borrowed(&self.surface),
        }
    }
}

/// 素性文字列の中で読みが格納されている列の位置
///
/// 位置は表層形・左右文脈ID・コストを除いた素性部分の0始まりの番号です。
/// IPADICでは `名詞,固有名詞,地域,一般,*,*,東京,トウキョウ,トーキョー` のように
/// 7番目の列に読みが入っています。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadingField(usize);

impl ReadingField {
    /// IPADICの読みの列
    pub const IPADIC: Self = Self(7);

    /// 列番号を指定して作成します。
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// 列番号を返します。
    pub const fn index(self) -> usize {
        self.0
    }

    /// 素性文字列から読みを取り出します。
    ///
    /// 列が存在しない場合、値が空の場合、値が `*` の場合は `None` を返します。
    ///
    /// # 例
    ///
    /// ```
    /// use yomigana::ReadingField;
    ///
    /// let feature = "名詞,固有名詞,地域,一般,*,*,東京,トウキョウ,トーキョー";
    /// assert_eq!(ReadingField::IPADIC.extract(feature).as_deref(), Some("トウキョウ"));
    /// assert_eq!(ReadingField::IPADIC.extract("名詞,一般,*,*,*,*,*"), None);
    /// ```
    pub fn extract(self, feature: &str) -> Option<String> {
        feature_field(feature, self.0).filter(|r| !r.is_empty() && r != UNKNOWN_READING)
    }
}

impl Default for ReadingField {
    fn default() -> Self {
        Self::IPADIC
    }
}

/// 素性文字列から `idx` 番目の列を取り出します。
fn feature_field(feature: &str, idx: usize) -> Option<String> {
    parse_csv_row(feature).into_iter().nth(idx)
}
