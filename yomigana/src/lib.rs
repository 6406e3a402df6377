//! # yomigana
//!
//! 日本語テキストを形態素解析し、各単語の読みをひらがなで出力するライブラリです。
//!
//! ## 概要
//!
//! 漢字は文字そのものから読みが決まらないため、辞書を用いた形態素解析で単語に分割し、
//! 辞書に登録されたカタカナの読みを取り出します。読みはひらがなに変換して連結し、
//! 読みを持たない単語(記号や未知語など)は表層形のまま出力します。
//!
//! 形態素解析には [vibrato-rkyv](https://crates.io/crates/vibrato-rkyv) を使用しますが、
//! 変換処理は [`Analyzer`] トレイトのみに依存しているため、他の解析器に差し替えることもできます。
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use vibrato_rkyv::{SystemDictionaryBuilder, Tokenizer};
//! use yomigana::{Converter, ReadingField, VibratoAnalyzer};
//!
//! let lexicon_csv = "東京,0,0,100,名詞,固有名詞,地域,一般,*,*,東京,トウキョウ,トーキョー
//! に,0,0,100,助詞,格助詞,一般,*,*,*,に,ニ,ニ
//! 行く,0,0,100,動詞,自立,*,*,五段・カ行促音便,基本形,行く,イク,イク";
//! let matrix_def = "1 1\n0 0 0";
//! let char_def = "DEFAULT 0 1 0";
//! let unk_def = "DEFAULT,0,0,100,名詞,一般,*,*,*,*,*";
//!
//! let dict = SystemDictionaryBuilder::from_readers(
//!     lexicon_csv.as_bytes(),
//!     matrix_def.as_bytes(),
//!     char_def.as_bytes(),
//!     unk_def.as_bytes(),
//! )?;
//!
//! let tokenizer = Tokenizer::from_inner(dict);
//! let analyzer = VibratoAnalyzer::from_tokenizer(tokenizer, ReadingField::IPADIC);
//! let mut converter = Converter::new(analyzer);
//!
//! assert_eq!(converter.convert("東京に行く")?, "とうきょうにいく");
//! assert_eq!(converter.convert("東京にABC")?, "とうきょうにABC");
//! # Ok(())
//! # }
//! ```

/// 形態素解析器とのインターフェース
pub mod analyzer;

/// 読み仮名変換
pub mod converter;

/// エラー型の定義
pub mod errors;

/// カタカナからひらがなへの変換
pub mod kana;

/// ユーザー読み辞書
pub mod userdic;

mod utils;

#[cfg(test)]
mod tests;

// Re-exports
pub use analyzer::vibrato::{DictionarySource, VibratoAnalyzer, VibratoConfig};
pub use analyzer::{Analyzer, Morpheme, ReadingField};
pub use converter::{read_input, Converter};
pub use userdic::UserDictionary;
pub use errors::{Result, YomiganaError};

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
