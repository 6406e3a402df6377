//! ユーザー読み辞書
//!
//! 形態素解析の辞書では期待どおりの読みにならない語について、
//! 表記と置換後の文字列の組を登録しておき、解析の前に入力テキストを置き換えます。
//!
//! 置換は長い表記から順に行うため、`東京都` と `東京` の両方が登録されている場合でも
//! `東京都` が先に置き換えられ、部分的な置換は起こりません。
//!
//! ## ファイル形式
//!
//! 1行に1項目、`表記,置換後` の2列からなるCSVです。
//! 空行と `#` で始まる行は無視します。
//!
//! ```text
//! # 地名
//! 東京都,とうきょうと
//! 東京,とうきょう
//! ```
//!
//! 置換後の文字列も解析器に渡されるため、ひらがなで書くことを想定しています。

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::errors::{Result, YomiganaError};
use crate::utils::parse_csv_row;

/// ユーザー読み辞書の1項目
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// 置換対象の表記
    pub from: String,

    /// 置換後の文字列
    pub to: String,
}

/// ユーザー読み辞書
///
/// 項目は表記の文字数が長い順に保持されます。
/// 同じ長さの項目は登録順に適用されます。
#[derive(Clone, Debug, Default)]
pub struct UserDictionary {
    entries: Vec<Entry>,
}

impl UserDictionary {
    /// 表記と置換後の文字列の組から辞書を作成します。
    ///
    /// 表記が空の項目は無視します。
    ///
    /// # 例
    ///
    /// ```
    /// use yomigana::UserDictionary;
    ///
    /// let dict = UserDictionary::from_entries([("東京", "とうきょう"), ("東京都", "とうきょうと")]);
    /// assert_eq!(dict.apply("東京都と東京"), "とうきょうとととうきょう");
    /// ```
    pub fn from_entries<I, S, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut entries: Vec<_> = entries
            .into_iter()
            .map(|(from, to)| Entry {
                from: from.into(),
                to: to.into(),
            })
            .filter(|e| !e.from.is_empty())
            .collect();
        entries.sort_by_key(|e| std::cmp::Reverse(e.from.chars().count()));
        Self { entries }
    }

    /// CSV形式のリーダーから辞書を読み込みます。
    ///
    /// # 引数
    ///
    /// * `rdr` - `表記,置換後` の行を含むリーダー
    ///
    /// # エラー
    ///
    /// 読み込みに失敗した場合や、列が2つに満たない行がある場合は
    /// [`YomiganaError::Initialization`] を返します。
    pub fn from_reader<R>(rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut entries = vec![];
        for (i, line) in BufReader::new(rdr).lines().enumerate() {
            let line = line.map_err(YomiganaError::initialization)?;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = parse_csv_row(line).into_iter();
            match (fields.next(), fields.next()) {
                (Some(from), Some(to)) => entries.push((from, to)),
                _ => {
                    return Err(YomiganaError::initialization(format!(
                        "user dictionary line {}: expected `from,to`, got {line:?}",
                        i + 1
                    )))
                }
            }
        }
        Ok(Self::from_entries(entries))
    }

    /// ファイルから辞書を読み込みます。
    ///
    /// # エラー
    ///
    /// ファイルを開けない場合や形式が不正な場合は
    /// [`YomiganaError::Initialization`] を返します。
    pub fn from_path<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        log::info!("Loading the user dictionary from {}", path.display());
        let file = File::open(path).map_err(|e| {
            YomiganaError::initialization(format!("{}: {e}", path.display()))
        })?;
        let dict = Self::from_reader(file)?;
        log::info!("{} user dictionary entries", dict.len());
        Ok(dict)
    }

    /// 項目を適用順に返します。
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// 項目数を返します。
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 項目がない場合に `true` を返します。
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// テキスト中の表記を置換後の文字列に置き換えます。
    ///
    /// 置換が1つも起こらなかった場合は入力をそのまま借用して返します。
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut result = Cow::Borrowed(text);
        for entry in &self.entries {
            if result.contains(entry.from.as_str()) {
                result = Cow::Owned(result.replace(entry.from.as_str(), &entry.to));
            }
        }
        result
    }
}
