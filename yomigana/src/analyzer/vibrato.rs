//! vibrato-rkyv による形態素解析器
//!
//! 辞書の読み込みからトークナイザーの構築までを [`VibratoAnalyzer::initialize`] で行い、
//! 解析結果の各トークンの素性文字列から読みを取り出して [`Morpheme`] に変換します。

use std::path::{Path, PathBuf};

use vibrato_rkyv::tokenizer::worker::Worker;
use vibrato_rkyv::{CacheStrategy, Dictionary, LoadMode, Tokenizer};

#[cfg(feature = "download")]
pub use vibrato_rkyv::dictionary::PresetDictionaryKind;

use crate::analyzer::{Analyzer, Morpheme, ReadingField};
use crate::errors::{Result, YomiganaError};

/// システム辞書の取得元
#[derive(Clone, Debug)]
pub enum DictionarySource {
    /// プリセット辞書
    ///
    /// 初回はダウンロードとチェックサム検証を行い、`dir` に保存します。
    /// 2回目以降は保存済みのファイルを使用します。
    #[cfg(feature = "download")]
    Preset {
        /// 辞書の種類
        kind: PresetDictionaryKind,
        /// 保存先ディレクトリ
        dir: PathBuf,
    },

    /// コンパイル済みの辞書ファイル
    ///
    /// 拡張子が `.zst` の場合はZstandard圧縮辞書として展開し、
    /// 展開結果をグローバルキャッシュに保存します。
    Path(PathBuf),
}

impl DictionarySource {
    /// 辞書を読み込みます。
    fn load(&self) -> Result<Dictionary> {
        match self {
            #[cfg(feature = "download")]
            Self::Preset { kind, dir } => {
                log::info!("Loading the {} preset dictionary from {}", kind, dir.display());
                Dictionary::from_preset_with_download(*kind, dir)
                    .map_err(YomiganaError::initialization)
            }
            Self::Path(path) => {
                log::info!("Loading the dictionary from {}", path.display());
                if is_zstd(path) {
                    Dictionary::from_zstd(path, CacheStrategy::GlobalCache)
                        .map_err(YomiganaError::initialization)
                } else {
                    Dictionary::from_path(path, LoadMode::Validate)
                        .map_err(YomiganaError::initialization)
                }
            }
        }
    }
}

fn is_zstd(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "zst")
}

/// プリセット辞書のデフォルトの保存先を返します。
///
/// ユーザーのキャッシュディレクトリ内の `yomigana` サブディレクトリです。
/// キャッシュディレクトリが決定できない場合はカレントディレクトリの `.cache` を使います。
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from(".cache"))
        .join("yomigana")
}

/// [`VibratoAnalyzer`] の設定
#[derive(Clone, Debug)]
pub struct VibratoConfig {
    /// システム辞書の取得元
    pub source: DictionarySource,

    /// 読みが格納されている素性の列
    pub reading_field: ReadingField,

    /// 入力中の空白を無視するかどうか
    ///
    /// 辞書の char.def に `SPACE` が定義されている必要があります。
    pub ignore_space: bool,

    /// 未知語の最大グルーピング長。`None` は無制限。
    pub max_grouping_len: Option<usize>,
}

impl VibratoConfig {
    /// 辞書の取得元を指定して、その他はデフォルト値で設定を作成します。
    pub fn new(source: DictionarySource) -> Self {
        Self {
            source,
            reading_field: ReadingField::default(),
            ignore_space: false,
            max_grouping_len: None,
        }
    }
}

/// vibrato-rkyv のトークナイザーを使う形態素解析器
pub struct VibratoAnalyzer {
    worker: Worker,
    reading_field: ReadingField,
}

impl VibratoAnalyzer {
    /// 構築済みのトークナイザーから解析器を作成します。
    ///
    /// # 引数
    ///
    /// * `tokenizer` - 使用するトークナイザー
    /// * `reading_field` - 読みが格納されている素性の列
    pub fn from_tokenizer(tokenizer: Tokenizer, reading_field: ReadingField) -> Self {
        Self {
            worker: tokenizer.new_worker(),
            reading_field,
        }
    }
}

impl Analyzer for VibratoAnalyzer {
    type Config = VibratoConfig;

    fn initialize(config: &VibratoConfig) -> Result<Self> {
        let dict = config.source.load()?;
        let tokenizer = Tokenizer::new(dict)
            .ignore_space(config.ignore_space)
            .map_err(YomiganaError::initialization)?
            .max_grouping_len(config.max_grouping_len.unwrap_or(0));
        log::info!("Ready to tokenize");
        Ok(Self::from_tokenizer(tokenizer, config.reading_field))
    }

    /// テキスト全体を1つの文として解析します。
    ///
    /// 改行を含む入力も分割せずにそのまま渡します。
    fn tokenize(&mut self, text: &str) -> Result<Vec<Morpheme>> {
        let field = self.reading_field;
        self.worker.reset_sentence(text);
        self.worker.tokenize();
        Ok(self
            .worker
            .token_iter()
            .map(|t| Morpheme::new(t.surface(), field.extract(t.feature())))
            .collect())
    }
}
