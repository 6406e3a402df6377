//! 日本語テキストをひらがなの読みに変換するユーティリティ
//!
//! このバイナリは、標準入力から読み込んだテキスト全体を形態素解析し、
//! 各単語の読みをひらがなにして連結した結果を標準出力に出力します。
//! 読みを持たない単語は元の表記のまま出力します。

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use thiserror::Error;

use yomigana::analyzer::vibrato::{default_cache_dir, PresetDictionaryKind};
use yomigana::{
    read_input, Analyzer, Converter, DictionarySource, ReadingField, UserDictionary,
    VibratoAnalyzer, VibratoConfig, YomiganaError,
};

/// プリセット辞書
#[derive(Clone, Copy, Debug)]
enum Preset {
    Ipadic,
    UnidicCwj,
    UnidicCsj,
}

impl FromStr for Preset {
    type Err = &'static str;

    /// 文字列からプリセット辞書を解析する
    ///
    /// # 引数
    ///
    /// * `name` - プリセット名 ("ipadic", "unidic-cwj", "unidic-csj")
    ///
    /// # 戻り値
    ///
    /// 解析に成功した場合は`Preset`、失敗した場合はエラーメッセージ
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "ipadic" => Ok(Self::Ipadic),
            "unidic-cwj" => Ok(Self::UnidicCwj),
            "unidic-csj" => Ok(Self::UnidicCsj),
            _ => Err("Could not parse a preset"),
        }
    }
}

impl From<Preset> for PresetDictionaryKind {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Ipadic => Self::Ipadic,
            Preset::UnidicCwj => Self::UnidicCwj,
            Preset::UnidicCsj => Self::UnidicCsj,
        }
    }
}

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(name = "hiraganize", version, about = "Converts Japanese text to its hiragana reading")]
struct Args {
    /// System dictionary (in zstd or the raw format). Overrides --preset.
    #[clap(short = 'i', long)]
    sysdic: Option<PathBuf>,

    /// Preset dictionary downloaded on first use. Choices are ipadic, unidic-cwj, and unidic-csj.
    #[clap(short = 'p', long, default_value = "ipadic")]
    preset: Preset,

    /// Directory to store preset dictionaries in.
    #[clap(long)]
    cache_dir: Option<PathBuf>,

    /// Feature column holding the katakana reading (7 for IPADIC).
    #[clap(short = 'r', long, default_value_t = ReadingField::IPADIC.index())]
    reading_field: usize,

    /// Ignores white spaces in input strings.
    #[clap(short = 'S', long)]
    ignore_space: bool,

    /// Maximum length of unknown words.
    #[clap(short = 'M', long)]
    max_grouping_len: Option<usize>,

    /// User reading dictionary (CSV rows of `from,to`), applied longest entry first before analysis.
    #[clap(short = 'u', long)]
    userdic: Option<PathBuf>,
}

impl Args {
    /// 引数から解析器の設定を組み立てる
    fn config(&self) -> VibratoConfig {
        let source = match &self.sysdic {
            Some(path) => DictionarySource::Path(path.clone()),
            None => {
                let kind = PresetDictionaryKind::from(self.preset);
                let dir = self
                    .cache_dir
                    .clone()
                    .unwrap_or_else(default_cache_dir)
                    .join(kind.name());
                DictionarySource::Preset { kind, dir }
            }
        };
        VibratoConfig {
            source,
            reading_field: ReadingField::new(self.reading_field),
            ignore_space: self.ignore_space,
            max_grouping_len: self.max_grouping_len,
        }
    }
}

/// 実行中に発生する可能性のあるエラー
#[derive(Debug, Error)]
enum HiraganizeError {
    /// 入力の読み込み・辞書の初期化・変換中のエラー
    #[error(transparent)]
    Yomigana(#[from] YomiganaError),
    /// 標準出力への書き込みエラー
    #[error("could not write output: {0}")]
    Output(#[from] io::Error),
}

/// 入力を読み込み、辞書を初期化して変換結果を出力する
///
/// 入力の検証は辞書の初期化より先に行うため、空の入力で辞書がダウンロードされることはない。
/// 出力は変換がすべて成功した後にまとめて書き込む。
fn hiraganize<A, R, W>(
    config: &A::Config,
    userdic: Option<&Path>,
    rdr: R,
    mut wtr: W,
) -> Result<(), HiraganizeError>
where
    A: Analyzer,
    R: Read,
    W: Write,
{
    let text = read_input(rdr)?;
    log::debug!("Read {} bytes from stdin", text.len());

    let user_dictionary = userdic
        .map(UserDictionary::from_path)
        .transpose()?
        .unwrap_or_default();
    let mut converter = Converter::<A>::initialize(config)?.with_user_dictionary(user_dictionary);
    let output = converter.convert(&text)?;

    wtr.write_all(output.as_bytes())?;
    wtr.flush()?;
    Ok(())
}

fn run(args: &Args) -> Result<(), HiraganizeError> {
    hiraganize::<VibratoAnalyzer, _, _>(
        &args.config(),
        args.userdic.as_deref(),
        io::stdin().lock(),
        io::stdout().lock(),
    )
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use yomigana::Morpheme;

    /// 初期化には成功するが解析には必ず失敗する解析器
    struct BrokenAnalyzer;

    impl Analyzer for BrokenAnalyzer {
        type Config = ();

        fn initialize(_config: &()) -> yomigana::Result<Self> {
            Ok(Self)
        }

        fn tokenize(&mut self, _text: &str) -> yomigana::Result<Vec<Morpheme>> {
            Err(YomiganaError::tokenization("lattice has no path"))
        }
    }

    #[test]
    fn test_preset_from_str() {
        assert!(matches!("ipadic".parse::<Preset>(), Ok(Preset::Ipadic)));
        assert!(matches!("unidic-cwj".parse::<Preset>(), Ok(Preset::UnidicCwj)));
        assert!(matches!("unidic-csj".parse::<Preset>(), Ok(Preset::UnidicCsj)));
        assert!("IPADIC".parse::<Preset>().is_err());
    }

    #[test]
    fn test_tokenization_failure_writes_nothing() {
        let mut out = vec![];
        let err = hiraganize::<BrokenAnalyzer, _, _>(&(), None, "東京に行く".as_bytes(), &mut out)
            .unwrap_err();
        assert_eq!("failed to tokenize input: lattice has no path", err.to_string());
        assert!(out.is_empty());
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        let mut out = vec![];
        let err = hiraganize::<BrokenAnalyzer, _, _>(&(), None, " \n".as_bytes(), &mut out)
            .unwrap_err();
        assert_eq!("No input text provided", err.to_string());
        assert!(out.is_empty());
    }
}
