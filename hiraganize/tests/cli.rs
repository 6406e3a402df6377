//! hiraganize バイナリの入出力と終了コードに関するテスト
//!
//! プリセット辞書のダウンロードを避けるため、小さな辞書をその場でビルドして
//! `--sysdic` で渡します。

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{self, Output};

use tempfile::tempdir;
use vibrato_rkyv::SystemDictionaryBuilder;

const LEXICON_CSV: &str = "\
東京,0,0,100,名詞,固有名詞,地域,一般,*,*,東京,トウキョウ,トーキョー
に,0,0,100,助詞,格助詞,一般,*,*,*,に,ニ,ニ
行く,0,0,100,動詞,自立,*,*,五段・カ行促音便,基本形,行く,イク,イク";
const MATRIX_DEF: &str = "1 1\n0 0 0";
const CHAR_DEF: &str = "DEFAULT 0 0 1";
const UNK_DEF: &str = "DEFAULT,0,0,100,名詞,一般,*,*,*,*,*";

fn write_dict(dir: &Path) -> PathBuf {
    let dict = SystemDictionaryBuilder::from_readers(
        LEXICON_CSV.as_bytes(),
        MATRIX_DEF.as_bytes(),
        CHAR_DEF.as_bytes(),
        UNK_DEF.as_bytes(),
    )
    .unwrap();
    let path = dir.join("system.dic");
    let mut file = File::create(&path).unwrap();
    dict.write(&mut file).unwrap();
    path
}

fn run<I>(args: &[&str], input: I) -> io::Result<Output>
where
    I: AsRef<[u8]>,
{
    let mut child = process::Command::new(env!("CARGO_BIN_EXE_hiraganize"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(process::Stdio::piped())
        .stdout(process::Stdio::piped())
        .stderr(process::Stdio::piped())
        .spawn()?;

    {
        let mut stdin = child.stdin.take().unwrap();
        stdin.write_all(input.as_ref())?;
    }

    child.wait_with_output()
}

#[test]
fn test_convert() {
    let dir = tempdir().unwrap();
    let sysdic = write_dict(dir.path());

    let output = run(&["-i", sysdic.to_str().unwrap()], "東京に行く\n").unwrap();
    assert_eq!(Some(0), output.status.code());
    assert_eq!("とうきょうにいく\n", String::from_utf8(output.stdout).unwrap());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_unknown_words_pass_through() {
    let dir = tempdir().unwrap();
    let sysdic = write_dict(dir.path());

    let output = run(&["-i", sysdic.to_str().unwrap()], "Rustで東京に行く").unwrap();
    assert_eq!(Some(0), output.status.code());
    assert_eq!("Rustでとうきょうにいく", String::from_utf8(output.stdout).unwrap());
}

#[test]
fn test_reading_field_option() {
    let dir = tempdir().unwrap();
    let sysdic = write_dict(dir.path());

    let output = run(&["-i", sysdic.to_str().unwrap(), "-r", "8"], "東京").unwrap();
    assert_eq!(Some(0), output.status.code());
    assert_eq!(
        "と\u{309C}きょ\u{309C}",
        String::from_utf8(output.stdout).unwrap()
    );
}

#[test]
fn test_empty_input() {
    for input in ["", "   \n", "\n\n\t"] {
        let output = run(&[], input).unwrap();
        assert_eq!(Some(1), output.status.code(), "{input:?}");
        assert!(output.stdout.is_empty());
        assert_eq!(
            "Error: No input text provided\n",
            String::from_utf8(output.stderr).unwrap()
        );
    }
}

#[test]
fn test_initialization_failure() {
    let dir = tempdir().unwrap();
    let sysdic = dir.path().join("missing.dic");

    let output = run(&["-i", sysdic.to_str().unwrap()], "東京に行く").unwrap();
    assert_eq!(Some(1), output.status.code());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        stderr.starts_with("Error: failed to initialize tokenizer:"),
        "{stderr}"
    );
}

#[test]
fn test_invalid_utf8_input() {
    let output = run(&[], [0xE6u8, 0x9D, 0x0A]).unwrap();
    assert_eq!(Some(1), output.status.code());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Error: could not read input:"), "{stderr}");
}

#[test]
fn test_user_dictionary() {
    let dir = tempdir().unwrap();
    let sysdic = write_dict(dir.path());
    let userdic = dir.path().join("user.csv");
    fs::write(&userdic, "東京,ひがしきょう\n東京都,とうきょうと\n").unwrap();

    let output = run(
        &["-i", sysdic.to_str().unwrap(), "-u", userdic.to_str().unwrap()],
        "東京都に行く\n東京に行く",
    )
    .unwrap();
    assert_eq!(Some(0), output.status.code());
    assert_eq!(
        "とうきょうとにいく\nひがしきょうにいく",
        String::from_utf8(output.stdout).unwrap()
    );
}

#[test]
fn test_broken_user_dictionary() {
    let dir = tempdir().unwrap();
    let sysdic = write_dict(dir.path());
    let userdic = dir.path().join("user.csv");
    fs::write(&userdic, "東京\n").unwrap();

    let output = run(
        &["-i", sysdic.to_str().unwrap(), "-u", userdic.to_str().unwrap()],
        "東京に行く",
    )
    .unwrap();
    assert_eq!(Some(1), output.status.code());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        stderr.starts_with("Error: failed to initialize tokenizer: user dictionary line 1"),
        "{stderr}"
    );
}
