//! カタカナからひらがなへの文字変換
//!
//! 辞書が返す読みはカタカナで表記されているため、これをひらがなに変換します。
//! 変換はUnicodeのカタカナブロック(U+30A0〜U+30FF)に対する固定オフセットのみで行い、
//! 文字の意味は考慮しません。そのため中黒(・)や長音記号(ー)のような記号類も
//! ブロック内にあれば同じように0x60だけずらされます。

/// カタカナブロックの先頭(゠ U+30A0)
const KATAKANA_BEGIN: u32 = 0x30A0;

/// カタカナブロックの末尾(ヿ U+30FF)
const KATAKANA_END: u32 = 0x30FF;

/// カタカナとひらがなのコードポイントの差
const KANA_OFFSET: u32 = 0x60;

/// 文字がカタカナブロックに含まれるかどうかを判定します。
#[inline(always)]
pub fn is_katakana(c: char) -> bool {
    (KATAKANA_BEGIN..=KATAKANA_END).contains(&u32::from(c))
}

/// 1文字をカタカナからひらがなに変換します。
///
/// カタカナブロック外の文字はそのまま返します。
///
/// # 例
///
/// ```
/// use yomigana::kana::katakana_to_hiragana;
///
/// assert_eq!(katakana_to_hiragana('ア'), 'あ');
/// assert_eq!(katakana_to_hiragana('漢'), '漢');
/// ```
#[inline]
pub fn katakana_to_hiragana(c: char) -> char {
    if is_katakana(c) {
        // U+3040..=U+309F は全てスカラー値なので失敗しない
        char::from_u32(u32::from(c) - KANA_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

/// 文字列中のカタカナをすべてひらがなに変換します。
///
/// 出力の文字数は入力と常に一致します。
///
/// # 例
///
/// ```
/// use yomigana::kana::to_hiragana;
///
/// assert_eq!(to_hiragana("トウキョウ"), "とうきょう");
/// assert_eq!(to_hiragana("ラーメン"), "ら\u{309C}めん");
/// ```
pub fn to_hiragana(s: &str) -> String {
    s.chars().map(katakana_to_hiragana).collect()
}
