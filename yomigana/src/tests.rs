//! yomiganaのテストモジュール群
//!
//! 変換処理と vibrato-rkyv による解析器の動作を検証するテストを含みます。
