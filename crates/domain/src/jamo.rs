//! # ハングル字母分解
//!
//! ハングル音節（例: `한`）を構成する字母（初声・中声・終声）に分解する。
//!
//! ## 処理の流れ
//!
//! ```text
//! "한글" ──[JamoDecomposer]──▶ "ᄒ ᅡ ᆫ ᄀ ᅳ ᆯ" ──[1 文字ずつ分割]──▶ jamo_list
//!                 │
//!                 └── compat = true の場合は互換字母（ㅎ ㅏ ㄴ ...）に写像
//! ```
//!
//! 分解そのものは [`JamoDecomposer`] トレイトの実装に委譲する。
//! このモジュールが行うのは、分解結果を [`JamoDecomposition`] の形に整えることと、
//! 一括分解の順序保証だけである。
//!
//! ## モジュール構成
//!
//! - `compatibility` - 結合字母から互換字母への写像
//! - `unicode` - Unicode 正準分解による [`JamoDecomposer`] の標準実装
//!
//! ## 使用例
//!
//! ```rust
//! use api2_domain::jamo::{UnicodeJamoDecomposer, decompose};
//!
//! let result = decompose(&UnicodeJamoDecomposer, "한글", true)?;
//! assert_eq!(result.jamo(), "ㅎㅏㄴㄱㅡㄹ");
//! assert_eq!(result.jamo_list(), &["ㅎ", "ㅏ", "ㄴ", "ㄱ", "ㅡ", "ㄹ"]);
//! # Ok::<(), api2_domain::DomainError>(())
//! ```

mod compatibility;
mod unicode;

pub use compatibility::{is_conjoining_jamo, to_compatibility_jamo};
use thiserror::Error;
pub use unicode::UnicodeJamoDecomposer;

use crate::DomainError;

/// 字母分解ルーチンが返すエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecompositionError {
    /// 互換字母に対応しない結合字母が含まれている
    ///
    /// U+1113 のように、互換字母ブロックに同名の文字がない結合字母で発生する。
    #[error("互換字母に対応しない字母が含まれています: U+{code_point:04X}")]
    NoCompatibilityJamo {
        /// 対応する互換字母がなかった文字のコードポイント
        code_point: u32,
    },

    /// 分解ルーチン内部の失敗
    #[error("{0}")]
    Failed(String),
}

/// 字母分解ルーチン
///
/// 文字列中のハングル音節を字母に分解した文字列を返す。
/// ハングル音節以外の文字はそのまま残す。
///
/// ハンドラからは `Arc<dyn JamoDecomposer>` として共有されるため、
/// `Send + Sync` を要求する。
pub trait JamoDecomposer: Send + Sync {
    /// `text` を字母に分解する
    ///
    /// `compat` が `true` の場合、結合字母を互換字母に写像した結果を返す。
    fn decompose(&self, text: &str, compat: bool) -> Result<String, DecompositionError>;
}

/// 1 件の字母分解結果
///
/// # 不変条件
///
/// - `jamo_list` を連結すると `jamo` に等しい
/// - `jamo_list` の各要素はちょうど 1 文字（コードポイント）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JamoDecomposition {
    original:  String,
    jamo:      String,
    jamo_list: Vec<String>,
}

impl JamoDecomposition {
    /// 分解済み文字列から結果を組み立てる
    ///
    /// `jamo_list` は `jamo` を 1 文字ずつ分割して作るため、不変条件は常に満たされる。
    pub fn new(original: impl Into<String>, jamo: impl Into<String>) -> Self {
        let jamo = jamo.into();
        let jamo_list = jamo.chars().map(String::from).collect();
        Self {
            original: original.into(),
            jamo,
            jamo_list,
        }
    }

    /// 分解前の文字列
    pub fn original(&self) -> &str {
        &self.original
    }

    /// 分解後の文字列
    pub fn jamo(&self) -> &str {
        &self.jamo
    }

    /// 分解後の文字列を 1 文字ずつ分割した列
    pub fn jamo_list(&self) -> &[String] {
        &self.jamo_list
    }

    /// `(original, jamo, jamo_list)` に分解する
    pub fn into_parts(self) -> (String, String, Vec<String>) {
        (self.original, self.jamo, self.jamo_list)
    }
}

/// 1 件の文字列を字母に分解する
///
/// # エラー
///
/// 分解ルーチンが失敗した場合は `DomainError::InvalidDecomposition` を返す。
pub fn decompose(
    decomposer: &dyn JamoDecomposer,
    text: &str,
    compat: bool,
) -> Result<JamoDecomposition, DomainError> {
    let jamo = decomposer.decompose(text, compat)?;
    Ok(JamoDecomposition::new(text, jamo))
}

/// 複数の文字列をまとめて字母に分解する
///
/// 入力の順序を保ち、空文字列を含むすべての入力に 1 件ずつ結果を返す。
/// 途中で 1 件でも失敗した場合は、それ以降を処理せずにエラーを返す（部分成功なし）。
pub fn decompose_batch<S: AsRef<str>>(
    decomposer: &dyn JamoDecomposer,
    texts: &[S],
    compat: bool,
) -> Result<Vec<JamoDecomposition>, DomainError> {
    texts
        .iter()
        .map(|text| decompose(decomposer, text.as_ref(), compat))
        .collect()
}
