//! Unicode 正準分解による [`JamoDecomposer`] の標準実装。

use unicode_normalization::char::decompose_canonical;

use super::{DecompositionError, JamoDecomposer, is_conjoining_jamo, to_compatibility_jamo};

/// ハングル音節の範囲（가..=힣）
const SYLLABLE_FIRST: char = '\u{AC00}';
const SYLLABLE_LAST: char = '\u{D7A3}';

/// `unicode-normalization` の正準分解（NFD）でハングル音節を分解する
///
/// ハングル音節以外の文字には正準分解を適用しない（`é` などはそのまま残る）。
///
/// `compat = true` の場合は結合字母を互換字母に写像する。
/// 古語の字母や中声フィラーも互換字母に写像する。
/// 互換字母ブロックに対応のない結合字母（U+1113 など）が含まれていれば
/// [`DecompositionError::NoCompatibilityJamo`] を返す。
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeJamoDecomposer;

impl JamoDecomposer for UnicodeJamoDecomposer {
    fn decompose(&self, text: &str, compat: bool) -> Result<String, DecompositionError> {
        // 1 音節は最大 3 字母。UTF-8 ではどちらも 3 バイト
        let mut jamo = String::with_capacity(text.len() * 3);
        for c in text.chars() {
            if (SYLLABLE_FIRST..=SYLLABLE_LAST).contains(&c) {
                decompose_canonical(c, |d| jamo.push(d));
            } else {
                jamo.push(c);
            }
        }

        if compat {
            into_compatibility(&jamo)
        } else {
            Ok(jamo)
        }
    }
}

fn into_compatibility(jamo: &str) -> Result<String, DecompositionError> {
    jamo.chars()
        .map(|c| {
            if !is_conjoining_jamo(c) {
                return Ok(c);
            }
            to_compatibility_jamo(c).ok_or(DecompositionError::NoCompatibilityJamo {
                code_point: u32::from(c),
            })
        })
        .collect()
}
