//! 結合字母（U+1100 ブロックと拡張 A / B）から互換字母（U+3130 ブロック）への写像。
//!
//! 現代語の初声 19 字・中声 21 字・終声 27 字は並び順から計算し、
//! 古語の字母と中声フィラーは `ARCHAIC` 表で引く。
//! 互換字母ブロックに同名の文字がない結合字母（U+1113 など）は対応なしとする。

/// 初声 U+1100..=U+1112 に対応する互換字母
const LEADING: [char; 19] = [
    '\u{3131}', // ㄱ
    '\u{3132}', // ㄲ
    '\u{3134}', // ㄴ
    '\u{3137}', // ㄷ
    '\u{3138}', // ㄸ
    '\u{3139}', // ㄹ
    '\u{3141}', // ㅁ
    '\u{3142}', // ㅂ
    '\u{3143}', // ㅃ
    '\u{3145}', // ㅅ
    '\u{3146}', // ㅆ
    '\u{3147}', // ㅇ
    '\u{3148}', // ㅈ
    '\u{3149}', // ㅉ
    '\u{314A}', // ㅊ
    '\u{314B}', // ㅋ
    '\u{314C}', // ㅌ
    '\u{314D}', // ㅍ
    '\u{314E}', // ㅎ
];

/// 終声 U+11A8..=U+11C2 に対応する互換字母
const TRAILING: [char; 27] = [
    '\u{3131}', // ㄱ
    '\u{3132}', // ㄲ
    '\u{3133}', // ㄳ
    '\u{3134}', // ㄴ
    '\u{3135}', // ㄵ
    '\u{3136}', // ㄶ
    '\u{3137}', // ㄷ
    '\u{3139}', // ㄹ
    '\u{313A}', // ㄺ
    '\u{313B}', // ㄻ
    '\u{313C}', // ㄼ
    '\u{313D}', // ㄽ
    '\u{313E}', // ㄾ
    '\u{313F}', // ㄿ
    '\u{3140}', // ㅀ
    '\u{3141}', // ㅁ
    '\u{3142}', // ㅂ
    '\u{3144}', // ㅄ
    '\u{3145}', // ㅅ
    '\u{3146}', // ㅆ
    '\u{3147}', // ㅇ
    '\u{3148}', // ㅈ
    '\u{314A}', // ㅊ
    '\u{314B}', // ㅋ
    '\u{314C}', // ㅌ
    '\u{314D}', // ㅍ
    '\u{314E}', // ㅎ
];

/// 古語の字母と中声フィラーの対応表（結合字母の昇順）
///
/// 結合字母の名前の `CHOSEONG` / `JUNGSEONG` / `JONGSEONG` を `LETTER` に置き換えた
/// 互換字母を対応させる。名前が一致しない U+1160 と U+11A1 は個別に加えている。
const ARCHAIC: [(char, char); 74] = [
    ('\u{1114}', '\u{3165}'), // ㅥ
    ('\u{1115}', '\u{3166}'), // ㅦ
    ('\u{111A}', '\u{3140}'), // ㅀ
    ('\u{111C}', '\u{316E}'), // ㅮ
    ('\u{111D}', '\u{3171}'), // ㅱ
    ('\u{111E}', '\u{3172}'), // ㅲ
    ('\u{1120}', '\u{3173}'), // ㅳ
    ('\u{1121}', '\u{3144}'), // ㅄ
    ('\u{1122}', '\u{3174}'), // ㅴ
    ('\u{1123}', '\u{3175}'), // ㅵ
    ('\u{1127}', '\u{3176}'), // ㅶ
    ('\u{1129}', '\u{3177}'), // ㅷ
    ('\u{112B}', '\u{3178}'), // ㅸ
    ('\u{112C}', '\u{3179}'), // ㅹ
    ('\u{112D}', '\u{317A}'), // ㅺ
    ('\u{112E}', '\u{317B}'), // ㅻ
    ('\u{112F}', '\u{317C}'), // ㅼ
    ('\u{1132}', '\u{317D}'), // ㅽ
    ('\u{1136}', '\u{317E}'), // ㅾ
    ('\u{1140}', '\u{317F}'), // ㅿ
    ('\u{1147}', '\u{3180}'), // ㆀ
    ('\u{114C}', '\u{3181}'), // ㆁ
    ('\u{1157}', '\u{3184}'), // ㆄ
    ('\u{1158}', '\u{3185}'), // ㆅ
    ('\u{1159}', '\u{3186}'), // ㆆ
    ('\u{115B}', '\u{3167}'), // ㅧ
    ('\u{115C}', '\u{3135}'), // ㄵ
    ('\u{115D}', '\u{3136}'), // ㄶ
    ('\u{1160}', '\u{3164}'), // ㅤ(HANGUL FILLER)
    ('\u{1184}', '\u{3187}'), // ㆇ
    ('\u{1185}', '\u{3188}'), // ㆈ
    ('\u{1188}', '\u{3189}'), // ㆉ
    ('\u{1191}', '\u{318A}'), // ㆊ
    ('\u{1192}', '\u{318B}'), // ㆋ
    ('\u{1194}', '\u{318C}'), // ㆌ
    ('\u{119E}', '\u{318D}'), // ㆍ
    ('\u{11A1}', '\u{318E}'), // ㆎ
    ('\u{11C6}', '\u{3166}'), // ㅦ
    ('\u{11C7}', '\u{3167}'), // ㅧ
    ('\u{11C8}', '\u{3168}'), // ㅨ
    ('\u{11CC}', '\u{3169}'), // ㅩ
    ('\u{11CE}', '\u{316A}'), // ㅪ
    ('\u{11D3}', '\u{316B}'), // ㅫ
    ('\u{11D7}', '\u{316C}'), // ㅬ
    ('\u{11D9}', '\u{316D}'), // ㅭ
    ('\u{11DC}', '\u{316E}'), // ㅮ
    ('\u{11DD}', '\u{316F}'), // ㅯ
    ('\u{11DF}', '\u{3170}'), // ㅰ
    ('\u{11E2}', '\u{3171}'), // ㅱ
    ('\u{11E6}', '\u{3178}'), // ㅸ
    ('\u{11E7}', '\u{317A}'), // ㅺ
    ('\u{11E8}', '\u{317C}'), // ㅼ
    ('\u{11EA}', '\u{317D}'), // ㅽ
    ('\u{11EB}', '\u{317F}'), // ㅿ
    ('\u{11EE}', '\u{3180}'), // ㆀ
    ('\u{11F0}', '\u{3181}'), // ㆁ
    ('\u{11F1}', '\u{3182}'), // ㆂ
    ('\u{11F2}', '\u{3183}'), // ㆃ
    ('\u{11F4}', '\u{3184}'), // ㆄ
    ('\u{11F9}', '\u{3186}'), // ㆆ
    ('\u{11FF}', '\u{3165}'), // ㅥ
    ('\u{A964}', '\u{313A}'), // ㄺ
    ('\u{A966}', '\u{316A}'), // ㅪ
    ('\u{A968}', '\u{313B}'), // ㄻ
    ('\u{A969}', '\u{313C}'), // ㄼ
    ('\u{A96C}', '\u{313D}'), // ㄽ
    ('\u{A971}', '\u{316F}'), // ㅯ
    ('\u{D7CD}', '\u{3138}'), // ㄸ
    ('\u{D7E3}', '\u{3173}'), // ㅳ
    ('\u{D7E6}', '\u{3143}'), // ㅃ
    ('\u{D7E7}', '\u{3175}'), // ㅵ
    ('\u{D7E8}', '\u{3176}'), // ㅶ
    ('\u{D7EF}', '\u{317E}'), // ㅾ
    ('\u{D7F9}', '\u{3149}'), // ㅉ
];

const LEADING_BASE: u32 = 0x1100;
const VOWEL_BASE: u32 = 0x1161;
const TRAILING_BASE: u32 = 0x11A8;

/// 中声の互換字母は U+314F から同じ並び順で連続している
const COMPATIBILITY_VOWEL_BASE: u32 = 0x314F;

/// 結合字母かどうかを判定する
///
/// 基本ブロック（U+1100..=U+11FF）と拡張 A / B ブロックを含む。
pub fn is_conjoining_jamo(c: char) -> bool {
    matches!(c, '\u{1100}'..='\u{11FF}' | '\u{A960}'..='\u{A97F}' | '\u{D7B0}'..='\u{D7FF}')
}

/// 結合字母を対応する互換字母に変換する
///
/// 対応する互換字母がない場合（結合字母以外の文字を含む）は `None` を返す。
///
/// ```rust
/// use api2_domain::jamo::to_compatibility_jamo;
///
/// assert_eq!(to_compatibility_jamo('\u{1112}'), Some('ㅎ'));
/// assert_eq!(to_compatibility_jamo('\u{11AB}'), Some('ㄴ'));
/// assert_eq!(to_compatibility_jamo('a'), None);
/// ```
pub fn to_compatibility_jamo(c: char) -> Option<char> {
    let code = u32::from(c);
    match c {
        '\u{1100}'..='\u{1112}' => Some(LEADING[(code - LEADING_BASE) as usize]),
        '\u{1161}'..='\u{1175}' => char::from_u32(COMPATIBILITY_VOWEL_BASE + (code - VOWEL_BASE)),
        '\u{11A8}'..='\u{11C2}' => Some(TRAILING[(code - TRAILING_BASE) as usize]),
        _ => ARCHAIC
            .binary_search_by_key(&c, |&(jamo, _)| jamo)
            .ok()
            .map(|i| ARCHAIC[i].1),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case('\u{1100}', 'ㄱ')]
    #[case('\u{1112}', 'ㅎ')]
    #[case('\u{1161}', 'ㅏ')]
    #[case('\u{1173}', 'ㅡ')]
    #[case('\u{1175}', 'ㅣ')]
    #[case('\u{11A8}', 'ㄱ')]
    #[case('\u{11AF}', 'ㄹ')]
    #[case('\u{11B0}', 'ㄺ')]
    #[case('\u{11C2}', 'ㅎ')]
    fn test_結合字母を互換字母に変換する(#[case] input: char, #[case] expected: char) {
        assert_eq!(to_compatibility_jamo(input), Some(expected));
    }

    #[rstest]
    #[case('\u{1114}', '\u{3165}')] // ᄔ → ㅥ
    #[case('\u{1160}', '\u{3164}')] // 中声フィラー
    #[case('\u{1140}', '\u{317F}')] // ᅀ → ㅿ
    #[case('\u{119E}', '\u{318D}')] // ᆞ → ㆍ
    #[case('\u{11A1}', '\u{318E}')] // ᆡ → ㆎ
    #[case('\u{11F9}', '\u{3186}')] // ᇹ → ㆆ
    #[case('\u{A964}', '\u{313A}')] // 拡張 A
    #[case('\u{D7F9}', '\u{3149}')] // 拡張 B
    fn test_古語の字母とフィラーを互換字母に変換する(
        #[case] input: char,
        #[case] expected: char,
    ) {
        assert_eq!(to_compatibility_jamo(input), Some(expected));
    }

    #[test]
    fn test_古語の対応表は結合字母の昇順で重複がない() {
        assert!(ARCHAIC.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(ARCHAIC.iter().all(|&(jamo, _)| is_conjoining_jamo(jamo)));
    }

    #[test]
    fn test_互換字母ブロックの全文字に対応する結合字母がある() {
        let conjoining = ('\u{1100}'..='\u{11FF}')
            .chain('\u{A960}'..='\u{A97F}')
            .chain('\u{D7B0}'..='\u{D7FF}');
        let mapped: std::collections::BTreeSet<char> =
            conjoining.filter_map(to_compatibility_jamo).collect();

        for letter in '\u{3131}'..='\u{318E}' {
            assert!(mapped.contains(&letter), "{letter:?} に写る結合字母がない");
        }
    }

    #[rstest]
    #[case('a')]
    #[case('한')]
    #[case('ㄱ')]
    #[case('\u{1113}')]
    #[case('\u{115F}')]
    #[case('\u{11C3}')]
    #[case('\u{A960}')]
    fn test_対応がない文字はnoneを返す(#[case] input: char) {
        assert_eq!(to_compatibility_jamo(input), None);
    }

    #[test]
    fn test_現代語の結合字母はすべて互換字母ブロックに写る() {
        let modern = ('\u{1100}'..='\u{1112}')
            .chain('\u{1161}'..='\u{1175}')
            .chain('\u{11A8}'..='\u{11C2}');

        let mut count = 0;
        for c in modern {
            let mapped = to_compatibility_jamo(c).unwrap();
            assert!(
                ('\u{3131}'..='\u{3163}').contains(&mapped),
                "{c:?} -> {mapped:?}"
            );
            count += 1;
        }
        assert_eq!(count, 19 + 21 + 27);
    }

    #[rstest]
    #[case('\u{1100}', true)]
    #[case('\u{11FF}', true)]
    #[case('\u{A960}', true)]
    #[case('\u{D7FB}', true)]
    #[case('ㄱ', false)]
    #[case('한', false)]
    #[case('a', false)]
    fn test_結合字母の判定(#[case] input: char, #[case] expected: bool) {
        assert_eq!(is_conjoining_jamo(input), expected);
    }
}
