//! 유니코드 스크립트 분류기
//!
//! 문자마다 한자/히라가나/가타카나/라틴/숫자/문장부호/공백 중 하나로 분류하고
//! 같은 분류의 최대 구간으로 묶습니다.

use std::ops::RangeInclusive;

use super::token::{CodePointSpan, ScriptClass};

/// CJK 통합 한자
const CJK_RANGE: RangeInclusive<u32> = 0x4E00..=0x9FFF;
/// CJK 확장 A
const KANJI_EXTENDED_A_RANGE: RangeInclusive<u32> = 0x3400..=0x4DBF;
const HIRAGANA_RANGE: RangeInclusive<u32> = 0x3040..=0x309F;
const KATAKANA_RANGE: RangeInclusive<u32> = 0x30A0..=0x30FF;
/// 라틴-1 보충 ~ 라틴 확장 B (문자만)
const LATIN_EXTENDED_RANGE: RangeInclusive<u32> = 0x00C0..=0x024F;
/// 전각 라틴 대문자/소문자
const FULLWIDTH_UPPER_RANGE: RangeInclusive<u32> = 0xFF21..=0xFF3A;
const FULLWIDTH_LOWER_RANGE: RangeInclusive<u32> = 0xFF41..=0xFF5A;
/// 전각 숫자
const FULLWIDTH_DIGIT_RANGE: RangeInclusive<u32> = 0xFF10..=0xFF19;

/// 한자 반복 부호 (人々)
const ITERATION_MARK: char = '々';
/// 장음 부호
pub const PROLONGED_SOUND_MARK: char = 'ー';

/// 문자 하나 분류
///
/// 숫자는 일단 Digit로 분류하고, 라틴 인접 여부는 `classify`에서 처리
pub fn classify_char(c: char) -> ScriptClass {
    let cp = c as u32;

    if c.is_whitespace() {
        ScriptClass::Whitespace
    } else if is_kanji(c) {
        ScriptClass::Kanji
    } else if HIRAGANA_RANGE.contains(&cp) {
        ScriptClass::Hiragana
    } else if KATAKANA_RANGE.contains(&cp) {
        ScriptClass::Katakana
    } else if c.is_ascii_digit() || FULLWIDTH_DIGIT_RANGE.contains(&cp) {
        ScriptClass::Digit
    } else if c.is_ascii_alphabetic()
        || (LATIN_EXTENDED_RANGE.contains(&cp) && c.is_alphabetic())
        || FULLWIDTH_UPPER_RANGE.contains(&cp)
        || FULLWIDTH_LOWER_RANGE.contains(&cp)
    {
        ScriptClass::Latin
    } else {
        ScriptClass::Punctuation
    }
}

/// 한자인지 확인 (々 포함)
pub fn is_kanji(c: char) -> bool {
    let cp = c as u32;
    CJK_RANGE.contains(&cp) || KANJI_EXTENDED_A_RANGE.contains(&cp) || c == ITERATION_MARK
}

/// 문자열에 한자가 하나라도 있는지 확인
pub fn contains_kanji(text: &str) -> bool {
    text.chars().any(is_kanji)
}

/// 텍스트를 같은 분류의 최대 구간으로 나눔
///
/// 1. 문자별 분류 후 인접한 같은 분류를 병합
/// 2. 라틴 구간과 맞닿은 숫자 구간은 라틴으로 재분류 (iPhone12)
/// 3. 재분류로 인접하게 된 라틴 구간 병합
pub fn classify(text: &str) -> Vec<CodePointSpan> {
    let mut spans: Vec<CodePointSpan> = Vec::new();

    for (i, c) in text.char_indices() {
        let class = classify_char(c);
        let end = i + c.len_utf8();
        match spans.last_mut() {
            Some(last) if last.class == class => last.end = end,
            _ => spans.push(CodePointSpan {
                start: i,
                end,
                class,
            }),
        }
    }

    // 라틴에 붙은 숫자
    for i in 0..spans.len() {
        if spans[i].class != ScriptClass::Digit {
            continue;
        }
        let prev_latin = i > 0 && spans[i - 1].class == ScriptClass::Latin;
        let next_latin = spans
            .get(i + 1)
            .map_or(false, |s| s.class == ScriptClass::Latin);
        if prev_latin || next_latin {
            spans[i].class = ScriptClass::Latin;
        }
    }

    merge_adjacent(spans)
}

/// 같은 분류의 인접 구간 병합
fn merge_adjacent(spans: Vec<CodePointSpan>) -> Vec<CodePointSpan> {
    let mut merged: Vec<CodePointSpan> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if last.class == span.class && last.end == span.start => {
                last.end = span.end;
            }
            _ => merged.push(span),
        }
    }
    merged
}

/// 텍스트를 한자 / 비한자 최대 구간으로 나눔
///
/// 반환: (한자 여부, 부분 문자열)
pub fn kanji_pieces(text: &str) -> Vec<(bool, &str)> {
    let mut pieces: Vec<(bool, &str)> = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (i, c) in text.char_indices() {
        let kanji = is_kanji(c);
        match current {
            Some(prev) if prev == kanji => {}
            Some(prev) => {
                pieces.push((prev, &text[start..i]));
                start = i;
                current = Some(kanji);
            }
            None => current = Some(kanji),
        }
    }
    if let Some(prev) = current {
        pieces.push((prev, &text[start..]));
    }

    pieces
}

/// 장음 부호로만 이루어진 문자열인지 확인
pub fn is_prolonged_marks(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c == PROLONGED_SOUND_MARK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(text: &str) -> Vec<(ScriptClass, &str)> {
        classify(text)
            .into_iter()
            .map(|s| (s.class, s.text(text)))
            .collect()
    }

    #[test]
    fn test_classify_char() {
        assert_eq!(classify_char('東'), ScriptClass::Kanji);
        assert_eq!(classify_char('々'), ScriptClass::Kanji);
        assert_eq!(classify_char('は'), ScriptClass::Hiragana);
        assert_eq!(classify_char('プ'), ScriptClass::Katakana);
        assert_eq!(classify_char('ー'), ScriptClass::Katakana);
        assert_eq!(classify_char('a'), ScriptClass::Latin);
        assert_eq!(classify_char('é'), ScriptClass::Latin);
        assert_eq!(classify_char('Ａ'), ScriptClass::Latin);
        assert_eq!(classify_char('7'), ScriptClass::Digit);
        assert_eq!(classify_char('３'), ScriptClass::Digit);
        assert_eq!(classify_char('。'), ScriptClass::Punctuation);
        assert_eq!(classify_char('!'), ScriptClass::Punctuation);
        assert_eq!(classify_char(' '), ScriptClass::Whitespace);
        assert_eq!(classify_char('\u{3000}'), ScriptClass::Whitespace);
        // 제어 문자는 문장부호로 폴백
        assert_eq!(classify_char('\u{0007}'), ScriptClass::Punctuation);
        assert_eq!(classify_char('×'), ScriptClass::Punctuation);
    }

    #[test]
    fn test_classify_sentence() {
        assert_eq!(
            classes("私は東京に住んでいます。"),
            vec![
                (ScriptClass::Kanji, "私"),
                (ScriptClass::Hiragana, "は"),
                (ScriptClass::Kanji, "東京"),
                (ScriptClass::Hiragana, "に"),
                (ScriptClass::Kanji, "住"),
                (ScriptClass::Hiragana, "んでいます"),
                (ScriptClass::Punctuation, "。"),
            ]
        );
    }

    #[test]
    fn test_digits_adjacent_to_latin() {
        assert_eq!(classes("iPhone12"), vec![(ScriptClass::Latin, "iPhone12")]);
        assert_eq!(classes("4K画質"), vec![
            (ScriptClass::Latin, "4K"),
            (ScriptClass::Kanji, "画質"),
        ]);
    }

    #[test]
    fn test_standalone_digits() {
        assert_eq!(
            classes("2023年"),
            vec![(ScriptClass::Digit, "2023"), (ScriptClass::Kanji, "年")]
        );
        assert_eq!(
            classes("A 12"),
            vec![
                (ScriptClass::Latin, "A"),
                (ScriptClass::Whitespace, " "),
                (ScriptClass::Digit, "12"),
            ]
        );
    }

    #[test]
    fn test_classify_covers_input() {
        let text = "彼はLe Wagonでプログラミングを学びました。";
        let spans = classify(text);
        assert_eq!(spans.first().map(|s| s.start), Some(0));
        assert_eq!(spans.last().map(|s| s.end), Some(text.len()));
        for pair in spans.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert_ne!(pair[0].class, pair[1].class);
        }
    }

    #[test]
    fn test_classify_empty() {
        assert!(classify("").is_empty());
    }

    #[test]
    fn test_kanji_pieces() {
        assert_eq!(
            kanji_pieces("食べ物"),
            vec![(true, "食"), (false, "べ"), (true, "物")]
        );
        assert_eq!(kanji_pieces("人々"), vec![(true, "人々")]);
        assert_eq!(kanji_pieces("かな"), vec![(false, "かな")]);
        assert!(kanji_pieces("").is_empty());
    }

    #[test]
    fn test_is_prolonged_marks() {
        assert!(is_prolonged_marks("ー"));
        assert!(is_prolonged_marks("ーー"));
        assert!(!is_prolonged_marks("ーア"));
        assert!(!is_prolonged_marks(""));
    }
}
