//! 속성 테스트 - 무손실 분할, 왕복 변환, 제거 멱등성

use proptest::prelude::*;

use yomigana::core::Converter;
use yomigana::markup::{
    decode, encode, has_nested_spans, strip_annotations, strip_readings_only,
};
use yomigana::{ReadingDictionary, TokenKind};

const PIECES: &[&str] = &[
    "私", "は", "東京", "に", "住んでいます", "。", "、", "ありがとう", "ございます",
    "Le Wagon", " ", "　", "2023年", "5月", "プログラミング", "を", "学びました",
    "からも", "食べ物", "お茶", "すごーい", "iPhone12", "人々", "が", "！", "\n",
    "静かに", "特に", "話すこと", "読んでも", "ので", "コーヒー", "言語", "でも", "x",
    "<", ">", "なかなか", "のにおい",
];

fn dictionary() -> ReadingDictionary {
    [
        ("私", "わたし"),
        ("東京", "とうきょう"),
        ("住", "す"),
        ("学", "まな"),
        ("年", "ねん"),
        ("月", "がつ"),
        ("茶", "ちゃ"),
        ("食べ物", "たべもの"),
        ("人々", "ひとびと"),
        ("静", "しず"),
    ]
    .into_iter()
    .collect()
}

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(PIECES), 0..24).prop_map(|pieces| pieces.concat())
}

proptest! {
    #[test]
    fn prop_segmentation_is_lossless(text in sentence()) {
        let tokens = Converter::new().tokenize(&text, &dictionary());
        let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn prop_arbitrary_text_is_lossless(text in "\\PC{0,40}") {
        let tokens = Converter::new().tokenize(&text, &yomigana::NoReadings);
        let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn prop_round_trip(text in sentence()) {
        let tokens = Converter::new().tokenize(&text, &dictionary());
        prop_assert_eq!(decode(&encode(&tokens)), tokens);
    }

    #[test]
    fn prop_strip_recovers_input(text in sentence()) {
        let markup = encode(&Converter::new().tokenize(&text, &dictionary()));
        prop_assert!(!has_nested_spans(&markup));
        prop_assert_eq!(strip_annotations(&markup), text);
    }

    #[test]
    fn prop_strip_idempotent(text in sentence()) {
        let markup = encode(&Converter::new().tokenize(&text, &dictionary()));
        let stripped = strip_annotations(&markup);
        prop_assert_eq!(strip_annotations(&stripped), stripped.clone());
        let hidden = strip_readings_only(&markup);
        prop_assert_eq!(strip_readings_only(&hidden), hidden);
    }

    #[test]
    fn prop_word_segments_cover_text(text in sentence()) {
        for token in Converter::new().tokenize(&text, &dictionary()) {
            if token.kind == TokenKind::Word && !token.reading_segments.is_empty() {
                let joined: String = token
                    .reading_segments
                    .iter()
                    .map(|s| s.surface.as_str())
                    .collect();
                prop_assert_eq!(joined, token.text.clone());
                for segment in &token.reading_segments {
                    prop_assert_eq!(segment.reading.is_some(), segment.annotated);
                }
            }
        }
    }

    // 'y'와 '-'가 없으므로 올바른 태그는 만들어지지 않음
    #[test]
    fn prop_decode_never_panics(markup in "[<>/a-x\"= 私はルビ]{0,60}") {
        let tokens = decode(&markup);
        let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
        prop_assert_eq!(joined, markup);
    }
}
