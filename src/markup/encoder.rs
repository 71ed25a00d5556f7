//! 토큰 -> 마크업 인코더

use crate::core::token::{Token, TokenKind};

pub const WORD_OPEN: &str = r#"<span class="jp-word">"#;
pub const WORD_CLOSE: &str = "</span>";
pub const RUBY_OPEN: &str = "<ruby>";
pub const RUBY_CLOSE: &str = "</ruby>";
pub const RT_OPEN: &str = "<rt>";
pub const RT_CLOSE: &str = "</rt>";

/// 토큰 목록을 마크업 문자열로 변환
///
/// - 조사/문장부호/공백/외국어: 원문 그대로
/// - 단어: `<span class="jp-word">`로 감싸고, 읽기가 붙은 구간은 `<ruby>`
///
/// 스팬은 중첩되지 않으며 엔티티 이스케이프는 하지 않음
pub fn encode(tokens: &[Token]) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.text.len() * 2).sum());
    for token in tokens {
        encode_token(token, &mut out);
    }
    out
}

fn encode_token(token: &Token, out: &mut String) {
    if token.kind != TokenKind::Word {
        out.push_str(&token.text);
        return;
    }

    out.push_str(WORD_OPEN);
    if token.reading_segments.is_empty() {
        out.push_str(&token.text);
    } else {
        for segment in &token.reading_segments {
            match (&segment.reading, segment.annotated) {
                (Some(reading), true) => {
                    out.push_str(RUBY_OPEN);
                    out.push_str(&segment.surface);
                    out.push_str(RT_OPEN);
                    out.push_str(reading);
                    out.push_str(RT_CLOSE);
                    out.push_str(RUBY_CLOSE);
                }
                _ => out.push_str(&segment.surface),
            }
        }
    }
    out.push_str(WORD_CLOSE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::token::ReadingSegment;

    #[test]
    fn test_encode_plain_tokens() {
        let tokens = vec![
            Token::new("Le", TokenKind::Foreign),
            Token::new(" ", TokenKind::Whitespace),
            Token::new("で", TokenKind::Particle),
            Token::new("。", TokenKind::Punctuation),
        ];
        assert_eq!(encode(&tokens), "Le で。");
    }

    #[test]
    fn test_encode_kana_word() {
        assert_eq!(
            encode(&[Token::word("ありがとう")]),
            r#"<span class="jp-word">ありがとう</span>"#
        );
    }

    #[test]
    fn test_encode_ruby_with_okurigana() {
        let mut token = Token::word("住んでいます");
        token.reading_segments = vec![
            ReadingSegment::ruby("住", "す"),
            ReadingSegment::bare("んでいます"),
        ];
        assert_eq!(
            encode(&[token]),
            r#"<span class="jp-word"><ruby>住<rt>す</rt></ruby>んでいます</span>"#
        );
    }

    #[test]
    fn test_encode_unannotated_kanji() {
        assert_eq!(
            encode(&[Token::word("謎")]),
            r#"<span class="jp-word">謎</span>"#
        );
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[]), "");
    }
}
