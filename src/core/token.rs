//! 분류 구간, 토큰, 읽기 세그먼트 타입

use serde::{Deserialize, Serialize};

/// 문자 스크립트 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptClass {
    /// CJK 통합 한자 (+ 확장 A, 々)
    Kanji,
    Hiragana,
    /// 장음 부호(ー) 포함
    Katakana,
    /// 라틴 문자 (인접한 숫자 포함)
    Latin,
    /// 라틴 문자와 붙어 있지 않은 숫자
    Digit,
    /// 그 외 모든 문자 (분류 불가 문자 폴백)
    Punctuation,
    Whitespace,
}

impl ScriptClass {
    /// 일본어 어휘 구간에 들어가는 스크립트인지 확인
    pub fn is_japanese(self) -> bool {
        matches!(
            self,
            ScriptClass::Kanji | ScriptClass::Hiragana | ScriptClass::Katakana
        )
    }
}

/// 같은 스크립트로 이어진 최대 구간
///
/// `start..end`는 원문 문자열의 바이트 범위 (항상 문자 경계)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePointSpan {
    pub start: usize,
    pub end: usize,
    pub class: ScriptClass,
}

impl CodePointSpan {
    /// 원문에서 구간 문자열 반환
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// 토큰 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// 어휘 단어 (jp-word 스팬으로 감쌈)
    Word,
    /// 조사 (절대 감싸지 않음)
    Particle,
    /// 라틴/숫자 구간
    Foreign,
    Punctuation,
    Whitespace,
}

/// 단어 토큰 내부의 부분 구간
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingSegment {
    pub surface: String,
    /// 후리가나 (annotated일 때만 Some)
    pub reading: Option<String>,
    pub annotated: bool,
}

impl ReadingSegment {
    /// 읽기 없는 구간
    pub fn bare(surface: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            reading: None,
            annotated: false,
        }
    }

    /// 읽기가 붙은 구간
    pub fn ruby(surface: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            reading: Some(reading.into()),
            annotated: true,
        }
    }
}

/// 분할기 출력 단위
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reading_segments: Vec<ReadingSegment>,
}

impl Token {
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            kind,
            reading_segments: Vec::new(),
        }
    }

    /// 단어 토큰 생성
    ///
    /// 한자가 있으면 한자/비한자 경계로 나눈 읽기 없는 세그먼트를 채움
    pub fn word(text: impl Into<String>) -> Self {
        let text = text.into();
        let reading_segments = if super::script::contains_kanji(&text) {
            super::script::kanji_pieces(&text)
                .into_iter()
                .map(|(_, piece)| ReadingSegment::bare(piece))
                .collect()
        } else {
            Vec::new()
        };
        Self {
            text,
            kind: TokenKind::Word,
            reading_segments,
        }
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// 한자를 포함하는지 확인
    pub fn has_kanji(&self) -> bool {
        super::script::contains_kanji(&self.text)
    }

    /// 읽기가 붙은 (표면형, 읽기) 목록
    pub fn annotations(&self) -> Vec<(&str, &str)> {
        self.reading_segments
            .iter()
            .filter(|s| s.annotated)
            .map(|s| (s.surface.as_str(), s.reading.as_deref().unwrap_or("")))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_without_kanji_has_no_segments() {
        let token = Token::word("ありがとう");
        assert!(token.reading_segments.is_empty());
        assert!(!token.has_kanji());
    }

    #[test]
    fn test_word_segments_split_on_kanji_boundary() {
        let token = Token::word("住んでいます");
        let surfaces: Vec<&str> = token
            .reading_segments
            .iter()
            .map(|s| s.surface.as_str())
            .collect();
        assert_eq!(surfaces, vec!["住", "んでいます"]);
        assert!(token.reading_segments.iter().all(|s| !s.annotated));
    }

    #[test]
    fn test_numeral_word_segments() {
        let token = Token::word("2023年");
        let surfaces: Vec<&str> = token
            .reading_segments
            .iter()
            .map(|s| s.surface.as_str())
            .collect();
        assert_eq!(surfaces, vec!["2023", "年"]);
    }

    #[test]
    fn test_annotations() {
        let mut token = Token::word("東京");
        token.reading_segments = vec![ReadingSegment::ruby("東京", "とうきょう")];
        assert_eq!(token.annotations(), vec![("東京", "とうきょう")]);
    }

    #[test]
    fn test_span_text() {
        let source = "私は";
        let span = CodePointSpan {
            start: 0,
            end: "私".len(),
            class: ScriptClass::Kanji,
        };
        assert_eq!(span.text(source), "私");
        assert_eq!(span.len(), 3);
    }
}
