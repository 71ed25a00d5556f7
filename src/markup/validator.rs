//! 마크업 구조 검증
//!
//! 중첩 스팬 검출, 형식 검사, 왕복 변환(encode -> decode) 검증

use crate::core::token::Token;

use super::decoder::Decoder;
use super::encoder::{encode, WORD_CLOSE};

/// 왕복 변환 검증 실패
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundTripError {
    /// 인코딩 결과에 중첩된 스팬이 있음
    NestedSpans,
    /// 토큰 수가 다름
    LengthMismatch { expected: usize, found: usize },
    /// 토큰 내용이 다름
    TokenMismatch {
        index: usize,
        expected: String,
        found: String,
    },
}

impl std::fmt::Display for RoundTripError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundTripError::NestedSpans => write!(f, "중첩된 단어 스팬"),
            RoundTripError::LengthMismatch { expected, found } => {
                write!(f, "토큰 수 불일치: {} != {}", expected, found)
            }
            RoundTripError::TokenMismatch {
                index,
                expected,
                found,
            } => write!(f, "토큰 {} 불일치: {} != {}", index, expected, found),
        }
    }
}

impl std::error::Error for RoundTripError {}

/// 단어 스팬 안에 다른 스팬이 열려 있는지 검사
pub fn has_nested_spans(markup: &str) -> bool {
    let mut depth = 0usize;
    let mut rest = markup;

    while let Some(lt) = rest.find('<') {
        rest = &rest[lt..];
        if rest.starts_with("<span") {
            depth += 1;
            if depth > 1 {
                return true;
            }
        } else if rest.starts_with(WORD_CLOSE) {
            depth = depth.saturating_sub(1);
        }
        rest = &rest[1..];
    }
    false
}

/// 복구 없이 디코딩되는지 검사
pub fn is_well_formed(markup: &str) -> bool {
    Decoder::default().decode_report(markup).recovered.is_empty()
}

/// 토큰별 텍스트, 종류, 세그먼트 표면형/주석 여부가 같은지 비교 (읽기 내용은 무시)
pub fn same_structure(a: &[Token], b: &[Token]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|(x, y)| {
            x.text == y.text
                && x.kind == y.kind
                && x.reading_segments.len() == y.reading_segments.len()
                && x
                    .reading_segments
                    .iter()
                    .zip(&y.reading_segments)
                    .all(|(s, t)| s.surface == t.surface && s.annotated == t.annotated)
        })
}

/// encode 후 decode 했을 때 같은 토큰 목록이 나오는지 검증
///
/// 평문에 섞인 `<`처럼 복구된 글자가 있어도 토큰이 같으면 성공
pub fn validate_round_trip(tokens: &[Token]) -> Result<(), RoundTripError> {
    let markup = encode(tokens);
    if has_nested_spans(&markup) {
        return Err(RoundTripError::NestedSpans);
    }

    let decoded = Decoder::default().decode(&markup);
    if decoded.len() != tokens.len() {
        return Err(RoundTripError::LengthMismatch {
            expected: tokens.len(),
            found: decoded.len(),
        });
    }

    for (index, (expected, found)) in tokens.iter().zip(&decoded).enumerate() {
        if expected != found {
            return Err(RoundTripError::TokenMismatch {
                index,
                expected: format!("{:?}", expected),
                found: format!("{:?}", found),
            });
        }
    }

    Ok(())
}
