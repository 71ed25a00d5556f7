//! 마크업 -> 토큰 디코더
//!
//! ```text
//! document  := segment*
//! segment   := wordSpan | plainRun
//! wordSpan  := '<span class="jp-word">' (rubyGroup | text)* '</span>'
//! rubyGroup := '<ruby>' surface '<rt>' reading '</rt>' '</ruby>'
//! ```
//!
//! 해석할 수 없는 태그의 `<`는 평문 글자로 취급하고 계속 진행합니다.
//! 평문은 분할기가 다시 나누므로 `<`는 문장부호 토큰이 됩니다.
//! 내용을 버리거나 패닉하지 않습니다.

use crate::core::lexicon::Lexicon;
use crate::core::script::kanji_pieces;
use crate::core::segmenter::Segmenter;
use crate::core::token::{ReadingSegment, Token, TokenKind};

use super::encoder::{RT_CLOSE, RT_OPEN, RUBY_CLOSE, RUBY_OPEN, WORD_CLOSE, WORD_OPEN};

/// 단어 클릭 조회에서 제외할 문장부호
const CLICK_PUNCTUATION: &[char] = &['、', '。', '！', '？'];

/// 디코딩 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeReport {
    pub tokens: Vec<Token>,
    /// 평문으로 복구한 잘못된 태그의 바이트 위치
    pub recovered: Vec<usize>,
}

/// 마크업 디코더
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'l> {
    segmenter: Segmenter<'l>,
}

impl Default for Decoder<'static> {
    fn default() -> Self {
        Self::new(Lexicon::builtin())
    }
}

impl<'l> Decoder<'l> {
    pub fn new(lexicon: &'l Lexicon) -> Self {
        Self {
            segmenter: Segmenter::for_plain_text(lexicon),
        }
    }

    /// 마크업을 토큰 목록으로 복원
    pub fn decode(&self, markup: &str) -> Vec<Token> {
        self.decode_report(markup).tokens
    }

    /// 복구 위치까지 함께 반환
    pub fn decode_report(&self, markup: &str) -> DecodeReport {
        let mut tokens = Vec::new();
        let mut recovered = Vec::new();
        let mut plain_start = 0;
        let mut pos = 0;

        while let Some(lt) = markup[pos..].find('<') {
            pos += lt;

            let rest = &markup[pos..];
            let parsed = if rest.starts_with(WORD_OPEN) {
                parse_word_span(markup, pos)
            } else if rest.starts_with(RUBY_OPEN) {
                parse_ruby(markup, pos).map(|(segment, end)| (Some(ruby_word(segment)), end))
            } else {
                None
            };

            match parsed {
                Some((token, end)) => {
                    self.push_plain(&markup[plain_start..pos], &mut tokens);
                    tokens.extend(token);
                    pos = end;
                    plain_start = pos;
                }
                None => {
                    log::debug!("잘못된 태그 복구 ({})", pos);
                    recovered.push(pos);
                    pos += 1;
                }
            }
        }
        self.push_plain(&markup[plain_start..], &mut tokens);

        DecodeReport { tokens, recovered }
    }

    /// 클릭 조회용 단어 목록 (문장부호만으로 된 텍스트는 제외)
    pub fn words(&self, markup: &str) -> Vec<String> {
        self.decode(markup)
            .into_iter()
            .filter(|t| t.is_word() && !t.text.chars().all(|c| CLICK_PUNCTUATION.contains(&c)))
            .map(|t| t.text)
            .collect()
    }

    fn push_plain(&self, plain: &str, tokens: &mut Vec<Token>) {
        if !plain.is_empty() {
            tokens.extend(self.segmenter.segment_text(plain));
        }
    }
}

/// 단어 스팬 하나 해석
///
/// 반환: (토큰, 다음 위치). 빈 스팬이면 토큰은 None
fn parse_word_span(markup: &str, start: usize) -> Option<(Option<Token>, usize)> {
    let mut pos = start + WORD_OPEN.len();
    let mut segments: Vec<ReadingSegment> = Vec::new();

    loop {
        let rest = &markup[pos..];
        if rest.starts_with(WORD_CLOSE) {
            pos += WORD_CLOSE.len();
            break;
        }
        if rest.starts_with(RUBY_OPEN) {
            let (segment, end) = parse_ruby(markup, pos)?;
            segments.push(segment);
            pos = end;
            continue;
        }
        if rest.starts_with('<') {
            // 중첩 스팬 또는 알 수 없는 태그
            return None;
        }
        let lt = rest.find('<')?;
        segments.extend(
            kanji_pieces(&rest[..lt])
                .into_iter()
                .map(|(_, piece)| ReadingSegment::bare(piece)),
        );
        pos += lt;
    }

    Some((word_from_segments(segments), pos))
}

/// 루비 그룹 하나 해석 (`<ruby>漢字|かんじ</ruby>` 구형식 포함)
fn parse_ruby(markup: &str, start: usize) -> Option<(ReadingSegment, usize)> {
    let mut pos = start + RUBY_OPEN.len();

    let rest = &markup[pos..];
    let surface_end = rest.find(|c: char| c == '<' || c == '|')?;
    let surface = &rest[..surface_end];
    if surface.is_empty() {
        return None;
    }
    pos += surface_end;

    // 후리가나를 숨긴 마크업: <ruby>私</ruby>
    if let Some(end) = expect_tag(markup, pos, RUBY_CLOSE) {
        return Some((ReadingSegment::bare(surface), end));
    }

    let reading = if markup[pos..].starts_with('|') {
        pos += 1;
        let (reading, end) = text_until_tag(markup, pos)?;
        pos = end;
        reading
    } else {
        pos = expect_tag(markup, pos, RT_OPEN)?;
        let (reading, end) = text_until_tag(markup, pos)?;
        pos = expect_tag(markup, end, RT_CLOSE)?;
        reading
    };
    pos = expect_tag(markup, pos, RUBY_CLOSE)?;

    let segment = if reading.trim().is_empty() {
        ReadingSegment::bare(surface)
    } else {
        ReadingSegment::ruby(surface, reading)
    };
    Some((segment, pos))
}

fn text_until_tag(markup: &str, pos: usize) -> Option<(&str, usize)> {
    let lt = markup[pos..].find('<')?;
    Some((&markup[pos..pos + lt], pos + lt))
}

fn expect_tag(markup: &str, pos: usize, tag: &str) -> Option<usize> {
    markup[pos..].starts_with(tag).then_some(pos + tag.len())
}

/// 세그먼트로 단어 토큰 생성
///
/// 읽기가 하나도 없으면 분할기와 같은 기본 세그먼트로 채움
fn word_from_segments(segments: Vec<ReadingSegment>) -> Option<Token> {
    let text: String = segments.iter().map(|s| s.surface.as_str()).collect();
    if text.is_empty() {
        return None;
    }
    if !segments.iter().any(|s| s.annotated) {
        return Some(Token::word(text));
    }
    Some(Token {
        text,
        kind: TokenKind::Word,
        reading_segments: segments,
    })
}

/// 스팬 밖의 루비 그룹은 단일 세그먼트 단어로
fn ruby_word(segment: ReadingSegment) -> Token {
    if !segment.annotated {
        return Token::word(segment.surface);
    }
    Token {
        text: segment.surface.clone(),
        kind: TokenKind::Word,
        reading_segments: vec![segment],
    }
}

/// 기본 사전으로 디코딩
pub fn decode(markup: &str) -> Vec<Token> {
    Decoder::default().decode(markup)
}

/// 기본 사전으로 단어 목록 추출
pub fn words(markup: &str) -> Vec<String> {
    Decoder::default().words(markup)
}
