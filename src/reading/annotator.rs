//! 단어 토큰에 후리가나 읽기 부착

use crate::core::script::{is_kanji, kanji_pieces};
use crate::core::token::{ReadingSegment, Token, TokenKind};

use super::align::align_reading;
use super::{MissingReading, ReadingSource};

/// 후리가나 부착기
#[derive(Debug, Clone, Default)]
pub struct Annotator {
    missing: MissingReading,
}

impl Annotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 읽기를 찾지 못한 구간 처리 방식 지정
    pub fn with_missing_reading(mut self, missing: MissingReading) -> Self {
        self.missing = missing;
        self
    }

    /// 토큰 하나에 읽기 부착
    ///
    /// 단어가 아니거나 한자가 없는 토큰은 그대로 반환
    pub fn annotate(&self, token: &Token, source: &dyn ReadingSource) -> Token {
        if token.kind != TokenKind::Word || !token.has_kanji() {
            return token.clone();
        }

        let mut annotated = token.clone();
        annotated.reading_segments = self
            .whole_word_segments(&token.text, source)
            .unwrap_or_else(|| self.piece_segments(&token.text, source));
        annotated
    }

    pub fn annotate_all(&self, tokens: &[Token], source: &dyn ReadingSource) -> Vec<Token> {
        tokens.iter().map(|t| self.annotate(t, source)).collect()
    }

    /// 1단계: 단어 전체 읽기를 받아 한자 구간별로 정렬
    ///
    /// 한자와 가나로만 된 단어에만 적용 (숫자/외래 문자가 섞이면 건너뜀)
    fn whole_word_segments(
        &self,
        word: &str,
        source: &dyn ReadingSource,
    ) -> Option<Vec<ReadingSegment>> {
        if !word.chars().all(|c| is_kanji(c) || is_kana(c)) {
            return None;
        }
        let reading = lookup(source, word)?;
        let mut readings = align_reading(word, &reading)?.into_iter();

        let segments = kanji_pieces(word)
            .into_iter()
            .map(|(kanji, piece)| {
                let reading = if kanji { readings.next() } else { None };
                match reading {
                    Some(r) => ReadingSegment::ruby(piece, r),
                    None => ReadingSegment::bare(piece),
                }
            })
            .collect();
        Some(segments)
    }

    /// 2~4단계: 한자 구간별 조회
    fn piece_segments(&self, word: &str, source: &dyn ReadingSource) -> Vec<ReadingSegment> {
        let mut segments = Vec::new();
        for (kanji, piece) in kanji_pieces(word) {
            if kanji {
                segments.extend(self.kanji_segments(piece, source));
            } else {
                segments.push(ReadingSegment::bare(piece));
            }
        }
        segments
    }

    fn kanji_segments(&self, piece: &str, source: &dyn ReadingSource) -> Vec<ReadingSegment> {
        // 복합어 우선 (図書館 -> としょかん)
        if let Some(reading) = lookup(source, piece) {
            return vec![ReadingSegment::ruby(piece, reading)];
        }

        if let Some(parts) = compound_split(piece, source) {
            return parts
                .into_iter()
                .map(|(surface, reading)| ReadingSegment::ruby(surface, reading))
                .collect();
        }

        log::debug!("읽기 없음: {}", piece);
        match self.missing.placeholder() {
            Some(p) => vec![ReadingSegment::ruby(piece, p)],
            None => vec![ReadingSegment::bare(piece)],
        }
    }
}

/// 빈 읽기는 없는 것으로 취급
fn lookup(source: &dyn ReadingSource, surface: &str) -> Option<String> {
    source.reading(surface).filter(|r| !r.trim().is_empty())
}

fn is_kana(c: char) -> bool {
    matches!(c as u32, 0x3040..=0x309F | 0x30A0..=0x30FF)
}

/// 앞에서부터 가장 긴 알려진 부분으로 나눔
///
/// 전체를 덮지 못하면 None
fn compound_split<'p>(piece: &'p str, source: &dyn ReadingSource) -> Option<Vec<(&'p str, String)>> {
    let bounds: Vec<usize> = piece
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(piece.len()))
        .collect();
    let n = bounds.len() - 1;
    if n < 2 {
        return None;
    }

    let mut parts = Vec::new();
    let mut k = 0;
    while k < n {
        let (end, reading) = (k + 1..=n)
            .rev()
            .filter(|&end| !(k == 0 && end == n))
            .find_map(|end| lookup(source, &piece[bounds[k]..bounds[end]]).map(|r| (end, r)))?;
        parts.push((&piece[bounds[k]..bounds[end]], reading));
        k = end;
    }
    Some(parts)
}

/// 기본 설정으로 토큰 하나에 읽기 부착
pub fn annotate(token: &Token, source: &dyn ReadingSource) -> Token {
    Annotator::new().annotate(token, source)
}

/// 기본 설정으로 토큰 목록에 읽기 부착
pub fn annotate_all(tokens: &[Token], source: &dyn ReadingSource) -> Vec<Token> {
    Annotator::new().annotate_all(tokens, source)
}
