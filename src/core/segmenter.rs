//! 어휘 분할기
//!
//! 분류된 구간 스트림을 단어/조사/외국어/문장부호/공백 토큰으로 나눕니다.
//! 일본어는 단어 사이에 공백이 없으므로 어휘 구간 내부의 경계는
//! 조사 목록과 오쿠리가나 규칙으로 정합니다.

use super::lexicon::Lexicon;
use super::script::{classify, is_prolonged_marks};
use super::token::{CodePointSpan, ScriptClass, Token, TokenKind};

/// 어휘 구간 내부의 부분 구간 스크립트
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunScript {
    Kanji,
    Hiragana,
    Katakana,
    /// 바로 뒤에 한자가 오는 숫자 (2023年)
    Numeral,
}

impl RunScript {
    /// 단어 어간이 시작되는 부분 구간인지
    fn is_stem(self) -> bool {
        matches!(self, RunScript::Kanji | RunScript::Numeral)
    }
}

#[derive(Debug, Clone, Copy)]
struct SubRun<'a> {
    script: RunScript,
    text: &'a str,
}

/// 어휘 분할기
#[derive(Debug, Clone, Copy)]
pub struct Segmenter<'l> {
    lexicon: &'l Lexicon,
    /// 마크업의 평문 구간을 다시 나누는 중인지
    /// (조사만으로 덮이는 히라가나는 단어 사전보다 조사를 우선)
    plain_context: bool,
}

impl Default for Segmenter<'static> {
    fn default() -> Self {
        Self::new(Lexicon::builtin())
    }
}

impl<'l> Segmenter<'l> {
    pub fn new(lexicon: &'l Lexicon) -> Self {
        Self {
            lexicon,
            plain_context: false,
        }
    }

    /// 디코더의 평문 구간용 분할기
    pub fn for_plain_text(lexicon: &'l Lexicon) -> Self {
        Self {
            lexicon,
            plain_context: true,
        }
    }

    /// 텍스트를 분류 후 분할
    pub fn segment_text(&self, text: &str) -> Vec<Token> {
        self.segment(&classify(text), text)
    }

    /// 구간 스트림을 토큰으로 분할
    ///
    /// 실패하지 않으며, 토큰 텍스트를 이어 붙이면 항상 원문과 같음
    pub fn segment(&self, spans: &[CodePointSpan], text: &str) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::with_capacity(spans.len());
        let mut i = 0;

        while i < spans.len() {
            if is_lexical(spans, i) {
                let start = i;
                while i < spans.len() && is_lexical(spans, i) {
                    i += 1;
                }
                let runs = sub_runs(&spans[start..i], text);
                self.segment_lexical_run(&runs, &mut tokens);
                continue;
            }

            let span = spans[i];
            let kind = match span.class {
                ScriptClass::Latin | ScriptClass::Digit => TokenKind::Foreign,
                ScriptClass::Whitespace => TokenKind::Whitespace,
                _ => TokenKind::Punctuation,
            };
            tokens.push(Token::new(span.text(text), kind));
            i += 1;
        }

        self.canonicalize_particles(tokens)
    }

    /// 어휘 구간 하나 처리
    fn segment_lexical_run<'a>(&self, runs: &[SubRun<'a>], out: &mut Vec<Token>) {
        let mut i = 0;
        // 다음 어간에 붙일 미화어 접두어
        let mut prefix: &'a str = "";

        while i < runs.len() {
            let run = runs[i];
            let next = runs.get(i + 1).map(|r| r.script);

            match run.script {
                RunScript::Hiragana => {
                    let next_is_stem = next.map_or(false, RunScript::is_stem);
                    prefix = self.push_kana(run.text, next_is_stem, out);
                    i += 1;
                }
                RunScript::Katakana if next != Some(RunScript::Kanji) => {
                    // 외래어는 더 나누지 않음
                    out.push(Token::word(run.text));
                    i += 1;
                }
                RunScript::Katakana | RunScript::Kanji | RunScript::Numeral => {
                    let (next_index, carried) = self.push_stem(runs, i, prefix, out);
                    i = next_index;
                    prefix = carried;
                }
            }
        }
    }

    /// 한자 어간으로 시작하는 단어 하나를 만들고 뒤따르는 조사까지 출력
    ///
    /// 반환: (다음 부분 구간 인덱스, 다음 어간에 넘길 접두어)
    fn push_stem<'a>(
        &self,
        runs: &[SubRun<'a>],
        start: usize,
        prefix: &str,
        out: &mut Vec<Token>,
    ) -> (usize, &'a str) {
        let mut word = String::from(prefix);
        let mut i = start;

        if runs[i].script == RunScript::Katakana {
            word.push_str(runs[i].text);
            i += 1;
        }

        loop {
            if i < runs.len() && runs[i].script == RunScript::Numeral {
                word.push_str(runs[i].text);
                i += 1;
            }
            if i < runs.len() && runs[i].script == RunScript::Kanji {
                word.push_str(runs[i].text);
                i += 1;
            }

            let Some(kana) = runs.get(i).filter(|r| r.script == RunScript::Hiragana) else {
                break;
            };
            let after = runs.get(i + 1).map(|r| r.script);

            // 食べ物: 한 글자 오쿠리가나가 두 한자를 이음
            if after == Some(RunScript::Kanji) && self.lexicon.is_linking_okurigana(kana.text) {
                word.push_str(kana.text);
                i += 1;
                continue;
            }

            let (okurigana_part, carried) = if after.map_or(false, RunScript::is_stem) {
                self.lexicon
                    .split_honorific(kana.text)
                    .unwrap_or((kana.text, ""))
            } else {
                (kana.text, "")
            };
            i += 1;

            let split = self.lexicon.split_okurigana(&word, okurigana_part);
            word.push_str(split.okurigana);
            out.push(Token::word(word));
            out.extend(
                split
                    .particles
                    .into_iter()
                    .map(|p| Token::new(p, TokenKind::Particle)),
            );
            if let Some(rest) = split.rest {
                self.push_standalone_kana(rest, out);
            }
            return (i, carried);
        }

        out.push(Token::word(word));
        (i, "")
    }

    /// 어간 뒤가 아닌 히라가나 구간 처리
    ///
    /// 다음이 어간이면 끝의 お/ご를 떼어 반환
    fn push_kana<'a>(&self, text: &'a str, next_is_stem: bool, out: &mut Vec<Token>) -> &'a str {
        if next_is_stem {
            if let Some((body, prefix)) = self.lexicon.split_honorific(text) {
                if body.is_empty() || self.lexicon.split_kana(body).is_some() {
                    self.push_standalone_kana(body, out);
                    return prefix;
                }
            }
        }
        self.push_standalone_kana(text, out);
        ""
    }

    /// 독립 가나 구간을 사전으로 덮어 단어/조사로 나눔
    ///
    /// 덮을 수 없으면 구간 전체가 한 단어 (なかなか, たしかに)
    fn push_standalone_kana(&self, text: &str, out: &mut Vec<Token>) {
        if text.is_empty() {
            return;
        }

        if self.plain_context {
            if let Some(particles) = self.lexicon.split_particles(text) {
                out.extend(particles.into_iter().map(|p| Token::new(p, TokenKind::Particle)));
                return;
            }
        }

        if let Some(pieces) = self.lexicon.split_kana(text) {
            for piece in pieces {
                if self.lexicon.is_particle(piece) {
                    out.push(Token::new(piece, TokenKind::Particle));
                } else {
                    out.push(Token::word(piece));
                }
            }
            return;
        }

        out.push(Token::word(text));
    }

    /// 연속된 조사 토큰을 조사 전용 분할로 다시 나눔
    ///
    /// 평문에 이어 붙은 조사열은 디코더가 같은 경계로 복원할 수 있어야 함
    fn canonicalize_particles(&self, tokens: Vec<Token>) -> Vec<Token> {
        let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
        let mut group = String::new();

        for token in tokens {
            if token.kind == TokenKind::Particle {
                group.push_str(&token.text);
                continue;
            }
            self.flush_particles(&mut group, &mut out);
            out.push(token);
        }
        self.flush_particles(&mut group, &mut out);

        out
    }

    fn flush_particles(&self, group: &mut String, out: &mut Vec<Token>) {
        if group.is_empty() {
            return;
        }
        match self.lexicon.split_particles(group) {
            Some(pieces) => {
                out.extend(pieces.into_iter().map(|p| Token::new(p, TokenKind::Particle)));
            }
            None => out.push(Token::new(group.as_str(), TokenKind::Particle)),
        }
        group.clear();
    }
}

/// 구간이 어휘 구간에 속하는지 (한자 앞의 숫자 포함)
fn is_lexical(spans: &[CodePointSpan], i: usize) -> bool {
    let class = spans[i].class;
    class.is_japanese()
        || (class == ScriptClass::Digit
            && spans
                .get(i + 1)
                .map_or(false, |next| next.class == ScriptClass::Kanji))
}

/// 어휘 구간의 부분 구간 목록 생성
///
/// 장음 부호만으로 된 가타카나 구간은 앞의 히라가나에 붙임 (すごーい)
fn sub_runs<'a>(spans: &[CodePointSpan], text: &'a str) -> Vec<SubRun<'a>> {
    let mut runs: Vec<(RunScript, usize, usize)> = Vec::with_capacity(spans.len());

    for span in spans {
        let mut script = match span.class {
            ScriptClass::Kanji => RunScript::Kanji,
            ScriptClass::Hiragana => RunScript::Hiragana,
            ScriptClass::Katakana => RunScript::Katakana,
            _ => RunScript::Numeral,
        };
        if script == RunScript::Katakana
            && is_prolonged_marks(span.text(text))
            && runs.last().map_or(false, |r| r.0 == RunScript::Hiragana)
        {
            script = RunScript::Hiragana;
        }

        match runs.last_mut() {
            Some(last) if last.0 == script && last.2 == span.start => last.2 = span.end,
            _ => runs.push((script, span.start, span.end)),
        }
    }

    runs.into_iter()
        .map(|(script, start, end)| SubRun {
            script,
            text: &text[start..end],
        })
        .collect()
}

/// 기본 사전으로 분할
pub fn segment(spans: &[CodePointSpan], text: &str) -> Vec<Token> {
    Segmenter::default().segment(spans, text)
}
