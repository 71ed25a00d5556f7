//! 일본어 평문 -> 주석 마크업 통합 변환기
//!
//! classify -> segment -> annotate -> encode

use crate::config::YomiganaConfig;
use crate::core::lexicon::Lexicon;
use crate::core::script::classify;
use crate::core::segmenter::Segmenter;
use crate::core::token::Token;
use crate::markup::{encode, Decoder};
use crate::reading::{Annotator, MissingReading, ReadingDictionary, ReadingSource};

/// 입력 길이 경고 기준 기본값 (문자 수)
pub const DEFAULT_MAX_INPUT_CHARS: usize = 5000;

/// 설정을 반영한 변환기
#[derive(Debug, Clone)]
pub struct Converter {
    lexicon: Lexicon,
    annotator: Annotator,
    max_input_chars: usize,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::new(),
            annotator: Annotator::new(),
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }

    pub fn from_config(config: &YomiganaConfig) -> Self {
        Self {
            lexicon: Lexicon::with_extras(
                &config.extra_particles,
                &config.extra_kana_words,
                &config.kana_tail_exceptions,
            ),
            annotator: Annotator::new().with_missing_reading(MissingReading::from_placeholder(
                config.missing_reading_placeholder.as_deref(),
            )),
            max_input_chars: config.max_input_chars,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// 분할 + 읽기 부착
    ///
    /// 길이 제한을 넘는 입력도 처리하며 경고만 남김
    pub fn tokenize(&self, text: &str, source: &dyn ReadingSource) -> Vec<Token> {
        let len = text.chars().count();
        if len > self.max_input_chars {
            log::warn!("입력이 너무 깁니다: {}자 (기준 {}자)", len, self.max_input_chars);
        }

        let spans = classify(text);
        let tokens = Segmenter::new(&self.lexicon).segment(&spans, text);
        self.annotator.annotate_all(&tokens, source)
    }

    /// 평문을 주석 마크업으로 변환
    pub fn convert(&self, text: &str, source: &dyn ReadingSource) -> String {
        encode(&self.tokenize(text, source))
    }

    /// 같은 사전으로 마크업 디코딩
    pub fn decode(&self, markup: &str) -> Vec<Token> {
        Decoder::new(&self.lexicon).decode(markup)
    }

    pub fn words(&self, markup: &str) -> Vec<String> {
        Decoder::new(&self.lexicon).words(markup)
    }
}

/// 설정의 사전 파일을 순서대로 로드해 병합
///
/// 로드 실패한 파일은 경고 후 건너뜀
pub fn load_dictionaries(config: &YomiganaConfig) -> ReadingDictionary {
    let mut dict = ReadingDictionary::new();
    for path in &config.dictionaries {
        match ReadingDictionary::load(path) {
            Ok(loaded) => dict.extend(loaded),
            Err(e) => log::warn!("사전 로드 실패 ({}): {}", path.display(), e),
        }
    }
    dict
}

/// 기본 사전으로 평문을 주석 마크업으로 변환
pub fn convert(text: &str, source: &dyn ReadingSource) -> String {
    let tokens = Segmenter::default().segment(&classify(text), text);
    encode(&Annotator::new().annotate_all(&tokens, source))
}
