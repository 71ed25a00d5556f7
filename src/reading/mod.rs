//! 후리가나 읽기 모듈
//!
//! 읽기 자체는 외부에서 주입받습니다 (사전 파일, 온라인 조회 결과 캐시 등).
//! 이 모듈은 받은 읽기를 단어의 한자 구간에 배치하는 역할만 합니다.

mod align;
mod annotator;
mod dictionary;

pub use align::align_reading;
pub use annotator::{annotate, annotate_all, Annotator};
pub use dictionary::{DictionaryError, ReadingDictionary};

/// 표면형 -> 히라가나 읽기 조회
///
/// 모르는 표면형이면 None
pub trait ReadingSource {
    fn reading(&self, surface: &str) -> Option<String>;
}

impl<F> ReadingSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn reading(&self, surface: &str) -> Option<String> {
        self(surface)
    }
}

/// 아무 읽기도 모르는 소스
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReadings;

impl ReadingSource for NoReadings {
    fn reading(&self, _surface: &str) -> Option<String> {
        None
    }
}

/// 읽기를 찾지 못한 한자 구간 처리 방식
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MissingReading {
    /// 읽기 없이 그대로 둠
    #[default]
    Unannotated,
    /// 자리표시 읽기를 붙임
    Placeholder(String),
}

impl MissingReading {
    /// 설정값에서 생성 (공백뿐이거나 태그 문자가 있으면 자리표시 없음)
    pub fn from_placeholder(placeholder: Option<&str>) -> Self {
        match placeholder {
            Some(p) if is_usable_placeholder(p) => MissingReading::Placeholder(p.to_string()),
            _ => MissingReading::Unannotated,
        }
    }

    /// 실제로 붙일 자리표시 읽기
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            MissingReading::Placeholder(p) if is_usable_placeholder(p) => Some(p),
            _ => None,
        }
    }
}

/// 디코더가 읽기로 되읽을 수 있는 자리표시인지
fn is_usable_placeholder(p: &str) -> bool {
    !p.trim().is_empty() && !p.contains('<')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_from_config() {
        assert_eq!(
            MissingReading::from_placeholder(Some("？")),
            MissingReading::Placeholder("？".to_string())
        );
        assert_eq!(MissingReading::from_placeholder(None), MissingReading::Unannotated);
        assert_eq!(MissingReading::from_placeholder(Some("")), MissingReading::Unannotated);
        assert_eq!(MissingReading::from_placeholder(Some(" 　")), MissingReading::Unannotated);
        assert_eq!(MissingReading::from_placeholder(Some("<b>")), MissingReading::Unannotated);
    }

    #[test]
    fn test_blank_placeholder_is_ignored() {
        assert_eq!(MissingReading::Placeholder(" ".to_string()).placeholder(), None);
        assert_eq!(MissingReading::Placeholder("?".to_string()).placeholder(), Some("?"));
    }
}
