//! 읽기 사전 로드 및 조회
//!
//! JSON 형식의 표면형 -> 읽기 사전을 로드합니다.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use wana_kana::ConvertJapanese;

use super::ReadingSource;

/// 읽기 사전 로드/파싱 에러
#[derive(Debug)]
pub enum DictionaryError {
    /// 파일 읽기 실패
    Io(std::io::Error),
    /// JSON 문법 오류 (줄, 열)
    Json {
        line: usize,
        column: usize,
        message: String,
    },
    /// 최상위 값이 표면형 -> 읽기 객체가 아님
    NotAnObject,
    /// 빈 표면형 키
    EmptySurface,
    /// 읽기로 해석할 수 없는 값
    InvalidEntry {
        surface: String,
        found: &'static str,
    },
}

impl std::fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DictionaryError::Io(e) => write!(f, "사전 파일 읽기 오류: {}", e),
            DictionaryError::Json {
                line,
                column,
                message,
            } => write!(f, "사전 JSON 오류 ({}:{}): {}", line, column, message),
            DictionaryError::NotAnObject => {
                write!(f, "사전 최상위 값은 표면형 -> 읽기 객체여야 합니다")
            }
            DictionaryError::EmptySurface => write!(f, "사전에 빈 표면형 키가 있습니다"),
            DictionaryError::InvalidEntry { surface, found } => write!(
                f,
                "'{}'의 읽기 값이 {}입니다 (문자열, 배열, 객체만 허용)",
                surface, found
            ),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DictionaryError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DictionaryError {
    fn from(e: std::io::Error) -> Self {
        DictionaryError::Io(e)
    }
}

impl From<serde_json::Error> for DictionaryError {
    fn from(e: serde_json::Error) -> Self {
        DictionaryError::Json {
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        }
    }
}

/// 표면형 -> 히라가나 읽기 사전
#[derive(Debug, Clone, Default)]
pub struct ReadingDictionary {
    entries: HashMap<String, String>,
}

impl ReadingDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON 파일에서 사전 로드
    ///
    /// # 파일 형식
    /// ```json
    /// {
    ///   "東京": "とうきょう",
    ///   "私": ["わたし", "わたくし"],
    ///   "住": { "kun_readings": ["す.む"], "on_readings": ["ジュウ"] }
    /// }
    /// ```
    /// 값은 읽기 문자열, 읽기 배열(첫 번째 사용), 또는 kanjiapi 형식 객체
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let value: serde_json::Value = serde_json::from_reader(reader)?;

        Self::from_json_value(&value)
    }

    /// JSON 문자열에서 사전 로드
    pub fn from_json(json_str: &str) -> Result<Self, DictionaryError> {
        let value: serde_json::Value = serde_json::from_str(json_str)?;

        Self::from_json_value(&value)
    }

    /// serde_json::Value에서 사전 생성
    fn from_json_value(value: &serde_json::Value) -> Result<Self, DictionaryError> {
        let obj = value.as_object().ok_or(DictionaryError::NotAnObject)?;

        let mut entries = HashMap::with_capacity(obj.len());

        for (surface, val) in obj {
            if surface.is_empty() {
                return Err(DictionaryError::EmptySurface);
            }
            match entry_reading(surface, val)? {
                Some(reading) => {
                    entries.insert(surface.clone(), reading);
                }
                None => log::debug!("읽기 없는 사전 항목 건너뜀: {}", surface),
            }
        }

        Ok(Self { entries })
    }

    /// 항목 추가 (읽기는 히라가나로 정규화, 빈 읽기는 무시)
    pub fn insert(&mut self, surface: impl Into<String>, reading: &str) {
        let reading = reading.to_hiragana();
        if !reading.is_empty() {
            self.entries.insert(surface.into(), reading);
        }
    }

    /// 다른 사전의 항목을 덮어쓰며 병합
    pub fn extend(&mut self, other: ReadingDictionary) {
        self.entries.extend(other.entries);
    }

    pub fn get(&self, surface: &str) -> Option<&str> {
        self.entries.get(surface).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ReadingSource for ReadingDictionary {
    fn reading(&self, surface: &str) -> Option<String> {
        self.get(surface).map(str::to_string)
    }
}

impl<S: Into<String>, R: AsRef<str>> FromIterator<(S, R)> for ReadingDictionary {
    fn from_iter<I: IntoIterator<Item = (S, R)>>(iter: I) -> Self {
        let mut dict = ReadingDictionary::new();
        for (surface, reading) in iter {
            dict.insert(surface, reading.as_ref());
        }
        dict
    }
}

/// 사전 값 하나에서 읽기 추출
fn entry_reading(
    surface: &str,
    value: &serde_json::Value,
) -> Result<Option<String>, DictionaryError> {
    let reading = match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => first_string(items),
        serde_json::Value::Object(obj) => {
            let kun = obj
                .get("kun_readings")
                .and_then(|v| v.as_array())
                .and_then(|items| first_string(items))
                .map(|r| clean_kun_reading(&r));
            let on = || {
                obj.get("on_readings")
                    .and_then(|v| v.as_array())
                    .and_then(|items| first_string(items))
            };
            kun.filter(|r| !r.is_empty()).or_else(on)
        }
        serde_json::Value::Null => None,
        other => {
            return Err(DictionaryError::InvalidEntry {
                surface: surface.to_string(),
                found: json_kind(other),
            })
        }
    };

    Ok(reading
        .map(|r| r.trim().to_hiragana())
        .filter(|r| !r.is_empty()))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "불리언",
        serde_json::Value::Number(_) => "숫자",
        serde_json::Value::String(_) => "문자열",
        serde_json::Value::Array(_) => "배열",
        serde_json::Value::Object(_) => "객체",
    }
}

/// 배열의 첫 번째 비어 있지 않은 문자열
fn first_string(items: &[serde_json::Value]) -> Option<String> {
    items
        .iter()
        .filter_map(|v| v.as_str())
        .find(|s| !s.trim().is_empty())
        .map(str::to_string)
}

/// kanjiapi 훈독 표기 정리: "す.む" -> "す", "-ず.み" -> "ず"
fn clean_kun_reading(kun: &str) -> String {
    let stem = kun.split('.').next().unwrap_or(kun);
    stem.chars().filter(|&c| c != '-').collect()
}
