//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Yomigana 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct YomiganaConfig {
    /// 내장 목록에 추가할 조사
    #[serde(default)]
    pub extra_particles: Vec<String>,
    /// 내장 목록에 추가할 히라가나 단어
    #[serde(default)]
    pub extra_kana_words: Vec<String>,
    /// 끝 가나를 조사로 떼지 않을 단어 (特に 등)
    #[serde(default)]
    pub kana_tail_exceptions: Vec<String>,
    /// 읽기를 찾지 못한 한자에 붙일 자리표시 (없으면 읽기 없이 둠)
    #[serde(default)]
    pub missing_reading_placeholder: Option<String>,
    /// 읽기 사전 JSON 파일 경로 (뒤의 파일이 앞의 항목을 덮어씀)
    #[serde(default)]
    pub dictionaries: Vec<PathBuf>,
    /// 입력 길이 경고 기준 (문자 수)
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
}

fn default_max_input_chars() -> usize {
    5000
}

impl Default for YomiganaConfig {
    fn default() -> Self {
        Self {
            extra_particles: Vec::new(),
            extra_kana_words: Vec::new(),
            kana_tail_exceptions: Vec::new(),
            missing_reading_placeholder: None,
            dictionaries: Vec::new(),
            max_input_chars: default_max_input_chars(),
        }
    }
}

/// 설정 파일 경로: $XDG_CONFIG_HOME/yomigana/config.json (없으면 ~/.config)
pub fn config_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(PathBuf::from)
                .filter(|p| p.is_absolute() && p.is_dir())
                .map(|home| home.join(".config"))
        })
        // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    base.join("yomigana").join("config.json")
}

/// 기본 경로의 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> YomiganaConfig {
    load_config_from(&config_path())
}

/// 지정 경로의 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_from(path: &Path) -> YomiganaConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용 ({}): {}", path.display(), e);
            YomiganaConfig::default()
        }),
        Err(_) => YomiganaConfig::default(),
    }
}

/// 기본 경로에 설정 저장
pub fn save_config(config: &YomiganaConfig) -> Result<(), String> {
    save_config_to(&config_path(), config)
}

/// 지정 경로에 설정 저장
pub fn save_config_to(path: &Path, config: &YomiganaConfig) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
