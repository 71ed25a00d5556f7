//! Yomigana - 일본어 단어 분할 + 후리가나 마크업 CLI

use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use yomigana::config::{config_path, load_config, load_config_from, save_config, save_config_to};
use yomigana::core::{load_dictionaries, Converter};
use yomigana::markup::{strip_annotations, strip_code_fence, strip_readings_only};
use yomigana::reading::ReadingDictionary;

#[derive(Parser)]
#[command(name = "yomigana")]
#[command(about = "Japanese word segmentation and furigana markup")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 설정 파일 경로 (기본: ~/.config/yomigana/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 읽기 사전 JSON (여러 번 지정 가능, 설정의 사전보다 우선)
    #[arg(long = "dict", global = true)]
    dicts: Vec<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// 평문을 주석 마크업으로 변환
    Annotate {
        /// 입력 텍스트 (없으면 stdin)
        text: Option<String>,
        /// 마크업 대신 토큰 JSON 출력
        #[arg(long)]
        json: bool,
    },
    /// 마크업을 토큰 JSON으로 복원
    Decode {
        markup: Option<String>,
    },
    /// 마크업을 평문으로
    Strip {
        markup: Option<String>,
    },
    /// 후리가나만 제거
    HideReadings {
        markup: Option<String>,
    },
    /// 마크업의 단어 목록 (한 줄에 하나)
    Words {
        markup: Option<String>,
    },
    /// 현재 설정을 설정 파일로 저장
    InitConfig {
        /// 이미 있는 파일도 덮어씀
        #[arg(long)]
        force: bool,
    },
}

/// 인자가 없으면 stdin 전체를 읽음
fn read_input(arg: Option<String>) -> Result<String, String> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("stdin 읽기 실패: {}", e))?;
            Ok(buf.trim_end_matches('\n').to_string())
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("직렬화 실패: {}", e))
}

fn run(cli: Cli) -> Result<(), String> {
    let config = match &cli.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };
    let converter = Converter::from_config(&config);

    match cli.command {
        Commands::Annotate { text, json } => {
            let text = read_input(text)?;
            let mut dict = load_dictionaries(&config);
            for path in &cli.dicts {
                let loaded = ReadingDictionary::load(path)
                    .map_err(|e| format!("사전 로드 실패 ({}): {}", path.display(), e))?;
                dict.extend(loaded);
            }
            log::debug!("읽기 사전 항목 {}개", dict.len());

            if json {
                println!("{}", to_json(&converter.tokenize(&text, &dict))?);
            } else {
                println!("{}", converter.convert(&text, &dict));
            }
        }
        Commands::Decode { markup } => {
            let markup = strip_code_fence(&read_input(markup)?);
            println!("{}", to_json(&converter.decode(&markup))?);
        }
        Commands::Strip { markup } => {
            let markup = strip_code_fence(&read_input(markup)?);
            println!("{}", strip_annotations(&markup));
        }
        Commands::HideReadings { markup } => {
            let markup = strip_code_fence(&read_input(markup)?);
            println!("{}", strip_readings_only(&markup));
        }
        Commands::Words { markup } => {
            let markup = strip_code_fence(&read_input(markup)?);
            for word in converter.words(&markup) {
                println!("{}", word);
            }
        }
        Commands::InitConfig { force } => {
            let path = cli.config.clone().unwrap_or_else(config_path);
            if path.exists() && !force {
                return Err(format!("설정 파일이 이미 있습니다: {}", path.display()));
            }
            match &cli.config {
                Some(path) => save_config_to(path, &config)?,
                None => save_config(&config)?,
            }
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("오류: {}", e);
        process::exit(1);
    }
}
