//! 마크업 제거 (평문 추출, 후리가나 숨기기)

use std::sync::LazyLock;

use regex::Regex;

/// 루비 그룹 (읽기 있음, 구형식 `|읽기`, 읽기 숨김 모두)
static RUBY_GROUP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<ruby>([^<|]+)(?:<rt>[^<]*</rt>|\|[^<]*)?</ruby>")
        .expect("valid ruby group regex")
});

/// 읽기가 붙은 루비 그룹
static RUBY_READING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<ruby>([^<|]+)(?:<rt>[^<]*</rt>|\|[^<]*)</ruby>")
        .expect("valid ruby reading regex")
});

/// 태그 없는 내용의 단어 스팬
static WORD_SPAN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<span class="jp-word">([^<]*)</span>"#).expect("valid word span regex")
});

/// 앞뒤 코드 펜스
static FENCE_OPEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*```(?:html)?\s*").expect("valid fence open regex"));
static FENCE_CLOSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*```\s*$").expect("valid fence close regex"));

/// 더 이상 바뀌지 않을 때까지 반복 적용
fn until_fixed_point(input: &str, step: impl Fn(&str) -> String) -> String {
    let mut current = input.to_string();
    loop {
        let next = step(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn replace_all(regex: &Regex, text: &str, replacement: &str) -> String {
    regex.replace_all(text, replacement).into_owned()
}

/// 모든 주석 마크업 제거 -> 평문
///
/// 읽기는 내용째로, 스팬/루비 태그는 태그만 제거. 멱등.
/// 디코더와 같이 짝이 맞지 않는 태그는 평문 글자로 남김
pub fn strip_annotations(markup: &str) -> String {
    until_fixed_point(markup, |text| {
        let text = replace_all(&RUBY_GROUP_REGEX, text, "$1");
        replace_all(&WORD_SPAN_REGEX, &text, "$1")
    })
}

/// 읽기만 제거 (후리가나 끄기 표시용)
///
/// 스팬/루비 구조는 유지. 멱등.
pub fn strip_readings_only(markup: &str) -> String {
    until_fixed_point(markup, |text| {
        replace_all(&RUBY_READING_REGEX, text, "<ruby>$1</ruby>")
    })
}

/// 모델 응답을 감싼 ```html 코드 펜스 제거
pub fn strip_code_fence(text: &str) -> String {
    let text = FENCE_OPEN_REGEX.replace(text, "");
    FENCE_CLOSE_REGEX.replace(&text, "").into_owned()
}
