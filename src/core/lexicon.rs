//! 조사/가나 단어 사전
//!
//! 어휘 구간 안의 단어 경계를 정하는 규칙용 닫힌 목록입니다.
//! 형태소 분석기가 아니라 조사 목록 + 최장 일치 + 예외 목록으로 동작합니다.

use std::collections::HashSet;
use std::sync::LazyLock;

/// 닫힌 조사 목록 (변형 포함)
pub const PARTICLES: &[&str] = &[
    "は", "が", "の", "を", "に", "へ", "で", "と", "も", "や", "か",
    "より", "から", "まで", "ながら", "ので", "のに",
    "けれど", "けれども", "けど", "けども",
    // 종조사
    "ね", "よ",
];

/// 단어 앞에서 떼어낼 수 있는 조사의 첫 글자
///
/// 오쿠리가나가 이 글자로 시작하는 경우는 사실상 없음
const LEADING_SAFE: &[char] = &['は', 'を', 'の'];

/// 히라가나로만 쓰이는 자주 나오는 단어
pub const KANA_WORDS: &[&str] = &[
    // 인사
    "ありがとう", "ございます", "おはよう", "こんにちは", "こんばんは",
    "さようなら", "すみません", "おやすみなさい", "いただきます",
    // 조동사/보조 용언
    "です", "でした", "でしょう", "ます", "ました", "ません", "だ", "だった",
    "する", "します", "しました", "して", "した", "しない",
    "いる", "います", "いました", "ある", "あります", "ない", "なる", "なります",
    "ください", "いい", "よい",
    // 형식 명사
    "こと", "もの", "ため", "よう", "ところ",
    // 지시어
    "これ", "それ", "あれ", "どれ", "ここ", "そこ", "あそこ", "どこ",
    "この", "その", "あの", "どの", "こう", "そう", "どう",
    // 부사/접속사
    "いつ", "いつも", "とても", "もっと", "ちょっと", "まだ", "もう", "すぐ",
    "よく", "たくさん", "みんな", "また", "しかし", "だから", "そして", "それから",
    "なに", "なん", "だれ", "はい", "いいえ", "ええ",
    // 형용사
    "おいしい", "かわいい", "きれい",
    // 호칭
    "さん", "ちゃん", "くん", "さま",
];

/// 끝 가나가 단어의 일부인 한자 단어 (조사로 떼지 않음)
pub const KANA_TAIL_EXCEPTIONS: &[&str] = &[
    "特に", "最も", "既に", "共に", "更に", "主に", "常に", "正に", "実に", "遂に",
    "殊に", "互いに", "未だに", "或いは", "若しくは", "尤も",
];

/// 두 한자 사이에서 앞뒤를 한 단어로 잇는 한 글자 오쿠리가나 (食べ物, 申し込み)
const LINKING_OKURIGANA: &[char] = &[
    'き', 'し', 'ち', 'ひ', 'み', 'り', 'ぎ', 'じ', 'び', 'け', 'せ', 'め', 'れ',
    'げ', 'ぜ', 'べ', 'っ',
];

/// 다음 단어의 접두어가 되는 미화어
const HONORIFIC_PREFIXES: &[char] = &['お', 'ご'];

/// 기본 사전 (공유)
static BUILTIN: LazyLock<Lexicon> = LazyLock::new(Lexicon::new);

/// 오쿠리가나 분리 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OkuriganaSplit<'t> {
    /// 단어에 붙는 가나
    pub okurigana: &'t str,
    /// 뒤에 떼어낸 조사 (순서대로)
    pub particles: Vec<&'t str>,
    /// 앞 조사 뒤에 남은 독립 가나 구간
    pub rest: Option<&'t str>,
}

/// 분할 규칙용 사전
#[derive(Debug, Clone)]
pub struct Lexicon {
    particles: HashSet<String>,
    /// 글자 수 내림차순 (최장 일치용)
    particles_by_len: Vec<String>,
    kana_words: HashSet<String>,
    tail_exceptions: Vec<String>,
    /// 가장 긴 항목의 글자 수
    max_entry_chars: usize,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    /// 내장 목록으로 사전 생성
    pub fn new() -> Self {
        Self::with_extras(&[], &[], &[])
    }

    /// 공유 기본 사전
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    /// 내장 목록에 설정의 추가 항목을 더해 생성
    pub fn with_extras(
        extra_particles: &[String],
        extra_kana_words: &[String],
        extra_exceptions: &[String],
    ) -> Self {
        let particles: HashSet<String> = PARTICLES
            .iter()
            .map(|p| p.to_string())
            .chain(extra_particles.iter().cloned())
            .filter(|p| !p.is_empty())
            .collect();

        let mut particles_by_len: Vec<String> = particles.iter().cloned().collect();
        particles_by_len.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        // 조사와 같은 문자열은 단어로 취급하지 않음
        let kana_words: HashSet<String> = KANA_WORDS
            .iter()
            .map(|w| w.to_string())
            .chain(extra_kana_words.iter().cloned())
            .filter(|w| !w.is_empty() && !particles.contains(w))
            .collect();

        let tail_exceptions: Vec<String> = KANA_TAIL_EXCEPTIONS
            .iter()
            .map(|w| w.to_string())
            .chain(extra_exceptions.iter().cloned())
            .filter(|w| !w.is_empty())
            .collect();

        let max_entry_chars = particles
            .iter()
            .chain(kana_words.iter())
            .map(|e| e.chars().count())
            .max()
            .unwrap_or(1);

        Self {
            particles,
            particles_by_len,
            kana_words,
            tail_exceptions,
            max_entry_chars,
        }
    }

    pub fn is_particle(&self, text: &str) -> bool {
        self.particles.contains(text)
    }

    pub fn is_kana_word(&self, text: &str) -> bool {
        self.kana_words.contains(text)
    }

    /// 두 한자 사이의 연결 오쿠리가나인지 확인
    pub fn is_linking_okurigana(&self, kana: &str) -> bool {
        let mut chars = kana.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => LINKING_OKURIGANA.contains(&c),
            _ => false,
        }
    }

    /// 끝의 미화어 접두어(お/ご)를 떼어냄
    ///
    /// 반환: (앞부분, 접두어)
    pub fn split_honorific<'t>(&self, kana: &'t str) -> Option<(&'t str, &'t str)> {
        let last = kana.chars().last()?;
        if !HONORIFIC_PREFIXES.contains(&last) {
            return None;
        }
        let cut = kana.len() - last.len_utf8();
        Some((&kana[..cut], &kana[cut..]))
    }

    /// 조사만으로 나눔 (최소 조각 수, 동점이면 앞쪽 최장 일치)
    pub fn split_particles<'t>(&self, text: &'t str) -> Option<Vec<&'t str>> {
        self.tile(text, false)
    }

    /// 조사 + 가나 단어로 나눔
    pub fn split_kana<'t>(&self, text: &'t str) -> Option<Vec<&'t str>> {
        self.tile(text, true)
    }

    /// 동적 계획법으로 전체를 사전 항목으로 덮는 분할 탐색
    ///
    /// best[k] = text[k..]를 덮는 최소 조각 수와 첫 조각의 끝
    /// 같은 위치에서는 긴 조각부터 시도하고 더 적을 때만 갱신하므로
    /// 동점이면 앞쪽 조각이 가장 긴 분할이 선택됨
    fn tile<'t>(&self, text: &'t str, with_words: bool) -> Option<Vec<&'t str>> {
        if text.is_empty() {
            return None;
        }

        let bounds: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let n = bounds.len() - 1;

        let mut best: Vec<Option<(usize, usize)>> = vec![None; n + 1];
        best[n] = Some((0, n));

        for k in (0..n).rev() {
            let max_end = (k + self.max_entry_chars).min(n);
            for end in (k + 1..=max_end).rev() {
                let piece = &text[bounds[k]..bounds[end]];
                let known =
                    self.is_particle(piece) || (with_words && self.is_kana_word(piece));
                if !known {
                    continue;
                }
                if let Some((count, _)) = best[end] {
                    if best[k].map_or(true, |(current, _)| count + 1 < current) {
                        best[k] = Some((count + 1, end));
                    }
                }
            }
        }

        let mut pieces = Vec::new();
        let mut k = 0;
        while k < n {
            let (_, end) = best[k]?;
            pieces.push(&text[bounds[k]..bounds[end]]);
            k = end;
        }
        Some(pieces)
    }

    /// 끝에 붙은 가장 긴 조사
    fn longest_particle_suffix(&self, text: &str) -> Option<&str> {
        self.particles_by_len
            .iter()
            .find(|p| text.ends_with(p.as_str()))
            .map(String::as_str)
    }

    /// 앞에서 뗄 수 있는 가장 긴 조사
    ///
    /// 여러 글자 조사는 남은 부분이 사전으로 덮일 때만 (猫のにおい -> の)
    fn longest_leading_particle(&self, text: &str) -> Option<&str> {
        let first = text.chars().next()?;
        if !LEADING_SAFE.contains(&first) {
            return None;
        }
        self.particles_by_len
            .iter()
            .filter(|p| text.starts_with(p.as_str()))
            .find(|p| {
                let rest = &text[p.len()..];
                p.chars().nth(1).is_none() || rest.is_empty() || self.split_kana(rest).is_some()
            })
            .map(String::as_str)
    }

    /// 같은 위치에서 끝나는 더 긴 가나 단어가 있는지 (조사 동형 부분 문자열 보호)
    fn longer_word_ends_here(&self, text: &str, particle: &str) -> bool {
        let particle_chars = particle.chars().count();
        self.kana_words
            .iter()
            .any(|w| w.chars().count() > particle_chars && text.ends_with(w.as_str()))
    }

    /// 오쿠리가나 끝의 조사를 반복해서 떼어냄
    ///
    /// - か는 떼지 않음 (静か, 確か)
    /// - ん/い 뒤의 で는 て형이므로 떼지 않음 (読んで)
    ///
    /// 반환: (남은 앞부분, 조사 목록)
    pub fn peel_particles<'t>(&self, text: &'t str) -> (&'t str, Vec<&'t str>) {
        let mut end = text.len();
        let mut particles: Vec<&'t str> = Vec::new();

        loop {
            let remaining = &text[..end];
            let Some(particle) = self.longest_particle_suffix(remaining) else {
                break;
            };
            if particle == "か" {
                break;
            }
            let cut = end - particle.len();
            if particle == "で" {
                let before = remaining[..cut].chars().last();
                if matches!(before, Some('ん') | Some('い')) {
                    break;
                }
            }
            if self.longer_word_ends_here(remaining, particle) {
                break;
            }
            particles.push(&text[cut..end]);
            end = cut;
        }

        particles.reverse();
        (&text[..end], particles)
    }

    /// 한자 어간 뒤 히라가나 구간을 오쿠리가나/조사/나머지로 나눔
    pub fn split_okurigana<'t>(&self, stem: &str, kana: &'t str) -> OkuriganaSplit<'t> {
        let whole = format!("{}{}", stem, kana);
        let is_exception = self
            .tail_exceptions
            .iter()
            .any(|e| whole.ends_with(e.as_str()) && e.len() > kana.len());
        if is_exception {
            return OkuriganaSplit {
                okurigana: kana,
                particles: Vec::new(),
                rest: None,
            };
        }

        if let Some(particle) = self.longest_leading_particle(kana) {
            let rest = &kana[particle.len()..];
            return OkuriganaSplit {
                okurigana: "",
                particles: vec![&kana[..particle.len()]],
                rest: (!rest.is_empty()).then_some(rest),
            };
        }

        let (okurigana, particles) = self.peel_particles(kana);
        OkuriganaSplit {
            okurigana,
            particles,
            rest: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_membership() {
        let lexicon = Lexicon::new();
        assert!(lexicon.is_particle("は"));
        assert!(lexicon.is_particle("けれども"));
        assert!(!lexicon.is_particle("からも"));
        assert!(lexicon.is_kana_word("ございます"));
        assert!(!lexicon.is_kana_word("は"));
    }

    #[test]
    fn test_split_particles_longest_first() {
        let lexicon = Lexicon::new();
        assert_eq!(lexicon.split_particles("からも"), Some(vec!["から", "も"]));
        assert_eq!(lexicon.split_particles("のでは"), Some(vec!["ので", "は"]));
        assert_eq!(lexicon.split_particles("でも"), Some(vec!["で", "も"]));
        assert_eq!(lexicon.split_particles("ございます"), None);
        assert_eq!(lexicon.split_particles(""), None);
    }

    #[test]
    fn test_split_kana_words() {
        let lexicon = Lexicon::new();
        assert_eq!(
            lexicon.split_kana("ありがとうございます"),
            Some(vec!["ありがとう", "ございます"])
        );
        assert_eq!(lexicon.split_kana("これは"), Some(vec!["これ", "は"]));
        assert_eq!(lexicon.split_kana("こんにちは"), Some(vec!["こんにちは"]));
        assert_eq!(lexicon.split_kana("ぬるぽ"), None);
    }

    #[test]
    fn test_peel_particles() {
        let lexicon = Lexicon::new();
        assert_eq!(lexicon.peel_particles("するのが"), ("する", vec!["の", "が"]));
        assert_eq!(lexicon.peel_particles("からも"), ("", vec!["から", "も"]));
        assert_eq!(lexicon.peel_particles("んでいます"), ("んでいます", vec![]));
        // て형의 で
        assert_eq!(lexicon.peel_particles("んでも"), ("んで", vec!["も"]));
        // 静か
        assert_eq!(lexicon.peel_particles("かに"), ("か", vec!["に"]));
        // こと의 と는 조사가 아님
        assert_eq!(lexicon.peel_particles("うこと"), ("うこと", vec![]));
        assert_eq!(lexicon.peel_particles("たいので"), ("たい", vec!["ので"]));
    }

    #[test]
    fn test_leading_particle_needs_tileable_rest() {
        let lexicon = Lexicon::new();

        let split = lexicon.split_okurigana("猫", "のにおい");
        assert_eq!(split.particles, vec!["の"]);
        assert_eq!(split.rest, Some("におい"));

        let split = lexicon.split_okurigana("雨", "のに");
        assert_eq!(split.particles, vec!["のに"]);
        assert_eq!(split.rest, None);

        let split = lexicon.split_okurigana("雨", "のでも");
        assert_eq!(split.particles, vec!["ので"]);
        assert_eq!(split.rest, Some("も"));
    }

    #[test]
    fn test_split_okurigana() {
        let lexicon = Lexicon::new();

        let split = lexicon.split_okurigana("私", "は");
        assert_eq!(split.okurigana, "");
        assert_eq!(split.particles, vec!["は"]);
        assert_eq!(split.rest, None);

        let split = lexicon.split_okurigana("住", "んでいます");
        assert_eq!(split.okurigana, "んでいます");
        assert!(split.particles.is_empty());

        let split = lexicon.split_okurigana("東京", "に");
        assert_eq!(split.okurigana, "");
        assert_eq!(split.particles, vec!["に"]);

        let split = lexicon.split_okurigana("私", "のもの");
        assert_eq!(split.particles, vec!["の"]);
        assert_eq!(split.rest, Some("もの"));
    }

    #[test]
    fn test_tail_exceptions() {
        let lexicon = Lexicon::new();
        let split = lexicon.split_okurigana("特", "に");
        assert_eq!(split.okurigana, "に");
        assert!(split.particles.is_empty());
    }

    #[test]
    fn test_linking_okurigana() {
        let lexicon = Lexicon::new();
        assert!(lexicon.is_linking_okurigana("べ"));
        assert!(lexicon.is_linking_okurigana("っ"));
        assert!(!lexicon.is_linking_okurigana("の"));
        assert!(!lexicon.is_linking_okurigana("べる"));
    }

    #[test]
    fn test_split_honorific() {
        let lexicon = Lexicon::new();
        assert_eq!(lexicon.split_honorific("でお"), Some(("で", "お")));
        assert_eq!(lexicon.split_honorific("ご"), Some(("", "ご")));
        assert_eq!(lexicon.split_honorific("は"), None);
    }

    #[test]
    fn test_extras() {
        let lexicon = Lexicon::with_extras(&["わ".to_string()], &["ぬるぽ".to_string()], &[]);
        assert!(lexicon.is_particle("わ"));
        assert_eq!(lexicon.split_kana("ぬるぽわ"), Some(vec!["ぬるぽ", "わ"]));
    }
}
