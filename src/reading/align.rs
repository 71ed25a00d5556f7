//! 단어 전체 읽기를 한자 구간별 읽기로 정렬

use wana_kana::ConvertJapanese;

use crate::core::script::kanji_pieces;

/// 단어 전체 읽기를 한자 구간별 읽기로 나눔
///
/// 가나 구간은 읽기와 글자 그대로 일치해야 하고 (가타카나는 히라가나로 정규화),
/// 한자 구간은 최소 한 글자 이상의 읽기를 가져감. 백트래킹으로 탐색.
///
/// 반환: 한자 구간 순서대로의 읽기. 정렬 불가하면 None
///
/// 예: ("住んでいます", "すんでいます") -> ["す"]
pub fn align_reading(word: &str, reading: &str) -> Option<Vec<String>> {
    let pieces: Vec<(bool, String)> = kanji_pieces(word)
        .into_iter()
        .map(|(kanji, piece)| {
            if kanji {
                (true, piece.to_string())
            } else {
                (false, piece.to_hiragana())
            }
        })
        .collect();
    let reading: Vec<char> = reading.to_hiragana().chars().collect();

    let mut out = Vec::new();
    if align_from(&pieces, 0, &reading, 0, &mut out) {
        Some(out)
    } else {
        None
    }
}

fn align_from(
    pieces: &[(bool, String)],
    index: usize,
    reading: &[char],
    pos: usize,
    out: &mut Vec<String>,
) -> bool {
    let Some((kanji, piece)) = pieces.get(index) else {
        return pos == reading.len();
    };

    if !kanji {
        let expected: Vec<char> = piece.chars().collect();
        let end = pos + expected.len();
        return end <= reading.len()
            && reading[pos..end] == expected[..]
            && align_from(pieces, index + 1, reading, end, out);
    }

    // 뒤따르는 가나 구간이 차지할 최소 길이는 남겨둠
    let reserved: usize = pieces[index + 1..]
        .iter()
        .map(|(kanji, p)| if *kanji { 1 } else { p.chars().count() })
        .sum();
    if pos + reserved >= reading.len() {
        return false;
    }

    for end in pos + 1..=reading.len() - reserved {
        out.push(reading[pos..end].iter().collect());
        if align_from(pieces, index + 1, reading, end, out) {
            return true;
        }
        out.pop();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_single_kanji_with_okurigana() {
        assert_eq!(
            align_reading("住んでいます", "すんでいます"),
            Some(vec!["す".to_string()])
        );
    }

    #[test]
    fn test_align_two_kanji_pieces() {
        assert_eq!(
            align_reading("食べ物", "たべもの"),
            Some(vec!["た".to_string(), "もの".to_string()])
        );
    }

    #[test]
    fn test_align_backtracks() {
        // "お", "おと"는 뒤의 "しい"와 맞지 않아 되돌아감
        assert_eq!(
            align_reading("大人しい", "おとなしい"),
            Some(vec!["おとな".to_string()])
        );
        assert_eq!(
            align_reading("受け付け", "うけつけ"),
            Some(vec!["う".to_string(), "つ".to_string()])
        );
    }

    #[test]
    fn test_align_katakana_reading() {
        assert_eq!(
            align_reading("東京", "トウキョウ"),
            Some(vec!["とうきょう".to_string()])
        );
    }

    #[test]
    fn test_align_mismatch() {
        assert_eq!(align_reading("住んでいます", "すみます"), None);
        assert_eq!(align_reading("東京", ""), None);
        assert_eq!(align_reading("食べ物", "たべ"), None);
    }
}
