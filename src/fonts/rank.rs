//! Per-script family ranking.
//!
//! Each script carries a small hand-tuned table of preferred families with
//! coverage-based scores. Higher score means better coverage and rendering
//! quality for that script; families missing from a table sort after every
//! listed family, alphabetically.

use crate::fonts::classify::Script;

/// A family's hand-tuned score for one script. Higher is better.
type ScoreTable = &'static [(&'static str, u32)];

const CHINESE_SCORES: ScoreTable = &[
    ("WenQuanYi Zen Hei", 100),
    ("WenQuanYi Micro Hei", 95),
    ("Noto Sans CJK SC", 90),
    ("Noto Sans CJK TC", 88),
    ("Source Han Sans SC", 85),
    ("Source Han Sans TC", 83),
    ("Droid Sans Fallback", 70),
    ("AR PL UMing CN", 60),
    ("AR PL UKai CN", 58),
];

const JAPANESE_SCORES: ScoreTable = &[
    ("Noto Sans CJK JP", 100),
    ("Source Han Sans JP", 95),
    ("IPAGothic", 85),
    ("IPAMincho", 80),
    ("TakaoGothic", 75),
    ("VL Gothic", 70),
];

const KOREAN_SCORES: ScoreTable = &[
    ("Noto Sans CJK KR", 100),
    ("Source Han Sans KR", 95),
    ("Malgun Gothic", 90),
    ("NanumGothic", 85),
    ("NanumMyeongjo", 80),
    ("UnDotum", 60),
];

const LATIN_SCORES: ScoreTable = &[
    ("Arial", 100),
    ("Helvetica", 98),
    ("Liberation Sans", 95),
    ("DejaVu Sans", 92),
    ("Noto Sans", 90),
    ("Roboto", 88),
    ("Ubuntu", 85),
    ("Lato", 83),
    ("Open Sans", 80),
    ("Liberation Serif", 70),
    ("DejaVu Serif", 68),
];

const ARABIC_SCORES: ScoreTable = &[
    ("Noto Naskh Arabic", 100),
    ("Noto Sans Arabic", 95),
    ("Amiri", 90),
    ("KacstOne", 70),
];

const SYMBOL_SCORES: ScoreTable = &[
    ("Noto Color Emoji", 100),
    ("Noto Emoji", 95),
    ("Symbola", 80),
    ("Font Awesome", 70),
];

fn score_table(script: Script) -> ScoreTable {
    match script {
        Script::Latin => LATIN_SCORES,
        Script::Chinese => CHINESE_SCORES,
        Script::Japanese => JAPANESE_SCORES,
        Script::Korean => KOREAN_SCORES,
        Script::Arabic => ARABIC_SCORES,
        Script::Symbol => SYMBOL_SCORES,
    }
}

/// Hand-tuned score of `family` for `script`, if listed.
pub fn priority_score(script: Script, family: &str) -> Option<u32> {
    score_table(script)
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(family))
        .map(|&(_, score)| score)
}

/// Order family names best-first for a script.
///
/// Listed families come first in descending score order; score ties and all
/// unlisted families fall back to alphabetical order. The result is total and
/// deterministic for any input set.
pub fn rank_families(script: Script, families: &mut [String]) {
    families.sort_by(|a, b| {
        let sa = priority_score(script, a);
        let sb = priority_score(script, b);
        match (sa, sb) {
            (Some(x), Some(y)) => y.cmp(&x).then_with(|| a.cmp(b)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.cmp(b),
        }
    });
}

#[cfg(test)]
#[path = "../../tests/unit/fonts/rank.rs"]
mod tests;
