//! Script classification of font family names.
//!
//! The heuristic is ordered: script-specific tokens first, region codes next,
//! the generic `cjk` marker last before the Latin default. Japanese and Korean
//! checks must run before anything that would swallow a generic CJK family,
//! otherwise `Noto Sans CJK JP` ends up classified as Chinese.

/// Dominant script a font family is designed for.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Script {
    /// Latin and general Western text.
    Latin,
    /// Simplified or traditional Chinese.
    Chinese,
    /// Japanese.
    Japanese,
    /// Korean.
    Korean,
    /// Arabic.
    Arabic,
    /// Icon, emoji, and symbol fonts.
    Symbol,
}

impl Script {
    /// All scripts in presentation order (Latin first, symbols last).
    pub const ALL: [Script; 6] = [
        Script::Latin,
        Script::Chinese,
        Script::Japanese,
        Script::Korean,
        Script::Arabic,
        Script::Symbol,
    ];

    /// Short presentation code (`EN`, `CN`, `JP`, `KR`, `AR`, `SYM`).
    pub fn code(self) -> &'static str {
        match self {
            Script::Latin => "EN",
            Script::Chinese => "CN",
            Script::Japanese => "JP",
            Script::Korean => "KR",
            Script::Arabic => "AR",
            Script::Symbol => "SYM",
        }
    }
}

/// CJK ideograph fragments that appear in native Chinese family names
/// (including traditional-character spellings). Checked against the raw name.
const CHINESE_NATIVE_TOKENS: &[&str] = &[
    "文泉", "微米黑", "正黑", "點陣", "等寬", "驛", "驿", "泉", "微米", "点阵", "等宽",
];

const CHINESE_ROMANIZED_TOKENS: &[&str] = &["wenquan", "wqy", "micro hei", "zen hei"];

// Deliberately excludes the bare "gothic": Korean families such as
// "Malgun Gothic" carry it too.
const JAPANESE_TOKENS: &[&str] = &[
    "japan", "hiragino", "mincho", "osaka", "yu gothic", "yu mincho", "kaku", "meiryo",
];

const KOREAN_TOKENS: &[&str] = &["korea", "malgun", "gulim", "batang", "dotum", "nanum"];

const ARABIC_TOKENS: &[&str] = &["arab", "naskh", "kufi", "amiri"];

const SYMBOL_TOKENS: &[&str] = &[
    "emoji", "symbol", "awesome", "icon", "material", "nerd font", "symbols",
];

/// Classify a family name into the script it is designed for.
pub fn classify_family(family: &str) -> Script {
    let lower = family.to_ascii_lowercase();

    if CHINESE_NATIVE_TOKENS.iter().any(|t| family.contains(t)) {
        return Script::Chinese;
    }
    if CHINESE_ROMANIZED_TOKENS.iter().any(|t| lower.contains(t)) {
        return Script::Chinese;
    }
    if JAPANESE_TOKENS.iter().any(|t| lower.contains(t)) {
        return Script::Japanese;
    }
    if KOREAN_TOKENS.iter().any(|t| lower.contains(t)) {
        return Script::Korean;
    }

    // Region codes are matched as whole words: a substring check would turn
    // "Cascadia Code" into a Chinese font via the embedded "sc".
    if has_word(&lower, &["sc", "cn", "hk", "tc", "tw"]) {
        return Script::Chinese;
    }
    if has_word(&lower, &["jp"]) {
        return Script::Japanese;
    }
    if has_word(&lower, &["kr"]) {
        return Script::Korean;
    }
    // Generic CJK with no region code defaults to Chinese.
    if has_word(&lower, &["cjk"]) {
        return Script::Chinese;
    }

    if ARABIC_TOKENS.iter().any(|t| lower.contains(t)) {
        return Script::Arabic;
    }
    if SYMBOL_TOKENS.iter().any(|t| lower.contains(t)) {
        return Script::Symbol;
    }

    Script::Latin
}

fn has_word(lower: &str, words: &[&str]) -> bool {
    lower
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_' || c == '.')
        .any(|token| words.contains(&token))
}

#[cfg(test)]
#[path = "../../tests/unit/fonts/classify.rs"]
mod tests;
