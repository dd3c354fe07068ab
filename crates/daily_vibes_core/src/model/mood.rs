//! Fixed mood catalog.
//!
//! The picker offers exactly these six moods, in this order.

/// One selectable mood: a symbol plus its human-readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodOption {
    pub symbol: &'static str,
    pub label: &'static str,
}

pub const MOOD_CATALOG: [MoodOption; 6] = [
    MoodOption {
        symbol: "😊",
        label: "Happy",
    },
    MoodOption {
        symbol: "😌",
        label: "Calm",
    },
    MoodOption {
        symbol: "😢",
        label: "Sad",
    },
    MoodOption {
        symbol: "😡",
        label: "Angry",
    },
    MoodOption {
        symbol: "😴",
        label: "Tired",
    },
    MoodOption {
        symbol: "🤔",
        label: "Thoughtful",
    },
];

/// Returns the catalog in picker order.
pub fn moods() -> &'static [MoodOption] {
    &MOOD_CATALOG
}

/// Finds a mood by exact symbol.
pub fn find_by_symbol(symbol: &str) -> Option<&'static MoodOption> {
    MOOD_CATALOG.iter().find(|mood| mood.symbol == symbol)
}

/// Finds a mood by label, ignoring ASCII case.
pub fn find_by_label(label: &str) -> Option<&'static MoodOption> {
    let label = label.trim();
    MOOD_CATALOG
        .iter()
        .find(|mood| mood.label.eq_ignore_ascii_case(label))
}

/// Resolves picker input given either as a symbol or a label.
pub fn resolve(input: &str) -> Option<&'static MoodOption> {
    find_by_symbol(input.trim()).or_else(|| find_by_label(input))
}

#[cfg(test)]
mod tests {
    use super::{find_by_label, find_by_symbol, moods, resolve};

    #[test]
    fn catalog_has_six_distinct_symbols() {
        let symbols: std::collections::HashSet<_> = moods().iter().map(|m| m.symbol).collect();
        assert_eq!(symbols.len(), 6);
        assert_eq!(moods()[0].label, "Happy");
        assert_eq!(moods()[5].label, "Thoughtful");
    }

    #[test]
    fn lookup_accepts_symbol_or_label() {
        assert_eq!(find_by_symbol("😡").map(|m| m.label), Some("Angry"));
        assert_eq!(find_by_label("tired").map(|m| m.symbol), Some("😴"));
        assert_eq!(resolve(" calm ").map(|m| m.symbol), Some("😌"));
        assert_eq!(resolve("🤔").map(|m| m.label), Some("Thoughtful"));
        assert!(resolve("ecstatic").is_none());
    }
}
