// Player-name reconciliation.
//
// Event records carry free-text player names that drift from the roster
// (spacing, old/new kanji forms, surname-only entry). `NameResolver` maps a
// raw name back to the roster spelling through a fixed precedence chain:
//
// 1. exact match against a roster name
// 2. equality after normalization
// 3. normalized prefix match, either direction
// 4. normalized substring match, either direction
//
// The first rule that matches wins, and within a rule the roster is scanned
// in its stored order. Unmatched names are returned unchanged.

use std::collections::HashSet;

use tracing::debug;

use crate::model::Player;

/// Bucket label for events whose player name is empty or blank.
pub const UNKNOWN_PLAYER: &str = "不明";

/// Old-form kanji and the modern form each one is folded into before
/// comparison.
pub const KANJI_VARIANTS: &[(char, char)] = &[
    ('澤', '沢'),
    ('髙', '高'),
    ('﨑', '崎'),
    ('齊', '斉'),
    ('齋', '斉'),
    ('邊', '辺'),
    ('邉', '辺'),
    ('廣', '広'),
    ('嶋', '島'),
    ('櫻', '桜'),
    ('濱', '浜'),
    ('瀧', '滝'),
    ('國', '国'),
    ('彌', '弥'),
    ('眞', '真'),
];

/// Strip all whitespace (ASCII and ideographic) and fold kanji variants.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            KANJI_VARIANTS
                .iter()
                .find(|(old, _)| *old == c)
                .map_or(c, |&(_, new)| new)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Matching rules
// ---------------------------------------------------------------------------

/// Which rule of the precedence chain produced a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    Exact,
    Normalized,
    Prefix,
    Substring,
}

type Matcher = fn(raw: &str, roster: &str) -> bool;

fn normalized_equal(raw: &str, roster: &str) -> bool {
    raw == roster
}

fn prefix_either_way(raw: &str, roster: &str) -> bool {
    roster.starts_with(raw) || raw.starts_with(roster)
}

fn substring_either_way(raw: &str, roster: &str) -> bool {
    roster.contains(raw) || raw.contains(roster)
}

/// Fuzzy rules in precedence order, applied to normalized forms.
const FUZZY_RULES: [(MatchRule, Matcher); 3] = [
    (MatchRule::Normalized, normalized_equal),
    (MatchRule::Prefix, prefix_either_way),
    (MatchRule::Substring, substring_either_way),
];

/// Outcome of resolving one raw name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub name: String,
    /// `None` when nothing matched (or the name was blank).
    pub rule: Option<MatchRule>,
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Resolves raw names against one roster snapshot. Normalized roster names
/// are computed once up front.
pub struct NameResolver<'a> {
    exact: HashSet<&'a str>,
    /// Roster names paired with their normalized forms, in roster order.
    /// Entries that normalize to nothing are dropped.
    normalized: Vec<(&'a str, String)>,
}

impl<'a> NameResolver<'a> {
    pub fn new(roster: &'a [Player]) -> Self {
        let exact = roster.iter().map(|p| p.name.as_str()).collect();
        let normalized = roster
            .iter()
            .map(|p| (p.name.as_str(), normalize_name(&p.name)))
            .filter(|(_, n)| !n.is_empty())
            .collect();
        Self { exact, normalized }
    }

    /// Resolve `raw` to a canonical roster name.
    pub fn resolve(&self, raw: &str) -> String {
        self.resolve_with_rule(raw).name
    }

    /// Resolve `raw`, also reporting which rule matched.
    pub fn resolve_with_rule(&self, raw: &str) -> Resolution {
        let normalized_raw = normalize_name(raw);
        if normalized_raw.is_empty() {
            return Resolution {
                name: UNKNOWN_PLAYER.to_string(),
                rule: None,
            };
        }

        if self.exact.contains(raw) {
            return Resolution {
                name: raw.to_string(),
                rule: Some(MatchRule::Exact),
            };
        }

        for (rule, matches) in FUZZY_RULES {
            if let Some((name, _)) = self
                .normalized
                .iter()
                .find(|(_, candidate)| matches(&normalized_raw, candidate))
            {
                debug!(raw, resolved = *name, ?rule, "fuzzy player-name match");
                return Resolution {
                    name: name.to_string(),
                    rule: Some(rule),
                };
            }
        }

        Resolution {
            name: raw.to_string(),
            rule: None,
        }
    }
}

/// One-shot resolution of a single name against a roster.
pub fn resolve_player_name(raw: &str, roster: &[Player]) -> String {
    NameResolver::new(roster).resolve(raw)
}

// ---------------------------------------------------------------------------
// Display names
// ---------------------------------------------------------------------------

/// Short display form of a roster name: the surname alone, or the surname
/// plus the first character of the given name when another roster name
/// shares the surname. Names without a separator are returned unchanged.
pub fn display_name<S: AsRef<str>>(full_name: &str, all_names: &[S]) -> String {
    let mut parts = full_name.split_whitespace();
    let (Some(surname), Some(given)) = (parts.next(), parts.next()) else {
        return full_name.to_string();
    };

    let shared_surname = all_names.iter().map(AsRef::as_ref).any(|other| {
        other != full_name && other.split_whitespace().next() == Some(surname)
    });

    if shared_surname {
        let initial: String = given.chars().take(1).collect();
        format!("{surname} {initial}")
    } else {
        surname.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Hand;

    fn roster(names: &[&str]) -> Vec<Player> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Player {
                id: format!("p-{i}"),
                name: name.to_string(),
                jersey_number: i as u32 + 1,
                grade: String::new(),
                position: String::new(),
                throwing_hand: Hand::Right,
                batting_hand: Hand::Right,
            })
            .collect()
    }

    // -- Normalization --

    #[test]
    fn normalization_strips_all_whitespace() {
        assert_eq!(normalize_name("山田 太郎"), "山田太郎");
        assert_eq!(normalize_name("山田\u{3000}太郎"), "山田太郎");
        assert_eq!(normalize_name(" 山田\t太郎 "), "山田太郎");
    }

    #[test]
    fn normalization_folds_old_kanji() {
        assert_eq!(normalize_name("髙橋"), "高橋");
        assert_eq!(normalize_name("渡邉"), "渡辺");
        assert_eq!(normalize_name("齋藤"), "斉藤");
        assert_eq!(normalize_name("澤村"), "沢村");
    }

    #[test]
    fn variant_table_maps_to_modern_forms_only() {
        let olds: HashSet<char> = KANJI_VARIANTS.iter().map(|(o, _)| *o).collect();
        for (_, new) in KANJI_VARIANTS {
            assert!(!olds.contains(new), "{new} is both a source and a target");
        }
    }

    // -- Precedence chain --

    #[test]
    fn exact_match_is_returned_as_is() {
        let r = roster(&["山田 太郎"]);
        let res = NameResolver::new(&r).resolve_with_rule("山田 太郎");
        assert_eq!(res.name, "山田 太郎");
        assert_eq!(res.rule, Some(MatchRule::Exact));
    }

    #[test]
    fn spacing_variant_matches_after_normalization() {
        let r = roster(&["山田太郎"]);
        let res = NameResolver::new(&r).resolve_with_rule("山田 太郎");
        assert_eq!(res.name, "山田太郎");
        assert_eq!(res.rule, Some(MatchRule::Normalized));
    }

    #[test]
    fn kanji_variant_matches_after_normalization() {
        let r = roster(&["高橋 蒼空"]);
        assert_eq!(resolve_player_name("髙橋蒼空", &r), "高橋 蒼空");
    }

    #[test]
    fn surname_only_matches_by_prefix() {
        let r = roster(&["佐藤 大翔", "鈴木 陽向"]);
        let res = NameResolver::new(&r).resolve_with_rule("鈴木");
        assert_eq!(res.name, "鈴木 陽向");
        assert_eq!(res.rule, Some(MatchRule::Prefix));
    }

    #[test]
    fn given_name_only_matches_by_substring() {
        let r = roster(&["佐藤 大翔", "鈴木 陽向"]);
        let res = NameResolver::new(&r).resolve_with_rule("陽向");
        assert_eq!(res.name, "鈴木 陽向");
        assert_eq!(res.rule, Some(MatchRule::Substring));
    }

    #[test]
    fn normalized_equality_beats_earlier_prefix_candidate() {
        // "田中" is a prefix of the first entry, but the second is an exact
        // normalized match and that rule runs first.
        let r = roster(&["田中 一郎", "田 中"]);
        assert_eq!(resolve_player_name("田中", &r), "田 中");
    }

    #[test]
    fn prefix_beats_earlier_substring_candidate() {
        let r = roster(&["大田中", "田中 次郎"]);
        assert_eq!(resolve_player_name("田中", &r), "田中 次郎");
    }

    #[test]
    fn ambiguous_surname_picks_first_roster_entry() {
        let r = roster(&["田中一郎", "田中次郎"]);
        let resolved = resolve_player_name("田中", &r);
        assert!(resolved == "田中一郎" || resolved == "田中次郎");
        // Roster order decides between equally valid candidates.
        assert_eq!(resolved, "田中一郎");
    }

    #[test]
    fn unmatched_name_is_returned_unchanged() {
        let r = roster(&["田中 翔太"]);
        let res = NameResolver::new(&r).resolve_with_rule("ゲスト");
        assert_eq!(res.name, "ゲスト");
        assert_eq!(res.rule, None);
    }

    #[test]
    fn blank_name_resolves_to_unknown() {
        let r = roster(&["田中 翔太"]);
        assert_eq!(resolve_player_name("", &r), UNKNOWN_PLAYER);
        assert_eq!(resolve_player_name(" \u{3000} ", &r), UNKNOWN_PLAYER);
    }

    #[test]
    fn blank_roster_names_never_capture_matches() {
        let r = roster(&["  ", "田中 翔太"]);
        assert_eq!(resolve_player_name("田中", &r), "田中 翔太");
        assert_eq!(resolve_player_name("ゲスト", &r), "ゲスト");
    }

    #[test]
    fn empty_roster_passes_names_through() {
        assert_eq!(resolve_player_name("田中", &[]), "田中");
    }

    // -- Display names --

    #[test]
    fn display_name_uses_surname_when_unique() {
        let names = ["田中 翔太", "佐藤 大翔"];
        assert_eq!(display_name("田中 翔太", &names), "田中");
    }

    #[test]
    fn display_name_adds_initial_for_shared_surname() {
        let names = ["田中 翔太", "田中 大和", "佐藤 大翔"];
        assert_eq!(display_name("田中 翔太", &names), "田中 翔");
        assert_eq!(display_name("田中 大和", &names), "田中 大");
    }

    #[test]
    fn display_name_without_separator_is_unchanged() {
        let names = ["山田太郎"];
        assert_eq!(display_name("山田太郎", &names), "山田太郎");
        assert_eq!(display_name("", &names), "");
    }
}
