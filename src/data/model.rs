use indexmap::IndexMap;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Static tables
// ---------------------------------------------------------------------------

/// Top-level picker categories, in display order.
pub const CANONICAL_GROUPS: [&str; 8] = [
    "Smileys & People",
    "Animals & Nature",
    "Food & Drink",
    "Activities",
    "Travel & Places",
    "Objects",
    "Symbols",
    "Flags",
];

/// Unicode `# group:` names → picker category.
/// Anything missing from this table keeps its raw name.
pub const CATEGORY_RENAMES: [(&str, &str); 9] = [
    ("Smileys & Emotion", "Smileys & People"),
    ("People & Body", "Smileys & People"),
    ("Animals & Nature", "Animals & Nature"),
    ("Food & Drink", "Food & Drink"),
    ("Activities", "Activities"),
    ("Travel & Places", "Travel & Places"),
    ("Objects", "Objects"),
    ("Symbols", "Symbols"),
    ("Flags", "Flags"),
];

/// Look up the picker category for a raw Unicode group name.
/// Returns `None` when the group is not in [`CATEGORY_RENAMES`].
pub fn ui_group_name(raw: &str) -> Option<&'static str> {
    CATEGORY_RENAMES
        .iter()
        .find(|(unicode, _)| *unicode == raw)
        .map(|(_, ui)| *ui)
}

pub fn is_canonical(title: &str) -> bool {
    CANONICAL_GROUPS.contains(&title)
}

// ---------------------------------------------------------------------------
// ParsedGroups – raw loader output
// ---------------------------------------------------------------------------

/// Group name → glyphs in file order, keyed in first-seen order.
/// Duplicates are kept; the clusterer removes them.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedGroups {
    groups: IndexMap<String, Vec<String>>,
}

impl Default for ParsedGroups {
    fn default() -> Self {
        Self::new()
    }
}

impl ParsedGroups {
    /// Start with one empty bucket per canonical group.
    pub fn new() -> Self {
        let groups = CANONICAL_GROUPS
            .iter()
            .map(|title| (title.to_string(), Vec::new()))
            .collect();
        ParsedGroups { groups }
    }

    /// Make sure `name` has a bucket. Returns `true` if it was newly created.
    pub fn ensure_group(&mut self, name: &str) -> bool {
        if self.groups.contains_key(name) {
            return false;
        }
        self.groups.insert(name.to_string(), Vec::new());
        true
    }

    pub fn push(&mut self, group: &str, glyph: String) {
        self.groups.entry(group.to_string()).or_default().push(glyph);
    }

    /// Glyphs recorded for `name`, if the group exists.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    /// Iterate groups in first-seen order (canonical seeds first).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of groups, canonical seeds included.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total glyphs across all groups, duplicates included.
    pub fn glyph_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

// ---------------------------------------------------------------------------
// Entry / GroupRecord / Catalog – serialised schema
// ---------------------------------------------------------------------------

/// One picker cell: a plain emoji, or a base followed by its skin-tone variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Single(String),
    Cluster(Vec<String>),
}

/// A titled picker section. Field order is the key order in the plist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupRecord {
    pub title: String,
    pub emojis: Vec<Entry>,
}

/// The complete ordered catalog written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    pub groups: Vec<GroupRecord>,
}

impl Catalog {
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Sum of top-level entries; a cluster counts once.
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.emojis.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renames_unicode_groups() {
        assert_eq!(ui_group_name("Smileys & Emotion"), Some("Smileys & People"));
        assert_eq!(ui_group_name("People & Body"), Some("Smileys & People"));
        assert_eq!(ui_group_name("Flags"), Some("Flags"));
        assert_eq!(ui_group_name("Component"), None);
    }

    #[test]
    fn every_rename_target_is_canonical() {
        for (_, ui) in CATEGORY_RENAMES {
            assert!(is_canonical(ui), "{ui} is not a canonical group");
        }
    }

    #[test]
    fn new_seeds_canonical_groups_in_order() {
        let parsed = ParsedGroups::new();
        let names: Vec<&str> = parsed.iter().map(|(name, _)| name).collect();
        assert_eq!(names, CANONICAL_GROUPS.to_vec());
        assert_eq!(parsed.glyph_count(), 0);
    }

    #[test]
    fn ensure_group_appends_once() {
        let mut parsed = ParsedGroups::new();
        assert!(parsed.ensure_group("Component"));
        assert!(!parsed.ensure_group("Component"));
        assert!(!parsed.ensure_group("Flags"));
        assert_eq!(parsed.group_count(), 9);
        assert_eq!(parsed.iter().last().map(|(n, _)| n), Some("Component"));
    }

    #[test]
    fn catalog_counts_top_level_items() {
        let catalog = Catalog {
            groups: vec![
                GroupRecord {
                    title: "A".into(),
                    emojis: vec![
                        Entry::Single("😀".into()),
                        Entry::Cluster(vec!["👍".into(), "👍🏻".into()]),
                    ],
                },
                GroupRecord {
                    title: "B".into(),
                    emojis: Vec::new(),
                },
            ],
        };
        assert_eq!(catalog.group_count(), 2);
        assert_eq!(catalog.item_count(), 2);
    }
}
