use indexmap::IndexMap;

use super::model::Entry;

/// Fitzpatrick skin-tone modifiers, U+1F3FB..=U+1F3FF.
pub const TONE_MODIFIERS: [char; 5] = [
    '\u{1F3FB}',
    '\u{1F3FC}',
    '\u{1F3FD}',
    '\u{1F3FE}',
    '\u{1F3FF}',
];

pub fn is_tone_modifier(c: char) -> bool {
    TONE_MODIFIERS.contains(&c)
}

/// Remove every skin-tone modifier from `glyph`.
pub fn strip_tones(glyph: &str) -> String {
    glyph.chars().filter(|&c| !is_tone_modifier(c)).collect()
}

pub fn has_tone(glyph: &str) -> bool {
    glyph.chars().any(is_tone_modifier)
}

// ---------------------------------------------------------------------------
// Clustering
// ---------------------------------------------------------------------------

/// Fold a group's glyphs (file order, duplicates allowed) into picker entries.
///
/// Glyphs sharing a tone-stripped base are gathered at the position where the
/// base was first seen. A base with at least one toned variant becomes
/// [`Entry::Cluster`] whose first element is always the base itself, even when
/// the plain base never appeared in the input. Anything else is an
/// [`Entry::Single`].
pub fn cluster_tones(glyphs: &[String]) -> Vec<Entry> {
    // base → distinct variants in first-seen order
    let mut by_base: IndexMap<String, Vec<&str>> = IndexMap::new();

    for glyph in glyphs {
        let variants = by_base.entry(strip_tones(glyph)).or_default();
        if !variants.contains(&glyph.as_str()) {
            variants.push(glyph);
        }
    }

    by_base
        .into_iter()
        .map(|(base, variants)| {
            if !variants.iter().any(|v| has_tone(v)) {
                return Entry::Single(base);
            }
            let toned = variants
                .into_iter()
                .filter(|v| *v != base)
                .map(str::to_string);
            let mut cluster = vec![base.clone()];
            cluster.extend(toned);
            Entry::Cluster(cluster)
        })
        .collect()
}
