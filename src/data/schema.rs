use std::path::Path;

use crate::error::CatalogError;

use super::cluster::cluster_tones;
use super::model::{is_canonical, Catalog, GroupRecord, ParsedGroups, CANONICAL_GROUPS};

/// Build the ordered catalog from parsed groups.
///
/// Every canonical group yields exactly one record, in [`CANONICAL_GROUPS`]
/// order, even when empty. Other groups follow in the order the parser first
/// met them.
pub fn to_catalog(parsed: &ParsedGroups) -> Catalog {
    let canonical = CANONICAL_GROUPS.iter().map(|&title| GroupRecord {
        title: title.to_string(),
        emojis: cluster_tones(parsed.get(title).unwrap_or_default()),
    });

    let extra = parsed
        .iter()
        .filter(|(title, _)| !is_canonical(title))
        .map(|(title, glyphs)| {
            log::debug!("Appending non-canonical group '{title}'");
            GroupRecord {
                title: title.to_string(),
                emojis: cluster_tones(glyphs),
            }
        });

    Catalog {
        groups: canonical.chain(extra).collect(),
    }
}

/// Serialise the catalog as an XML property list at `path`.
pub fn write_plist(path: &Path, catalog: &Catalog) -> Result<(), CatalogError> {
    plist::to_file_xml(path, catalog).map_err(|source| CatalogError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "Wrote {} groups ({} items) to {}",
        catalog.group_count(),
        catalog.item_count(),
        path.display()
    );
    Ok(())
}
