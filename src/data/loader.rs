use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::CatalogError;

use super::model::{ui_group_name, ParsedGroups};

const GROUP_MARKER: &str = "# group:";
const FULLY_QUALIFIED_MARKER: &str = "; fully-qualified";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load `emoji-test.txt` from disk.
///
/// A missing or unreadable file (including invalid UTF-8) is reported as
/// [`CatalogError::Read`]. Lines the parser does not recognise are skipped.
pub fn load_file(path: &Path) -> Result<ParsedGroups, CatalogError> {
    let read_err = |source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(read_err)?;
    parse_reader(BufReader::new(file)).map_err(read_err)
}

/// Parse emoji test data line by line from any buffered reader.
pub fn parse_reader<R: BufRead>(reader: R) -> std::io::Result<ParsedGroups> {
    let mut parser = LineParser::default();
    for line in reader.lines() {
        parser.feed(&line?);
    }
    Ok(parser.finish())
}

/// Parse emoji test data held in memory.
pub fn parse_str(text: &str) -> ParsedGroups {
    let mut parser = LineParser::default();
    for line in text.lines() {
        parser.feed(line);
    }
    parser.finish()
}

// ---------------------------------------------------------------------------
// Line parser
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct LineParser {
    groups: ParsedGroups,
    current: Option<String>,
    lines: usize,
}

impl LineParser {
    fn feed(&mut self, line: &str) {
        self.lines += 1;

        if let Some(rest) = line.strip_prefix(GROUP_MARKER) {
            let raw = rest.trim();
            let mapped = match ui_group_name(raw) {
                Some(ui) => ui.to_string(),
                None => {
                    log::warn!("Unrecognised emoji group '{raw}', keeping its raw name");
                    raw.to_string()
                }
            };
            if self.groups.ensure_group(&mapped) {
                log::debug!("New group '{mapped}' at line {}", self.lines);
            }
            log::debug!("Group '{raw}' → '{mapped}'");
            self.current = Some(mapped);
            return;
        }

        if !line.contains(FULLY_QUALIFIED_MARKER) {
            return;
        }
        let Some(group) = &self.current else {
            log::trace!("Line {}: data before any group header", self.lines);
            return;
        };
        match glyph_of(line) {
            Some(glyph) => self.groups.push(group, glyph.to_string()),
            None => log::trace!("Line {}: no glyph after '#', skipped", self.lines),
        }
    }

    fn finish(self) -> ParsedGroups {
        log::info!(
            "Read {} lines: {} glyphs in {} groups",
            self.lines,
            self.groups.glyph_count(),
            self.groups.group_count()
        );
        self.groups
    }
}

/// Glyph of a data line: first whitespace-delimited token after the first `#`.
///
/// ```text
/// 1F44D 1F3FB ; fully-qualified # 👍🏻 E1.0 thumbs up: light skin tone
///                                 ^^
/// ```
fn glyph_of(line: &str) -> Option<&str> {
    let (_, comment) = line.split_once('#')?;
    comment.split_whitespace().next()
}
