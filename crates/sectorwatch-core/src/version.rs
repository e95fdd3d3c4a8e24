//! Sector label version extraction

use regex::Regex;
use sectorwatch_api::{LocalSector, SectorVersion};
use std::sync::OnceLock;

/// Shape of a version-bearing sector label: a 4-digit AIRAC cycle, a slash,
/// a revision, an optional `-patch`, then a 4-letter code and an 8-digit
/// date, e.g. `... 2510/2-2 LBSR 20251013`.
fn sector_label_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d{4})\s*/\s*(\d+)(?:-(\d+))?\s+[A-Z]{4}\s+(\d{8})")
            .expect("sector label regex is valid")
    })
}

/// Extract the version tuple from a loaded sector file label.
///
/// Returns `None` when the label doesn't match the expected pattern; a
/// missing match is an error state for the caller, never a default version.
/// The patch component defaults to 0 when the dash group is absent.
pub fn parse_sector_label(label: &str) -> Option<LocalSector> {
    let captures = sector_label_re().captures(label)?;

    let cycle = captures.get(1)?.as_str().parse().ok()?;
    let revision = captures.get(2)?.as_str().parse().ok()?;
    let patch = match captures.get(3) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };

    Some(LocalSector {
        version: SectorVersion::new(cycle, revision, patch),
        raw_label: label.to_string(),
    })
}
