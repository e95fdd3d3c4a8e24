//! Remote manifest parsing
//!
//! The manifest is a small JSON-shaped text document, but it is deliberately
//! not fed to a general JSON parser: each field is probed independently with
//! a fixed `"name": value` pattern, exactly as permissive as the published
//! descriptor format requires.

use regex::Regex;
use sectorwatch_api::{RemoteManifest, SectorVersion};

/// Probe for a numeric field: `"key": 123`
pub(crate) fn number_field(body: &str, key: &str) -> Option<u32> {
    let pattern = format!(r#""{}"\s*:\s*(\d+)"#, key);
    let re = Regex::new(&pattern).expect("field regex is valid");
    re.captures(body)?.get(1)?.as_str().parse().ok()
}

/// Probe for a quoted string field: `"key": "value"`
pub(crate) fn string_field(body: &str, key: &str) -> Option<String> {
    let pattern = format!(r#""{}"\s*:\s*"([^"]*)""#, key);
    let re = Regex::new(&pattern).expect("field regex is valid");
    Some(re.captures(body)?.get(1)?.as_str().to_string())
}

/// Parse the version manifest body.
///
/// `airac_cycle` and `airac_version` are required; `package_version`
/// defaults to 0 and the string fields to empty. Numeric values are not
/// range-checked beyond fitting the integer type.
pub fn parse_manifest(body: &str) -> Option<RemoteManifest> {
    let cycle = number_field(body, "airac_cycle")?;
    let revision = number_field(body, "airac_version")?;
    let patch = number_field(body, "package_version").unwrap_or(0);

    Some(RemoteManifest {
        version: SectorVersion::new(cycle, revision, patch),
        package_name: string_field(body, "latest_package_name").unwrap_or_default(),
        download_url: string_field(body, "download_url").unwrap_or_default(),
        notes: string_field(body, "notes").unwrap_or_default(),
    })
}
