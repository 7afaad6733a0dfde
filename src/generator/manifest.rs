use super::permutations::ResultPermutation;
use crate::error::{QuizError, Result};
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "permutations.json";

#[derive(Debug, Clone, Serialize)]
pub struct PermutationManifest {
    pub version: String,
    pub generated_at: String,
    pub path: String,
    pub fingerprint: String,
    pub entries: Vec<ResultPermutation>,
}

impl PermutationManifest {
    pub fn new(path: &str, entries: Vec<ResultPermutation>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            path: path.to_string(),
            fingerprint: fingerprint(&entries),
            entries,
        }
    }
}

/// SHA-256 over the ordered codes; changes whenever the set or its order changes.
pub fn fingerprint(entries: &[ResultPermutation]) -> String {
    let joined = entries
        .iter()
        .map(|entry| entry.code.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    format!("{:x}", Sha256::digest(joined.as_bytes()))
}

pub fn manifest_path(out_dir: &Path, path_id: &str) -> PathBuf {
    out_dir.join(path_id).join(MANIFEST_FILE)
}

pub fn write_manifest(out_dir: &Path, manifest: &PermutationManifest) -> Result<PathBuf> {
    let out_path = manifest_path(out_dir, &manifest.path);
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent).map_err(QuizError::Io)?;
    }
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(&out_path, json).map_err(QuizError::Io)?;
    Ok(out_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::permutations::generate_permutations;
    use tempfile::TempDir;

    #[test]
    fn fingerprint_is_stable_and_order_sensitive() {
        let entries = generate_permutations("chain", 3);
        assert_eq!(fingerprint(&entries), fingerprint(&generate_permutations("chain", 3)));

        let mut reversed = entries.clone();
        reversed.reverse();
        assert_ne!(fingerprint(&entries), fingerprint(&reversed));
        assert_eq!(fingerprint(&entries).len(), 64);
    }

    #[test]
    fn manifest_lands_under_path_directory() {
        let dir = TempDir::new().expect("temp dir should be created");
        let manifest = PermutationManifest::new("mirror", generate_permutations("mirror", 3));
        let written = write_manifest(dir.path(), &manifest).expect("manifest should write");
        assert_eq!(written, dir.path().join("mirror/permutations.json"));

        let raw = fs::read_to_string(written).expect("manifest should read");
        let parsed: serde_json::Value = serde_json::from_str(&raw).expect("manifest is json");
        assert_eq!(parsed["entries"].as_array().map(Vec::len), Some(27));
        assert_eq!(parsed["entries"][15]["code"], "120");
        assert_eq!(parsed["entries"][15]["permalink"], "/mirror/result/120/");
        assert_eq!(parsed["entries"][15]["levels"][0], "medium");
    }
}
