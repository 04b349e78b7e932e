//! Provenance sidecars: every artifact `out.ext` gets `out.provenance.json`
//! naming the code revision, library version, call site, run tag and params.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Environment variable that pins the recorded revision (CI, release builds).
const REV_ENV: &str = "PLANAR_CODE_REV";

/// What a subcommand contributes to its sidecar.
pub struct Payload {
    pub params: Value,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(params: Value, tag: Option<String>) -> Self {
        Self { params, tag }
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    planar_version: &'static str,
    callsite: Callsite,
    tag: Option<&'a str>,
    params: &'a Value,
    outputs: Vec<String>,
}

/// Write the sidecar for `artifact` and return its path.
///
/// The call site recorded is the subcommand that wrote the artifact.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let loc = Location::caller();
    let doc = Sidecar {
        code_rev: code_rev(),
        planar_version: planar::VERSION,
        callsite: Callsite {
            file: loc.file(),
            line: loc.line(),
        },
        tag: payload.tag.as_deref(),
        params: &payload.params,
        outputs: vec![artifact.display().to_string()],
    };
    let path = sidecar_path(artifact);
    // Artifacts are written first, so the directory normally exists already.
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    std::fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing sidecar {}", path.display()))?;
    tracing::debug!(sidecar = %path.display(), "provenance written");
    Ok(path)
}

#[derive(Serialize)]
struct Report<'a> {
    code_rev: String,
    planar_version: &'static str,
    tag: Option<&'a str>,
}

/// Stand-alone provenance block for `report`.
pub fn report_block(tag: Option<&str>) -> Result<Value> {
    let block = Report {
        code_rev: code_rev(),
        planar_version: planar::VERSION,
        tag,
    };
    Ok(serde_json::to_value(block)?)
}

/// `dir/hull.json` → `dir/hull.provenance.json`; extension-less names gain the suffix.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Revision of the running code: `PLANAR_CODE_REV` at run time, then at build
/// time, then `git describe`, else `"unknown"`.
fn code_rev() -> String {
    let pinned = std::env::var(REV_ENV)
        .ok()
        .or_else(|| option_env!("PLANAR_CODE_REV").map(str::to_owned))
        .filter(|s| !s.trim().is_empty());
    if let Some(rev) = pinned {
        return rev;
    }
    let described = Command::new("git")
        .args(["describe", "--always", "--dirty", "--abbrev=12"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty());
    described.unwrap_or_else(|| "unknown".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_the_artifact() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/output/hull.json")),
            Path::new("/tmp/output/hull.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("runs/cloud")),
            Path::new("runs/cloud.provenance.json")
        );
    }

    #[test]
    fn write_sidecar_records_params_and_tag() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("tris.json");
        std::fs::write(&artifact, "[]").unwrap();
        let payload = Payload::new(json!({"cmd": "delaunay"}), Some("run-7".into()));
        let path = write_sidecar(&artifact, payload).unwrap();
        assert_eq!(path, dir.path().join("tris.provenance.json"));
        let parsed: Value = serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.display().to_string().as_str());
        assert_eq!(parsed["tag"], "run-7");
        assert_eq!(parsed["params"]["cmd"], "delaunay");
        assert_eq!(parsed["planar_version"], planar::VERSION);
        assert!(parsed["callsite"]["file"].as_str().unwrap().ends_with("provenance.rs"));
        assert!(!parsed["code_rev"].as_str().unwrap().is_empty());
    }

    #[test]
    fn report_block_has_no_tag_when_untagged() {
        let block = report_block(None).unwrap();
        assert!(block["tag"].is_null());
        assert_eq!(block["planar_version"], planar::VERSION);
    }
}
