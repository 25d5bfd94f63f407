//! Provenance sidecars: which code, which parameters and which inputs
//! produced an artifact.

use anyhow::{Context, Result};
use serde_json::{json, Map, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Command parameters plus the files the artifact was derived from.
pub struct Payload {
    pub params: Value,
    pub inputs: Vec<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
        }
    }

    pub fn with_input(mut self, input: impl AsRef<Path>) -> Self {
        self.inputs
            .push(input.as_ref().to_string_lossy().into_owned());
        self
    }
}

/// Write `<stem>.provenance.json` next to `artifact` and return its path.
#[track_caller]
pub fn write_sidecar(artifact: &Path, payload: Payload) -> Result<PathBuf> {
    let callsite = Location::caller();
    let mut doc = header();
    doc.insert(
        "callsite".into(),
        json!({ "file": callsite.file(), "line": callsite.line() }),
    );
    doc.insert("params".into(), payload.params);
    doc.insert("inputs".into(), json!(payload.inputs));
    doc.insert("outputs".into(), json!([artifact.to_string_lossy()]));

    let path = sidecar_path(artifact);
    fs::write(&path, serde_json::to_vec_pretty(&Value::Object(doc))?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Header alone, for `report`.
pub fn standalone() -> Value {
    Value::Object(header())
}

fn header() -> Map<String, Value> {
    let mut doc = Map::new();
    doc.insert("code_rev".into(), json!(code_rev()));
    doc.insert("fvs_version".into(), json!(fvs::VERSION));
    doc
}

/// `result.json` -> `result.provenance.json`, in the same directory.
fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map_or_else(|| "artifact".into(), |s| s.to_string_lossy().into_owned());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
fn code_rev() -> String {
    let stamped = option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    if let Some(rev) = stamped {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|rev| rev.trim().to_owned())
        .unwrap_or_else(|| "unknown".to_owned())
}
