// src/store.rs
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::data::LobbyistRecord;
use crate::error::{Result, ScrapeError};

/// Output order: name, then id. Plain byte-wise string comparison.
pub fn sort_records(records: &mut [LobbyistRecord]) {
    records.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
}

/// Pretty JSON array, two-space indent, absent fields omitted.
pub fn to_json(records: &[LobbyistRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Replace `path` with the serialized records.
/// Goes through a sibling temp file + rename; a crash mid-write leaves the old file.
pub fn save(path: &Path, records: &[LobbyistRecord]) -> Result<()> {
    let json = to_json(records)?;
    let io_err = |p: &Path| {
        let p = p.display().to_string();
        move |source: std::io::Error| ScrapeError::Io { path: p, source }
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err(parent))?;
        }
    }

    let tmp = tmp_path(path);
    {
        let mut file = fs::File::create(&tmp).map_err(io_err(&tmp))?;
        file.write_all(json.as_bytes()).map_err(io_err(&tmp))?;
        file.sync_all().map_err(io_err(&tmp))?;
    }
    fs::rename(&tmp, path).map_err(io_err(path))?;
    Ok(())
}

/// Read back a file written by `save`.
pub fn load(path: &Path) -> Result<Vec<LobbyistRecord>> {
    let text = fs::read_to_string(path).map_err(|source| ScrapeError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
