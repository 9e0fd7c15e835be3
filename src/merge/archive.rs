//! ZIP container reading and writing for the merge engine

use std::io::{Cursor, Read, Write};

use indexmap::IndexMap;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::{Error, Result};

/// Read every regular-file entry of a pack archive into memory.
///
/// Directory markers are skipped. `name` identifies the pack in errors so
/// the user knows which input to fix.
pub fn read_pack_entries(name: &str, bytes: &[u8]) -> Result<Vec<(String, Vec<u8>)>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(|source| Error::OpenPack {
        name: name.to_string(),
        source,
    })?;

    let mut entries = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(|source| Error::OpenPack {
            name: name.to_string(),
            source,
        })?;
        if entry.is_dir() {
            continue;
        }

        let path = entry.name().to_string();
        let mut data = Vec::with_capacity(entry.size() as usize);
        entry
            .read_to_end(&mut data)
            .map_err(|source| Error::ReadEntry {
                name: name.to_string(),
                entry: path.clone(),
                source,
            })?;
        entries.push((path, data));
    }

    Ok(entries)
}

/// Serialize a path → content map as a deflated ZIP archive in memory.
///
/// Entries are written in map order, which the merge engine keeps
/// deterministic.
pub fn write_archive(entries: &IndexMap<String, Vec<u8>>) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (path, data) in entries {
        writer.start_file(path.as_str(), options)?;
        writer.write_all(data)?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

/// Build a small archive from literal entries (test support).
#[cfg(test)]
pub(crate) fn build_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut map = IndexMap::new();
    for (path, data) in entries {
        map.insert((*path).to_string(), data.to_vec());
    }
    write_archive(&map).expect("failed to build test archive")
}
