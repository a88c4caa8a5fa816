//! Decoding the embedded icons and writing them out.
//!
//! The run is strictly sequential: ensure the directory, decode both payloads
//! once, then write the inactive and active file for each identifier in order.
//! The first failure aborts the run; files already written are left in place.

use crate::error::MaterializeError;
use crate::models::{IconRole, MaterializeConfig, MaterializeReport, WrittenIcon};
use crate::payload::{compute_sha256_hex, decode_payload, ICON_EXTENSION};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Write backend for a materialization run.
pub trait IconSink {
    fn ensure_directory(&mut self, dir: &Path) -> Result<(), MaterializeError>;
    fn write_icon_file(
        &mut self,
        dir: &Path,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<(), MaterializeError>;
}

/// Writes straight to the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSink;

impl IconSink for FsSink {
    fn ensure_directory(&mut self, dir: &Path) -> Result<(), MaterializeError> {
        ensure_directory(dir)
    }

    fn write_icon_file(
        &mut self,
        dir: &Path,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<(), MaterializeError> {
        write_icon_file(dir, file_name, bytes)
    }
}

/// Create `path` and any missing parents. A no-op if it is already a directory.
pub fn ensure_directory(path: impl AsRef<Path>) -> Result<(), MaterializeError> {
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => {
            tracing::debug!(path=%path.display(), "Directory already exists");
            return Ok(());
        }
        Ok(_) => {
            return Err(MaterializeError::io(
                "create directory",
                path,
                io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    "path exists and is not a directory",
                ),
            ));
        }
        Err(_) => {}
    }

    fs::create_dir_all(path).map_err(|e| MaterializeError::io("create directory", path, e))?;
    tracing::debug!(path=%path.display(), "Directory created");
    Ok(())
}

/// Create or truncate `dir/file_name` and fill it with exactly `bytes`.
pub fn write_icon_file(
    dir: impl AsRef<Path>,
    file_name: &str,
    bytes: &[u8],
) -> Result<(), MaterializeError> {
    let path = dir.as_ref().join(file_name);
    let mut file = File::create(&path).map_err(|e| MaterializeError::io("create file", &path, e))?;
    file.write_all(bytes)
        .and_then(|_| file.flush())
        .map_err(|e| MaterializeError::io("write file", &path, e))?;
    tracing::debug!(path=%path.display(), size_bytes = bytes.len(), "Icon written");
    Ok(())
}

pub fn icon_file_name(identifier: &str, role: IconRole) -> String {
    format!("{}{}.{}", identifier, role.file_suffix(), ICON_EXTENSION)
}

/// Materialize all icons onto the local filesystem.
pub fn materialize_icons(config: &MaterializeConfig) -> Result<MaterializeReport, MaterializeError> {
    materialize_icons_with(&mut FsSink, config)
}

pub fn materialize_icons_with<S>(
    sink: &mut S,
    config: &MaterializeConfig,
) -> Result<MaterializeReport, MaterializeError>
where
    S: IconSink + ?Sized,
{
    let dir = config.target_directory.as_path();
    sink.ensure_directory(dir)?;

    let inactive = decode_payload(IconRole::Inactive, &config.inactive_payload)?;
    let active = decode_payload(IconRole::Active, &config.active_payload)?;
    let variants = [
        (IconRole::Inactive, compute_sha256_hex(&inactive), inactive),
        (IconRole::Active, compute_sha256_hex(&active), active),
    ];

    let mut files = Vec::with_capacity(config.identifiers.len() * variants.len());
    for identifier in &config.identifiers {
        for (role, sha256, bytes) in &variants {
            let file_name = icon_file_name(identifier, *role);
            sink.write_icon_file(dir, &file_name, bytes)?;
            files.push(WrittenIcon {
                identifier: identifier.clone(),
                role: *role,
                file_name,
                size_bytes: bytes.len() as u64,
                sha256: sha256.clone(),
            });
        }
    }

    tracing::info!(directory=%dir.display(), files = files.len(), "TabBar icons created");
    Ok(MaterializeReport {
        directory: dir.to_path_buf(),
        files,
    })
}
