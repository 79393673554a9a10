use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Record;
use crate::store::{self, oplog};
use crate::ui::Prompter;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Write `records` to the configured backup file.
    pub fn write_backup(cfg: &Config, records: &[Record]) -> AppResult<()> {
        let dest = cfg.backup_path();
        store::save(&dest, records)?;
        oplog::record(
            &cfg.log_path(),
            "backup",
            &dest.to_string_lossy(),
            &format!("Backup created with {} entries", records.len()),
        );
        Ok(())
    }

    /// Replace the data file with the configured backup.
    ///
    /// Returns `None` when there is no backup yet. An empty backup is loaded
    /// but never written over the data file.
    pub fn restore(cfg: &Config) -> AppResult<Option<usize>> {
        let src = cfg.backup_path();
        if !src.exists() {
            return Ok(None);
        }

        let records = store::load(&src)?;
        if !records.is_empty() {
            store::save(&cfg.data_path(), &records)?;
            oplog::record(
                &cfg.log_path(),
                "restore",
                &src.to_string_lossy(),
                &format!("Backup loaded with {} entries", records.len()),
            );
        }

        Ok(Some(records.len()))
    }

    /// Copy the data file to `dest_file`, optionally compressed.
    ///
    /// Returns the path written, or `None` when the user refused to overwrite
    /// an existing file.
    pub fn copy_data_file<P: Prompter>(
        p: &mut P,
        cfg: &Config,
        dest_file: &str,
        compress: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = cfg.data_path();
        let dest = Path::new(dest_file);

        // 1️⃣ Check data file exists
        if !src.exists() {
            return Err(AppError::Backup(format!(
                "Data file not found: {}",
                src.display()
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ If destination file exists → ask confirmation
        if dest.exists() {
            let question = format!(
                "⚠️  The file '{}' already exists.\nDo you want to overwrite it? [y/N]",
                dest.display()
            );
            if !p.confirm(&question)? {
                return Ok(None);
            }
        }

        // 4️⃣ Copy
        fs::copy(&src, dest)?;

        // 5️⃣ Optional compression
        let final_path = if compress {
            let compressed = compress_backup(dest)?;
            if compressed != dest.to_path_buf() {
                fs::remove_file(dest)?;
            }
            compressed
        } else {
            dest.to_path_buf()
        };

        oplog::record(
            &cfg.log_path(),
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(Some(final_path))
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Backup(format!("Invalid backup path: {}", path.display())))?;

    let mut f = fs::File::open(path)?;
    zip.start_file(name, options)
        .map_err(|e| AppError::Backup(e.to_string()))?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(|e| AppError::Backup(e.to_string()))?;

    Ok(zip_path)
}
