//! Daily report artifact: rendering, storage and sealing. One file per
//! calendar day, fully overwritten on every regeneration, read-only after
//! the close-time seal.

pub mod pdf;
pub mod render;
pub mod seal;

pub use render::render;

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk home of the session's artifact. Writes are atomic (temp file
/// then rename), so an I/O failure never leaves a half-written report; a
/// sealed artifact refuses any further write.
pub struct ArtifactStore {
    path: PathBuf,
    sealed: bool,
}

impl ArtifactStore {
    /// `<log_dir>/<DD_MM_YYYY>.pdf`, creating the directory if absent.
    pub fn for_date(log_dir: &Path, date: NaiveDate) -> AppResult<Self> {
        fs::create_dir_all(log_dir)?;
        let path = log_dir.join(format!("{}.pdf", date.format("%d_%m_%Y")));
        Ok(Self {
            path,
            sealed: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Replace the artifact with `bytes`. The previous content stays intact
    /// if the write fails partway.
    pub fn write(&mut self, bytes: &[u8]) -> AppResult<()> {
        if self.sealed {
            return Err(AppError::ArtifactSealed);
        }

        let tmp = self.path.with_extension("pdf.part");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Seal the artifact; terminal, exactly once.
    pub fn seal(&mut self) -> AppResult<()> {
        if self.sealed {
            return Err(AppError::ArtifactSealed);
        }
        seal::seal(&self.path)?;
        self.sealed = true;
        Ok(())
    }
}
