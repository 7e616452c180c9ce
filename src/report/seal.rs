//! One-shot tamper-evident seal for a finished report.
//!
//! Sealing appends a digest trailer after the PDF's `%%EOF` (a comment line
//! carrying the SHA-256 of everything before it, hex encoded) and marks the
//! file read-only. The document stays readable in any viewer; any later
//! change to the sealed bytes makes `verify` fail. A file is sealed exactly
//! once per session.

use crate::errors::{AppError, AppResult};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

const SEAL_MARKER: &[u8] = b"%%TK-Seal-SHA256: ";

/// Append the digest trailer and mark the file read-only.
pub fn seal(path: &Path) -> AppResult<()> {
    let bytes = fs::read(path)?;
    // A seal trailer sits in the last few lines; log messages that merely
    // mention the marker text must not trip this check.
    let tail = &bytes[bytes.len().saturating_sub(100)..];
    if find_marker(tail).is_some() {
        return Err(AppError::Seal(format!(
            "{} is already sealed",
            path.display()
        )));
    }

    let digest = Sha256::digest(&bytes);

    let mut out = bytes;
    out.push(b'\n');
    out.extend_from_slice(SEAL_MARKER);
    out.extend_from_slice(hex::encode(digest).as_bytes());
    out.push(b'\n');

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, &out)?;
    fs::rename(&tmp, path)?;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_readonly(true);
    fs::set_permissions(path, perms)?;

    Ok(())
}

/// Check the digest trailer. Errors if the file carries no seal or the
/// sealed bytes no longer match the recorded digest.
pub fn verify(path: &Path) -> AppResult<()> {
    let bytes = fs::read(path)?;
    let marker = find_marker(&bytes).ok_or_else(|| {
        AppError::SealBroken(format!("{} carries no seal trailer", path.display()))
    })?;

    // The trailer was appended as "\n<marker><hex>\n" and must terminate the
    // file: a PDF incremental update (new objects + xref + startxref after
    // the old %%EOF) is an append, and viewers honor it.
    let recorded_start = marker + SEAL_MARKER.len();
    let newline = bytes[recorded_start..]
        .iter()
        .position(|b| *b == b'\n')
        .ok_or_else(|| {
            AppError::SealBroken(format!("truncated seal trailer in {}", path.display()))
        })?;
    if recorded_start + newline + 1 != bytes.len() {
        return Err(AppError::SealBroken(format!(
            "content appended after the seal in {}",
            path.display()
        )));
    }

    // The digest covers everything before the trailer's leading newline.
    let sealed = &bytes[..marker.saturating_sub(1)];
    let recorded = &bytes[recorded_start..recorded_start + newline];

    let actual = hex::encode(Sha256::digest(sealed));
    if recorded != actual.as_bytes() {
        return Err(AppError::SealBroken(format!(
            "digest mismatch for {}",
            path.display()
        )));
    }

    Ok(())
}

fn find_marker(bytes: &[u8]) -> Option<usize> {
    bytes
        .windows(SEAL_MARKER.len())
        .rposition(|w| w == SEAL_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{name}_timekeeper_seal.pdf"));
        if path.exists() {
            let mut perms = fs::metadata(&path).unwrap().permissions();
            perms.set_readonly(false);
            fs::set_permissions(&path, perms).unwrap();
            fs::remove_file(&path).unwrap();
        }
        path
    }

    #[test]
    fn sealed_file_verifies() {
        let path = scratch("sealed_file_verifies");
        fs::write(&path, b"%PDF-1.7\ncontent\n%%EOF").unwrap();

        seal(&path).unwrap();
        verify(&path).unwrap();
        assert!(fs::metadata(&path).unwrap().permissions().readonly());
    }

    #[test]
    fn tampering_breaks_the_seal() {
        let path = scratch("tampering_breaks_the_seal");
        fs::write(&path, b"%PDF-1.7\ncontent\n%%EOF").unwrap();
        seal(&path).unwrap();

        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_readonly(false);
        fs::set_permissions(&path, perms).unwrap();
        let mut bytes = fs::read(&path).unwrap();
        let i = bytes.iter().position(|b| *b == b'c').unwrap();
        bytes[i] = b'X';
        fs::write(&path, &bytes).unwrap();

        assert!(matches!(verify(&path), Err(AppError::SealBroken(_))));
    }

    #[test]
    fn incremental_update_after_the_seal_is_rejected() {
        let path = scratch("incremental_update_rejected");
        fs::write(&path, b"%PDF-1.7\ncontent\n%%EOF").unwrap();
        seal(&path).unwrap();

        // The standard edit-and-save path for a PDF appends an update
        // section after the old %%EOF instead of touching earlier bytes.
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_readonly(false);
        fs::set_permissions(&path, perms).unwrap();
        let mut bytes = fs::read(&path).unwrap();
        bytes.extend_from_slice(
            b"5 0 obj\n<< /Altered true >>\nendobj\nxref\nstartxref\n0\n%%EOF\n",
        );
        fs::write(&path, &bytes).unwrap();

        assert!(matches!(verify(&path), Err(AppError::SealBroken(_))));
    }

    #[test]
    fn sealing_twice_is_refused() {
        let path = scratch("sealing_twice_is_refused");
        fs::write(&path, b"%PDF-1.7\ncontent\n%%EOF").unwrap();
        seal(&path).unwrap();

        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_readonly(false);
        fs::set_permissions(&path, perms).unwrap();

        assert!(matches!(seal(&path), Err(AppError::Seal(_))));
    }

    #[test]
    fn unsealed_file_fails_verification() {
        let path = scratch("unsealed_file_fails_verification");
        fs::write(&path, b"%PDF-1.7\ncontent\n%%EOF").unwrap();

        assert!(matches!(verify(&path), Err(AppError::SealBroken(_))));
    }
}
