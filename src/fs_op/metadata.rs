//! Carry file metadata (permission bits, access and modification times)
//! from a copied file onto its copy.

use std::fs;
use std::io;
use std::path::Path;

use filetime::{set_file_times, FileTime};

/// Copy permission bits from `src` to `dst`.
pub(crate) fn copy_permissions(src: &Path, dst: &Path) -> io::Result<()> {
    let perms = fs::metadata(src)?.permissions();
    fs::set_permissions(dst, perms)
}

/// Apply `src`'s permissions and access/modification timestamps to `dst`.
///
/// Both must be regular files. Errors are propagated; the copy helper
/// treats a failure here as a failed copy.
pub(crate) fn preserve_metadata(src: &Path, dst: &Path) -> io::Result<()> {
    let meta = fs::metadata(src)?;
    let m_ft = FileTime::from_last_modification_time(&meta);
    let a_ft = FileTime::from_last_access_time(&meta);

    // Timestamps first: a read-only permission set could otherwise block
    // utime on some platforms.
    set_file_times(dst, a_ft, m_ft)?;
    copy_permissions(src, dst)
}
