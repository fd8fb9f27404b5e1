//! Mapping of configured paths to the paths the notifier must watch.
//!
//! Secret mounts expose `tls.crt` as a symlink into `..data/`, itself a
//! symlink to a versioned directory. A rotation swaps `..data` and never
//! touches the files, so a watch on the leaf would stay silent. When the
//! configured file (or the directory holding it) is a symlink, the directory
//! containing that symlink is watched instead.

use crate::ssl::structs::resolved_target::ResolvedTarget;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub fn resolve_watch_target(path: &Path) -> io::Result<ResolvedTarget> {
    let real_path = fs::canonicalize(path)?;
    let absolute = std::path::absolute(path)?;

    match outermost_symlink(&absolute)? {
        None => Ok(ResolvedTarget {
            watch_path: real_path.clone(),
            real_path,
            indirect: false,
        }),
        Some(link) => {
            let parent = link.parent().ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{} has no parent directory", link.display()),
                )
            })?;
            Ok(ResolvedTarget {
                watch_path: fs::canonicalize(parent)?,
                real_path,
                indirect: true,
            })
        }
    }
}

/// Only the file and the directory holding it are inspected. Symlinks higher
/// up (`/var` on macOS, for one) are part of the host layout, not a rotation
/// mechanism.
fn outermost_symlink(absolute: &Path) -> io::Result<Option<PathBuf>> {
    let mut found = None;
    for candidate in absolute.ancestors().take(2) {
        if candidate.parent().is_none() {
            break;
        }
        if fs::symlink_metadata(candidate)?.file_type().is_symlink() {
            found = Some(candidate.to_path_buf());
        }
    }
    Ok(found)
}
