use super::error::FileError;
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::debug;

/// Copies the contents of `src` into `dst` and syncs `dst` to disk.
///
/// `dst` is created if missing and truncated if it exists. Returns the
/// number of bytes copied.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<u64, FileError> {
    let (src, dst) = (src.as_ref(), dst.as_ref());

    let mut input = File::open(src).map_err(|source| FileError::io(src, source))?;
    let mut output = File::create(dst).map_err(|source| FileError::io(dst, source))?;
    let copied = io::copy(&mut input, &mut output).map_err(|source| FileError::io(dst, source))?;
    output
        .sync_all()
        .map_err(|source| FileError::io(dst, source))?;

    debug!(src = %src.display(), dst = %dst.display(), bytes = copied, "copied file");
    Ok(copied)
}
