use std::{io::{Seek, SeekFrom}, path::Path};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::{Error, Result};

/// Download `file_url` into an anonymous temp file inside `dir`.
///
/// One blocking GET; no timeout and no retry. The file is removed when the
/// returned handle is dropped.
pub(crate) fn download_to_temp(file_url: &str, dir: &Path) -> Result<NamedTempFile> {
    let mut sink = NamedTempFile::new_in(dir)
        .map_err(|e| Error::io(format!("failed to create temp file in {}", dir.display()), e))?;

    let mut resp = reqwest::blocking::get(file_url)
        .and_then(|resp| resp.error_for_status())
        .map_err(|source| Error::Download { url: file_url.to_string(), source: Box::new(source) })?;

    let bytes = std::io::copy(&mut resp, sink.as_file_mut())
        .map_err(|e| Error::io(format!("failed to write download from {file_url}"), e))?;
    debug!(url = file_url, bytes, "download complete");

    sink.as_file_mut()
        .seek(SeekFrom::Start(0))
        .map_err(|e| Error::io("failed to rewind downloaded archive", e))?;

    Ok(sink)
}
