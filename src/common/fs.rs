use std::{fs, path::Path};

use zip::ZipArchive;

use crate::{Error, Result};

/// Create the directory if it doesn’t exist; error if a non-directory exists there.
pub(crate) fn ensure_dir_exists(path: &Path) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            return Err(Error::io(
                format!("Path exists but is not a directory: {}", path.display()),
                std::io::ErrorKind::AlreadyExists.into(),
            ));
        }
    } else {
        fs::create_dir_all(path)
            .map_err(|e| Error::io(format!("Failed to create directory {}", path.display()), e))?;
    }
    Ok(())
}

/// Extracts the given `.zip` file into `dest_dir`, which must already exist.
pub(crate) fn extract_zip(zip_path: &Path, dest_dir: &Path) -> Result<()> {
    let file = fs::File::open(zip_path)
        .map_err(|e| Error::io(format!("failed to open {}", zip_path.display()), e))?;
    let mut archive = ZipArchive::new(file)
        .map_err(|source| Error::Extract { path: zip_path.to_path_buf(), source })?;

    archive.extract(dest_dir)
        .map_err(|source| Error::Extract { path: zip_path.to_path_buf(), source })?;

    Ok(())
}

/// Extract `zip_path` into a fresh `cache_dir`.
///
/// The archive is unpacked into a staging directory beside `cache_dir` and
/// renamed into place only once extraction succeeded, so a failure never
/// leaves a half-populated cache behind.
pub(crate) fn install_archive(zip_path: &Path, cache_dir: &Path) -> Result<()> {
    let parent = parent_dir(cache_dir);
    ensure_dir_exists(parent)?;

    let staging = tempfile::Builder::new()
        .prefix(".euromap-extract-")
        .tempdir_in(parent)
        .map_err(|e| Error::io(format!("failed to create staging directory in {}", parent.display()), e))?;

    extract_zip(zip_path, staging.path())?;

    // `staging` is cleaned up on drop; after the rename there is nothing left to remove.
    fs::rename(staging.path(), cache_dir)
        .map_err(|e| Error::io(format!("failed to move extracted files to {}", cache_dir.display()), e))?;

    Ok(())
}

/// Parent of `path`, or `.` for a bare relative name.
pub(crate) fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::{write::SimpleFileOptions, ZipWriter};

    fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
        let mut writer = ZipWriter::new(fs::File::create(path).unwrap());
        for (name, bytes) in entries {
            writer.start_file(*name, SimpleFileOptions::default()).unwrap();
            writer.write_all(bytes).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn install_archive_populates_cache_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let zip_path = tmp.path().join("data.zip");
        write_zip(&zip_path, &[("layer.dbf", b"dbf"), ("layer.shp", b"shp")]);

        let cache = tmp.path().join("cache");
        install_archive(&zip_path, &cache).unwrap();

        assert_eq!(fs::read(cache.join("layer.shp")).unwrap(), b"shp");
        assert_eq!(fs::read(cache.join("layer.dbf")).unwrap(), b"dbf");
    }

    #[test]
    fn failed_extraction_leaves_no_cache() {
        let tmp = tempfile::tempdir().unwrap();
        let zip_path = tmp.path().join("broken.zip");
        fs::write(&zip_path, b"this is not a zip archive").unwrap();

        let cache = tmp.path().join("cache");
        let err = install_archive(&zip_path, &cache).unwrap_err();

        assert!(matches!(err, Error::Extract { .. }));
        assert!(!cache.exists());
    }

    #[test]
    fn ensure_dir_rejects_files() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("occupied");
        fs::write(&file, b"").unwrap();
        assert!(ensure_dir_exists(&file).is_err());
        ensure_dir_exists(&tmp.path().join("a/b")).unwrap();
        assert!(tmp.path().join("a/b").is_dir());
    }
}
