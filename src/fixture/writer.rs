use crate::error::Result;
use crate::fixture::ENTRIES;
use std::io::Write;
use std::path::Path;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Write the sample book to `path` with atomic rename.
///
/// The parent directory is created if missing. Entries are written in
/// fixture order: `mimetype` stored uncompressed first, the rest deflated.
pub fn write_sample(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("epub.tmp");
    let file = std::fs::File::create(&tmp_path)?;
    let mut zip = ZipWriter::new(file);

    let stored = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    let deflate = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for entry in &ENTRIES {
        let opts = if entry.stored { stored } else { deflate };
        zip.start_file(entry.name, opts)?;
        zip.write_all(entry.content)?;
    }

    zip.finish()?;

    std::fs::rename(&tmp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture;
    use std::io::Read;

    #[test]
    fn write_sample_entry_order_and_content() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("sample.epub");

        write_sample(&path).unwrap();

        let file = std::fs::File::open(&path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        assert_eq!(archive.len(), 4);

        for (i, expected) in fixture::ENTRIES.iter().enumerate() {
            let mut entry = archive.by_index(i).unwrap();
            assert_eq!(entry.name(), expected.name);
            let mut buf = Vec::new();
            entry.read_to_end(&mut buf).unwrap();
            assert_eq!(buf, expected.content, "content mismatch in {}", expected.name);
        }
    }

    #[test]
    fn write_sample_mimetype_stored() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("sample.epub");

        write_sample(&path).unwrap();

        let file = std::fs::File::open(&path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        let mimetype = archive.by_index(0).unwrap();
        assert_eq!(mimetype.name(), "mimetype");
        assert_eq!(mimetype.compression(), zip::CompressionMethod::Stored);
    }

    #[test]
    fn write_sample_creates_parent_dirs() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("nested/dir/sample.epub");

        write_sample(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn write_sample_leaves_no_tmp_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("sample.epub");

        write_sample(&path).unwrap();
        assert!(!path.with_extension("epub.tmp").exists());
    }

    #[test]
    fn write_sample_overwrites_existing() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("sample.epub");
        std::fs::write(&path, b"stale").unwrap();

        write_sample(&path).unwrap();

        let file = std::fs::File::open(&path).unwrap();
        let archive = zip::ZipArchive::new(file).unwrap();
        assert_eq!(archive.len(), 4);
    }
}
