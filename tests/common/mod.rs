use std::path::{Path, PathBuf};

/// Handle to the compiled binary.
pub fn epubfix() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("epubfix").unwrap()
}

/// Generate the sample fixture into a temp directory via the library.
/// Returns (TempDir, path_to_fixture). TempDir must be kept alive.
#[allow(dead_code)]
pub fn temp_sample() -> (tempfile::TempDir, PathBuf) {
    let tmp = tempfile::TempDir::new().expect("create temp dir");
    let path = tmp.path().join("sample.epub");
    epubfix::fixture::writer::write_sample(&path).expect("write sample fixture");
    (tmp, path)
}

/// Basic structural validation of a generated archive.
#[allow(dead_code)]
pub fn assert_valid_sample(path: &Path) {
    use std::io::Read;

    let file = std::fs::File::open(path).expect("open epub");
    let mut archive = zip::ZipArchive::new(file).expect("open zip");
    assert_eq!(archive.len(), 4, "expected exactly four entries");

    // mimetype must be the first entry and stored
    let mimetype = archive.by_index(0).expect("first entry");
    assert_eq!(mimetype.name(), "mimetype");
    assert_eq!(mimetype.compression(), zip::CompressionMethod::Stored);
    drop(mimetype);

    let mut mimetype = archive.by_name("mimetype").expect("mimetype entry");
    let mut content = String::new();
    mimetype.read_to_string(&mut content).expect("read mimetype");
    assert_eq!(content, "application/epub+zip");
}
