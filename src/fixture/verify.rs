use crate::error::Result;
use crate::fixture::{self, ENTRIES, container};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

const OPF_MEDIA_TYPE: &str = "application/oebps-package+xml";

/// Open a fixture archive for inspection.
pub fn open_archive(path: &Path) -> Result<ZipArchive<File>> {
    let file = File::open(path)?;
    let archive = ZipArchive::new(file)?;
    Ok(archive)
}

/// Check an archive against the built-in sample book.
///
/// A structurally unreadable file (missing, not a zip) is an error. Every
/// divergence from the fixture is collected as an issue string: entry
/// order and compression of `mimetype`, byte-identical content of all
/// four entries, no extras, and a container rootfile pointing at the
/// package document.
pub fn verify(path: &Path) -> Result<Vec<String>> {
    let mut archive = open_archive(path)?;
    let mut issues = Vec::new();

    check_first_entry(&mut archive, &mut issues);

    for expected in &ENTRIES {
        match read_entry(&mut archive, expected.name) {
            Some(data) => {
                if data != expected.content {
                    issues.push(format!("content mismatch in {}", expected.name));
                }
            }
            None => issues.push(format!("missing entry: {}", expected.name)),
        }
    }

    for name in entry_names(&archive) {
        if fixture::entry(&name).is_none() {
            issues.push(format!("unexpected entry: {name}"));
        }
    }

    if let Some(bytes) = read_entry(&mut archive, "META-INF/container.xml") {
        match String::from_utf8(bytes) {
            Ok(xml) => check_rootfile(&xml, &mut issues),
            Err(_) => issues.push("container.xml is not valid UTF-8".to_string()),
        }
    }

    Ok(issues)
}

/// The first entry must be `mimetype`, written without compression.
/// Its content is covered by the byte comparison in `verify`.
fn check_first_entry(archive: &mut ZipArchive<File>, issues: &mut Vec<String>) {
    let Ok(first) = archive.by_index(0) else {
        issues.push("archive has no entries".to_string());
        return;
    };
    if first.name() != "mimetype" {
        issues.push(format!(
            "first entry must be mimetype, found {}",
            first.name()
        ));
        return;
    }
    if first.compression() != zip::CompressionMethod::Stored {
        issues.push("mimetype entry is compressed; it must be stored".to_string());
    }
}

fn check_rootfile(xml: &str, issues: &mut Vec<String>) {
    match container::parse_rootfile(xml) {
        Ok(rootfile) => {
            if rootfile.full_path != "content.opf" {
                issues.push(format!(
                    "rootfile points at {}, expected content.opf",
                    rootfile.full_path
                ));
            }
            if rootfile.media_type.as_deref() != Some(OPF_MEDIA_TYPE) {
                issues.push(format!("rootfile media-type is not {OPF_MEDIA_TYPE}"));
            }
        }
        Err(e) => issues.push(format!("container.xml: {e}")),
    }
}

fn read_entry(archive: &mut ZipArchive<File>, name: &str) -> Option<Vec<u8>> {
    let mut entry = archive.by_name(name).ok()?;
    let mut buf = Vec::new();
    entry.read_to_end(&mut buf).ok()?;
    Some(buf)
}

fn entry_names(archive: &ZipArchive<File>) -> Vec<String> {
    (0..archive.len())
        .filter_map(|i| archive.name_for_index(i).map(|s| s.to_string()))
        .collect()
}
