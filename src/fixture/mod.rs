pub mod container;
pub mod verify;
pub mod writer;

/// Media type stored as the archive's first entry, uncompressed.
pub const MIMETYPE: &str = "application/epub+zip";

/// `META-INF/container.xml` pointing at the package document at the
/// archive root (not under OEBPS/).
pub const CONTAINER_XML: &str = r#"<?xml version="1.0"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
   <rootfiles>
      <rootfile full-path="content.opf" media-type="application/oebps-package+xml"/>
   </rootfiles>
</container>
"#;

/// EPUB 3 package document: one chapter in manifest and spine.
pub const PACKAGE_OPF: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<package version="3.0" xmlns="http://www.idpf.org/2007/opf" unique-identifier="BookId">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/">
    <dc:identifier id="BookId">id12345</dc:identifier>
    <dc:title>Sample Book</dc:title>
    <dc:language>en</dc:language>
  </metadata>
  <manifest>
    <item id="chapter1" href="chapter1.xhtml" media-type="application/xhtml+xml"/>
  </manifest>
  <spine>
    <itemref idref="chapter1" />
  </spine>
</package>
"#;

/// The single content document. The paragraph is deliberately longer than
/// 160 characters so consumers can exercise text segmentation on it.
pub const CHAPTER1_XHTML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<html xmlns="http://www.w3.org/1999/xhtml" lang="en">
  <head><title>Chapter 1</title></head>
  <body><p>Hello world! This is a simple EPUB test. It's long enough to check segmentation into 160 characters. Keep adding some text for test. Adding more sentences to exceed 160 characters. Another sentence to ensure enough content for multiple cards. And again some more filler text to complete the test of the card splitting algorithm. End.</p></body>
</html>
"#;

/// One entry of the sample archive.
#[derive(Debug, Clone, Copy)]
pub struct FixtureEntry {
    pub name: &'static str,
    pub content: &'static [u8],
    /// Written with no compression when set. Only `mimetype` is stored;
    /// readers expect it as the first, uncompressed entry.
    pub stored: bool,
}

/// The four entries of the sample book, in write order. `mimetype`
/// must come first.
pub const ENTRIES: [FixtureEntry; 4] = [
    FixtureEntry {
        name: "mimetype",
        content: MIMETYPE.as_bytes(),
        stored: true,
    },
    FixtureEntry {
        name: "META-INF/container.xml",
        content: CONTAINER_XML.as_bytes(),
        stored: false,
    },
    FixtureEntry {
        name: "content.opf",
        content: PACKAGE_OPF.as_bytes(),
        stored: false,
    },
    FixtureEntry {
        name: "chapter1.xhtml",
        content: CHAPTER1_XHTML.as_bytes(),
        stored: false,
    },
];

/// Look up a fixture entry by its archive name.
pub fn entry(name: &str) -> Option<&'static FixtureEntry> {
    ENTRIES.iter().find(|e| e.name == name)
}
