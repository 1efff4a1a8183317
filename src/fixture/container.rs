use crate::error::{FixtureError, Result};
use quick_xml::Reader;
use quick_xml::events::Event;

/// The `<rootfile>` declaration from META-INF/container.xml.
#[derive(Debug, PartialEq, Eq)]
pub struct Rootfile {
    pub full_path: String,
    pub media_type: Option<String>,
}

/// Parse container.xml and return its first rootfile declaration.
pub fn parse_rootfile(xml: &str) -> Result<Rootfile> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                if e.local_name().as_ref() == b"rootfile" =>
            {
                let mut full_path = None;
                let mut media_type = None;
                for attr in e.attributes().flatten() {
                    match attr.key.as_ref() {
                        b"full-path" => {
                            full_path = Some(String::from_utf8_lossy(&attr.value).into_owned());
                        }
                        b"media-type" => {
                            media_type = Some(String::from_utf8_lossy(&attr.value).into_owned());
                        }
                        _ => {}
                    }
                }
                if let Some(full_path) = full_path {
                    return Ok(Rootfile {
                        full_path,
                        media_type,
                    });
                }
                return Err(FixtureError::InvalidArchive(
                    "rootfile element has no full-path attribute".into(),
                ));
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(FixtureError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Err(FixtureError::InvalidArchive(
        "no rootfile found in container.xml".into(),
    ))
}
