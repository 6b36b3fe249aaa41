// src/output/xml.rs
// =============================================================================
// Renders an association as an indented XML document:
//
//   <?xml version="1.0" encoding="UTF-8"?>
//   <urlData>
//     <url name="https://example.com">
//       <subUrl name="https://example.com/docs">
//         <file name="a.pdf"/>
//       </subUrl>
//     </url>
//   </urlData>
//
// Elements without children are written in the self-closing form.
// Attribute values are escaped by quick-xml (&, <, >, quotes).
// =============================================================================

use crate::links::Association;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io;

pub const ROOT_ELEMENT: &str = "urlData";
pub const URL_ELEMENT: &str = "url";
pub const SUB_URL_ELEMENT: &str = "subUrl";
pub const FILE_ELEMENT: &str = "file";
pub const NAME_ATTRIBUTE: &str = "name";

const INDENT_WIDTH: usize = 2;

/// Serializes the target URL and its association.
///
/// Child order follows the order of `association.entries` and of each entry's
/// files. Unassociated files are never written.
pub fn serialize(target_url: &str, association: &Association) -> String {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_WIDTH);

    // The writer targets a Vec<u8>, which never returns an I/O error.
    write_document(&mut writer, target_url, association).expect("writing XML into memory cannot fail");

    // Every byte came from a &str, so the buffer is valid UTF-8.
    String::from_utf8_lossy(&writer.into_inner()).into_owned()
}

fn write_document<W: io::Write>(
    writer: &mut Writer<W>,
    target_url: &str,
    association: &Association,
) -> io::Result<()> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new(ROOT_ELEMENT)))?;

    let url = named(URL_ELEMENT, target_url);
    if association.is_empty() {
        writer.write_event(Event::Empty(url))?;
    } else {
        writer.write_event(Event::Start(url))?;

        for entry in &association.entries {
            let sub_url = named(SUB_URL_ELEMENT, &entry.url);
            if entry.files.is_empty() {
                writer.write_event(Event::Empty(sub_url))?;
                continue;
            }

            writer.write_event(Event::Start(sub_url))?;
            for file in &entry.files {
                writer.write_event(Event::Empty(named(FILE_ELEMENT, file)))?;
            }
            writer.write_event(Event::End(BytesEnd::new(SUB_URL_ELEMENT)))?;
        }

        writer.write_event(Event::End(BytesEnd::new(URL_ELEMENT)))?;
    }

    writer.write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))?;
    Ok(())
}

fn named<'a>(element: &'a str, name: &'a str) -> BytesStart<'a> {
    let mut start = BytesStart::new(element);
    start.push_attribute((NAME_ATTRIBUTE, name));
    start
}
