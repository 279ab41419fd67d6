//! Streaming XML output on top of quick-xml
//!
//! Elements are written straight to the sink as they are produced; there is
//! no intermediate tree.

use anyhow::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

pub struct XmlWriter<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> XmlWriter<W> {
    /// `indent` spaces per nesting level, 0 for compact output
    pub fn new(inner: W, indent: usize) -> Self {
        let writer = if indent == 0 {
            Writer::new(inner)
        } else {
            Writer::new_with_indent(inner, b' ', indent)
        };
        Self { writer }
    }

    pub fn declaration(&mut self) -> Result<()> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        Ok(())
    }

    pub fn add_opening_tag(&mut self, tag: &str, attributes: &[(&str, &str)]) -> Result<()> {
        self.writer
            .write_event(Event::Start(Self::start(tag, attributes)))?;
        Ok(())
    }

    pub fn add_closing_tag(&mut self, tag: &str) -> Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(tag)))?;
        Ok(())
    }

    pub fn add_self_closing_tag(&mut self, tag: &str, attributes: &[(&str, &str)]) -> Result<()> {
        self.writer
            .write_event(Event::Empty(Self::start(tag, attributes)))?;
        Ok(())
    }

    /// `<tag>text</tag>` on one line
    pub fn add_text_element(&mut self, tag: &str, text: &str) -> Result<()> {
        self.writer
            .create_element(tag)
            .write_text_content(BytesText::new(text))?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn start<'a>(tag: &'a str, attributes: &[(&'a str, &'a str)]) -> BytesStart<'a> {
        let mut start = BytesStart::new(tag);
        for attribute in attributes {
            start.push_attribute(*attribute);
        }
        start
    }
}
