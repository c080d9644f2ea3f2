//! Thin SVG element writer over `quick_xml`.

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Text anchoring for [`SvgWriter::text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Font size and styling for a text element.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub size: u32,
    pub anchor: Anchor,
    pub bold: bool,
    /// Degrees, rotated around the text origin.
    pub rotate: Option<f64>,
}

impl TextStyle {
    pub const fn new(size: u32, anchor: Anchor) -> Self {
        Self {
            size,
            anchor,
            bold: false,
            rotate: None,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn rotated(mut self, degrees: f64) -> Self {
        self.rotate = Some(degrees);
        self
    }
}

/// Writes one SVG document into memory.
pub struct SvgWriter {
    xml: Writer<Vec<u8>>,
}

impl SvgWriter {
    /// Opens the root `<svg>` element with a white background.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);
        let mut root = BytesStart::new("svg");
        root.push_attribute(("xmlns", SVG_NS));
        root.push_attribute(("width", width.to_string().as_str()));
        root.push_attribute(("height", height.to_string().as_str()));
        root.push_attribute(("viewBox", format!("0 0 {width} {height}").as_str()));
        root.push_attribute(("font-family", "sans-serif"));
        xml.write_event(Event::Start(root))?;

        let mut svg = Self { xml };
        svg.rect(0.0, 0.0, f64::from(width), f64::from(height), "white", 1.0)?;
        Ok(svg)
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: &str, opacity: f64) -> Result<()> {
        let mut elem = BytesStart::new("rect");
        push_number(&mut elem, "x", x);
        push_number(&mut elem, "y", y);
        push_number(&mut elem, "width", width);
        push_number(&mut elem, "height", height);
        elem.push_attribute(("fill", fill));
        if opacity < 1.0 {
            push_number(&mut elem, "fill-opacity", opacity);
        }
        self.empty(elem)
    }

    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), stroke: &str, dashed: bool) -> Result<()> {
        let mut elem = BytesStart::new("line");
        push_number(&mut elem, "x1", from.0);
        push_number(&mut elem, "y1", from.1);
        push_number(&mut elem, "x2", to.0);
        push_number(&mut elem, "y2", to.1);
        elem.push_attribute(("stroke", stroke));
        if dashed {
            elem.push_attribute(("stroke-dasharray", "4,3"));
        }
        self.empty(elem)
    }

    pub fn polyline(&mut self, points: &[(f64, f64)], stroke: &str) -> Result<()> {
        let points = points
            .iter()
            .map(|(x, y)| format!("{x:.1},{y:.1}"))
            .collect::<Vec<_>>()
            .join(" ");
        let mut elem = BytesStart::new("polyline");
        elem.push_attribute(("points", points.as_str()));
        elem.push_attribute(("fill", "none"));
        elem.push_attribute(("stroke", stroke));
        elem.push_attribute(("stroke-width", "2"));
        self.empty(elem)
    }

    pub fn circle(&mut self, center: (f64, f64), radius: f64, fill: &str) -> Result<()> {
        let mut elem = BytesStart::new("circle");
        push_number(&mut elem, "cx", center.0);
        push_number(&mut elem, "cy", center.1);
        push_number(&mut elem, "r", radius);
        elem.push_attribute(("fill", fill));
        self.empty(elem)
    }

    /// Writes a path from raw path data.
    pub fn path(&mut self, data: &str, fill: &str) -> Result<()> {
        let mut elem = BytesStart::new("path");
        elem.push_attribute(("d", data));
        elem.push_attribute(("fill", fill));
        elem.push_attribute(("stroke", "white"));
        self.empty(elem)
    }

    pub fn text(&mut self, x: f64, y: f64, style: TextStyle, content: &str) -> Result<()> {
        let mut elem = BytesStart::new("text");
        push_number(&mut elem, "x", x);
        push_number(&mut elem, "y", y);
        elem.push_attribute(("font-size", style.size.to_string().as_str()));
        elem.push_attribute(("text-anchor", style.anchor.as_str()));
        elem.push_attribute(("fill", "#374151"));
        if style.bold {
            elem.push_attribute(("font-weight", "600"));
        }
        if let Some(degrees) = style.rotate {
            let transform = format!("rotate({degrees:.0}, {x:.1}, {y:.1})");
            elem.push_attribute(("transform", transform.as_str()));
        }
        self.xml.write_event(Event::Start(elem))?;
        self.xml.write_event(Event::Text(BytesText::new(content)))?;
        self.xml.write_event(Event::End(BytesEnd::new("text")))?;
        Ok(())
    }

    /// Closes the root element and returns the document.
    pub fn finish(mut self) -> Result<String> {
        self.xml.write_event(Event::End(BytesEnd::new("svg")))?;
        String::from_utf8(self.xml.into_inner()).context("svg output is not utf-8")
    }

    fn empty(&mut self, elem: BytesStart<'_>) -> Result<()> {
        self.xml.write_event(Event::Empty(elem))?;
        Ok(())
    }
}

fn push_number(elem: &mut BytesStart<'_>, name: &str, value: f64) {
    elem.push_attribute((name, format!("{value:.1}").as_str()));
}
