//! Streaming parser from an icon's cleaned XML to a [`Vector`].

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::SymbolgenError;
use crate::icon::Icon;
use crate::path::parse_path_data;
use crate::vector::{FillType, Group, Path, Vector, VectorNode};

// XML tag names
const VECTOR: &[u8] = b"vector";
const PATH: &[u8] = b"path";
const GROUP: &[u8] = b"group";
const CLIP_PATH: &[u8] = b"clip-path";

// XML attribute names
const AUTO_MIRRORED: &str = "android:autoMirrored";
const VIEWPORT_WIDTH: &str = "android:viewportWidth";
const VIEWPORT_HEIGHT: &str = "android:viewportHeight";
const PATH_DATA: &str = "android:pathData";
const FILL_ALPHA: &str = "android:fillAlpha";
const STROKE_ALPHA: &str = "android:strokeAlpha";
const FILL_TYPE: &str = "android:fillType";

// The only recognized non-default fill-rule value.
const EVEN_ODD: &str = "evenOdd";

/// Parse one icon's XML into its vector representation.
pub fn parse_icon(icon: &Icon) -> Result<Vector, SymbolgenError> {
    parse_document(&icon.xml)
}

/// Parse a vector-drawable document.
///
/// Material symbols keep at most one flat group per document, so the
/// parser tracks a single open group: once a `<group>` is seen, every
/// following `<path>` attaches to it until the document ends.
pub fn parse_document(xml: &str) -> Result<Vector, SymbolgenError> {
    let mut reader = Reader::from_str(xml);

    let (root, root_is_empty) = loop {
        match reader.read_event()? {
            Event::Start(start) => break (start, false),
            Event::Empty(start) => break (start, true),
            Event::Eof => {
                return Err(SymbolgenError::InvalidVector(
                    "no root element found".into(),
                ));
            }
            _ => {}
        }
    };

    if root.name().as_ref() != VECTOR {
        return Err(SymbolgenError::InvalidVector(
            "the root element must be <vector>".into(),
        ));
    }

    let auto_mirrored =
        attr(&root, AUTO_MIRRORED)?.is_some_and(|value| value.eq_ignore_ascii_case("true"));
    let viewport_width = float_attr(&root, VIEWPORT_WIDTH)?;
    let viewport_height = float_attr(&root, VIEWPORT_HEIGHT)?;

    let mut nodes: Vec<VectorNode> = Vec::new();
    // Index of the open group in `nodes`, if any.
    let mut open_group: Option<usize> = None;

    if !root_is_empty {
        loop {
            match reader.read_event()? {
                Event::Start(start) | Event::Empty(start) => match start.name().as_ref() {
                    PATH => {
                        let path = parse_path_element(&start)?;
                        match open_group {
                            Some(index) => {
                                let VectorNode::Group(group) = &mut nodes[index] else {
                                    unreachable!("open_group always points at a group node");
                                };
                                group.paths.push(path);
                            }
                            None => nodes.push(VectorNode::Path(path)),
                        }
                    }
                    GROUP => {
                        nodes.push(VectorNode::Group(Group::default()));
                        open_group = Some(nodes.len() - 1);
                    }
                    CLIP_PATH => {
                        log::warn!("clip-path elements are not supported, dropping one");
                    }
                    _ => {}
                },
                Event::End(end) if end.name().as_ref() == VECTOR => break,
                Event::Eof => break,
                _ => {}
            }
        }
    }

    Ok(Vector {
        auto_mirrored,
        viewport_width,
        viewport_height,
        nodes,
    })
}

fn parse_path_element(start: &BytesStart) -> Result<Path, SymbolgenError> {
    let data = attr(start, PATH_DATA)?.ok_or_else(|| {
        SymbolgenError::InvalidVector(format!("<path> element without {PATH_DATA}"))
    })?;
    let fill_type = match attr(start, FILL_TYPE)?.as_deref() {
        Some(EVEN_ODD) => FillType::EvenOdd,
        _ => FillType::NonZero,
    };

    Ok(Path {
        fill_alpha: float_attr(start, FILL_ALPHA)?.unwrap_or(1.0),
        stroke_alpha: float_attr(start, STROKE_ALPHA)?.unwrap_or(1.0),
        fill_type,
        commands: parse_path_data(&data)?,
    })
}

/// Attribute value by qualified name.
fn attr(start: &BytesStart, name: &str) -> Result<Option<String>, SymbolgenError> {
    for attr in start.attributes() {
        let attr = attr
            .map_err(|e| SymbolgenError::InvalidVector(format!("invalid attribute: {e}")))?;
        if attr.key.as_ref() == name.as_bytes() {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Float attribute value; absent or unparsable values yield `None`.
fn float_attr(start: &BytesStart, name: &str) -> Result<Option<f32>, SymbolgenError> {
    Ok(attr(start, name)?.and_then(|value| value.parse().ok()))
}
