//! Parsed geometric representation of one icon variant.

use crate::path::Command;

/// Fill rule of a path. `NonZero` is the format default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillType {
    #[default]
    NonZero,
    EvenOdd,
}

/// A parsed vector drawable: auto-mirror flag, optional viewport
/// dimensions and the node list in document order.
///
/// Viewport dimensions are `None` when the source omits them; the
/// emitter substitutes the default icon size.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    pub auto_mirrored: bool,
    pub viewport_width: Option<f32>,
    pub viewport_height: Option<f32>,
    pub nodes: Vec<VectorNode>,
}

/// A node of a vector drawable. Groups are non-leaf nodes holding paths;
/// clip-paths are not represented (they are dropped at parse time).
#[derive(Debug, Clone, PartialEq)]
pub enum VectorNode {
    Group(Group),
    Path(Path),
}

/// A group of paths. The source format never nests groups.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Group {
    pub paths: Vec<Path>,
}

/// One filled path and its drawing commands.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub fill_alpha: f32,
    pub stroke_alpha: f32,
    pub fill_type: FillType,
    pub commands: Vec<Command>,
}
