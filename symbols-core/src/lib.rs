//! Runtime vector-image model for generated Material Symbols properties.
//!
//! Generated source files construct one [`ImageVector`] per icon through
//! the builder API in this crate and cache it for the process lifetime.
//! The model is inert data: drawing commands are recorded verbatim, in
//! source order, so a UI layer can replay them against its own 2-D path
//! API.

/// Default width/height and viewport size of a Material symbol, in dp.
pub const DEFAULT_ICON_SIZE: f32 = 24.0;

/// Fill rule applied to a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathFillType {
    /// The default winding-count rule.
    #[default]
    NonZero,
    /// The even-odd crossing rule.
    EvenOdd,
}

/// A recorded path-drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f32, y: f32 },
    MoveToRelative { dx: f32, dy: f32 },
    LineTo { x: f32, y: f32 },
    LineToRelative { dx: f32, dy: f32 },
    HorizontalLineTo { x: f32 },
    HorizontalLineToRelative { dx: f32 },
    VerticalLineTo { y: f32 },
    VerticalLineToRelative { dy: f32 },
    CurveTo { x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32 },
    CurveToRelative { dx1: f32, dy1: f32, dx2: f32, dy2: f32, dx: f32, dy: f32 },
    ReflectiveCurveTo { x2: f32, y2: f32, x: f32, y: f32 },
    ReflectiveCurveToRelative { dx2: f32, dy2: f32, dx: f32, dy: f32 },
    QuadTo { x1: f32, y1: f32, x: f32, y: f32 },
    QuadToRelative { dx1: f32, dy1: f32, dx: f32, dy: f32 },
    ReflectiveQuadTo { x: f32, y: f32 },
    ReflectiveQuadToRelative { dx: f32, dy: f32 },
    ArcTo {
        rx: f32,
        ry: f32,
        rotation: f32,
        large_arc: bool,
        sweep: bool,
        x: f32,
        y: f32,
    },
    ArcToRelative {
        rx: f32,
        ry: f32,
        rotation: f32,
        large_arc: bool,
        sweep: bool,
        dx: f32,
        dy: f32,
    },
    Close,
}

/// One filled path of a vector image.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorPath {
    pub fill_alpha: f32,
    pub stroke_alpha: f32,
    pub fill_type: PathFillType,
    pub commands: Vec<PathCommand>,
}

/// A group of paths. Material symbols never nest groups.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VectorGroup {
    pub paths: Vec<VectorPath>,
}

/// A node of a vector image.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorNode {
    Group(VectorGroup),
    Path(VectorPath),
}

/// A complete, immutable vector image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageVector {
    /// Diagnostic name, e.g. `Outlined.Grade0.Weight400.AddAlarm`.
    pub name: String,
    pub width: f32,
    pub height: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Whether the image should flip horizontally in right-to-left layouts.
    pub auto_mirror: bool,
    pub nodes: Vec<VectorNode>,
}

impl ImageVector {
    /// Start building an image with the given diagnostic name.
    pub fn builder(name: impl Into<String>) -> ImageVectorBuilder {
        ImageVectorBuilder {
            name: name.into(),
            width: DEFAULT_ICON_SIZE,
            height: DEFAULT_ICON_SIZE,
            viewport_width: DEFAULT_ICON_SIZE,
            viewport_height: DEFAULT_ICON_SIZE,
            auto_mirror: false,
            nodes: Vec::new(),
        }
    }
}

/// Builder for [`ImageVector`], consumed by generated code.
pub struct ImageVectorBuilder {
    name: String,
    width: f32,
    height: f32,
    viewport_width: f32,
    viewport_height: f32,
    auto_mirror: bool,
    nodes: Vec<VectorNode>,
}

impl ImageVectorBuilder {
    /// Set the viewport dimensions.
    pub fn viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Mark the image as auto-mirrorable.
    pub fn auto_mirror(mut self, auto_mirror: bool) -> Self {
        self.auto_mirror = auto_mirror;
        self
    }

    /// Add a group node populated by `build`.
    pub fn group(mut self, build: impl FnOnce(&mut GroupBuilder)) -> Self {
        let mut group = GroupBuilder::default();
        build(&mut group);
        self.nodes.push(VectorNode::Group(VectorGroup {
            paths: group.paths,
        }));
        self
    }

    /// Add a top-level path node populated by `build`.
    pub fn path(mut self, build: impl FnOnce(&mut PathBuilder)) -> Self {
        self.nodes.push(VectorNode::Path(build_path(build)));
        self
    }

    pub fn build(self) -> ImageVector {
        ImageVector {
            name: self.name,
            width: self.width,
            height: self.height,
            viewport_width: self.viewport_width,
            viewport_height: self.viewport_height,
            auto_mirror: self.auto_mirror,
            nodes: self.nodes,
        }
    }
}

/// Builder for the paths of a [`VectorGroup`].
#[derive(Default)]
pub struct GroupBuilder {
    paths: Vec<VectorPath>,
}

impl GroupBuilder {
    /// Add a path to the group.
    pub fn path(&mut self, build: impl FnOnce(&mut PathBuilder)) -> &mut Self {
        self.paths.push(build_path(build));
        self
    }
}

fn build_path(build: impl FnOnce(&mut PathBuilder)) -> VectorPath {
    let mut path = PathBuilder::new();
    build(&mut path);
    VectorPath {
        fill_alpha: path.fill_alpha,
        stroke_alpha: path.stroke_alpha,
        fill_type: path.fill_type,
        commands: path.commands,
    }
}

/// Records path parameters and drawing commands.
///
/// Every method returns `&mut Self` so generated bodies can chain calls
/// or issue them as separate statements.
pub struct PathBuilder {
    fill_alpha: f32,
    stroke_alpha: f32,
    fill_type: PathFillType,
    commands: Vec<PathCommand>,
}

impl PathBuilder {
    fn new() -> Self {
        Self {
            fill_alpha: 1.0,
            stroke_alpha: 1.0,
            fill_type: PathFillType::NonZero,
            commands: Vec::new(),
        }
    }

    pub fn fill_alpha(&mut self, fill_alpha: f32) -> &mut Self {
        self.fill_alpha = fill_alpha;
        self
    }

    pub fn stroke_alpha(&mut self, stroke_alpha: f32) -> &mut Self {
        self.stroke_alpha = stroke_alpha;
        self
    }

    pub fn fill_type(&mut self, fill_type: PathFillType) -> &mut Self {
        self.fill_type = fill_type;
        self
    }

    /// The commands recorded so far.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.push(PathCommand::MoveTo { x, y })
    }

    pub fn move_to_relative(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.push(PathCommand::MoveToRelative { dx, dy })
    }

    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.push(PathCommand::LineTo { x, y })
    }

    pub fn line_to_relative(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.push(PathCommand::LineToRelative { dx, dy })
    }

    pub fn horizontal_line_to(&mut self, x: f32) -> &mut Self {
        self.push(PathCommand::HorizontalLineTo { x })
    }

    pub fn horizontal_line_to_relative(&mut self, dx: f32) -> &mut Self {
        self.push(PathCommand::HorizontalLineToRelative { dx })
    }

    pub fn vertical_line_to(&mut self, y: f32) -> &mut Self {
        self.push(PathCommand::VerticalLineTo { y })
    }

    pub fn vertical_line_to_relative(&mut self, dy: f32) -> &mut Self {
        self.push(PathCommand::VerticalLineToRelative { dy })
    }

    pub fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) -> &mut Self {
        self.push(PathCommand::CurveTo { x1, y1, x2, y2, x, y })
    }

    pub fn curve_to_relative(
        &mut self,
        dx1: f32,
        dy1: f32,
        dx2: f32,
        dy2: f32,
        dx: f32,
        dy: f32,
    ) -> &mut Self {
        self.push(PathCommand::CurveToRelative {
            dx1,
            dy1,
            dx2,
            dy2,
            dx,
            dy,
        })
    }

    pub fn reflective_curve_to(&mut self, x2: f32, y2: f32, x: f32, y: f32) -> &mut Self {
        self.push(PathCommand::ReflectiveCurveTo { x2, y2, x, y })
    }

    pub fn reflective_curve_to_relative(
        &mut self,
        dx2: f32,
        dy2: f32,
        dx: f32,
        dy: f32,
    ) -> &mut Self {
        self.push(PathCommand::ReflectiveCurveToRelative { dx2, dy2, dx, dy })
    }

    pub fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) -> &mut Self {
        self.push(PathCommand::QuadTo { x1, y1, x, y })
    }

    pub fn quad_to_relative(&mut self, dx1: f32, dy1: f32, dx: f32, dy: f32) -> &mut Self {
        self.push(PathCommand::QuadToRelative { dx1, dy1, dx, dy })
    }

    pub fn reflective_quad_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.push(PathCommand::ReflectiveQuadTo { x, y })
    }

    pub fn reflective_quad_to_relative(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.push(PathCommand::ReflectiveQuadToRelative { dx, dy })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn arc_to(
        &mut self,
        rx: f32,
        ry: f32,
        rotation: f32,
        large_arc: bool,
        sweep: bool,
        x: f32,
        y: f32,
    ) -> &mut Self {
        self.push(PathCommand::ArcTo {
            rx,
            ry,
            rotation,
            large_arc,
            sweep,
            x,
            y,
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn arc_to_relative(
        &mut self,
        rx: f32,
        ry: f32,
        rotation: f32,
        large_arc: bool,
        sweep: bool,
        dx: f32,
        dy: f32,
    ) -> &mut Self {
        self.push(PathCommand::ArcToRelative {
            rx,
            ry,
            rotation,
            large_arc,
            sweep,
            dx,
            dy,
        })
    }

    pub fn close(&mut self) -> &mut Self {
        self.push(PathCommand::Close)
    }

    fn push(&mut self, command: PathCommand) -> &mut Self {
        self.commands.push(command);
        self
    }
}
