//! Path data parsing for the vector-drawable path mini-language.
//!
//! The grammar is the SVG path syntax: one-letter commands in absolute
//! (uppercase) and relative (lowercase) form, numbers separated by
//! whitespace or commas, and implicit repetition of the previous command
//! when coordinates follow without a letter.

use crate::error::SymbolgenError;

/// A typed path command with its numeric operands.
///
/// `rel` distinguishes the lowercase (relative) form of a command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// M/m
    MoveTo { rel: bool, x: f32, y: f32 },
    /// L/l
    LineTo { rel: bool, x: f32, y: f32 },
    /// H/h
    HorizontalTo { rel: bool, x: f32 },
    /// V/v
    VerticalTo { rel: bool, y: f32 },
    /// C/c
    CurveTo {
        rel: bool,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        x: f32,
        y: f32,
    },
    /// S/s
    SmoothCurveTo {
        rel: bool,
        x2: f32,
        y2: f32,
        x: f32,
        y: f32,
    },
    /// Q/q
    QuadTo {
        rel: bool,
        x1: f32,
        y1: f32,
        x: f32,
        y: f32,
    },
    /// T/t
    SmoothQuadTo { rel: bool, x: f32, y: f32 },
    /// A/a
    Arc {
        rel: bool,
        rx: f32,
        ry: f32,
        rotation: f32,
        large_arc: bool,
        sweep: bool,
        x: f32,
        y: f32,
    },
    /// Z/z
    Close,
}

impl Command {
    /// Emits this command as a statement calling the matching method on a
    /// `symbols-core` path builder, e.g. `p.curve_to_relative(...);`.
    pub fn builder_call(&self, receiver: &str) -> String {
        match *self {
            Command::MoveTo { rel, x, y } => call(receiver, "move_to", rel, &[x, y]),
            Command::LineTo { rel, x, y } => call(receiver, "line_to", rel, &[x, y]),
            Command::HorizontalTo { rel, x } => call(receiver, "horizontal_line_to", rel, &[x]),
            Command::VerticalTo { rel, y } => call(receiver, "vertical_line_to", rel, &[y]),
            Command::CurveTo {
                rel,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => call(receiver, "curve_to", rel, &[x1, y1, x2, y2, x, y]),
            Command::SmoothCurveTo { rel, x2, y2, x, y } => {
                call(receiver, "reflective_curve_to", rel, &[x2, y2, x, y])
            }
            Command::QuadTo { rel, x1, y1, x, y } => {
                call(receiver, "quad_to", rel, &[x1, y1, x, y])
            }
            Command::SmoothQuadTo { rel, x, y } => {
                call(receiver, "reflective_quad_to", rel, &[x, y])
            }
            Command::Arc {
                rel,
                rx,
                ry,
                rotation,
                large_arc,
                sweep,
                x,
                y,
            } => {
                format!(
                    "{receiver}.arc_to{}({}, {}, {}, {large_arc}, {sweep}, {}, {});",
                    relative_suffix(rel),
                    float(rx),
                    float(ry),
                    float(rotation),
                    float(x),
                    float(y),
                )
            }
            Command::Close => format!("{receiver}.close();"),
        }
    }
}

fn call(receiver: &str, method: &str, rel: bool, args: &[f32]) -> String {
    let args = args.iter().map(|&v| float(v)).collect::<Vec<_>>().join(", ");
    format!("{receiver}.{method}{}({args});", relative_suffix(rel))
}

fn relative_suffix(rel: bool) -> &'static str {
    if rel { "_relative" } else { "" }
}

/// Shortest round-trip representation of `v`, always a valid Rust float
/// literal (`24.0`, `12.5`).
pub fn float(v: f32) -> String {
    let mut buffer = ryu::Buffer::new();
    buffer.format(v).to_string()
}

/// Parse a path-data string into its command sequence.
pub fn parse_path_data(data: &str) -> Result<Vec<Command>, SymbolgenError> {
    PathParser::new(data).parse()
}

struct PathParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> PathParser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn parse(&mut self) -> Result<Vec<Command>, SymbolgenError> {
        let mut commands = Vec::new();
        let mut last_cmd: Option<char> = None;

        self.skip_separators();

        while !self.is_eof() {
            let cmd = if self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
                let c = self.bump().unwrap();
                last_cmd = Some(c);
                c
            } else {
                // Coordinates without a letter repeat the previous
                // command; after M/m the repeated command is L/l.
                match last_cmd {
                    Some('M') => 'L',
                    Some('m') => 'l',
                    Some(c) => c,
                    None => {
                        return Err(SymbolgenError::InvalidPath(
                            "expected a command letter".into(),
                        ));
                    }
                }
            };

            commands.push(self.parse_command(cmd)?);
            self.skip_separators();
        }

        Ok(commands)
    }

    fn parse_command(&mut self, cmd: char) -> Result<Command, SymbolgenError> {
        let rel = cmd.is_ascii_lowercase();

        match cmd.to_ascii_lowercase() {
            'm' => {
                let [x, y] = self.numbers()?;
                Ok(Command::MoveTo { rel, x, y })
            }
            'l' => {
                let [x, y] = self.numbers()?;
                Ok(Command::LineTo { rel, x, y })
            }
            'h' => {
                let [x] = self.numbers()?;
                Ok(Command::HorizontalTo { rel, x })
            }
            'v' => {
                let [y] = self.numbers()?;
                Ok(Command::VerticalTo { rel, y })
            }
            'c' => {
                let [x1, y1, x2, y2, x, y] = self.numbers()?;
                Ok(Command::CurveTo {
                    rel,
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                })
            }
            's' => {
                let [x2, y2, x, y] = self.numbers()?;
                Ok(Command::SmoothCurveTo { rel, x2, y2, x, y })
            }
            'q' => {
                let [x1, y1, x, y] = self.numbers()?;
                Ok(Command::QuadTo { rel, x1, y1, x, y })
            }
            't' => {
                let [x, y] = self.numbers()?;
                Ok(Command::SmoothQuadTo { rel, x, y })
            }
            'a' => {
                let [rx, ry, rotation] = self.numbers()?;
                let large_arc = self.flag()?;
                let sweep = self.flag()?;
                let [x, y] = self.numbers()?;
                Ok(Command::Arc {
                    rel,
                    rx,
                    ry,
                    rotation,
                    large_arc,
                    sweep,
                    x,
                    y,
                })
            }
            'z' => Ok(Command::Close),
            other => Err(SymbolgenError::InvalidPath(format!(
                "unknown command '{other}'"
            ))),
        }
    }

    fn numbers<const N: usize>(&mut self) -> Result<[f32; N], SymbolgenError> {
        let mut out = [0.0; N];
        for slot in &mut out {
            *slot = self.number()?;
        }
        Ok(out)
    }

    fn number(&mut self) -> Result<f32, SymbolgenError> {
        self.skip_separators();

        let start = self.pos;

        if matches!(self.peek(), Some('-') | Some('+')) {
            self.bump();
        }
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
        if self.peek() == Some('.') {
            self.bump();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.bump();
            }
        }
        if matches!(self.peek(), Some('e') | Some('E')) {
            self.bump();
            if matches!(self.peek(), Some('-') | Some('+')) {
                self.bump();
            }
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.bump();
            }
        }

        let text = &self.input[start..self.pos];
        text.parse().map_err(|_| {
            SymbolgenError::InvalidPath(if text.is_empty() {
                "expected a number".into()
            } else {
                format!("invalid number '{text}'")
            })
        })
    }

    /// Arc flags are single digits and may run together with the next
    /// number, so they are not parsed as full numbers.
    fn flag(&mut self) -> Result<bool, SymbolgenError> {
        self.skip_separators();
        match self.bump() {
            Some('0') => Ok(false),
            Some('1') => Ok(true),
            Some(c) => Err(SymbolgenError::InvalidPath(format!(
                "expected an arc flag, got '{c}'"
            ))),
            None => Err(SymbolgenError::InvalidPath("expected an arc flag".into())),
        }
    }

    fn skip_separators(&mut self) {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_whitespace() || c == ',')
        {
            self.bump();
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }
}
