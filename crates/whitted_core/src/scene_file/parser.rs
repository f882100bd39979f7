//! Scene description parser.
//!
//! The format is a flat list of blocks, one object per block:
//!
//! ```text
//! # comment
//! light    { px py pz  ir ig ib }
//! sphere   { cx cy cz  radius  material }
//! triangle { x0 y0 z0  x1 y1 z1  x2 y2 z2  material }
//! plane    { nx ny nz  px py pz  material }
//! ```
//!
//! where `material` is `dr dg db  sr sg sb  phong  reflectance`. Blocks may
//! span lines and braces do not need surrounding whitespace.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use whitted_math::{Interval, Vec3};

use crate::scene::{Light, Material, Plane, Primitive, Scene, Sphere, Triangle};

/// Number of fields in a material tail.
const MATERIAL_FIELDS: usize = 8;

/// Where a block starts, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSite {
    /// 1-based position of the block in the file
    pub index: usize,
    pub keyword: &'static str,
    /// 1-based line of the keyword
    pub line: usize,
}

impl fmt::Display for BlockSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} block #{} (line {})", self.keyword, self.index, self.line)
    }
}

/// Errors that can occur while parsing a scene description.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("line {line}: unknown object keyword `{keyword}` (expected light, sphere, triangle or plane)")]
    UnknownKeyword { line: usize, keyword: String },

    #[error("{site}: expected `{{` after the keyword")]
    ExpectedOpenBrace { site: BlockSite },

    #[error("{site}: invalid number `{token}` on line {line}")]
    InvalidNumber {
        site: BlockSite,
        token: String,
        line: usize,
    },

    #[error("{site}: expected {expected} fields, found {found}")]
    FieldCount {
        site: BlockSite,
        expected: usize,
        found: usize,
    },

    #[error("{site}: {reason}")]
    Degenerate { site: BlockSite, reason: &'static str },

    #[error("{site}: block is never closed")]
    UnclosedBlock { site: BlockSite },

    #[error("line {line}: `}}` without an open block")]
    UnexpectedCloseBrace { line: usize },
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// The four object keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Light,
    Sphere,
    Triangle,
    Plane,
}

impl ObjectKind {
    pub fn keyword(self) -> &'static str {
        match self {
            ObjectKind::Light => "light",
            ObjectKind::Sphere => "sphere",
            ObjectKind::Triangle => "triangle",
            ObjectKind::Plane => "plane",
        }
    }

    /// Fixed number of numeric fields in a block of this kind.
    pub fn field_count(self) -> usize {
        match self {
            ObjectKind::Light => 6,
            ObjectKind::Sphere => 4 + MATERIAL_FIELDS,
            ObjectKind::Triangle => 9 + MATERIAL_FIELDS,
            ObjectKind::Plane => 6 + MATERIAL_FIELDS,
        }
    }
}

impl FromStr for ObjectKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ObjectKind::Light),
            "sphere" => Ok(ObjectKind::Sphere),
            "triangle" => Ok(ObjectKind::Triangle),
            "plane" => Ok(ObjectKind::Plane),
            _ => Err(()),
        }
    }
}

/// A whitespace-separated token and the line it came from.
#[derive(Debug)]
struct Token<'a> {
    text: &'a str,
    line: usize,
}

/// Split the input into tokens, dropping comments and treating braces as
/// standalone tokens.
fn tokenize(content: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();

    for (i, raw) in content.lines().enumerate() {
        let line = i + 1;
        let code = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        };

        for word in code.split_whitespace() {
            let mut rest = word;
            while !rest.is_empty() {
                match rest.find(|c: char| c == '{' || c == '}') {
                    Some(0) => {
                        tokens.push(Token { text: &rest[..1], line });
                        rest = &rest[1..];
                    }
                    Some(pos) => {
                        tokens.push(Token { text: &rest[..pos], line });
                        rest = &rest[pos..];
                    }
                    None => {
                        tokens.push(Token { text: rest, line });
                        rest = "";
                    }
                }
            }
        }
    }

    tokens
}

/// Parse a scene description.
pub fn parse_scene(content: &str) -> ParseResult<Scene> {
    let mut tokens = tokenize(content).into_iter();
    let mut scene = Scene::new();
    let mut index = 0;

    while let Some(token) = tokens.next() {
        if token.text == "}" {
            return Err(ParseError::UnexpectedCloseBrace { line: token.line });
        }

        let kind: ObjectKind = token.text.parse().map_err(|_| ParseError::UnknownKeyword {
            line: token.line,
            keyword: token.text.to_string(),
        })?;

        index += 1;
        let site = BlockSite {
            index,
            keyword: kind.keyword(),
            line: token.line,
        };

        match tokens.next() {
            Some(open) if open.text == "{" => {}
            _ => return Err(ParseError::ExpectedOpenBrace { site }),
        }

        let mut fields = Vec::with_capacity(kind.field_count());
        loop {
            let token = tokens.next().ok_or(ParseError::UnclosedBlock { site })?;
            if token.text == "}" {
                break;
            }
            fields.push(parse_number(&token, site)?);
        }

        if fields.len() != kind.field_count() {
            return Err(ParseError::FieldCount {
                site,
                expected: kind.field_count(),
                found: fields.len(),
            });
        }

        build_object(&mut scene, kind, &fields, site)?;
    }

    log::debug!(
        "Parsed {} blocks: {} primitives, {} lights",
        index,
        scene.primitive_count(),
        scene.light_count()
    );

    Ok(scene)
}

impl FromStr for Scene {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_scene(s)
    }
}

fn parse_number(token: &Token<'_>, site: BlockSite) -> ParseResult<f32> {
    token
        .text
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::InvalidNumber {
            site,
            token: token.text.to_string(),
            line: token.line,
        })
}

#[inline]
fn vec3(f: &[f32]) -> Vec3 {
    Vec3::new(f[0], f[1], f[2])
}

fn material(f: &[f32], site: BlockSite) -> Material {
    let reflectance = f[7];
    if !Interval::UNIT.contains(reflectance) {
        log::warn!("{}: reflectance {} clamped to [0, 1]", site, reflectance);
    }
    Material::new(vec3(&f[0..3]), vec3(&f[3..6]), f[6], reflectance)
}

/// Turn a block's fields (already count-checked) into a scene object.
fn build_object(scene: &mut Scene, kind: ObjectKind, f: &[f32], site: BlockSite) -> ParseResult<()> {
    match kind {
        ObjectKind::Light => {
            scene.add_light(Light::new(vec3(&f[0..3]), vec3(&f[3..6])));
        }
        ObjectKind::Sphere => {
            let radius = f[3];
            if radius <= 0.0 {
                log::warn!("{}: sphere radius {} is not positive", site, radius);
            }
            let sphere = Sphere::new(vec3(&f[0..3]), radius);
            scene.add_primitive(Primitive::new(sphere, material(&f[4..], site)));
        }
        ObjectKind::Triangle => {
            let triangle = Triangle::new(vec3(&f[0..3]), vec3(&f[3..6]), vec3(&f[6..9]));
            if triangle.is_degenerate() {
                log::warn!("{}: triangle has zero area and will never be hit", site);
            }
            scene.add_primitive(Primitive::new(triangle, material(&f[9..], site)));
        }
        ObjectKind::Plane => {
            let normal = vec3(&f[0..3]);
            if normal.length_squared() <= f32::EPSILON {
                return Err(ParseError::Degenerate {
                    site,
                    reason: "plane normal has zero length",
                });
            }
            let plane = Plane::new(normal, vec3(&f[3..6]));
            scene.add_primitive(Primitive::new(plane, material(&f[6..], site)));
        }
    }

    Ok(())
}
