//! The parsed scene-description tree the builder consumes.
//!
//! The textual syntax is owned by an external parser; this crate only sees
//! the attribute tree it produces: a `world` element containing `window`,
//! `camera` and recursive `group` elements. [`Element`] is that tree shape,
//! with typed attribute accessors that default missing or malformed values
//! to zero/identity so a sloppy document still renders something.

use std::collections::HashMap;

use cgmath::Vector3;
use log::warn;

/// One element of the parsed description: a name, an attribute map and
/// ordered child elements.
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub name: String,
    pub attributes: HashMap<String, String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Numeric attribute with a default for missing values. A present but
    /// unparsable value also falls back to the default, with a warning, so a
    /// malformed-but-parseable document still renders.
    pub fn attribute_f32(&self, key: &str, default: f32) -> f32 {
        match self.attribute(key) {
            None => default,
            Some(value) => value.parse().unwrap_or_else(|_| {
                warn!(
                    "attribute {}={:?} on <{}> is not a number, using {}",
                    key, value, self.name, default
                );
                default
            }),
        }
    }

    pub fn attribute_u32(&self, key: &str, default: u32) -> u32 {
        match self.attribute(key) {
            None => default,
            Some(value) => value.parse().unwrap_or_else(|_| {
                warn!(
                    "attribute {}={:?} on <{}> is not a number, using {}",
                    key, value, self.name, default
                );
                default
            }),
        }
    }

    pub fn attribute_bool(&self, key: &str, default: bool) -> bool {
        match self.attribute(key) {
            None => default,
            Some("true") | Some("True") | Some("1") => true,
            Some("false") | Some("False") | Some("0") => false,
            Some(value) => {
                warn!(
                    "attribute {}={:?} on <{}> is not a boolean, using {}",
                    key, value, self.name, default
                );
                default
            }
        }
    }

    /// The x/y/z attribute triple, each component defaulting to `default`.
    pub fn xyz(&self, default: f32) -> Vector3<f32> {
        Vector3::new(
            self.attribute_f32("x", default),
            self.attribute_f32("y", default),
            self.attribute_f32("z", default),
        )
    }

    /// First child with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// All children with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |child| child.name == name)
    }
}

/// Window attributes of a `world` description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Camera attributes of a `world` description. The camera controller itself
/// lives with the host application; the scene only carries the settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    pub position: Vector3<f32>,
    pub look_at: Vector3<f32>,
    pub up: Vector3<f32>,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 5.0),
            look_at: Vector3::new(0.0, 0.0, 0.0),
            up: Vector3::unit_y(),
        }
    }
}

/// Window and camera settings read from a `world` element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WorldSettings {
    pub window: WindowSettings,
    pub camera: CameraSettings,
}

impl WorldSettings {
    pub fn from_world(world: &Element) -> Self {
        let mut settings = Self::default();
        if let Some(window) = world.child("window") {
            settings.window.width = window.attribute_u32("width", settings.window.width);
            settings.window.height = window.attribute_u32("height", settings.window.height);
        }
        if let Some(camera) = world.child("camera") {
            if let Some(position) = camera.child("position") {
                settings.camera.position = position.xyz(0.0);
            }
            if let Some(look_at) = camera.child("lookAt") {
                settings.camera.look_at = look_at.xyz(0.0);
            }
            if let Some(up) = camera.child("up") {
                settings.camera.up = up.xyz(0.0);
            }
        }
        settings
    }
}
