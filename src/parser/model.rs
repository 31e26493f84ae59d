//! `Version` and `Model` top-level handlers (`spec.md` §4.4).

use crate::error::SyntaxError;
use crate::scanner::Scanner;
use crate::scene::Scene;
use crate::value::{read_object, ObjectPrefix};

/// Reads a `Version { FormatVersion <n>, }` block.
pub fn read_version(scanner: &mut Scanner, scene: &mut Scene) -> Result<(), SyntaxError> {
    let (_, body) = read_object(scanner)?;
    if let Some(version) = body.get("FormatVersion").and_then(|v| v.as_i64()) {
        scene.version = version as u32;
    }
    Ok(())
}

/// Reads a `Model "Name" { ... }` block into `Scene::info`.
pub fn read_model(scanner: &mut Scanner, scene: &mut Scene) -> Result<(), SyntaxError> {
    let (prefix, body) = read_object(scanner)?;
    if let Some(ObjectPrefix::Name(name)) = prefix {
        scene.info.name = name;
    }
    if let Some(blend_time) = body.get("BlendTime").and_then(|v| v.as_i64()) {
        scene.info.blend_time = blend_time as u32;
    }
    if let Some(extent) = body.get("MinimumExtent").and_then(|v| v.as_vec3()) {
        scene.info.minimum_extent = extent;
    }
    if let Some(extent) = body.get("MaximumExtent").and_then(|v| v.as_vec3()) {
        scene.info.maximum_extent = extent;
    }
    if let Some(radius) = body.get("BoundsRadius").and_then(|v| v.as_f32()) {
        scene.info.bounds_radius = radius;
    }
    Ok(())
}
