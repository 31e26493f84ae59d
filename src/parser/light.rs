//! The `Light` top-level handler (`spec.md` §4.4).

use crate::error::SyntaxError;
use crate::flags::{LightType, NodeType};
use crate::node::{Light, Node, NodeCommon};
use crate::parser::nodes::{read_common_body, read_name_prefix};
use crate::scanner::Scanner;
use crate::scene::Scene;
use crate::track::read_animatable_float;

/// Reads a `Light "Name" { ... }` block. `Color` and `AmbColor` are
/// BGR-normalized (`spec.md` §4.4, "Color normalization").
pub fn read_light(scanner: &mut Scanner, scene: &mut Scene) -> Result<(), SyntaxError> {
    let name = read_name_prefix(scanner)?;
    let mut common = NodeCommon::new(name, 0, NodeType::LIGHT);
    let mut light_type = LightType::default();
    let mut color = None;
    let mut amb_color = None;
    let mut intensity = None;
    let mut amb_intensity = None;
    let mut attenuation_start = None;
    let mut attenuation_end = None;

    read_common_body(scanner, &mut common, |scanner, is_static, prop| {
        if let Some(kind) = LightType::from_keyword(prop) {
            if !is_static {
                light_type = kind;
                return Ok(true);
            }
        }
        match prop {
            "Color" => {
                let mut track = crate::track::read_animatable_vec3(scanner, is_static)?;
                track.normalize_color();
                color = Some(track);
            }
            "AmbColor" => {
                let mut track = crate::track::read_animatable_vec3(scanner, is_static)?;
                track.normalize_color();
                amb_color = Some(track);
            }
            "Intensity" => intensity = Some(read_animatable_float(scanner, is_static)?),
            "AmbIntensity" => amb_intensity = Some(read_animatable_float(scanner, is_static)?),
            "AttenuationStart" => attenuation_start = Some(read_animatable_float(scanner, is_static)?),
            "AttenuationEnd" => attenuation_end = Some(read_animatable_float(scanner, is_static)?),
            _ => return Ok(false),
        }
        Ok(true)
    })?;

    let node = Light {
        common,
        light_type,
        color,
        amb_color,
        intensity,
        amb_intensity,
        attenuation_start,
        attenuation_end,
    };
    let index = scene.nodes.len();
    scene.nodes.push(Node::Light(node));
    scene.lights.push(index);
    Ok(())
}
