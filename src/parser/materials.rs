//! The `Materials` top-level handler (`spec.md` §4.4).
//!
//! A fixed-shape handler throughout (`spec.md` §4.6): any keyword
//! `Material`/`Layer` doesn't recognize is a syntax error, not a
//! loose extra.

use crate::error::SyntaxError;
use crate::flags::{FilterMode, LayerShading, MaterialRenderMode};
use crate::parser::nodes::resolve_static;
use crate::scanner::Scanner;
use crate::scene::{Layer, Material, Scene};
use crate::track::{read_animatable_float, read_animatable_int};

/// Reads a `Materials { Material { ... } ... }` block.
pub fn read_materials(scanner: &mut Scanner, scene: &mut Scene) -> Result<(), SyntaxError> {
    scanner.expect_symbol('{')?;
    loop {
        if scanner.maybe_symbol('}') {
            break;
        }
        let kw = scanner
            .keyword()
            .ok_or_else(|| SyntaxError::expected_keyword(scanner.offset()))?;
        if kw != "Material" {
            return Err(SyntaxError::unknown_keyword(scanner.offset(), kw));
        }
        scene.materials.push(read_material(scanner)?);
        scanner.maybe_comma();
    }
    Ok(())
}

fn read_material(scanner: &mut Scanner) -> Result<Material, SyntaxError> {
    let mut material = Material::default();
    scanner.expect_symbol('{')?;
    loop {
        if scanner.maybe_symbol('}') {
            break;
        }
        let kw = scanner
            .keyword()
            .ok_or_else(|| SyntaxError::expected_keyword(scanner.offset()))?;
        match kw.as_str() {
            "Layer" => material.layers.push(read_layer(scanner)?),
            "PriorityPlane" => material.priority_plane = Some(scanner.number()? as i64),
            "ConstantColor" => material.render_mode |= MaterialRenderMode::CONSTANT_COLOR,
            "SortPrimsFarZ" => material.render_mode |= MaterialRenderMode::SORT_PRIMS_FAR_Z,
            "FullResolution" => material.render_mode |= MaterialRenderMode::FULL_RESOLUTION,
            _ => return Err(SyntaxError::unknown_keyword(scanner.offset(), kw)),
        }
        scanner.maybe_comma();
    }
    Ok(material)
}

fn read_layer(scanner: &mut Scanner) -> Result<Layer, SyntaxError> {
    let mut layer = Layer::default();
    scanner.expect_symbol('{')?;
    loop {
        if scanner.maybe_symbol('}') {
            break;
        }
        let kw = scanner
            .keyword()
            .ok_or_else(|| SyntaxError::expected_keyword(scanner.offset()))?;
        let (is_static, prop) = resolve_static(scanner, kw)?;
        match prop.as_str() {
            "FilterMode" => {
                let value = scanner
                    .keyword()
                    .ok_or_else(|| SyntaxError::expected_keyword(scanner.offset()))?;
                layer.filter_mode = FilterMode::from_keyword(&value)
                    .ok_or_else(|| SyntaxError::unknown_keyword(scanner.offset(), value))?;
            }
            "Unshaded" if !is_static => layer.shading |= LayerShading::UNSHADED,
            "SphereEnvMap" if !is_static => layer.shading |= LayerShading::SPHERE_ENV_MAP,
            "TwoSided" if !is_static => layer.shading |= LayerShading::TWO_SIDED,
            "Unfogged" if !is_static => layer.shading |= LayerShading::UNFOGGED,
            "NoDepthTest" if !is_static => layer.shading |= LayerShading::NO_DEPTH_TEST,
            "NoDepthSet" if !is_static => layer.shading |= LayerShading::NO_DEPTH_SET,
            "TextureID" => layer.texture_id = read_animatable_int(scanner, is_static)?,
            "Alpha" => layer.alpha = read_animatable_float(scanner, is_static)?,
            "CoordId" => layer.coord_id = scanner.number()? as i64,
            "TVertexAnimId" => {
                let id = scanner.number()? as i64;
                layer.texture_anim_id = if id < 0 { None } else { Some(id) };
            }
            _ => return Err(SyntaxError::unknown_keyword(scanner.offset(), prop)),
        }
        scanner.maybe_comma();
    }
    Ok(layer)
}
