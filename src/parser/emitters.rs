//! The legacy `ParticleEmitter`, `ParticleEmitter2`, and
//! `RibbonEmitter` top-level handlers (`spec.md` §4.4).

use crate::error::SyntaxError;
use crate::flags::{
    NodeType, ParticleEmitter2FilterMode, ParticleEmitter2Flags, ParticleEmitter2FramesFlags, ParticleEmitterFlags,
};
use crate::node::{Node, NodeCommon, ParticleEmitter2, RibbonEmitter};
use crate::parser::nodes::{read_common_body, read_name_prefix, resolve_static};
use crate::scanner::Scanner;
use crate::scene::{ParticleEmitter, Scene};
use crate::track::{read_animatable_float, read_animatable_int};
use crate::value;

/// Reads a legacy `ParticleEmitter "Name" { ... }` block. Not a node
/// (`spec.md` §3 invariant, "Non-node records").
///
/// `LifeSpan` and `InitVelocity` may appear both at the top level and
/// inside a nested `Particle { ... }` block; per the documented
/// last-write-wins resolution (`spec.md` §9 open question), whichever
/// occurs later in source order simply overwrites the field.
pub fn read_particle_emitter(scanner: &mut Scanner, scene: &mut Scene) -> Result<(), SyntaxError> {
    let name = read_name_prefix(scanner)?;
    let mut emitter = ParticleEmitter {
        name,
        object_id: 0,
        parent: None,
        emission_rate: None,
        gravity: None,
        longitude: None,
        latitude: None,
        visibility: None,
        translation: None,
        scaling: None,
        rotation: None,
        life_span: None,
        init_velocity: None,
        path: None,
        flags: ParticleEmitterFlags::empty(),
    };

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
            "ObjectId" => emitter.object_id = scanner.number()? as i64,
            "Parent" => emitter.parent = Some(scanner.number()? as i64),
            "EmissionRate" => emitter.emission_rate = Some(read_animatable_float(scanner, is_static)?),
            "Gravity" => emitter.gravity = Some(read_animatable_float(scanner, is_static)?),
            "Longitude" => emitter.longitude = Some(read_animatable_float(scanner, is_static)?),
            "Latitude" => emitter.latitude = Some(read_animatable_float(scanner, is_static)?),
            "Visibility" => emitter.visibility = Some(read_animatable_float(scanner, is_static)?),
            "Translation" => emitter.translation = Some(crate::track::read_animatable_vec3(scanner, is_static)?),
            "Scaling" => emitter.scaling = Some(crate::track::read_animatable_vec3(scanner, is_static)?),
            "Rotation" => emitter.rotation = Some(crate::track::read_animatable_vec4(scanner, is_static)?),
            "EmitterUsesMDL" if !is_static => emitter.flags |= ParticleEmitterFlags::EMITTER_USES_MDL,
            "EmitterUsesTGA" if !is_static => emitter.flags |= ParticleEmitterFlags::EMITTER_USES_TGA,
            "LifeSpan" => emitter.life_span = Some(scanner.number()? as f32),
            "InitVelocity" => emitter.init_velocity = Some(scanner.number()? as f32),
            "Particle" => read_particle_block(scanner, &mut emitter)?,
            _ => {
                value::read_value(scanner)?;
            }
        }
        scanner.maybe_comma();
    }
    scene.particle_emitters.push(emitter);
    Ok(())
}

fn read_particle_block(scanner: &mut Scanner, emitter: &mut ParticleEmitter) -> Result<(), SyntaxError> {
    scanner.expect_symbol('{')?;
    loop {
        if scanner.maybe_symbol('}') {
            break;
        }
        let kw = scanner
            .keyword()
            .ok_or_else(|| SyntaxError::expected_keyword(scanner.offset()))?;
        match kw.as_str() {
            "LifeSpan" => emitter.life_span = Some(scanner.number()? as f32),
            "InitVelocity" => emitter.init_velocity = Some(scanner.number()? as f32),
            "Path" => {
                emitter.path = Some(
                    scanner
                        .quoted_string()
                        .ok_or_else(|| SyntaxError::expected_symbol(scanner.offset(), '"'))?,
                );
            }
            _ => {
                value::read_value(scanner)?;
            }
        }
        scanner.maybe_comma();
    }
    Ok(())
}

fn read_u32_triple(scanner: &mut Scanner) -> Result<[u32; 3], SyntaxError> {
    let values = scanner.array_or_scalar()?;
    Ok([
        values.first().copied().unwrap_or(0.0) as u32,
        values.get(1).copied().unwrap_or(0.0) as u32,
        values.get(2).copied().unwrap_or(0.0) as u32,
    ])
}

/// Reads a `ParticleEmitter2 "Name" { ... }` block.
pub fn read_particle_emitter2(scanner: &mut Scanner, scene: &mut Scene) -> Result<(), SyntaxError> {
    let name = read_name_prefix(scanner)?;
    let mut common = NodeCommon::new(name, 0, NodeType::PARTICLE_EMITTER);
    let mut flags = ParticleEmitter2Flags::empty();
    let mut frame_flags = ParticleEmitter2FramesFlags::empty();
    let mut filter_mode = ParticleEmitter2FilterMode::default();
    let mut segment_color = Vec::new();
    let mut alpha = [255u8; 3];
    let mut particle_scaling = [1.0f32; 3];
    let mut life_span_uv_anim = [0u32; 3];
    let mut decay_uv_anim = [0u32; 3];
    let mut tail_uv_anim = [0u32; 3];
    let mut tail_decay_uv_anim = [0u32; 3];
    let mut squirt = false;
    let mut speed = None;
    let mut latitude = None;
    let mut emission_rate = None;
    let mut width = None;
    let mut length = None;
    let mut gravity = None;
    let mut variation = None;

    read_common_body(scanner, &mut common, |scanner, is_static, prop| {
        match prop {
            "Speed" => speed = Some(read_animatable_float(scanner, is_static)?),
            "Latitude" => latitude = Some(read_animatable_float(scanner, is_static)?),
            "EmissionRate" => emission_rate = Some(read_animatable_float(scanner, is_static)?),
            "Width" => width = Some(read_animatable_float(scanner, is_static)?),
            "Length" => length = Some(read_animatable_float(scanner, is_static)?),
            "Gravity" => gravity = Some(read_animatable_float(scanner, is_static)?),
            "Variation" => variation = Some(read_animatable_float(scanner, is_static)?),
            "Both" if !is_static => {
                frame_flags |= ParticleEmitter2FramesFlags::HEAD | ParticleEmitter2FramesFlags::TAIL
            }
            "Head" if !is_static => frame_flags |= ParticleEmitter2FramesFlags::HEAD,
            "Tail" if !is_static => frame_flags |= ParticleEmitter2FramesFlags::TAIL,
            "SortPrimsFarZ" if !is_static => flags |= ParticleEmitter2Flags::SORT_PRIMS_FAR_Z,
            "Unshaded" if !is_static => flags |= ParticleEmitter2Flags::UNSHADED,
            "LineEmitter" if !is_static => flags |= ParticleEmitter2Flags::LINE_EMITTER,
            "Unfogged" if !is_static => flags |= ParticleEmitter2Flags::UNFOGGED,
            "ModelSpace" if !is_static => flags |= ParticleEmitter2Flags::MODEL_SPACE,
            "XYQuad" if !is_static => flags |= ParticleEmitter2Flags::XY_QUAD,
            "Squirt" if !is_static => squirt = true,
            "FilterMode" => {
                let value = scanner
                    .keyword()
                    .ok_or_else(|| SyntaxError::expected_keyword(scanner.offset()))?;
                filter_mode = ParticleEmitter2FilterMode::from_keyword(&value)
                    .ok_or_else(|| SyntaxError::unknown_keyword(scanner.offset(), value))?;
            }
            "SegmentColor" => {
                scanner.expect_symbol('{')?;
                loop {
                    if scanner.maybe_symbol('}') {
                        break;
                    }
                    let color_kw = scanner
                        .keyword()
                        .ok_or_else(|| SyntaxError::expected_keyword(scanner.offset()))?;
                    if color_kw != "Color" {
                        return Err(SyntaxError::unknown_keyword(scanner.offset(), color_kw));
                    }
                    let mut triple = value::read_vec3(scanner)?;
                    triple.swap(0, 2);
                    segment_color.push(triple);
                    scanner.maybe_comma();
                }
            }
            "Alpha" => {
                let values = scanner.array_or_scalar()?;
                alpha = [
                    values.first().copied().unwrap_or(0.0) as u8,
                    values.get(1).copied().unwrap_or(0.0) as u8,
                    values.get(2).copied().unwrap_or(0.0) as u8,
                ];
            }
            "ParticleScaling" => particle_scaling = value::read_vec3(scanner)?,
            "LifeSpanUVAnim" => life_span_uv_anim = read_u32_triple(scanner)?,
            "DecayUVAnim" => decay_uv_anim = read_u32_triple(scanner)?,
            "TailUVAnim" => tail_uv_anim = read_u32_triple(scanner)?,
            "TailDecayUVAnim" => tail_decay_uv_anim = read_u32_triple(scanner)?,
            _ => return Ok(false),
        }
        Ok(true)
    })?;

    let node = ParticleEmitter2 {
        common,
        flags,
        frame_flags,
        filter_mode,
        segment_color,
        alpha,
        particle_scaling,
        life_span_uv_anim,
        decay_uv_anim,
        tail_uv_anim,
        tail_decay_uv_anim,
        squirt,
        speed,
        latitude,
        emission_rate,
        width,
        length,
        gravity,
        variation,
    };
    let index = scene.nodes.len();
    scene.nodes.push(Node::ParticleEmitter2(node));
    scene.particle_emitters2.push(index);
    Ok(())
}

/// Reads a `RibbonEmitter "Name" { ... }` block.
pub fn read_ribbon_emitter(scanner: &mut Scanner, scene: &mut Scene) -> Result<(), SyntaxError> {
    let name = read_name_prefix(scanner)?;
    let mut common = NodeCommon::new(name, 0, NodeType::RIBBON_EMITTER);
    let mut height_above = None;
    let mut height_below = None;
    let mut alpha = None;
    let mut color = None;
    let mut life_span = None;
    let mut texture_slot = None;
    let mut emission_rate = None;
    let mut rows = None;
    let mut columns = None;
    let mut material_id = None;
    let mut gravity = None;

    read_common_body(scanner, &mut common, |scanner, is_static, prop| {
        match prop {
            "HeightAbove" => height_above = Some(read_animatable_float(scanner, is_static)?),
            "HeightBelow" => height_below = Some(read_animatable_float(scanner, is_static)?),
            "Alpha" => alpha = Some(read_animatable_float(scanner, is_static)?),
            "Color" => {
                let mut triple = value::read_vec3(scanner)?;
                triple.swap(0, 2);
                color = Some(triple);
            }
            "LifeSpan" => life_span = Some(scanner.number()? as f32),
            "TextureSlot" => texture_slot = Some(read_animatable_int(scanner, is_static)?),
            "EmissionRate" => emission_rate = Some(scanner.number()? as f32),
            "Rows" => rows = Some(scanner.number()? as u32),
            "Columns" => columns = Some(scanner.number()? as u32),
            "MaterialID" => material_id = Some(scanner.number()? as i64),
            "Gravity" => gravity = Some(scanner.number()? as f32),
            _ => return Ok(false),
        }
        Ok(true)
    })?;

    let node = RibbonEmitter {
        common,
        height_above,
        height_below,
        alpha,
        color,
        life_span,
        texture_slot,
        emission_rate,
        rows,
        columns,
        material_id,
        gravity,
    };
    let index = scene.nodes.len();
    scene.nodes.push(Node::RibbonEmitter(node));
    scene.ribbon_emitters.push(index);
    Ok(())
}

