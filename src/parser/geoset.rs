//! The `Geoset` and `GeosetAnim` top-level handlers (`spec.md` §4.4).

use crate::error::SyntaxError;
use crate::scanner::Scanner;
use crate::scene::{Geoset, GeosetAnim, GeosetSequenceAnim, Scene};
use crate::track::{read_animatable_float, read_animatable_vec3};
use crate::value;

/// Reads a `Geoset { ... }` block.
pub fn read_geoset(scanner: &mut Scanner, scene: &mut Scene) -> Result<(), SyntaxError> {
    let mut geoset = Geoset::default();
    scanner.expect_symbol('{')?;
    loop {
        if scanner.maybe_symbol('}') {
            break;
        }
        let kw = scanner
            .keyword()
            .ok_or_else(|| SyntaxError::expected_keyword(scanner.offset()))?;
        match kw.as_str() {
            "Vertices" => geoset.vertices = read_dense_block(scanner, 3)?,
            "Normals" => geoset.normals = read_dense_block(scanner, 3)?,
            "TVertices" => geoset.tvertices.push(read_dense_block(scanner, 2)?),
            "VertexGroup" => geoset.vertex_group = read_byte_array(scanner)?,
            "Faces" => geoset.faces = read_faces(scanner)?,
            "Groups" => {
                let (total, groups) = read_groups(scanner)?;
                geoset.total_groups_count = total;
                geoset.groups = groups;
            }
            "MinimumExtent" => geoset.minimum_extent = value::read_vec3(scanner)?,
            "MaximumExtent" => geoset.maximum_extent = value::read_vec3(scanner)?,
            "BoundsRadius" => geoset.bounds_radius = scanner.number()? as f32,
            "MaterialID" => geoset.material_id = scanner.number()? as i64,
            "SelectionGroup" => geoset.selection_group = scanner.number()? as i64,
            "Unselectable" => geoset.unselectable = true,
            "Anim" => geoset.anims.push(read_geoset_sequence_anim(scanner)?),
            _ => {
                value::read_value(scanner)?;
            }
        }
        scanner.maybe_comma();
    }
    scene.geosets.push(geoset);
    Ok(())
}

/// Reads `<count> { (arrN ,)* count }`, flattening each element into a
/// single growable buffer. Used for `Vertices`, `Normals`, and each
/// `TVertices` buffer.
fn read_dense_block(scanner: &mut Scanner, arity: usize) -> Result<Vec<f32>, SyntaxError> {
    let _hint_count = scanner.number()?;
    scanner.expect_symbol('{')?;
    let mut flat = Vec::new();
    loop {
        if scanner.maybe_symbol('}') {
            break;
        }
        let values = scanner.array_or_scalar()?;
        for i in 0..arity {
            flat.push(values.get(i).copied().unwrap_or(0.0) as f32);
        }
        scanner.maybe_comma();
    }
    Ok(flat)
}

/// Reads `VertexGroup`'s body: unlike `Vertices`/`Normals`/`TVertices`,
/// it carries no leading hint count — its length is implied by
/// `Vertices.length / 3` (`spec.md` §3, "Geoset").
fn read_byte_array(scanner: &mut Scanner) -> Result<Vec<u8>, SyntaxError> {
    let values = scanner.array()?.unwrap_or_default();
    Ok(values.into_iter().map(|v| v as u8).collect())
}

fn read_faces(scanner: &mut Scanner) -> Result<Vec<u16>, SyntaxError> {
    let _groups = scanner.number()?;
    let _index_count = scanner.number()?;
    scanner.expect_symbol('{')?;
    let kw = scanner
        .keyword()
        .ok_or_else(|| SyntaxError::expected_keyword(scanner.offset()))?;
    if kw != "Triangles" {
        return Err(SyntaxError::unknown_keyword(scanner.offset(), kw));
    }
    let values = scanner.array()?.unwrap_or_default();
    scanner.maybe_comma();
    scanner.expect_symbol('}')?;
    Ok(values.into_iter().map(|v| v as u16).collect())
}

fn read_groups(scanner: &mut Scanner) -> Result<(u32, Vec<Vec<i64>>), SyntaxError> {
    let group_count = scanner.number()? as usize;
    let total = scanner.number()? as u32;
    scanner.expect_symbol('{')?;
    let mut groups = Vec::with_capacity(group_count);
    loop {
        if scanner.maybe_symbol('}') {
            break;
        }
        let kw = scanner
            .keyword()
            .ok_or_else(|| SyntaxError::expected_keyword(scanner.offset()))?;
        if kw != "Matrices" {
            return Err(SyntaxError::unknown_keyword(scanner.offset(), kw));
        }
        let values = scanner.array()?.unwrap_or_default();
        groups.push(values.into_iter().map(|v| v as i64).collect());
        scanner.maybe_comma();
    }
    Ok((total, groups))
}

fn read_geoset_sequence_anim(scanner: &mut Scanner) -> Result<GeosetSequenceAnim, SyntaxError> {
    let mut anim = GeosetSequenceAnim::default();
    scanner.expect_symbol('{')?;
    loop {
        if scanner.maybe_symbol('}') {
            break;
        }
        let kw = scanner
            .keyword()
            .ok_or_else(|| SyntaxError::expected_keyword(scanner.offset()))?;
        match kw.as_str() {
            "Alpha" => anim.alpha = scanner.number()? as f32,
            "Color" => anim.color = Some(value::read_vec3(scanner)?),
            "MinimumExtent" => anim.minimum_extent = Some(value::read_vec3(scanner)?),
            "MaximumExtent" => anim.maximum_extent = Some(value::read_vec3(scanner)?),
            "BoundsRadius" => anim.bounds_radius = Some(scanner.number()? as f32),
            _ => {
                value::read_value(scanner)?;
            }
        }
        scanner.maybe_comma();
    }
    Ok(anim)
}

/// Reads a `GeosetAnim { ... }` block. `Color` is BGR-normalized
/// (`spec.md` §4.4, "Color normalization").
pub fn read_geoset_anim(scanner: &mut Scanner, scene: &mut Scene) -> Result<(), SyntaxError> {
    let mut anim = GeosetAnim::default();
    scanner.expect_symbol('{')?;
    loop {
        if scanner.maybe_symbol('}') {
            break;
        }
        let kw = scanner
            .keyword()
            .ok_or_else(|| SyntaxError::expected_keyword(scanner.offset()))?;
        let (is_static, prop) = crate::parser::nodes::resolve_static(scanner, kw)?;
        match prop.as_str() {
            "GeosetId" => anim.geoset_id = scanner.number()? as i64,
            "Alpha" => anim.alpha = read_animatable_float(scanner, is_static)?,
            "Color" => {
                let mut color = read_animatable_vec3(scanner, is_static)?;
                color.normalize_color();
                anim.color = color;
            }
            "DropShadow" if !is_static => anim.flags |= crate::flags::GeosetAnimFlags::DROP_SHADOW,
            _ => {
                value::read_value(scanner)?;
            }
        }
        scanner.maybe_comma();
    }
    scene.geoset_anims.push(anim);
    Ok(())
}
