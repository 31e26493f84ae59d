//! The `Camera` top-level handler (`spec.md` §4.4).

use crate::error::SyntaxError;
use crate::parser::nodes::read_name_prefix;
use crate::scanner::Scanner;
use crate::scene::{Camera, Scene};
use crate::track::{read_animatable_float, read_animatable_vec3};
use crate::value;

/// Reads a `Camera "Name" { ... }` block. `Rotation` is arity-1
/// (roll-only), preserved exactly as the source declares it
/// (`spec.md` §9 open question 3) even though every other rotation
/// channel in this format is a quaternion.
pub fn read_camera(scanner: &mut Scanner, scene: &mut Scene) -> Result<(), SyntaxError> {
    let name = read_name_prefix(scanner)?;
    let mut camera = Camera {
        name,
        position: [0.0; 3],
        field_of_view: 0.0,
        near_clip: 0.0,
        far_clip: 0.0,
        target_position: None,
        target_translation: None,
        translation: None,
        rotation: None,
    };

    scanner.expect_symbol('{')?;
    loop {
        if scanner.maybe_symbol('}') {
            break;
        }
        let kw = scanner
            .keyword()
            .ok_or_else(|| SyntaxError::expected_keyword(scanner.offset()))?;
        match kw.as_str() {
            "Position" => camera.position = value::read_vec3(scanner)?,
            "FieldOfView" => camera.field_of_view = scanner.number()? as f32,
            "NearClip" => camera.near_clip = scanner.number()? as f32,
            "FarClip" => camera.far_clip = scanner.number()? as f32,
            "Translation" => camera.translation = Some(read_animatable_vec3(scanner, false)?),
            "Rotation" => camera.rotation = Some(read_animatable_float(scanner, false)?),
            "Target" => read_target(scanner, &mut camera)?,
            _ => {
                value::read_value(scanner)?;
            }
        }
        scanner.maybe_comma();
    }
    scene.cameras.push(camera);
    Ok(())
}

fn read_target(scanner: &mut Scanner, camera: &mut Camera) -> Result<(), SyntaxError> {
    scanner.expect_symbol('{')?;
    loop {
        if scanner.maybe_symbol('}') {
            break;
        }
        let kw = scanner
            .keyword()
            .ok_or_else(|| SyntaxError::expected_keyword(scanner.offset()))?;
        match kw.as_str() {
            "Position" => camera.target_position = Some(value::read_vec3(scanner)?),
            "Translation" => camera.target_translation = Some(read_animatable_vec3(scanner, false)?),
            _ => return Err(SyntaxError::unknown_keyword(scanner.offset(), kw)),
        }
        scanner.maybe_comma();
    }
    Ok(())
}
