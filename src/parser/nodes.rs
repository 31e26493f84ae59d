//! Shared node-field reading, plus the `Bone`/`Helper`/`Attachment`,
//! `PivotPoints`, `EventObject`, `CollisionShape`, and
//! `GlobalSequences` handlers (`spec.md` §4.4).

use crate::error::SyntaxError;
use crate::flags::{CollisionShapeType, NodeFlags, NodeType};
use crate::node::{Attachment, Bone, CollisionShape, EventObject, Helper, Node, NodeCommon};
use crate::scanner::Scanner;
use crate::scene::Scene;
use crate::track::{read_animatable_float, read_animatable_vec3, read_animatable_vec4};

/// Reads the quoted-name prefix that precedes every node-kind block
/// body (`spec.md` §4.4 step 1).
pub(crate) fn read_name_prefix(scanner: &mut Scanner) -> Result<String, SyntaxError> {
    scanner
        .quoted_string()
        .ok_or_else(|| SyntaxError::expected_symbol(scanner.offset(), '"'))
}

/// Resolves an optional leading `static` marker. Returns whether it
/// was present, and the property keyword that follows (the keyword
/// itself, unchanged, when no marker was present).
pub(crate) fn resolve_static(scanner: &mut Scanner, keyword: String) -> Result<(bool, String), SyntaxError> {
    if keyword == "static" {
        let prop = scanner
            .keyword()
            .ok_or_else(|| SyntaxError::expected_keyword(scanner.offset()))?;
        Ok((true, prop))
    } else {
        Ok((false, keyword))
    }
}

/// Attempts to interpret `prop` as one of the fields every node kind
/// shares (`spec.md` §3, "Node"). Returns whether it was recognized;
/// callers fall back to their own record-specific dispatch, then to
/// loose-handler extras, when this returns `false`.
pub(crate) fn try_read_common_field(
    scanner: &mut Scanner,
    common: &mut NodeCommon,
    is_static: bool,
    prop: &str,
) -> Result<bool, SyntaxError> {
    match prop {
        "ObjectId" => common.object_id = scanner.number()? as i64,
        "Parent" => common.parent = Some(scanner.number()? as i64),
        "Translation" => common.translation = Some(read_animatable_vec3(scanner, is_static)?),
        "Rotation" => common.rotation = Some(read_animatable_vec4(scanner, is_static)?),
        "Scaling" => common.scaling = Some(read_animatable_vec3(scanner, is_static)?),
        "Visibility" => common.visibility = Some(read_animatable_float(scanner, is_static)?),
        "Billboarded" if !is_static => common.flags |= NodeFlags::BILLBOARDED,
        "BillboardedLockX" if !is_static => common.flags |= NodeFlags::BILLBOARDED_LOCK_X,
        "BillboardedLockY" if !is_static => common.flags |= NodeFlags::BILLBOARDED_LOCK_Y,
        "BillboardedLockZ" if !is_static => common.flags |= NodeFlags::BILLBOARDED_LOCK_Z,
        "CameraAnchored" if !is_static => common.flags |= NodeFlags::CAMERA_ANCHORED,
        "DontInherit" if !is_static => read_dont_inherit(scanner, common)?,
        _ => return Ok(false),
    }
    Ok(true)
}

fn read_dont_inherit(scanner: &mut Scanner, common: &mut NodeCommon) -> Result<(), SyntaxError> {
    scanner.expect_symbol('{')?;
    loop {
        if scanner.maybe_symbol('}') {
            break;
        }
        let inner = scanner
            .keyword()
            .ok_or_else(|| SyntaxError::expected_keyword(scanner.offset()))?;
        match inner.as_str() {
            "Translation" => common.flags |= NodeFlags::DONT_INHERIT_TRANSLATION,
            "Rotation" => common.flags |= NodeFlags::DONT_INHERIT_ROTATION,
            "Scaling" => common.flags |= NodeFlags::DONT_INHERIT_SCALING,
            _ => return Err(SyntaxError::unknown_keyword(scanner.offset(), inner)),
        }
        scanner.maybe_comma();
    }
    Ok(())
}

/// Reads a node-kind's `{ ... }` body, dispatching each key first to
/// the shared common-field reader, then to `extra` for record-specific
/// keys, and finally recording anything neither recognizes as a
/// number-valued extra (`spec.md` §4.6, "loose" handlers).
pub(crate) fn read_common_body<F>(
    scanner: &mut Scanner,
    common: &mut NodeCommon,
    mut extra: F,
) -> Result<(), SyntaxError>
where
    F: FnMut(&mut Scanner, bool, &str) -> Result<bool, SyntaxError>,
{
    scanner.expect_symbol('{')?;
    loop {
        if scanner.maybe_symbol('}') {
            break;
        }
        let kw = scanner
            .keyword()
            .ok_or_else(|| SyntaxError::expected_keyword(scanner.offset()))?;
        let (is_static, prop) = resolve_static(scanner, kw)?;
        if try_read_common_field(scanner, common, is_static, &prop)? {
            // handled
        } else if extra(scanner, is_static, &prop)? {
            // handled by the caller's record-specific hook
        } else {
            let value = scanner.number()?;
            common.extras.insert(prop, value);
        }
        scanner.maybe_comma();
    }
    Ok(())
}

/// Reads a `Bone { ... }` block (`spec.md` §4.4, "Bone/Helper/Attachment").
pub fn read_bone(scanner: &mut Scanner, scene: &mut Scene) -> Result<(), SyntaxError> {
    let name = read_name_prefix(scanner)?;
    let mut common = NodeCommon::new(name, 0, NodeType::BONE);
    read_common_body(scanner, &mut common, |_, _, _| Ok(false))?;
    scene.bones.push(Bone { common });
    Ok(())
}

/// Reads a `Helper { ... }` block.
pub fn read_helper(scanner: &mut Scanner, scene: &mut Scene) -> Result<(), SyntaxError> {
    let name = read_name_prefix(scanner)?;
    let mut common = NodeCommon::new(name, 0, NodeType::HELPER);
    read_common_body(scanner, &mut common, |_, _, _| Ok(false))?;
    scene.helpers.push(Helper { common });
    Ok(())
}

/// Reads an `Attachment { ... }` block, which additionally carries a
/// `Path` string.
pub fn read_attachment(scanner: &mut Scanner, scene: &mut Scene) -> Result<(), SyntaxError> {
    let name = read_name_prefix(scanner)?;
    let mut common = NodeCommon::new(name, 0, NodeType::ATTACHMENT);
    let mut path = None;
    read_common_body(scanner, &mut common, |scanner, _is_static, prop| {
        if prop == "Path" {
            path = Some(
                scanner
                    .quoted_string()
                    .ok_or_else(|| SyntaxError::expected_symbol(scanner.offset(), '"'))?,
            );
            Ok(true)
        } else {
            Ok(false)
        }
    })?;
    scene.attachments.push(Attachment { common, path });
    Ok(())
}

/// Reads an `EventObject { ... }` block.
pub fn read_event_object(scanner: &mut Scanner, scene: &mut Scene) -> Result<(), SyntaxError> {
    let name = read_name_prefix(scanner)?;
    let mut common = NodeCommon::new(name, 0, NodeType::EVENT_OBJECT);
    let mut event_track = Vec::new();
    read_common_body(scanner, &mut common, |scanner, _is_static, prop| {
        if prop == "EventTrack" {
            let _hint_count = scanner.number()?;
            let values = scanner.array()?.unwrap_or_default();
            event_track = values.into_iter().map(|v| v as u32).collect();
            Ok(true)
        } else {
            Ok(false)
        }
    })?;
    let node = EventObject { common, event_track };
    let index = scene.nodes.len();
    scene.nodes.push(Node::EventObject(node));
    scene.event_objects.push(index);
    Ok(())
}

/// Reads a `CollisionShape { ... }` block.
pub fn read_collision_shape(scanner: &mut Scanner, scene: &mut Scene) -> Result<(), SyntaxError> {
    let name = read_name_prefix(scanner)?;
    let mut common = NodeCommon::new(name, 0, NodeType::COLLISION_SHAPE);
    let mut shape = CollisionShapeType::Box;
    let mut vertices = Vec::new();
    let mut radius = None;
    read_common_body(scanner, &mut common, |scanner, _is_static, prop| {
        match prop {
            "Box" => {
                shape = CollisionShapeType::Box;
                Ok(true)
            }
            "Sphere" => {
                shape = CollisionShapeType::Sphere;
                Ok(true)
            }
            "Vertices" => {
                let _hint_count = scanner.number()?;
                scanner.expect_symbol('{')?;
                loop {
                    if scanner.maybe_symbol('}') {
                        break;
                    }
                    vertices.push(crate::value::read_vec3(scanner)?);
                    scanner.maybe_comma();
                }
                Ok(true)
            }
            "Radius" => {
                radius = Some(scanner.number()? as f32);
                Ok(true)
            }
            _ => Ok(false),
        }
    })?;
    let node = CollisionShape {
        common,
        shape,
        vertices,
        radius,
    };
    let index = scene.nodes.len();
    scene.nodes.push(Node::CollisionShape(node));
    scene.collision_shapes.push(index);
    Ok(())
}

/// Reads a `PivotPoints { ... }` block: positions stored positionally,
/// cross-linked to nodes in the finalization pass
/// (`spec.md` §4.5, §4.4 "PivotPoints").
pub fn read_pivot_points(scanner: &mut Scanner, scene: &mut Scene) -> Result<(), SyntaxError> {
    let _hint_count = scanner.number()?;
    scanner.expect_symbol('{')?;
    loop {
        if scanner.maybe_symbol('}') {
            break;
        }
        scene.pivot_points.push(crate::value::read_vec3(scanner)?);
        scanner.maybe_comma();
    }
    Ok(())
}

/// Reads a `GlobalSequences { ... }` block: an ordered list of
/// `Duration <n>` entries (`spec.md` §4.4, "GlobalSequences").
pub fn read_global_sequences(scanner: &mut Scanner, scene: &mut Scene) -> Result<(), SyntaxError> {
    let _hint_count = scanner.number()?;
    scanner.expect_symbol('{')?;
    loop {
        if scanner.maybe_symbol('}') {
            break;
        }
        let kw = scanner
            .keyword()
            .ok_or_else(|| SyntaxError::expected_keyword(scanner.offset()))?;
        if kw != "Duration" {
            return Err(SyntaxError::unknown_keyword(scanner.offset(), kw));
        }
        let duration = scanner.number()? as u32;
        scene.global_sequences.push(duration);
        scanner.maybe_comma();
    }
    Ok(())
}
