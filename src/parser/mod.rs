//! The driver and per-block semantic handlers (`spec.md` §4.4, §4.5).
//!
//! [`parse`] is the crate's single public entry point: it dispatches
//! each top-level keyword to the submodule that owns it, tolerates
//! unknown top-level blocks by skipping a balanced brace region, and
//! finishes with the pivot-point cross-linking pass.

pub mod camera;
pub mod emitters;
pub mod geoset;
pub mod light;
pub mod materials;
pub mod model;
pub mod nodes;
pub mod sequences;
pub mod textures;

use crate::error::Error;
use crate::node::NodeTrait;
use crate::scanner::Scanner;
use crate::scene::Scene;

/// Parses an MDL text scene description into a [`Scene`].
///
/// The first syntactic failure aborts parsing; no partial scene-graph
/// is returned (`spec.md` §4.6).
pub fn parse(source: &str) -> Result<Scene, Error> {
    let mut scanner = Scanner::new(source);
    let mut scene = Scene::default();

    while let Some(keyword) = scanner.keyword() {
        match keyword.as_str() {
            "Version" => model::read_version(&mut scanner, &mut scene)?,
            "Model" => model::read_model(&mut scanner, &mut scene)?,
            "Sequences" => sequences::read_sequences(&mut scanner, &mut scene)?,
            "GlobalSequences" => nodes::read_global_sequences(&mut scanner, &mut scene)?,
            "Textures" => textures::read_textures(&mut scanner, &mut scene)?,
            "TextureAnims" => textures::read_texture_anims(&mut scanner, &mut scene)?,
            "Materials" => materials::read_materials(&mut scanner, &mut scene)?,
            "Geoset" => geoset::read_geoset(&mut scanner, &mut scene)?,
            "GeosetAnim" => geoset::read_geoset_anim(&mut scanner, &mut scene)?,
            "Bone" => nodes::read_bone(&mut scanner, &mut scene)?,
            "Helper" => nodes::read_helper(&mut scanner, &mut scene)?,
            "Attachment" => nodes::read_attachment(&mut scanner, &mut scene)?,
            "PivotPoints" => nodes::read_pivot_points(&mut scanner, &mut scene)?,
            "EventObject" => nodes::read_event_object(&mut scanner, &mut scene)?,
            "CollisionShape" => nodes::read_collision_shape(&mut scanner, &mut scene)?,
            "ParticleEmitter" => emitters::read_particle_emitter(&mut scanner, &mut scene)?,
            "ParticleEmitter2" => emitters::read_particle_emitter2(&mut scanner, &mut scene)?,
            "RibbonEmitter" => emitters::read_ribbon_emitter(&mut scanner, &mut scene)?,
            "Camera" => camera::read_camera(&mut scanner, &mut scene)?,
            "Light" => light::read_light(&mut scanner, &mut scene)?,
            _ => scanner.skip_balanced_braces()?,
        }
    }

    finalize(&mut scene);
    Ok(scene)
}

/// Assigns each arena node's pivot point from the positional
/// `PivotPoints` list (`spec.md` §4.5, "finalization pass"). Bones,
/// Helpers, and Attachments are not part of the arena, so they are
/// untouched here — see `spec.md` §9 open question 2.
fn finalize(scene: &mut Scene) {
    for (index, node) in scene.nodes.iter_mut().enumerate() {
        if let Some(pivot) = scene.pivot_points.get(index) {
            node.common_mut().pivot_point = Some(*pivot);
        }
    }
}
