//! The scene-graph aggregate and its non-node record types
//! (`spec.md` §3).

use indexmap::IndexMap;

use crate::flags::{
    FilterMode, GeosetAnimFlags, LayerShading, MaterialRenderMode, ParticleEmitterFlags, TextureFlags,
};
use crate::node::{Attachment, Bone, Helper, Node};
use crate::track::{AnimatableFloat, AnimatableInt, AnimatableVec3, AnimatableVec4};

/// The model-info header (`spec.md` §3, "Model info").
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelInfo {
    /// The model's name.
    pub name: String,
    /// The model's minimum extent.
    pub minimum_extent: [f32; 3],
    /// The model's maximum extent.
    pub maximum_extent: [f32; 3],
    /// The model's bounding radius.
    pub bounds_radius: f32,
    /// Cross-fade duration between animations, in milliseconds.
    pub blend_time: u32,
}

/// A named animation interval (`spec.md` §3, "Sequence").
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sequence {
    /// The sequence's name.
    pub name: String,
    /// The sequence's (start, end) frame interval.
    pub interval: (u32, u32),
    /// Minimum extent over the sequence's duration.
    pub minimum_extent: [f32; 3],
    /// Maximum extent over the sequence's duration.
    pub maximum_extent: [f32; 3],
    /// Bounding radius over the sequence's duration.
    pub bounds_radius: f32,
    /// Relative likelihood this sequence plays when several are
    /// eligible.
    pub rarity: Option<f32>,
    /// Ground-speed hint for locomotion sequences.
    pub move_speed: Option<f32>,
    /// Whether this sequence holds its last frame instead of looping.
    pub non_looping: bool,
}

/// A referenced image (`spec.md` §3, "Texture").
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Texture {
    /// The texture's image path.
    pub image: String,
    /// The in-game replaceable-texture id, or 0 if not replaceable.
    pub replaceable_id: i64,
    /// Wrapping flags.
    pub flags: TextureFlags,
}

/// One rendering pass within a `Material` (`spec.md` §3, "Layer").
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layer {
    /// The layer's blend mode.
    pub filter_mode: FilterMode,
    /// Packed shading flags.
    pub shading: LayerShading,
    /// Static or animated texture index.
    pub texture_id: AnimatableInt,
    /// Static or animated layer opacity.
    pub alpha: AnimatableFloat,
    /// Which `TextureAnims` entry drives this layer's UV animation.
    pub coord_id: i64,
    /// Which `TextureAnims` entry drives this layer's texture
    /// animation, or `None` if this layer isn't texture-animated.
    pub texture_anim_id: Option<i64>,
}

impl Default for Layer {
    fn default() -> Self {
        Layer {
            filter_mode: FilterMode::None,
            shading: LayerShading::empty(),
            texture_id: AnimatableInt::Static(0),
            alpha: AnimatableFloat::Static(1.0),
            coord_id: 0,
            texture_anim_id: None,
        }
    }
}

/// A set of rendering layers (`spec.md` §3, "Material").
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Material {
    /// Packed render-mode flags.
    pub render_mode: MaterialRenderMode,
    /// Draw-order priority; higher draws later.
    pub priority_plane: Option<i64>,
    /// The material's layers, in source order.
    pub layers: Vec<Layer>,
}

/// Per-sequence visibility/color override for a `Geoset`
/// (`spec.md` §3, "Geoset", field "Anim").
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeosetSequenceAnim {
    /// Opacity for this sequence; defaults to 1.0 when absent from
    /// source.
    pub alpha: f32,
    /// Color tint for this sequence.
    pub color: Option<[f32; 3]>,
    /// Minimum extent for this sequence.
    pub minimum_extent: Option<[f32; 3]>,
    /// Maximum extent for this sequence.
    pub maximum_extent: Option<[f32; 3]>,
    /// Bounding radius for this sequence.
    pub bounds_radius: Option<f32>,
}

impl Default for GeosetSequenceAnim {
    fn default() -> Self {
        GeosetSequenceAnim {
            alpha: 1.0,
            color: None,
            minimum_extent: None,
            maximum_extent: None,
            bounds_radius: None,
        }
    }
}

/// A renderable mesh (`spec.md` §3, "Geoset").
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geoset {
    /// Flattened vertex positions, 3 floats per vertex.
    pub vertices: Vec<f32>,
    /// Flattened vertex normals, 3 floats per vertex.
    pub normals: Vec<f32>,
    /// One or more UV-coordinate buffers, 2 floats per vertex each.
    pub tvertices: Vec<Vec<f32>>,
    /// Per-vertex bone-group index.
    pub vertex_group: Vec<u8>,
    /// Triangle vertex indices.
    pub faces: Vec<u16>,
    /// Per-bone-group matrix-index lists.
    pub groups: Vec<Vec<i64>>,
    /// The total group count as declared by the source, preserved
    /// even though it's derivable from `groups.len()`.
    pub total_groups_count: u32,
    /// Minimum extent.
    pub minimum_extent: [f32; 3],
    /// Maximum extent.
    pub maximum_extent: [f32; 3],
    /// Bounding radius.
    pub bounds_radius: f32,
    /// The material this geoset renders with.
    pub material_id: i64,
    /// Selection group, used by in-game selection circles.
    pub selection_group: i64,
    /// Whether this geoset can be selected at all.
    pub unselectable: bool,
    /// Per-sequence visibility/color overrides.
    pub anims: Vec<GeosetSequenceAnim>,
}

/// Animates a `Geoset`'s visibility and tint across sequences
/// (`spec.md` §3, "GeosetAnim").
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeosetAnim {
    /// The geoset this animation applies to, or `-1` if unset.
    pub geoset_id: i64,
    /// Static or animated opacity.
    pub alpha: AnimatableFloat,
    /// Static or animated color tint.
    pub color: AnimatableVec3,
    /// Packed flags.
    pub flags: GeosetAnimFlags,
}

impl Default for GeosetAnim {
    fn default() -> Self {
        GeosetAnim {
            geoset_id: -1,
            alpha: AnimatableFloat::Static(1.0),
            color: AnimatableVec3::Static([1.0, 1.0, 1.0]),
            flags: GeosetAnimFlags::empty(),
        }
    }
}

/// A legacy particle emitter (`spec.md` §3/§4.4, "ParticleEmitter").
/// Unlike `ParticleEmitter2`, this variant is not a scene-graph node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticleEmitter {
    /// The emitter's name.
    pub name: String,
    /// The emitter's unique identifier.
    pub object_id: i64,
    /// The parent node's `ObjectId`, or `None` for a root node.
    pub parent: Option<i64>,
    /// Emission rate, particles per second.
    pub emission_rate: Option<AnimatableFloat>,
    /// Downward acceleration applied to particles.
    pub gravity: Option<AnimatableFloat>,
    /// Emission cone longitude.
    pub longitude: Option<AnimatableFloat>,
    /// Emission cone latitude.
    pub latitude: Option<AnimatableFloat>,
    /// Visibility.
    pub visibility: Option<AnimatableFloat>,
    /// Translation.
    pub translation: Option<AnimatableVec3>,
    /// Scaling.
    pub scaling: Option<AnimatableVec3>,
    /// Rotation (quaternion).
    pub rotation: Option<AnimatableVec4>,
    /// Particle life span, in seconds. Last-write-wins against the
    /// top-level field of the same name and the nested `Particle`
    /// block's field (`spec.md` §9 Open Question 1).
    pub life_span: Option<f32>,
    /// Initial particle velocity. Last-write-wins, same as
    /// `life_span`.
    pub init_velocity: Option<f32>,
    /// The particle's texture or model path.
    pub path: Option<String>,
    /// Packed flags.
    pub flags: ParticleEmitterFlags,
}

/// A camera viewpoint (`spec.md` §3, "Camera").
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Camera {
    /// The camera's name.
    pub name: String,
    /// The camera's rest position.
    pub position: [f32; 3],
    /// Vertical field of view, in radians.
    pub field_of_view: f32,
    /// Near clip distance.
    pub near_clip: f32,
    /// Far clip distance.
    pub far_clip: f32,
    /// The camera's look-at target position, if a `Target` block is
    /// present.
    pub target_position: Option<[f32; 3]>,
    /// The camera target's animated translation, if present.
    pub target_translation: Option<AnimatableVec3>,
    /// The camera's animated translation.
    pub translation: Option<AnimatableVec3>,
    /// The camera's animated roll. Arity-1, not a quaternion — see
    /// `spec.md` §9 Open Question 3.
    pub rotation: Option<AnimatableFloat>,
}

/// Animates a `TextureAnims` entry's UV transform
/// (`spec.md` §3, "TVertexAnim").
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextureAnim {
    /// Animated UV translation.
    pub translation: Option<AnimatableVec3>,
    /// Animated UV rotation.
    pub rotation: Option<AnimatableVec4>,
    /// Animated UV scaling.
    pub scaling: Option<AnimatableVec3>,
}

/// The root scene-graph aggregate (`spec.md` §3, "Scene").
///
/// Constructed monotonically (append-only) during parsing and
/// returned immutable after the finalization pass
/// (`spec.md` §3, "Lifecycles").
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scene {
    /// The format version, defaulting to 800.
    pub version: u32,
    /// The model-info header.
    pub info: ModelInfo,
    /// Named animation intervals, in source order.
    pub sequences: Vec<Sequence>,
    /// Referenced images, in source order.
    pub textures: Vec<Texture>,
    /// Materials, in source order.
    pub materials: Vec<Material>,
    /// Renderable meshes, in source order.
    pub geosets: Vec<Geoset>,
    /// Per-geoset animation overrides, in source order.
    pub geoset_anims: Vec<GeosetAnim>,
    /// Bone joints, in source order. Not part of `nodes` — see
    /// `spec.md` §9 Open Question 2.
    pub bones: Vec<Bone>,
    /// Non-rendering helper joints, in source order. Not part of
    /// `nodes` — see `spec.md` §9 Open Question 2.
    pub helpers: Vec<Helper>,
    /// Attachment points, in source order. Not part of `nodes` — see
    /// `spec.md` §9 Open Question 2.
    pub attachments: Vec<Attachment>,
    /// Legacy particle emitters, in source order.
    pub particle_emitters: Vec<ParticleEmitter>,
    /// Cameras, in source order.
    pub cameras: Vec<Camera>,
    /// Durations of each independent looping timeline.
    pub global_sequences: Vec<u32>,
    /// `TextureAnims` entries, in source order.
    pub texture_anims: Vec<TextureAnim>,
    /// Positional pivot points, assigned to `nodes` by index during
    /// finalization (`spec.md` §4.5).
    pub pivot_points: Vec<[f32; 3]>,
    /// The flat node arena, holding `EventObject`, `CollisionShape`,
    /// `ParticleEmitter2`, `Light`, and `RibbonEmitter` records in
    /// source order (`spec.md` §3 invariant, "In the flat Nodes
    /// list...").
    pub nodes: Vec<Node>,
    /// Indices into `nodes` for `EventObject` records.
    pub event_objects: Vec<usize>,
    /// Indices into `nodes` for `CollisionShape` records.
    pub collision_shapes: Vec<usize>,
    /// Indices into `nodes` for `ParticleEmitter2` records.
    pub particle_emitters2: Vec<usize>,
    /// Indices into `nodes` for `Light` records.
    pub lights: Vec<usize>,
    /// Indices into `nodes` for `RibbonEmitter` records.
    pub ribbon_emitters: Vec<usize>,
}

impl Default for Scene {
    /// Documented defaults (`spec.md` §4.5): `BlendTime=150`,
    /// `Version=800`, all lists empty.
    fn default() -> Self {
        Scene {
            version: 800,
            info: ModelInfo {
                blend_time: 150,
                ..ModelInfo::default()
            },
            sequences: Vec::new(),
            textures: Vec::new(),
            materials: Vec::new(),
            geosets: Vec::new(),
            geoset_anims: Vec::new(),
            bones: Vec::new(),
            helpers: Vec::new(),
            attachments: Vec::new(),
            particle_emitters: Vec::new(),
            cameras: Vec::new(),
            global_sequences: Vec::new(),
            texture_anims: Vec::new(),
            pivot_points: Vec::new(),
            nodes: Vec::new(),
            event_objects: Vec::new(),
            collision_shapes: Vec::new(),
            particle_emitters2: Vec::new(),
            lights: Vec::new(),
            ribbon_emitters: Vec::new(),
        }
    }
}

/// The raw key/value properties collected by loose-handler blocks
/// (`spec.md` §4.6) that a given handler doesn't specifically
/// recognize. Kept as a distinct type alias so call sites read as
/// intent rather than a bare `IndexMap`.
pub type Extras = IndexMap<String, f64>;
