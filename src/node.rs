//! The `Node` shape shared by every transformable scene entity
//! (`spec.md` §3, "Node (abstract shape...)").
//!
//! Per the Design Note in `spec.md` §9 ("Node graph vs. heterogeneous
//! buckets"), every node is logically one record but is referenced
//! from both a typed bucket and (for five of the eight node kinds) a
//! flat index space. This crate represents those five kinds as a
//! single tagged `Node` enum living in [`crate::scene::Scene::nodes`],
//! with each typed bucket holding `usize` indices into that arena —
//! the same shape the teacher crate's `Property` enum uses to hold
//! heterogeneous property values behind `enum_dispatch`.
//!
//! `Bone`, `Helper`, and `Attachment` are *not* part of that arena
//! (Open Question 2 in `spec.md` §9): their handlers append only to
//! their own typed `Vec` on [`crate::scene::Scene`].

use enum_dispatch::enum_dispatch;
use indexmap::IndexMap;

use crate::flags::{CollisionShapeType, LightType, NodeFlags, NodeType, ParticleEmitter2FilterMode,
    ParticleEmitter2Flags, ParticleEmitter2FramesFlags};
use crate::scene::Extras;
use crate::track::{AnimatableFloat, AnimatableInt, AnimatableVec3, AnimatableVec4};

/// Fields shared by every node kind (`spec.md` §3, "Node").
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeCommon {
    /// The node's name.
    pub name: String,
    /// The node's unique identifier, used as an index into the flat
    /// `Nodes` list by external collaborators (`spec.md` §5).
    pub object_id: i64,
    /// The parent node's `ObjectId`, or `None` for a root node.
    pub parent: Option<i64>,
    /// The node's local origin, assigned positionally during
    /// finalization (`spec.md` §4.5) — absent until then, and absent
    /// afterward if no `PivotPoints` entry exists for this index.
    pub pivot_point: Option<[f32; 3]>,
    /// Behavioral flags (billboarding, inheritance) packed alongside
    /// the node's type tag.
    pub flags: NodeFlags,
    /// The node's type tag, always exactly one bit (`spec.md` §3
    /// invariant).
    pub node_type: NodeType,
    /// Animated or static translation.
    pub translation: Option<AnimatableVec3>,
    /// Animated or static rotation (a quaternion, except
    /// `Camera::rotation` which is arity-1 — see `spec.md` §9 Open
    /// Question 3).
    pub rotation: Option<AnimatableVec4>,
    /// Animated or static scaling.
    pub scaling: Option<AnimatableVec3>,
    /// Animated or static visibility.
    pub visibility: Option<AnimatableFloat>,
    /// Unrecognized loose-handler keys, recorded as number-valued
    /// properties per `spec.md` §4.6 (Design Note in `spec.md` §9,
    /// "Dynamic 'record of unknown properties'").
    pub extras: Extras,
}

impl NodeCommon {
    pub(crate) fn new(name: String, object_id: i64, node_type: NodeType) -> Self {
        NodeCommon {
            name,
            object_id,
            parent: None,
            pivot_point: None,
            flags: NodeFlags::empty(),
            node_type,
            translation: None,
            rotation: None,
            scaling: None,
            visibility: None,
            extras: IndexMap::new(),
        }
    }
}

/// Shared accessors over every node kind participating in the flat
/// node arena. Mirrors the teacher crate's `#[enum_dispatch] trait
/// PropertyTrait` pattern.
#[enum_dispatch]
pub trait NodeTrait {
    /// Shared fields for this node.
    fn common(&self) -> &NodeCommon;
    /// Shared fields for this node, mutable.
    fn common_mut(&mut self) -> &mut NodeCommon;
}

/// A timed event reference (`spec.md` §3, "EventObject").
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventObject {
    /// Shared node fields.
    pub common: NodeCommon,
    /// Frames at which the event fires.
    pub event_track: Vec<u32>,
}

impl NodeTrait for EventObject {
    fn common(&self) -> &NodeCommon {
        &self.common
    }
    fn common_mut(&mut self) -> &mut NodeCommon {
        &mut self.common
    }
}

/// A simple collision volume (`spec.md` §3, "CollisionShape").
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollisionShape {
    /// Shared node fields.
    pub common: NodeCommon,
    /// Box or sphere.
    pub shape: CollisionShapeType,
    /// Defining vertices (2 for a box, 1 for a sphere).
    pub vertices: Vec<[f32; 3]>,
    /// The sphere radius, if this is a `Sphere`.
    pub radius: Option<f32>,
}

impl NodeTrait for CollisionShape {
    fn common(&self) -> &NodeCommon {
        &self.common
    }
    fn common_mut(&mut self) -> &mut NodeCommon {
        &mut self.common
    }
}

/// A particle-system emitter (`spec.md` §3, "ParticleEmitter2").
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticleEmitter2 {
    /// Shared node fields.
    pub common: NodeCommon,
    /// Non-node-shared behavioral flags.
    pub flags: ParticleEmitter2Flags,
    /// Which end(s) of the particle render.
    pub frame_flags: ParticleEmitter2FramesFlags,
    /// The emitter's blend mode.
    pub filter_mode: ParticleEmitter2FilterMode,
    /// RGB color at each of the particle's life-span segments.
    pub segment_color: Vec<[f32; 3]>,
    /// Alpha at each of the particle's life-span segments.
    pub alpha: [u8; 3],
    /// Per-axis particle scale factors.
    pub particle_scaling: [f32; 3],
    /// UV-anim indices driving the particle's life-span texture.
    pub life_span_uv_anim: [u32; 3],
    /// UV-anim indices driving the particle's decay texture.
    pub decay_uv_anim: [u32; 3],
    /// UV-anim indices driving the particle's tail texture.
    pub tail_uv_anim: [u32; 3],
    /// UV-anim indices driving the particle's tail-decay texture.
    pub tail_decay_uv_anim: [u32; 3],
    /// Whether particles squirt (burst) rather than stream.
    pub squirt: bool,
    /// Emission speed.
    pub speed: Option<AnimatableFloat>,
    /// Emission cone latitude.
    pub latitude: Option<AnimatableFloat>,
    /// Particles emitted per second.
    pub emission_rate: Option<AnimatableFloat>,
    /// Particle width.
    pub width: Option<AnimatableFloat>,
    /// Particle length.
    pub length: Option<AnimatableFloat>,
    /// Downward acceleration applied to particles.
    pub gravity: Option<AnimatableFloat>,
    /// Random variation applied to particle velocity.
    pub variation: Option<AnimatableFloat>,
}

impl NodeTrait for ParticleEmitter2 {
    fn common(&self) -> &NodeCommon {
        &self.common
    }
    fn common_mut(&mut self) -> &mut NodeCommon {
        &mut self.common
    }
}

/// A point, directional, or ambient light (`spec.md` §3, "Light").
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Light {
    /// Shared node fields.
    pub common: NodeCommon,
    /// The light's kind.
    pub light_type: LightType,
    /// The light's primary color.
    pub color: Option<AnimatableVec3>,
    /// The light's ambient-term color.
    pub amb_color: Option<AnimatableVec3>,
    /// The light's primary intensity.
    pub intensity: Option<AnimatableFloat>,
    /// The light's ambient-term intensity.
    pub amb_intensity: Option<AnimatableFloat>,
    /// Distance at which attenuation begins.
    pub attenuation_start: Option<AnimatableFloat>,
    /// Distance at which the light reaches zero intensity.
    pub attenuation_end: Option<AnimatableFloat>,
}

impl NodeTrait for Light {
    fn common(&self) -> &NodeCommon {
        &self.common
    }
    fn common_mut(&mut self) -> &mut NodeCommon {
        &mut self.common
    }
}

/// A trailing ribbon effect (`spec.md` §3, "RibbonEmitter").
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RibbonEmitter {
    /// Shared node fields.
    pub common: NodeCommon,
    /// Ribbon extent above the node.
    pub height_above: Option<AnimatableFloat>,
    /// Ribbon extent below the node.
    pub height_below: Option<AnimatableFloat>,
    /// Ribbon alpha.
    pub alpha: Option<AnimatableFloat>,
    /// Ribbon color.
    pub color: Option<[f32; 3]>,
    /// How long each ribbon segment persists, in milliseconds.
    pub life_span: Option<f32>,
    /// Which material texture slot the ribbon samples.
    pub texture_slot: Option<AnimatableInt>,
    /// Ribbon segments emitted per second.
    pub emission_rate: Option<f32>,
    /// Rows in the ribbon's texture grid.
    pub rows: Option<u32>,
    /// Columns in the ribbon's texture grid.
    pub columns: Option<u32>,
    /// The material this ribbon renders with.
    pub material_id: Option<i64>,
    /// Downward acceleration applied to ribbon segments.
    pub gravity: Option<f32>,
}

impl NodeTrait for RibbonEmitter {
    fn common(&self) -> &NodeCommon {
        &self.common
    }
    fn common_mut(&mut self) -> &mut NodeCommon {
        &mut self.common
    }
}

/// The tagged union of node kinds held in the flat node arena
/// (`spec.md` §3, invariant "In the flat Nodes list..."; `spec.md` §9
/// Design Note "Node graph vs. heterogeneous buckets").
#[enum_dispatch(NodeTrait)]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    /// A timed event reference.
    EventObject(EventObject),
    /// A simple collision volume.
    CollisionShape(CollisionShape),
    /// A particle-system emitter.
    ParticleEmitter2(ParticleEmitter2),
    /// A point, directional, or ambient light.
    Light(Light),
    /// A trailing ribbon effect.
    RibbonEmitter(RibbonEmitter),
}

/// A bone joint (`spec.md` §3). Not a member of the flat node arena
/// (`spec.md` §9 Open Question 2).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bone {
    /// Shared node fields.
    pub common: NodeCommon,
}

/// A non-rendering helper joint (`spec.md` §3). Not a member of the
/// flat node arena (`spec.md` §9 Open Question 2).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Helper {
    /// Shared node fields.
    pub common: NodeCommon,
}

/// An attachment point for effects or other models (`spec.md` §3). Not
/// a member of the flat node arena (`spec.md` §9 Open Question 2).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attachment {
    /// Shared node fields.
    pub common: NodeCommon,
    /// The attached resource's path, if any.
    pub path: Option<String>,
}
