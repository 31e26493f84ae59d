//! Packed bit-set and plain C-like enumerations from `spec.md` §6.
//!
//! Bit positions are part of the external contract (the binary MDX
//! twin format agrees on the same layout), so they are pinned here
//! rather than left to derive order. Layout grounded on the bit
//! positions already recorded for this model format in
//! `other_examples/…-mdlx.rs.rs`.

use bitflags::bitflags;

bitflags! {
    /// Flags on a `Texture` record.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TextureFlags: u32 {
        /// Wrap the texture along its width.
        const WRAP_WIDTH = 1;
        /// Wrap the texture along its height.
        const WRAP_HEIGHT = 2;
    }

    /// Shading flags on a material `Layer`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct LayerShading: u32 {
        /// Ignore lighting for this layer.
        const UNSHADED = 1;
        /// Sample this layer as a sphere environment map.
        const SPHERE_ENV_MAP = 2;
        /// Render both faces of triangles using this layer.
        const TWO_SIDED = 16;
        /// Exclude this layer from fog.
        const UNFOGGED = 32;
        /// Skip the depth test for this layer.
        const NO_DEPTH_TEST = 64;
        /// Skip writing depth for this layer.
        const NO_DEPTH_SET = 128;
    }

    /// Render-mode flags on a `Material`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct MaterialRenderMode: u32 {
        /// Use a constant (unanimated) color for this material.
        const CONSTANT_COLOR = 1;
        /// Sort primitives by farthest Z.
        const SORT_PRIMS_FAR_Z = 16;
        /// Force full resolution rendering.
        const FULL_RESOLUTION = 32;
    }

    /// Behavioral flags carried on every [`crate::node::Node`], packed
    /// alongside (but in a disjoint bit range from) the node's type
    /// tag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct NodeFlags: u32 {
        /// The node always faces the camera.
        const BILLBOARDED = 1 << 20;
        /// Lock billboarding around the X axis.
        const BILLBOARDED_LOCK_X = 1 << 21;
        /// Lock billboarding around the Y axis.
        const BILLBOARDED_LOCK_Y = 1 << 22;
        /// Lock billboarding around the Z axis.
        const BILLBOARDED_LOCK_Z = 1 << 23;
        /// The node is anchored to the active camera.
        const CAMERA_ANCHORED = 1 << 24;
        /// Do not inherit the parent's translation.
        const DONT_INHERIT_TRANSLATION = 1 << 25;
        /// Do not inherit the parent's rotation.
        const DONT_INHERIT_ROTATION = 1 << 26;
        /// Do not inherit the parent's scaling.
        const DONT_INHERIT_SCALING = 1 << 27;
    }

    /// The node-type tag bits, packed in a bit range disjoint from
    /// [`NodeFlags`] within the same `Flags` field.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct NodeType: u32 {
        /// Tags a `Bone` record.
        const BONE = 1 << 8;
        /// Tags a `Helper` record.
        const HELPER = 1 << 9;
        /// Tags an `Attachment` record.
        const ATTACHMENT = 1 << 10;
        /// Tags a `CollisionShape` record.
        const COLLISION_SHAPE = 1 << 11;
        /// Tags an `EventObject` record.
        const EVENT_OBJECT = 1 << 12;
        /// Tags a `ParticleEmitter2` record.
        const PARTICLE_EMITTER = 1 << 13;
        /// Tags a `Light` record.
        const LIGHT = 1 << 14;
        /// Tags a `RibbonEmitter` record.
        const RIBBON_EMITTER = 1 << 15;
    }

    /// Flags on a `GeosetAnim` record.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct GeosetAnimFlags: u32 {
        /// This geoset casts a drop shadow.
        const DROP_SHADOW = 1;
    }

    /// Flags on a legacy `ParticleEmitter` record.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ParticleEmitterFlags: u32 {
        /// The emitter uses the MDL-native particle shape.
        const EMITTER_USES_MDL = 1;
        /// The emitter uses a TGA-sourced particle shape.
        const EMITTER_USES_TGA = 2;
    }

    /// Flags on a `ParticleEmitter2` record.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ParticleEmitter2Flags: u32 {
        /// Sort particles by farthest Z.
        const SORT_PRIMS_FAR_Z = 1 << 16;
        /// Ignore lighting for these particles.
        const UNSHADED = 1 << 15;
        /// Particles are emitted as lines rather than quads.
        const LINE_EMITTER = 1 << 17;
        /// Exclude these particles from fog.
        const UNFOGGED = 1 << 18;
        /// Particles move in model space rather than world space.
        const MODEL_SPACE = 1 << 19;
        /// Particles are aligned to the XY plane.
        const XY_QUAD = 1 << 20;
    }

    /// Which end(s) of a `ParticleEmitter2` particle render.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ParticleEmitter2FramesFlags: u32 {
        /// Render the head of the particle.
        const HEAD = 1;
        /// Render the tail of the particle.
        const TAIL = 2;
    }
}

/// The blend mode of a material `Layer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FilterMode {
    /// Opaque, no blending.
    #[default]
    None,
    /// 1-bit alpha test.
    Transparent,
    /// Standard alpha blending.
    Blend,
    /// Additive blending.
    Additive,
    /// Additive blending with a separate alpha channel.
    AddAlpha,
    /// Multiplicative blending.
    Modulate,
    /// Multiplicative blending at double brightness.
    Modulate2x,
}

impl FilterMode {
    /// Recognizes a `Layer` `FilterMode` keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "None" => Some(FilterMode::None),
            "Transparent" => Some(FilterMode::Transparent),
            "Blend" => Some(FilterMode::Blend),
            "Additive" => Some(FilterMode::Additive),
            "AddAlpha" => Some(FilterMode::AddAlpha),
            "Modulate" => Some(FilterMode::Modulate),
            "Modulate2x" => Some(FilterMode::Modulate2x),
            _ => None,
        }
    }
}

/// The filter mode of a `ParticleEmitter2`, a distinct enumeration
/// from [`FilterMode`] per `spec.md` §6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParticleEmitter2FilterMode {
    /// Standard alpha blending.
    #[default]
    Transparent,
    /// Standard alpha blending (alias recognized by the grammar).
    Blend,
    /// Additive blending.
    Additive,
    /// Blending keyed by the alpha channel.
    AlphaKey,
    /// Multiplicative blending.
    Modulate,
    /// Multiplicative blending at double brightness.
    Modulate2x,
}

impl ParticleEmitter2FilterMode {
    /// Recognizes a `ParticleEmitter2` filter-mode keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "Transparent" => Some(Self::Transparent),
            "Blend" => Some(Self::Blend),
            "Additive" => Some(Self::Additive),
            "AlphaKey" => Some(Self::AlphaKey),
            "Modulate" => Some(Self::Modulate),
            "Modulate2x" => Some(Self::Modulate2x),
            _ => None,
        }
    }
}

/// The shape of a `CollisionShape` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollisionShapeType {
    /// A box defined by its corner vertices.
    #[default]
    Box,
    /// A sphere defined by a center vertex and a radius.
    Sphere,
}

/// The kind of a `Light` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LightType {
    /// Radiates equally in all directions from a point.
    #[default]
    Omnidirectional,
    /// Radiates in a single direction.
    Directional,
    /// Ambient, non-directional fill light.
    Ambient,
}

impl LightType {
    /// Recognizes a `Light` `LightType` keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "Omnidirectional" => Some(LightType::Omnidirectional),
            "Directional" => Some(LightType::Directional),
            "Ambient" => Some(LightType::Ambient),
            _ => None,
        }
    }
}
