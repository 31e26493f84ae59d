//! Animated-track data model and reader (`spec.md` §4.3).
//!
//! An animated track binds an interpolation mode, an optional global
//! sequence, and an ordered list of keyframes to one property channel.
//! The channel's vector arity (1, 3, or 4) and element kind (signed
//! integer or float) are supplied by the caller — the grammar itself
//! does not encode them, they come from which property is being read,
//! exactly as `spec.md` §4.3 describes.

use crate::error::SyntaxError;
use crate::scanner::Scanner;

/// Interpolation mode for an animated track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineType {
    /// No interpolation between keys; the value holds at each key.
    DontInterp,
    /// Linear interpolation between keys.
    Linear,
    /// Hermite-interpolated, with per-key tangents.
    Hermite,
    /// Bezier-interpolated, with per-key tangents.
    Bezier,
}

impl LineType {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "DontInterp" => Some(LineType::DontInterp),
            "Linear" => Some(LineType::Linear),
            "Hermite" => Some(LineType::Hermite),
            "Bezier" => Some(LineType::Bezier),
            _ => None,
        }
    }

    fn has_tangents(self) -> bool {
        matches!(self, LineType::Hermite | LineType::Bezier)
    }
}

/// A fixed-arity vector of either signed integers or floats, stored in
/// a single small growable buffer so the same [`Keyframe`] type serves
/// both kinds of channel.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    /// An arity-1 signed 32-bit integer channel (e.g. `TextureID`).
    Int([i32; 1]),
    /// An arity-1 float channel (e.g. `Alpha`, `Visibility`).
    Float1([f32; 1]),
    /// An arity-3 float channel (e.g. `Translation`, `Scaling`, `Color`).
    Float3([f32; 3]),
    /// An arity-4 float channel (e.g. `Rotation` quaternions).
    Float4([f32; 4]),
}

impl Channel {
    /// The declared arity of this channel's variant.
    pub fn arity(&self) -> usize {
        match self {
            Channel::Int(_) | Channel::Float1(_) => 1,
            Channel::Float3(_) => 3,
            Channel::Float4(_) => 4,
        }
    }

    /// Reverses the first and last element, used for BGR→RGB
    /// normalization of arity-3 color channels (`crate::color`).
    pub fn reverse_triple(&mut self) {
        if let Channel::Float3(v) = self {
            v.swap(0, 2);
        }
    }
}

/// The kind of element an animated track's channel holds, and its
/// arity. Passed by the caller of [`read_track`] since the grammar
/// does not encode it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    /// Arity-1 signed 32-bit integers.
    Int,
    /// Arity-1 floats.
    Float1,
    /// Arity-3 floats.
    Float3,
    /// Arity-4 floats.
    Float4,
}

impl ChannelKind {
    fn arity(self) -> usize {
        match self {
            ChannelKind::Int | ChannelKind::Float1 => 1,
            ChannelKind::Float3 => 3,
            ChannelKind::Float4 => 4,
        }
    }

    fn wrap(self, values: &[f64]) -> Channel {
        match self {
            ChannelKind::Int => Channel::Int([values[0] as i32]),
            ChannelKind::Float1 => Channel::Float1([values[0] as f32]),
            ChannelKind::Float3 => Channel::Float3([values[0] as f32, values[1] as f32, values[2] as f32]),
            ChannelKind::Float4 => {
                Channel::Float4([values[0] as f32, values[1] as f32, values[2] as f32, values[3] as f32])
            }
        }
    }
}

/// One (frame, vector, optional tangents) entry in an animated track.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keyframe {
    /// The frame number this key is placed at.
    pub frame: i64,
    /// The channel value at this frame.
    pub vector: Channel,
    /// Incoming tangent, present iff the track's mode is Hermite or Bezier.
    pub in_tan: Option<Channel>,
    /// Outgoing tangent, present iff the track's mode is Hermite or Bezier.
    pub out_tan: Option<Channel>,
}

/// A sequence of keyframes on one channel, interpolated per
/// [`LineType`] with an optional global-sequence binding.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimatedTrack {
    /// The interpolation mode.
    pub line_type: LineType,
    /// The global sequence this track is bound to, if any.
    pub global_seq_id: Option<i64>,
    /// Keys in source order.
    pub keys: Vec<Keyframe>,
}

impl AnimatedTrack {
    /// Reverses the first and last element of every keyframe's vector
    /// (and tangents, if present), for BGR→RGB color normalization.
    pub fn reverse_color_triples(&mut self) {
        for key in &mut self.keys {
            key.vector.reverse_triple();
            if let Some(in_tan) = &mut key.in_tan {
                in_tan.reverse_triple();
            }
            if let Some(out_tan) = &mut key.out_tan {
                out_tan.reverse_triple();
            }
        }
    }
}

/// The recurring "static/animated duality" (`spec.md` §4.4): a
/// property preceded by the `static` keyword is a fixed arity-1 float;
/// otherwise it is an [`AnimatedTrack`] of the same arity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimatableFloat {
    /// A fixed scalar value.
    Static(f32),
    /// An animated arity-1 float track.
    Animated(AnimatedTrack),
}

/// Static/animated duality over an arity-3 float vector (e.g. `Color`,
/// `Translation`, `Scaling`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimatableVec3 {
    /// A fixed 3-float value.
    Static([f32; 3]),
    /// An animated arity-3 float track.
    Animated(AnimatedTrack),
}

/// Static/animated duality over an arity-4 float vector (e.g.
/// `Rotation` quaternions).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimatableVec4 {
    /// A fixed 4-float value.
    Static([f32; 4]),
    /// An animated arity-4 float track.
    Animated(AnimatedTrack),
}

/// Static/animated duality over an arity-1 signed integer (e.g.
/// `TextureID`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimatableInt {
    /// A fixed integer value.
    Static(i32),
    /// An animated arity-1 integer track.
    Animated(AnimatedTrack),
}

impl AnimatableVec3 {
    /// Applies BGR→RGB normalization to either the static swap or the
    /// per-keyframe reversal, whichever this value holds.
    pub fn normalize_color(&mut self) {
        match self {
            AnimatableVec3::Static(triple) => crate::color::swap_static(triple),
            AnimatableVec3::Animated(track) => crate::color::swap_animated(track),
        }
    }
}

/// Reads the recurring animated-track sub-block: an integer count
/// (read but never trusted, per `spec.md` §4.3), an interpolation
/// keyword, an optional `GlobalSeqId` binding, and an ordered list of
/// frame keys.
pub fn read_track(scanner: &mut Scanner, kind: ChannelKind) -> Result<AnimatedTrack, SyntaxError> {
    let _hint_count = scanner.number()?;
    scanner.expect_symbol('{')?;

    let line_type = scanner
        .keyword()
        .and_then(|kw| LineType::from_keyword(&kw))
        .unwrap_or(LineType::DontInterp);
    scanner.maybe_comma();

    let mut global_seq_id = None;
    let mut keys = Vec::new();

    loop {
        if scanner.maybe_symbol('}') {
            break;
        }
        if scanner.peek_keyword().as_deref() == Some("GlobalSeqId") {
            let _ = scanner.keyword();
            global_seq_id = Some(scanner.number()? as i64);
            scanner.maybe_comma();
            continue;
        }

        let frame = scanner.number()? as i64;
        scanner.expect_symbol(':')?;
        let values = scanner.array_or_scalar()?;
        let vector = kind.wrap(&values[..kind.arity()]);

        let (in_tan, out_tan) = if line_type.has_tangents() {
            scanner.maybe_comma();
            expect_tan_keyword(scanner, "InTan")?;
            let in_values = scanner.array_or_scalar()?;
            scanner.maybe_comma();
            expect_tan_keyword(scanner, "OutTan")?;
            let out_values = scanner.array_or_scalar()?;
            (
                Some(kind.wrap(&in_values[..kind.arity()])),
                Some(kind.wrap(&out_values[..kind.arity()])),
            )
        } else {
            (None, None)
        };

        keys.push(Keyframe {
            frame,
            vector,
            in_tan,
            out_tan,
        });
        scanner.maybe_comma();
    }

    Ok(AnimatedTrack {
        line_type,
        global_seq_id,
        keys,
    })
}

/// Reads a scalar-or-animated arity-1 float property (`spec.md` §4.4,
/// "Static/animated duality"). `is_static` reflects whether the
/// handler already consumed a leading `static` keyword for this
/// property.
pub fn read_animatable_float(scanner: &mut Scanner, is_static: bool) -> Result<AnimatableFloat, SyntaxError> {
    if is_static {
        Ok(AnimatableFloat::Static(scanner.number()? as f32))
    } else {
        Ok(AnimatableFloat::Animated(read_track(scanner, ChannelKind::Float1)?))
    }
}

/// Reads a scalar-or-animated arity-3 float property.
pub fn read_animatable_vec3(scanner: &mut Scanner, is_static: bool) -> Result<AnimatableVec3, SyntaxError> {
    if is_static {
        let values = scanner.array_or_scalar()?;
        Ok(AnimatableVec3::Static([values[0] as f32, values[1] as f32, values[2] as f32]))
    } else {
        Ok(AnimatableVec3::Animated(read_track(scanner, ChannelKind::Float3)?))
    }
}

/// Reads a scalar-or-animated arity-4 float property.
pub fn read_animatable_vec4(scanner: &mut Scanner, is_static: bool) -> Result<AnimatableVec4, SyntaxError> {
    if is_static {
        let values = scanner.array_or_scalar()?;
        Ok(AnimatableVec4::Static([
            values[0] as f32,
            values[1] as f32,
            values[2] as f32,
            values[3] as f32,
        ]))
    } else {
        Ok(AnimatableVec4::Animated(read_track(scanner, ChannelKind::Float4)?))
    }
}

/// Reads a scalar-or-animated arity-1 integer property.
pub fn read_animatable_int(scanner: &mut Scanner, is_static: bool) -> Result<AnimatableInt, SyntaxError> {
    if is_static {
        Ok(AnimatableInt::Static(scanner.number()? as i32))
    } else {
        Ok(AnimatableInt::Animated(read_track(scanner, ChannelKind::Int)?))
    }
}

fn expect_tan_keyword(scanner: &mut Scanner, expected: &str) -> Result<(), SyntaxError> {
    match scanner.keyword() {
        Some(kw) if kw == expected => Ok(()),
        Some(kw) => Err(SyntaxError::unknown_keyword(scanner.offset(), kw)),
        None => Err(SyntaxError::expected_keyword(scanner.offset())),
    }
}
