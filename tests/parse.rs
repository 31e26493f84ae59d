//! End-to-end scenarios from `spec.md` §8 (S1-S6), exercised as
//! literal-input integration tests against the public `parse` entry
//! point.

use mdl_format::node::{Node, NodeTrait};
use mdl_format::track::{AnimatableFloat, AnimatedTrack, Channel, LineType};
use mdl_format::{parse, Error};

fn expect_parse(source: &str) -> mdl_format::Scene {
    parse(source).unwrap_or_else(|e| panic!("expected successful parse, got {e:?}"))
}

#[test]
fn s1_version_only() {
    let scene = expect_parse("Version { FormatVersion 800, }");
    assert_eq!(scene.version, 800);
    assert!(scene.sequences.is_empty());
    assert!(scene.textures.is_empty());
    assert!(scene.materials.is_empty());
    assert!(scene.geosets.is_empty());
    assert!(scene.nodes.is_empty());
}

#[test]
fn s2_model_info() {
    let source = r#"
        Model "Zeppelin" {
            BlendTime 150,
            MinimumExtent { -1, -2, -3 },
            MaximumExtent { 1, 2, 3 },
        }
    "#;
    let scene = expect_parse(source);
    assert_eq!(scene.info.name, "Zeppelin");
    assert_eq!(scene.info.blend_time, 150);
    assert_eq!(scene.info.minimum_extent, [-1.0, -2.0, -3.0]);
    assert_eq!(scene.info.maximum_extent, [1.0, 2.0, 3.0]);
}

#[test]
fn s3_hermite_tangents() {
    let source = r#"
        GeosetAnim {
            GeosetId 0,
            Alpha { 2,
                Hermite,
                0: 0.0, InTan 0.1, OutTan 0.2,
                10: 1.0, InTan 0.3, OutTan 0.4,
            },
        }
    "#;
    let scene = expect_parse(source);
    let anim = &scene.geoset_anims[0];
    let AnimatableFloat::Animated(track) = &anim.alpha else {
        panic!("expected an animated Alpha track");
    };
    assert_eq!(track.line_type, LineType::Hermite);
    assert_eq!(track.keys.len(), 2);

    let first = &track.keys[0];
    assert_eq!(first.frame, 0);
    assert_eq!(first.vector, Channel::Float1([0.0]));
    assert_eq!(first.in_tan, Some(Channel::Float1([0.1])));
    assert_eq!(first.out_tan, Some(Channel::Float1([0.2])));

    let second = &track.keys[1];
    assert_eq!(second.frame, 10);
    assert_eq!(second.vector, Channel::Float1([1.0]));
    assert_eq!(second.in_tan, Some(Channel::Float1([0.3])));
    assert_eq!(second.out_tan, Some(Channel::Float1([0.4])));
}

#[test]
fn s4_static_bgr_color_reversal() {
    let source = r#"
        GeosetAnim {
            GeosetId 0,
            static Color { 0.1, 0.2, 0.3 },
        }
    "#;
    let scene = expect_parse(source);
    let anim = &scene.geoset_anims[0];
    match &anim.color {
        mdl_format::track::AnimatableVec3::Static(rgb) => {
            assert_eq!(*rgb, [0.3, 0.2, 0.1]);
        }
        _ => panic!("expected a static Color value"),
    }
}

#[test]
fn geoset_anim_drop_shadow_packs_into_flags() {
    let source = r#"
        GeosetAnim {
            GeosetId 0,
            DropShadow,
        }
    "#;
    let scene = expect_parse(source);
    assert!(scene.geoset_anims[0]
        .flags
        .contains(mdl_format::flags::GeosetAnimFlags::DROP_SHADOW));
}

#[test]
fn legacy_particle_emitter_shape_flags_pack_together() {
    let source = r#"
        ParticleEmitter "Fx" {
            ObjectId 0,
            EmitterUsesMDL,
            EmitterUsesTGA,
        }
    "#;
    let scene = expect_parse(source);
    use mdl_format::flags::ParticleEmitterFlags;
    assert_eq!(
        scene.particle_emitters[0].flags,
        ParticleEmitterFlags::EMITTER_USES_MDL | ParticleEmitterFlags::EMITTER_USES_TGA
    );
}

#[test]
fn s5_texture_flag_promotion() {
    let source = r#"
        Textures {
            1
            Bitmap {
                Image "foo.blp",
                WrapWidth,
                WrapHeight,
            }
        }
    "#;
    let scene = expect_parse(source);
    assert_eq!(scene.textures.len(), 1);
    let texture = &scene.textures[0];
    assert_eq!(texture.image, "foo.blp");
    assert!(texture.flags.contains(mdl_format::flags::TextureFlags::WRAP_WIDTH));
    assert!(texture.flags.contains(mdl_format::flags::TextureFlags::WRAP_HEIGHT));
}

#[test]
fn s6_unknown_block_skip() {
    let source = r#"
        FaceFX {
            Anim {
                Path "x",
            },
        }
        Version { FormatVersion 800, }
    "#;
    let scene = expect_parse(source);
    assert_eq!(scene.version, 800);
}

#[test]
fn syntax_error_carries_byte_offset() {
    let err = parse("Version { FormatVersion").unwrap_err();
    match err {
        Error::Syntax(syntax) => assert!(syntax.offset() > 0),
    }
}

#[test]
fn pivot_points_assigned_to_nodes_by_index() {
    let source = r#"
        PivotPoints 2 {
            { 0, 0, 0 },
            { 1, 2, 3 },
        }
        EventObject "Event0" {
            ObjectId 0,
            EventTrack 1 { 10 },
        }
        EventObject "Event1" {
            ObjectId 1,
            EventTrack 1 { 20 },
        }
    "#;
    let scene = expect_parse(source);
    assert_eq!(scene.nodes.len(), 2);
    assert_eq!(scene.nodes[0].common().pivot_point, Some([0.0, 0.0, 0.0]));
    assert_eq!(scene.nodes[1].common().pivot_point, Some([1.0, 2.0, 3.0]));
}

#[test]
fn pivot_points_shorter_than_nodes_leaves_trailing_nodes_unset() {
    let source = r#"
        PivotPoints 1 {
            { 5, 6, 7 },
        }
        EventObject "Event0" {
            ObjectId 0,
            EventTrack 1 { 10 },
        }
        EventObject "Event1" {
            ObjectId 1,
            EventTrack 1 { 20 },
        }
    "#;
    let scene = expect_parse(source);
    assert_eq!(scene.nodes[0].common().pivot_point, Some([5.0, 6.0, 7.0]));
    assert_eq!(scene.nodes[1].common().pivot_point, None);
}

#[test]
fn layer_shading_flags_are_exact_union_of_keywords() {
    let source = r#"
        Materials {
            Material {
                Layer {
                    FilterMode Blend,
                    Unshaded,
                    TwoSided,
                    static TextureID 0,
                    static Alpha 1.0,
                },
            },
        }
    "#;
    let scene = expect_parse(source);
    let layer = &scene.materials[0].layers[0];
    use mdl_format::flags::LayerShading;
    assert_eq!(layer.shading, LayerShading::UNSHADED | LayerShading::TWO_SIDED);
    assert!(!layer.shading.contains(LayerShading::SPHERE_ENV_MAP));
    assert!(!layer.shading.contains(LayerShading::NO_DEPTH_TEST));
}

#[test]
fn bones_helpers_attachments_are_not_in_flat_node_list() {
    let source = r#"
        Bone "Root" {
            ObjectId 0,
        }
        Helper "Aux" {
            ObjectId 1,
        }
        Attachment "Hardpoint" {
            ObjectId 2,
            Path "Hardpoint.mdl",
        }
        Light "Sun" {
            ObjectId 3,
        }
    "#;
    let scene = expect_parse(source);
    assert_eq!(scene.bones.len(), 1);
    assert_eq!(scene.helpers.len(), 1);
    assert_eq!(scene.attachments.len(), 1);
    // Only the Light participates in the flat arena.
    assert_eq!(scene.nodes.len(), 1);
    assert!(matches!(scene.nodes[0], Node::Light(_)));
}

#[test]
fn node_flags_carry_exactly_one_type_tag_per_kind() {
    use mdl_format::flags::NodeType;
    let source = r#"
        Light "Sun" { ObjectId 0, }
        EventObject "Boom" { ObjectId 1, EventTrack 1 { 1 }, }
    "#;
    let scene = expect_parse(source);
    for node in &scene.nodes {
        let tag = node.common().node_type;
        assert_eq!(tag.bits().count_ones(), 1, "expected exactly one type-tag bit");
    }
    assert_eq!(scene.nodes[0].common().node_type, NodeType::LIGHT);
    assert_eq!(scene.nodes[1].common().node_type, NodeType::EVENT_OBJECT);
}

#[test]
fn keyframe_arity_matches_channel_and_tangents_absent_outside_hermite_bezier() {
    let source = r#"
        Camera "Standard" {
            Position { 0, 0, 0 },
            FieldOfView 1.5,
            NearClip 1.0,
            FarClip 5000.0,
            Translation { 3,
                Linear,
                0: { 0, 0, 0 },
                10: { 1, 1, 1 },
                20: { 2, 2, 2 },
            },
        }
    "#;
    let scene = expect_parse(source);
    let camera = &scene.cameras[0];
    let mdl_format::track::AnimatableVec3::Animated(track) = camera.translation.as_ref().unwrap() else {
        panic!("expected an animated Translation track");
    };
    assert_eq!(track.line_type, LineType::Linear);
    for key in &track.keys {
        assert_eq!(key.vector.arity(), 3);
        assert!(key.in_tan.is_none());
        assert!(key.out_tan.is_none());
    }
}

#[test]
fn materials_block_rejects_unknown_keyword() {
    let source = r#"
        Materials {
            Material {
                NotARealKeyword 1,
            },
        }
    "#;
    assert!(parse(source).is_err());
}

#[test]
fn sequence_ordering_matches_source_order() {
    let source = r#"
        Sequences {
            Anim "Stand" { Interval { 0, 100 }, },
            Anim "Walk" { Interval { 100, 200 }, },
            Anim "Attack" { Interval { 200, 250 }, },
        }
    "#;
    let scene = expect_parse(source);
    let names: Vec<&str> = scene.sequences.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Stand", "Walk", "Attack"]);
}

#[test]
fn geoset_dense_buffers_parse_and_preserve_order() {
    let source = r#"
        Geoset {
            Vertices 2 {
                { 0, 0, 0 },
                { 1, 1, 1 },
            },
            Normals 2 {
                { 0, 1, 0 },
                { 0, 1, 0 },
            },
            VertexGroup { 0, 0 },
            Faces 1 3 { Triangles { 0, 1, 0 } },
            Groups 1 1 { Matrices { 0 } },
            MaterialID 0,
        }
    "#;
    let scene = expect_parse(source);
    let geoset = &scene.geosets[0];
    assert_eq!(geoset.vertices, vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
    assert_eq!(geoset.normals, vec![0.0, 1.0, 0.0, 0.0, 1.0, 0.0]);
    assert_eq!(geoset.vertex_group, vec![0, 0]);
    assert_eq!(geoset.faces, vec![0, 1, 0]);
    assert_eq!(geoset.total_groups_count, 1);
}

#[test]
fn global_sequences_preserve_duration_order() {
    let source = r#"
        GlobalSequences 3 {
            Duration 1000,
            Duration 500,
            Duration 2000,
        }
    "#;
    let scene = expect_parse(source);
    assert_eq!(scene.global_sequences, vec![1000, 500, 2000]);
}

#[test]
fn particle_emitter2_segment_color_is_bgr_normalized() {
    let source = r#"
        ParticleEmitter2 "Fx" {
            ObjectId 0,
            SegmentColor {
                Color { 0.1, 0.2, 0.3 },
                Color { 0.4, 0.5, 0.6 },
            },
        }
    "#;
    let scene = expect_parse(source);
    let Node::ParticleEmitter2(emitter) = &scene.nodes[0] else {
        panic!("expected a ParticleEmitter2 node");
    };
    assert_eq!(emitter.segment_color, vec![[0.3, 0.2, 0.1], [0.6, 0.5, 0.4]]);
}

#[test]
fn animated_track_without_hermite_or_bezier_has_no_tangents() {
    let track = AnimatedTrack {
        line_type: LineType::Linear,
        global_seq_id: None,
        keys: vec![],
    };
    assert!(!matches!(track.line_type, LineType::Hermite | LineType::Bezier));
}
