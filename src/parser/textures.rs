//! The `Textures` and `TextureAnims` top-level handlers (`spec.md` §4.4).

use crate::error::SyntaxError;
use crate::flags::TextureFlags;
use crate::scanner::Scanner;
use crate::scene::{Scene, Texture, TextureAnim};
use crate::track::{read_animatable_vec3, read_animatable_vec4};
use crate::value;

/// Reads a `Textures { <count> Bitmap { ... } ... }` block. The
/// leading count is a hint, as with the other counted blocks, and is
/// not trusted.
pub fn read_textures(scanner: &mut Scanner, scene: &mut Scene) -> Result<(), SyntaxError> {
    scanner.expect_symbol('{')?;
    if matches!(scanner.peek_char(), Some(c) if c == '-' || c.is_ascii_digit()) {
        let _hint_count = scanner.number()?;
    }
    loop {
        if scanner.maybe_symbol('}') {
            break;
        }
        let kw = scanner
            .keyword()
            .ok_or_else(|| SyntaxError::expected_keyword(scanner.offset()))?;
        if kw != "Bitmap" {
            return Err(SyntaxError::unknown_keyword(scanner.offset(), kw));
        }
        scene.textures.push(read_texture(scanner)?);
        scanner.maybe_comma();
    }
    Ok(())
}

fn read_texture(scanner: &mut Scanner) -> Result<Texture, SyntaxError> {
    let mut texture = Texture::default();
    scanner.expect_symbol('{')?;
    loop {
        if scanner.maybe_symbol('}') {
            break;
        }
        let key = scanner
            .keyword()
            .ok_or_else(|| SyntaxError::expected_keyword(scanner.offset()))?;
        match key.as_str() {
            "Image" => {
                texture.image = scanner
                    .quoted_string()
                    .ok_or_else(|| SyntaxError::expected_symbol(scanner.offset(), '"'))?;
            }
            "ReplaceableId" => texture.replaceable_id = scanner.number()? as i64,
            "WrapWidth" => texture.flags |= TextureFlags::WRAP_WIDTH,
            "WrapHeight" => texture.flags |= TextureFlags::WRAP_HEIGHT,
            _ => {
                value::read_value(scanner)?;
            }
        }
        scanner.maybe_comma();
    }
    Ok(texture)
}

/// Reads a `TextureAnims { TVertexAnim { ... } ... }` block. A
/// fixed-shape handler (`spec.md` §4.6): unrecognized in-block
/// keywords are errors.
pub fn read_texture_anims(scanner: &mut Scanner, scene: &mut Scene) -> Result<(), SyntaxError> {
    scanner.expect_symbol('{')?;
    loop {
        if scanner.maybe_symbol('}') {
            break;
        }
        let kw = scanner
            .keyword()
            .ok_or_else(|| SyntaxError::expected_keyword(scanner.offset()))?;
        if kw != "TVertexAnim" {
            return Err(SyntaxError::unknown_keyword(scanner.offset(), kw));
        }
        scene.texture_anims.push(read_tvertex_anim(scanner)?);
        scanner.maybe_comma();
    }
    Ok(())
}

fn read_tvertex_anim(scanner: &mut Scanner) -> Result<TextureAnim, SyntaxError> {
    let mut anim = TextureAnim::default();
    scanner.expect_symbol('{')?;
    loop {
        if scanner.maybe_symbol('}') {
            break;
        }
        let kw = scanner
            .keyword()
            .ok_or_else(|| SyntaxError::expected_keyword(scanner.offset()))?;
        match kw.as_str() {
            "Translation" => anim.translation = Some(read_animatable_vec3(scanner, false)?),
            "Rotation" => anim.rotation = Some(read_animatable_vec4(scanner, false)?),
            "Scaling" => anim.scaling = Some(read_animatable_vec3(scanner, false)?),
            _ => return Err(SyntaxError::unknown_keyword(scanner.offset(), kw)),
        }
        scanner.maybe_comma();
    }
    Ok(anim)
}
