//! The `Sequences` top-level handler (`spec.md` §4.4).
//!
//! Each entry's body mixes typed numeric/array keys with a bare
//! presence flag (`NonLooping`), so it is read with a dedicated loop
//! rather than [`crate::value::read_object`]'s generic key/value
//! reader, which assumes every key carries a value.

use crate::error::SyntaxError;
use crate::scanner::Scanner;
use crate::scene::{Scene, Sequence};
use crate::value;

/// Reads a `Sequences { Anim "Name" { ... } ... }` block.
pub fn read_sequences(scanner: &mut Scanner, scene: &mut Scene) -> Result<(), SyntaxError> {
    scanner.expect_symbol('{')?;
    loop {
        if scanner.maybe_symbol('}') {
            break;
        }
        let kw = scanner
            .keyword()
            .ok_or_else(|| SyntaxError::expected_keyword(scanner.offset()))?;
        if kw != "Anim" {
            return Err(SyntaxError::unknown_keyword(scanner.offset(), kw));
        }
        scene.sequences.push(read_sequence(scanner)?);
        scanner.maybe_comma();
    }
    Ok(())
}

fn read_sequence(scanner: &mut Scanner) -> Result<Sequence, SyntaxError> {
    let mut sequence = Sequence::default();
    if let Some(name) = scanner.quoted_string() {
        sequence.name = name;
    }
    scanner.expect_symbol('{')?;
    loop {
        if scanner.maybe_symbol('}') {
            break;
        }
        let key = scanner
            .keyword()
            .ok_or_else(|| SyntaxError::expected_keyword(scanner.offset()))?;
        match key.as_str() {
            "Interval" => {
                let values = scanner.array()?.unwrap_or_default();
                if values.len() == 2 {
                    sequence.interval = (values[0] as u32, values[1] as u32);
                }
            }
            "MinimumExtent" => sequence.minimum_extent = value::read_vec3(scanner)?,
            "MaximumExtent" => sequence.maximum_extent = value::read_vec3(scanner)?,
            "BoundsRadius" => sequence.bounds_radius = scanner.number()? as f32,
            "Rarity" => sequence.rarity = Some(scanner.number()? as f32),
            "MoveSpeed" => sequence.move_speed = Some(scanner.number()? as f32),
            "NonLooping" => sequence.non_looping = true,
            _ => {
                value::read_value(scanner)?;
            }
        }
        scanner.maybe_comma();
    }
    Ok(sequence)
}
