#![warn(clippy::expect_used, clippy::panic, clippy::unwrap_used)]
#![warn(missing_docs)]

//! mdl-format
//!
//! A parser for the MDL text 3D model format used by a legacy
//! real-time strategy game engine, and its binary twin's shared
//! data model.
//!
//! # Examples
//!
//! ```no_run
//! use mdl_format::{error::Error, parse};
//!
//! let source = std::fs::read_to_string("model.mdl")?;
//! let scene = parse(&source)?;
//!
//! println!("{:#?}", scene);
//! # Ok::<(), Error>(())
//! ```
//!
//! ## Scope
//!
//! This crate turns MDL source text into a normalized [`scene::Scene`]
//! graph: skeletal nodes, geometry sets, materials, animated property
//! tracks, emitters, cameras and lights. It does not read or write the
//! binary MDX twin format, decode textures, render anything, or touch
//! the filesystem — [`parse`] takes a `&str` and returns a `Scene` or
//! an [`error::Error`].

pub mod color;
pub mod error;
pub mod flags;
pub mod node;
pub mod parser;
pub mod scanner;
pub mod scene;
pub mod track;
pub mod value;

pub use error::Error;
pub use parser::parse;
pub use scene::Scene;
