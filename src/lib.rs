//! Parametric **slide-n-snap** connector geometry for 3D-printed parts.
//!
//! A male dovetail clip slides into a female channel until a latch on a
//! living spring drops in behind it. The [`snap`] module builds both halves as
//! [`Solid`] CSG trees from a handful of dimensions; the bundled BSP kernel
//! turns a tree into a polygon [`Mesh`](mesh::Mesh) with boolean operations
//! (*union*, *difference*, *intersection*) on polygons stored in [BSP](mesh::bsp)
//! trees.
//!
//! # Features
//! #### Default
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): in-memory `.stl`
//!   encoding and decoding
//!
//! #### Optional
//! - **parallel**: use rayon to evaluate both operands of each boolean at once
//!
//! # Logging
//! Generators report derived dimensions at `debug`, parameter advisories at
//! `warn` and kernel operand sizes at `trace` through [`tracing`]. Installing
//! a subscriber is up to the application.

#![forbid(unsafe_code)]
#![warn(clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod io;
pub mod mesh;
pub mod profile;
pub mod snap;
pub mod solid;
pub mod traits;

pub use errors::ValidationError;
pub use float_types::Real;
pub use mesh::Mesh;
pub use profile::{Profile, SketchPlane};
pub use snap::{Preset, SnapParams};
pub use solid::Solid;
pub use traits::CSG;
