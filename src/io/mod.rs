//! In-memory mesh encodings. Nothing here touches the filesystem.

#[cfg(feature = "stl-io")]
mod stl;
