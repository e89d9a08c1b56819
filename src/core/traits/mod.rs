//! Trait definitions for the collaborators around the segmentation engine.
//!
//! The engine only consumes and produces in-memory images. Decoding files,
//! encoding results and deciding where they go are delegated to
//! implementations of the traits in [`collaborators`].

pub mod collaborators;

pub use collaborators::{ImageSink, ImageSource};
