//! phonabet: a terminal reference for a constructed-language sound alphabet.
//!
//! The [`alphabet`] module holds the static catalogue; [`cli`] exposes the
//! command surface. Rendering lives in the `phonabet-render` crate.

pub mod alphabet;
pub mod cli;
