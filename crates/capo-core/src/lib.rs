//! Capo Core Types and Definitions
//!
//! This crate provides the foundational types for rendering guitar chord
//! diagrams. It includes:
//!
//! - **Fingerings**: Symbolic chord shapes ([`fingering::Fingering`],
//!   [`fingering::Barre`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Diagram and sheet coordinate mapping ([`geometry`] module)

pub mod color;
pub mod fingering;
pub mod geometry;
