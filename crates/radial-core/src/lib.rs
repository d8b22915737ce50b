//! Radial Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Radial diagram
//! crates. It includes:
//!
//! - **Geometry**: Points, attachment directions and the fixed node metrics ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Draw**: The drawing-surface abstraction diagrams render against ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
