//! Issue Graph Core Types and Definitions
//!
//! This crate provides the foundational types shared by the issue graph
//! library and its command-line front end. It includes:
//!
//! - **Identifiers**: Issue numbers as a strong type ([`identifier::IssueId`])
//! - **Colors**: Validated CSS colors for node fills ([`color::Color`])
//! - **Geometry**: Integer geometric types ([`geometry`] module)
//! - **Semantic**: Fetched issues and the issue arena ([`semantic`] module)

pub mod color;
pub mod geometry;
pub mod identifier;
pub mod semantic;
