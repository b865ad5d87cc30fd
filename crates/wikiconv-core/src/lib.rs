//! Wikiconv Core
//!
//! This crate provides the core types and error definitions for the
//! wikiconv wiki-markup converter.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Token`] - The tagged token model produced by parse rules
//! - [`DeflistToken`], [`ListToken`], [`TableToken`], [`Side`] - Token families
//! - [`Segment`], [`Document`] - The parsed document model
//! - [`WikiconvError`] - Error types

pub mod error;
pub mod segment;
pub mod token;

pub use error::{Result, WikiconvError};
pub use segment::{Document, Segment};
pub use token::{DeflistToken, ListToken, Side, TableToken, Token};
