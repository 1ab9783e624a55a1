// Copyright 2026 the Attire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attire Apply: the style resolution and application engine.
//!
//! This crate turns a widget's assigned style names, plus the current device
//! context, into a concrete ordered set of attribute mutations on that
//! widget:
//!
//! 1. [`Stylist`] resolves each assigned name through a [`StyleResolver`]
//!    (typically a [`StyleCatalog`]), in assignment order.
//! 2. [`apply_style`] walks each resolved style's directives in order,
//!    skipping any whose idiom condition fails.
//! 3. [`apply_attribute`] routes each surviving directive to the widget
//!    capability that understands it, silently no-opping when the widget
//!    lacks that capability.
//! 4. Sizing anchors go through [`apply_anchor`], which replaces any prior
//!    exact-equality constraint on the same dimension instead of
//!    accumulating.
//!
//! Nothing in this pipeline returns an error: unknown style names,
//! capability mismatches, and constraint conflicts all degrade to no-ops so
//! that one style can be shared across a heterogeneous widget tree.
//!
//! # Example
//!
//! ```rust
//! use attire_apply::{StyleCatalog, Stylist};
//! use attire_style::{Attribute, FontSpec, InterfaceIdiom, StyleBuilder};
//! use attire_target::{StyleTarget, TextStyle};
//! use peniko::Color;
//!
//! #[derive(Default)]
//! struct Label {
//!     text_color: Option<Color>,
//!     font: Option<FontSpec>,
//! }
//!
//! impl TextStyle for Label {
//!     fn set_text_color(&mut self, color: Color) {
//!         self.text_color = Some(color);
//!     }
//!     fn set_font(&mut self, font: FontSpec) {
//!         self.font = Some(font);
//!     }
//! }
//!
//! impl StyleTarget for Label {
//!     fn as_label(&mut self) -> Option<&mut dyn TextStyle> {
//!         Some(self)
//!     }
//! }
//!
//! let mut catalog = StyleCatalog::new();
//! catalog.register(
//!     StyleBuilder::new("caption")
//!         .attribute(Attribute::TextColor(Color::from_rgb8(96, 96, 96)))
//!         .attribute(Attribute::Font(FontSpec::system(12.0)))
//!         .build(),
//! );
//!
//! let mut stylist = Stylist::new(InterfaceIdiom::Phone);
//! let mut label = Label::default();
//!
//! // Unknown names are skipped silently; "caption" still applies.
//! stylist.set_styles(1_u32, ["missing", "caption"], &mut label, &catalog);
//!
//! assert_eq!(label.font, Some(FontSpec::system(12.0)));
//! assert_eq!(stylist.styles(1), ["missing", "caption"]);
//! ```
//!
//! ## Threading
//!
//! The engine is single-threaded and synchronous: widgets and their
//! constraint sets are not internally synchronized, and styles share data
//! via `Rc`. All operations are direct, bounded mutations meant to run on
//! the thread that owns the UI.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. The `std` feature (default)
//! forwards to the data-model crates; use `libm` instead for no_std builds.

#![no_std]

extern crate alloc;

mod anchor;
mod dispatch;
mod stylist;

#[cfg(test)]
pub(crate) mod testing;

pub use anchor::apply_anchor;
pub use dispatch::{apply_attribute, apply_style};
pub use stylist::{StyleCatalog, StyleResolver, Stylist};
