// Copyright 2026 the Attire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attire Style: named, declarative visual styles for UI widgets.
//!
//! This crate defines the data model consumed by the application engine in
//! `attire_apply`: styles, attribute directives, and the device-context
//! conditions that gate them. It contains no widget code; capability traits
//! for concrete widgets live in `attire_target`.
//!
//! ## Core Concepts
//!
//! ### Styles
//!
//! [`Style`] is a named, ordered bundle of [`StyleAttribute`] directives.
//! Order is significant: when two directives target the same visual property
//! and both pass their condition filter, the later one wins. Styles are
//! immutable after creation and cheap to clone (`Rc` internally), so one
//! style can be shared across many widgets.
//!
//! ```rust
//! use attire_style::{Attribute, Style, StyleBuilder};
//! use peniko::Color;
//!
//! let style = StyleBuilder::new("primaryButton")
//!     .attribute(Attribute::BackgroundColor(Color::from_rgb8(0, 120, 212)))
//!     .attribute(Attribute::CornerRadius(4.0))
//!     .build();
//!
//! assert_eq!(style.name(), "primaryButton");
//! assert_eq!(style.len(), 2);
//! ```
//!
//! ### Conditions
//!
//! Every directive carries an [`InterfaceIdiom`] condition. A directive with
//! `InterfaceIdiom::Unspecified` applies everywhere; any other idiom must
//! equal the device's current idiom at application time.
//!
//! ```rust
//! use attire_style::{Attribute, InterfaceIdiom, StyleAttribute};
//!
//! let phone_only = StyleAttribute::new(Attribute::CornerRadius(8.0))
//!     .with_idiom(InterfaceIdiom::Phone);
//!
//! assert!(phone_only.applies_to(InterfaceIdiom::Phone));
//! assert!(!phone_only.applies_to(InterfaceIdiom::Tablet));
//! ```
//!
//! State-dependent visuals (button background images, title colors) are
//! additionally scoped by [`ControlState`], and bar-item background images
//! by [`BarMetrics`].
//!
//! ### Anchors
//!
//! [`AnchorSpec`] describes a sizing constraint on a widget's width or
//! height, either absolute or as a ratio of the widget's perpendicular
//! dimension. Anchor directives receive exclusive-replacement semantics in
//! the engine; see `attire_apply`.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. The `std` feature (default)
//! forwards to kurbo and peniko; use `libm` instead for no_std builds.

#![no_std]

extern crate alloc;

mod attribute;
mod condition;
mod style;

pub use attribute::{AnchorRelation, AnchorSpec, Attribute, AttributeKind, FontSpec, ImageHandle};
pub use condition::{BarMetrics, ControlState, IdiomSource, InterfaceIdiom};
pub use style::{Style, StyleAttribute, StyleBuilder};
