// Copyright 2026 the Attire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attire Target: widget capability traits and the constraint-set model.
//!
//! Concrete widget types are heterogeneous: each supports only a subset of
//! the visual attributes a style can carry. Rather than downcasting through
//! a class hierarchy, the engine asks a widget which capabilities it
//! satisfies via [`StyleTarget`], whose accessors all default to `None`. A
//! widget opts into a capability by overriding the accessor:
//!
//! ```rust
//! use attire_style::ImageHandle;
//! use attire_target::{ConstraintSet, ConstraintStore, StyleTarget, ViewStyle};
//! use peniko::Color;
//!
//! #[derive(Default)]
//! struct Panel {
//!     background: Option<Color>,
//!     constraints: ConstraintStore,
//!     sizes_from_frame: bool,
//! }
//!
//! impl ViewStyle for Panel {
//!     fn set_background_color(&mut self, color: Color) {
//!         self.background = Some(color);
//!     }
//!     fn set_corner_radius(&mut self, _radius: f64) {}
//!     fn set_border_color(&mut self, _color: Color) {}
//!     fn set_border_width(&mut self, _width: f64) {}
//!     fn set_tint_color(&mut self, _color: Color) {}
//!     fn set_alpha(&mut self, _alpha: f64) {}
//!     fn set_shadow_alpha(&mut self, _alpha: f64) {}
//!     fn set_background_pattern(&mut self, _image: ImageHandle) {}
//!     fn constraints(&mut self) -> &mut dyn ConstraintSet {
//!         &mut self.constraints
//!     }
//!     fn set_sizes_from_frame(&mut self, sizes: bool) {
//!         self.sizes_from_frame = sizes;
//!     }
//! }
//!
//! impl StyleTarget for Panel {
//!     fn as_view(&mut self) -> Option<&mut dyn ViewStyle> {
//!         Some(self)
//!     }
//! }
//! ```
//!
//! A widget may satisfy several capabilities at once; a button typically
//! answers both [`StyleTarget::as_view`] and [`StyleTarget::as_button`].
//!
//! ## Constraints
//!
//! Sizing anchors need exclusive-replacement semantics: at most one
//! exact-equality width constraint and one height constraint may be active
//! on a widget. [`ConstraintSet`] abstracts the underlying layout engine
//! with find/deactivate/activate operations, and [`ConstraintStore`] is an
//! in-memory implementation suitable for headless use and tests.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. The `std` feature (default)
//! forwards to kurbo and peniko; use `libm` instead for no_std builds.

#![no_std]

extern crate alloc;

mod capability;
mod constraint;

pub use capability::{
    BarButtonItemStyle, BarItemStyle, ButtonStyle, StyleTarget, TextStyle, ViewStyle,
};
pub use constraint::{
    Constraint, ConstraintId, ConstraintSet, ConstraintSource, ConstraintStore, Dimension,
};
