// Copyright 2026 the Attire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute payload types and the closed set of attribute kinds.
//!
//! [`Attribute`] is the tagged variant carried by a
//! [`StyleAttribute`](crate::StyleAttribute): one visual property change with
//! its payload. The set of kinds is closed; the engine in `attire_apply`
//! routes each kind to the widget capability that understands it.

use alloc::string::String;
use core::fmt;

use kurbo::Insets;
use peniko::Color;

/// An opaque handle to an image resource.
///
/// The styling engine never inspects image contents; it only forwards
/// handles to widgets. Handle values are application-defined, typically
/// indices into an image cache or atlas.
///
/// # Example
///
/// ```rust
/// use attire_style::ImageHandle;
///
/// const CHECKMARK: ImageHandle = ImageHandle::new(0);
/// const CHEVRON: ImageHandle = ImageHandle::new(1);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImageHandle(u32);

impl ImageHandle {
    /// Creates a new image handle with the given index.
    #[must_use]
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the underlying index of this handle.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ImageHandle").field(&self.0).finish()
    }
}

/// A font descriptor: an optional family name and a point size.
///
/// `family: None` requests the platform's default UI font at the given size.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    /// Font family name, or `None` for the platform default.
    pub family: Option<String>,
    /// Point size.
    pub size: f64,
}

impl FontSpec {
    /// Creates a descriptor for the platform default font at `size`.
    #[must_use]
    pub fn system(size: f64) -> Self {
        Self { family: None, size }
    }

    /// Creates a descriptor for a named font family at `size`.
    #[must_use]
    pub fn named(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: Some(family.into()),
            size,
        }
    }
}

/// The relation of a sizing constraint.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnchorRelation {
    /// The dimension must equal the anchor value exactly.
    #[default]
    Equal,
    /// The dimension must be at least the anchor value.
    GreaterOrEqual,
    /// The dimension must be at most the anchor value.
    LessOrEqual,
}

/// A sizing anchor for a widget's width or height.
///
/// When `ratio` is false, `constant` is an absolute dimension in points.
/// When `ratio` is true, the anchored dimension is tied to the widget's own
/// perpendicular dimension (height for a width anchor and vice versa),
/// scaled by `constant`.
///
/// # Example
///
/// ```rust
/// use attire_style::{AnchorRelation, AnchorSpec};
///
/// // Exactly 44 points.
/// let fixed = AnchorSpec::absolute(44.0);
/// assert!(!fixed.ratio);
///
/// // Half of the perpendicular dimension, as a lower bound.
/// let half = AnchorSpec::aspect(0.5).with_relation(AnchorRelation::GreaterOrEqual);
/// assert!(half.ratio);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnchorSpec {
    /// Absolute dimension, or scale factor when `ratio` is set.
    pub constant: f64,
    /// Whether the anchor is relative to the perpendicular dimension.
    pub ratio: bool,
    /// The constraint relation.
    pub equality: AnchorRelation,
}

impl AnchorSpec {
    /// Creates an exact-equality absolute anchor of `constant` points.
    #[must_use]
    pub const fn absolute(constant: f64) -> Self {
        Self {
            constant,
            ratio: false,
            equality: AnchorRelation::Equal,
        }
    }

    /// Creates an exact-equality ratio anchor scaled by `factor`.
    #[must_use]
    pub const fn aspect(factor: f64) -> Self {
        Self {
            constant: factor,
            ratio: true,
            equality: AnchorRelation::Equal,
        }
    }

    /// Returns this anchor with a different relation.
    #[must_use]
    pub const fn with_relation(mut self, relation: AnchorRelation) -> Self {
        self.equality = relation;
        self
    }
}

/// One visual property change with its payload.
///
/// Each kind targets one widget capability; the engine silently skips an
/// attribute when the widget lacks that capability:
///
/// | Kind | Capability |
/// |---|---|
/// | `BackgroundColor`, `CornerRadius`, `BorderColor`, `BorderWidth`, `TintColor`, `Alpha`, `ShadowAlpha` | view |
/// | `Image`, `ImageEdgeInsets`, `TitleEdgeInsets`, `ContentEdgeInsets` | button |
/// | `BackgroundImage` | button (per control state), bar button item (per control state and bar metrics), or view (tiled pattern) |
/// | `TextColor`, `Font` | label-like (or button title) |
/// | `WidthAnchor`, `HeightAnchor` | view, with exclusive-constraint replacement |
#[derive(Clone, Debug, PartialEq)]
pub enum Attribute {
    /// Background fill color.
    BackgroundColor(Color),
    /// Corner rounding radius in points.
    CornerRadius(f64),
    /// Border stroke color.
    BorderColor(Color),
    /// Border stroke width in points.
    BorderWidth(f64),
    /// Tint color applied to template content.
    TintColor(Color),
    /// Overall opacity in `[0, 1]`.
    Alpha(f64),
    /// Shadow opacity in `[0, 1]`.
    ShadowAlpha(f64),
    /// Foreground image (buttons only, normal state).
    Image(ImageHandle),
    /// Background image; see the kind table for routing.
    BackgroundImage(ImageHandle),
    /// Insets around a button's image.
    ImageEdgeInsets(Insets),
    /// Insets around a button's title.
    TitleEdgeInsets(Insets),
    /// Insets around a button's whole content.
    ContentEdgeInsets(Insets),
    /// Text foreground color.
    TextColor(Color),
    /// Text font.
    Font(FontSpec),
    /// Width sizing anchor.
    WidthAnchor(AnchorSpec),
    /// Height sizing anchor.
    HeightAnchor(AnchorSpec),
}

impl Attribute {
    /// Returns the kind tag of this attribute.
    #[must_use]
    pub const fn kind(&self) -> AttributeKind {
        match self {
            Self::BackgroundColor(_) => AttributeKind::BackgroundColor,
            Self::CornerRadius(_) => AttributeKind::CornerRadius,
            Self::BorderColor(_) => AttributeKind::BorderColor,
            Self::BorderWidth(_) => AttributeKind::BorderWidth,
            Self::TintColor(_) => AttributeKind::TintColor,
            Self::Alpha(_) => AttributeKind::Alpha,
            Self::ShadowAlpha(_) => AttributeKind::ShadowAlpha,
            Self::Image(_) => AttributeKind::Image,
            Self::BackgroundImage(_) => AttributeKind::BackgroundImage,
            Self::ImageEdgeInsets(_) => AttributeKind::ImageEdgeInsets,
            Self::TitleEdgeInsets(_) => AttributeKind::TitleEdgeInsets,
            Self::ContentEdgeInsets(_) => AttributeKind::ContentEdgeInsets,
            Self::TextColor(_) => AttributeKind::TextColor,
            Self::Font(_) => AttributeKind::Font,
            Self::WidthAnchor(_) => AttributeKind::WidthAnchor,
            Self::HeightAnchor(_) => AttributeKind::HeightAnchor,
        }
    }
}

/// The kind tag of an [`Attribute`], without its payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[expect(missing_docs, reason = "tags mirror the documented Attribute variants")]
pub enum AttributeKind {
    BackgroundColor,
    CornerRadius,
    BorderColor,
    BorderWidth,
    TintColor,
    Alpha,
    ShadowAlpha,
    Image,
    BackgroundImage,
    ImageEdgeInsets,
    TitleEdgeInsets,
    ContentEdgeInsets,
    TextColor,
    Font,
    WidthAnchor,
    HeightAnchor,
}
