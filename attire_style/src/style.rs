// Copyright 2026 the Attire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style definitions: conditioned attribute directives and named bundles.
//!
//! This module provides [`StyleAttribute`], a single directive with its
//! applicability conditions, and [`Style`], a named ordered bundle of
//! directives shared across widgets.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::attribute::Attribute;
use crate::condition::{BarMetrics, ControlState, InterfaceIdiom};

/// One style directive: an [`Attribute`] plus its applicability conditions.
///
/// A directive applies when its idiom condition passes (see
/// [`applies_to`](Self::applies_to)). The control state scopes button
/// payloads, and the bar metrics scope bar-button-item background images;
/// both default to their resting values and are ignored by attribute kinds
/// that have no use for them.
///
/// # Example
///
/// ```rust
/// use attire_style::{Attribute, ControlState, ImageHandle, InterfaceIdiom, StyleAttribute};
///
/// let pressed = StyleAttribute::new(Attribute::BackgroundImage(ImageHandle::new(3)))
///     .with_control_state(ControlState::Highlighted)
///     .with_idiom(InterfaceIdiom::Phone);
///
/// assert_eq!(pressed.control_state(), ControlState::Highlighted);
/// assert!(pressed.applies_to(InterfaceIdiom::Phone));
/// assert!(!pressed.applies_to(InterfaceIdiom::Tablet));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StyleAttribute {
    attribute: Attribute,
    idiom: InterfaceIdiom,
    control_state: ControlState,
    bar_metrics: BarMetrics,
}

impl StyleAttribute {
    /// Creates an unconditional directive for the given attribute.
    ///
    /// The idiom defaults to `Unspecified`, the control state to `Normal`,
    /// and the bar metrics to `Default`.
    #[must_use]
    pub fn new(attribute: Attribute) -> Self {
        Self {
            attribute,
            idiom: InterfaceIdiom::Unspecified,
            control_state: ControlState::Normal,
            bar_metrics: BarMetrics::Default,
        }
    }

    /// Returns this directive conditioned on the given idiom.
    #[must_use]
    pub fn with_idiom(mut self, idiom: InterfaceIdiom) -> Self {
        self.idiom = idiom;
        self
    }

    /// Returns this directive scoped to the given control state.
    #[must_use]
    pub fn with_control_state(mut self, state: ControlState) -> Self {
        self.control_state = state;
        self
    }

    /// Returns this directive scoped to the given bar metrics.
    #[must_use]
    pub fn with_bar_metrics(mut self, metrics: BarMetrics) -> Self {
        self.bar_metrics = metrics;
        self
    }

    /// Returns the attribute payload.
    #[must_use]
    #[inline]
    pub fn attribute(&self) -> &Attribute {
        &self.attribute
    }

    /// Returns the idiom condition.
    #[must_use]
    #[inline]
    pub fn idiom(&self) -> InterfaceIdiom {
        self.idiom
    }

    /// Returns the control-state scope.
    #[must_use]
    #[inline]
    pub fn control_state(&self) -> ControlState {
        self.control_state
    }

    /// Returns the bar-metrics scope.
    #[must_use]
    #[inline]
    pub fn bar_metrics(&self) -> BarMetrics {
        self.bar_metrics
    }

    /// Returns `true` if this directive applies under the current idiom.
    ///
    /// This is the condition filter: it must pass before any dispatch, and a
    /// failing directive is skipped entirely.
    #[must_use]
    #[inline]
    pub fn applies_to(&self, current: InterfaceIdiom) -> bool {
        self.idiom.matches(current)
    }
}

/// Internal storage for a style's directives.
#[derive(Debug)]
struct StyleData {
    name: String,
    attributes: Vec<StyleAttribute>,
}

/// A named, ordered bundle of style directives.
///
/// Styles are immutable after creation; use [`StyleBuilder`] to construct
/// them. Cloning is cheap (`Rc` internally), so a registry can hand out the
/// same style to any number of widgets.
///
/// Directive order is significant: when two directives target the same
/// visual property and both pass their condition filter, the later one wins.
/// For sizing anchors the engine enforces this with exclusive-constraint
/// replacement rather than accumulation.
///
/// # Example
///
/// ```rust
/// use attire_style::{Attribute, Style, StyleBuilder};
///
/// let style = StyleBuilder::new("card")
///     .attribute(Attribute::CornerRadius(8.0))
///     .attribute(Attribute::BorderWidth(1.0))
///     .build();
///
/// let shared = style.clone();
/// assert_eq!(shared.name(), "card");
/// assert_eq!(shared.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Style {
    inner: Rc<StyleData>,
}

impl Style {
    /// Returns the style's name.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Returns the number of directives in this style.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.attributes.len()
    }

    /// Returns `true` if this style has no directives.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.attributes.is_empty()
    }

    /// Returns an iterator over the directives in application order.
    pub fn attributes(&self) -> impl Iterator<Item = &StyleAttribute> + '_ {
        self.inner.attributes.iter()
    }
}

/// Builder for constructing [`Style`] instances.
///
/// # Example
///
/// ```rust
/// use attire_style::{Attribute, InterfaceIdiom, StyleAttribute, StyleBuilder};
/// use peniko::Color;
///
/// let style = StyleBuilder::new("banner")
///     .attribute(Attribute::BackgroundColor(Color::from_rgb8(255, 59, 48)))
///     .push(
///         StyleAttribute::new(Attribute::CornerRadius(12.0))
///             .with_idiom(InterfaceIdiom::Tablet),
///     )
///     .build();
///
/// assert_eq!(style.len(), 2);
/// ```
#[derive(Debug)]
pub struct StyleBuilder {
    name: String,
    attributes: Vec<StyleAttribute>,
}

impl StyleBuilder {
    /// Creates a builder for a style with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Appends a fully conditioned directive.
    #[must_use]
    pub fn push(mut self, attribute: StyleAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Appends an unconditional directive for the given attribute.
    #[must_use]
    pub fn attribute(self, attribute: Attribute) -> Self {
        self.push(StyleAttribute::new(attribute))
    }

    /// Builds the style.
    #[must_use]
    pub fn build(self) -> Style {
        Style {
            inner: Rc::new(StyleData {
                name: self.name,
                attributes: self.attributes,
            }),
        }
    }
}
