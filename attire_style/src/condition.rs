// Copyright 2026 the Attire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device and control-state context used to gate attribute application.
//!
//! Attributes are conditional: an [`InterfaceIdiom`] filter decides whether a
//! directive applies on the current device class, and [`ControlState`] /
//! [`BarMetrics`] scope state-dependent payloads. The idiom is read fresh on
//! every application pass through an [`IdiomSource`]; the engine never caches
//! it.

use core::fmt;

/// The device form-factor class an attribute is conditioned on.
///
/// `Unspecified` matches any device. Any other idiom must equal the current
/// device idiom for the attribute to apply.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum InterfaceIdiom {
    /// No device condition; matches everywhere.
    #[default]
    Unspecified,
    /// Phone-class devices.
    Phone,
    /// Tablet-class devices.
    Tablet,
    /// Television-class devices.
    Tv,
    /// In-car displays.
    Car,
}

impl InterfaceIdiom {
    /// Returns `true` if an attribute conditioned on `self` applies when the
    /// device reports `current`.
    ///
    /// `Unspecified` matches any current idiom, including `Unspecified`
    /// itself. A specific idiom matches only an identical current idiom, so
    /// a phone-only attribute is skipped on a device that reports
    /// `Unspecified`.
    #[must_use]
    #[inline]
    pub fn matches(self, current: Self) -> bool {
        self == Self::Unspecified || self == current
    }
}

impl fmt::Display for InterfaceIdiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unspecified => "unspecified",
            Self::Phone => "phone",
            Self::Tablet => "tablet",
            Self::Tv => "tv",
            Self::Car => "car",
        };
        f.write_str(name)
    }
}

/// The control state a state-dependent payload is scoped to.
///
/// Buttons keep separate background images and title colors per state; other
/// widgets ignore the state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ControlState {
    /// The resting state.
    #[default]
    Normal,
    /// Pressed or otherwise highlighted.
    Highlighted,
    /// Interaction disabled.
    Disabled,
    /// Selected (e.g. a toggled segment).
    Selected,
    /// Focus-driven highlight.
    Focused,
}

/// The bar sizing class a bar-item background image is scoped to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BarMetrics {
    /// Regular bar height.
    #[default]
    Default,
    /// Compact (landscape phone) bar height.
    Compact,
    /// Regular bar height with a prompt line.
    DefaultPrompt,
    /// Compact bar height with a prompt line.
    CompactPrompt,
}

/// A provider of the current interface idiom.
///
/// The binding layer queries the source once per application pass, so idiom
/// changes (e.g. window resizing into a different size class) take effect on
/// the next pass without any caching to invalidate.
///
/// Any `Fn() -> InterfaceIdiom` closure is a source, and a bare
/// [`InterfaceIdiom`] acts as a fixed source, which is convenient in tests:
///
/// ```rust
/// use attire_style::{IdiomSource, InterfaceIdiom};
///
/// let fixed = InterfaceIdiom::Tablet;
/// assert_eq!(fixed.interface_idiom(), InterfaceIdiom::Tablet);
///
/// let queried = || InterfaceIdiom::Phone;
/// assert_eq!(queried.interface_idiom(), InterfaceIdiom::Phone);
/// ```
pub trait IdiomSource {
    /// Returns the current interface idiom.
    fn interface_idiom(&self) -> InterfaceIdiom;
}

impl<F> IdiomSource for F
where
    F: Fn() -> InterfaceIdiom,
{
    #[inline]
    fn interface_idiom(&self) -> InterfaceIdiom {
        self()
    }
}

impl IdiomSource for InterfaceIdiom {
    #[inline]
    fn interface_idiom(&self) -> InterfaceIdiom {
        *self
    }
}
