// Copyright 2026 the Attire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability traits, one per widget family.
//!
//! Each trait is a mutation-only contract: setters take the resolved payload
//! and apply it to the widget however the embedding toolkit represents it.
//! Nothing here can fail; a widget that cannot honor a value is free to
//! clamp or ignore it.

use attire_style::{BarMetrics, ControlState, FontSpec, ImageHandle};
use kurbo::Insets;
use peniko::Color;

use crate::constraint::ConstraintSet;

/// The base view capability: layer-level visuals and sizing constraints.
pub trait ViewStyle {
    /// Sets the background fill color.
    fn set_background_color(&mut self, color: Color);

    /// Sets the corner rounding radius in points.
    fn set_corner_radius(&mut self, radius: f64);

    /// Sets the border stroke color.
    fn set_border_color(&mut self, color: Color);

    /// Sets the border stroke width in points.
    fn set_border_width(&mut self, width: f64);

    /// Sets the tint color applied to template content.
    fn set_tint_color(&mut self, color: Color);

    /// Sets the overall opacity in `[0, 1]`.
    fn set_alpha(&mut self, alpha: f64);

    /// Sets the shadow opacity in `[0, 1]`.
    fn set_shadow_alpha(&mut self, alpha: f64);

    /// Fills the background with `image` tiled as a pattern.
    ///
    /// This is the fallback used for background-image attributes on widgets
    /// that have no discrete image slot.
    fn set_background_pattern(&mut self, image: ImageHandle);

    /// Returns the widget's active constraint set.
    fn constraints(&mut self) -> &mut dyn ConstraintSet;

    /// Controls whether the widget's size is derived from its frame.
    ///
    /// The engine switches this off (once, idempotently) when it installs an
    /// explicit sizing constraint, so the constraint takes effect.
    fn set_sizes_from_frame(&mut self, sizes: bool);
}

/// The button capability: state-scoped images, title visuals, and insets.
pub trait ButtonStyle {
    /// Sets the foreground image for a control state.
    fn set_image(&mut self, image: ImageHandle, state: ControlState);

    /// Sets the background image for a control state.
    fn set_background_image(&mut self, image: ImageHandle, state: ControlState);

    /// Sets the title color for a control state.
    fn set_title_color(&mut self, color: Color, state: ControlState);

    /// Sets the title font.
    ///
    /// Unlike title color, the font is not state-scoped; buttons keep one
    /// title font across states.
    fn set_title_font(&mut self, font: FontSpec);

    /// Sets the insets around the image.
    fn set_image_edge_insets(&mut self, insets: Insets);

    /// Sets the insets around the title.
    fn set_title_edge_insets(&mut self, insets: Insets);

    /// Sets the insets around the whole content.
    fn set_content_edge_insets(&mut self, insets: Insets);
}

/// The label-like capability: text color and font.
///
/// Labels, multi-line text views, and single-line text fields all expose
/// this contract through their own [`StyleTarget`] accessors; the engine
/// checks those accessors in a fixed priority order and applies to the
/// first match only.
pub trait TextStyle {
    /// Sets the text foreground color.
    fn set_text_color(&mut self, color: Color);

    /// Sets the text font.
    fn set_font(&mut self, font: FontSpec);
}

/// Marker capability for bar items (tab-bar and navigation-bar items).
///
/// Plain bar items accept no styled visuals of their own; background images
/// are honored only by the bar-button-item refinement. A background-image
/// attribute reaching a plain bar item is a documented no-op.
pub trait BarItemStyle {}

/// The bar-button-item capability: metrics-scoped background images.
pub trait BarButtonItemStyle: BarItemStyle {
    /// Sets the background image for a control state under the given bar
    /// metrics.
    fn set_background_image(
        &mut self,
        image: ImageHandle,
        state: ControlState,
        metrics: BarMetrics,
    );
}

/// A widget that styles can be applied to.
///
/// Every accessor defaults to `None`; a widget overrides the ones whose
/// capability it satisfies. The engine queries accessors rather than
/// downcasting concrete types, so one style can be shared across
/// heterogeneous widget trees, with each widget receiving only the
/// attributes it understands.
///
/// The three text accessors ([`as_label`](Self::as_label),
/// [`as_text_view`](Self::as_text_view),
/// [`as_text_field`](Self::as_text_field)) distinguish the label-like
/// family; concrete widgets are expected to answer at most one of them.
pub trait StyleTarget {
    /// Returns the view capability, if this widget is view-like.
    fn as_view(&mut self) -> Option<&mut dyn ViewStyle> {
        None
    }

    /// Returns the button capability, if this widget is a button.
    fn as_button(&mut self) -> Option<&mut dyn ButtonStyle> {
        None
    }

    /// Returns the text capability of a static label.
    fn as_label(&mut self) -> Option<&mut dyn TextStyle> {
        None
    }

    /// Returns the text capability of a multi-line text view.
    fn as_text_view(&mut self) -> Option<&mut dyn TextStyle> {
        None
    }

    /// Returns the text capability of a single-line text field.
    fn as_text_field(&mut self) -> Option<&mut dyn TextStyle> {
        None
    }

    /// Returns the bar-item capability, if this widget lives in a bar.
    fn as_bar_item(&mut self) -> Option<&mut dyn BarItemStyle> {
        None
    }

    /// Returns the bar-button-item capability, if this widget is a button
    /// item in a bar.
    fn as_bar_button_item(&mut self) -> Option<&mut dyn BarButtonItemStyle> {
        None
    }
}
