// Copyright 2026 the Attire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording widget doubles shared by the engine tests.
//!
//! Each double satisfies one widget family's capabilities and records the
//! payloads it receives, so tests can assert on final visual state.
//! State-scoped payloads replace prior entries for the same scope, matching
//! real widgets that keep one image or color per state.

use alloc::vec::Vec;

use attire_style::{BarMetrics, ControlState, FontSpec, ImageHandle};
use attire_target::{
    BarButtonItemStyle, BarItemStyle, ButtonStyle, ConstraintSet, ConstraintStore, StyleTarget,
    TextStyle, ViewStyle,
};
use kurbo::Insets;
use peniko::Color;

fn put<S: PartialEq + Copy, T>(entries: &mut Vec<(S, T)>, scope: S, value: T) {
    if let Some(entry) = entries.iter_mut().find(|(s, _)| *s == scope) {
        entry.1 = value;
    } else {
        entries.push((scope, value));
    }
}

/// A plain view: view capability only.
#[derive(Debug, PartialEq)]
pub(crate) struct TestView {
    pub(crate) background_color: Option<Color>,
    pub(crate) corner_radius: Option<f64>,
    pub(crate) border_color: Option<Color>,
    pub(crate) border_width: Option<f64>,
    pub(crate) tint_color: Option<Color>,
    pub(crate) alpha: Option<f64>,
    pub(crate) shadow_alpha: Option<f64>,
    pub(crate) background_pattern: Option<ImageHandle>,
    pub(crate) constraints: ConstraintStore,
    pub(crate) sizes_from_frame: bool,
}

impl Default for TestView {
    fn default() -> Self {
        Self {
            background_color: None,
            corner_radius: None,
            border_color: None,
            border_width: None,
            tint_color: None,
            alpha: None,
            shadow_alpha: None,
            background_pattern: None,
            constraints: ConstraintStore::new(),
            // Widgets size from their frame until a constraint arrives.
            sizes_from_frame: true,
        }
    }
}

impl ViewStyle for TestView {
    fn set_background_color(&mut self, color: Color) {
        self.background_color = Some(color);
    }

    fn set_corner_radius(&mut self, radius: f64) {
        self.corner_radius = Some(radius);
    }

    fn set_border_color(&mut self, color: Color) {
        self.border_color = Some(color);
    }

    fn set_border_width(&mut self, width: f64) {
        self.border_width = Some(width);
    }

    fn set_tint_color(&mut self, color: Color) {
        self.tint_color = Some(color);
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.alpha = Some(alpha);
    }

    fn set_shadow_alpha(&mut self, alpha: f64) {
        self.shadow_alpha = Some(alpha);
    }

    fn set_background_pattern(&mut self, image: ImageHandle) {
        self.background_pattern = Some(image);
    }

    fn constraints(&mut self) -> &mut dyn ConstraintSet {
        &mut self.constraints
    }

    fn set_sizes_from_frame(&mut self, sizes: bool) {
        self.sizes_from_frame = sizes;
    }
}

impl StyleTarget for TestView {
    fn as_view(&mut self) -> Option<&mut dyn ViewStyle> {
        Some(self)
    }
}

/// A button: view capability plus button capability.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct TestButton {
    pub(crate) view: TestView,
    pub(crate) images: Vec<(ControlState, ImageHandle)>,
    pub(crate) background_images: Vec<(ControlState, ImageHandle)>,
    pub(crate) title_colors: Vec<(ControlState, Color)>,
    pub(crate) title_font: Option<FontSpec>,
    pub(crate) image_edge_insets: Option<Insets>,
    pub(crate) title_edge_insets: Option<Insets>,
    pub(crate) content_edge_insets: Option<Insets>,
}

impl ButtonStyle for TestButton {
    fn set_image(&mut self, image: ImageHandle, state: ControlState) {
        put(&mut self.images, state, image);
    }

    fn set_background_image(&mut self, image: ImageHandle, state: ControlState) {
        put(&mut self.background_images, state, image);
    }

    fn set_title_color(&mut self, color: Color, state: ControlState) {
        put(&mut self.title_colors, state, color);
    }

    fn set_title_font(&mut self, font: FontSpec) {
        self.title_font = Some(font);
    }

    fn set_image_edge_insets(&mut self, insets: Insets) {
        self.image_edge_insets = Some(insets);
    }

    fn set_title_edge_insets(&mut self, insets: Insets) {
        self.title_edge_insets = Some(insets);
    }

    fn set_content_edge_insets(&mut self, insets: Insets) {
        self.content_edge_insets = Some(insets);
    }
}

impl StyleTarget for TestButton {
    fn as_view(&mut self) -> Option<&mut dyn ViewStyle> {
        Some(&mut self.view)
    }

    fn as_button(&mut self) -> Option<&mut dyn ButtonStyle> {
        Some(self)
    }
}

/// A static label: text capability only.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct TestLabel {
    pub(crate) text_color: Option<Color>,
    pub(crate) font: Option<FontSpec>,
}

impl TextStyle for TestLabel {
    fn set_text_color(&mut self, color: Color) {
        self.text_color = Some(color);
    }

    fn set_font(&mut self, font: FontSpec) {
        self.font = Some(font);
    }
}

impl StyleTarget for TestLabel {
    fn as_label(&mut self) -> Option<&mut dyn TextStyle> {
        Some(self)
    }
}

/// A bar button item: bar-item capability with the button-item refinement.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct TestBarButton {
    pub(crate) background_images: Vec<(ControlState, BarMetrics, ImageHandle)>,
}

impl BarItemStyle for TestBarButton {}

impl BarButtonItemStyle for TestBarButton {
    fn set_background_image(
        &mut self,
        image: ImageHandle,
        state: ControlState,
        metrics: BarMetrics,
    ) {
        if let Some(entry) = self
            .background_images
            .iter_mut()
            .find(|(s, m, _)| *s == state && *m == metrics)
        {
            entry.2 = image;
        } else {
            self.background_images.push((state, metrics, image));
        }
    }
}

impl StyleTarget for TestBarButton {
    fn as_bar_item(&mut self) -> Option<&mut dyn BarItemStyle> {
        Some(self)
    }

    fn as_bar_button_item(&mut self) -> Option<&mut dyn BarButtonItemStyle> {
        Some(self)
    }
}

/// A plain bar item without the button-item refinement.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct TestBarItem;

impl BarItemStyle for TestBarItem {}

impl StyleTarget for TestBarItem {
    fn as_bar_item(&mut self) -> Option<&mut dyn BarItemStyle> {
        Some(self)
    }
}
