// Copyright 2026 the Attire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability dispatch: routing directives to the widgets that understand
//! them.
//!
//! Dispatch never fails. An attribute whose required capability is absent on
//! the target is skipped silently; this is what lets one style be assigned
//! across a heterogeneous widget tree, with each widget taking only the
//! attributes it supports.

use attire_style::{
    Attribute, BarMetrics, ControlState, FontSpec, ImageHandle, InterfaceIdiom, Style,
    StyleAttribute,
};
use attire_target::{Dimension, StyleTarget};
use peniko::Color;

use crate::anchor::apply_anchor;

/// Applies every directive of a style to a target, in order.
///
/// Each directive is gated by its idiom condition before dispatch; failing
/// directives are skipped entirely. Later directives win over earlier ones
/// targeting the same visual property, because application is sequential
/// and anchors use exclusive replacement.
pub fn apply_style(target: &mut dyn StyleTarget, style: &Style, idiom: InterfaceIdiom) {
    for directive in style.attributes() {
        apply_attribute(target, directive, idiom);
    }
}

/// Applies a single directive to a target.
///
/// The directive is dropped without effect when its idiom condition fails
/// or when the target lacks the capability its attribute kind requires.
pub fn apply_attribute(target: &mut dyn StyleTarget, directive: &StyleAttribute, idiom: InterfaceIdiom) {
    if !directive.applies_to(idiom) {
        return;
    }

    match directive.attribute() {
        Attribute::BackgroundColor(color) => {
            if let Some(view) = target.as_view() {
                view.set_background_color(*color);
            }
        }
        Attribute::CornerRadius(radius) => {
            if let Some(view) = target.as_view() {
                view.set_corner_radius(*radius);
            }
        }
        Attribute::BorderColor(color) => {
            if let Some(view) = target.as_view() {
                view.set_border_color(*color);
            }
        }
        Attribute::BorderWidth(width) => {
            if let Some(view) = target.as_view() {
                view.set_border_width(*width);
            }
        }
        Attribute::TintColor(color) => {
            if let Some(view) = target.as_view() {
                view.set_tint_color(*color);
            }
        }
        Attribute::Alpha(alpha) => {
            if let Some(view) = target.as_view() {
                view.set_alpha(*alpha);
            }
        }
        Attribute::ShadowAlpha(alpha) => {
            if let Some(view) = target.as_view() {
                view.set_shadow_alpha(*alpha);
            }
        }
        Attribute::Image(image) => {
            // Foreground images are button-only and always land on the
            // resting state.
            if let Some(button) = target.as_button() {
                button.set_image(*image, ControlState::Normal);
            }
        }
        Attribute::BackgroundImage(image) => {
            apply_background_image(
                target,
                *image,
                directive.control_state(),
                directive.bar_metrics(),
            );
        }
        Attribute::ImageEdgeInsets(insets) => {
            if let Some(button) = target.as_button() {
                button.set_image_edge_insets(*insets);
            }
        }
        Attribute::TitleEdgeInsets(insets) => {
            if let Some(button) = target.as_button() {
                button.set_title_edge_insets(*insets);
            }
        }
        Attribute::ContentEdgeInsets(insets) => {
            if let Some(button) = target.as_button() {
                button.set_content_edge_insets(*insets);
            }
        }
        Attribute::TextColor(color) => {
            apply_text_color(target, *color, directive.control_state());
        }
        Attribute::Font(font) => {
            apply_font(target, font);
        }
        Attribute::WidthAnchor(spec) => {
            if let Some(view) = target.as_view() {
                apply_anchor(view, Dimension::Width, spec);
            }
        }
        Attribute::HeightAnchor(spec) => {
            if let Some(view) = target.as_view() {
                apply_anchor(view, Dimension::Height, spec);
            }
        }
    }
}

/// Routes a background image to the first capable slot.
///
/// Buttons take a discrete, state-scoped image. Bar items honor the image
/// only when they are button items (a plain bar item is a documented no-op).
/// Any remaining view-capable widget gets the image as a tiled background
/// pattern; that is a deliberate alternate path, not an error fallback.
fn apply_background_image(
    target: &mut dyn StyleTarget,
    image: ImageHandle,
    state: ControlState,
    metrics: BarMetrics,
) {
    if let Some(button) = target.as_button() {
        button.set_background_image(image, state);
        return;
    }
    if target.as_bar_item().is_some() {
        if let Some(item) = target.as_bar_button_item() {
            item.set_background_image(image, state, metrics);
        }
        return;
    }
    if let Some(view) = target.as_view() {
        view.set_background_pattern(image);
    }
}

/// Applies a text color to the first label-like capability, in the fixed
/// priority order: label, text view, text field, button title.
fn apply_text_color(target: &mut dyn StyleTarget, color: Color, state: ControlState) {
    if let Some(label) = target.as_label() {
        label.set_text_color(color);
        return;
    }
    if let Some(text) = target.as_text_view() {
        text.set_text_color(color);
        return;
    }
    if let Some(field) = target.as_text_field() {
        field.set_text_color(color);
        return;
    }
    if let Some(button) = target.as_button() {
        button.set_title_color(color, state);
    }
}

/// Applies a font with the same priority order as [`apply_text_color`].
fn apply_font(target: &mut dyn StyleTarget, font: &FontSpec) {
    if let Some(label) = target.as_label() {
        label.set_font(font.clone());
        return;
    }
    if let Some(text) = target.as_text_view() {
        text.set_font(font.clone());
        return;
    }
    if let Some(field) = target.as_text_field() {
        field.set_font(font.clone());
        return;
    }
    if let Some(button) = target.as_button() {
        button.set_title_font(font.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{TestBarButton, TestBarItem, TestButton, TestLabel, TestView};
    use attire_style::{AnchorSpec, StyleBuilder};
    use attire_target::{ConstraintSet, ConstraintSource, TextStyle};
    use kurbo::Insets;

    const IMAGE: ImageHandle = ImageHandle::new(9);
    const RED: Color = Color::from_rgb8(255, 0, 0);
    const BLUE: Color = Color::from_rgb8(0, 0, 255);

    fn unconditional(attribute: Attribute) -> StyleAttribute {
        StyleAttribute::new(attribute)
    }

    #[test]
    fn view_attributes_land_on_views() {
        let mut view = TestView::default();
        let style = StyleBuilder::new("panel")
            .attribute(Attribute::BackgroundColor(RED))
            .attribute(Attribute::CornerRadius(6.0))
            .attribute(Attribute::BorderColor(BLUE))
            .attribute(Attribute::BorderWidth(2.0))
            .attribute(Attribute::TintColor(BLUE))
            .attribute(Attribute::Alpha(0.9))
            .attribute(Attribute::ShadowAlpha(0.3))
            .build();

        apply_style(&mut view, &style, InterfaceIdiom::Unspecified);

        assert_eq!(view.background_color, Some(RED));
        assert_eq!(view.corner_radius, Some(6.0));
        assert_eq!(view.border_color, Some(BLUE));
        assert_eq!(view.border_width, Some(2.0));
        assert_eq!(view.tint_color, Some(BLUE));
        assert_eq!(view.alpha, Some(0.9));
        assert_eq!(view.shadow_alpha, Some(0.3));
    }

    #[test]
    fn capability_gating_is_a_silent_noop() {
        // Button-only attributes against a plain label: no effect, no panic.
        let mut label = TestLabel::default();
        let before = label.clone();

        apply_attribute(
            &mut label,
            &unconditional(Attribute::Image(IMAGE)),
            InterfaceIdiom::Unspecified,
        );
        apply_attribute(
            &mut label,
            &unconditional(Attribute::ContentEdgeInsets(Insets::uniform(4.0))),
            InterfaceIdiom::Unspecified,
        );
        apply_attribute(
            &mut label,
            &unconditional(Attribute::CornerRadius(3.0)),
            InterfaceIdiom::Unspecified,
        );

        assert_eq!(label, before);
    }

    #[test]
    fn idiom_condition_gates_before_dispatch() {
        let mut view = TestView::default();
        let phone_only = StyleAttribute::new(Attribute::BackgroundColor(RED))
            .with_idiom(InterfaceIdiom::Phone);

        apply_attribute(&mut view, &phone_only, InterfaceIdiom::Tablet);
        assert_eq!(view.background_color, None);

        apply_attribute(&mut view, &phone_only, InterfaceIdiom::Phone);
        assert_eq!(view.background_color, Some(RED));
    }

    #[test]
    fn unspecified_directive_applies_anywhere() {
        let mut view = TestView::default();
        let directive = unconditional(Attribute::Alpha(0.5));

        apply_attribute(&mut view, &directive, InterfaceIdiom::Tablet);
        assert_eq!(view.alpha, Some(0.5));
    }

    #[test]
    fn foreground_image_is_button_only_normal_state() {
        let mut button = TestButton::default();
        let directive = StyleAttribute::new(Attribute::Image(IMAGE))
            .with_control_state(ControlState::Highlighted);

        apply_attribute(&mut button, &directive, InterfaceIdiom::Unspecified);

        // The state scope is ignored for foreground images.
        assert_eq!(button.images, [(ControlState::Normal, IMAGE)]);
    }

    #[test]
    fn background_image_on_button_is_state_scoped() {
        let mut button = TestButton::default();
        let directive = StyleAttribute::new(Attribute::BackgroundImage(IMAGE))
            .with_control_state(ControlState::Highlighted);

        apply_attribute(&mut button, &directive, InterfaceIdiom::Unspecified);

        assert_eq!(button.background_images, [(ControlState::Highlighted, IMAGE)]);
        assert_eq!(button.view.background_pattern, None);
    }

    #[test]
    fn background_image_on_plain_view_tiles_a_pattern() {
        let mut view = TestView::default();
        apply_attribute(
            &mut view,
            &unconditional(Attribute::BackgroundImage(IMAGE)),
            InterfaceIdiom::Unspecified,
        );

        assert_eq!(view.background_pattern, Some(IMAGE));
    }

    #[test]
    fn background_image_on_bar_button_item_carries_metrics() {
        let mut item = TestBarButton::default();
        let directive = StyleAttribute::new(Attribute::BackgroundImage(IMAGE))
            .with_control_state(ControlState::Highlighted)
            .with_bar_metrics(BarMetrics::Compact);

        apply_attribute(&mut item, &directive, InterfaceIdiom::Unspecified);

        assert_eq!(
            item.background_images,
            [(ControlState::Highlighted, BarMetrics::Compact, IMAGE)]
        );
    }

    #[test]
    fn background_image_on_plain_bar_item_is_a_noop() {
        let mut item = TestBarItem::default();
        apply_attribute(
            &mut item,
            &unconditional(Attribute::BackgroundImage(IMAGE)),
            InterfaceIdiom::Unspecified,
        );

        assert_eq!(item, TestBarItem::default());
    }

    #[test]
    fn button_edge_insets() {
        let mut button = TestButton::default();
        let style = StyleBuilder::new("padded")
            .attribute(Attribute::ImageEdgeInsets(Insets::uniform(1.0)))
            .attribute(Attribute::TitleEdgeInsets(Insets::uniform(2.0)))
            .attribute(Attribute::ContentEdgeInsets(Insets::new(1.0, 2.0, 3.0, 4.0)))
            .build();

        apply_style(&mut button, &style, InterfaceIdiom::Unspecified);

        assert_eq!(button.image_edge_insets, Some(Insets::uniform(1.0)));
        assert_eq!(button.title_edge_insets, Some(Insets::uniform(2.0)));
        assert_eq!(
            button.content_edge_insets,
            Some(Insets::new(1.0, 2.0, 3.0, 4.0))
        );
    }

    #[test]
    fn text_color_priority_prefers_label() {
        // A pathological widget answering several text accessors: the label
        // slot must win and be the only one written.
        #[derive(Default)]
        struct Hybrid {
            label: TestLabel,
            field: TestLabel,
        }

        impl StyleTarget for Hybrid {
            fn as_label(&mut self) -> Option<&mut dyn TextStyle> {
                Some(&mut self.label)
            }
            fn as_text_field(&mut self) -> Option<&mut dyn TextStyle> {
                Some(&mut self.field)
            }
        }

        let mut hybrid = Hybrid::default();
        apply_attribute(
            &mut hybrid,
            &unconditional(Attribute::TextColor(RED)),
            InterfaceIdiom::Unspecified,
        );
        apply_attribute(
            &mut hybrid,
            &unconditional(Attribute::Font(FontSpec::system(12.0))),
            InterfaceIdiom::Unspecified,
        );

        assert_eq!(hybrid.label.text_color, Some(RED));
        assert_eq!(hybrid.label.font, Some(FontSpec::system(12.0)));
        assert_eq!(hybrid.field, TestLabel::default());
    }

    #[test]
    fn text_color_falls_back_to_button_title() {
        let mut button = TestButton::default();
        let directive = StyleAttribute::new(Attribute::TextColor(BLUE))
            .with_control_state(ControlState::Disabled);

        apply_attribute(&mut button, &directive, InterfaceIdiom::Unspecified);
        apply_attribute(
            &mut button,
            &unconditional(Attribute::Font(FontSpec::named("Menlo", 15.0))),
            InterfaceIdiom::Unspecified,
        );

        assert_eq!(button.title_colors, [(ControlState::Disabled, BLUE)]);
        assert_eq!(button.title_font, Some(FontSpec::named("Menlo", 15.0)));
    }

    #[test]
    fn anchors_route_through_the_view_capability() {
        let mut button = TestButton::default();
        apply_attribute(
            &mut button,
            &unconditional(Attribute::WidthAnchor(AnchorSpec::aspect(0.5))),
            InterfaceIdiom::Unspecified,
        );

        assert_eq!(button.view.constraints.len(), 1);
        let (_, constraint) = button.view.constraints.iter().next().unwrap();
        assert_eq!(
            constraint.source(),
            ConstraintSource::OppositeDimension { factor: 0.5 }
        );
        assert!(!button.view.sizes_from_frame);
    }

    #[test]
    fn later_width_anchor_wins() {
        let mut view = TestView::default();
        let style = StyleBuilder::new("sized")
            .attribute(Attribute::WidthAnchor(AnchorSpec::absolute(100.0)))
            .attribute(Attribute::WidthAnchor(AnchorSpec::absolute(200.0)))
            .build();

        apply_style(&mut view, &style, InterfaceIdiom::Unspecified);

        assert_eq!(view.constraints.len(), 1);
        let (_, constraint) = view.constraints.iter().next().unwrap();
        assert_eq!(constraint.source(), ConstraintSource::Constant(200.0));
    }

    #[test]
    fn reapplying_a_style_is_idempotent() {
        let mut button = TestButton::default();
        let style = StyleBuilder::new("cta")
            .attribute(Attribute::BackgroundColor(BLUE))
            .attribute(Attribute::WidthAnchor(AnchorSpec::absolute(160.0)))
            .attribute(Attribute::HeightAnchor(AnchorSpec::absolute(44.0)))
            .push(
                StyleAttribute::new(Attribute::BackgroundImage(IMAGE))
                    .with_control_state(ControlState::Highlighted),
            )
            .attribute(Attribute::ContentEdgeInsets(Insets::uniform(8.0)))
            .build();

        apply_style(&mut button, &style, InterfaceIdiom::Phone);
        let first_ids: alloc::vec::Vec<_> =
            button.view.constraints.iter().map(|(id, _)| id).collect();
        apply_style(&mut button, &style, InterfaceIdiom::Phone);

        // Same visual state, no accumulated constraints or insets.
        assert_eq!(button.view.background_color, Some(BLUE));
        assert_eq!(button.view.constraints.len(), 2);
        assert_eq!(button.background_images.len(), 1);

        // The constraints were replaced, not kept.
        let second_ids: alloc::vec::Vec<_> =
            button.view.constraints.iter().map(|(id, _)| id).collect();
        assert_ne!(first_ids, second_ids);
    }
}
