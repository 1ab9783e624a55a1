// Copyright 2026 the Attire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The registry binding: per-widget style-name assignments and resolution.
//!
//! [`Stylist`] stores which style names each widget carries, keyed by widget
//! identity, and drives application whenever an assignment changes. Name
//! lookup goes through a [`StyleResolver`]; [`StyleCatalog`] is the owned
//! map-backed resolver for the common case. Lookup is best-effort: unknown
//! names are skipped silently.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;

use attire_style::{IdiomSource, Style};
use attire_target::StyleTarget;

use crate::dispatch::apply_style;

/// Resolves a style name to its current definition.
///
/// Returning `None` for an unknown name is normal; the binding treats the
/// lookup as partial and skips the name.
///
/// Any `Fn(&str) -> Option<Style>` closure is a resolver:
///
/// ```rust
/// use attire_apply::StyleResolver;
/// use attire_style::StyleBuilder;
///
/// let only_card = |name: &str| {
///     (name == "card").then(|| StyleBuilder::new("card").build())
/// };
/// assert!(only_card.resolve("card").is_some());
/// assert!(only_card.resolve("missing").is_none());
/// ```
pub trait StyleResolver {
    /// Returns the current definition for `name`, if one is registered.
    fn resolve(&self, name: &str) -> Option<Style>;
}

impl<F> StyleResolver for F
where
    F: Fn(&str) -> Option<Style>,
{
    #[inline]
    fn resolve(&self, name: &str) -> Option<Style> {
        self(name)
    }
}

/// An owned name-to-definition map of styles.
///
/// The catalog is the process's style registry state, passed explicitly to
/// whoever needs it rather than living in a global. Its lifecycle is simple:
/// populate at startup (or incrementally), read on every assignment pass.
/// Re-registering a name replaces the prior definition; widgets pick the new
/// definition up on their next application pass.
///
/// # Example
///
/// ```rust
/// use attire_apply::{StyleCatalog, StyleResolver};
/// use attire_style::{Attribute, StyleBuilder};
///
/// let mut catalog = StyleCatalog::new();
/// catalog.register(
///     StyleBuilder::new("card")
///         .attribute(Attribute::CornerRadius(8.0))
///         .build(),
/// );
///
/// assert!(catalog.contains("card"));
/// assert!(catalog.resolve("card").is_some());
/// assert!(catalog.resolve("missing").is_none());
/// ```
#[derive(Debug, Default)]
pub struct StyleCatalog {
    styles: HashMap<String, Style>,
}

impl StyleCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a style under its own name, replacing any prior
    /// definition with that name.
    pub fn register(&mut self, style: Style) {
        self.styles.insert(String::from(style.name()), style);
    }

    /// Removes a style by name, returning it if it was registered.
    pub fn remove(&mut self, name: &str) -> Option<Style> {
        self.styles.remove(name)
    }

    /// Returns `true` if a style with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Returns the number of registered styles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Returns `true` if no styles are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Returns an iterator over the registered style names.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.styles.keys().map(String::as_str)
    }
}

impl StyleResolver for StyleCatalog {
    fn resolve(&self, name: &str) -> Option<Style> {
        // Styles are Rc-backed, so handing out a clone is cheap.
        self.styles.get(name).cloned()
    }
}

/// Per-widget style assignments and the application driver.
///
/// Assignments are auxiliary state keyed by widget identity (the key type
/// `K` is whatever identity the embedding uses: a slot index, a generational
/// id, a pointer-derived key), not part of the widget's own fields. Setting
/// an assignment immediately resolves and applies the named styles in
/// assignment order; [`reapply`](Self::reapply) re-runs application for a
/// widget after the catalog or device context changes.
///
/// The current interface idiom is read from the [`IdiomSource`] afresh on
/// every application pass. A bare
/// [`InterfaceIdiom`](attire_style::InterfaceIdiom) works as a fixed source.
///
/// # Example
///
/// ```rust
/// use attire_apply::{StyleCatalog, Stylist};
/// use attire_style::{Attribute, FontSpec, InterfaceIdiom, StyleBuilder};
/// use attire_target::{StyleTarget, TextStyle};
/// use peniko::Color;
///
/// #[derive(Default)]
/// struct Label {
///     color: Option<Color>,
/// }
///
/// impl TextStyle for Label {
///     fn set_text_color(&mut self, color: Color) {
///         self.color = Some(color);
///     }
///     fn set_font(&mut self, _font: FontSpec) {}
/// }
///
/// impl StyleTarget for Label {
///     fn as_label(&mut self) -> Option<&mut dyn TextStyle> {
///         Some(self)
///     }
/// }
///
/// let mut catalog = StyleCatalog::new();
/// catalog.register(
///     StyleBuilder::new("warning")
///         .attribute(Attribute::TextColor(Color::from_rgb8(255, 149, 0)))
///         .build(),
/// );
///
/// let mut stylist = Stylist::new(InterfaceIdiom::Phone);
/// let mut label = Label::default();
/// stylist.set_style(7_u64, Some("warning"), &mut label, &catalog);
///
/// assert_eq!(stylist.style(7), Some("warning"));
/// assert_eq!(label.color, Some(Color::from_rgb8(255, 149, 0)));
/// ```
pub struct Stylist<K> {
    assignments: HashMap<K, Vec<String>>,
    idiom_source: Box<dyn IdiomSource>,
}

impl<K: Copy + Eq + Hash> Stylist<K> {
    /// Creates a stylist reading the interface idiom from `source`.
    #[must_use]
    pub fn new(source: impl IdiomSource + 'static) -> Self {
        Self {
            assignments: HashMap::new(),
            idiom_source: Box::new(source),
        }
    }

    /// Returns the style names assigned to a widget, in assignment order.
    #[must_use]
    pub fn styles(&self, key: K) -> &[String] {
        self.assignments.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the first assigned style name, if any.
    #[must_use]
    pub fn style(&self, key: K) -> Option<&str> {
        self.styles(key).first().map(String::as_str)
    }

    /// Assigns style names to a widget and applies them.
    ///
    /// Every name is looked up through `resolver` in assignment order;
    /// unknown names are skipped silently and still remembered, so they
    /// take effect on a later [`reapply`](Self::reapply) once registered.
    pub fn set_styles<I, S>(
        &mut self,
        key: K,
        names: I,
        target: &mut dyn StyleTarget,
        resolver: &dyn StyleResolver,
    ) where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            self.assignments.remove(&key);
            return;
        }
        self.apply_names(&names, target, resolver);
        self.assignments.insert(key, names);
    }

    /// Assigns a single style name (or clears the assignment with `None`)
    /// and applies it.
    pub fn set_style(
        &mut self,
        key: K,
        name: Option<&str>,
        target: &mut dyn StyleTarget,
        resolver: &dyn StyleResolver,
    ) {
        match name {
            Some(name) => self.set_styles(key, [name], target, resolver),
            None => {
                self.assignments.remove(&key);
            }
        }
    }

    /// Re-applies a widget's assigned styles.
    ///
    /// Call this after the catalog or the device context changes; the pass
    /// re-reads the current idiom and the current definitions. Widgets with
    /// no assignment are left untouched.
    pub fn reapply(&self, key: K, target: &mut dyn StyleTarget, resolver: &dyn StyleResolver) {
        if let Some(names) = self.assignments.get(&key) {
            self.apply_names(names, target, resolver);
        }
    }

    /// Removes a widget's assignment without touching the widget.
    ///
    /// Returns `true` if an assignment existed.
    pub fn clear(&mut self, key: K) -> bool {
        self.assignments.remove(&key).is_some()
    }

    fn apply_names(
        &self,
        names: &[String],
        target: &mut dyn StyleTarget,
        resolver: &dyn StyleResolver,
    ) {
        // The idiom is read once per pass, never cached across passes.
        let idiom = self.idiom_source.interface_idiom();
        for name in names {
            if let Some(style) = resolver.resolve(name) {
                apply_style(target, &style, idiom);
            }
        }
    }
}

impl<K> fmt::Debug for Stylist<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stylist")
            .field("assigned_widgets", &self.assignments.len())
            .finish_non_exhaustive()
    }
}
