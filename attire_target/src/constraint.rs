// Copyright 2026 the Attire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sizing constraints and the constraint-set abstraction.
//!
//! The engine installs sizing anchors as constraints with
//! exclusive-replacement semantics: before activating a new exact-equality
//! constraint on a dimension, the prior one is deactivated. [`ConstraintSet`]
//! is the narrow contract that makes this possible against any layout
//! engine; [`ConstraintStore`] is the in-memory model.

use core::fmt;

use smallvec::SmallVec;

use attire_style::AnchorRelation;

/// A widget dimension a constraint can target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Horizontal extent.
    Width,
    /// Vertical extent.
    Height,
}

impl Dimension {
    /// Returns the perpendicular dimension.
    #[must_use]
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Width => Self::Height,
            Self::Height => Self::Width,
        }
    }
}

/// What a constrained dimension is related to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConstraintSource {
    /// A fixed number of points.
    Constant(f64),
    /// The widget's own perpendicular dimension, scaled by `factor`.
    OppositeDimension {
        /// Scale applied to the perpendicular dimension.
        factor: f64,
    },
}

/// A sizing constraint on one dimension of a widget.
///
/// The first endpoint is implicitly the owning widget; ratio constraints
/// relate it to its own perpendicular dimension, matching the anchor model
/// in `attire_style`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Constraint {
    dimension: Dimension,
    relation: AnchorRelation,
    source: ConstraintSource,
}

impl Constraint {
    /// Creates a constraint relating `dimension` to a fixed `constant`.
    #[must_use]
    pub const fn absolute(dimension: Dimension, relation: AnchorRelation, constant: f64) -> Self {
        Self {
            dimension,
            relation,
            source: ConstraintSource::Constant(constant),
        }
    }

    /// Creates a constraint relating `dimension` to the widget's
    /// perpendicular dimension scaled by `factor`.
    #[must_use]
    pub const fn relative(dimension: Dimension, relation: AnchorRelation, factor: f64) -> Self {
        Self {
            dimension,
            relation,
            source: ConstraintSource::OppositeDimension { factor },
        }
    }

    /// Returns the constrained dimension.
    #[must_use]
    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Returns the constraint relation.
    #[must_use]
    #[inline]
    pub fn relation(&self) -> AnchorRelation {
        self.relation
    }

    /// Returns what the dimension is related to.
    #[must_use]
    #[inline]
    pub fn source(&self) -> ConstraintSource {
        self.source
    }
}

/// Identifier for an active constraint within one widget's set.
///
/// Ids are never reused within a store, so a deactivated constraint's id
/// stays dangling rather than aliasing a later one.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConstraintId(u32);

impl ConstraintId {
    #[inline]
    pub(crate) const fn new(index: u32) -> Self {
        Self(index)
    }
}

impl fmt::Debug for ConstraintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConstraintId").field(&self.0).finish()
    }
}

/// The active constraint set of one widget.
///
/// This is the seam between the styling engine and whatever layout or
/// constraint primitive the embedding toolkit uses. The engine only ever
/// needs to find an existing constraint by predicate, deactivate it, and
/// activate a new one.
pub trait ConstraintSet {
    /// Returns the id of the first active constraint matching `predicate`.
    fn find_existing(&self, predicate: &dyn Fn(&Constraint) -> bool) -> Option<ConstraintId>;

    /// Activates a constraint, returning its id.
    fn activate(&mut self, constraint: Constraint) -> ConstraintId;

    /// Deactivates a constraint, removing it from the active set.
    ///
    /// Returns `false` if the id was not active (already deactivated ids
    /// are tolerated, not an error).
    fn deactivate(&mut self, id: ConstraintId) -> bool;

    /// Returns an active constraint by id.
    fn get(&self, id: ConstraintId) -> Option<&Constraint>;

    /// Returns the number of active constraints.
    fn len(&self) -> usize;

    /// Returns `true` if no constraints are active.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Default inline capacity for a widget's constraints.
///
/// Styled widgets rarely carry more than a width and a height anchor.
const INLINE_CAPACITY: usize = 2;

/// An in-memory [`ConstraintSet`] for headless embeddings and tests.
///
/// # Example
///
/// ```rust
/// use attire_style::AnchorRelation;
/// use attire_target::{Constraint, ConstraintSet, ConstraintStore, Dimension};
///
/// let mut store = ConstraintStore::default();
/// let id = store.activate(Constraint::absolute(
///     Dimension::Width,
///     AnchorRelation::Equal,
///     120.0,
/// ));
///
/// assert_eq!(store.len(), 1);
/// assert!(store.deactivate(id));
/// assert!(store.is_empty());
/// ```
#[derive(Debug, Default, PartialEq)]
pub struct ConstraintStore {
    entries: SmallVec<[(ConstraintId, Constraint); INLINE_CAPACITY]>,
    next_id: u32,
}

impl ConstraintStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an iterator over the active constraints in activation order.
    pub fn iter(&self) -> impl Iterator<Item = (ConstraintId, &Constraint)> + '_ {
        self.entries.iter().map(|(id, c)| (*id, c))
    }
}

impl ConstraintSet for ConstraintStore {
    fn find_existing(&self, predicate: &dyn Fn(&Constraint) -> bool) -> Option<ConstraintId> {
        self.entries
            .iter()
            .find(|(_, c)| predicate(c))
            .map(|(id, _)| *id)
    }

    fn activate(&mut self, constraint: Constraint) -> ConstraintId {
        let id = ConstraintId::new(self.next_id);
        self.next_id += 1;
        self.entries.push((id, constraint));
        id
    }

    fn deactivate(&mut self, id: ConstraintId) -> bool {
        let Some(position) = self.entries.iter().position(|(entry_id, _)| *entry_id == id) else {
            return false;
        };
        self.entries.remove(position);
        true
    }

    fn get(&self, id: ConstraintId) -> Option<&Constraint> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, c)| c)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
