// Copyright 2026 the Attire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exclusive-replacement installation of sizing anchors.

use attire_style::{AnchorRelation, AnchorSpec};
use attire_target::{Constraint, Dimension, ViewStyle};

/// Installs a sizing anchor on a view, replacing any prior exact-equality
/// constraint on the same dimension.
///
/// The replacement step is what keeps repeated style application idempotent
/// and makes the later of two same-dimension anchor directives win: at most
/// one exact-equality constraint per dimension is ever active.
///
/// The new constraint relates the dimension to a fixed constant, or, for a
/// ratio anchor, to the view's own perpendicular dimension scaled by the
/// anchor's constant. Installing a constraint also switches off
/// frame-derived sizing so the constraint takes effect; the switch is
/// idempotent, never toggled back per call.
pub fn apply_anchor(view: &mut dyn ViewStyle, dimension: Dimension, spec: &AnchorSpec) {
    let constraints = view.constraints();

    if let Some(existing) = constraints.find_existing(&|c| {
        c.dimension() == dimension && c.relation() == AnchorRelation::Equal
    }) {
        constraints.deactivate(existing);
    }

    let constraint = if spec.ratio {
        Constraint::relative(dimension, spec.equality, spec.constant)
    } else {
        Constraint::absolute(dimension, spec.equality, spec.constant)
    };
    constraints.activate(constraint);

    view.set_sizes_from_frame(false);
}
