//! Stack-scoped constraint ownership.

use std::ops::{Deref, DerefMut};

use super::runner::SearchContext;
use crate::lp::{ConstraintHandle, LinearConstraint, LpOracle};

/// Constraints added through this guard are removed from the oracle, newest
/// first, when it is dropped.
///
/// Every search node and every branch owns one scope, so a frame's
/// constraints disappear on all exit paths: normal return, early
/// "optimal found" return, timeout unwind, and `?` on oracle failure.
/// The guard dereferences to the search context so recursion can continue
/// through it.
pub(crate) struct ConstraintScope<'s, 'g, O: LpOracle> {
    ctx: &'s mut SearchContext<'g, O>,
    handles: Vec<ConstraintHandle>,
}

impl<'s, 'g, O: LpOracle> ConstraintScope<'s, 'g, O> {
    pub(crate) fn new(ctx: &'s mut SearchContext<'g, O>) -> Self {
        Self {
            ctx,
            handles: Vec::new(),
        }
    }

    /// Adds `constraint` for the lifetime of this scope.
    pub(crate) fn push(&mut self, constraint: LinearConstraint) {
        let handle = self.ctx.oracle.add_constraint(constraint);
        self.handles.push(handle);
    }
}

impl<'g, O: LpOracle> Deref for ConstraintScope<'_, 'g, O> {
    type Target = SearchContext<'g, O>;

    fn deref(&self) -> &Self::Target {
        &*self.ctx
    }
}

impl<O: LpOracle> DerefMut for ConstraintScope<'_, '_, O> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.ctx
    }
}

impl<O: LpOracle> Drop for ConstraintScope<'_, '_, O> {
    fn drop(&mut self) {
        while let Some(handle) = self.handles.pop() {
            if !self.ctx.oracle.remove_constraint(handle) {
                log::warn!("oracle did not recognize constraint handle {handle:?}");
            }
        }
    }
}
