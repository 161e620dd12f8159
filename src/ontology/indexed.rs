//! The interface between an ontology and its indexes.

//! # Overview
//!
//! An `OntologyIndex` is the backing store for some view of an
//! ontology's axioms. Axioms are shared between indexes with `Arc`;
//! each index keeps whatever subset and structure it needs. The
//! trait carries no query methods: those are provided by the
//! concrete indexes, which should only offer searches they can
//! answer rapidly (constant or log time, not linear).
use std::sync::Arc;

use crate::model::AnnotatedAxiom;

pub trait OntologyIndex {
    /// Potentially insert an axiom into the index.
    ///
    /// Returns true if the index changed.
    fn index_insert(&mut self, ax: Arc<AnnotatedAxiom>) -> bool;

    /// Remove an axiom from the index.
    ///
    /// Returns true if the index had the axiom.
    fn index_remove(&mut self, ax: &AnnotatedAxiom) -> bool {
        self.index_take(ax).is_some()
    }

    /// Remove an axiom from the index, returning it if it was
    /// present.
    fn index_take(&mut self, ax: &AnnotatedAxiom) -> Option<AnnotatedAxiom>;
}

// Utility
pub(crate) fn arc_unwrap_or_clone(ax: Arc<AnnotatedAxiom>) -> AnnotatedAxiom {
    Arc::try_unwrap(ax).unwrap_or_else(|ax| (*ax).clone())
}
