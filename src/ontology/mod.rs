//! Ontology implementations and the indexes behind them.

//! # Overview

//! The simplest implementation is
//! [`SetOntology`](set/struct.SetOntology.html): a plain sorted set
//! of annotated axioms with no secondary structure, cheap to add to
//! and linear to search.

//! Everything else is built from
//! [`OntologyIndex`](indexed/trait.OntologyIndex.html)
//! implementations: an index is told about every insertion and
//! removal and maintains whatever derived structure lets it answer
//! its queries in time proportional to the result, never by scanning
//! the axiom set. [`kind_mapped`](kind_mapped/index.html) buckets
//! axioms by kind, [`signature_mapped`](signature_mapped/index.html)
//! maps each entity to the axioms mentioning it, and
//! [`relation_mapped`](relation_mapped/index.html) maps the left and
//! right operands of the relational axiom kinds to their axioms.

//! [`AxiomStore`](store/struct.AxiomStore.html) combines the set
//! index with all three derived indexes and keeps them mutually
//! consistent: a single insert or remove updates every index before
//! returning, and queries can never observe one index ahead of
//! another. The store's mutation primitives are crate-private; the
//! public way to change it is [`crate::change::apply_changes`].

pub mod indexed;
pub mod kind_mapped;
pub mod relation_mapped;
pub mod set;
pub mod signature_mapped;
pub mod store;
