//! Access axioms by their kind.

//! # Overview
//!
//! This module provides a `KindMappedIndex` which provides rapid
//! access to all axioms of a given kind.
//!
//! As well as being iterable, it provides `axiom` and
//! `axiom_for_kind` which iterate over a particular [`AxiomKind`],
//! and methods such as `sub_class_of` or `object_property_domain`
//! which iterate over the matching axiom structs directly.
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::model::*;

use super::indexed::{arc_unwrap_or_clone, OntologyIndex};

/// Return all axioms of a specific `AxiomKind`
macro_rules! on {
    ($ont:ident, $kind:ident) => {
        $ont.axiom(AxiomKind::$kind).map(|ax| match ax {
            Axiom::$kind(n) => n,
            _ => panic!(),
        })
    };
}

/// Add a method which returns axioms of a specific `AxiomKind`.
macro_rules! onimpl {
    ($kind:ident, $method:ident) => {
        onimpl!($kind, $method, stringify!($kind));
    };
    ($kind:ident, $method:ident, $skind:expr) => {
        impl KindMappedIndex {
            #[doc = "Return all instances of"]
            #[doc = $skind]
            #[doc = "in the ontology."]
            pub fn $method(&self) -> impl Iterator<Item = &$kind> {
                on!(self, $kind)
            }
        }
    };
}

#[derive(Debug, Default, Eq, PartialEq)]
pub struct KindMappedIndex(BTreeMap<AxiomKind, BTreeSet<Arc<AnnotatedAxiom>>>);

impl KindMappedIndex {
    pub fn new() -> KindMappedIndex {
        KindMappedIndex::default()
    }

    /// The kinds with at least one axiom, in rank order.
    pub fn kinds(&self) -> impl Iterator<Item = AxiomKind> + '_ {
        self.0.keys().copied()
    }

    /// Fetch the annotated axioms for a given kind, in sorted order.
    ///
    /// See also `axiom` for access to the `Axiom` without
    /// annotations.
    pub fn axiom_for_kind(&self, axk: AxiomKind) -> impl Iterator<Item = &AnnotatedAxiom> {
        self.0
            .get(&axk)
            // Iterate over option
            .into_iter()
            // flatten option iterator!
            .flat_map(|hs| hs.iter())
            .map(|ax| &**ax)
    }

    /// Fetch the axioms of a given kind, in sorted order.
    pub fn axiom(&self, axk: AxiomKind) -> impl Iterator<Item = &Axiom> {
        self.axiom_for_kind(axk).map(|ann| &ann.axiom)
    }

    /// Gets an iterator that visits the annotated axioms of the
    /// index, sorted by kind and then axiom.
    pub fn iter(&self) -> impl Iterator<Item = &AnnotatedAxiom> {
        self.0.values().flat_map(|hs| hs.iter()).map(|ax| &**ax)
    }
}

onimpl! {DeclareClass, declare_class}
onimpl! {DeclareObjectProperty, declare_object_property}
onimpl! {DeclareAnnotationProperty, declare_annotation_property}
onimpl! {DeclareDataProperty, declare_data_property}
onimpl! {DeclareNamedIndividual, declare_named_individual}
onimpl! {DeclareDatatype, declare_datatype}
onimpl! {SubClassOf, sub_class_of}
onimpl! {EquivalentClasses, equivalent_class}
onimpl! {DisjointClasses, disjoint_class}
onimpl! {DisjointUnion, disjoint_union}
onimpl! {SubObjectPropertyOf, sub_object_property_of}
onimpl! {EquivalentObjectProperties, equivalent_object_properties}
onimpl! {DisjointObjectProperties, disjoint_object_properties}
onimpl! {InverseObjectProperties, inverse_object_properties}
onimpl! {ObjectPropertyDomain, object_property_domain}
onimpl! {ObjectPropertyRange, object_property_range}
onimpl! {FunctionalObjectProperty, functional_object_property}
onimpl! {InverseFunctionalObjectProperty, inverse_functional_object_property}
onimpl! {ReflexiveObjectProperty, reflexive_object_property}
onimpl! {IrreflexiveObjectProperty, irreflexive_object_property}
onimpl! {SymmetricObjectProperty, symmetric_object_property}
onimpl! {AsymmetricObjectProperty, asymmetric_object_property}
onimpl! {TransitiveObjectProperty, transitive_object_property}
onimpl! {SubDataPropertyOf, sub_data_property_of}
onimpl! {EquivalentDataProperties, equivalent_data_properties}
onimpl! {DisjointDataProperties, disjoint_data_properties}
onimpl! {DataPropertyDomain, data_property_domain}
onimpl! {DataPropertyRange, data_property_range}
onimpl! {FunctionalDataProperty, functional_data_property}
onimpl! {DatatypeDefinition, datatype_definition}
onimpl! {SameIndividual, same_individual}
onimpl! {DifferentIndividuals, different_individuals}
onimpl! {ClassAssertion, class_assertion}
onimpl! {ObjectPropertyAssertion, object_property_assertion}
onimpl! {NegativeObjectPropertyAssertion, negative_object_property_assertion}
onimpl! {DataPropertyAssertion, data_property_assertion}
onimpl! {NegativeDataPropertyAssertion, negative_data_property_assertion}
onimpl! {AnnotationAssertion, annotation_assertion}
onimpl! {SubAnnotationPropertyOf, sub_annotation_property_of}
onimpl! {AnnotationPropertyDomain, annotation_property_domain}
onimpl! {AnnotationPropertyRange, annotation_property_range}

impl OntologyIndex for KindMappedIndex {
    fn index_insert(&mut self, ax: Arc<AnnotatedAxiom>) -> bool {
        self.0.entry(ax.kind()).or_default().insert(ax)
    }

    fn index_take(&mut self, ax: &AnnotatedAxiom) -> Option<AnnotatedAxiom> {
        let kind = ax.kind();
        let set = self.0.get_mut(&kind)?;
        let taken = set.take(ax)?;

        // empty buckets are pruned so that removal round-trips the
        // index state exactly
        if set.is_empty() {
            self.0.remove(&kind);
        }

        Some(arc_unwrap_or_clone(taken))
    }
}
