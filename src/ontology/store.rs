//! The indexed axiom store.

//! # Overview
//!
//! An `AxiomStore` is the authoritative axiom set of an ontology
//! together with every derived index, its identifier, its imports
//! and its ontology-level annotations. A single insert or remove
//! updates the set and all indexes before returning, and the indexes
//! are never rebuilt wholesale; `&mut self` on the primitives means
//! no query can observe the store between index updates, so the
//! indexes are always mutually consistent with the axiom set.
//!
//! The mutation primitives are crate-private. External callers
//! mutate a store through [`crate::change::apply_changes`], which
//! adds validation, canonicalization and listener notification; the
//! queries here are the read-only surface shared by both.
//!
//! Multi-axiom query results are freshly materialized, caller-owned
//! vectors, sorted in the total order of the model; the store never
//! hands out its internal sets.
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::model::*;

use super::indexed::OntologyIndex;
use super::kind_mapped::KindMappedIndex;
use super::relation_mapped::{RelationKey, RelationMappedIndex};
use super::set::{SetIndex, SetOntology};
use super::signature_mapped::SignatureMappedIndex;

#[derive(Debug, Default, Eq, PartialEq)]
pub struct AxiomStore {
    id: OntologyID,
    imports: BTreeSet<Import>,
    annotations: BTreeSet<Annotation>,

    set: SetIndex,
    kind: KindMappedIndex,
    signature: SignatureMappedIndex,
    relation: RelationMappedIndex,
}

impl AxiomStore {
    pub fn new() -> AxiomStore {
        AxiomStore::default()
    }

    // Mutation primitives. Crate-private: the change applier is the
    // only mutation path offered outside the crate.

    /// Insert an axiom, updating every index.
    ///
    /// Returns false, changing nothing anywhere, if the axiom is
    /// already present.
    pub(crate) fn insert<A>(&mut self, ax: A) -> bool
    where
        A: Into<AnnotatedAxiom>,
    {
        let ax = Arc::new(ax.into());

        // the set index is authoritative for membership; on a
        // duplicate no other index may be touched
        if !self.set.index_insert(ax.clone()) {
            return false;
        }

        self.kind.index_insert(ax.clone());
        self.signature.index_insert(ax.clone());
        self.relation.index_insert(ax);
        true
    }

    /// Remove an axiom from every index.
    ///
    /// Returns false, changing nothing, if the axiom is absent.
    pub(crate) fn remove(&mut self, ax: &AnnotatedAxiom) -> bool {
        self.take(ax).is_some()
    }

    pub(crate) fn take(&mut self, ax: &AnnotatedAxiom) -> Option<AnnotatedAxiom> {
        let taken = self.set.index_take(ax)?;

        self.kind.index_remove(ax);
        self.signature.index_remove(ax);
        self.relation.index_remove(ax);
        Some(taken)
    }

    pub(crate) fn add_import(&mut self, import: Import) -> bool {
        self.imports.insert(import)
    }

    pub(crate) fn remove_import(&mut self, import: &Import) -> bool {
        self.imports.remove(import)
    }

    pub(crate) fn add_annotation(&mut self, ann: Annotation) -> bool {
        self.annotations.insert(ann)
    }

    pub(crate) fn remove_annotation(&mut self, ann: &Annotation) -> bool {
        self.annotations.remove(ann)
    }

    // Queries

    /// Visit every axiom, in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &AnnotatedAxiom> {
        self.set.iter()
    }

    pub fn contains(&self, ax: &AnnotatedAxiom) -> bool {
        self.set.contains(ax)
    }

    pub fn axiom_count(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// The kind-mapped index, for iteration by axiom kind.
    ///
    /// # Examples
    /// ```
    /// # use strix::model::*;
    /// # use strix::ontology::store::AxiomStore;
    /// # use strix::change::{apply_changes, Change};
    /// let b = Build::new();
    /// let mut o = AxiomStore::new();
    /// apply_changes(
    ///     &mut o,
    ///     vec![Change::AddAxiom(DeclareClass(b.class("http://www.example.com/a")).into())],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(o.i().declare_class().count(), 1);
    /// ```
    pub fn i(&self) -> &KindMappedIndex {
        &self.kind
    }

    /// All axioms of the given kind, sorted.
    pub fn axioms_of_kind(&self, axk: AxiomKind) -> Vec<AnnotatedAxiom> {
        self.kind.axiom_for_kind(axk).cloned().collect()
    }

    /// All axioms whose operand tree mentions the entity, sorted.
    pub fn axioms_referencing(&self, e: &Entity) -> Vec<AnnotatedAxiom> {
        self.signature.axiom_for_entity(e).cloned().collect()
    }

    /// As [`axioms_referencing`](AxiomStore::axioms_referencing),
    /// expanded over an import closure supplied by the caller.
    pub fn axioms_referencing_closure<'a, I>(&'a self, e: &Entity, imports: I) -> Vec<AnnotatedAxiom>
    where
        I: IntoIterator<Item = &'a AxiomStore>,
    {
        let mut result: BTreeSet<AnnotatedAxiom> =
            self.signature.axiom_for_entity(e).cloned().collect();
        for o in imports {
            result.extend(o.signature.axiom_for_entity(e).cloned());
        }
        result.into_iter().collect()
    }

    /// The `SubClassOf` axioms with the expression as subclass.
    pub fn sub_class_axioms_for_sub_class(&self, ce: &ClassExpression) -> Vec<SubClassOf> {
        self.relation
            .axiom_for_left(AxiomKind::SubClassOf, ce.clone())
            .filter_map(|aa| match &aa.axiom {
                Axiom::SubClassOf(sc) => Some(sc.clone()),
                _ => None,
            })
            .collect()
    }

    /// The `SubClassOf` axioms with the expression as superclass.
    pub fn sub_class_axioms_for_super_class(&self, ce: &ClassExpression) -> Vec<SubClassOf> {
        self.relation
            .axiom_for_right(AxiomKind::SubClassOf, ce.clone())
            .filter_map(|aa| match &aa.axiom {
                Axiom::SubClassOf(sc) => Some(sc.clone()),
                _ => None,
            })
            .collect()
    }

    /// The direct superclasses of the expression: the right operands
    /// of its subclass axioms.
    pub fn super_classes_of(&self, ce: &ClassExpression) -> Vec<ClassExpression> {
        self.sub_class_axioms_for_sub_class(ce)
            .into_iter()
            .map(|sc| sc.sup)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// The direct subclasses of the expression.
    pub fn sub_classes_of(&self, ce: &ClassExpression) -> Vec<ClassExpression> {
        self.sub_class_axioms_for_super_class(ce)
            .into_iter()
            .map(|sc| sc.sub)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// The expressions equivalent to `ce`: the union of the operand
    /// sets of every `EquivalentClasses` axiom containing it, with
    /// `ce` itself excluded.
    pub fn equivalent_classes_of(&self, ce: &ClassExpression) -> Vec<ClassExpression> {
        let mut result: BTreeSet<ClassExpression> = self
            .relation
            .axiom_for_left(AxiomKind::EquivalentClasses, ce.clone())
            .filter_map(|aa| match &aa.axiom {
                Axiom::EquivalentClasses(EquivalentClasses(v)) => Some(v.clone()),
                _ => None,
            })
            .flatten()
            .collect();
        result.remove(ce);
        result.into_iter().collect()
    }

    /// The expressions declared disjoint with `ce`, `ce` excluded.
    pub fn disjoint_classes_of(&self, ce: &ClassExpression) -> Vec<ClassExpression> {
        let mut result: BTreeSet<ClassExpression> = self
            .relation
            .axiom_for_left(AxiomKind::DisjointClasses, ce.clone())
            .filter_map(|aa| match &aa.axiom {
                Axiom::DisjointClasses(DisjointClasses(v)) => Some(v.clone()),
                _ => None,
            })
            .flatten()
            .collect();
        result.remove(ce);
        result.into_iter().collect()
    }

    /// The `DisjointUnion` axioms defining the class.
    pub fn disjoint_union_axioms(&self, c: &Class) -> Vec<DisjointUnion> {
        self.relation
            .axiom_for_left(AxiomKind::DisjointUnion, ClassExpression::from(c.clone()))
            .filter_map(|aa| match &aa.axiom {
                Axiom::DisjointUnion(du) => Some(du.clone()),
                _ => None,
            })
            .collect()
    }

    /// The `ClassAssertion` axioms about the individual.
    pub fn class_assertion_axioms(&self, i: &NamedIndividual) -> Vec<ClassAssertion> {
        self.relation
            .axiom_for_left(AxiomKind::ClassAssertion, i.clone())
            .filter_map(|aa| match &aa.axiom {
                Axiom::ClassAssertion(ca) => Some(ca.clone()),
                _ => None,
            })
            .collect()
    }

    /// The `ClassAssertion` axioms asserting membership of the
    /// expression.
    pub fn class_assertion_axioms_for_class(&self, ce: &ClassExpression) -> Vec<ClassAssertion> {
        self.relation
            .axiom_for_right(AxiomKind::ClassAssertion, ce.clone())
            .filter_map(|aa| match &aa.axiom {
                Axiom::ClassAssertion(ca) => Some(ca.clone()),
                _ => None,
            })
            .collect()
    }

    /// The classes the individual is asserted to belong to.
    pub fn types_of(&self, i: &NamedIndividual) -> Vec<ClassExpression> {
        self.class_assertion_axioms(i)
            .into_iter()
            .map(|ca| ca.ce)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// The individuals asserted to belong to the expression.
    pub fn individuals_of(&self, ce: &ClassExpression) -> Vec<NamedIndividual> {
        self.class_assertion_axioms_for_class(ce)
            .into_iter()
            .map(|ca| ca.i)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// The `SubObjectPropertyOf` axioms with the expression as
    /// subproperty.
    pub fn sub_object_property_axioms_for_sub(
        &self,
        ope: &ObjectPropertyExpression,
    ) -> Vec<SubObjectPropertyOf> {
        self.relation
            .axiom_for_left(AxiomKind::SubObjectPropertyOf, ope.clone())
            .filter_map(|aa| match &aa.axiom {
                Axiom::SubObjectPropertyOf(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    /// The `SubObjectPropertyOf` axioms with the expression as
    /// superproperty.
    pub fn sub_object_property_axioms_for_super(
        &self,
        ope: &ObjectPropertyExpression,
    ) -> Vec<SubObjectPropertyOf> {
        self.relation
            .axiom_for_right(AxiomKind::SubObjectPropertyOf, ope.clone())
            .filter_map(|aa| match &aa.axiom {
                Axiom::SubObjectPropertyOf(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    /// The `InverseObjectProperties` axioms mentioning the property.
    pub fn inverse_object_property_axioms(
        &self,
        op: &ObjectProperty,
    ) -> Vec<InverseObjectProperties> {
        self.relation
            .axiom_for_left(
                AxiomKind::InverseObjectProperties,
                ObjectPropertyExpression::from(op.clone()),
            )
            .filter_map(|aa| match &aa.axiom {
                Axiom::InverseObjectProperties(i) => Some(i.clone()),
                _ => None,
            })
            .collect()
    }

    /// The `ObjectPropertyAssertion` axioms with the individual as
    /// source.
    pub fn object_property_assertion_axioms(
        &self,
        i: &NamedIndividual,
    ) -> Vec<ObjectPropertyAssertion> {
        self.relation
            .axiom_for_left(AxiomKind::ObjectPropertyAssertion, i.clone())
            .filter_map(|aa| match &aa.axiom {
                Axiom::ObjectPropertyAssertion(opa) => Some(opa.clone()),
                _ => None,
            })
            .collect()
    }

    /// The ontologies this one imports.
    pub fn imports(&self) -> Vec<Import> {
        self.imports.iter().cloned().collect()
    }

    /// The ontology-level annotations.
    pub fn annotations(&self) -> Vec<Annotation> {
        self.annotations.iter().cloned().collect()
    }
}

impl Ontology for AxiomStore {
    fn id(&self) -> &OntologyID {
        &self.id
    }

    fn mut_id(&mut self) -> &mut OntologyID {
        &mut self.id
    }
}

impl From<SetOntology> for AxiomStore {
    fn from(mut so: SetOntology) -> AxiomStore {
        let mut store = AxiomStore::new();
        std::mem::swap(store.mut_id(), so.mut_id());

        for import in so.imports().cloned().collect::<Vec<_>>() {
            store.add_import(import);
        }
        for ann in so.annotations().cloned().collect::<Vec<_>>() {
            store.add_annotation(ann);
        }
        for ax in so {
            store.insert(ax);
        }
        store
    }
}

impl From<AxiomStore> for SetOntology {
    fn from(mut store: AxiomStore) -> SetOntology {
        let mut so = SetOntology::new();
        std::mem::swap(so.mut_id(), store.mut_id());

        for import in store.imports() {
            so.add_import(import);
        }
        for ann in store.annotations() {
            so.add_annotation(ann);
        }
        for ax in store.iter().cloned().collect::<Vec<_>>() {
            so.insert(ax);
        }
        so
    }
}
