//! Access relational axioms by their left or right operand.

//! # Overview
//!
//! The binary relational axiom kinds relate a "left" operand to a
//! "right" one: `SubClassOf` relates a subclass to a superclass, a
//! `ClassAssertion` relates an individual to a class expression, and
//! so on. This module provides a `RelationMappedIndex` which maps
//! each operand position to the axioms holding it, so that queries
//! such as "all superclass axioms of this expression" run in time
//! proportional to their result.
//!
//! The symmetric kinds (`EquivalentClasses`, `DisjointClasses`,
//! `InverseObjectProperties`) index every operand on both sides, as
//! they are queried in both directions.
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::model::*;

use super::indexed::{arc_unwrap_or_clone, OntologyIndex};

/// An operand position that the relation index can be keyed by.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum RelationKey {
    Expression(ClassExpression),
    Individual(NamedIndividual),
    Property(ObjectPropertyExpression),
}

impl From<ClassExpression> for RelationKey {
    fn from(ce: ClassExpression) -> RelationKey {
        RelationKey::Expression(ce)
    }
}

impl From<NamedIndividual> for RelationKey {
    fn from(i: NamedIndividual) -> RelationKey {
        RelationKey::Individual(i)
    }
}

impl From<ObjectPropertyExpression> for RelationKey {
    fn from(ope: ObjectPropertyExpression) -> RelationKey {
        RelationKey::Property(ope)
    }
}

fn left_keys(ax: &Axiom) -> Vec<RelationKey> {
    match ax {
        Axiom::SubClassOf(sc) => vec![sc.sub.clone().into()],
        Axiom::EquivalentClasses(EquivalentClasses(v))
        | Axiom::DisjointClasses(DisjointClasses(v)) => {
            v.iter().cloned().map(RelationKey::Expression).collect()
        }
        Axiom::DisjointUnion(DisjointUnion(c, _)) => {
            vec![ClassExpression::from(c.clone()).into()]
        }
        Axiom::SubObjectPropertyOf(s) => vec![s.sub.clone().into()],
        Axiom::InverseObjectProperties(InverseObjectProperties(a, b)) => vec![
            ObjectPropertyExpression::from(a.clone()).into(),
            ObjectPropertyExpression::from(b.clone()).into(),
        ],
        Axiom::ClassAssertion(ca) => vec![ca.i.clone().into()],
        Axiom::ObjectPropertyAssertion(opa) => vec![opa.from.clone().into()],
        _ => vec![],
    }
}

fn right_keys(ax: &Axiom) -> Vec<RelationKey> {
    match ax {
        Axiom::SubClassOf(sc) => vec![sc.sup.clone().into()],
        Axiom::EquivalentClasses(EquivalentClasses(v))
        | Axiom::DisjointClasses(DisjointClasses(v))
        | Axiom::DisjointUnion(DisjointUnion(_, v)) => {
            v.iter().cloned().map(RelationKey::Expression).collect()
        }
        Axiom::SubObjectPropertyOf(s) => vec![s.sup.clone().into()],
        Axiom::InverseObjectProperties(InverseObjectProperties(a, b)) => vec![
            ObjectPropertyExpression::from(a.clone()).into(),
            ObjectPropertyExpression::from(b.clone()).into(),
        ],
        Axiom::ClassAssertion(ca) => vec![ca.ce.clone().into()],
        Axiom::ObjectPropertyAssertion(opa) => vec![opa.to.clone().into()],
        _ => vec![],
    }
}

#[derive(Debug, Default, Eq, PartialEq)]
pub struct RelationMappedIndex {
    left: HashMap<(AxiomKind, RelationKey), BTreeSet<Arc<AnnotatedAxiom>>>,
    right: HashMap<(AxiomKind, RelationKey), BTreeSet<Arc<AnnotatedAxiom>>>,
}

impl RelationMappedIndex {
    pub fn new() -> RelationMappedIndex {
        RelationMappedIndex::default()
    }

    /// Fetch the axioms of the given kind with `key` as their left
    /// operand, in sorted order.
    pub fn axiom_for_left<K: Into<RelationKey>>(
        &self,
        axk: AxiomKind,
        key: K,
    ) -> impl Iterator<Item = &AnnotatedAxiom> {
        self.left
            .get(&(axk, key.into()))
            .into_iter()
            .flat_map(|hs| hs.iter())
            .map(|ax| &**ax)
    }

    /// Fetch the axioms of the given kind with `key` as their right
    /// operand, in sorted order.
    pub fn axiom_for_right<K: Into<RelationKey>>(
        &self,
        axk: AxiomKind,
        key: K,
    ) -> impl Iterator<Item = &AnnotatedAxiom> {
        self.right
            .get(&(axk, key.into()))
            .into_iter()
            .flat_map(|hs| hs.iter())
            .map(|ax| &**ax)
    }
}

fn insert_keys(
    map: &mut HashMap<(AxiomKind, RelationKey), BTreeSet<Arc<AnnotatedAxiom>>>,
    keys: Vec<RelationKey>,
    ax: &Arc<AnnotatedAxiom>,
) -> bool {
    let mut fresh = false;
    for k in keys {
        fresh |= map.entry((ax.kind(), k)).or_default().insert(ax.clone());
    }
    fresh
}

fn take_keys(
    map: &mut HashMap<(AxiomKind, RelationKey), BTreeSet<Arc<AnnotatedAxiom>>>,
    keys: Vec<RelationKey>,
    ax: &AnnotatedAxiom,
) -> Option<Arc<AnnotatedAxiom>> {
    let mut result = None;
    for k in keys {
        let slot = (ax.kind(), k);
        if let Some(set) = map.get_mut(&slot) {
            let taken = set.take(ax);
            if set.is_empty() {
                map.remove(&slot);
            }
            result = result.or(taken);
        }
    }
    result
}

impl OntologyIndex for RelationMappedIndex {
    fn index_insert(&mut self, ax: Arc<AnnotatedAxiom>) -> bool {
        let l = insert_keys(&mut self.left, left_keys(&ax.axiom), &ax);
        let r = insert_keys(&mut self.right, right_keys(&ax.axiom), &ax);
        l || r
    }

    fn index_take(&mut self, ax: &AnnotatedAxiom) -> Option<AnnotatedAxiom> {
        let l = take_keys(&mut self.left, left_keys(&ax.axiom), ax);
        let r = take_keys(&mut self.right, right_keys(&ax.axiom), ax);
        l.or(r).map(arc_unwrap_or_clone)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sub_class_left_and_right() {
        let b = Build::new();
        let mut i = RelationMappedIndex::new();

        let a: ClassExpression = b.class("http://www.example.com#a").into();
        let c: ClassExpression = b.class("http://www.example.com#c").into();

        let sub: AnnotatedAxiom = SubClassOf {
            sup: c.clone(),
            sub: a.clone(),
        }
        .into();
        i.index_insert(Arc::new(sub.clone()));

        let by_sub: Vec<_> = i.axiom_for_left(AxiomKind::SubClassOf, a.clone()).collect();
        assert_eq!(by_sub, vec![&sub]);

        // a is not the superclass of anything
        assert_eq!(i.axiom_for_right(AxiomKind::SubClassOf, a).count(), 0);

        let by_sup: Vec<_> = i.axiom_for_right(AxiomKind::SubClassOf, c).collect();
        assert_eq!(by_sup, vec![&sub]);
    }

    #[test]
    fn test_symmetric_kinds_index_both_sides() {
        let b = Build::new();
        let mut i = RelationMappedIndex::new();

        let eq: AnnotatedAxiom = EquivalentClasses(vec![
            b.class("http://www.example.com#a").into(),
            b.class("http://www.example.com#b").into(),
        ])
        .into();
        i.index_insert(Arc::new(eq.clone()));

        for name in ["a", "b"] {
            let ce: ClassExpression = b.class(format!("http://www.example.com#{}", name)).into();
            assert_eq!(
                i.axiom_for_left(AxiomKind::EquivalentClasses, ce.clone())
                    .count(),
                1
            );
            assert_eq!(
                i.axiom_for_right(AxiomKind::EquivalentClasses, ce).count(),
                1
            );
        }
    }

    #[test]
    fn test_class_assertion_by_individual() {
        let b = Build::new();
        let mut i = RelationMappedIndex::new();

        let ind = b.named_individual("http://www.example.com#i");
        let ce: ClassExpression = b.class("http://www.example.com#a").into();

        let ca: AnnotatedAxiom = ClassAssertion {
            ce: ce.clone(),
            i: ind.clone(),
        }
        .into();
        i.index_insert(Arc::new(ca.clone()));

        let by_ind: Vec<_> = i
            .axiom_for_left(AxiomKind::ClassAssertion, ind.clone())
            .collect();
        assert_eq!(by_ind, vec![&ca]);

        let by_class: Vec<_> = i.axiom_for_right(AxiomKind::ClassAssertion, ce).collect();
        assert_eq!(by_class, vec![&ca]);
    }

    #[test]
    fn test_non_relational_kinds_not_indexed() {
        let b = Build::new();
        let mut i = RelationMappedIndex::new();

        let decl: AnnotatedAxiom = DeclareClass(b.class("http://www.example.com#a")).into();
        assert!(!i.index_insert(Arc::new(decl.clone())));
        assert_eq!(i.index_take(&decl), None);
    }

    #[test]
    fn test_take_restores_empty_state() {
        let b = Build::new();
        let mut i = RelationMappedIndex::new();

        let sub: AnnotatedAxiom = SubClassOf {
            sup: b.class("http://www.example.com#c").into(),
            sub: b.class("http://www.example.com#a").into(),
        }
        .into();

        i.index_insert(Arc::new(sub.clone()));
        assert_eq!(i.index_take(&sub), Some(sub.clone()));
        assert_eq!(i, RelationMappedIndex::new());
    }
}
