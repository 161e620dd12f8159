//! Access axioms by the entities they mention.

//! # Overview
//!
//! This module provides a `SignatureMappedIndex` which provides
//! rapid access to all axioms whose operand tree mentions a given
//! entity, wherever it appears. Extraction runs the [`Walk`] visitor
//! over the annotated axiom, annotations included.
//!
//! [`Walk`]: crate::visitor::Walk
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::model::*;
use crate::visitor::signature;

use super::indexed::{arc_unwrap_or_clone, OntologyIndex};

#[derive(Debug, Default, Eq, PartialEq)]
pub struct SignatureMappedIndex(HashMap<Entity, BTreeSet<Arc<AnnotatedAxiom>>>);

impl SignatureMappedIndex {
    pub fn new() -> SignatureMappedIndex {
        SignatureMappedIndex::default()
    }

    /// Fetch the annotated axioms mentioning the entity, in sorted
    /// order.
    pub fn axiom_for_entity(&self, e: &Entity) -> impl Iterator<Item = &AnnotatedAxiom> {
        self.0
            .get(e)
            .into_iter()
            .flat_map(|hs| hs.iter())
            .map(|ax| &**ax)
    }

    /// The entities mentioned by at least one axiom.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.0.keys()
    }
}

impl OntologyIndex for SignatureMappedIndex {
    fn index_insert(&mut self, ax: Arc<AnnotatedAxiom>) -> bool {
        let sig = signature(&ax);
        let mut fresh = false;
        for e in sig {
            fresh |= self.0.entry(e).or_default().insert(ax.clone());
        }
        fresh
    }

    fn index_take(&mut self, ax: &AnnotatedAxiom) -> Option<AnnotatedAxiom> {
        let mut result = None;
        for e in signature(ax) {
            if let Some(set) = self.0.get_mut(&e) {
                let taken = set.take(ax);
                if set.is_empty() {
                    self.0.remove(&e);
                }
                result = result.or(taken);
            }
        }

        result.map(arc_unwrap_or_clone)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_referencing_axioms() {
        let b = Build::new();
        let mut i = SignatureMappedIndex::new();

        let a = b.class("http://www.example.com#a");
        let c = b.class("http://www.example.com#c");

        let decl: AnnotatedAxiom = DeclareClass(a.clone()).into();
        let sub: AnnotatedAxiom = SubClassOf {
            sup: c.clone().into(),
            sub: a.clone().into(),
        }
        .into();

        i.index_insert(Arc::new(decl.clone()));
        i.index_insert(Arc::new(sub.clone()));

        let for_a: Vec<_> = i.axiom_for_entity(&a.clone().into()).collect();
        assert_eq!(for_a, vec![&decl, &sub]);

        let for_c: Vec<_> = i.axiom_for_entity(&c.clone().into()).collect();
        assert_eq!(for_c, vec![&sub]);

        let other = b.class("http://www.example.com#other");
        assert_eq!(i.axiom_for_entity(&other.into()).count(), 0);
    }

    #[test]
    fn test_take_prunes_empty_entries() {
        let b = Build::new();
        let mut i = SignatureMappedIndex::new();

        let decl: AnnotatedAxiom = DeclareClass(b.class("http://www.example.com#a")).into();
        i.index_insert(Arc::new(decl.clone()));

        assert_eq!(i.index_take(&decl), Some(decl.clone()));
        assert_eq!(i, SignatureMappedIndex::new());
        assert_eq!(i.index_take(&decl), None);
    }

    #[test]
    fn test_one_axiom_many_entities() {
        let b = Build::new();
        let mut i = SignatureMappedIndex::new();

        let eq: AnnotatedAxiom = EquivalentClasses(vec![
            b.class("http://www.example.com#a").into(),
            b.class("http://www.example.com#b").into(),
            b.class("http://www.example.com#c").into(),
        ])
        .into();
        i.index_insert(Arc::new(eq.clone()));

        assert_eq!(i.entities().count(), 3);
        for e in ["a", "b", "c"] {
            let entity: Entity = b.class(format!("http://www.example.com#{}", e)).into();
            assert_eq!(i.axiom_for_entity(&entity).collect::<Vec<_>>(), vec![&eq]);
        }
    }
}
