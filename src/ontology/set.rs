//! The plain set ontology and the set index.
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::model::*;

use super::indexed::{arc_unwrap_or_clone, OntologyIndex};

/// The authoritative axiom set, kept sorted.
///
/// Iteration follows the total order of `AnnotatedAxiom`, so two
/// equal sets enumerate identically however they were built.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct SetIndex(BTreeSet<Arc<AnnotatedAxiom>>);

impl SetIndex {
    pub fn new() -> SetIndex {
        SetIndex::default()
    }

    pub fn contains(&self, ax: &AnnotatedAxiom) -> bool {
        self.0.contains(ax)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Visit the axioms in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &AnnotatedAxiom> {
        self.0.iter().map(|ax| &**ax)
    }
}

impl OntologyIndex for SetIndex {
    fn index_insert(&mut self, ax: Arc<AnnotatedAxiom>) -> bool {
        self.0.insert(ax)
    }

    fn index_take(&mut self, ax: &AnnotatedAxiom) -> Option<AnnotatedAxiom> {
        self.0.take(ax).map(arc_unwrap_or_clone)
    }
}

/// An ontology backed by nothing but a sorted set of axioms.
///
/// Fast to add to, linear to search; the brute-force counterpart of
/// [`super::store::AxiomStore`].
#[derive(Debug, Default, Eq, PartialEq)]
pub struct SetOntology {
    id: OntologyID,
    imports: BTreeSet<Import>,
    annotations: BTreeSet<Annotation>,
    axiom: BTreeSet<AnnotatedAxiom>,
}

impl SetOntology {
    /// Create a new ontology.
    ///
    /// # Examples
    /// ```
    /// # use strix::ontology::set::SetOntology;
    /// let o = SetOntology::new();
    /// let o2 = SetOntology::new();
    ///
    /// assert_eq!(o, o2);
    /// ```
    pub fn new() -> SetOntology {
        SetOntology::default()
    }

    /// Gets an iterator that visits the annotated axioms of the
    /// ontology, in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &AnnotatedAxiom> {
        self.axiom.iter()
    }

    pub fn contains(&self, ax: &AnnotatedAxiom) -> bool {
        self.axiom.contains(ax)
    }

    pub fn len(&self) -> usize {
        self.axiom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axiom.is_empty()
    }

    pub fn imports(&self) -> impl Iterator<Item = &Import> {
        self.imports.iter()
    }

    pub fn add_import(&mut self, import: Import) -> bool {
        self.imports.insert(import)
    }

    pub fn remove_import(&mut self, import: &Import) -> bool {
        self.imports.remove(import)
    }

    pub fn annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter()
    }

    pub fn add_annotation(&mut self, ann: Annotation) -> bool {
        self.annotations.insert(ann)
    }

    pub fn remove_annotation(&mut self, ann: &Annotation) -> bool {
        self.annotations.remove(ann)
    }
}

impl Ontology for SetOntology {
    fn id(&self) -> &OntologyID {
        &self.id
    }

    fn mut_id(&mut self) -> &mut OntologyID {
        &mut self.id
    }
}

impl MutableOntology for SetOntology {
    /// Insert an axiom into the ontology.
    ///
    /// # Examples
    /// ```
    /// # use strix::model::*;
    /// # use strix::ontology::set::SetOntology;
    /// let mut o = SetOntology::new();
    /// let b = Build::new();
    /// o.insert(DeclareClass(b.class("http://www.example.com/a")));
    /// o.insert(DeclareObjectProperty(b.object_property("http://www.example.com/r")));
    /// ```
    ///
    /// See `declare` for an easier way to declare named entities.
    fn insert<A>(&mut self, ax: A) -> bool
    where
        A: Into<AnnotatedAxiom>,
    {
        self.axiom.insert(ax.into())
    }

    fn remove(&mut self, ax: &AnnotatedAxiom) -> bool {
        self.axiom.remove(ax)
    }

    fn take(&mut self, ax: &AnnotatedAxiom) -> Option<AnnotatedAxiom> {
        self.axiom.take(ax)
    }
}

impl FromIterator<AnnotatedAxiom> for SetOntology {
    fn from_iter<I: IntoIterator<Item = AnnotatedAxiom>>(iter: I) -> Self {
        SetOntology {
            axiom: iter.into_iter().collect(),
            ..Default::default()
        }
    }
}

/// An owning iterator over the annotated axioms of an `Ontology`.
impl IntoIterator for SetOntology {
    type Item = AnnotatedAxiom;
    type IntoIter = std::collections::btree_set::IntoIter<AnnotatedAxiom>;
    fn into_iter(self) -> Self::IntoIter {
        self.axiom.into_iter()
    }
}

impl<'a> IntoIterator for &'a SetOntology {
    type Item = &'a AnnotatedAxiom;
    type IntoIter = std::collections::btree_set::Iter<'a, AnnotatedAxiom>;
    fn into_iter(self) -> Self::IntoIter {
        self.axiom.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ontology_cons() {
        let _ = SetOntology::new();
        assert!(true);
    }

    #[test]
    fn test_ontology_iter_empty() {
        // Empty ontologies should stop iteration right away
        let mut it = SetOntology::new().into_iter();
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_ontology_iter_sorted() {
        // Setup
        let build = Build::new();
        let mut o = SetOntology::new();
        let decl1 = DeclareClass(build.class("http://www.example.com#a"));
        let decl2 = DeclareClass(build.class("http://www.example.com#b"));
        let decl3 = DeclareClass(build.class("http://www.example.com#c"));
        let disj1 = DisjointClasses(vec![
            ClassExpression::Class(build.class("http://www.example.com#a")),
            ClassExpression::Class(build.class("http://www.example.com#b")),
        ]);
        let disj2 = DisjointClasses(vec![
            ClassExpression::Class(build.class("http://www.example.com#b")),
            ClassExpression::Class(build.class("http://www.example.com#c")),
        ]);
        o.insert(disj1.clone());
        o.insert(disj2.clone());
        o.insert(decl1.clone());
        o.insert(decl2.clone());
        o.insert(decl3.clone());

        // Iteration is based on ascending order of axiom kinds,
        // whatever the insertion order.
        let v: Vec<_> = (&o).into_iter().collect();
        assert_eq!(
            v,
            [
                &AnnotatedAxiom::from(Axiom::DeclareClass(decl1)),
                &AnnotatedAxiom::from(Axiom::DeclareClass(decl2)),
                &AnnotatedAxiom::from(Axiom::DeclareClass(decl3)),
                &AnnotatedAxiom::from(Axiom::DisjointClasses(disj1)),
                &AnnotatedAxiom::from(Axiom::DisjointClasses(disj2)),
            ]
        );
    }

    #[test]
    fn test_insert_remove_idempotent() {
        let b = Build::new();
        let mut o = SetOntology::new();
        let decl: AnnotatedAxiom = DeclareClass(b.class("http://www.example.com#a")).into();

        assert!(o.insert(decl.clone()));
        assert!(!o.insert(decl.clone()));
        assert_eq!(o.len(), 1);

        assert!(o.remove(&decl));
        assert!(!o.remove(&decl));
        assert!(o.is_empty());
    }

    #[test]
    fn test_set_index_take() {
        let b = Build::new();
        let mut i = SetIndex::new();
        let decl: AnnotatedAxiom = DeclareClass(b.class("http://www.example.com#a")).into();

        assert!(i.index_insert(Arc::new(decl.clone())));
        assert_eq!(i.index_take(&decl), Some(decl.clone()));
        assert_eq!(i.index_take(&decl), None);
    }
}
