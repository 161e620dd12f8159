//! Changes to an ontology, applied in ordered, atomic batches.
//!
//! # Overview
//!
//! A [`Change`] is one requested mutation: add or remove an axiom,
//! an import, or an ontology annotation. [`apply_changes`] applies a
//! batch strictly in submission order, one change at a time; every
//! change is independently idempotent, so adding a present axiom or
//! removing an absent one is accepted as a no-op rather than an
//! error. The result reports, for each submitted change, whether it
//! had any effect.
//!
//! A malformed change aborts the batch at the point of failure:
//! changes before it stay applied, the rest are rejected, and the
//! error reports both. There is no rollback; undo is a new batch
//! built from [`Change::inverse`].
use log::{debug, trace};

use crate::error::StrixError;
use crate::model::*;
use crate::ontology::store::AxiomStore;

/// A single requested mutation of an ontology.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Change {
    AddAxiom(AnnotatedAxiom),
    RemoveAxiom(AnnotatedAxiom),
    AddImport(Import),
    RemoveImport(Import),
    AddOntologyAnnotation(Annotation),
    RemoveOntologyAnnotation(Annotation),
}

impl Change {
    /// The change that undoes this one.
    pub fn inverse(self) -> Change {
        match self {
            Change::AddAxiom(ax) => Change::RemoveAxiom(ax),
            Change::RemoveAxiom(ax) => Change::AddAxiom(ax),
            Change::AddImport(i) => Change::RemoveImport(i),
            Change::RemoveImport(i) => Change::AddImport(i),
            Change::AddOntologyAnnotation(a) => Change::RemoveOntologyAnnotation(a),
            Change::RemoveOntologyAnnotation(a) => Change::AddOntologyAnnotation(a),
        }
    }
}

/// A change after application, annotated with whether it changed the
/// ontology.
///
/// Axiom changes are reported in canonical form, which is the form
/// that reached the store.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AppliedChange {
    pub change: Change,
    pub applied: bool,
}

/// Apply a batch of changes to an ontology, in order.
///
/// On success the whole batch is in the store and the result has one
/// entry per submitted change. On failure the error carries the
/// index of the failed change and the applied prefix; the store
/// reflects every change before that index and none from it onward.
///
/// # Examples
/// ```
/// # use strix::change::{apply_changes, Change};
/// # use strix::model::*;
/// # use strix::ontology::store::AxiomStore;
/// let b = Build::new();
/// let mut o = AxiomStore::new();
/// let decl: AnnotatedAxiom = DeclareClass(b.class("http://www.example.com/a")).into();
///
/// let applied = apply_changes(
///     &mut o,
///     vec![
///         Change::AddAxiom(decl.clone()),
///         Change::AddAxiom(decl.clone()),
///     ],
/// )
/// .unwrap();
///
/// // the duplicate is accepted, but has no effect
/// assert_eq!(
///     applied.iter().map(|ac| ac.applied).collect::<Vec<_>>(),
///     vec![true, false]
/// );
/// assert_eq!(o.axiom_count(), 1);
/// ```
pub fn apply_changes(
    o: &mut AxiomStore,
    changes: Vec<Change>,
) -> Result<Vec<AppliedChange>, StrixError> {
    debug!("applying batch of {} changes", changes.len());

    let mut results = Vec::with_capacity(changes.len());
    for (idx, change) in changes.into_iter().enumerate() {
        match apply_one(o, change) {
            Ok(ac) => {
                trace!("change {}: applied={}", idx, ac.applied);
                results.push(ac);
            }
            Err(e) => {
                debug!("batch aborted at change {}: {}", idx, e);
                return Err(StrixError::ChangeApplication {
                    failed_at: idx,
                    applied: results,
                    source: Box::new(e),
                });
            }
        }
    }

    Ok(results)
}

fn apply_one(o: &mut AxiomStore, change: Change) -> Result<AppliedChange, StrixError> {
    match change {
        Change::AddAxiom(ax) => {
            ax.axiom.validate()?;
            let ax = ax.canonical();
            let applied = o.insert(ax.clone());
            Ok(AppliedChange {
                change: Change::AddAxiom(ax),
                applied,
            })
        }
        Change::RemoveAxiom(ax) => {
            ax.axiom.validate()?;
            let ax = ax.canonical();
            let applied = o.remove(&ax);
            Ok(AppliedChange {
                change: Change::RemoveAxiom(ax),
                applied,
            })
        }
        Change::AddImport(i) => Ok(AppliedChange {
            applied: o.add_import(i.clone()),
            change: Change::AddImport(i),
        }),
        Change::RemoveImport(i) => Ok(AppliedChange {
            applied: o.remove_import(&i),
            change: Change::RemoveImport(i),
        }),
        Change::AddOntologyAnnotation(a) => Ok(AppliedChange {
            applied: o.add_annotation(a.clone()),
            change: Change::AddOntologyAnnotation(a),
        }),
        Change::RemoveOntologyAnnotation(a) => Ok(AppliedChange {
            applied: o.remove_annotation(&a),
            change: Change::RemoveOntologyAnnotation(a),
        }),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::Ontology;
    use pretty_assertions::assert_eq;

    fn sub_class(b: &Build, sub: &str, sup: &str) -> AnnotatedAxiom {
        SubClassOf {
            sup: b.class(format!("http://www.example.com#{}", sup)).into(),
            sub: b.class(format!("http://www.example.com#{}", sub)).into(),
        }
        .into()
    }

    #[test]
    fn test_duplicate_in_one_batch() {
        let b = Build::new();
        let mut o = AxiomStore::new();
        let ax = sub_class(&b, "a", "b");

        let applied = apply_changes(
            &mut o,
            vec![Change::AddAxiom(ax.clone()), Change::AddAxiom(ax.clone())],
        )
        .unwrap();

        assert_eq!(
            applied,
            vec![
                AppliedChange {
                    change: Change::AddAxiom(ax.clone()),
                    applied: true
                },
                AppliedChange {
                    change: Change::AddAxiom(ax),
                    applied: false
                },
            ]
        );
        assert_eq!(o.axiom_count(), 1);
    }

    #[test]
    fn test_remove_absent_is_a_noop() {
        let b = Build::new();
        let mut o = AxiomStore::new();
        let ax = sub_class(&b, "a", "b");

        let applied =
            apply_changes(&mut o, vec![Change::RemoveAxiom(ax)]).unwrap();
        assert!(!applied[0].applied);
        assert!(o.is_empty());
    }

    #[test]
    fn test_changes_apply_in_order() {
        let b = Build::new();
        let mut o = AxiomStore::new();
        let ax = sub_class(&b, "a", "b");

        // add then remove within one batch leaves the store empty
        let applied = apply_changes(
            &mut o,
            vec![
                Change::AddAxiom(ax.clone()),
                Change::RemoveAxiom(ax.clone()),
            ],
        )
        .unwrap();

        assert_eq!(
            applied.iter().map(|ac| ac.applied).collect::<Vec<_>>(),
            vec![true, true]
        );
        assert!(o.is_empty());
    }

    #[test]
    fn test_multiset_equal_axioms_collapse() {
        let b = Build::new();
        let mut o = AxiomStore::new();
        let a: ClassExpression = b.class("http://www.example.com#a").into();
        let c: ClassExpression = b.class("http://www.example.com#c").into();

        let applied = apply_changes(
            &mut o,
            vec![
                Change::AddAxiom(EquivalentClasses(vec![a.clone(), c.clone()]).into()),
                Change::AddAxiom(EquivalentClasses(vec![c, a]).into()),
            ],
        )
        .unwrap();

        // same multiset of operands: the second add is a no-op
        assert_eq!(
            applied.iter().map(|ac| ac.applied).collect::<Vec<_>>(),
            vec![true, false]
        );
        assert_eq!(o.axiom_count(), 1);
    }

    #[test]
    fn test_malformed_change_aborts_remaining_batch() {
        let b = Build::new();
        let mut o = AxiomStore::new();

        let first = sub_class(&b, "a", "b");
        let malformed: AnnotatedAxiom =
            EquivalentClasses(vec![b.class("http://www.example.com#a").into()]).into();
        let never_applied = sub_class(&b, "c", "d");

        let err = apply_changes(
            &mut o,
            vec![
                Change::AddAxiom(first.clone()),
                Change::AddAxiom(malformed),
                Change::AddAxiom(never_applied.clone()),
            ],
        )
        .unwrap_err();

        match err {
            StrixError::ChangeApplication {
                failed_at,
                applied,
                source,
            } => {
                assert_eq!(failed_at, 1);
                assert_eq!(applied.len(), 1);
                assert!(applied[0].applied);
                assert!(matches!(*source, StrixError::MalformedExpression(_)));
            }
            e => panic!("unexpected error: {:?}", e),
        }

        // the prefix stays applied, the suffix never ran
        assert!(o.contains(&first));
        assert!(!o.contains(&never_applied));
        assert_eq!(o.axiom_count(), 1);
    }

    #[test]
    fn test_undo_by_inverse_batch() {
        let b = Build::new();
        let mut o = AxiomStore::new();

        let changes = vec![
            Change::AddAxiom(sub_class(&b, "a", "b")),
            Change::AddImport(Import(b.iri("http://www.example.com/other"))),
        ];

        let applied = apply_changes(&mut o, changes).unwrap();
        assert_eq!(o.axiom_count(), 1);
        assert_eq!(o.imports().len(), 1);

        let inverse: Vec<Change> = applied
            .into_iter()
            .rev()
            .map(|ac| ac.change.inverse())
            .collect();
        apply_changes(&mut o, inverse).unwrap();

        assert_eq!(o, AxiomStore::new());
    }

    #[test]
    fn test_import_and_annotation_changes() {
        let b = Build::new();
        let mut o = AxiomStore::new();

        let import = Import(b.iri("http://www.example.com/other"));
        let ann = Annotation {
            ap: b.annotation_property("http://www.w3.org/2000/01/rdf-schema#comment"),
            av: Literal::Simple {
                literal: "an ontology".to_string(),
            }
            .into(),
        };

        let applied = apply_changes(
            &mut o,
            vec![
                Change::AddImport(import.clone()),
                Change::AddImport(import.clone()),
                Change::AddOntologyAnnotation(ann.clone()),
                Change::RemoveOntologyAnnotation(ann.clone()),
            ],
        )
        .unwrap();

        assert_eq!(
            applied.iter().map(|ac| ac.applied).collect::<Vec<_>>(),
            vec![true, false, true, true]
        );
        assert_eq!(o.imports(), vec![import]);
        assert_eq!(o.annotations(), vec![]);
        assert_eq!(o.id(), &OntologyID::default());
    }
}
