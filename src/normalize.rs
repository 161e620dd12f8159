//! Structural normalization of class expressions.
//!
//! # Overview
//!
//! The same class can be described in more than one way; these
//! operations reduce descriptions toward standard shapes. Negation
//! normal form pushes complements inward until they sit over atomic
//! expressions only, eliminating doubled complements on the way;
//! conjunct and disjunct extraction flatten nested intersections and
//! unions into sorted operand sets.
//!
//! Every operation here is a pure structural rewrite implemented as
//! an exhaustive match over the closed expression set, so adding a
//! variant is a compile-time exercise.
use std::collections::BTreeSet;

use crate::model::*;
use crate::vocab::OWL;

fn owl_nothing() -> ClassExpression {
    ClassExpression::Class(Class(OWL::Nothing.iri().clone()))
}

impl ClassExpression {
    /// The negation normal form of this expression.
    ///
    /// Atomic expressions are already in negation normal form and are
    /// their own result.
    pub fn nnf(&self) -> ClassExpression {
        match self {
            ClassExpression::Class(_)
            | ClassExpression::ObjectOneOf(_)
            | ClassExpression::ObjectHasValue { .. }
            | ClassExpression::ObjectHasSelf(_)
            | ClassExpression::DataSomeValuesFrom { .. }
            | ClassExpression::DataAllValuesFrom { .. }
            | ClassExpression::DataHasValue { .. }
            | ClassExpression::DataMinCardinality { .. }
            | ClassExpression::DataMaxCardinality { .. }
            | ClassExpression::DataExactCardinality { .. } => self.clone(),

            ClassExpression::ObjectComplementOf(ce) => ce.complement_nnf(),

            ClassExpression::ObjectIntersectionOf(v) => {
                ClassExpression::ObjectIntersectionOf(v.iter().map(|ce| ce.nnf()).collect())
            }
            ClassExpression::ObjectUnionOf(v) => {
                ClassExpression::ObjectUnionOf(v.iter().map(|ce| ce.nnf()).collect())
            }

            ClassExpression::ObjectSomeValuesFrom { ope, bce } => {
                ClassExpression::ObjectSomeValuesFrom {
                    ope: ope.clone(),
                    bce: Box::new(bce.nnf()),
                }
            }
            ClassExpression::ObjectAllValuesFrom { ope, bce } => {
                ClassExpression::ObjectAllValuesFrom {
                    ope: ope.clone(),
                    bce: Box::new(bce.nnf()),
                }
            }

            ClassExpression::ObjectMinCardinality { n, ope, bce } => {
                ClassExpression::ObjectMinCardinality {
                    n: *n,
                    ope: ope.clone(),
                    bce: Box::new(bce.nnf()),
                }
            }
            ClassExpression::ObjectMaxCardinality { n, ope, bce } => {
                ClassExpression::ObjectMaxCardinality {
                    n: *n,
                    ope: ope.clone(),
                    bce: Box::new(bce.nnf()),
                }
            }
            ClassExpression::ObjectExactCardinality { n, ope, bce } => {
                ClassExpression::ObjectExactCardinality {
                    n: *n,
                    ope: ope.clone(),
                    bce: Box::new(bce.nnf()),
                }
            }
        }
    }

    /// The negation normal form of the complement of this expression.
    fn complement_nnf(&self) -> ClassExpression {
        match self {
            // complements over atoms do not reduce further
            ClassExpression::Class(_)
            | ClassExpression::ObjectOneOf(_)
            | ClassExpression::ObjectHasSelf(_) => {
                ClassExpression::ObjectComplementOf(Box::new(self.clone()))
            }

            ClassExpression::ObjectComplementOf(ce) => ce.nnf(),

            // De Morgan
            ClassExpression::ObjectIntersectionOf(v) => {
                ClassExpression::ObjectUnionOf(v.iter().map(|ce| ce.complement_nnf()).collect())
            }
            ClassExpression::ObjectUnionOf(v) => ClassExpression::ObjectIntersectionOf(
                v.iter().map(|ce| ce.complement_nnf()).collect(),
            ),

            // dual quantifiers
            ClassExpression::ObjectSomeValuesFrom { ope, bce } => {
                ClassExpression::ObjectAllValuesFrom {
                    ope: ope.clone(),
                    bce: Box::new(bce.complement_nnf()),
                }
            }
            ClassExpression::ObjectAllValuesFrom { ope, bce } => {
                ClassExpression::ObjectSomeValuesFrom {
                    ope: ope.clone(),
                    bce: Box::new(bce.complement_nnf()),
                }
            }

            // has-value is an existential over a nominal
            ClassExpression::ObjectHasValue { ope, i } => ClassExpression::ObjectAllValuesFrom {
                ope: ope.clone(),
                bce: Box::new(ClassExpression::ObjectComplementOf(Box::new(
                    ClassExpression::ObjectOneOf(vec![i.clone()]),
                ))),
            },

            // the complement flips the bound, not the filler
            ClassExpression::ObjectMinCardinality { n, ope, bce } => {
                if *n == 0 {
                    owl_nothing()
                } else {
                    ClassExpression::ObjectMaxCardinality {
                        n: n - 1,
                        ope: ope.clone(),
                        bce: Box::new(bce.nnf()),
                    }
                }
            }
            ClassExpression::ObjectMaxCardinality { n, ope, bce } => {
                ClassExpression::ObjectMinCardinality {
                    n: n + 1,
                    ope: ope.clone(),
                    bce: Box::new(bce.nnf()),
                }
            }
            ClassExpression::ObjectExactCardinality { n, ope, bce } => {
                let min = ClassExpression::ObjectMinCardinality {
                    n: n + 1,
                    ope: ope.clone(),
                    bce: Box::new(bce.nnf()),
                };
                if *n == 0 {
                    min
                } else {
                    ClassExpression::ObjectUnionOf(vec![
                        ClassExpression::ObjectMaxCardinality {
                            n: n - 1,
                            ope: ope.clone(),
                            bce: Box::new(bce.nnf()),
                        },
                        min,
                    ])
                }
            }

            ClassExpression::DataSomeValuesFrom { dp, dr } => ClassExpression::DataAllValuesFrom {
                dp: dp.clone(),
                dr: DataRange::DataComplementOf(Box::new(dr.clone())),
            },
            ClassExpression::DataAllValuesFrom { dp, dr } => ClassExpression::DataSomeValuesFrom {
                dp: dp.clone(),
                dr: DataRange::DataComplementOf(Box::new(dr.clone())),
            },
            ClassExpression::DataHasValue { dp, l } => ClassExpression::DataAllValuesFrom {
                dp: dp.clone(),
                dr: DataRange::DataComplementOf(Box::new(DataRange::DataOneOf(vec![l.clone()]))),
            },
            ClassExpression::DataMinCardinality { n, dp, dr } => {
                if *n == 0 {
                    owl_nothing()
                } else {
                    ClassExpression::DataMaxCardinality {
                        n: n - 1,
                        dp: dp.clone(),
                        dr: dr.clone(),
                    }
                }
            }
            ClassExpression::DataMaxCardinality { n, dp, dr } => {
                ClassExpression::DataMinCardinality {
                    n: n + 1,
                    dp: dp.clone(),
                    dr: dr.clone(),
                }
            }
            ClassExpression::DataExactCardinality { n, dp, dr } => {
                let min = ClassExpression::DataMinCardinality {
                    n: n + 1,
                    dp: dp.clone(),
                    dr: dr.clone(),
                };
                if *n == 0 {
                    min
                } else {
                    ClassExpression::ObjectUnionOf(vec![
                        ClassExpression::DataMaxCardinality {
                            n: n - 1,
                            dp: dp.clone(),
                            dr: dr.clone(),
                        },
                        min,
                    ])
                }
            }
        }
    }

    /// The complement of this expression.
    ///
    /// Wraps in `ObjectComplementOf`, except that the complement of a
    /// complement reduces to the negation normal form of the operand.
    pub fn complement(&self) -> ClassExpression {
        match self {
            ClassExpression::ObjectComplementOf(ce) => ce.nnf(),
            _ => ClassExpression::ObjectComplementOf(Box::new(self.clone())),
        }
    }

    /// The set of conjuncts of this expression.
    ///
    /// An intersection flattens the conjunct sets of its operands,
    /// recursively; every other expression is its own single
    /// conjunct.
    pub fn conjunct_set(&self) -> BTreeSet<ClassExpression> {
        match self {
            ClassExpression::ObjectIntersectionOf(v) => {
                v.iter().flat_map(|ce| ce.conjunct_set()).collect()
            }
            _ => std::iter::once(self.clone()).collect(),
        }
    }

    /// Does the conjunct set of this expression contain `ce`?
    pub fn contains_conjunct(&self, ce: &ClassExpression) -> bool {
        match self {
            ClassExpression::ObjectIntersectionOf(v) => {
                v.iter().any(|op| op.contains_conjunct(ce))
            }
            _ => self == ce,
        }
    }

    /// The set of disjuncts of this expression, flattened over
    /// unions.
    pub fn disjunct_set(&self) -> BTreeSet<ClassExpression> {
        match self {
            ClassExpression::ObjectUnionOf(v) => {
                v.iter().flat_map(|ce| ce.disjunct_set()).collect()
            }
            _ => std::iter::once(self.clone()).collect(),
        }
    }
}
