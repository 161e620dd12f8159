//! The core data model: identifiers, entities, expressions and axioms.
//!
//! # Overview
//!
//! Everything in this module is an immutable value. `IRI` instances
//! are interned through a [`Build`] and can be shared freely between
//! ontologies and threads; entities, expressions and axioms are plain
//! data over them. The only mutable state in the crate is the axiom
//! store in [`crate::ontology`], which is updated through
//! [`crate::change`].
//!
//! All model types implement `Ord`. The derived order ranks values
//! first by their variant (the axiom or expression kind) and then by
//! recursive structural comparison, so two values are order-equal
//! exactly when they are structurally equal. Query results throughout
//! the crate are sorted with this order, which makes enumeration
//! deterministic whatever the insertion sequence.
use std::borrow::Borrow;
use std::cell::RefCell;
use std::collections::{BTreeSet, HashSet};
use std::convert::TryFrom;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::sync::Arc;

use crate::error::{malformed, StrixError};

/// An
/// [Internationalized Resource Identifier](https://en.wikipedia.org/wiki/Internationalized_resource_identifier).
///
/// IRIs are cheap to clone and compare; intern them through a
/// [`Build`] so that equal identifiers share their backing storage.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct IRI(pub(crate) Arc<str>);

impl Deref for IRI {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for IRI {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for IRI {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for IRI {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<IRI> for String {
    fn from(i: IRI) -> String {
        i.0.to_string()
    }
}

impl<'a> From<&'a IRI> for String {
    fn from(i: &'a IRI) -> String {
        i.0.to_string()
    }
}

/// Builder and interner for `IRI` and the entities over them.
///
/// # Examples
///
/// ```
/// # use strix::model::Build;
/// let b = Build::new();
/// let iri1 = b.iri("http://www.example.com");
/// let iri2 = b.iri("http://www.example.com".to_string());
///
/// assert_eq!(iri1, iri2);
/// ```
#[derive(Debug, Default)]
pub struct Build(RefCell<HashSet<IRI>>);

impl Build {
    pub fn new() -> Build {
        Build(RefCell::new(HashSet::new()))
    }

    pub fn iri<S>(&self, s: S) -> IRI
    where
        S: Into<String>,
    {
        let s = s.into();
        let mut cache = self.0.borrow_mut();
        if let Some(iri) = cache.get(s.as_str()) {
            return iri.clone();
        }

        let iri = IRI(Arc::from(s));
        cache.insert(iri.clone());
        iri
    }

    pub fn class<S: Into<String>>(&self, s: S) -> Class {
        Class(self.iri(s))
    }

    pub fn object_property<S: Into<String>>(&self, s: S) -> ObjectProperty {
        ObjectProperty(self.iri(s))
    }

    pub fn data_property<S: Into<String>>(&self, s: S) -> DataProperty {
        DataProperty(self.iri(s))
    }

    pub fn annotation_property<S: Into<String>>(&self, s: S) -> AnnotationProperty {
        AnnotationProperty(self.iri(s))
    }

    pub fn named_individual<S: Into<String>>(&self, s: S) -> NamedIndividual {
        NamedIndividual(self.iri(s))
    }

    pub fn datatype<S: Into<String>>(&self, s: S) -> Datatype {
        Datatype(self.iri(s))
    }

    /// Construct the entity of the given kind.
    pub fn entity<S: Into<String>>(&self, kind: EntityKind, s: S) -> Entity {
        match kind {
            EntityKind::Class => self.class(s).into(),
            EntityKind::ObjectProperty => self.object_property(s).into(),
            EntityKind::DataProperty => self.data_property(s).into(),
            EntityKind::AnnotationProperty => self.annotation_property(s).into(),
            EntityKind::NamedIndividual => self.named_individual(s).into(),
            EntityKind::Datatype => self.datatype(s).into(),
        }
    }
}

macro_rules! named {
    ($($(#[$attn:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$attn])*
            #[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
            pub struct $name(pub IRI);

            impl From<IRI> for $name {
                fn from(i: IRI) -> $name {
                    $name(i)
                }
            }

            impl From<$name> for IRI {
                fn from(n: $name) -> IRI {
                    n.0
                }
            }

            impl<'a> From<&'a $name> for IRI {
                fn from(n: &'a $name) -> IRI {
                    n.0.clone()
                }
            }

            impl From<$name> for Entity {
                fn from(n: $name) -> Entity {
                    Entity::$name(n)
                }
            }

            impl TryFrom<Entity> for $name {
                type Error = StrixError;

                fn try_from(e: Entity) -> Result<$name, StrixError> {
                    match e {
                        Entity::$name(n) => Ok(n),
                        e => Err(malformed!(
                            "Expected {}, found {:?}: {}",
                            stringify!($name),
                            e.kind(),
                            e.iri()
                        )),
                    }
                }
            }
        )*

        /// An entity: an IRI tagged with one of the six entity kinds.
        ///
        /// Two entities are equal exactly when their kind and IRI are
        /// equal.
        #[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum Entity {
            $($name($name)),*
        }

        /// The kind of an [`Entity`].
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum EntityKind {
            $($name),*
        }

        impl Entity {
            pub fn kind(&self) -> EntityKind {
                match self {
                    $(Entity::$name(_) => EntityKind::$name),*
                }
            }

            pub fn iri(&self) -> &IRI {
                match self {
                    $(Entity::$name(n) => &n.0),*
                }
            }
        }
    }
}

named! {
    /// An OWL class
    Class,
    /// A property between two individuals
    ObjectProperty,
    /// A property from an individual to a literal value
    DataProperty,
    /// A property used only for annotation
    AnnotationProperty,
    /// A named member of a class
    NamedIndividual,
    /// The type of a literal value
    Datatype
}

impl Class {
    /// Is this the top class, `owl:Thing`, which every individual
    /// satisfies?
    pub fn is_owl_thing(&self) -> bool {
        crate::vocab::is_owl_thing(&self.0)
    }

    /// Is this the bottom class, `owl:Nothing`, which no individual
    /// satisfies?
    pub fn is_owl_nothing(&self) -> bool {
        crate::vocab::is_owl_nothing(&self.0)
    }
}

/// A literal value, optionally tagged with a language or a datatype.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Literal {
    Simple {
        literal: String,
    },
    Language {
        literal: String,
        lang: String,
    },
    Datatype {
        literal: String,
        datatype_iri: IRI,
    },
}

impl Literal {
    pub fn literal(&self) -> &String {
        match self {
            Literal::Simple { literal } => literal,
            Literal::Language { literal, .. } => literal,
            Literal::Datatype { literal, .. } => literal,
        }
    }
}

/// An object property or the inverse of one.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ObjectPropertyExpression {
    ObjectProperty(ObjectProperty),
    InverseObjectProperty(ObjectProperty),
}

impl From<ObjectProperty> for ObjectPropertyExpression {
    fn from(op: ObjectProperty) -> ObjectPropertyExpression {
        ObjectPropertyExpression::ObjectProperty(op)
    }
}

impl TryFrom<Entity> for ObjectPropertyExpression {
    type Error = StrixError;

    fn try_from(e: Entity) -> Result<ObjectPropertyExpression, StrixError> {
        Ok(ObjectProperty::try_from(e)?.into())
    }
}

/// A range of data values.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum DataRange {
    Datatype(Datatype),
    DataIntersectionOf(Vec<DataRange>),
    DataUnionOf(Vec<DataRange>),
    DataComplementOf(Box<DataRange>),
    DataOneOf(Vec<Literal>),
}

impl From<Datatype> for DataRange {
    fn from(dt: Datatype) -> DataRange {
        DataRange::Datatype(dt)
    }
}

/// A description of a set of individuals, either an atomic class or
/// one recursively composed from the closed operator set.
///
/// Structural operations over expressions (negation normal form,
/// conjunct and disjunct extraction, complement construction) live
/// in [`crate::normalize`].
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ClassExpression {
    /// An atomic class; already in negation normal form.
    Class(Class),

    /// The class of individuals in all of the operand classes.
    ObjectIntersectionOf(Vec<ClassExpression>),

    /// The class of individuals in any of the operand classes.
    ObjectUnionOf(Vec<ClassExpression>),

    /// The class of individuals not in the operand class.
    ObjectComplementOf(Box<ClassExpression>),

    /// The class containing exactly the given individuals.
    ObjectOneOf(Vec<NamedIndividual>),

    /// Individuals with at least one `ope` relation to `bce`.
    ObjectSomeValuesFrom {
        ope: ObjectPropertyExpression,
        bce: Box<ClassExpression>,
    },

    /// Individuals all of whose `ope` relations are to `bce`.
    ObjectAllValuesFrom {
        ope: ObjectPropertyExpression,
        bce: Box<ClassExpression>,
    },

    /// Individuals with an `ope` relation to the individual `i`.
    ObjectHasValue {
        ope: ObjectPropertyExpression,
        i: NamedIndividual,
    },

    /// Individuals with an `ope` relation to themselves.
    ObjectHasSelf(ObjectPropertyExpression),

    /// Individuals with at least `n` `ope` relations to `bce`.
    ObjectMinCardinality {
        n: u32,
        ope: ObjectPropertyExpression,
        bce: Box<ClassExpression>,
    },

    /// Individuals with at most `n` `ope` relations to `bce`.
    ObjectMaxCardinality {
        n: u32,
        ope: ObjectPropertyExpression,
        bce: Box<ClassExpression>,
    },

    /// Individuals with exactly `n` `ope` relations to `bce`.
    ObjectExactCardinality {
        n: u32,
        ope: ObjectPropertyExpression,
        bce: Box<ClassExpression>,
    },

    /// Individuals with at least one `dp` value in `dr`.
    DataSomeValuesFrom { dp: DataProperty, dr: DataRange },

    /// Individuals all of whose `dp` values are in `dr`.
    DataAllValuesFrom { dp: DataProperty, dr: DataRange },

    /// Individuals with the `dp` value `l`.
    DataHasValue { dp: DataProperty, l: Literal },

    /// Individuals with at least `n` `dp` values in `dr`.
    DataMinCardinality {
        n: u32,
        dp: DataProperty,
        dr: DataRange,
    },

    /// Individuals with at most `n` `dp` values in `dr`.
    DataMaxCardinality {
        n: u32,
        dp: DataProperty,
        dr: DataRange,
    },

    /// Individuals with exactly `n` `dp` values in `dr`.
    DataExactCardinality {
        n: u32,
        dp: DataProperty,
        dr: DataRange,
    },
}

impl From<Class> for ClassExpression {
    fn from(c: Class) -> ClassExpression {
        ClassExpression::Class(c)
    }
}

impl TryFrom<Entity> for ClassExpression {
    type Error = StrixError;

    fn try_from(e: Entity) -> Result<ClassExpression, StrixError> {
        Ok(Class::try_from(e)?.into())
    }
}

/// A piece of metadata: an annotation property and its value.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Annotation {
    pub ap: AnnotationProperty,
    pub av: AnnotationValue,
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum AnnotationValue {
    Literal(Literal),
    IRI(IRI),
}

impl From<Literal> for AnnotationValue {
    fn from(l: Literal) -> AnnotationValue {
        AnnotationValue::Literal(l)
    }
}

impl From<IRI> for AnnotationValue {
    fn from(i: IRI) -> AnnotationValue {
        AnnotationValue::IRI(i)
    }
}

/// A reference from one ontology to another that it imports.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Import(pub IRI);

// Axiom structs. One struct per axiom kind; the `axiom_enum!`
// invocation below stitches them into `Axiom` and `AxiomKind`.

/// Declare that an entity of the given kind exists.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DeclareClass(pub Class);

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DeclareObjectProperty(pub ObjectProperty);

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DeclareAnnotationProperty(pub AnnotationProperty);

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DeclareDataProperty(pub DataProperty);

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DeclareNamedIndividual(pub NamedIndividual);

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DeclareDatatype(pub Datatype);

/// Every member of `sub` is also a member of `sup`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SubClassOf {
    pub sup: ClassExpression,
    pub sub: ClassExpression,
}

/// The operand classes all have the same members. Symmetric: the
/// operand list compares as a multiset once canonicalized.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EquivalentClasses(pub Vec<ClassExpression>);

/// No individual is a member of more than one operand class.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DisjointClasses(pub Vec<ClassExpression>);

/// The class is the union of the pairwise-disjoint operand classes.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DisjointUnion(pub Class, pub Vec<ClassExpression>);

/// Any `sub` relation between two individuals implies a `sup`
/// relation between them.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SubObjectPropertyOf {
    pub sup: ObjectPropertyExpression,
    pub sub: ObjectPropertyExpression,
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EquivalentObjectProperties(pub Vec<ObjectPropertyExpression>);

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DisjointObjectProperties(pub Vec<ObjectPropertyExpression>);

/// The two properties relate the same pairs, in opposite directions.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct InverseObjectProperties(pub ObjectProperty, pub ObjectProperty);

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ObjectPropertyDomain {
    pub ope: ObjectPropertyExpression,
    pub ce: ClassExpression,
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ObjectPropertyRange {
    pub ope: ObjectPropertyExpression,
    pub ce: ClassExpression,
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FunctionalObjectProperty(pub ObjectPropertyExpression);

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct InverseFunctionalObjectProperty(pub ObjectPropertyExpression);

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ReflexiveObjectProperty(pub ObjectPropertyExpression);

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct IrreflexiveObjectProperty(pub ObjectPropertyExpression);

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SymmetricObjectProperty(pub ObjectPropertyExpression);

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AsymmetricObjectProperty(pub ObjectPropertyExpression);

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TransitiveObjectProperty(pub ObjectPropertyExpression);

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SubDataPropertyOf {
    pub sup: DataProperty,
    pub sub: DataProperty,
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EquivalentDataProperties(pub Vec<DataProperty>);

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DisjointDataProperties(pub Vec<DataProperty>);

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DataPropertyDomain {
    pub dp: DataProperty,
    pub ce: ClassExpression,
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DataPropertyRange {
    pub dp: DataProperty,
    pub dr: DataRange,
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FunctionalDataProperty(pub DataProperty);

/// The datatype is defined to be equivalent to the data range.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DatatypeDefinition {
    pub kind: Datatype,
    pub range: DataRange,
}

/// The operand individuals are all the same individual.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SameIndividual(pub Vec<NamedIndividual>);

/// The operand individuals are pairwise distinct.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DifferentIndividuals(pub Vec<NamedIndividual>);

/// The individual `i` is a member of the class `ce`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ClassAssertion {
    pub ce: ClassExpression,
    pub i: NamedIndividual,
}

/// The individual `from` is related to `to` by `ope`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ObjectPropertyAssertion {
    pub ope: ObjectPropertyExpression,
    pub from: NamedIndividual,
    pub to: NamedIndividual,
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NegativeObjectPropertyAssertion {
    pub ope: ObjectPropertyExpression,
    pub from: NamedIndividual,
    pub to: NamedIndividual,
}

/// The individual `from` has the literal value `to` for `dp`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DataPropertyAssertion {
    pub dp: DataProperty,
    pub from: NamedIndividual,
    pub to: Literal,
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NegativeDataPropertyAssertion {
    pub dp: DataProperty,
    pub from: NamedIndividual,
    pub to: Literal,
}

/// Attach an annotation to the thing named by `subject`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AnnotationAssertion {
    pub subject: IRI,
    pub ann: Annotation,
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SubAnnotationPropertyOf {
    pub sup: AnnotationProperty,
    pub sub: AnnotationProperty,
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AnnotationPropertyDomain {
    pub ap: AnnotationProperty,
    pub iri: IRI,
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AnnotationPropertyRange {
    pub ap: AnnotationProperty,
    pub iri: IRI,
}

/// Access the [`AxiomKind`] of a value.
pub trait Kinded {
    fn kind(&self) -> AxiomKind;
}

macro_rules! axiom_enum {
    ($($name:ident),* $(,)?) => {
        /// An axiom: a logical statement about entities and
        /// expressions, tagged by kind.
        ///
        /// The declaration order of the variants fixes the kind-rank
        /// used by the derived total order; it matches the variant
        /// order of [`AxiomKind`].
        #[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum Axiom {
            $($name($name)),*
        }

        /// The kind of an [`Axiom`].
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum AxiomKind {
            $($name),*
        }

        impl AxiomKind {
            /// All axiom kinds, in rank order.
            pub fn all_kinds() -> Vec<AxiomKind> {
                vec![$(AxiomKind::$name),*]
            }
        }

        impl Kinded for Axiom {
            fn kind(&self) -> AxiomKind {
                match self {
                    $(Axiom::$name(_) => AxiomKind::$name),*
                }
            }
        }

        $(
            impl From<$name> for Axiom {
                fn from(ax: $name) -> Axiom {
                    Axiom::$name(ax)
                }
            }

            impl From<$name> for AnnotatedAxiom {
                fn from(ax: $name) -> AnnotatedAxiom {
                    AnnotatedAxiom::from(Axiom::from(ax))
                }
            }

            impl Kinded for $name {
                fn kind(&self) -> AxiomKind {
                    AxiomKind::$name
                }
            }
        )*
    }
}

axiom_enum! {
    DeclareClass,
    DeclareObjectProperty,
    DeclareAnnotationProperty,
    DeclareDataProperty,
    DeclareNamedIndividual,
    DeclareDatatype,
    SubClassOf,
    EquivalentClasses,
    DisjointClasses,
    DisjointUnion,
    SubObjectPropertyOf,
    EquivalentObjectProperties,
    DisjointObjectProperties,
    InverseObjectProperties,
    ObjectPropertyDomain,
    ObjectPropertyRange,
    FunctionalObjectProperty,
    InverseFunctionalObjectProperty,
    ReflexiveObjectProperty,
    IrreflexiveObjectProperty,
    SymmetricObjectProperty,
    AsymmetricObjectProperty,
    TransitiveObjectProperty,
    SubDataPropertyOf,
    EquivalentDataProperties,
    DisjointDataProperties,
    DataPropertyDomain,
    DataPropertyRange,
    FunctionalDataProperty,
    DatatypeDefinition,
    SameIndividual,
    DifferentIndividuals,
    ClassAssertion,
    ObjectPropertyAssertion,
    NegativeObjectPropertyAssertion,
    DataPropertyAssertion,
    NegativeDataPropertyAssertion,
    AnnotationAssertion,
    SubAnnotationPropertyOf,
    AnnotationPropertyDomain,
    AnnotationPropertyRange,
}

impl From<Entity> for Axiom {
    fn from(ne: Entity) -> Axiom {
        match ne {
            Entity::Class(c) => DeclareClass(c).into(),
            Entity::ObjectProperty(op) => DeclareObjectProperty(op).into(),
            Entity::AnnotationProperty(ap) => DeclareAnnotationProperty(ap).into(),
            Entity::DataProperty(dp) => DeclareDataProperty(dp).into(),
            Entity::NamedIndividual(ni) => DeclareNamedIndividual(ni).into(),
            Entity::Datatype(dt) => DeclareDatatype(dt).into(),
        }
    }
}

impl From<Entity> for AnnotatedAxiom {
    fn from(ne: Entity) -> AnnotatedAxiom {
        AnnotatedAxiom::from(Axiom::from(ne))
    }
}

impl Axiom {
    /// Rewrite the axiom into its canonical form.
    ///
    /// The symmetric n-ary kinds compare as multisets: their operand
    /// lists are sorted, and the `InverseObjectProperties` pair is
    /// ordered. The change applier canonicalizes every axiom before
    /// it reaches the store, so stored axioms that are multiset-equal
    /// are also structurally equal.
    pub fn canonical(mut self) -> Axiom {
        match &mut self {
            Axiom::EquivalentClasses(EquivalentClasses(v)) => v.sort(),
            Axiom::DisjointClasses(DisjointClasses(v)) => v.sort(),
            Axiom::DisjointUnion(DisjointUnion(_, v)) => v.sort(),
            Axiom::EquivalentObjectProperties(EquivalentObjectProperties(v)) => v.sort(),
            Axiom::DisjointObjectProperties(DisjointObjectProperties(v)) => v.sort(),
            Axiom::EquivalentDataProperties(EquivalentDataProperties(v)) => v.sort(),
            Axiom::DisjointDataProperties(DisjointDataProperties(v)) => v.sort(),
            Axiom::SameIndividual(SameIndividual(v)) => v.sort(),
            Axiom::DifferentIndividuals(DifferentIndividuals(v)) => v.sort(),
            Axiom::InverseObjectProperties(InverseObjectProperties(a, b)) => {
                if b < a {
                    std::mem::swap(a, b);
                }
            }
            _ => {}
        }
        self
    }

    /// Check the arity constraints that the type system cannot.
    ///
    /// The n-ary kinds state a relation between their operands and
    /// need at least two of them; anything shorter cannot have come
    /// from a well-formed statement.
    pub fn validate(&self) -> Result<(), StrixError> {
        let len = match self {
            Axiom::EquivalentClasses(EquivalentClasses(v)) => v.len(),
            Axiom::DisjointClasses(DisjointClasses(v)) => v.len(),
            Axiom::DisjointUnion(DisjointUnion(_, v)) => v.len(),
            Axiom::EquivalentObjectProperties(EquivalentObjectProperties(v)) => v.len(),
            Axiom::DisjointObjectProperties(DisjointObjectProperties(v)) => v.len(),
            Axiom::EquivalentDataProperties(EquivalentDataProperties(v)) => v.len(),
            Axiom::DisjointDataProperties(DisjointDataProperties(v)) => v.len(),
            Axiom::SameIndividual(SameIndividual(v)) => v.len(),
            Axiom::DifferentIndividuals(DifferentIndividuals(v)) => v.len(),
            _ => return Ok(()),
        };

        if len < 2 {
            return Err(malformed!(
                "{:?} requires at least two operands, found {}",
                self.kind(),
                len
            ));
        }

        Ok(())
    }
}

/// An axiom together with the annotations placed on it.
///
/// Equality is structural over both the axiom and the annotation set;
/// [`AnnotatedAxiom::logical_eq`] compares the axiom alone.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AnnotatedAxiom {
    pub axiom: Axiom,
    pub ann: BTreeSet<Annotation>,
}

impl AnnotatedAxiom {
    pub fn new<A: Into<Axiom>>(axiom: A, ann: BTreeSet<Annotation>) -> AnnotatedAxiom {
        AnnotatedAxiom {
            axiom: axiom.into(),
            ann,
        }
    }

    /// Compare the axioms, ignoring annotations.
    pub fn logical_eq(&self, other: &AnnotatedAxiom) -> bool {
        self.axiom == other.axiom
    }

    pub fn canonical(mut self) -> AnnotatedAxiom {
        self.axiom = self.axiom.canonical();
        self
    }
}

impl From<Axiom> for AnnotatedAxiom {
    fn from(axiom: Axiom) -> AnnotatedAxiom {
        AnnotatedAxiom {
            axiom,
            ann: BTreeSet::new(),
        }
    }
}

impl Kinded for AnnotatedAxiom {
    fn kind(&self) -> AxiomKind {
        self.axiom.kind()
    }
}

/// The identifier of an ontology: an IRI and an optional version IRI.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct OntologyID {
    pub iri: Option<IRI>,
    pub viri: Option<IRI>,
}

/// Access an ontology's identifier.
pub trait Ontology {
    fn id(&self) -> &OntologyID;
    fn mut_id(&mut self) -> &mut OntologyID;
}

/// An ontology that can be added to and removed from.
///
/// Insertion and removal are idempotent set operations; both report
/// whether the ontology changed.
pub trait MutableOntology {
    /// Insert an axiom into the ontology.
    ///
    /// Returns true if the axiom was not already present.
    fn insert<A>(&mut self, ax: A) -> bool
    where
        A: Into<AnnotatedAxiom>;

    /// Remove an axiom from the ontology.
    ///
    /// Returns true if the axiom was present.
    fn remove(&mut self, ax: &AnnotatedAxiom) -> bool {
        self.take(ax).is_some()
    }

    /// Remove an axiom from the ontology, returning it if present.
    fn take(&mut self, ax: &AnnotatedAxiom) -> Option<AnnotatedAxiom>;

    /// Declare an entity.
    ///
    /// # Examples
    /// ```
    /// # use strix::model::*;
    /// # use strix::ontology::set::SetOntology;
    /// let b = Build::new();
    /// let mut o = SetOntology::new();
    /// o.declare(b.class("http://www.example.com/a"));
    /// o.declare(b.object_property("http://www.example.com/r"));
    /// ```
    fn declare<N: Into<Entity>>(&mut self, ne: N) -> bool {
        self.insert(Axiom::from(ne.into()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_iri_creation() {
        let b = Build::new();

        let iri1 = b.iri("http://example.com".to_string());
        let iri2 = b.iri("http://example.com");

        // equal, and the same object in memory
        assert_eq!(iri1, iri2);
        assert!(Arc::ptr_eq(&iri1.0, &iri2.0));
    }

    #[test]
    fn test_iri_from_string() {
        let b = Build::new();
        let iri = b.iri("http://www.example.com");

        assert_eq!(String::from(iri), "http://www.example.com");
    }

    #[test]
    fn test_entity_kind() {
        let b = Build::new();
        let e: Entity = b.class("http://www.example.com/c").into();

        assert_eq!(e.kind(), EntityKind::Class);
        assert_eq!(&**e.iri(), "http://www.example.com/c");
    }

    #[test]
    fn test_entity_try_from() {
        let b = Build::new();
        let e: Entity = b.object_property("http://www.example.com/p").into();

        assert!(ObjectProperty::try_from(e.clone()).is_ok());

        // kind mismatch is a malformed expression
        let err = Class::try_from(e).unwrap_err();
        assert!(matches!(err, StrixError::MalformedExpression(_)));
    }

    #[test]
    fn test_thing_nothing() {
        let b = Build::new();
        let thing = b.class("http://www.w3.org/2002/07/owl#Thing");
        let nothing = b.class("http://www.w3.org/2002/07/owl#Nothing");
        let other = b.class("http://www.example.com/c");

        assert!(thing.is_owl_thing());
        assert!(!thing.is_owl_nothing());
        assert!(nothing.is_owl_nothing());
        assert!(!other.is_owl_thing());
        assert!(!other.is_owl_nothing());
    }

    #[test]
    fn test_axiom_kind_order_matches_variant_order() {
        let all = AxiomKind::all_kinds();
        let mut sorted = all.clone();
        sorted.sort();
        assert_eq!(all, sorted);
    }

    #[test]
    fn test_canonical_sorts_symmetric_operands() {
        let b = Build::new();
        let c1: ClassExpression = b.class("http://www.example.com/a").into();
        let c2: ClassExpression = b.class("http://www.example.com/b").into();

        let ax1 = Axiom::from(EquivalentClasses(vec![c2.clone(), c1.clone()])).canonical();
        let ax2 = Axiom::from(EquivalentClasses(vec![c1, c2])).canonical();

        assert_eq!(ax1, ax2);
    }

    #[test]
    fn test_canonical_orders_inverse_pair() {
        let b = Build::new();
        let p = b.object_property("http://www.example.com/p");
        let q = b.object_property("http://www.example.com/q");

        let ax1 = Axiom::from(InverseObjectProperties(q.clone(), p.clone())).canonical();
        let ax2 = Axiom::from(InverseObjectProperties(p, q)).canonical();

        assert_eq!(ax1, ax2);
    }

    #[test]
    fn test_validate_nary_arity() {
        let b = Build::new();
        let c: ClassExpression = b.class("http://www.example.com/a").into();

        let short = Axiom::from(EquivalentClasses(vec![c.clone()]));
        assert!(short.validate().is_err());

        let ok = Axiom::from(EquivalentClasses(vec![
            c,
            b.class("http://www.example.com/b").into(),
        ]));
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_logical_eq_ignores_annotations() {
        let b = Build::new();
        let ax: AnnotatedAxiom = DeclareClass(b.class("http://www.example.com/a")).into();

        let mut annotated = ax.clone();
        annotated.ann.insert(Annotation {
            ap: b.annotation_property("http://www.w3.org/2000/01/rdf-schema#label"),
            av: Literal::Simple {
                literal: "A".to_string(),
            }
            .into(),
        });

        assert_ne!(ax, annotated);
        assert!(ax.logical_eq(&annotated));
    }

    #[test]
    fn test_ord_is_structural() {
        let b = Build::new();
        let sub: ClassExpression = b.class("http://www.example.com/sub").into();
        let sup: ClassExpression = b.class("http://www.example.com/sup").into();

        let ax1 = Axiom::from(SubClassOf {
            sup: sup.clone(),
            sub: sub.clone(),
        });
        let ax2 = Axiom::from(SubClassOf { sup, sub });

        assert_eq!(ax1.cmp(&ax2), std::cmp::Ordering::Equal);
        assert_eq!(ax1, ax2);
    }
}
