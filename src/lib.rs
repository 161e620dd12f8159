//! # Strix
//!
//! An in-memory model for OWL ontologies: a mutable set of typed
//! axioms about named entities, with derived indexes, an atomic
//! change pipeline and listener notification.
//!
//! # Overview
//!
//! [`model`] defines the value types: interned IRIs, the six entity
//! kinds, class expressions and the axiom catalogue. Everything
//! there is an immutable value with a total order, so enumeration is
//! deterministic and values can be shared freely across threads.
//!
//! [`ontology`] holds the mutable state. The
//! [`AxiomStore`](ontology::store::AxiomStore) keeps the axiom set
//! and three derived indexes mutually consistent, and answers
//! queries in time proportional to their results: axioms by kind, by
//! referenced entity, or by the operand of a relational axiom.
//!
//! [`change`] and [`broadcast`] form the mutation pipeline. A batch
//! of changes is applied in order, atomically with respect to
//! listeners, and the applied result list is then delivered to every
//! registered listener through a pluggable delivery strategy.
//!
//! Parsers, serializers and reasoners are external: they consume the
//! query interface and produce change lists, and this crate defines
//! no wire or disk format.
//!
//! # Example
//!
//! ```
//! use strix::broadcast::ChangeBroadcaster;
//! use strix::change::Change;
//! use strix::model::*;
//! use strix::ontology::store::AxiomStore;
//!
//! let b = Build::new();
//! let mut o = AxiomStore::new();
//! let broadcaster = ChangeBroadcaster::new();
//!
//! let animal: ClassExpression = b.class("http://www.example.com/Animal").into();
//! let bird: ClassExpression = b.class("http://www.example.com/Bird").into();
//!
//! broadcaster
//!     .apply_changes(
//!         &mut o,
//!         vec![Change::AddAxiom(
//!             SubClassOf {
//!                 sup: animal.clone(),
//!                 sub: bird.clone(),
//!             }
//!             .into(),
//!         )],
//!     )
//!     .unwrap();
//!
//! assert_eq!(o.super_classes_of(&bird), vec![animal]);
//! ```
pub mod broadcast;
pub mod change;
pub mod error;
pub mod model;
pub mod normalize;
pub mod ontology;
pub mod visitor;
pub mod vocab;
