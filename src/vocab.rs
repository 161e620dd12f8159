//! The OWL and RDFS vocabulary built into the model.
use enum_meta::*;

use crate::model::{EntityKind, IRI};

/// [Namespaces](https://www.w3.org/TR/2004/REC-owl-guide-20040210/#Namespaces)
/// that are typically used within an OWL document.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Namespace {
    OWL,
    RDF,
    RDFS,
    XSD,
}

impl Namespace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::OWL => "http://www.w3.org/2002/07/owl#",
            Namespace::RDF => "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
            Namespace::RDFS => "http://www.w3.org/2000/01/rdf-schema#",
            Namespace::XSD => "http://www.w3.org/2001/XMLSchema#",
        }
    }
}

impl AsRef<str> for Namespace {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

fn ns_iri(ns: Namespace, fragment: &str) -> IRI {
    IRI(format!("{}{}", ns.as_str(), fragment).into())
}

/// The built-in entities of the OWL namespace.
///
/// `Thing` and `Nothing` are the top and bottom classes; the
/// top/bottom properties relate everything and nothing respectively.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum OWL {
    Thing,
    Nothing,
    TopObjectProperty,
    BottomObjectProperty,
    TopDataProperty,
    BottomDataProperty,
}

lazy_meta! {
    OWL, IRI, META_OWL;
    Thing, ns_iri(Namespace::OWL, "Thing");
    Nothing, ns_iri(Namespace::OWL, "Nothing");
    TopObjectProperty, ns_iri(Namespace::OWL, "topObjectProperty");
    BottomObjectProperty, ns_iri(Namespace::OWL, "bottomObjectProperty");
    TopDataProperty, ns_iri(Namespace::OWL, "topDataProperty");
    BottomDataProperty, ns_iri(Namespace::OWL, "bottomDataProperty");
}

/// The RDFS vocabulary the model knows about: the built-in
/// annotation properties and the top datatype.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum RDFS {
    Label,
    Comment,
    SeeAlso,
    IsDefinedBy,
    Literal,
}

lazy_meta! {
    RDFS, IRI, META_RDFS;
    Label, ns_iri(Namespace::RDFS, "label");
    Comment, ns_iri(Namespace::RDFS, "comment");
    SeeAlso, ns_iri(Namespace::RDFS, "seeAlso");
    IsDefinedBy, ns_iri(Namespace::RDFS, "isDefinedBy");
    Literal, ns_iri(Namespace::RDFS, "Literal");
}

impl OWL {
    pub fn iri(&self) -> &IRI {
        self.meta()
    }
}

impl RDFS {
    pub fn iri(&self) -> &IRI {
        self.meta()
    }
}

pub fn is_owl_thing(iri: &IRI) -> bool {
    iri == OWL::Thing.meta()
}

pub fn is_owl_nothing(iri: &IRI) -> bool {
    iri == OWL::Nothing.meta()
}

/// Return the entity kind of a built-in vocabulary term, if the IRI
/// is one.
pub fn to_built_in_entity(iri: &IRI) -> Option<EntityKind> {
    if let Some(v) = OWL::all().into_iter().find(|v| v.meta() == iri) {
        return Some(match v {
            OWL::Thing | OWL::Nothing => EntityKind::Class,
            OWL::TopObjectProperty | OWL::BottomObjectProperty => EntityKind::ObjectProperty,
            OWL::TopDataProperty | OWL::BottomDataProperty => EntityKind::DataProperty,
        });
    }

    match RDFS::all().into_iter().find(|v| v.meta() == iri) {
        Some(RDFS::Literal) => Some(EntityKind::Datatype),
        Some(_) => Some(EntityKind::AnnotationProperty),
        None => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::Build;

    #[test]
    fn test_thing_nothing_iris() {
        assert_eq!(
            &**OWL::Thing.iri(),
            "http://www.w3.org/2002/07/owl#Thing"
        );
        assert_eq!(
            &**OWL::Nothing.iri(),
            "http://www.w3.org/2002/07/owl#Nothing"
        );
    }

    #[test]
    fn test_to_built_in_entity() {
        let b = Build::new();

        assert_eq!(
            to_built_in_entity(&b.iri("http://www.w3.org/2002/07/owl#Thing")),
            Some(EntityKind::Class)
        );
        assert_eq!(
            to_built_in_entity(&b.iri("http://www.w3.org/2002/07/owl#topObjectProperty")),
            Some(EntityKind::ObjectProperty)
        );
        assert_eq!(
            to_built_in_entity(&b.iri("http://www.w3.org/2000/01/rdf-schema#label")),
            Some(EntityKind::AnnotationProperty)
        );
        assert_eq!(
            to_built_in_entity(&b.iri("http://www.w3.org/2000/01/rdf-schema#Literal")),
            Some(EntityKind::Datatype)
        );
        assert_eq!(
            to_built_in_entity(&b.iri("http://www.example.com/c")),
            None
        );
    }
}
