//! Traversal over the closed model hierarchy.
//!
//! A [`Visit`] supplies a handler per variant, with a default no-op
//! for the rest; a [`Walk`] routes every node of a model value to the
//! matching handler, recursively. The walk is an exhaustive fold:
//! adding a variant to the model fails compilation here until the
//! walk handles it.
use crate::model::*;

pub trait Visit {
    fn visit_iri(&mut self, _: &IRI) {}
    fn visit_class(&mut self, _: &Class) {}
    fn visit_object_property(&mut self, _: &ObjectProperty) {}
    fn visit_data_property(&mut self, _: &DataProperty) {}
    fn visit_annotation_property(&mut self, _: &AnnotationProperty) {}
    fn visit_named_individual(&mut self, _: &NamedIndividual) {}
    fn visit_datatype(&mut self, _: &Datatype) {}
    fn visit_literal(&mut self, _: &Literal) {}
    fn visit_annotation(&mut self, _: &Annotation) {}
    fn visit_annotation_value(&mut self, _: &AnnotationValue) {}
    fn visit_class_expression(&mut self, _: &ClassExpression) {}
    fn visit_object_property_expression(&mut self, _: &ObjectPropertyExpression) {}
    fn visit_data_range(&mut self, _: &DataRange) {}
    fn visit_annotated_axiom(&mut self, _: &AnnotatedAxiom) {}
    fn visit_axiom(&mut self, _: &Axiom) {}
    fn visit_declare_class(&mut self, _: &DeclareClass) {}
    fn visit_declare_object_property(&mut self, _: &DeclareObjectProperty) {}
    fn visit_declare_annotation_property(&mut self, _: &DeclareAnnotationProperty) {}
    fn visit_declare_data_property(&mut self, _: &DeclareDataProperty) {}
    fn visit_declare_named_individual(&mut self, _: &DeclareNamedIndividual) {}
    fn visit_declare_datatype(&mut self, _: &DeclareDatatype) {}
    fn visit_sub_class_of(&mut self, _: &SubClassOf) {}
    fn visit_equivalent_classes(&mut self, _: &EquivalentClasses) {}
    fn visit_disjoint_classes(&mut self, _: &DisjointClasses) {}
    fn visit_disjoint_union(&mut self, _: &DisjointUnion) {}
    fn visit_sub_object_property_of(&mut self, _: &SubObjectPropertyOf) {}
    fn visit_equivalent_object_properties(&mut self, _: &EquivalentObjectProperties) {}
    fn visit_disjoint_object_properties(&mut self, _: &DisjointObjectProperties) {}
    fn visit_inverse_object_properties(&mut self, _: &InverseObjectProperties) {}
    fn visit_object_property_domain(&mut self, _: &ObjectPropertyDomain) {}
    fn visit_object_property_range(&mut self, _: &ObjectPropertyRange) {}
    fn visit_functional_object_property(&mut self, _: &FunctionalObjectProperty) {}
    fn visit_inverse_functional_object_property(&mut self, _: &InverseFunctionalObjectProperty) {}
    fn visit_reflexive_object_property(&mut self, _: &ReflexiveObjectProperty) {}
    fn visit_irreflexive_object_property(&mut self, _: &IrreflexiveObjectProperty) {}
    fn visit_symmetric_object_property(&mut self, _: &SymmetricObjectProperty) {}
    fn visit_asymmetric_object_property(&mut self, _: &AsymmetricObjectProperty) {}
    fn visit_transitive_object_property(&mut self, _: &TransitiveObjectProperty) {}
    fn visit_sub_data_property_of(&mut self, _: &SubDataPropertyOf) {}
    fn visit_equivalent_data_properties(&mut self, _: &EquivalentDataProperties) {}
    fn visit_disjoint_data_properties(&mut self, _: &DisjointDataProperties) {}
    fn visit_data_property_domain(&mut self, _: &DataPropertyDomain) {}
    fn visit_data_property_range(&mut self, _: &DataPropertyRange) {}
    fn visit_functional_data_property(&mut self, _: &FunctionalDataProperty) {}
    fn visit_datatype_definition(&mut self, _: &DatatypeDefinition) {}
    fn visit_same_individual(&mut self, _: &SameIndividual) {}
    fn visit_different_individuals(&mut self, _: &DifferentIndividuals) {}
    fn visit_class_assertion(&mut self, _: &ClassAssertion) {}
    fn visit_object_property_assertion(&mut self, _: &ObjectPropertyAssertion) {}
    fn visit_negative_object_property_assertion(&mut self, _: &NegativeObjectPropertyAssertion) {}
    fn visit_data_property_assertion(&mut self, _: &DataPropertyAssertion) {}
    fn visit_negative_data_property_assertion(&mut self, _: &NegativeDataPropertyAssertion) {}
    fn visit_annotation_assertion(&mut self, _: &AnnotationAssertion) {}
    fn visit_sub_annotation_property_of(&mut self, _: &SubAnnotationPropertyOf) {}
    fn visit_annotation_property_domain(&mut self, _: &AnnotationPropertyDomain) {}
    fn visit_annotation_property_range(&mut self, _: &AnnotationPropertyRange) {}
}

pub struct Walk<V>(V);

impl<V: Visit> Walk<V> {
    pub fn new(v: V) -> Self {
        Walk(v)
    }

    pub fn as_mut_visit(&mut self) -> &mut V {
        &mut self.0
    }

    pub fn into_visit(self) -> V {
        self.0
    }

    pub fn iri(&mut self, e: &IRI) {
        self.0.visit_iri(e);
    }

    pub fn class(&mut self, e: &Class) {
        self.0.visit_class(e);
        self.iri(&e.0);
    }

    pub fn object_property(&mut self, e: &ObjectProperty) {
        self.0.visit_object_property(e);
        self.iri(&e.0);
    }

    pub fn data_property(&mut self, e: &DataProperty) {
        self.0.visit_data_property(e);
        self.iri(&e.0);
    }

    pub fn annotation_property(&mut self, e: &AnnotationProperty) {
        self.0.visit_annotation_property(e);
        self.iri(&e.0);
    }

    pub fn named_individual(&mut self, e: &NamedIndividual) {
        self.0.visit_named_individual(e);
        self.iri(&e.0);
    }

    pub fn datatype(&mut self, e: &Datatype) {
        self.0.visit_datatype(e);
        self.iri(&e.0);
    }

    pub fn literal(&mut self, e: &Literal) {
        self.0.visit_literal(e);
        if let Literal::Datatype { datatype_iri, .. } = e {
            self.iri(datatype_iri);
        }
    }

    pub fn annotation(&mut self, e: &Annotation) {
        self.0.visit_annotation(e);
        self.annotation_property(&e.ap);
        self.annotation_value(&e.av);
    }

    pub fn annotation_value(&mut self, e: &AnnotationValue) {
        self.0.visit_annotation_value(e);
        match e {
            AnnotationValue::Literal(l) => self.literal(l),
            AnnotationValue::IRI(i) => self.iri(i),
        }
    }

    pub fn object_property_expression(&mut self, e: &ObjectPropertyExpression) {
        self.0.visit_object_property_expression(e);
        match e {
            ObjectPropertyExpression::ObjectProperty(op) => self.object_property(op),
            ObjectPropertyExpression::InverseObjectProperty(op) => self.object_property(op),
        }
    }

    pub fn data_range(&mut self, e: &DataRange) {
        self.0.visit_data_range(e);
        match e {
            DataRange::Datatype(dt) => self.datatype(dt),
            DataRange::DataIntersectionOf(v) | DataRange::DataUnionOf(v) => {
                for dr in v {
                    self.data_range(dr);
                }
            }
            DataRange::DataComplementOf(dr) => self.data_range(dr),
            DataRange::DataOneOf(v) => {
                for l in v {
                    self.literal(l);
                }
            }
        }
    }

    pub fn class_expression(&mut self, e: &ClassExpression) {
        self.0.visit_class_expression(e);
        match e {
            ClassExpression::Class(c) => self.class(c),
            ClassExpression::ObjectIntersectionOf(v) | ClassExpression::ObjectUnionOf(v) => {
                for ce in v {
                    self.class_expression(ce);
                }
            }
            ClassExpression::ObjectComplementOf(ce) => self.class_expression(ce),
            ClassExpression::ObjectOneOf(v) => {
                for i in v {
                    self.named_individual(i);
                }
            }
            ClassExpression::ObjectSomeValuesFrom { ope, bce }
            | ClassExpression::ObjectAllValuesFrom { ope, bce } => {
                self.object_property_expression(ope);
                self.class_expression(bce);
            }
            ClassExpression::ObjectHasValue { ope, i } => {
                self.object_property_expression(ope);
                self.named_individual(i);
            }
            ClassExpression::ObjectHasSelf(ope) => self.object_property_expression(ope),
            ClassExpression::ObjectMinCardinality { ope, bce, .. }
            | ClassExpression::ObjectMaxCardinality { ope, bce, .. }
            | ClassExpression::ObjectExactCardinality { ope, bce, .. } => {
                self.object_property_expression(ope);
                self.class_expression(bce);
            }
            ClassExpression::DataSomeValuesFrom { dp, dr }
            | ClassExpression::DataAllValuesFrom { dp, dr } => {
                self.data_property(dp);
                self.data_range(dr);
            }
            ClassExpression::DataHasValue { dp, l } => {
                self.data_property(dp);
                self.literal(l);
            }
            ClassExpression::DataMinCardinality { dp, dr, .. }
            | ClassExpression::DataMaxCardinality { dp, dr, .. }
            | ClassExpression::DataExactCardinality { dp, dr, .. } => {
                self.data_property(dp);
                self.data_range(dr);
            }
        }
    }

    pub fn annotated_axiom(&mut self, e: &AnnotatedAxiom) {
        self.0.visit_annotated_axiom(e);
        self.axiom(&e.axiom);
        for ann in &e.ann {
            self.annotation(ann);
        }
    }

    pub fn axiom(&mut self, e: &Axiom) {
        self.0.visit_axiom(e);
        match e {
            Axiom::DeclareClass(ax) => self.declare_class(ax),
            Axiom::DeclareObjectProperty(ax) => self.declare_object_property(ax),
            Axiom::DeclareAnnotationProperty(ax) => self.declare_annotation_property(ax),
            Axiom::DeclareDataProperty(ax) => self.declare_data_property(ax),
            Axiom::DeclareNamedIndividual(ax) => self.declare_named_individual(ax),
            Axiom::DeclareDatatype(ax) => self.declare_datatype(ax),
            Axiom::SubClassOf(ax) => self.sub_class_of(ax),
            Axiom::EquivalentClasses(ax) => self.equivalent_classes(ax),
            Axiom::DisjointClasses(ax) => self.disjoint_classes(ax),
            Axiom::DisjointUnion(ax) => self.disjoint_union(ax),
            Axiom::SubObjectPropertyOf(ax) => self.sub_object_property_of(ax),
            Axiom::EquivalentObjectProperties(ax) => self.equivalent_object_properties(ax),
            Axiom::DisjointObjectProperties(ax) => self.disjoint_object_properties(ax),
            Axiom::InverseObjectProperties(ax) => self.inverse_object_properties(ax),
            Axiom::ObjectPropertyDomain(ax) => self.object_property_domain(ax),
            Axiom::ObjectPropertyRange(ax) => self.object_property_range(ax),
            Axiom::FunctionalObjectProperty(ax) => self.functional_object_property(ax),
            Axiom::InverseFunctionalObjectProperty(ax) => {
                self.inverse_functional_object_property(ax)
            }
            Axiom::ReflexiveObjectProperty(ax) => self.reflexive_object_property(ax),
            Axiom::IrreflexiveObjectProperty(ax) => self.irreflexive_object_property(ax),
            Axiom::SymmetricObjectProperty(ax) => self.symmetric_object_property(ax),
            Axiom::AsymmetricObjectProperty(ax) => self.asymmetric_object_property(ax),
            Axiom::TransitiveObjectProperty(ax) => self.transitive_object_property(ax),
            Axiom::SubDataPropertyOf(ax) => self.sub_data_property_of(ax),
            Axiom::EquivalentDataProperties(ax) => self.equivalent_data_properties(ax),
            Axiom::DisjointDataProperties(ax) => self.disjoint_data_properties(ax),
            Axiom::DataPropertyDomain(ax) => self.data_property_domain(ax),
            Axiom::DataPropertyRange(ax) => self.data_property_range(ax),
            Axiom::FunctionalDataProperty(ax) => self.functional_data_property(ax),
            Axiom::DatatypeDefinition(ax) => self.datatype_definition(ax),
            Axiom::SameIndividual(ax) => self.same_individual(ax),
            Axiom::DifferentIndividuals(ax) => self.different_individuals(ax),
            Axiom::ClassAssertion(ax) => self.class_assertion(ax),
            Axiom::ObjectPropertyAssertion(ax) => self.object_property_assertion(ax),
            Axiom::NegativeObjectPropertyAssertion(ax) => {
                self.negative_object_property_assertion(ax)
            }
            Axiom::DataPropertyAssertion(ax) => self.data_property_assertion(ax),
            Axiom::NegativeDataPropertyAssertion(ax) => self.negative_data_property_assertion(ax),
            Axiom::AnnotationAssertion(ax) => self.annotation_assertion(ax),
            Axiom::SubAnnotationPropertyOf(ax) => self.sub_annotation_property_of(ax),
            Axiom::AnnotationPropertyDomain(ax) => self.annotation_property_domain(ax),
            Axiom::AnnotationPropertyRange(ax) => self.annotation_property_range(ax),
        }
    }

    pub fn declare_class(&mut self, e: &DeclareClass) {
        self.0.visit_declare_class(e);
        self.class(&e.0);
    }

    pub fn declare_object_property(&mut self, e: &DeclareObjectProperty) {
        self.0.visit_declare_object_property(e);
        self.object_property(&e.0);
    }

    pub fn declare_annotation_property(&mut self, e: &DeclareAnnotationProperty) {
        self.0.visit_declare_annotation_property(e);
        self.annotation_property(&e.0);
    }

    pub fn declare_data_property(&mut self, e: &DeclareDataProperty) {
        self.0.visit_declare_data_property(e);
        self.data_property(&e.0);
    }

    pub fn declare_named_individual(&mut self, e: &DeclareNamedIndividual) {
        self.0.visit_declare_named_individual(e);
        self.named_individual(&e.0);
    }

    pub fn declare_datatype(&mut self, e: &DeclareDatatype) {
        self.0.visit_declare_datatype(e);
        self.datatype(&e.0);
    }

    pub fn sub_class_of(&mut self, e: &SubClassOf) {
        self.0.visit_sub_class_of(e);
        self.class_expression(&e.sup);
        self.class_expression(&e.sub);
    }

    pub fn equivalent_classes(&mut self, e: &EquivalentClasses) {
        self.0.visit_equivalent_classes(e);
        for ce in &e.0 {
            self.class_expression(ce);
        }
    }

    pub fn disjoint_classes(&mut self, e: &DisjointClasses) {
        self.0.visit_disjoint_classes(e);
        for ce in &e.0 {
            self.class_expression(ce);
        }
    }

    pub fn disjoint_union(&mut self, e: &DisjointUnion) {
        self.0.visit_disjoint_union(e);
        self.class(&e.0);
        for ce in &e.1 {
            self.class_expression(ce);
        }
    }

    pub fn sub_object_property_of(&mut self, e: &SubObjectPropertyOf) {
        self.0.visit_sub_object_property_of(e);
        self.object_property_expression(&e.sup);
        self.object_property_expression(&e.sub);
    }

    pub fn equivalent_object_properties(&mut self, e: &EquivalentObjectProperties) {
        self.0.visit_equivalent_object_properties(e);
        for ope in &e.0 {
            self.object_property_expression(ope);
        }
    }

    pub fn disjoint_object_properties(&mut self, e: &DisjointObjectProperties) {
        self.0.visit_disjoint_object_properties(e);
        for ope in &e.0 {
            self.object_property_expression(ope);
        }
    }

    pub fn inverse_object_properties(&mut self, e: &InverseObjectProperties) {
        self.0.visit_inverse_object_properties(e);
        self.object_property(&e.0);
        self.object_property(&e.1);
    }

    pub fn object_property_domain(&mut self, e: &ObjectPropertyDomain) {
        self.0.visit_object_property_domain(e);
        self.object_property_expression(&e.ope);
        self.class_expression(&e.ce);
    }

    pub fn object_property_range(&mut self, e: &ObjectPropertyRange) {
        self.0.visit_object_property_range(e);
        self.object_property_expression(&e.ope);
        self.class_expression(&e.ce);
    }

    pub fn functional_object_property(&mut self, e: &FunctionalObjectProperty) {
        self.0.visit_functional_object_property(e);
        self.object_property_expression(&e.0);
    }

    pub fn inverse_functional_object_property(&mut self, e: &InverseFunctionalObjectProperty) {
        self.0.visit_inverse_functional_object_property(e);
        self.object_property_expression(&e.0);
    }

    pub fn reflexive_object_property(&mut self, e: &ReflexiveObjectProperty) {
        self.0.visit_reflexive_object_property(e);
        self.object_property_expression(&e.0);
    }

    pub fn irreflexive_object_property(&mut self, e: &IrreflexiveObjectProperty) {
        self.0.visit_irreflexive_object_property(e);
        self.object_property_expression(&e.0);
    }

    pub fn symmetric_object_property(&mut self, e: &SymmetricObjectProperty) {
        self.0.visit_symmetric_object_property(e);
        self.object_property_expression(&e.0);
    }

    pub fn asymmetric_object_property(&mut self, e: &AsymmetricObjectProperty) {
        self.0.visit_asymmetric_object_property(e);
        self.object_property_expression(&e.0);
    }

    pub fn transitive_object_property(&mut self, e: &TransitiveObjectProperty) {
        self.0.visit_transitive_object_property(e);
        self.object_property_expression(&e.0);
    }

    pub fn sub_data_property_of(&mut self, e: &SubDataPropertyOf) {
        self.0.visit_sub_data_property_of(e);
        self.data_property(&e.sup);
        self.data_property(&e.sub);
    }

    pub fn equivalent_data_properties(&mut self, e: &EquivalentDataProperties) {
        self.0.visit_equivalent_data_properties(e);
        for dp in &e.0 {
            self.data_property(dp);
        }
    }

    pub fn disjoint_data_properties(&mut self, e: &DisjointDataProperties) {
        self.0.visit_disjoint_data_properties(e);
        for dp in &e.0 {
            self.data_property(dp);
        }
    }

    pub fn data_property_domain(&mut self, e: &DataPropertyDomain) {
        self.0.visit_data_property_domain(e);
        self.data_property(&e.dp);
        self.class_expression(&e.ce);
    }

    pub fn data_property_range(&mut self, e: &DataPropertyRange) {
        self.0.visit_data_property_range(e);
        self.data_property(&e.dp);
        self.data_range(&e.dr);
    }

    pub fn functional_data_property(&mut self, e: &FunctionalDataProperty) {
        self.0.visit_functional_data_property(e);
        self.data_property(&e.0);
    }

    pub fn datatype_definition(&mut self, e: &DatatypeDefinition) {
        self.0.visit_datatype_definition(e);
        self.datatype(&e.kind);
        self.data_range(&e.range);
    }

    pub fn same_individual(&mut self, e: &SameIndividual) {
        self.0.visit_same_individual(e);
        for i in &e.0 {
            self.named_individual(i);
        }
    }

    pub fn different_individuals(&mut self, e: &DifferentIndividuals) {
        self.0.visit_different_individuals(e);
        for i in &e.0 {
            self.named_individual(i);
        }
    }

    pub fn class_assertion(&mut self, e: &ClassAssertion) {
        self.0.visit_class_assertion(e);
        self.class_expression(&e.ce);
        self.named_individual(&e.i);
    }

    pub fn object_property_assertion(&mut self, e: &ObjectPropertyAssertion) {
        self.0.visit_object_property_assertion(e);
        self.object_property_expression(&e.ope);
        self.named_individual(&e.from);
        self.named_individual(&e.to);
    }

    pub fn negative_object_property_assertion(&mut self, e: &NegativeObjectPropertyAssertion) {
        self.0.visit_negative_object_property_assertion(e);
        self.object_property_expression(&e.ope);
        self.named_individual(&e.from);
        self.named_individual(&e.to);
    }

    pub fn data_property_assertion(&mut self, e: &DataPropertyAssertion) {
        self.0.visit_data_property_assertion(e);
        self.data_property(&e.dp);
        self.named_individual(&e.from);
        self.literal(&e.to);
    }

    pub fn negative_data_property_assertion(&mut self, e: &NegativeDataPropertyAssertion) {
        self.0.visit_negative_data_property_assertion(e);
        self.data_property(&e.dp);
        self.named_individual(&e.from);
        self.literal(&e.to);
    }

    pub fn annotation_assertion(&mut self, e: &AnnotationAssertion) {
        self.0.visit_annotation_assertion(e);
        self.iri(&e.subject);
        self.annotation(&e.ann);
    }

    pub fn sub_annotation_property_of(&mut self, e: &SubAnnotationPropertyOf) {
        self.0.visit_sub_annotation_property_of(e);
        self.annotation_property(&e.sup);
        self.annotation_property(&e.sub);
    }

    pub fn annotation_property_domain(&mut self, e: &AnnotationPropertyDomain) {
        self.0.visit_annotation_property_domain(e);
        self.annotation_property(&e.ap);
        self.iri(&e.iri);
    }

    pub fn annotation_property_range(&mut self, e: &AnnotationPropertyRange) {
        self.0.visit_annotation_property_range(e);
        self.annotation_property(&e.ap);
        self.iri(&e.iri);
    }
}

pub mod entity {
    use super::Visit;
    use crate::model::*;

    /// Collect every IRI mentioned in the walked value.
    #[derive(Default)]
    pub struct IRIExtract(Vec<IRI>);

    impl IRIExtract {
        pub fn as_mut_vec(&mut self) -> &mut Vec<IRI> {
            &mut self.0
        }

        pub fn into_vec(self) -> Vec<IRI> {
            self.0
        }
    }

    impl Visit for IRIExtract {
        fn visit_iri(&mut self, iri: &IRI) {
            self.0.push(iri.clone())
        }
    }

    /// Collect every typed entity mentioned in the walked value.
    ///
    /// Plain IRIs that are not entities (an annotation subject, an
    /// IRI-valued annotation) are not collected.
    #[derive(Default)]
    pub struct EntityExtract(Vec<Entity>);

    impl EntityExtract {
        pub fn as_mut_vec(&mut self) -> &mut Vec<Entity> {
            &mut self.0
        }

        pub fn into_vec(self) -> Vec<Entity> {
            self.0
        }
    }

    impl Visit for EntityExtract {
        fn visit_class(&mut self, e: &Class) {
            self.0.push(e.clone().into())
        }

        fn visit_object_property(&mut self, e: &ObjectProperty) {
            self.0.push(e.clone().into())
        }

        fn visit_data_property(&mut self, e: &DataProperty) {
            self.0.push(e.clone().into())
        }

        fn visit_annotation_property(&mut self, e: &AnnotationProperty) {
            self.0.push(e.clone().into())
        }

        fn visit_named_individual(&mut self, e: &NamedIndividual) {
            self.0.push(e.clone().into())
        }

        fn visit_datatype(&mut self, e: &Datatype) {
            self.0.push(e.clone().into())
        }
    }
}

/// The signature of an annotated axiom: the set of entities its
/// operand tree mentions, annotations included.
pub fn signature(ax: &AnnotatedAxiom) -> std::collections::BTreeSet<Entity> {
    let mut walk = Walk::new(entity::EntityExtract::default());
    walk.annotated_axiom(ax);
    walk.into_visit().into_vec().into_iter().collect()
}
