use std::cell::RefCell;

use arbor_assembler::{AssemblerConfig, AssemblyError, ConstituentKind, GenderNumberPolicy};
use arbor_pipeline::{build_sentence, Pipeline, PipelineError};
use arbor_protocol::{Aspect, Clause, Element, Gender, NodeId, Number};
use arbor_surface::{LinearRealizer, RealizeError, Realizer};

const SIMPLE_TREE: &str = r#"{
    "a": "1", "b": "clause", "d": "{'tense': 'pres'}",
    "children": [
        {"a": "2", "b": "subj", "c": "he"},
        {"a": "3", "b": "verb", "c": "run"},
        {"a": "4", "b": "obj", "c": "home"}
    ]
}"#;

// "tu immagini le cose", as emitted by the sentence planner
const OBJECT_TREE: &str = r#"{
    "a": "1", "b": "clause", "d": "{'tense': 'ger'}",
    "children": [
        {"a": "2", "b": "subj", "c": "tu"},
        {"a": "3", "b": "obj", "d": "None", "children": [
            {"a": "4", "b": "spec", "c": "il"},
            {"a": "5", "b": "noum", "c": "cosa", "d": "{'number': 'pl', 'gen': 'f'}"}
        ]},
        {"a": "6", "b": "verb", "c": "immaginare"}
    ]
}"#;

const COMPLEMENT_TREE: &str = r#"{
    "a": "1", "b": "clause", "d": "{'tense': 'pres'}",
    "children": [
        {"a": "2", "b": "subj", "d": "None", "children": [
            {"a": "3", "b": "spec", "c": "un"},
            {"a": "4", "b": "noum", "c": "taglia"}
        ]},
        {"a": "5", "b": "verb", "c": "esistere"},
        {"a": "6", "b": "complement", "d": "None", "children": [
            {"a": "7", "b": "prep", "c": "sopra"},
            {"a": "8", "b": "ppcompl", "d": "None", "children": [
                {"a": "9", "b": "noum", "c": "testa", "d": "{'number': 'sg', 'gen': 'f'}"},
                {"a": "10", "b": "spec", "c": "il"},
                {"a": "11", "b": "modifier", "c": "mio"}
            ]}
        ]}
    ]
}"#;

#[test]
fn test_literal_clause_end_to_end() {
    let clause = Pipeline::default().build_clause(SIMPLE_TREE).unwrap();
    assert_eq!(clause.subject, Some(Element::literal("he")));
    assert_eq!(clause.verb, Some(Element::literal("run")));
    assert_eq!(clause.object, Some(Element::literal("home")));

    assert_eq!(build_sentence(SIMPLE_TREE).unwrap(), "He run home.");
}

#[test]
fn test_object_phrase_with_gerund() {
    let clause = Pipeline::default().build_clause(OBJECT_TREE).unwrap();

    assert!(clause.is_progressive());
    assert!(!clause.is_perfect());

    let object = clause.object.as_ref().and_then(Element::as_noun).unwrap();
    assert_eq!(object.specifier.as_deref(), Some("il"));
    assert_eq!(object.number, Some(Number::Plural));
    assert_eq!(object.gender, Some(Gender::Feminine));

    assert_eq!(build_sentence(OBJECT_TREE).unwrap(), "Tu immaginare il cosa.");
}

#[test]
fn test_gender_overrides_number_through_pipeline() {
    let config = AssemblerConfig::default().with_gender_number(GenderNumberPolicy::GenderOverridesNumber);
    let clause = Pipeline::new(LinearRealizer, config).build_clause(OBJECT_TREE).unwrap();

    let object = clause.object.as_ref().and_then(Element::as_noun).unwrap();
    assert_eq!(object.number, Some(Number::Singular));
}

#[test]
fn test_prepositional_complement() {
    let clause = Pipeline::default().build_clause(COMPLEMENT_TREE).unwrap();
    assert_eq!(clause.complements.len(), 1);
    assert!(!clause.is_progressive());

    assert_eq!(
        build_sentence(COMPLEMENT_TREE).unwrap(),
        "Un taglia esistere sopra il testa mio."
    );
}

#[test]
fn test_unresolved_parent_aborts_tree() {
    let tree = r#"{"a": 1, "b": "clause", "children": [
        {"a": 2, "b": "verb", "children": [{"a": 3, "b": "spec", "c": "il"}]}
    ]}"#;

    match build_sentence(tree) {
        Err(PipelineError::UnresolvedParent(AssemblyError::UnresolvedParent {
            node,
            parent,
            expected,
        })) => {
            assert_eq!(node, NodeId(3));
            assert_eq!(parent, Some(NodeId(2)));
            assert_eq!(expected, ConstituentKind::NounPhrase);
        }
        other => panic!("expected UnresolvedParent, got {:?}", other),
    }
}

#[test]
fn test_unresolved_parent_message_matches_assembler() {
    let tree = r#"{"a": 1, "b": "clause", "children": [
        {"a": 2, "b": "complement", "children": [{"a": 3, "b": "v", "c": "andare"}]}
    ]}"#;

    match build_sentence(tree) {
        Err(e @ PipelineError::UnresolvedParent(_)) => {
            let expected = AssemblyError::UnresolvedParent {
                node: NodeId(3),
                parent: Some(NodeId(2)),
                expected: ConstituentKind::VerbPhrase,
            };
            assert_eq!(e.to_string(), expected.to_string());
        }
        other => panic!("expected UnresolvedParent, got {:?}", other),
    }
}

#[test]
fn test_malformed_document() {
    assert!(matches!(build_sentence("{not json"), Err(PipelineError::TreeParse(_))));
    assert!(matches!(
        build_sentence(r#"{"a": 1, "children": []}"#),
        Err(PipelineError::TreeParse(_))
    ));
}

#[test]
fn test_malformed_feature_string() {
    let tree = r#"{"a": 1, "b": "clause", "d": "{tense ger}", "children": [
        {"a": 2, "b": "subj", "c": "io"}
    ]}"#;
    assert!(matches!(
        build_sentence(tree),
        Err(PipelineError::MalformedFeatureString(_))
    ));
}

#[test]
fn test_empty_clause_is_unrealizable() {
    let tree = r#"{"a": 1, "b": "clause", "d": "{'tense': 'pres'}"}"#;
    assert!(matches!(
        build_sentence(tree),
        Err(PipelineError::RealizationUnavailable(RealizeError::EmptyClause))
    ));
}

/// Keeps the aspect it was handed and fails on demand.
#[derive(Default)]
struct RecordingRealizer {
    seen: RefCell<Option<Aspect>>,
    fail: bool,
}

impl Realizer for RecordingRealizer {
    fn realize(&self, clause: &Clause) -> Result<String, RealizeError> {
        *self.seen.borrow_mut() = Some(clause.aspect);
        if self.fail {
            return Err(RealizeError::Engine("lexicon unavailable".to_string()));
        }
        Ok("  verbatim output ".to_string())
    }
}

#[test]
fn test_realizer_sees_override_and_output_is_verbatim() {
    let recorder = RecordingRealizer::default();
    let pipeline = Pipeline::new(&recorder, AssemblerConfig::default());

    assert_eq!(pipeline.build_sentence(OBJECT_TREE).unwrap(), "  verbatim output ");
    assert_eq!(*recorder.seen.borrow(), Some(Aspect::PROGRESSIVE));
}

#[test]
fn test_realizer_failure_is_surfaced() {
    let recorder = RecordingRealizer {
        fail: true,
        ..RecordingRealizer::default()
    };
    let pipeline = Pipeline::new(&recorder, AssemblerConfig::default());

    match pipeline.build_sentence(SIMPLE_TREE) {
        Err(PipelineError::RealizationUnavailable(RealizeError::Engine(msg))) => {
            assert_eq!(msg, "lexicon unavailable");
        }
        other => panic!("expected RealizationUnavailable, got {:?}", other),
    }
}
