use arbor_parser::{Features, NodeKind, NodeRecord, NodeTable};
use arbor_protocol::{Clause, Gender, NodeId, NounPhrase, Number, VerbPhrase};
use tracing::{debug, trace};

use crate::config::{AssemblerConfig, GenderNumberPolicy};
use crate::error::AssemblyError;
use crate::registry::{Constituent, PrepositionalDraft, Registry, Slot};

/// Node 1 is the clause root and only carries clause-level features.
pub const FIRST_NODE: NodeId = NodeId(2);

#[derive(Debug, Default)]
struct ClauseDraft {
    subject: Option<Slot>,
    object: Option<Slot>,
    verb: Option<Slot>,
    complements: Vec<Slot>,
}

/// Maps a node table onto constituents, one identifier at a time.
///
/// Nodes are visited in ascending id order starting at [`FIRST_NODE`]. The
/// scan stops at the first missing id, so a gap in the numbering ends the
/// clause early. Every parent must therefore precede its children.
pub struct Assembler<'t> {
    table: &'t NodeTable,
    config: AssemblerConfig,
    registry: Registry,
    clause: ClauseDraft,
}

impl<'t> Assembler<'t> {
    pub fn new(table: &'t NodeTable, config: AssemblerConfig) -> Self {
        Self {
            table,
            config,
            registry: Registry::new(),
            clause: ClauseDraft::default(),
        }
    }

    pub fn run(mut self) -> Result<Clause, AssemblyError> {
        let table = self.table;
        let mut next = Some(FIRST_NODE);

        while let Some(node) = next.and_then(|id| table.get(id)) {
            self.visit(node)?;
            next = node.id.next();
        }

        Ok(self.finish())
    }

    fn visit(&mut self, node: &NodeRecord) -> Result<(), AssemblyError> {
        debug!(id = %node.id, kind = %node.kind, leaf = node.is_leaf(), "assembling node");

        match &node.label {
            None => self.create(node),
            Some(label) => self.attach(node, label),
        }
    }

    /// Unlabelled nodes open a new constituent under their own id.
    fn create(&mut self, node: &NodeRecord) -> Result<(), AssemblyError> {
        let slot = Slot::Phrase(node.id);

        match node.kind {
            NodeKind::Object => {
                self.registry.register(node.id, Constituent::Noun(NounPhrase::default()));
                self.clause.object = Some(slot);
            }
            NodeKind::Subject => {
                self.registry.register(node.id, Constituent::Noun(NounPhrase::default()));
                self.clause.subject = Some(slot);
            }
            // Complements always hang off the clause
            NodeKind::Complement => {
                self.registry.register(
                    node.id,
                    Constituent::Prepositional(PrepositionalDraft::default()),
                );
                self.clause.complements.push(slot);
            }
            NodeKind::PrepositionalComplement => {
                self.registry.prepositional_phrase(node)?.complement = Some(slot);
                self.registry.register(node.id, Constituent::Noun(NounPhrase::default()));
            }
            NodeKind::Verb => {
                self.registry.register(node.id, Constituent::Verb(VerbPhrase::default()));
                self.clause.verb = Some(slot);
            }
            _ => trace!(id = %node.id, kind = %node.kind, "no constituent for unlabelled node"),
        }
        Ok(())
    }

    /// Labelled nodes fill a slot of the clause or of their parent's phrase.
    fn attach(&mut self, node: &NodeRecord, label: &str) -> Result<(), AssemblyError> {
        let literal = || label.to_string();

        match node.kind {
            NodeKind::Subject => self.clause.subject = Some(Slot::Literal(literal())),
            NodeKind::Object => self.clause.object = Some(Slot::Literal(literal())),
            NodeKind::Verb => self.clause.verb = Some(Slot::Literal(literal())),
            NodeKind::Specifier => {
                self.registry.noun_phrase(node)?.specifier = Some(literal());
            }
            NodeKind::Noun => {
                let policy = self.config.gender_number;
                let np = self.registry.noun_phrase(node)?;
                np.noun = Some(literal());
                if node.features.is_some() {
                    apply_noun_features(np, &node.decode_features()?, policy);
                }
            }
            NodeKind::Preposition => {
                self.registry.prepositional_phrase(node)?.preposition = Some(literal());
            }
            NodeKind::PrepositionalComplement => {
                self.registry.prepositional_phrase(node)?.complement =
                    Some(Slot::Literal(literal()));
            }
            NodeKind::Modifier => self.registry.noun_phrase(node)?.modifiers.push(literal()),
            NodeKind::FiniteVerb => {
                self.registry.verb_phrase(node)?.verb = Some(literal());
            }
            NodeKind::Adverbial => self.registry.verb_phrase(node)?.complements.push(literal()),
            _ => trace!(id = %node.id, kind = %node.kind, "ignored labelled node"),
        }
        Ok(())
    }

    fn finish(self) -> Clause {
        let Assembler {
            mut registry,
            clause,
            ..
        } = self;

        let finished = Clause {
            subject: clause.subject.and_then(|slot| registry.resolve(slot)),
            object: clause.object.and_then(|slot| registry.resolve(slot)),
            verb: clause.verb.and_then(|slot| registry.resolve(slot)),
            complements: clause
                .complements
                .into_iter()
                .filter_map(|slot| registry.resolve(slot))
                .collect(),
            ..Clause::default()
        };

        if !registry.is_empty() {
            debug!(dropped = registry.len(), "constituents displaced from their slots");
        }
        finished
    }
}

/// Number from `number`, gender from `gen`.
pub fn apply_noun_features(np: &mut NounPhrase, features: &Features, policy: GenderNumberPolicy) {
    if let Some(number) = features.get("number") {
        np.number = Some(Number::from_feature(number));
    }
    if let Some(gender) = features.get("gen") {
        if policy == GenderNumberPolicy::GenderOverridesNumber {
            np.number = Some(Number::from_feature(gender));
        }
        np.gender = Some(Gender::from_feature(gender));
    }
}

/// Assembles the clause described by `table`.
pub fn assemble(table: &NodeTable, config: &AssemblerConfig) -> Result<Clause, AssemblyError> {
    Assembler::new(table, config.clone()).run()
}
