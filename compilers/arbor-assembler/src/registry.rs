use std::collections::HashMap;

use arbor_parser::NodeRecord;
use arbor_protocol::{Element, NodeId, NounPhrase, PrepositionalPhrase, VerbPhrase};
use tracing::trace;

use crate::error::{AssemblyError, ConstituentKind};

/// What fills a slot while the tree is still being assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Literal(String),
    /// A phrase still owned by the registry
    Phrase(NodeId),
}

/// Prepositional phrase whose complement may still be registered elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrepositionalDraft {
    pub preposition: Option<String>,
    pub complement: Option<Slot>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constituent {
    Noun(NounPhrase),
    Verb(VerbPhrase),
    Prepositional(PrepositionalDraft),
}

impl Constituent {
    pub fn kind(&self) -> ConstituentKind {
        match self {
            Constituent::Noun(_) => ConstituentKind::NounPhrase,
            Constituent::Verb(_) => ConstituentKind::VerbPhrase,
            Constituent::Prepositional(_) => ConstituentKind::PrepositionalPhrase,
        }
    }
}

fn unresolved(node: &NodeRecord, expected: ConstituentKind) -> AssemblyError {
    AssemblyError::UnresolvedParent {
        node: node.id,
        parent: node.parent,
        expected,
    }
}

/// Constituents created during one assembly run, keyed by creating node.
#[derive(Debug, Default)]
pub struct Registry {
    phrases: HashMap<NodeId, Constituent>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: NodeId, constituent: Constituent) {
        trace!(%id, kind = %constituent.kind(), "registered constituent");
        self.phrases.insert(id, constituent);
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// The constituent of `expected` kind owned by `node`'s parent.
    pub fn lookup(
        &mut self,
        node: &NodeRecord,
        expected: ConstituentKind,
    ) -> Result<&mut Constituent, AssemblyError> {
        match node.parent.and_then(|parent| self.phrases.get_mut(&parent)) {
            Some(constituent) if constituent.kind() == expected => Ok(constituent),
            _ => Err(unresolved(node, expected)),
        }
    }

    pub fn noun_phrase(&mut self, node: &NodeRecord) -> Result<&mut NounPhrase, AssemblyError> {
        match self.lookup(node, ConstituentKind::NounPhrase)? {
            Constituent::Noun(np) => Ok(np),
            _ => Err(unresolved(node, ConstituentKind::NounPhrase)),
        }
    }

    pub fn verb_phrase(&mut self, node: &NodeRecord) -> Result<&mut VerbPhrase, AssemblyError> {
        match self.lookup(node, ConstituentKind::VerbPhrase)? {
            Constituent::Verb(vp) => Ok(vp),
            _ => Err(unresolved(node, ConstituentKind::VerbPhrase)),
        }
    }

    pub fn prepositional_phrase(
        &mut self,
        node: &NodeRecord,
    ) -> Result<&mut PrepositionalDraft, AssemblyError> {
        match self.lookup(node, ConstituentKind::PrepositionalPhrase)? {
            Constituent::Prepositional(pp) => Ok(pp),
            _ => Err(unresolved(node, ConstituentKind::PrepositionalPhrase)),
        }
    }

    /// Moves the phrase a slot refers to out of the registry.
    ///
    /// A slot whose phrase was already taken resolves to `None`.
    pub fn resolve(&mut self, slot: Slot) -> Option<Element> {
        match slot {
            Slot::Literal(text) => Some(Element::Literal(text)),
            Slot::Phrase(id) => self.phrases.remove(&id).map(|c| self.finish(c)),
        }
    }

    fn finish(&mut self, constituent: Constituent) -> Element {
        match constituent {
            Constituent::Noun(np) => Element::Noun(np),
            Constituent::Verb(vp) => Element::Verb(vp),
            Constituent::Prepositional(draft) => Element::Prepositional(PrepositionalPhrase {
                preposition: draft.preposition,
                complement: draft
                    .complement
                    .and_then(|slot| self.resolve(slot))
                    .map(Box::new),
            }),
        }
    }
}
