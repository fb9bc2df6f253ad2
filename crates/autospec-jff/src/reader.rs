//! Extraction of element records from JFLAP XML.
//!
//! States and transitions are harvested from anywhere in the tree, matching
//! the editor's `<structure><automaton>...` layout without depending on it.

use autospec_formal::{
    ConvertError, FaTransition, MachineDoc, MachineType, PdaTransition, StateRecord, TmTransition,
    TransitionSet,
};
use roxmltree::{Document, Node};
use thiserror::Error;

/// A fault in the document boundary or in the conversion it feeds.
#[derive(Debug, Error)]
pub enum JffError {
    #[error("xml error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("document has no <type> element")]
    MissingType,

    #[error("unsupported machine type {kind:?}")]
    UnsupportedMachine { kind: String },

    #[error("state {index} is missing the {attr:?} attribute")]
    MissingStateAttr { index: usize, attr: &'static str },

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Read a JFLAP document into element records.
pub fn read_document(source: &str) -> Result<MachineDoc, JffError> {
    let xml = Document::parse(source)?;

    let kind_tag = xml
        .descendants()
        .find(|node| node.has_tag_name("type"))
        .and_then(|node| node.text())
        .map(str::trim)
        .ok_or(JffError::MissingType)?;
    let kind = MachineType::from_tag(kind_tag).ok_or_else(|| JffError::UnsupportedMachine {
        kind: kind_tag.to_string(),
    })?;

    let states = read_states(&xml)?;
    let transitions = read_transitions(&xml, kind);

    Ok(MachineDoc {
        states,
        transitions,
    })
}

fn read_states(xml: &Document) -> Result<Vec<StateRecord>, JffError> {
    let mut states = Vec::new();
    for (index, node) in xml
        .descendants()
        .filter(|n| n.has_tag_name("state"))
        .enumerate()
    {
        let id = node
            .attribute("id")
            .ok_or(JffError::MissingStateAttr { index, attr: "id" })?;
        let name = node
            .attribute("name")
            .ok_or(JffError::MissingStateAttr { index, attr: "name" })?;
        states.push(StateRecord {
            id: id.to_string(),
            name: name.to_string(),
            is_initial: has_marker(node, "initial"),
            is_final: has_marker(node, "final"),
        });
    }
    Ok(states)
}

fn has_marker(node: Node, name: &str) -> bool {
    node.children().any(|child| child.has_tag_name(name))
}

/// Text of a named child element. Absent or empty children read as `""`.
fn child_text<'a>(node: Node<'a, '_>, name: &str) -> &'a str {
    node.children()
        .find(|child| child.has_tag_name(name))
        .and_then(|child| child.text())
        .unwrap_or("")
}

fn read_transitions(xml: &Document, kind: MachineType) -> TransitionSet {
    let nodes = xml.descendants().filter(|n| n.has_tag_name("transition"));
    match kind {
        MachineType::Turing => TransitionSet::Turing(
            nodes
                .map(|node| TmTransition {
                    from: child_text(node, "from").to_string(),
                    to: child_text(node, "to").to_string(),
                    read: child_text(node, "read").to_string(),
                    write: child_text(node, "write").to_string(),
                    movement: child_text(node, "move").to_string(),
                })
                .collect(),
        ),
        MachineType::Finite => TransitionSet::Finite(
            nodes
                .map(|node| FaTransition {
                    from: child_text(node, "from").to_string(),
                    to: child_text(node, "to").to_string(),
                    read: child_text(node, "read").to_string(),
                })
                .collect(),
        ),
        MachineType::Pushdown => TransitionSet::Pushdown(
            nodes
                .map(|node| PdaTransition {
                    from: child_text(node, "from").to_string(),
                    to: child_text(node, "to").to_string(),
                    read: child_text(node, "read").to_string(),
                    pop: child_text(node, "pop").to_string(),
                    push: child_text(node, "push").to_string(),
                })
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_states_and_markers() {
        let doc = read_document(
            r#"<structure>
                <type>turing</type>
                <automaton>
                    <state id="0" name="A"><initial/></state>
                    <state id="1" name="B"><final/></state>
                </automaton>
            </structure>"#,
        )
        .unwrap();

        assert_eq!(doc.machine_type(), MachineType::Turing);
        assert_eq!(doc.states.len(), 2);
        assert!(doc.states[0].is_initial);
        assert!(!doc.states[0].is_final);
        assert!(doc.states[1].is_final);
    }

    #[test]
    fn test_empty_transition_fields_read_as_empty() {
        let doc = read_document(
            r#"<structure>
                <type>turing</type>
                <automaton>
                    <state id="0" name="A"><initial/></state>
                    <transition><from>0</from><to>0</to><read/><write>x</write><move>R</move></transition>
                </automaton>
            </structure>"#,
        )
        .unwrap();

        let TransitionSet::Turing(transitions) = &doc.transitions else {
            panic!("expected a turing transition set");
        };
        assert_eq!(transitions.len(), 1);
        assert_eq!(transitions[0].read, "");
        assert_eq!(transitions[0].write, "x");
        assert_eq!(transitions[0].movement, "R");
    }

    #[test]
    fn test_missing_type_element() {
        let err = read_document("<structure><automaton/></structure>").unwrap_err();
        assert!(matches!(err, JffError::MissingType));
    }

    #[test]
    fn test_unsupported_machine_type() {
        let err = read_document("<structure><type>mealy</type></structure>").unwrap_err();
        match err {
            JffError::UnsupportedMachine { kind } => assert_eq!(kind, "mealy"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_state_attribute() {
        let err = read_document(
            r#"<structure><type>fa</type><automaton><state id="0"/></automaton></structure>"#,
        )
        .unwrap_err();
        match err {
            JffError::MissingStateAttr { index, attr } => {
                assert_eq!(index, 0);
                assert_eq!(attr, "name");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_xml() {
        assert!(matches!(
            read_document("<structure>").unwrap_err(),
            JffError::Xml(_)
        ));
    }

    #[test]
    fn test_pushdown_fields() {
        let doc = read_document(
            r#"<structure>
                <type>pda</type>
                <automaton>
                    <state id="0" name="p"><initial/></state>
                    <transition><from>0</from><to>0</to><read>a</read><pop>Z</pop><push>aZ</push></transition>
                </automaton>
            </structure>"#,
        )
        .unwrap();

        let TransitionSet::Pushdown(transitions) = &doc.transitions else {
            panic!("expected a pushdown transition set");
        };
        assert_eq!(transitions[0].pop, "Z");
        assert_eq!(transitions[0].push, "aZ");
    }
}
