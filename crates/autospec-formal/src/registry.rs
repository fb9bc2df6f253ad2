//! State registry: id→name resolution and state roles.

use crate::error::{ConvertError, ConvertResult};
use crate::model::StateRecord;
use std::collections::BTreeMap;

/// The states of a document, indexed for rendering.
///
/// Built once per document, read-only afterward. Ids are unique by
/// assumption; a duplicate silently keeps the last name seen.
#[derive(Clone, Debug)]
pub struct Registry {
    names: BTreeMap<i64, String>,
    initial: String,
    finals: Vec<String>,
}

impl Registry {
    /// Build the registry from the document's state records.
    ///
    /// Among a non-empty state list, exactly one record must be marked
    /// initial. An empty list yields an empty registry with an empty initial
    /// name (degenerate documents still render).
    pub fn build(states: &[StateRecord]) -> ConvertResult<Registry> {
        let mut names = BTreeMap::new();
        let mut initial: Option<&StateRecord> = None;
        let mut final_ids = Vec::new();

        for (index, state) in states.iter().enumerate() {
            let id: i64 = state.id.parse().map_err(|_| ConvertError::InvalidStateId {
                index,
                id: state.id.clone(),
            })?;
            names.insert(id, state.name.clone());

            if state.is_initial {
                if let Some(first) = initial {
                    return Err(ConvertError::MultipleInitialStates {
                        first: first.name.clone(),
                        second: state.name.clone(),
                    });
                }
                initial = Some(state);
            }
            if state.is_final {
                final_ids.push(id);
            }
        }

        let initial = match initial {
            Some(state) => state.name.clone(),
            None if states.is_empty() => String::new(),
            None => return Err(ConvertError::MissingInitialState),
        };

        final_ids.sort_unstable();
        let finals = final_ids
            .iter()
            .filter_map(|id| names.get(id).cloned())
            .collect();

        Ok(Registry {
            names,
            initial,
            finals,
        })
    }

    /// Name of the initial state. Empty only for an empty document.
    pub fn initial_name(&self) -> &str {
        &self.initial
    }

    /// All state names in ascending numeric id order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.values().map(String::as_str)
    }

    /// Final state names in ascending numeric id order.
    pub fn final_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.finals.iter().map(String::as_str)
    }

    /// Parse a transition reference and resolve it to its id and state name.
    ///
    /// `index` and `field` identify the offending transition on failure.
    pub fn resolve(
        &self,
        raw: &str,
        index: usize,
        field: &'static str,
    ) -> ConvertResult<(i64, &str)> {
        let id: i64 = raw.parse().map_err(|_| ConvertError::MalformedReference {
            index,
            field,
            value: raw.to_string(),
        })?;
        let name = self
            .names
            .get(&id)
            .ok_or_else(|| ConvertError::UnresolvedReference {
                index,
                field,
                value: raw.to_string(),
            })?;
        Ok((id, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(id: &str, name: &str, is_initial: bool, is_final: bool) -> StateRecord {
        StateRecord {
            id: id.to_string(),
            name: name.to_string(),
            is_initial,
            is_final,
        }
    }

    #[test]
    fn test_names_sorted_by_numeric_id() {
        let registry = Registry::build(&[
            state("10", "j", false, false),
            state("2", "b", true, false),
            state("0", "a", false, false),
        ])
        .unwrap();
        let names: Vec<_> = registry.state_names().collect();
        assert_eq!(names, vec!["a", "b", "j"]);
    }

    #[test]
    fn test_finals_sorted_by_numeric_id() {
        let registry = Registry::build(&[
            state("3", "d", false, true),
            state("1", "b", true, true),
            state("2", "c", false, false),
        ])
        .unwrap();
        let finals: Vec<_> = registry.final_names().collect();
        assert_eq!(finals, vec!["b", "d"]);
    }

    #[test]
    fn test_missing_initial_is_fatal() {
        let err = Registry::build(&[state("0", "a", false, false)]).unwrap_err();
        assert_eq!(err, ConvertError::MissingInitialState);
    }

    #[test]
    fn test_multiple_initials_are_fatal() {
        let err = Registry::build(&[
            state("0", "a", true, false),
            state("1", "b", true, false),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ConvertError::MultipleInitialStates {
                first: "a".to_string(),
                second: "b".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_state_list_is_degenerate_not_fatal() {
        let registry = Registry::build(&[]).unwrap();
        assert_eq!(registry.initial_name(), "");
        assert_eq!(registry.state_names().count(), 0);
        assert_eq!(registry.final_names().count(), 0);
    }

    #[test]
    fn test_unparseable_state_id() {
        let err = Registry::build(&[state("q0", "a", true, false)]).unwrap_err();
        assert_eq!(
            err,
            ConvertError::InvalidStateId {
                index: 0,
                id: "q0".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_reports_field_and_index() {
        let registry = Registry::build(&[state("0", "a", true, false)]).unwrap();
        assert_eq!(registry.resolve("0", 0, "from").unwrap(), (0, "a"));

        let err = registry.resolve("x", 3, "from").unwrap_err();
        assert_eq!(
            err,
            ConvertError::MalformedReference {
                index: 3,
                field: "from",
                value: "x".to_string(),
            }
        );

        let err = registry.resolve("7", 5, "to").unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnresolvedReference {
                index: 5,
                field: "to",
                value: "7".to_string(),
            }
        );
    }
}
