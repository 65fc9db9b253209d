use attrclust_core::{Node, PropertyBag, PropertyValue, Vector};
use indexmap::IndexMap;

/// Property bags of every node, in node order.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary<'a> {
    bags: Vec<Option<&'a PropertyBag>>,
}

impl<'a> Vocabulary<'a> {
    /// Number of nodes covered.
    pub fn len(&self) -> usize {
        self.bags.len()
    }

    /// Whether no node was collected.
    pub fn is_empty(&self) -> bool {
        self.bags.is_empty()
    }

    /// The bag of node `index`; nodes without the bag yield `None`.
    pub fn bag(&self, index: usize) -> Option<&'a PropertyBag> {
        self.bags.get(index).copied().flatten()
    }

    fn iter(&self) -> impl Iterator<Item = Option<&'a PropertyBag>> + '_ {
        self.bags.iter().copied()
    }
}

/// Collects the bag named `property_key` from every node.
pub fn extract_property_vocabulary<'a>(nodes: &'a [Node], property_key: &str) -> Vocabulary<'a> {
    Vocabulary {
        bags: nodes.iter().map(|node| node.bag(property_key)).collect(),
    }
}

/// Encodes one feature vector per vocabulary entry.
///
/// Each retained key contributes one slot per distinct value (one-hot), or a
/// single raw slot when every retained value across all keys is numeric.
pub fn encode_one_hot(
    vocabulary: &Vocabulary<'_>,
    involved_keys: &[String],
    uninvolved_keys: &[String],
) -> Vec<Vector> {
    let columns = collect_columns(vocabulary, involved_keys, uninvolved_keys);
    if columns.is_empty() {
        return vec![Vector::default(); vocabulary.len()];
    }

    let numeric = columns
        .values()
        .all(|values| values.iter().all(|value| value.as_number().is_some()));
    let dim = if numeric {
        columns.len()
    } else {
        columns.values().map(Vec::len).sum()
    };

    vocabulary
        .iter()
        .map(|bag| {
            let mut code = Vec::with_capacity(dim);
            for (key, values) in &columns {
                let value = bag.and_then(|bag| bag.get(*key));
                if numeric {
                    code.push(value.and_then(PropertyValue::as_number).unwrap_or(0.0));
                } else {
                    let hot = value.and_then(|value| values.iter().position(|v| *v == value));
                    code.extend((0..values.len()).map(|slot| {
                        if Some(slot) == hot {
                            1.0
                        } else {
                            0.0
                        }
                    }));
                }
            }
            Vector::new(code)
        })
        .collect()
}

/// Distinct non-blank values per retained key, both in first-seen order.
fn collect_columns<'a>(
    vocabulary: &Vocabulary<'a>,
    involved_keys: &'a [String],
    uninvolved_keys: &[String],
) -> IndexMap<&'a str, Vec<&'a PropertyValue>> {
    let mut keys: Vec<&'a str> = Vec::new();
    if involved_keys.is_empty() {
        for bag in vocabulary.iter().flatten() {
            for key in bag.keys() {
                if !keys.contains(&key.as_str()) {
                    keys.push(key.as_str());
                }
            }
        }
    } else {
        keys.extend(involved_keys.iter().map(String::as_str));
    }

    let mut columns = IndexMap::new();
    for key in keys {
        if uninvolved_keys.iter().any(|skip| skip == key) {
            continue;
        }
        let mut values: Vec<&'a PropertyValue> = Vec::new();
        for bag in vocabulary.iter().flatten() {
            match bag.get(key) {
                Some(value) if !value.is_blank() && !values.contains(&value) => values.push(value),
                _ => {}
            }
        }
        if !values.is_empty() {
            columns.insert(key, values);
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_skip_blank_and_excluded() {
        let nodes = vec![
            Node::new("a").with_property("color", "").with_property("size", 2),
            Node::new("b").with_property("color", "red").with_property("tag", "x"),
        ];
        let vocabulary = extract_property_vocabulary(&nodes, "properties");
        let columns = collect_columns(&vocabulary, &[], &["tag".to_string()]);
        let keys: Vec<&str> = columns.keys().copied().collect();
        assert_eq!(keys, vec!["color", "size"]);
        assert_eq!(columns["color"].len(), 1);
    }
}
