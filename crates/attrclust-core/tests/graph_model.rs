use attrclust_core::{Edge, GraphData, Node, PropertyBag, PropertyValue, DEFAULT_PROPERTY_KEY};

#[test]
fn property_values_parse_untagged() {
    let json = r#"{
        "nodes": [
            {"id": "A", "properties": {"city": "Lyon", "age": 31, "active": true}},
            {"id": "B"}
        ],
        "edges": [{"source": "A", "target": "B"}]
    }"#;
    let graph: GraphData = serde_json::from_str(json).expect("parse graph");
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);

    let a = &graph.nodes[0];
    assert_eq!(a.properties.get("city"), Some(&PropertyValue::Text("Lyon".into())));
    assert_eq!(a.properties.get("age"), Some(&PropertyValue::Number(31.0)));
    assert_eq!(a.properties.get("active"), Some(&PropertyValue::Bool(true)));
    let keys: Vec<_> = a.properties.keys().cloned().collect();
    assert_eq!(keys, vec!["city", "age", "active"]);

    assert!(graph.nodes[1].properties.is_empty());
    assert_eq!(graph.edges[0], Edge::new("A", "B"));
}

#[test]
fn named_bags_are_selectable() {
    let mut extra = PropertyBag::new();
    extra.insert("team".into(), "red".into());
    let node = Node::new("n0")
        .with_property("kind", "person")
        .with_bag("meta", extra.clone());

    assert_eq!(node.bag(DEFAULT_PROPERTY_KEY).map(|bag| bag.len()), Some(1));
    assert_eq!(node.bag("meta"), Some(&extra));
    assert_eq!(node.bag("missing"), None);

    let replaced = node.with_bag(DEFAULT_PROPERTY_KEY, PropertyBag::new());
    assert!(replaced.properties.is_empty());
}

#[test]
fn blank_and_numeric_helpers() {
    assert!(PropertyValue::from("").is_blank());
    assert!(!PropertyValue::from("x").is_blank());
    assert_eq!(PropertyValue::from(2).as_number(), Some(2.0));
    assert_eq!(PropertyValue::from(true).as_number(), None);
    assert_eq!(PropertyValue::from(1.5).to_string(), "1.5");
}
