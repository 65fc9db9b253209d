use attrclust_core::errors::ClusterError;
use attrclust_core::rng::RngHandle;
use attrclust_core::{Edge, GraphData, Node};
use rand::{Rng, RngCore};

/// Generates an attributed graph whose nodes follow `groups` property patterns.
///
/// Node `i` is named `n{i}` and draws a group `g` uniformly; its properties
/// are `group = "g{g}"`, `band = "b{g / 2}"` and `even = (g % 2 == 0)`, with a
/// one-in-eight chance of an extra `noise` label. Edge endpoints are drawn
/// uniformly from a separate substream, self loops included.
pub fn gen_attributed_graph(
    n_nodes: usize,
    n_edges: usize,
    groups: usize,
    rng: &mut RngHandle,
) -> Result<GraphData, ClusterError> {
    if n_nodes == 0 {
        return Err(ClusterError::empty_graph());
    }
    let groups = groups.max(1);
    let mut edge_rng = RngHandle::substream(rng.next_u64(), 1);

    let nodes: Vec<Node> = (0..n_nodes)
        .map(|index| {
            let group = rng.gen_range(0..groups);
            let mut node = Node::new(format!("n{index}"))
                .with_property("group", format!("g{group}"))
                .with_property("band", format!("b{}", group / 2))
                .with_property("even", group % 2 == 0);
            if rng.gen_ratio(1, 8) {
                node = node.with_property("noise", format!("x{}", rng.gen_range(0..3)));
            }
            node
        })
        .collect();

    let edges = (0..n_edges)
        .map(|_| {
            let source = edge_rng.gen_range(0..n_nodes);
            let target = edge_rng.gen_range(0..n_nodes);
            Edge::new(format!("n{source}"), format!("n{target}"))
        })
        .collect();

    Ok(GraphData::new(nodes, edges))
}
