use std::collections::BTreeSet;

use attrclust_core::rng::RngHandle;
use attrclust_core::GraphData;
use attrclust_kmeans::{
    canonical_hash, gen_attributed_graph, k_means, ClusterData, DistanceType, KMeansOpts,
    StopReason, StoppingRule,
};
use proptest::prelude::*;

fn check_invariants(graph: &GraphData, k: usize, max_iterations: usize, data: &ClusterData) {
    assert_eq!(data.clusters.len(), k);
    let mut seen = BTreeSet::new();
    for cluster in &data.clusters {
        for member in &cluster.nodes {
            assert_eq!(member.cluster_id, cluster.id);
            assert!(seen.insert(member.origin_index));
        }
    }
    assert_eq!(seen.len(), graph.node_count());

    let keys: BTreeSet<String> = data.cluster_edges.iter().map(|edge| edge.key()).collect();
    assert_eq!(keys.len(), data.cluster_edges.len());
    assert_eq!(data.total_edge_count(), graph.edge_count());
    assert!(data.cluster_edges.iter().all(|edge| edge.count > 0));

    assert!(data.iterations >= 1);
    assert!(data.iterations <= max_iterations);
    if data.stop_reason == StopReason::IterationCeiling {
        assert_eq!(data.iterations, max_iterations);
    }
}

fn metric_strategy() -> impl Strategy<Value = DistanceType> {
    prop_oneof![
        Just(DistanceType::Euclidean),
        Just(DistanceType::Manhattan),
        Just(DistanceType::Chebyshev),
        Just(DistanceType::Cosine),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn random_graphs_partition_cleanly(
        seed in any::<u64>(),
        nodes in 1usize..24,
        edges in 0usize..40,
        groups in 1usize..5,
        k_hint in 1usize..6,
        stable in any::<bool>(),
        metric in metric_strategy(),
    ) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gen_attributed_graph(nodes, edges, groups, &mut rng).unwrap();
        let k = k_hint.min(nodes);
        let opts = KMeansOpts {
            k,
            metric,
            seed,
            max_iterations: 25,
            stopping_rule: if stable { StoppingRule::Stable } else { StoppingRule::FirstMove },
            ..KMeansOpts::default()
        };

        let data = k_means(&graph, &opts).unwrap();
        check_invariants(&graph, k, opts.max_iterations, &data);

        let again = k_means(&graph, &opts).unwrap();
        prop_assert_eq!(canonical_hash(&data).unwrap(), canonical_hash(&again).unwrap());
    }

    #[test]
    fn generator_is_reproducible(seed in any::<u64>(), nodes in 1usize..16, edges in 0usize..24) {
        let first = gen_attributed_graph(nodes, edges, 3, &mut RngHandle::from_seed(seed)).unwrap();
        let second = gen_attributed_graph(nodes, edges, 3, &mut RngHandle::from_seed(seed)).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.node_count(), nodes);
        prop_assert_eq!(first.edge_count(), edges);
    }
}
