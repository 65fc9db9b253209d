use attrclust_core::{ClusterError, GraphData, Node, Vector};
use attrclust_kmeans::{check_cluster_count, k_means, seed_centroids, DistanceType, KMeansOpts};

fn line(points: &[f64]) -> Vec<Vector> {
    points.iter().map(|x| Vector::new(vec![*x])).collect()
}

#[test]
fn farthest_point_prefers_earliest_on_ties() {
    let features = line(&[0.0, 1.0, 5.0, 10.0]);
    let seeding = seed_centroids(&features, 3, &DistanceType::Euclidean, 0).unwrap();

    // node 3 is farthest from node 0; nodes 1 and 2 then tie at a mean of 5.
    assert_eq!(seeding.chosen, vec![0, 3, 1]);
    assert_eq!(seeding.centroids, line(&[0.0, 10.0, 1.0]));
    assert_eq!(seeding.clusters(), vec![vec![0], vec![3], vec![1]]);
}

#[test]
fn seeding_never_repeats_a_node() {
    let features = line(&[2.0, 2.0, 2.0, 2.0]);
    let seeding = seed_centroids(&features, 4, &DistanceType::Euclidean, 2).unwrap();
    assert_eq!(seeding.chosen, vec![2, 0, 1, 3]);
}

#[test]
fn cluster_count_bounds() {
    assert!(check_cluster_count(1, 1).is_ok());
    assert!(check_cluster_count(4, 4).is_ok());
    assert_eq!(check_cluster_count(0, 4).unwrap_err().info().code, "invalid-cluster-count");
    assert_eq!(check_cluster_count(5, 4).unwrap_err().info().code, "invalid-cluster-count");
    assert_eq!(check_cluster_count(0, 0).unwrap_err().info().code, "empty-graph");
}

#[test]
fn engine_rejects_invalid_inputs() {
    let empty = GraphData::default();
    let err = k_means(&empty, &KMeansOpts::default()).unwrap_err();
    assert!(matches!(err, ClusterError::Input(info) if info.code == "empty-graph"));

    let graph = GraphData::new(
        (0..3).map(|index| Node::new(format!("n{index}"))).collect(),
        Vec::new(),
    );
    let err = k_means(&graph, &KMeansOpts::with_k(0)).unwrap_err();
    assert_eq!(err.info().code, "invalid-cluster-count");

    let err = k_means(&graph, &KMeansOpts::with_k(4)).unwrap_err();
    match err {
        ClusterError::Input(info) => {
            assert_eq!(info.code, "invalid-cluster-count");
            assert_eq!(info.context.get("k"), Some(&"4".to_string()));
            assert_eq!(info.context.get("nodes"), Some(&"3".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let opts = KMeansOpts {
        k: 2,
        first_centroid: Some(3),
        ..KMeansOpts::default()
    };
    let err = k_means(&graph, &opts).unwrap_err();
    assert_eq!(err.info().code, "invalid-seed-index");
}

#[test]
fn inconsistent_features_fail_fast() {
    let features = vec![Vector::new(vec![0.0]), Vector::new(vec![1.0, 2.0])];
    let err = seed_centroids(&features, 2, &DistanceType::Euclidean, 0).unwrap_err();
    assert!(matches!(err, ClusterError::Vector(info) if info.code == "dimension-mismatch"));
}
