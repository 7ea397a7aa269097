use crate::travel_matrices::TravelMatrices;

/// Orders locations with a greedy nearest-neighbor walk over the distance
/// matrix: start at location 0, then repeatedly move to the closest not yet
/// visited location.
///
/// The returned order is a prefix of a permutation of `0..len`, always
/// starting with 0. When every remaining location is unreachable from the
/// current one (all candidate distances are infinite), the walk stops and
/// the order comes back shorter than `len` with the unreachable remainder
/// omitted. Callers must tolerate a short order.
pub fn nearest_neighbor_order(matrices: &TravelMatrices) -> Vec<usize> {
    let n = matrices.len();
    if n == 0 {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);

    visited[0] = true;
    order.push(0);
    let mut last = 0;

    for _ in 1..n {
        let mut best = None;
        let mut best_distance = f64::INFINITY;

        // Strict `<` over an ascending scan: the lowest index wins ties.
        for candidate in 0..n {
            if !visited[candidate] && matrices.distance(last, candidate) < best_distance {
                best = Some(candidate);
                best_distance = matrices.distance(last, candidate);
            }
        }

        let Some(next) = best else {
            break;
        };

        visited[next] = true;
        order.push(next);
        last = next;
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: f64 = f64::INFINITY;

    fn matrices_from_distances(distances: Vec<Vec<f64>>) -> TravelMatrices {
        let durations = distances
            .iter()
            .map(|row| row.iter().map(|d| d * 10.0).collect())
            .collect();
        TravelMatrices::from_rows(distances, durations)
    }

    #[test]
    fn test_single_location() {
        let matrices = matrices_from_distances(vec![vec![0.0]]);
        assert_eq!(nearest_neighbor_order(&matrices), vec![0]);
    }

    #[test]
    fn test_greedy_walk_picks_closest_first() {
        // 0 -> 2 (3m) then 2 -> 1 (1m)
        let matrices = matrices_from_distances(vec![
            vec![0.0, 5.0, 3.0],
            vec![5.0, 0.0, 1.0],
            vec![3.0, 1.0, 0.0],
        ]);

        assert_eq!(nearest_neighbor_order(&matrices), vec![0, 2, 1]);
    }

    #[test]
    fn test_full_permutation_when_all_pairs_finite() {
        let matrices = matrices_from_distances(vec![
            vec![0.0, 9.0, 4.0, 7.0],
            vec![9.0, 0.0, 3.0, 2.0],
            vec![4.0, 3.0, 0.0, 8.0],
            vec![7.0, 2.0, 8.0, 0.0],
        ]);

        let mut order = nearest_neighbor_order(&matrices);
        assert_eq!(order.len(), 4);
        assert_eq!(order[0], 0);

        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_ties_go_to_the_lower_index() {
        let matrices = matrices_from_distances(vec![
            vec![0.0, 2.0, 2.0],
            vec![2.0, 0.0, 2.0],
            vec![2.0, 2.0, 0.0],
        ]);

        assert_eq!(nearest_neighbor_order(&matrices), vec![0, 1, 2]);
    }

    #[test]
    fn test_stops_early_when_nothing_is_reachable() {
        let matrices = matrices_from_distances(vec![
            vec![0.0, INF, INF],
            vec![1.0, 0.0, 1.0],
            vec![1.0, 1.0, 0.0],
        ]);

        assert_eq!(nearest_neighbor_order(&matrices), vec![0]);
    }

    #[test]
    fn test_stops_early_mid_walk() {
        // 0 reaches 2, but nothing is reachable from 2; 1 and 3 are dropped.
        let matrices = matrices_from_distances(vec![
            vec![0.0, INF, 4.0, INF],
            vec![1.0, 0.0, 1.0, 1.0],
            vec![INF, INF, 0.0, INF],
            vec![1.0, 1.0, 1.0, 0.0],
        ]);

        assert_eq!(nearest_neighbor_order(&matrices), vec![0, 2]);
    }

    #[test]
    fn test_routes_around_a_single_infinite_edge() {
        // 0 -> 1 is missing, but 1 is still reached through 2.
        let matrices = matrices_from_distances(vec![
            vec![0.0, INF, 3.0],
            vec![5.0, 0.0, 1.0],
            vec![3.0, 1.0, 0.0],
        ]);

        assert_eq!(nearest_neighbor_order(&matrices), vec![0, 2, 1]);
    }

    #[test]
    fn test_order_is_deterministic() {
        let matrices = matrices_from_distances(vec![
            vec![0.0, 6.0, 2.0, 6.0],
            vec![6.0, 0.0, 5.0, 1.0],
            vec![2.0, 5.0, 0.0, 9.0],
            vec![6.0, 1.0, 9.0, 0.0],
        ]);

        let first = nearest_neighbor_order(&matrices);
        let second = nearest_neighbor_order(&matrices);
        assert_eq!(first, second);
    }
}
