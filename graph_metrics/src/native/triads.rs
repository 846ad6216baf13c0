/// Edges among the neighbours of `node`. Neighbour lists must be sorted.
pub fn closed_triads(neighbors: &[Vec<usize>], node: usize) -> u64 {
    let nbrs = &neighbors[node];
    nbrs.iter()
        .enumerate()
        .map(|(i, &u)| {
            nbrs[i + 1..]
                .iter()
                .filter(|&&w| neighbors[u].binary_search(&w).is_ok())
                .count() as u64
        })
        .sum()
}

/// Closed triads summed over the first `sample` nodes of `order`, divided
/// by three. With every node sampled this is the number of triangles.
pub fn triad_count(neighbors: &[Vec<usize>], order: &[usize], sample: usize) -> u64 {
    order
        .iter()
        .take(sample)
        .map(|&node| closed_triads(neighbors, node))
        .sum::<u64>()
        / 3
}
