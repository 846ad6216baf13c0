//! Clauset-Newman-Moore greedy modularity.
//!
//! Every node starts in its own community. At each step the two adjacent
//! communities whose merge raises the modularity `Q` the most are merged;
//! this stops once every merge would lower `Q`. The partition with the
//! highest `Q` seen is returned.
use crate::backend::{AlgorithmError, Communities};
use std::collections::BTreeMap;

/// `neighbors` holds sorted neighbour lists without self-loops, `ids` the
/// node id of every index.
pub fn greedy_modularity(neighbors: &[Vec<usize>], ids: &[i64]) -> Result<Communities, AlgorithmError> {
    let n = neighbors.len();
    if n == 0 {
        return Err(AlgorithmError::EmptyGraph);
    }
    let degree_sum: usize = neighbors.iter().map(|nbrs| nbrs.len()).sum();
    if degree_sum == 0 {
        return Err(AlgorithmError::NoEdges);
    }
    let two_m = degree_sum as f64;
    // a[i]: fraction of edge ends attached to community i.
    let mut a: Vec<f64> = neighbors.iter().map(|nbrs| nbrs.len() as f64 / two_m).collect();
    // dq[i][j]: change in Q from merging adjacent communities i and j.
    let mut dq: Vec<BTreeMap<usize, f64>> = neighbors
        .iter()
        .enumerate()
        .map(|(i, nbrs)| {
            nbrs.iter()
                .map(|&j| (j, 2. * (1. / two_m - a[i] * a[j])))
                .collect()
        })
        .collect();
    let mut members: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();
    let mut q: f64 = -a.iter().map(|x| x * x).sum::<f64>();
    let mut best = (q, members.clone());
    let mut merges = 0;
    while let Some((i, j, delta)) = best_merge(&dq) {
        if delta < 0. {
            break;
        }
        let row_i = std::mem::take(&mut dq[i]);
        let row_j = std::mem::take(&mut dq[j]);
        let mut merged = BTreeMap::new();
        for (&k, &v) in row_i.iter().filter(|&(&k, _)| k != j) {
            let value = match row_j.get(&k) {
                Some(&w) => v + w,
                None => v - 2. * a[j] * a[k],
            };
            merged.insert(k, value);
        }
        for (&k, &w) in row_j.iter().filter(|&(&k, _)| k != i) {
            if !row_i.contains_key(&k) {
                merged.insert(k, w - 2. * a[i] * a[k]);
            }
        }
        for (&k, &v) in merged.iter() {
            dq[k].remove(&j);
            dq[k].insert(i, v);
        }
        dq[i] = merged;
        a[i] += a[j];
        a[j] = 0.;
        let moved = std::mem::take(&mut members[j]);
        members[i].extend(moved);
        q += delta;
        merges += 1;
        if q > best.0 {
            best = (q, members.clone());
        }
    }
    trace!("{} merges, best Q {}", merges, best.0);
    let (modularity, partition) = best;
    let mut members: Vec<Vec<i64>> = partition
        .into_iter()
        .filter(|community| !community.is_empty())
        .map(|community| {
            let mut community: Vec<_> = community.into_iter().map(|idx| ids[idx]).collect();
            community.sort_unstable();
            community
        })
        .collect();
    members.sort();
    Ok(Communities {
        modularity,
        members,
    })
}

/// Largest entry of `dq`, the first one in (i, j) order on ties.
fn best_merge(dq: &[BTreeMap<usize, f64>]) -> Option<(usize, usize, f64)> {
    dq.iter()
        .enumerate()
        .flat_map(|(i, row)| {
            row.iter()
                .filter(move |&(&j, _)| i < j)
                .map(move |(&j, &v)| (i, j, v))
        })
        .fold(None, |best, (i, j, v)| match best {
            Some((_, _, w)) if w >= v => best,
            _ => Some((i, j, v)),
        })
}
