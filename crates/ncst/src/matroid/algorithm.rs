//! Maximum common independent set of two matroids via shortest augmenting paths.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use tracing::debug;

use crate::error::AlgorithmError;

use super::Matroid;

/// Largest set independent in both `m1` and `m2`.
///
/// Each round first adds every element that is free in both matroids, then
/// searches the exchange graph for a shortest path from an element free in `m1`
/// to one free in `m2` and flips membership along it. Elements are scanned in
/// ground-set order, so the result is deterministic.
pub fn find_intersection<E, M1, M2>(m1: &M1, m2: &M2) -> Result<BTreeSet<E>, AlgorithmError>
where
    E: Ord + Clone,
    M1: Matroid<E>,
    M2: Matroid<E>,
{
    if m1.elements() != m2.elements() {
        return Err(AlgorithmError::ElementsMismatch);
    }
    let ground = m1.elements();
    let mut current: BTreeSet<E> = BTreeSet::new();
    let mut rounds = 0usize;
    loop {
        rounds += 1;
        let mut circuits: Vec<(&E, Option<BTreeSet<E>>, Option<BTreeSet<E>>)> = Vec::new();
        let mut grew = false;
        let outside: Vec<&E> = ground.iter().filter(|x| !current.contains(*x)).collect();
        for x in outside {
            let mut candidate = current.clone();
            candidate.insert(x.clone());
            let c1 = m1.find_circuit(&candidate)?;
            let c2 = m2.find_circuit(&candidate)?;
            if c1.is_none() && c2.is_none() {
                current.insert(x.clone());
                grew = true;
            } else if !grew {
                circuits.push((x, c1, c2));
            }
        }
        if grew {
            continue;
        }
        match augmenting_path(&circuits) {
            Some(path) => {
                for (pos, e) in path.into_iter().enumerate() {
                    if pos % 2 == 0 {
                        current.insert(e);
                    } else {
                        current.remove(&e);
                    }
                }
                debug!(size = current.len(), rounds, "augmented");
            }
            None => {
                debug!(size = current.len(), rounds, "intersection maximal");
                return Ok(current);
            }
        }
    }
}

/// Shortest path `x0, y1, x1, ..., xk` through the exchange graph, where `x0` is
/// free in the first matroid and `xk` in the second.
///
/// Arcs: `y -> x` when `y` is in the first circuit of `x`, `x -> y` when `y` is
/// in the second.
fn augmenting_path<E: Ord + Clone>(
    circuits: &[(&E, Option<BTreeSet<E>>, Option<BTreeSet<E>>)],
) -> Option<Vec<E>> {
    let mut arcs: BTreeMap<&E, Vec<&E>> = BTreeMap::new();
    let mut sinks: BTreeSet<&E> = BTreeSet::new();
    let mut sources: Vec<&E> = Vec::new();
    for (x, c1, c2) in circuits {
        let x = *x;
        match c1 {
            Some(c) => {
                for y in c.iter().filter(|y| *y != x) {
                    arcs.entry(y).or_default().push(x);
                }
            }
            None => sources.push(x),
        }
        match c2 {
            Some(c) => {
                for y in c.iter().filter(|y| *y != x) {
                    arcs.entry(x).or_default().push(y);
                }
            }
            None => {
                sinks.insert(x);
            }
        }
    }
    let mut prev: BTreeMap<&E, Option<&E>> = BTreeMap::new();
    let mut queue: VecDeque<&E> = VecDeque::new();
    for &s in &sources {
        prev.insert(s, None);
        queue.push_back(s);
    }
    while let Some(u) = queue.pop_front() {
        if sinks.contains(u) {
            let mut path = vec![u.clone()];
            let mut cur = u;
            while let Some(Some(p)) = prev.get(cur) {
                path.push((*p).clone());
                cur = *p;
            }
            path.reverse();
            return Some(path);
        }
        for &w in arcs.get(u).into_iter().flatten() {
            if !prev.contains_key(w) {
                prev.insert(w, Some(u));
                queue.push_back(w);
            }
        }
    }
    None
}
