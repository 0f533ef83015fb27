//! Referential-integrity-respecting entity ordering.
//!
//! For every required (non-self) relation, the referenced parent entity is
//! visited before the referencing child, so consumers can build fixtures
//! and other order-sensitive artifacts safely. Optional relations and
//! self-edges impose no ordering constraint.

use std::collections::{BTreeSet, VecDeque};

use indexmap::IndexMap;
use modelgen_ir::{Entity, Schema};

use crate::error::{Error, Result};

/// Compute a dependency-respecting order over the schema.
///
/// A topological sort over the required-relation edges, seeded in schema
/// order so the result is deterministic. A cycle of required relations is
/// reported as [`Error::RelationCycle`] naming the entities on the cycle.
pub fn dependency_order(schema: &Schema) -> Result<Vec<&Entity>> {
    let index: IndexMap<&str, usize> = schema
        .entities
        .iter()
        .enumerate()
        .map(|(i, e)| (e.name.as_str(), i))
        .collect();

    let n = schema.entities.len();
    let mut parents: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); n];
    for (parent_idx, parent) in schema.entities.iter().enumerate() {
        for child in parent.has_many.iter().chain(&parent.has_one) {
            // Self-edges are exempt; unknown targets are a lint error,
            // not a scheduling concern.
            if child == &parent.name {
                continue;
            }
            if let Some(&child_idx) = index.get(child.as_str()) {
                parents[child_idx].insert(parent_idx);
            }
        }
    }

    let mut in_degree: Vec<usize> = parents.iter().map(BTreeSet::len).collect();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (child_idx, parent_set) in parents.iter().enumerate() {
        for &parent_idx in parent_set {
            children[parent_idx].push(child_idx);
        }
    }

    let mut queue: VecDeque<usize> = (0..n).filter(|&i| in_degree[i] == 0).collect();
    let mut order = Vec::with_capacity(n);
    while let Some(current) = queue.pop_front() {
        order.push(&schema.entities[current]);
        for &child in &children[current] {
            in_degree[child] -= 1;
            if in_degree[child] == 0 {
                queue.push_back(child);
            }
        }
    }

    if order.len() < n {
        let leftover: BTreeSet<usize> = (0..n).filter(|&i| in_degree[i] > 0).collect();
        return Err(Error::RelationCycle {
            entities: cycle_core(&parents, &children, leftover)
                .into_iter()
                .map(|i| schema.entities[i].name.clone())
                .collect(),
        });
    }
    Ok(order)
}

/// Visit every entity once, parents before children.
pub fn for_each_in_dependency_order<F>(schema: &Schema, mut visit: F) -> Result<()>
where
    F: FnMut(&Entity),
{
    for entity in dependency_order(schema)? {
        visit(entity);
    }
    Ok(())
}

/// Strip leftover nodes that merely hang off a cycle, so the diagnostic
/// names only entities actually participating in one. A node is kept while
/// it has both a parent and a child inside the remaining set.
fn cycle_core(
    parents: &[BTreeSet<usize>],
    children: &[Vec<usize>],
    mut leftover: BTreeSet<usize>,
) -> BTreeSet<usize> {
    loop {
        let pruned: BTreeSet<usize> = leftover
            .iter()
            .copied()
            .filter(|&i| {
                parents[i].iter().any(|p| leftover.contains(p))
                    && children[i].iter().any(|c| leftover.contains(c))
            })
            .collect();
        if pruned.len() == leftover.len() || pruned.is_empty() {
            return leftover;
        }
        leftover = pruned;
    }
}
