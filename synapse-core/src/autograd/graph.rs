// src/autograd/graph.rs

use crate::error::SynapseError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use std::collections::HashSet;
use std::sync::RwLock;

/// Identity of a graph node: the address of its shared `TensorData` lock.
///
/// Two `Tensor` handles refer to the same node exactly when they clone the same `Arc`.
pub type NodeId = *const RwLock<TensorData>;

/// Builds a post-order topological sort of the graph reachable from `root`.
///
/// Every node appears once and after all of its parents, so iterating the
/// result in reverse visits each node only after all of its consumers.
/// Parents that do not require gradients are not graph nodes and are skipped.
///
/// The traversal is iterative, so deep chains of ops cannot overflow the stack.
///
/// # Errors
/// * `GraphReleased` if any reachable node was already swept by a previous backward pass.
pub fn topological_sort(root: &Tensor) -> Result<Vec<Tensor>, SynapseError> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted: Vec<Tensor> = Vec::new();
    // (node, parents already pushed)
    let mut stack: Vec<(Tensor, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }

        let parents = {
            let guard = node.read_data();
            if guard.graph_released {
                return Err(SynapseError::GraphReleased);
            }
            match &guard.grad_fn {
                Some(grad_fn) => grad_fn.inputs(),
                None => Vec::new(),
            }
        };
        stack.push((node, true));
        // Reverse keeps operand order in the output for sibling parents.
        for parent in parents.into_iter().rev() {
            if parent.requires_grad() && !visited.contains(&parent.node_id()) {
                stack.push((parent, false));
            }
        }
    }

    Ok(sorted)
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
