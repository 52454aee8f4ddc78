// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Graph declarations: an ordered node list plus declared inputs/outputs.
//!
//! # Type-State Pattern
//!
//! A graph transitions through states enforced at compile time:
//!
//! ```text
//! GraphDef<Draft>      — declared, not yet checked.
//!       │  .validate()
//!       ▼
//! GraphDef<Validated>  — names resolved, shapes inferred, ready to lower.
//! ```
//!
//! This prevents the ONNX lowering layer from ever receiving a graph with
//! dangling names or incompatible shapes. The transition consumes the old
//! state and returns the new one, so there is zero runtime cost — the marker
//! types are `PhantomData` (ZST).

use crate::{ElementType, GraphError, NodeDef, OpKind, Shape, TensorDecl};
use std::collections::HashMap;
use std::fmt;

// ── Type-state markers ─────────────────────────────────────────────

/// Marker: graph has been declared but not validated.
#[derive(Debug, Clone)]
pub struct Draft;

/// Marker: graph has been validated and is ready for lowering.
#[derive(Debug, Clone)]
pub struct Validated;

/// Sealed trait for graph states.
pub trait GraphState: fmt::Debug + Clone {}
impl GraphState for Draft {}
impl GraphState for Validated {}

// ── GraphDef ───────────────────────────────────────────────────────

/// A computation graph declared as an ordered sequence of nodes.
///
/// Execution order is declaration order: validation proves that every node's
/// inputs are satisfied by graph inputs or by outputs of earlier nodes, so a
/// single forward pass resolves the whole graph. The generic parameter `S`
/// encodes the validation state at compile time.
#[derive(Debug, Clone)]
pub struct GraphDef<S: GraphState = Draft> {
    /// Graph name (e.g., `"int_types_scoring"`).
    pub name: String,
    /// Ordered top-level input declarations.
    pub inputs: Vec<TensorDecl>,
    /// Ordered operation nodes.
    pub nodes: Vec<NodeDef>,
    /// Ordered output declarations.
    pub outputs: Vec<TensorDecl>,
    /// State marker (zero-sized, compile-time only).
    _state: std::marker::PhantomData<S>,
}

// ── Draft state ────────────────────────────────────────────────────

impl GraphDef<Draft> {
    /// Creates a new graph declaration in the `Draft` state.
    pub fn new(
        name: impl Into<String>,
        inputs: Vec<TensorDecl>,
        nodes: Vec<NodeDef>,
        outputs: Vec<TensorDecl>,
    ) -> Self {
        Self {
            name: name.into(),
            inputs,
            nodes,
            outputs,
            _state: std::marker::PhantomData,
        }
    }

    /// Validates the graph and transitions to the `Validated` state.
    ///
    /// # Checks
    /// - The graph has at least one node and one declared output.
    /// - Tensor names are unique across graph inputs and node outputs.
    /// - Every node input resolves to a graph input or an earlier node's
    ///   output (acyclic, single-pass resolvable).
    /// - Operator arity, element-type agreement, and shape compatibility
    ///   (matmul inner dimensions, broadcast rules for element-wise ops).
    /// - Every declared graph output is produced by some node, with the
    ///   inferred element type and shape matching the declaration.
    pub fn validate(self) -> Result<GraphDef<Validated>, GraphError> {
        if self.nodes.is_empty() {
            return Err(GraphError::InvalidGraph(
                "graph contains no nodes".into(),
            ));
        }
        if self.outputs.is_empty() {
            return Err(GraphError::InvalidGraph(
                "graph declares no outputs".into(),
            ));
        }

        // Known tensors: name -> (dtype, shape). Seeded with the graph
        // inputs, extended as each node's outputs are inferred.
        let mut known: HashMap<String, (ElementType, Shape)> = HashMap::new();
        for input in &self.inputs {
            if known
                .insert(input.name.clone(), (input.dtype, input.shape.clone()))
                .is_some()
            {
                return Err(GraphError::DuplicateTensor {
                    name: input.name.clone(),
                });
            }
        }

        for node in &self.nodes {
            let inferred = infer_node_output(node, &known)?;

            if node.outputs.len() != 1 {
                return Err(GraphError::InvalidNode {
                    node: node.name.clone(),
                    detail: format!("expected 1 output, got {}", node.outputs.len()),
                });
            }
            let produced = node.outputs[0].as_str();
            if known.contains_key(produced) {
                return Err(GraphError::DuplicateTensor {
                    name: produced.to_string(),
                });
            }
            known.insert(produced.to_string(), inferred);
        }

        // Every declared output must have been produced, with matching
        // element type and shape.
        for output in &self.outputs {
            let Some((dtype, shape)) = known.get(output.name.as_str()) else {
                return Err(GraphError::InvalidGraph(format!(
                    "declared output '{}' is never produced",
                    output.name
                )));
            };
            if *dtype != output.dtype {
                return Err(GraphError::InvalidGraph(format!(
                    "output '{}' declared as {} but nodes produce {}",
                    output.name, output.dtype, dtype
                )));
            }
            if shape != &output.shape {
                return Err(GraphError::InvalidGraph(format!(
                    "output '{}' declared with shape {} but nodes produce {}",
                    output.name, output.shape, shape
                )));
            }
        }

        tracing::debug!(
            graph = %self.name,
            nodes = self.nodes.len(),
            inputs = self.inputs.len(),
            outputs = self.outputs.len(),
            "graph validated",
        );

        Ok(GraphDef {
            name: self.name,
            inputs: self.inputs,
            nodes: self.nodes,
            outputs: self.outputs,
            _state: std::marker::PhantomData,
        })
    }
}

/// Resolves a node's operands against the known tensors and infers the
/// element type and shape of its single output.
fn infer_node_output(
    node: &NodeDef,
    known: &HashMap<String, (ElementType, Shape)>,
) -> Result<(ElementType, Shape), GraphError> {
    if node.inputs.len() != node.op.arity() {
        return Err(GraphError::InvalidNode {
            node: node.name.clone(),
            detail: format!(
                "{} expects {} inputs, got {}",
                node.op,
                node.op.arity(),
                node.inputs.len()
            ),
        });
    }

    let mut operands = Vec::with_capacity(node.inputs.len());
    for input in &node.inputs {
        let Some(entry) = known.get(input.as_str()) else {
            return Err(GraphError::UndeclaredInput {
                node: node.name.clone(),
                name: input.clone(),
            });
        };
        operands.push(entry);
    }

    let (lhs_dtype, lhs_shape) = operands[0];
    let (rhs_dtype, rhs_shape) = operands[1];

    if lhs_dtype != rhs_dtype {
        return Err(GraphError::InvalidNode {
            node: node.name.clone(),
            detail: format!("operand element types differ: {lhs_dtype} vs {rhs_dtype}"),
        });
    }

    let shape = match node.op {
        OpKind::MatMul => lhs_shape.matmul_with(rhs_shape).ok_or_else(|| {
            GraphError::InvalidNode {
                node: node.name.clone(),
                detail: format!("shapes {lhs_shape} and {rhs_shape} are not matmul-compatible"),
            }
        })?,
        OpKind::Add => lhs_shape.broadcast_with(rhs_shape).ok_or_else(|| {
            GraphError::InvalidNode {
                node: node.name.clone(),
                detail: format!("shapes {lhs_shape} and {rhs_shape} do not broadcast"),
            }
        })?,
    };

    Ok((*lhs_dtype, shape))
}

// ── Validated state ────────────────────────────────────────────────

impl GraphDef<Validated> {
    /// Returns the number of operation nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns an iterator over the nodes in execution order.
    pub fn iter_nodes(&self) -> impl Iterator<Item = &NodeDef> {
        self.nodes.iter()
    }

    /// Returns a summary string describing the graph.
    pub fn summary(&self) -> String {
        let input_bytes: usize = self.inputs.iter().map(TensorDecl::size_bytes).sum();
        format!(
            "Graph '{}': {} nodes, {} inputs ({} B), {} outputs",
            self.name,
            self.nodes.len(),
            self.inputs.len(),
            input_bytes,
            self.outputs.len(),
        )
    }
}

// ── Shared implementations ─────────────────────────────────────────

impl<S: GraphState> fmt::Display for GraphDef<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GraphDef '{}' ({} nodes):", self.name, self.nodes.len())?;
        for input in &self.inputs {
            writeln!(f, "  in  {input}")?;
        }
        for node in &self.nodes {
            writeln!(f, "  op  {}", node.summary())?;
        }
        for output in &self.outputs {
            writeln!(f, "  out {output}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: the MatMul → Add chain the fixtures use.
    fn two_node_graph() -> GraphDef<Draft> {
        GraphDef::new(
            "scoring",
            vec![
                TensorDecl::new("q", ElementType::I32, Shape::matrix(1, 4)),
                TensorDecl::new("a", ElementType::I32, Shape::matrix(4, 1)),
                TensorDecl::new("b", ElementType::I32, Shape::matrix(1, 1)),
            ],
            vec![
                NodeDef::new("mm", OpKind::MatMul, ["q", "a"], ["mm_out"]),
                NodeDef::new("add", OpKind::Add, ["mm_out", "b"], ["score"]),
            ],
            vec![TensorDecl::new(
                "score",
                ElementType::I32,
                Shape::matrix(1, 1),
            )],
        )
    }

    #[test]
    fn test_validate_ok() {
        let validated = two_node_graph().validate().unwrap();
        assert_eq!(validated.num_nodes(), 2);
    }

    #[test]
    fn test_validate_empty() {
        let graph = GraphDef::new("empty", vec![], vec![], vec![]);
        assert!(matches!(
            graph.validate(),
            Err(GraphError::InvalidGraph(_))
        ));
    }

    #[test]
    fn test_undeclared_input() {
        let mut graph = two_node_graph();
        graph.nodes[0].inputs[1] = "missing".into();
        assert!(matches!(
            graph.validate(),
            Err(GraphError::UndeclaredInput { ref node, ref name })
                if node == "mm" && name == "missing"
        ));
    }

    #[test]
    fn test_node_before_producer_is_rejected() {
        // Same nodes, declared in the wrong order: 'add' consumes 'mm_out'
        // before 'mm' produces it, so single-pass resolution must fail.
        let mut graph = two_node_graph();
        graph.nodes.swap(0, 1);
        assert!(matches!(
            graph.validate(),
            Err(GraphError::UndeclaredInput { .. })
        ));
    }

    #[test]
    fn test_duplicate_input_name() {
        let mut graph = two_node_graph();
        graph.inputs[1].name = "q".into();
        assert!(matches!(
            graph.validate(),
            Err(GraphError::DuplicateTensor { ref name }) if name == "q"
        ));
    }

    #[test]
    fn test_node_output_shadowing_input_is_rejected() {
        let mut graph = two_node_graph();
        graph.nodes[0].outputs[0] = "b".into();
        assert!(matches!(
            graph.validate(),
            Err(GraphError::DuplicateTensor { ref name }) if name == "b"
        ));
    }

    #[test]
    fn test_matmul_shape_mismatch() {
        let mut graph = two_node_graph();
        graph.inputs[1].shape = Shape::matrix(3, 1); // inner dim 4 != 3
        assert!(matches!(
            graph.validate(),
            Err(GraphError::InvalidNode { ref node, .. }) if node == "mm"
        ));
    }

    #[test]
    fn test_add_broadcast_mismatch() {
        // Widen the matmul result to [2, 3] so a [3, 2] bias cannot broadcast.
        let mut graph = two_node_graph();
        graph.inputs[0].shape = Shape::matrix(2, 4);
        graph.inputs[1].shape = Shape::matrix(4, 3);
        graph.inputs[2].shape = Shape::matrix(3, 2);
        assert!(matches!(
            graph.validate(),
            Err(GraphError::InvalidNode { ref node, .. }) if node == "add"
        ));
    }

    #[test]
    fn test_dtype_mismatch() {
        let mut graph = two_node_graph();
        graph.inputs[2].dtype = ElementType::F32;
        assert!(matches!(
            graph.validate(),
            Err(GraphError::InvalidNode { ref node, .. }) if node == "add"
        ));
    }

    #[test]
    fn test_unproduced_output() {
        let mut graph = two_node_graph();
        graph.outputs[0].name = "nothing".into();
        assert!(matches!(
            graph.validate(),
            Err(GraphError::InvalidGraph(_))
        ));
    }

    #[test]
    fn test_output_shape_disagreement() {
        let mut graph = two_node_graph();
        graph.outputs[0].shape = Shape::matrix(2, 2);
        assert!(matches!(
            graph.validate(),
            Err(GraphError::InvalidGraph(_))
        ));
    }

    #[test]
    fn test_summary() {
        let validated = two_node_graph().validate().unwrap();
        let s = validated.summary();
        assert!(s.contains("scoring"));
        assert!(s.contains("2 nodes"));
    }

    #[test]
    fn test_display() {
        let graph = two_node_graph();
        let display = format!("{graph}");
        assert!(display.contains("mm MatMul(q, a) -> mm_out"));
        assert!(display.contains("out score: i32[1, 1]"));
    }
}
