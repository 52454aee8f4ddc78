// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Lowering from [`graph_ir`] declarations to ONNX protobuf messages.
//!
//! The generated messages use the `tract_onnx::pb` types (prost-generated
//! from the upstream `onnx.proto`), so the byte layout is owned by the ONNX
//! specification. Only the logical content is decided here.

use graph_ir::{ElementType, ModelDef, NodeDef, TensorDecl};
use tract_onnx::pb;

/// ONNX IR version stamped into generated models.
///
/// This is the serialization-format version, independent of the operator-set
/// version carried by the `ModelDef`.
const IR_VERSION: i64 = 8;

/// Converts a validated model declaration into an ONNX `ModelProto`.
///
/// No timestamp, docstring, or environment-dependent field is populated, so
/// repeated conversions of the same model encode to identical bytes.
pub fn to_model_proto(model: &ModelDef) -> pb::ModelProto {
    let graph = &model.graph;

    let proto = pb::GraphProto {
        name: graph.name.clone(),
        input: graph.inputs.iter().map(value_info).collect(),
        output: graph.outputs.iter().map(value_info).collect(),
        node: graph.nodes.iter().map(node_proto).collect(),
        ..Default::default()
    };

    tracing::debug!(
        graph = %graph.name,
        nodes = proto.node.len(),
        "lowered graph to ONNX proto",
    );

    pb::ModelProto {
        ir_version: IR_VERSION,
        producer_name: model.producer.clone(),
        opset_import: vec![pb::OperatorSetIdProto {
            domain: String::new(),
            version: model.opset_version,
        }],
        graph: Some(proto),
        ..Default::default()
    }
}

/// Builds the `ValueInfoProto` for one declared tensor slot.
fn value_info(decl: &TensorDecl) -> pb::ValueInfoProto {
    pb::ValueInfoProto {
        name: decl.name.clone(),
        r#type: Some(tensor_type(decl)),
        ..Default::default()
    }
}

fn tensor_type(decl: &TensorDecl) -> pb::TypeProto {
    pb::TypeProto {
        value: Some(pb::type_proto::Value::TensorType(pb::type_proto::Tensor {
            elem_type: elem_type_code(decl.dtype),
            shape: Some(pb::TensorShapeProto {
                dim: decl
                    .shape
                    .dims()
                    .iter()
                    .map(|&d| pb::tensor_shape_proto::Dimension {
                        value: Some(pb::tensor_shape_proto::dimension::Value::DimValue(
                            d as i64,
                        )),
                        ..Default::default()
                    })
                    .collect(),
            }),
        })),
        ..Default::default()
    }
}

fn node_proto(node: &NodeDef) -> pb::NodeProto {
    pb::NodeProto {
        name: node.name.clone(),
        op_type: node.op.onnx_op_type().to_string(),
        input: node.inputs.clone(),
        output: node.outputs.clone(),
        ..Default::default()
    }
}

/// Maps a [`graph_ir::ElementType`] to its ONNX `TensorProto.DataType` code.
pub fn elem_type_code(dtype: ElementType) -> i32 {
    match dtype {
        ElementType::I32 => pb::tensor_proto::DataType::Int32 as i32,
        ElementType::I64 => pb::tensor_proto::DataType::Int64 as i32,
        ElementType::F32 => pb::tensor_proto::DataType::Float as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph_ir::{GraphDef, NodeDef, OpKind, Shape};

    fn sample_model() -> ModelDef {
        let graph = GraphDef::new(
            "pair_sum",
            vec![
                TensorDecl::new("x", ElementType::I32, Shape::matrix(1, 1)),
                TensorDecl::new("y", ElementType::I32, Shape::matrix(1, 1)),
            ],
            vec![NodeDef::new("add0", OpKind::Add, ["x", "y"], ["z"])],
            vec![TensorDecl::new("z", ElementType::I32, Shape::matrix(1, 1))],
        )
        .validate()
        .unwrap();
        ModelDef::new(graph, 12, "pair_sum.py")
    }

    #[test]
    fn test_model_header() {
        let proto = to_model_proto(&sample_model());
        assert_eq!(proto.ir_version, IR_VERSION);
        assert_eq!(proto.producer_name, "pair_sum.py");
        assert_eq!(proto.opset_import.len(), 1);
        assert_eq!(proto.opset_import[0].domain, "");
        assert_eq!(proto.opset_import[0].version, 12);
    }

    #[test]
    fn test_graph_structure() {
        let proto = to_model_proto(&sample_model());
        let graph = proto.graph.unwrap();
        assert_eq!(graph.name, "pair_sum");
        assert_eq!(graph.input.len(), 2);
        assert_eq!(graph.output.len(), 1);
        assert_eq!(graph.node.len(), 1);
        assert_eq!(graph.node[0].op_type, "Add");
        assert_eq!(graph.node[0].input, vec!["x", "y"]);
        assert_eq!(graph.node[0].output, vec!["z"]);
        // No initializers: fixtures declare slots only.
        assert!(graph.initializer.is_empty());
    }

    #[test]
    fn test_value_info_dims() {
        let decl = TensorDecl::new("q", ElementType::I32, Shape::matrix(1, 4));
        let info = value_info(&decl);
        let Some(pb::type_proto::Value::TensorType(t)) = info.r#type.unwrap().value else {
            panic!("expected tensor type");
        };
        assert_eq!(t.elem_type, pb::tensor_proto::DataType::Int32 as i32);
        let dims: Vec<i64> = t
            .shape
            .unwrap()
            .dim
            .into_iter()
            .map(|d| match d.value {
                Some(pb::tensor_shape_proto::dimension::Value::DimValue(v)) => v,
                other => panic!("expected concrete dim, got {other:?}"),
            })
            .collect();
        assert_eq!(dims, vec![1, 4]);
    }

    #[test]
    fn test_elem_type_codes() {
        // Codes from the ONNX TensorProto.DataType table.
        assert_eq!(elem_type_code(ElementType::F32), 1);
        assert_eq!(elem_type_code(ElementType::I32), 6);
        assert_eq!(elem_type_code(ElementType::I64), 7);
    }
}
