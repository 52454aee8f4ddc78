// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # onnx-export
//!
//! Lowers [`graph_ir`] model declarations into canonical ONNX protobuf
//! bytes and writes them to disk.
//!
//! This crate provides:
//! - [`to_model_proto`] — conversion of a [`graph_ir::ModelDef`] into a
//!   `tract_onnx::pb::ModelProto`.
//! - [`encode`] / [`write`] — deterministic serialization (no timestamps,
//!   no environment-dependent fields) and the single file write.
//! - [`fixtures`] — the concrete fixture definitions this repository
//!   exists to produce.
//!
//! # Determinism
//! Encoding the same model twice yields byte-identical output: field order
//! is fixed by the protobuf schema and no populated field depends on the
//! environment. The round-trip tests assert this.

mod error;
pub mod fixtures;
mod proto;
mod writer;

pub use error::ExportError;
pub use proto::to_model_proto;
pub use writer::{encode, write};
