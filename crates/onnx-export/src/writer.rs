// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Serialization and the single file write.

use crate::{to_model_proto, ExportError};
use graph_ir::ModelDef;
use prost::Message;
use std::path::Path;

/// Encodes a model declaration into canonical ONNX protobuf bytes.
pub fn encode(model: &ModelDef) -> Vec<u8> {
    to_model_proto(model).encode_to_vec()
}

/// Writes a model declaration to `path`, creating or overwriting the file.
///
/// The file handle is acquired and released inside the single
/// [`std::fs::write`] call, on all exit paths including write failure.
///
/// # Errors
/// Returns [`ExportError::Write`] if the destination is not writable.
pub fn write(model: &ModelDef, path: &Path) -> Result<(), ExportError> {
    let bytes = encode(model);
    std::fs::write(path, &bytes).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        bytes = bytes.len(),
        graph = %model.graph.name,
        "wrote ONNX fixture",
    );
    Ok(())
}
