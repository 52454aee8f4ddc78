// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for ONNX export.

use std::path::PathBuf;

/// Errors that can occur when exporting a model to an ONNX file.
///
/// Both variants are fatal: the generator has no retry or fallback, it
/// surfaces the underlying cause and terminates.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The model declaration failed validation.
    #[error("graph construction failed: {0}")]
    Graph(#[from] graph_ir::GraphError),

    /// The destination file could not be written.
    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
