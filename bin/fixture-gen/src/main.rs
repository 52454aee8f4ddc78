// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # fixture-gen
//!
//! One-shot generator for the deterministic ONNX test fixtures consumed by
//! the downstream tensor-model evaluation engine.
//!
//! ## Usage
//! ```bash
//! # Writes int_types.onnx into the current directory.
//! fixture-gen
//! ```
//!
//! There are deliberately no flags, environment variables, or configuration
//! files: the artifacts' names, shapes, and dtypes are a contract with the
//! consumer and must not vary between runs.

use anyhow::Context;
use onnx_export::fixtures::int_types;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let path = Path::new(int_types::FILE_NAME);
    int_types::build_and_write(path)
        .with_context(|| format!("failed to generate '{}'", path.display()))?;

    Ok(())
}
