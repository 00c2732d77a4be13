//! InventoryEngine: a structural survey of the submitted project.
//!
//! Groups files into modules (directories holding `.tf` files), echoes the
//! parameter overrides it was given and flags trees that cannot describe a
//! Terraform configuration. It does not evaluate HCL.

use std::collections::BTreeMap;

use serde::Serialize;

use super::traits::{Analysis, AnalysisEngine, AnalysisRequest};
use crate::tracing::fields;
use crate::types::Diagnostic;
use crate::vfs::FileNode;

const TERRAFORM_EXT: &str = ".tf";

/// One directory that holds Terraform files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleSummary {
    /// Directory path, `""` for the root module.
    pub path: String,
    pub files: Vec<String>,
    pub bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryOutput {
    pub modules: Vec<ModuleSummary>,
    pub terraform_files: usize,
    pub other_files: usize,
    pub parameters: BTreeMap<String, String>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct InventoryEngine;

impl InventoryEngine {
    pub fn new() -> Self {
        Self
    }
}

fn is_terraform(file: &FileNode) -> bool {
    file.name().ends_with(TERRAFORM_EXT)
}

impl AnalysisEngine for InventoryEngine {
    type Output = InventoryOutput;

    fn analyze(&self, request: AnalysisRequest<'_>) -> Analysis<InventoryOutput> {
        let files = request.files.files();
        let mut diags = Vec::new();

        if files.is_empty() {
            tracing::warn!(prefix = fields::PREFIX_INVENTORY, "file tree is empty");
            diags.push(Diagnostic::warning(
                "No files",
                "The submitted file tree does not contain any files.",
            ));
        }

        let mut modules: Vec<ModuleSummary> = Vec::new();
        let mut other_files = 0;
        for file in &files {
            if !is_terraform(file) {
                other_files += 1;
                continue;
            }
            if file.contents().trim().is_empty() {
                diags.push(
                    Diagnostic::warning(
                        "Empty Terraform file",
                        format!("{} has no content.", file.path()),
                    )
                    .with_extra("file", file.path()),
                );
            }
            match modules.iter_mut().find(|m| m.path == file.dir()) {
                Some(module) => {
                    module.files.push(file.name().to_string());
                    module.bytes += file.contents().len();
                }
                None => modules.push(ModuleSummary {
                    path: file.dir().to_string(),
                    files: vec![file.name().to_string()],
                    bytes: file.contents().len(),
                }),
            }
        }

        for module in &modules {
            tracing::debug!(
                prefix = fields::PREFIX_INVENTORY,
                root = module.path.as_str(),
                files = module.files.len(),
                "module discovered"
            );
        }

        let terraform_files = files.len() - other_files;
        if !files.is_empty() && terraform_files == 0 {
            diags.push(Diagnostic::warning(
                "No Terraform files found",
                format!("None of the {} submitted files end in {TERRAFORM_EXT}.", files.len()),
            ));
        }

        let parameters = request
            .parameters
            .map(|p| p.clone().into_inner())
            .unwrap_or_default();

        tracing::info!(
            prefix = fields::PREFIX_INVENTORY,
            modules = modules.len(),
            terraform_files,
            parameters = parameters.len(),
            "inventory complete"
        );

        Analysis::new(
            Some(InventoryOutput {
                modules,
                terraform_files,
                other_files,
                parameters,
            }),
            diags,
        )
    }
}
