use std::path::Path;

use tabled::builder::Builder;
use tabled::settings::Style;
use termtree::Tree;

use crate::terraform::{Resource, StateDocument, address};

const MANAGED_MODE: &str = "managed";

/// Summary panel printed above the resource tree.
pub fn state_header(state: &StateDocument, state_path: &Path) -> String {
    let mut builder = Builder::default();
    builder.push_record([
        "Terraform Version".to_string(),
        state.terraform_version.clone(),
    ]);
    builder.push_record([
        "Processed State file".to_string(),
        state_path.display().to_string(),
    ]);

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// Tree of instance addresses for managed resources. Data sources are skipped.
pub fn resource_tree(resources: &[&Resource]) -> Tree<String> {
    let leaves = resources
        .iter()
        .filter(|resource| resource.mode == MANAGED_MODE)
        .flat_map(|resource| {
            resource
                .instances
                .iter()
                .map(move |instance| Tree::new(address(resource, instance)))
        });

    Tree::new("Resources".to_string()).with_leaves(leaves)
}
