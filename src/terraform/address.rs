use super::state::{Resource, ResourceInstance};

fn index_suffix(instance: &ResourceInstance) -> String {
    if instance.index_key.trim().is_empty() {
        String::new()
    } else {
        format!("[\"{}\"]", instance.index_key)
    }
}

/// Fully-qualified address of one instance, e.g. `module.a.null_resource.b["0"]`.
pub fn address(resource: &Resource, instance: &ResourceInstance) -> String {
    format!("{}{}", resource, index_suffix(instance))
}

/// Renders one `moved` block per instance, relocating `resource` to
/// `new_location`.
///
/// `new_location` is used verbatim. A resource without instances yields an
/// empty string.
pub fn generate_moved_statement(resource: &Resource, new_location: &str) -> String {
    resource
        .instances
        .iter()
        .map(|instance| {
            let suffix = index_suffix(instance);
            format!(
                "moved {{\n  from = {}{}\n  to   = {}{}\n}}\n\n",
                resource, suffix, new_location, suffix
            )
        })
        .collect()
}
