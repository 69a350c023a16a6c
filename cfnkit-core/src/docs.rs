//! Docs - Markdown documentation for resource types and properties

use crate::schema::{AdditionalProperties, PropertySchema, ResourceSchema, SchemaError};

/// Human readable type of a property (`String`, `List<String>`,
/// `PortMapping`, `Map<String>`, `Json`)
pub fn type_label(prop: &PropertySchema) -> String {
    if let Some(reference) = &prop.reference {
        return reference
            .rsplit('/')
            .next()
            .unwrap_or(reference)
            .to_string();
    }

    let Some(schema_type) = prop.schema_type.as_ref() else {
        return if !prop.properties.is_empty() {
            "Object".to_string()
        } else if prop.enum_values.is_some() || prop.pattern.is_some() {
            "String".to_string()
        } else {
            "Json".to_string()
        };
    };

    match schema_type.as_single() {
        Some("string") => "String".to_string(),
        Some("integer") => "Integer".to_string(),
        Some("number") => "Number".to_string(),
        Some("boolean") => "Boolean".to_string(),
        Some("array") => match &prop.items {
            Some(items) => format!("List<{}>", type_label(items)),
            None => "List<Json>".to_string(),
        },
        Some("object") if !prop.properties.is_empty() => "Object".to_string(),
        Some("object") => {
            let values = prop.pattern_properties.values().next().or(
                match &prop.additional_properties {
                    Some(AdditionalProperties::Schema(schema)) => Some(schema.as_ref()),
                    _ => None,
                },
            );
            match values {
                Some(values) => format!("Map<{}>", type_label(values)),
                None => "Json".to_string(),
            }
        }
        _ => "Json".to_string(),
    }
}

fn format_bounds(min: Option<String>, max: Option<String>) -> Option<String> {
    match (min, max) {
        (Some(min), Some(max)) if min == max => Some(format!("exactly {}", min)),
        (Some(min), Some(max)) => Some(format!("{} to {}", min, max)),
        (Some(min), None) => Some(format!("at least {}", min)),
        (None, Some(max)) => Some(format!("at most {}", max)),
        (None, None) => None,
    }
}

/// One line per constraint the property declares
pub fn constraint_summary(prop: &PropertySchema) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(values) = prop.enum_strings() {
        lines.push(format!("Allowed values: {}", values.join(" | ")));
    }
    if let Some(pattern) = &prop.pattern {
        lines.push(format!("Pattern: `{}`", pattern));
    }
    if let Some(length) = format_bounds(
        prop.min_length.map(|n| n.to_string()),
        prop.max_length.map(|n| n.to_string()),
    ) {
        lines.push(format!("Length: {}", length));
    }
    if let Some(range) = format_bounds(
        prop.minimum.map(|n| n.to_string()),
        prop.maximum.map(|n| n.to_string()),
    ) {
        lines.push(format!("Value: {}", range));
    }
    if let Some(items) = format_bounds(
        prop.min_items.map(|n| n.to_string()),
        prop.max_items.map(|n| n.to_string()),
    ) {
        lines.push(format!("Items: {}", items));
    }
    if prop.unique_items {
        lines.push("Items must be unique".to_string());
    }

    lines
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("").trim()
}

/// Overview of a resource type with its top-level properties
pub fn resource_doc(schema: &ResourceSchema) -> String {
    let mut content = format!("## {}\n\n", schema.type_name);

    if let Some(description) = &schema.description {
        content.push_str(description.trim());
        content.push_str("\n\n");
    }
    if let Some(url) = &schema.documentation_url {
        content.push_str(&format!("[Documentation]({})\n\n", url));
    }

    content.push_str("### Properties\n\n");
    for (name, prop) in &schema.properties {
        let marker = if schema.is_read_only(name) {
            " *(read-only)*"
        } else if schema.is_required(name) {
            " **(required)**"
        } else {
            ""
        };
        let description = prop.description.as_deref().map(first_line).unwrap_or("");
        let summary = format!("{}{}", description, marker);
        content.push_str(&format!(
            "- `{}` (`{}`): {}\n",
            name,
            type_label(prop),
            summary.trim()
        ));
    }

    content
}

/// Details of one property, addressed by dotted path (`Spec.Listeners`)
pub fn property_doc(schema: &ResourceSchema, path: &str) -> Result<String, SchemaError> {
    let (prop, required) = schema.lookup(path)?;
    let (_, resolved) = schema.resolve(prop)?;

    let description = prop
        .description
        .as_deref()
        .or(resolved.description.as_deref())
        .unwrap_or("No description");

    let mut content = format!(
        "## {}.{}\n\n{}\n\n- **Type**: {}\n- **Required**: {}\n",
        schema.type_name,
        path,
        description.trim(),
        type_label(prop),
        if required { "Yes" } else { "No" }
    );

    if schema.is_read_only(path) {
        content.push_str("- **Read-only**: Yes\n");
    }
    let update = if schema.is_create_only(path) {
        "Replacement"
    } else {
        "No interruption"
    };
    content.push_str(&format!("- **Update requires**: {}\n", update));

    for line in constraint_summary(resolved) {
        content.push_str(&format!("- {}\n", line));
    }

    Ok(content)
}
