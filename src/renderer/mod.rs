//! Interface rendering.
//!
//! Pure, single-pass composition of the final declaration text from class
//! metadata and the ordered selection. Rendering never fails for a
//! well-formed model; the selector already guarantees only renderable
//! descriptors reach this stage.

use crate::config::Config;
use crate::model::ClassModel;
use crate::selector::Selection;

/// Import that defines the generated-code tag, always emitted first.
const METADATA_IMPORT: &str = "System.CodeDom.Compiler";

const INDENT: &str = "    ";
const MEMBER_INDENT: &str = "        ";

/// Compose the complete interface declaration text for one class.
///
/// Output shape, top to bottom: auto-generated banner, import lines,
/// namespace wrapper, optional class doc block, generated-code tag,
/// `public partial interface I<Name>` with verbatim generics and
/// constraints, then one block per selected member followed by a separator
/// line, and the closing braces.
pub fn render_interface(model: &ClassModel, selection: &Selection, config: &Config) -> String {
    let mut out = String::new();

    out.push_str(&banner());
    out.push('\n');

    for import in ordered_imports(model, selection, config) {
        out.push_str("using ");
        out.push_str(&import);
        out.push_str(";\n");
    }
    out.push('\n');

    out.push_str("namespace ");
    out.push_str(&model.namespace_path());
    out.push_str("\n{\n");

    if let Some(doc) = model.doc.as_deref() {
        out.push_str(&reindent_block(doc, INDENT));
        out.push('\n');
    }

    out.push_str(&format!(
        "{}[GeneratedCode(\"{}\", \"{}\")]\n",
        INDENT, config.generator_name, config.generator_version
    ));

    let constraints = model.constraint_clauses();
    out.push_str(INDENT);
    out.push_str("public partial interface ");
    out.push_str(&model.interface_name());
    out.push_str(&model.generic_suffix());
    if !constraints.is_empty() {
        out.push(' ');
        out.push_str(&constraints);
    }
    out.push('\n');

    out.push_str(INDENT);
    out.push_str("{\n");

    for member in &selection.members {
        if let Some(doc) = member.doc.as_deref() {
            out.push_str(&reindent_block(doc, MEMBER_INDENT));
            out.push('\n');
        }
        out.push_str(MEMBER_INDENT);
        out.push_str(&member.signature);
        out.push('\n');
        // One separator line after every member, including the last.
        out.push_str(MEMBER_INDENT);
        out.push('\n');
    }

    out.push_str(INDENT);
    out.push_str("}\n}\n");

    out
}

/// Fixed marker banner for downstream tooling and version control.
fn banner() -> String {
    let rule = format!("//{}", "-".repeat(98));
    format!(
        "{rule}\n\
         // <auto-generated>\n\
         //     This code was generated by a tool.\n\
         //\n\
         //     Changes to this file may cause incorrect behavior and will be lost if the code is regenerated.\n\
         // </auto-generated>\n\
         {rule}\n"
    )
}

/// Aggregate import set: metadata import, marker import, the class's own
/// imports in declaration order, then selector-required namespaces not
/// already present. Each namespace appears at most once.
fn ordered_imports(model: &ClassModel, selection: &Selection, config: &Config) -> Vec<String> {
    let mut imports = vec![METADATA_IMPORT.to_string(), config.marker_import.clone()];
    for import in model.imports.iter().chain(&selection.required_imports) {
        if !imports.contains(import) {
            imports.push(import.clone());
        }
    }
    imports
}

/// Copy a documentation block opaquely: trim each line, drop blank lines,
/// and re-indent to the insertion column. Comment syntax is not
/// interpreted.
fn reindent_block(block: &str, indent: &str) -> String {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("{}{}", indent, line))
        .collect::<Vec<_>>()
        .join("\n")
}
