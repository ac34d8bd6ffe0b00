//! Type page.

use refdoc_catalog::{Member, MemberKind, TypeId, TypeRef, TypeSymbol};
use refdoc_markup::{MarkupWriter, TableBuilder, escape_html};

use super::RenderContext;
use super::links::{parameters_html, type_ref_html};
use crate::error::PageError;

const DEFAULT_HEADING: u8 = 3;

/// Heading, documentation, hierarchy, nested types and one summary table per
/// member kind.
pub(super) fn render(
    ctx: &RenderContext<'_>,
    from: &str,
    id: TypeId,
    w: &mut MarkupWriter,
) -> Result<(), PageError> {
    let symbol = ctx.catalog.type_symbol(id);

    let title = format!("{} {}", escape_html(&symbol.name), symbol.kind.label());
    w.heading(&title, DEFAULT_HEADING);
    if let Some(doc) = symbol.documentation.as_deref().filter(|d| !d.is_empty()) {
        w.paragraph(&escape_html(doc));
    }

    if !symbol.bases.is_empty() {
        w.heading("Hierarchy:", DEFAULT_HEADING + 1);
        for base in &symbol.bases {
            w.paragraph(&type_ref_html(ctx, from, base, true));
        }
    }

    if let Some(table) = nested_table(ctx, from, &symbol.nested)? {
        table.render(w)?;
    }

    for kind in MemberKind::ALL {
        if let Some(table) = member_table(ctx, from, symbol, kind)? {
            table.render(w)?;
        }
    }
    Ok(())
}

fn nested_table(
    ctx: &RenderContext<'_>,
    from: &str,
    nested: &[TypeRef],
) -> Result<Option<TableBuilder>, PageError> {
    if nested.is_empty() {
        return Ok(None);
    }

    let mut table = TableBuilder::new("Nested Types", ["Type", "Description"]);
    for type_ref in nested {
        let doc = ctx
            .catalog
            .resolve(type_ref)
            .ok()
            .and_then(|id| ctx.catalog.type_symbol(id).documentation.as_deref())
            .map(escape_html)
            .unwrap_or_default();
        table.row(vec![type_ref_html(ctx, from, type_ref, false), doc])?;
    }
    Ok(Some(table))
}

fn member_table(
    ctx: &RenderContext<'_>,
    from: &str,
    symbol: &TypeSymbol,
    kind: MemberKind,
) -> Result<Option<TableBuilder>, PageError> {
    let mut members: Vec<&Member> = symbol
        .members
        .iter()
        .filter(|member| member.kind == kind)
        .collect();
    if members.is_empty() {
        return Ok(None);
    }
    members.sort_by(|a, b| a.name.cmp(&b.name));

    let columns: &[&str] = match kind {
        MemberKind::Constructor => &["Signature", "Description"],
        MemberKind::Method => &["Return Type", "Description"],
        MemberKind::Property | MemberKind::Field | MemberKind::Event => {
            &["Type", "Name", "Description"]
        }
    };
    let mut table = TableBuilder::new(kind.plural(), columns.iter().copied());

    for member in members {
        let doc = member.documentation.as_deref().map(escape_html).unwrap_or_default();
        let row = match kind {
            MemberKind::Constructor => {
                let signature = format!(
                    "{} ({})",
                    escape_html(&symbol.name),
                    parameters_html(ctx, from, &member.parameters)
                );
                vec![signature, doc]
            }
            MemberKind::Method => {
                let mut desc = format!(
                    "{} ({})",
                    escape_html(&member.name),
                    parameters_html(ctx, from, &member.parameters)
                );
                if !doc.is_empty() {
                    desc.push_str("<br>");
                    desc.push_str(&doc);
                }
                let returns = member.type_ref.as_ref().map_or_else(
                    || "void".to_owned(),
                    |t| type_ref_html(ctx, from, t, false),
                );
                vec![returns, desc]
            }
            MemberKind::Property | MemberKind::Field | MemberKind::Event => {
                let ty = member
                    .type_ref
                    .as_ref()
                    .map(|t| type_ref_html(ctx, from, t, false))
                    .unwrap_or_default();
                vec![ty, escape_html(&member.name), doc]
            }
        };
        table.row(row)?;
    }

    Ok(Some(table))
}
