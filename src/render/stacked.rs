//! Single renderer behind the Professional, Modern and Minimal templates.

use super::html::{div, escape_attr, escape_html, icon_link, mailto};
use super::sections::{present, Section};
use super::style::{Cell, SocialStyle, StyleSheet, TemplateSpec};
use super::{social_icon, COMPANY_LINKS};
use crate::signature::{SignatureData, SocialNetwork};

/// Render `data` following `spec`.
pub fn render(data: &SignatureData, spec: &TemplateSpec) -> String {
    let mut out = format!(
        "<table style=\"{}\" cellpadding=\"0\" cellspacing=\"0\">\n",
        spec.table_style
    );

    for row in spec.rows {
        let cells: Vec<&Cell> = row
            .iter()
            .filter(|cell| cell_has_content(cell, data))
            .collect();
        if cells.is_empty() {
            continue;
        }
        out.push_str("<tr>\n");
        for cell in cells {
            render_cell(&mut out, cell, data, &spec.style);
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</table>\n");
    out
}

fn cell_has_content(cell: &Cell, data: &SignatureData) -> bool {
    cell.groups
        .iter()
        .any(|g| present(g.sections, data).next().is_some())
}

fn render_cell(out: &mut String, cell: &Cell, data: &SignatureData, style: &StyleSheet) {
    if cell.style.is_empty() {
        out.push_str("<td>\n");
    } else {
        out.push_str(&format!("<td style=\"{}\">\n", cell.style));
    }

    for group in cell.groups {
        let mut inner = String::new();
        for section in present(group.sections, data) {
            render_section(&mut inner, section, data, style);
        }
        if inner.is_empty() {
            continue;
        }
        if group.wrapper.is_empty() {
            out.push_str(&inner);
        } else {
            div(out, group.wrapper, &format!("\n{inner}"));
        }
    }

    out.push_str("</td>\n");
}

fn render_section(out: &mut String, section: Section, data: &SignatureData, style: &StyleSheet) {
    match section {
        Section::Photo => {
            if let Some(src) = data.photo_src() {
                out.push_str(&format!(
                    "<img src=\"{}\" alt=\"Profile\" style=\"{}\" />\n",
                    escape_attr(src),
                    style.photo
                ));
            }
        }
        Section::Name => div(out, style.name, &escape_html(&data.display_name)),
        Section::Title => {
            if let Some(title) = data.title() {
                div(out, style.title, &escape_html(title));
            }
        }
        Section::Affiliation => div(out, style.affiliation, &affiliation(data, style)),
        Section::Phone => {
            if let Some(phone) = data.primary_phone() {
                contact_line(out, style.contact_line, style.phone_prefix, &escape_html(phone));
            }
        }
        Section::Mobile => {
            if let Some(mobile) = data.mobile() {
                contact_line(out, style.contact_line, style.mobile_prefix, &escape_html(mobile));
            }
        }
        Section::Email => contact_line(
            out,
            style.contact_line,
            style.email_prefix,
            &mailto(&data.mail, style.email_link),
        ),
        Section::Office => {
            if let Some(office) = data.office_line() {
                contact_line(out, style.office_line, style.office_prefix, &escape_html(office));
            }
        }
        Section::Socials => socials(out, data, &style.socials),
    }
}

fn affiliation(data: &SignatureData, style: &StyleSheet) -> String {
    let department = match data.unit() {
        Some(unit) => format!("{}, {}", escape_html(unit), escape_html(&data.department)),
        None => escape_html(&data.department),
    };
    let department = if style.bold_department {
        format!("<strong>{department}</strong>")
    } else {
        department
    };
    format!(
        "{department}{}{}",
        style.affiliation_separator,
        escape_html(&data.company_name)
    )
}

fn contact_line(out: &mut String, line_style: &str, prefix: &str, value: &str) {
    div(out, line_style, &format!("{prefix}{value}"));
}

fn socials(out: &mut String, data: &SignatureData, style: &SocialStyle) {
    let mut inner = String::new();
    div(&mut inner, style.heading, style.follow_label);
    div(
        &mut inner,
        "margin-bottom: 8px;",
        &format!("\n{}", icon_row(&COMPANY_LINKS, style)),
    );

    if data.has_personal_links() {
        div(
            &mut inner,
            &format!("{} margin-top: 8px;", style.heading),
            style.connect_label,
        );
        let personal: Vec<(SocialNetwork, &str)> = data.socials.iter().collect();
        div(&mut inner, "", &format!("\n{}", icon_row(&personal, style)));
    }

    div(out, style.wrapper, &format!("\n{inner}"));
}

fn icon_row(links: &[(SocialNetwork, &str)], style: &SocialStyle) -> String {
    let mut out = String::new();
    let last = links.len().saturating_sub(1);
    let size = style.icon_size;
    let img_attrs = format!(
        "style=\"width: {size}px; height: {size}px;{}\"",
        style.icon_extra
    );
    for (index, &(network, href)) in links.iter().enumerate() {
        let link_style = if index < last {
            format!("{}{}", style.link, style.spacing)
        } else {
            style.link.to_owned()
        };
        let alt = if style.short_alt {
            short_alt(network)
        } else {
            network.label()
        };
        icon_link(
            &mut out,
            href,
            link_style.trim(),
            social_icon(network),
            alt,
            &img_attrs,
        );
    }
    out
}

fn short_alt(network: SocialNetwork) -> &'static str {
    match network {
        SocialNetwork::LinkedIn => "LI",
        SocialNetwork::Facebook => "FB",
        SocialNetwork::Instagram => "IG",
        SocialNetwork::Twitter => "TW",
        SocialNetwork::TikTok => "TT",
    }
}
