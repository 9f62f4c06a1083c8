//! SEDC Clean: two-column corporate layout with a cropped logo and a fixed
//! disclaimer footer.
//!
//! The logo column is cropped to a height that tracks how many text lines
//! the right column shows, so the two columns stay visually balanced.

use super::html::{div, escape_attr, escape_html, mailto};
use super::sections::Section;
use super::{social_icon, COMPANY_LINKS, FOOTER_IMAGE_URL, FOOTER_LINK_URL, LOGO_URL};
use crate::signature::{SignatureData, SocialNetwork};

const ACCENT: &str = "#00a651";

/// Department shown when none is available.
const FALLBACK_DEPARTMENT: &str = "Group Digital and Technology";

/// Fixed legal text under every SEDC Clean signature.
pub const DISCLAIMER: &str = "This email and its attachments are confidential and intended only for the recipient(s). Any unauthorised use or disclosure is prohibited. Sarawak Economic Development Corporation and its affiliates will not be held accountable for any losses and/ or damages resulting from the use of this email and/ or its contents.";

/// Environmental note under the disclaimer.
pub const PRINT_NOTE: &str = "Save Paper, Save Trees \u{2014} Print Only If Essential";

/// Visible logo window for a given number of text lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoCrop {
    /// Window height in px.
    pub height: u32,
    /// Share of the logo hidden above the window, in percent.
    pub clip_percent: u32,
}

/// Line count → crop. Lines 1-3 (name, department, email) always render.
const LOGO_CROP_TABLE: [(usize, LogoCrop); 6] = [
    (3, LogoCrop { height: 50, clip_percent: 25 }),
    (4, LogoCrop { height: 58, clip_percent: 20 }),
    (5, LogoCrop { height: 66, clip_percent: 16 }),
    (6, LogoCrop { height: 75, clip_percent: 12 }),
    (7, LogoCrop { height: 84, clip_percent: 8 }),
    (8, LogoCrop { height: 92, clip_percent: 5 }),
];

const BASE_TIER: LogoCrop = LOGO_CROP_TABLE[0].1;

/// Number of text lines the right column shows for `data` (at least 3).
pub fn line_count(data: &SignatureData) -> usize {
    let optional = [
        Section::Title.is_present(data),
        data.unit().is_some(),
        Section::Phone.is_present(data),
        Section::Mobile.is_present(data),
        Section::Office.is_present(data),
    ];
    optional.iter().filter(|shown| **shown).count().saturating_add(3)
}

/// Crop for `lines` text lines.
///
/// Counts below 3 clamp to 3. Counts past the last tier fall back to the
/// 3-line tier, not the tallest one.
// TODO: confirm with design whether counts above 8 should use the tallest tier.
pub fn logo_crop(lines: usize) -> LogoCrop {
    let lines = lines.max(3);
    LOGO_CROP_TABLE
        .iter()
        .find(|(count, _)| *count == lines)
        .map_or(BASE_TIER, |(_, crop)| *crop)
}

/// Render the SEDC Clean template. The profile photo is never shown here.
pub fn render(data: &SignatureData) -> String {
    let has_personal = data.has_personal_links();
    let crop = logo_crop(line_count(data));
    tracing::trace!(
        lines = line_count(data),
        height = crop.height,
        clip = crop.clip_percent,
        "logo crop chosen"
    );

    let mut out = String::from(
        "<table cellpadding=\"0\" cellspacing=\"0\" border=\"0\" style=\"font-family: Aptos, Arial, sans-serif; font-size: 10pt; color: #333333; border-collapse: collapse; width: 600px; table-layout: fixed;\">\n<tr>\n",
    );

    // Left column.
    out.push_str(&format!(
        "<td style=\"width: 130px; padding-right: 20px; border-right: 3px solid {ACCENT}; vertical-align: top;\">\n"
    ));
    if has_personal {
        logo(&mut out, crop, 130);
    } else {
        out.push_str("<table cellpadding=\"0\" cellspacing=\"0\" border=\"0\" style=\"width: 100%;\">\n<tr>\n<td style=\"text-align: center; vertical-align: middle;\">\n");
        logo(&mut out, crop, 140);
        out.push_str("</td>\n</tr>\n<tr>\n<td style=\"padding-top: 5px;\">\n");
        out.push_str("<div style=\"border-top: 1px solid #e0e0e0; margin-bottom: 5px;\"></div>\n");
        inline_icons(
            &mut out,
            "Follow SEDC:",
            &COMPANY_LINKS,
            14,
            3,
            "text-align: center; width: 100%;",
        );
        out.push_str("</td>\n</tr>\n</table>\n");
    }
    out.push_str("</td>\n");

    // Right column.
    out.push_str("<td style=\"padding-left: 20px; vertical-align: middle; min-width: 400px;\">\n");
    contact_block(&mut out, data);
    out.push_str("</td>\n</tr>\n");

    if has_personal {
        out.push_str(&format!(
            "<tr>\n<td style=\"padding-right: 20px; padding-top: 10px; border-right: 3px solid {ACCENT}; vertical-align: top; text-align: center;\">\n"
        ));
        out.push_str("<div style=\"border-top: 1px solid #e0e0e0; margin-bottom: 10px;\"></div>\n");
        inline_icons(&mut out, "Follow SEDC:", &COMPANY_LINKS, 16, 5, "text-align: center;");
        out.push_str("</td>\n<td style=\"padding-left: 20px; padding-top: 10px; vertical-align: top;\">\n");
        out.push_str("<div style=\"border-top: 1px solid #e0e0e0; margin-bottom: 10px;\"></div>\n");
        let personal: Vec<(SocialNetwork, &str)> = data.socials.iter().collect();
        inline_icons(&mut out, "Connect with me:", &personal, 16, 5, "");
        out.push_str("</td>\n</tr>\n");
    }

    out.push_str("</table>\n");
    footer(&mut out);
    out
}

fn logo(out: &mut String, crop: LogoCrop, width: u32) {
    out.push_str(&format!(
        "<div style=\"height: {}px; overflow: hidden; width: {width}px; margin: 0 auto;\">\n<img src=\"{LOGO_URL}\" alt=\"SEDC Logo\" width=\"{width}\" style=\"height: auto; display: block; margin: -{}% auto 0 auto;\" />\n</div>\n",
        crop.height, crop.clip_percent
    ));
}

fn contact_block(out: &mut String, data: &SignatureData) {
    div(
        out,
        &format!("font-size: 12pt; font-weight: bold; color: {ACCENT}; margin-bottom: 3px;"),
        &escape_html(&data.display_name),
    );
    if let Some(title) = data.title() {
        div(
            out,
            "font-size: 11pt; color: #666666; margin-bottom: 2px;",
            &escape_html(title),
        );
    }

    let department = if data.department.trim().is_empty() {
        FALLBACK_DEPARTMENT
    } else {
        data.department.as_str()
    };
    let affiliation = match data.unit() {
        Some(unit) => format!("{}, {}", escape_html(unit), escape_html(department)),
        None => escape_html(department),
    };
    div(
        out,
        "font-size: 11pt; color: #999999; font-style: italic; margin-bottom: 10px;",
        &affiliation,
    );

    let mut lines = String::new();
    let line = "margin-bottom: 3px;";
    div(
        &mut lines,
        line,
        &format!(
            "&#128231; {}",
            mailto(&data.mail, &format!("color: {ACCENT}; text-decoration: none;"))
        ),
    );
    if let Some(phone) = data.primary_phone() {
        div(&mut lines, line, &format!("&#128222; {}", escape_html(phone)));
    }
    if let Some(mobile) = data.mobile() {
        div(&mut lines, line, &format!("&#128241; {}", escape_html(mobile)));
    }
    if let Some(office) = data.office_line() {
        div(&mut lines, line, &format!("&#128205; {}", escape_html(office)));
    }
    div(out, "font-size: 10pt; line-height: 16px;", &format!("\n{lines}"));
}

fn inline_icons(
    out: &mut String,
    label: &str,
    links: &[(SocialNetwork, &str)],
    size: u32,
    gap: u32,
    align: &str,
) {
    let mut inner = format!(
        "\n<span style=\"display: inline-block; vertical-align: middle; margin-right: {gap}px;\">{label}</span>\n"
    );
    let last = links.len().saturating_sub(1);
    for (index, &(network, href)) in links.iter().enumerate() {
        let spacing = if index < last {
            format!(" margin-right: {gap}px;")
        } else {
            String::new()
        };
        inner.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" style=\"text-decoration: none; display: inline-block; vertical-align: middle;{spacing}\"><img src=\"{}\" alt=\"{}\" width=\"{size}\" height=\"{size}\" style=\"display: block;\" /></a>\n",
            escape_attr(href),
            social_icon(network),
            network.label()
        ));
    }
    let style = format!("font-size: 8.5pt; color: #888888; line-height: 20px; {align}");
    div(out, style.trim(), &inner);
}

fn footer(out: &mut String) {
    out.push_str(&format!(
        "<table style=\"width: 600px; margin: 20px 0 0 0; padding: 0; border-collapse: collapse; border-spacing: 0; font-family: Arial, sans-serif;\">\n\
<tr>\n<td style=\"width: 600px; margin: 0; padding: 0;\">\n\
<a href=\"{FOOTER_LINK_URL}\" target=\"_blank\" rel=\"noopener\" style=\"display: block; text-decoration: none;\"><img src=\"{FOOTER_IMAGE_URL}\" alt=\"SEDC Sarawak Footer\" width=\"600\" style=\"display: block; width: 600px; height: auto; margin: 0; padding: 0; border: none;\" /></a>\n\
</td>\n</tr>\n\
<tr>\n<td style=\"width: 600px; padding: 10px 0; margin: 0; font-family: Aptos, Arial, sans-serif; font-size: 10.5px; color: #666; line-height: 1.5; text-align: justify;\">\n\
<strong>DISCLAIMER:</strong> {DISCLAIMER}\n\
<p style=\"margin: 5px 0 0 0; padding: 0; font-family: Aptos, Segoe UI, Arial, sans-serif; font-size: 9px; color: #0BAA4B; line-height: 1.3;\"><span style=\"font-style: normal;\">&#127795;</span> <span style=\"font-style: italic;\">{}</span></p>\n\
</td>\n</tr>\n</table>\n",
        escape_html(PRINT_NOTE)
    ));
}
