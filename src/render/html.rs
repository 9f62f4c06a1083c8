//! Escaping and small markup helpers shared by all templates.

/// Escape user-provided text for an element body.
pub fn escape_html(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// Escape a value for use inside a double- or single-quoted attribute.
pub fn escape_attr(value: &str) -> String {
    html_escape::encode_quoted_attribute(value).into_owned()
}

/// `<div style="...">inner</div>`, dropping the attribute when `style` is empty.
pub(crate) fn div(out: &mut String, style: &str, inner: &str) {
    if style.is_empty() {
        out.push_str("<div>");
    } else {
        out.push_str("<div style=\"");
        out.push_str(style);
        out.push_str("\">");
    }
    out.push_str(inner);
    out.push_str("</div>\n");
}

/// An icon link opening in a new tab.
pub(crate) fn icon_link(
    out: &mut String,
    href: &str,
    link_style: &str,
    icon: &str,
    alt: &str,
    img_attrs: &str,
) {
    out.push_str(&format!(
        "<a href=\"{}\" target=\"_blank\" style=\"{link_style}\"><img src=\"{icon}\" alt=\"{alt}\" {img_attrs} /></a>\n",
        escape_attr(href)
    ));
}

/// A `mailto:` link.
pub(crate) fn mailto(mail: &str, style: &str) -> String {
    let escaped = escape_html(mail);
    format!(
        "<a href=\"mailto:{}\" style=\"{style}\">{escaped}</a>",
        escape_attr(mail)
    )
}
