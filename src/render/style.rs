//! Layout descriptions and style sheets for the section-driven templates.
//!
//! A [`TemplateSpec`] is data only: rows of cells, each cell holding groups
//! of [`Section`]s, plus the inline CSS and labels every section uses.
//! [`super::stacked::render`] walks it.

use super::sections::Section;

/// Full description of one section-driven template.
#[derive(Debug)]
pub struct TemplateSpec {
    /// Inline style of the outer `<table>`.
    pub table_style: &'static str,
    /// Table rows; a row or cell with no present sections is skipped.
    pub rows: &'static [&'static [Cell]],
    /// Per-section styling.
    pub style: StyleSheet,
}

/// One `<td>`.
#[derive(Debug)]
pub struct Cell {
    /// Inline style; empty for none.
    pub style: &'static str,
    /// Groups rendered in order.
    pub groups: &'static [Group],
}

/// A run of sections, optionally wrapped in a styled `<div>`.
#[derive(Debug)]
pub struct Group {
    /// Wrapper style; empty renders the sections unwrapped.
    pub wrapper: &'static str,
    /// Sections in display order.
    pub sections: &'static [Section],
}

/// Inline CSS and labels per section.
#[derive(Debug)]
pub struct StyleSheet {
    /// `<img>` style for the photo.
    pub photo: &'static str,
    /// Name line.
    pub name: &'static str,
    /// Title line.
    pub title: &'static str,
    /// Affiliation line.
    pub affiliation: &'static str,
    /// Between department and company.
    pub affiliation_separator: &'static str,
    /// Wrap unit and department in `<strong>`.
    pub bold_department: bool,
    /// Phone, mobile and email lines.
    pub contact_line: &'static str,
    /// Office line.
    pub office_line: &'static str,
    /// Prefix markup before the phone number.
    pub phone_prefix: &'static str,
    /// Prefix markup before the mobile number.
    pub mobile_prefix: &'static str,
    /// Prefix markup before the email link.
    pub email_prefix: &'static str,
    /// Prefix markup before the office address.
    pub office_prefix: &'static str,
    /// `mailto:` link style.
    pub email_link: &'static str,
    /// Social icon blocks.
    pub socials: SocialStyle,
}

/// Styling of the "Follow" / "Connect" icon blocks.
#[derive(Debug)]
pub struct SocialStyle {
    /// Wrapper around both blocks.
    pub wrapper: &'static str,
    /// Heading style.
    pub heading: &'static str,
    /// Company heading text.
    pub follow_label: &'static str,
    /// Personal heading text.
    pub connect_label: &'static str,
    /// Icon edge length in px.
    pub icon_size: u8,
    /// Extra `<img>` style after width/height.
    pub icon_extra: &'static str,
    /// `<a>` style.
    pub link: &'static str,
    /// Added to every icon link but the last in a row.
    pub spacing: &'static str,
    /// Use two-letter alt texts.
    pub short_alt: bool,
}

const ALL_CONTACTS: &[Section] = &[
    Section::Name,
    Section::Title,
    Section::Affiliation,
    Section::Phone,
    Section::Mobile,
    Section::Email,
    Section::Office,
    Section::Socials,
];

/// Template 1.
pub static PROFESSIONAL: TemplateSpec = TemplateSpec {
    table_style: "font-family: Arial, sans-serif; font-size: 10pt; color: #333; border-collapse: collapse;",
    rows: &[&[
        Cell {
            style: "padding-right: 15px; vertical-align: top;",
            groups: &[Group {
                wrapper: "",
                sections: &[Section::Photo],
            }],
        },
        Cell {
            style: "border-left: 3px solid #0078d4; padding-left: 15px; vertical-align: top;",
            groups: &[Group {
                wrapper: "",
                sections: ALL_CONTACTS,
            }],
        },
    ]],
    style: StyleSheet {
        photo: "width: 80px; height: 80px; border-radius: 50%; object-fit: cover;",
        name: "font-size: 14pt; font-weight: bold; color: #0078d4; margin-bottom: 5px;",
        title: "font-size: 10pt; color: #666; margin-bottom: 3px;",
        affiliation: "font-size: 10pt; color: #666; margin-bottom: 10px;",
        affiliation_separator: " | ",
        bold_department: false,
        contact_line: "margin-bottom: 3px;",
        office_line: "margin-bottom: 3px;",
        phone_prefix: "<span style=\"color: #0078d4;\">&#128222;</span> ",
        mobile_prefix: "<span style=\"color: #0078d4;\">&#128241;</span> ",
        email_prefix: "<span style=\"color: #0078d4;\">&#9993;&#65039;</span> ",
        office_prefix: "<span style=\"color: #0078d4;\">&#128205;</span> ",
        email_link: "color: #0078d4; text-decoration: none;",
        socials: SocialStyle {
            wrapper: "margin-top: 10px; padding-top: 10px; border-top: 1px solid #ddd;",
            heading: "font-size: 9pt; color: #888; margin-bottom: 5px;",
            follow_label: "Follow SEDC:",
            connect_label: "Connect with me:",
            icon_size: 20,
            icon_extra: " vertical-align: middle;",
            link: "text-decoration: none;",
            spacing: " margin-right: 8px;",
            short_alt: false,
        },
    },
};

/// Template 2.
pub static MODERN: TemplateSpec = TemplateSpec {
    table_style: "font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; font-size: 10pt; color: #333; max-width: 500px;",
    rows: &[
        &[Cell {
            style: "background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); padding: 20px; color: white;",
            groups: &[Group {
                wrapper: "",
                sections: &[Section::Photo, Section::Name, Section::Title],
            }],
        }],
        &[Cell {
            style: "padding: 15px; background: #f8f9fa;",
            groups: &[Group {
                wrapper: "",
                sections: &[
                    Section::Affiliation,
                    Section::Phone,
                    Section::Mobile,
                    Section::Email,
                    Section::Socials,
                    Section::Office,
                ],
            }],
        }],
    ],
    style: StyleSheet {
        photo: "width: 70px; height: 70px; border-radius: 50%; border: 3px solid white; margin-bottom: 10px;",
        name: "font-size: 16pt; font-weight: bold; margin-bottom: 5px;",
        title: "font-size: 11pt; opacity: 0.9;",
        affiliation: "margin-bottom: 5px;",
        affiliation_separator: " | ",
        bold_department: true,
        contact_line: "margin-bottom: 3px;",
        office_line: "",
        phone_prefix: "&#9742;&#65039; ",
        mobile_prefix: "&#128241; ",
        email_prefix: "&#9993;&#65039; ",
        office_prefix: "&#128205; ",
        email_link: "color: #667eea; text-decoration: none;",
        socials: SocialStyle {
            wrapper: "margin-top: 10px; padding-top: 10px; border-top: 1px solid #ddd;",
            heading: "font-size: 9pt; color: #666; margin-bottom: 5px;",
            follow_label: "Follow SEDC:",
            connect_label: "Connect with me:",
            icon_size: 20,
            icon_extra: " vertical-align: middle;",
            link: "text-decoration: none;",
            spacing: " margin-right: 8px;",
            short_alt: false,
        },
    },
};

/// Template 3.
pub static MINIMAL: TemplateSpec = TemplateSpec {
    table_style: "font-family: 'Courier New', monospace; font-size: 10pt; color: #333; border: 2px solid #333; padding: 15px;",
    rows: &[&[Cell {
        style: "",
        groups: &[
            Group {
                wrapper: "",
                sections: &[
                    Section::Photo,
                    Section::Name,
                    Section::Title,
                    Section::Affiliation,
                ],
            },
            Group {
                wrapper: "border-top: 1px solid #333; padding-top: 10px;",
                sections: &[
                    Section::Phone,
                    Section::Mobile,
                    Section::Email,
                    Section::Office,
                ],
            },
            Group {
                wrapper: "",
                sections: &[Section::Socials],
            },
        ],
    }]],
    style: StyleSheet {
        photo: "width: 60px; height: 60px; border: 2px solid #333; margin-bottom: 10px;",
        name: "font-size: 14pt; font-weight: bold; margin-bottom: 5px; text-transform: uppercase;",
        title: "font-size: 10pt; margin-bottom: 3px;",
        affiliation: "font-size: 10pt; margin-bottom: 10px;",
        affiliation_separator: " / ",
        bold_department: false,
        contact_line: "margin-bottom: 3px;",
        office_line: "",
        phone_prefix: "T: ",
        mobile_prefix: "M: ",
        email_prefix: "E: ",
        office_prefix: "A: ",
        email_link: "color: #333;",
        socials: SocialStyle {
            wrapper: "margin-top: 10px; padding-top: 10px; border-top: 1px solid #333;",
            heading: "font-size: 9pt; margin-bottom: 5px;",
            follow_label: "SEDC:",
            connect_label: "Personal:",
            icon_size: 18,
            icon_extra: "",
            link: "",
            spacing: " margin-right: 8px;",
            short_alt: true,
        },
    },
};
