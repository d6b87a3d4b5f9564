use serde::{ Deserialize, Serialize };

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Content constrained to a centred column.
    #[default]
    Narrow,
    /// Content uses the full width of the window.
    Wide,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Narrow => "narrow",
            Layout::Wide => "wide",
        }
    }

    pub fn container_class(&self) -> &'static str {
        match self {
            Layout::Narrow => "page page-narrow",
            Layout::Wide => "page page-wide",
        }
    }
}

/// Document-level metadata of a page: browser tab title, favicon glyph and layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    pub page_title: Option<String>,
    pub page_icon: Option<String>,
    pub layout: Layout,
}

impl PageConfig {
    pub fn new(title: impl Into<String>, icon: impl Into<String>, layout: Layout) -> Self {
        Self {
            page_title: Some(title.into()),
            page_icon: Some(icon.into()),
            layout,
        }
    }

    /// Favicon href for the configured glyph, as an inline SVG data URI.
    pub fn icon_href(&self) -> Option<String> {
        self.page_icon.as_deref().map(emoji_favicon)
    }
}

fn emoji_favicon(glyph: &str) -> String {
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>{}</text></svg>",
        glyph
    );
    format!("data:image/svg+xml,{}", percent_encode(&svg))
}

fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 3);
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' | b':' | b'=' | b'\'' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
