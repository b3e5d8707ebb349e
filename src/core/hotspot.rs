//! Hotspot configuration records and the small HTML helpers the
//! interaction layer needs (link extraction, title escaping).

/// Fixed angular position linking to another scene.
#[derive(Clone, Debug)]
pub struct LinkHotspot {
    pub yaw: f64,
    pub pitch: f64,
    /// Id of the scene this hotspot switches to.
    pub target: String,
}

/// Fixed angular position carrying informational content. The `text` field
/// is an HTML fragment and may embed hyperlinks.
#[derive(Clone, Debug)]
pub struct InfoHotspot {
    pub yaw: f64,
    pub pitch: f64,
    pub title: String,
    pub text: String,
}

impl InfoHotspot {
    /// URL the interaction side effect opens, if the content carries one.
    pub fn link_url(&self) -> Option<&str> {
        first_link_url(&self.text)
    }
}

/// Extract the first `href` value from an HTML fragment.
///
/// Accepts single or double quotes; returns `None` when no non-empty href
/// is present. This is a linear scan, not an HTML parser; the tour data is
/// trusted, static content.
pub fn first_link_url(html: &str) -> Option<&str> {
    let mut rest = html;
    while let Some(pos) = rest.find("href=") {
        let after = &rest[pos + 5..];
        let mut chars = after.chars();
        match chars.next() {
            Some(q @ ('\'' | '"')) => {
                let body = &after[1..];
                if let Some(end) = body.find(q) {
                    if end > 0 {
                        return Some(&body[..end]);
                    }
                    rest = &body[end + 1..];
                    continue;
                }
                return None;
            }
            _ => rest = after,
        }
    }
    None
}

/// Minimal HTML escaping for scene names and hotspot titles.
pub fn sanitize(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
