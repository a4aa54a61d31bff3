//! Mapping the URL fragment onto a top-level page section.

pub const DEFAULT_SECTION: &str = "main-page";

/// Outcome of looking up a section id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionResolution {
    /// Position of the section to show
    pub index: usize,
    /// True when the id had no match and the first section was used
    pub missing: bool,
}

/// Section id named by a location hash such as `"#about-page"`.
///
/// The fragment is percent-decoded and stripped of all whitespace. An empty
/// fragment names `default_id`.
#[must_use]
pub fn section_id_from_hash(hash: &str, default_id: &str) -> String {
    let raw = hash.strip_prefix('#').unwrap_or(hash);
    let decoded = urlencoding::decode(raw).map_or_else(|_| raw.to_string(), |s| s.into_owned());
    let id: String = decoded.chars().filter(|c| !c.is_whitespace()).collect();
    if id.is_empty() {
        default_id.to_string()
    } else {
        id
    }
}

/// Find the section with `id`, falling back to the first one.
#[must_use]
pub fn resolve_section<S: AsRef<str>>(id: &str, sections: &[S]) -> SectionResolution {
    sections
        .iter()
        .position(|section| section.as_ref() == id)
        .map_or(
            SectionResolution {
                index: 0,
                missing: true,
            },
            |index| SectionResolution {
                index,
                missing: false,
            },
        )
}
