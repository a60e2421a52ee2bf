//! Active nav link tracking.

/// The last section, in document order, whose top is at or above
/// `scroll_y + offset`.
pub fn active_section<'a, I>(sections: I, scroll_y: f64, offset: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut current = None;
    for (id, top) in sections {
        if scroll_y >= top - offset {
            current = Some(id);
        }
    }
    current
}

/// Whether a nav link with `href` points at the active section.
pub fn is_link_for(href: &str, section: Option<&str>) -> bool {
    match section {
        Some(id) => crate::anchor::fragment_target(href) == Some(id),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTIONS: [(&str, f64); 4] = [
        ("home", 0.0),
        ("about", 800.0),
        ("projects", 1_600.0),
        ("contact", 2_400.0),
    ];

    #[test]
    fn picks_last_qualifying_section() {
        assert_eq!(active_section(SECTIONS, 0.0, 150.0), Some("home"));
        assert_eq!(active_section(SECTIONS, 649.0, 150.0), Some("home"));
        assert_eq!(active_section(SECTIONS, 650.0, 150.0), Some("about"));
        assert_eq!(active_section(SECTIONS, 5_000.0, 150.0), Some("contact"));
    }

    #[test]
    fn none_when_no_section_qualifies() {
        let sections = [("about", 800.0)];
        assert_eq!(active_section(sections, 100.0, 150.0), None);
    }

    #[test]
    fn at_most_one_link_matches() {
        let hrefs = ["#home", "#about", "#projects", "#contact", "#"];
        for scroll_y in [0.0, 700.0, 1_500.0, 2_300.0, 9_999.0] {
            let active = active_section(SECTIONS, scroll_y, 150.0);
            let matching = hrefs.iter().filter(|h| is_link_for(h, active)).count();
            assert_eq!(matching, 1, "scroll_y={scroll_y}");
        }
    }

    #[test]
    fn bare_hash_never_matches() {
        assert!(!is_link_for("#", None));
        assert!(!is_link_for("#", Some("")));
    }
}
