//! Same-page fragment navigation.

use crate::menu::MenuController;

/// Element id referenced by a same-document link, if any.
///
/// A bare `#` references nothing.
pub fn fragment_target(href: &str) -> Option<&str> {
    let id = href.trim().strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatePlan<'a> {
    pub target: &'a str,
    /// The mobile menu was open and has been closed.
    pub closed_menu: bool,
}

/// Resolve a fragment link click. `exists` reports whether an element with
/// the given id is present. Returns `None` when there is nothing to scroll to,
/// leaving the menu untouched.
pub fn plan_navigation<'a>(
    href: &'a str,
    menu: &mut MenuController,
    exists: impl FnOnce(&str) -> bool,
) -> Option<NavigatePlan<'a>> {
    let target = fragment_target(href)?;
    if !exists(target) {
        return None;
    }
    Some(NavigatePlan {
        target,
        closed_menu: menu.close(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_parsing() {
        assert_eq!(fragment_target("#about"), Some("about"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target(""), None);
        assert_eq!(fragment_target("/blog#x"), None);
    }

    #[test]
    fn existing_target_closes_open_menu() {
        let mut menu = MenuController::default();
        menu.toggle();
        let plan = plan_navigation("#projects", &mut menu, |id| id == "projects");
        assert_eq!(
            plan,
            Some(NavigatePlan {
                target: "projects",
                closed_menu: true
            })
        );
        assert!(!menu.is_open());
    }

    #[test]
    fn missing_target_plans_nothing() {
        let mut menu = MenuController::default();
        menu.toggle();
        assert_eq!(plan_navigation("#nowhere", &mut menu, |_| false), None);
        assert!(menu.is_open());
    }

    #[test]
    fn closed_menu_stays_closed() {
        let mut menu = MenuController::default();
        let plan = plan_navigation("#contact", &mut menu, |_| true);
        assert_eq!(plan.map(|p| p.closed_menu), Some(false));
    }
}
