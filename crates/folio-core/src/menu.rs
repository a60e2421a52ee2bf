//! Mobile navigation menu.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Bars,
    Close,
}

impl MenuIcon {
    /// Icon-font class carried by the toggle's `<i>` element.
    pub fn class(self) -> &'static str {
        match self {
            MenuIcon::Bars => "fa-bars",
            MenuIcon::Close => "fa-times",
        }
    }

    pub fn other(self) -> MenuIcon {
        match self {
            MenuIcon::Bars => MenuIcon::Close,
            MenuIcon::Close => MenuIcon::Bars,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuController {
    open: bool,
}

impl MenuController {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn icon(&self) -> MenuIcon {
        if self.open { MenuIcon::Close } else { MenuIcon::Bars }
    }

    /// Returns `true` if the menu was closed.
    pub fn open(&mut self) -> bool {
        let changed = !self.open;
        self.open = true;
        changed
    }

    /// Returns `true` if the menu was open.
    pub fn close(&mut self) -> bool {
        let changed = self.open;
        self.open = false;
        changed
    }

    pub fn toggle(&mut self) -> MenuIcon {
        if !self.close() {
            self.open();
        }
        self.icon()
    }

    /// A click landed somewhere on the page. Closes the menu when the click
    /// was outside the nav container.
    pub fn on_outside_click(&mut self, inside_nav: bool) -> bool {
        if inside_nav {
            return false;
        }
        self.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_state_and_icon() {
        let mut menu = MenuController::default();
        let (open, icon) = (menu.is_open(), menu.icon());
        assert_eq!(menu.toggle(), MenuIcon::Close);
        assert!(menu.is_open());
        assert_eq!(menu.toggle(), MenuIcon::Bars);
        assert_eq!((menu.is_open(), menu.icon()), (open, icon));
    }

    #[test]
    fn outside_click_closes_open_menu() {
        let mut menu = MenuController::default();
        menu.toggle();
        assert!(!menu.on_outside_click(true));
        assert!(menu.is_open());
        assert!(menu.on_outside_click(false));
        assert!(!menu.is_open());
        assert_eq!(menu.icon(), MenuIcon::Bars);
    }

    #[test]
    fn open_and_close_report_change_once() {
        let mut menu = MenuController::default();
        assert!(menu.open());
        assert!(!menu.open());
        assert_eq!(menu.icon(), MenuIcon::Close);
        assert!(menu.close());
        assert!(!menu.close());
    }

    #[test]
    fn outside_click_on_closed_menu_is_noop() {
        let mut menu = MenuController::default();
        assert!(!menu.on_outside_click(false));
        assert!(!menu.is_open());
    }

    #[test]
    fn icon_classes() {
        assert_eq!(MenuIcon::Bars.class(), "fa-bars");
        assert_eq!(MenuIcon::Close.class(), "fa-times");
        assert_eq!(MenuIcon::Bars.other(), MenuIcon::Close);
    }
}
