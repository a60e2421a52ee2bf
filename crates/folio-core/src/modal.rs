//! Project image-preview modal.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: String,
    pub image: String,
}

impl ProjectCard {
    /// Build from the card's `data-title` / `data-image` attributes.
    pub fn from_attrs(title: Option<String>, image: Option<String>) -> Self {
        Self {
            title: title.unwrap_or_default(),
            image: image.unwrap_or_default(),
        }
    }

    pub fn alt_text(&self) -> String {
        format!("{} - Full page preview", self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEvent {
    Open(ProjectCard),
    CloseButton,
    OverlayClick,
    /// Clicks inside the content container never close the modal.
    ContentClick,
    Key(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ProjectCard),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEffect {
    Show(ProjectCard),
    Hide,
    None,
}

#[derive(Debug, Clone, Default)]
pub struct ModalController {
    state: ModalState,
}

impl ModalController {
    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    pub fn handle(&mut self, event: ModalEvent) -> ModalEffect {
        match event {
            ModalEvent::Open(card) => {
                self.state = ModalState::Open(card.clone());
                ModalEffect::Show(card)
            }
            ModalEvent::CloseButton | ModalEvent::OverlayClick => self.close(),
            ModalEvent::Key(key) if key == "Escape" && self.is_open() => self.close(),
            ModalEvent::Key(_) | ModalEvent::ContentClick => ModalEffect::None,
        }
    }

    fn close(&mut self) -> ModalEffect {
        self.state = ModalState::Closed;
        ModalEffect::Hide
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn alpha() -> ProjectCard {
        ProjectCard::from_attrs(Some("Alpha".to_owned()), Some("/img/alpha.png".to_owned()))
    }

    fn opened() -> ModalController {
        let mut modal = ModalController::default();
        modal.handle(ModalEvent::Open(alpha()));
        modal
    }

    #[test]
    fn open_shows_card_contents() {
        let mut modal = ModalController::default();
        let effect = modal.handle(ModalEvent::Open(alpha()));
        assert_eq!(
            effect,
            ModalEffect::Show(ProjectCard {
                title: "Alpha".to_owned(),
                image: "/img/alpha.png".to_owned(),
            })
        );
        assert_eq!(modal.state(), &ModalState::Open(alpha()));
        assert_eq!(alpha().alt_text(), "Alpha - Full page preview");
    }

    #[test]
    fn reopening_overwrites_card() {
        let mut modal = opened();
        let beta = ProjectCard::from_attrs(Some("Beta".to_owned()), None);
        modal.handle(ModalEvent::Open(beta.clone()));
        assert_eq!(modal.state(), &ModalState::Open(beta));
    }

    #[test]
    fn every_close_path_closes() {
        for event in [
            ModalEvent::CloseButton,
            ModalEvent::OverlayClick,
            ModalEvent::Key("Escape".to_owned()),
        ] {
            let mut modal = opened();
            assert_eq!(modal.handle(event), ModalEffect::Hide);
            assert!(!modal.is_open());
        }
    }

    #[test]
    fn content_click_and_other_keys_keep_it_open() {
        let mut modal = opened();
        assert_eq!(modal.handle(ModalEvent::ContentClick), ModalEffect::None);
        assert_eq!(modal.handle(ModalEvent::Key("Enter".to_owned())), ModalEffect::None);
        assert!(modal.is_open());
    }

    #[test]
    fn escape_while_closed_is_noop() {
        let mut modal = ModalController::default();
        assert_eq!(modal.handle(ModalEvent::Key("Escape".to_owned())), ModalEffect::None);
    }
}
