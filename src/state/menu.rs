/// Open/closed state of the navigation overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Menu {
    #[default]
    Closed,
    Open,
}

impl Menu {
    /// Burger button.
    pub fn toggled(self) -> Self {
        match self {
            Menu::Closed => Menu::Open,
            Menu::Open => Menu::Closed,
        }
    }

    /// Any overlay link.
    pub fn navigated(self) -> Self {
        Menu::Closed
    }

    pub fn is_open(self) -> bool {
        self == Menu::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!Menu::default().is_open());
    }

    #[test]
    fn burger_flips() {
        let menu = Menu::default().toggled();
        assert!(menu.is_open());
        assert!(!menu.toggled().is_open());
    }

    #[test]
    fn navigating_always_closes() {
        assert_eq!(Menu::Open.navigated(), Menu::Closed);
        assert_eq!(Menu::Closed.navigated(), Menu::Closed);
        assert_eq!(Menu::Closed.toggled().navigated(), Menu::Closed);
    }
}
