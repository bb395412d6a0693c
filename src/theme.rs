use crossterm::style::{Color, Stylize};

/// What a piece of text means, independent of how it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Selected,
    Unselected,
    Heading,
    Success,
    Error,
}

/// Colors for each `Role`. `None` leaves the text unstyled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub selected: Option<Color>,
    pub unselected: Option<Color>,
    pub heading: Option<Color>,
    pub success: Option<Color>,
    pub error: Option<Color>,
}

impl Theme {
    pub fn colored() -> Self {
        Self {
            selected: Some(Color::DarkGreen),
            unselected: Some(Color::DarkBlue),
            heading: Some(Color::DarkBlue),
            success: Some(Color::DarkGreen),
            error: Some(Color::DarkRed),
        }
    }

    pub fn plain() -> Self {
        Self {
            selected: None,
            unselected: None,
            heading: None,
            success: None,
            error: None,
        }
    }

    pub fn color(&self, role: Role) -> Option<Color> {
        match role {
            Role::Selected => self.selected,
            Role::Unselected => self.unselected,
            Role::Heading => self.heading,
            Role::Success => self.success,
            Role::Error => self.error,
        }
    }

    pub fn paint(&self, role: Role, text: &str) -> String {
        match self.color(role) {
            Some(color) => text.with(color).to_string(),
            None => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_is_untouched() {
        assert_eq!(Theme::plain().paint(Role::Error, "oops"), "oops");
    }

    #[test]
    fn colored_wraps_in_escape_codes() {
        let s = Theme::colored().paint(Role::Error, "oops");
        assert_ne!(s, "oops");
        assert!(s.contains("oops"));
        assert!(s.starts_with("\x1b["));
        assert!(s.ends_with("\x1b[0m"));
    }
}
