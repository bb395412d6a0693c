use crate::input::KeyEvent;
use crate::theme::{Role, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    New,
    Display,
    Delete,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::New, MenuItem::Display, MenuItem::Delete];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::New => "New",
            MenuItem::Display => "Display",
            MenuItem::Delete => "Delete",
        }
    }
}

const RULE: &str = "*----------------------*";
/// Width between the `* ` and ` *` borders.
const INNER_WIDTH: usize = RULE.len() - 4;

/// Selection cursor over `MenuItem::ALL`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MenuController {
    cursor: usize,
}

impl MenuController {
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> MenuItem {
        MenuItem::ALL[self.cursor]
    }

    /// Move the cursor, or return the item to run on `Activate`.
    pub fn handle(&mut self, event: KeyEvent) -> Option<MenuItem> {
        let n = MenuItem::ALL.len();
        match event {
            KeyEvent::MoveUp => self.cursor = (self.cursor + n - 1) % n,
            KeyEvent::MoveDown => self.cursor = (self.cursor + 1) % n,
            KeyEvent::Activate => return Some(self.selected()),
            KeyEvent::Interrupt => {}
        }
        None
    }

    pub fn render(&self, theme: &Theme) -> String {
        let mut out = String::new();
        for (i, item) in MenuItem::ALL.into_iter().enumerate() {
            let (text, role) = if i == self.cursor {
                (format!("-> {}", item.label()), Role::Selected)
            } else {
                (item.label().to_string(), Role::Unselected)
            };
            let pad = INNER_WIDTH.saturating_sub(text.len());

            out.push_str(RULE);
            out.push('\n');
            out.push_str(&format!("* {}{} *\n", theme.paint(role, &text), " ".repeat(pad)));
            out.push_str(RULE);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_wraps() {
        let mut menu = MenuController::default();
        assert_eq!(menu.cursor(), 0);

        for _ in 0..3 {
            assert_eq!(menu.handle(KeyEvent::MoveDown), None);
        }
        assert_eq!(menu.cursor(), 0);

        menu.handle(KeyEvent::MoveUp);
        assert_eq!(menu.cursor(), 2);
        assert_eq!(menu.selected(), MenuItem::Delete);
    }

    #[test]
    fn activate_returns_selection() {
        let mut menu = MenuController::default();
        assert_eq!(menu.handle(KeyEvent::Activate), Some(MenuItem::New));
        menu.handle(KeyEvent::MoveDown);
        assert_eq!(menu.handle(KeyEvent::Activate), Some(MenuItem::Display));
        assert_eq!(menu.cursor(), 1);
        assert_eq!(menu.handle(KeyEvent::Interrupt), None);
        assert_eq!(menu.cursor(), 1);
    }

    #[test]
    fn render_marks_cursor() {
        let mut menu = MenuController::default();
        menu.handle(KeyEvent::MoveDown);
        let screen = menu.render(&Theme::plain());
        let lines: Vec<&str> = screen.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[1], "* New                  *");
        assert_eq!(lines[4], "* -> Display           *");
        assert_eq!(lines[7], "* Delete               *");
        assert!(lines.iter().all(|l| l.len() == RULE.len()));
    }
}
