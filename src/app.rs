use crate::employee::{self, Employee, EmployeeError};
use crate::input::KeyEvent;
use crate::io::MenuIo;
use crate::menu::{MenuController, MenuItem};
use crate::stack::{BoundedStack, StackError};
use crate::theme::{Role, Theme};
use anyhow::Result;
use tracing::{debug, info, warn};

pub type EmployeeStack = BoundedStack<Employee>;

/// How an action screen ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Ask for the stack capacity. Returns `None` (after telling the user) if the
/// answer is not a positive integer.
pub fn prompt_capacity(io: &mut dyn MenuIo, theme: &Theme) -> Result<Option<usize>> {
    io.print("Enter the maximum size of the stack: ")?;
    let line = io.read_line()?.unwrap_or_default();
    let capacity = parse_capacity(&line);
    if capacity.is_none() {
        report_bad_capacity(io, theme)?;
    }
    Ok(capacity)
}

/// Anything that isn't a positive integer is rejected.
pub fn parse_capacity(line: &str) -> Option<usize> {
    checked_capacity(line.trim().parse().ok()?)
}

pub fn checked_capacity(n: i64) -> Option<usize> {
    usize::try_from(n).ok().filter(|&n| n > 0)
}

pub fn report_bad_capacity(io: &mut dyn MenuIo, theme: &Theme) -> Result<()> {
    io.print(&theme.paint(Role::Error, "Stack size must be greater than 0!"))?;
    io.print("\n")
}

/// The interactive session: menu, actions, and the stack they operate on.
#[derive(Debug)]
pub struct App<'a> {
    stack: EmployeeStack,
    menu: MenuController,
    theme: Theme,
    io: &'a mut dyn MenuIo,
}

impl<'a> App<'a> {
    pub fn new(capacity: usize, theme: Theme, io: &'a mut dyn MenuIo) -> Self {
        Self {
            stack: EmployeeStack::new(capacity),
            menu: MenuController::default(),
            theme,
            io,
        }
    }

    pub fn stack(&self) -> &EmployeeStack {
        &self.stack
    }

    pub fn menu(&self) -> &MenuController {
        &self.menu
    }

    /// Run until Ctrl-C or end of input.
    pub fn run(&mut self) -> Result<()> {
        info!(capacity = self.stack.capacity(), "session started");
        self.draw_menu()?;

        while let Some(event) = self.io.next_event()? {
            if event == KeyEvent::Interrupt {
                break;
            }
            if let Some(item) = self.menu.handle(event) {
                debug!(?item, "activate");
                self.io.clear_screen()?;
                let flow = match item {
                    MenuItem::New => self.add_employee()?,
                    MenuItem::Display => self.display()?,
                    MenuItem::Delete => self.delete()?,
                };
                if flow == Flow::Quit {
                    break;
                }
            } else {
                debug!(cursor = self.menu.cursor(), "move");
            }
            self.draw_menu()?;
        }

        info!(remaining = self.stack.len(), "session ended");
        Ok(())
    }

    fn draw_menu(&mut self) -> Result<()> {
        self.io.clear_screen()?;
        let screen = self.menu.render(&self.theme);
        self.io.print(&screen)
    }

    fn say(&mut self, role: Role, text: &str) -> Result<()> {
        let painted = self.theme.paint(role, text);
        self.io.print(&painted)?;
        self.io.print("\n")
    }

    /// Block until Enter.
    fn acknowledge(&mut self) -> Result<Flow> {
        self.io.print("Press Enter to return to the menu...")?;
        loop {
            match self.io.next_event()? {
                Some(KeyEvent::Activate) => return Ok(Flow::Continue),
                Some(KeyEvent::Interrupt) | None => return Ok(Flow::Quit),
                Some(_) => {}
            }
        }
    }

    fn add_employee(&mut self) -> Result<Flow> {
        if self.stack.is_full() {
            let err = StackError::<u32>::Full {
                capacity: self.stack.capacity(),
            };
            warn!(%err, "new employee rejected");
            self.say(Role::Error, &err.to_string())?;
            return self.acknowledge();
        }

        let Some(id) = self.prompt_id()? else {
            return Ok(Flow::Quit);
        };
        let Some(name) = self.prompt_name()? else {
            return Ok(Flow::Quit);
        };

        match self.stack.push(Employee::new(id, name)) {
            Ok(()) => {
                info!(id, size = self.stack.len(), "pushed employee");
                self.say(Role::Success, "Employee added successfully!")?;
            }
            Err(err) => {
                warn!(%err, "push failed");
                self.say(Role::Error, "Failed to add employee!")?;
            }
        }
        self.acknowledge()
    }

    /// Reprompt until the id is a non-negative number not already in use.
    fn prompt_id(&mut self) -> Result<Option<u32>> {
        loop {
            self.io.print("Enter employee ID: ")?;
            let Some(line) = self.io.read_line()? else {
                return Ok(None);
            };
            let checked = employee::parse_id(&line).and_then(|id| {
                if self.stack.is_key_unique(id) {
                    Ok(id)
                } else {
                    Err(EmployeeError::DuplicateId(id))
                }
            });
            match checked {
                Ok(id) => return Ok(Some(id)),
                Err(err) => {
                    warn!(%err, input = %line, "rejected id");
                    self.say(Role::Error, &err.to_string())?;
                }
            }
        }
    }

    fn prompt_name(&mut self) -> Result<Option<String>> {
        loop {
            self.io.print("Enter employee name: ")?;
            let Some(line) = self.io.read_line()? else {
                return Ok(None);
            };
            match employee::validate_name(&line) {
                Ok(()) => return Ok(Some(line)),
                Err(err) => {
                    warn!(%err, input = %line, "rejected name");
                    self.say(Role::Error, &err.to_string())?;
                }
            }
        }
    }

    fn display(&mut self) -> Result<Flow> {
        let listing = display_stack(&self.stack, &self.theme);
        self.io.print(&listing)?;
        self.acknowledge()
    }

    fn delete(&mut self) -> Result<Flow> {
        match self.stack.pop() {
            Ok(emp) => {
                info!(id = emp.id, size = self.stack.len(), "popped employee");
                let text = format!("Popped employee ID: {}, Name: {}", emp.id, emp.name);
                self.say(Role::Success, &text)?;
            }
            Err(err) => {
                warn!(%err, "pop failed");
                self.say(Role::Error, &format!("Error: {err}"))?;
            }
        }
        self.acknowledge()
    }
}

/// The stack from top to bottom, or an empty-stack notice.
pub fn display_stack(stack: &EmployeeStack, theme: &Theme) -> String {
    if stack.is_empty() {
        return format!("{}\n", theme.paint(Role::Error, "Stack is empty!"));
    }
    let mut out = format!("{}\n", theme.paint(Role::Heading, "Stack contents:"));
    for emp in stack.iter_top_down() {
        out.push_str(&format!("{emp}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_parsing() {
        assert_eq!(parse_capacity("3"), Some(3));
        assert_eq!(parse_capacity(" 10\n"), Some(10));
        assert_eq!(parse_capacity("0"), None);
        assert_eq!(parse_capacity("-4"), None);
        assert_eq!(parse_capacity("lots"), None);
        assert_eq!(parse_capacity(""), None);
        assert_eq!(checked_capacity(i64::MIN), None);
    }

    #[test]
    fn listing_is_top_down() {
        let theme = Theme::plain();
        let mut stack = EmployeeStack::new(2);
        assert_eq!(display_stack(&stack, &theme), "Stack is empty!\n");

        stack.push(Employee::new(1, "A")).unwrap();
        stack.push(Employee::new(2, "B")).unwrap();
        assert_eq!(
            display_stack(&stack, &theme),
            "Stack contents:\nID: 2, Name: B\nID: 1, Name: A\n"
        );
    }
}
