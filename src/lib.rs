pub mod app;
pub mod config;
pub mod employee;
pub mod input;
pub mod io;
pub mod logging;
pub mod menu;
pub mod stack;
pub mod terminal_io;
pub mod theme;

pub use app::App;
pub use employee::Employee;
pub use io::MenuIo;
pub use stack::BoundedStack;
pub use terminal_io::TerminalIo;
pub use theme::Theme;
