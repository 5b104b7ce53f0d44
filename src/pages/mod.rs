//! Pages
//!
//! One component per route.

mod login;
mod new_task;
mod tasks;

pub use login::LoginPage;
pub use new_task::NewTaskPage;
pub use tasks::TasksPage;
