//! View Components
//!
//! ## Layout Structure
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │               TitleBar               │
//! ├──────────────────────────────────────┤
//! │          RegistrationView            │
//! │   ┌──────────────────────────────┐   │
//! │   │ name / email / password      │   │
//! │   │                    [Register]│   │
//! │   └──────────────────────────────┘   │
//! │   UserList                           │
//! └──────────────────────────────────────┘
//! ```

mod registration_view;
mod title_bar;
mod user_list;
mod workspace;

pub use registration_view::*;
pub use title_bar::*;
pub use user_list::*;
pub use workspace::*;
