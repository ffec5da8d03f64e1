//! Service Layer
//!
//! The service layer wraps the external user API and bridges its async
//! calls into the GPUI world.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              RegistrationState                │
//! │         (begin_submit / complete)             │
//! └──────────────────────────────────────────────┘
//!                       │ NewUser
//!                       ▼
//! ┌──────────────────────────────────────────────┐
//! │  dyn UserApi ──▶ HttpUserApi ──▶ run_in_tokio │
//! │                  POST {base_url}/addUser      │
//! └──────────────────────────────────────────────┘
//!                       │ Result<UserRecord, SubmissionError>
//!                       ▼
//!               back on the UI thread
//! ```

mod runtime;
mod user_api;

pub use runtime::*;
pub use user_api::*;
