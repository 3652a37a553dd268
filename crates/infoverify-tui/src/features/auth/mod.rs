//! Auth feature slice (sign-in / register form).

mod render;
mod state;
mod update;

pub use render::render_auth;
pub use state::{AuthField, AuthFormState};
pub use update::{handle_key, handle_request_outcome, submit};
