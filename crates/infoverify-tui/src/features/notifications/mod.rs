//! Transient notification layer (toasts).

mod render;
mod state;

pub use render::render_notifications;
pub use state::{Notifications, Toast, ToastKind};
