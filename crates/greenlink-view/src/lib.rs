//! View state for the GreenLink storefront page.
//!
//! Everything the page scripts used to keep in the DOM lives here as plain
//! state: the cart panel, toasts, overlays, scroll effects, the contact
//! form. A rendering layer feeds user events into [`Storefront`] and draws
//! what it exposes.

pub mod cart_panel;
pub mod config;
pub mod contact;
pub mod layout;
pub mod notify;
pub mod scroll;
mod storefront;

pub use cart_panel::{CartPanel, CartRow};
pub use config::ViewConfig;
pub use contact::{ContactForm, Field, FieldKind, FieldState, Submission};
pub use layout::{Layout, ProductDetail};
pub use notify::{Pulse, Toast, ToastQueue};
pub use scroll::{HeaderStyle, ScrollEffects, ScrollFrame};
pub use storefront::Storefront;
