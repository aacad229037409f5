//! The portal's entity catalogue.

pub mod account;
pub mod bookings;
pub mod chat;
pub mod services;

pub use account::BusinessAccount;
pub use bookings::Booking;
pub use chat::ChatMessage;
pub use services::{ServiceDraft, ServiceOffering};
