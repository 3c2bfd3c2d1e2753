pub mod authorization;
pub mod contact;
pub mod group;
pub mod phone;

pub use authorization::AuthorizationStatus;
pub use contact::{compose_full_name, Contact, ContactUpdate, NewContact};
pub use group::ContactGroup;
pub use phone::{normalize_phone, phone_match_suffix};
