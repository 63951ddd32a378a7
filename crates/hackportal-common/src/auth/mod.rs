//! Authentication utilities
//!
//! Tokens are issued by the portal's sign-in flow; this service only needs to
//! verify them and read the participant identity and role.

mod jwt;

pub use jwt::{Claims, JwtService, Role};
