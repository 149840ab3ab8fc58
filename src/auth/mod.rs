pub mod claims;
pub mod extractor;
pub mod identity;

pub use claims::Claims;
pub use extractor::AuthenticatedUser;
pub use identity::IdentityVerifier;
