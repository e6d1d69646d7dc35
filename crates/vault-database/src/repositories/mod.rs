//! sqlx repository implementations of the collaborator traits.

pub mod snippet;
pub mod tag;
pub mod user;

pub use snippet::SnippetRepository;
pub use tag::TagRepository;
pub use user::UserRepository;
