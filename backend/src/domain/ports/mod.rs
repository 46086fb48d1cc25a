//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports (credential store, content store, password hasher, token
//! codec) describe how the domain reaches infrastructure. Each exposes a
//! strongly typed error so adapters map their failures into predictable
//! variants. Driving ports are what the HTTP adapter calls.

mod macros;
pub(crate) use macros::define_port_error;

mod account_command;
mod comment_repository;
mod comments_command;
mod credential_repository;
mod password_hasher;
mod post_repository;
mod posts_command;
mod posts_query;
mod session_tokens;

#[cfg(test)]
pub use account_command::MockAccountCommand;
pub use account_command::{AccountCommand, IssuedSession};
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
pub use comment_repository::{CommentRepository, CommentRepositoryError};
#[cfg(test)]
pub use comments_command::MockCommentsCommand;
pub use comments_command::CommentsCommand;
#[cfg(test)]
pub use credential_repository::MockCredentialRepository;
pub use credential_repository::{CredentialRepository, CredentialRepositoryError};
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHasher, PasswordHasherError};
#[cfg(test)]
pub use post_repository::MockPostRepository;
pub use post_repository::{PostRepository, PostRepositoryError};
#[cfg(test)]
pub use posts_command::MockPostsCommand;
pub use posts_command::PostsCommand;
#[cfg(test)]
pub use posts_query::MockPostsQuery;
pub use posts_query::PostsQuery;
#[cfg(test)]
pub use session_tokens::MockSessionTokens;
pub use session_tokens::{SessionTokenError, SessionTokens};
