//! Article operations behind the HTTP handlers.
//!
//! - [`writer`] -- validates a submission, resolves the photo and stores the article.
//! - [`render`] -- lists articles, joins project titles and builds the table.
//! - [`mutate`] -- status changes and confirmed deletes.
//!
//! Every operation takes its collaborators (store, image host, caller
//! identity) as arguments; nothing here reads process-wide state.

pub mod mutate;
pub mod render;
pub mod writer;

#[cfg(test)]
pub(crate) mod testing;
