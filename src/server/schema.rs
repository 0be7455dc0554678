use async_graphql::{ComplexObject, Context, ErrorExtensions, Object, SimpleObject};

use crate::datamodel::{self, Library};
use crate::error::{LibraryError, Result};

trait LibraryContext {
    fn library(&self) -> &Library;

    /// Reports `err` against the current field, which then resolves to null.
    fn null_on_error<T, U: From<T>>(&self, res: Result<T>) -> Option<U>;
}

impl LibraryContext for Context<'_> {
    fn library(&self) -> &Library {
        self.data_unchecked::<Library>()
    }

    fn null_on_error<T, U: From<T>>(&self, res: Result<T>) -> Option<U> {
        res.map(U::from)
            .map_err(|e: LibraryError| self.add_error(e.extend().into_server_error(self.item.pos)))
            .ok()
    }
}

/// Lists keep the nullable `[T]` shape of the public schema.
fn list<T, U: From<T>>(items: Vec<T>) -> Option<Vec<Option<U>>> {
    Some(items.into_iter().map(|item| Some(item.into())).collect())
}

/// This represents a book written by an author
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Book {
    id: i32,
    name: String,
    author_id: i32,
}

#[ComplexObject]
impl Book {
    async fn author(&self, ctx: &Context<'_>) -> Option<Author> {
        ctx.library().author(self.author_id).map(Into::into)
    }
}

impl From<datamodel::Book> for Book {
    fn from(book: datamodel::Book) -> Self {
        Self {
            id: book.id,
            name: book.name,
            author_id: book.author_id,
        }
    }
}

/// This represents an author of a book
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Author {
    id: i32,
    name: String,
}

#[ComplexObject]
impl Author {
    async fn books(&self, ctx: &Context<'_>) -> Option<Vec<Option<Book>>> {
        list(ctx.library().books_by_author(self.id))
    }
}

impl From<datamodel::Author> for Author {
    fn from(author: datamodel::Author) -> Self {
        Self {
            id: author.id,
            name: author.name,
        }
    }
}

pub struct RootQuery;

#[Object(name = "Query")]
impl RootQuery {
    /// A Single Book
    async fn book(&self, ctx: &Context<'_>, id: Option<i32>) -> Option<Book> {
        ctx.library().book(id?).map(Into::into)
    }

    /// List of All Books
    async fn books(&self, ctx: &Context<'_>) -> Option<Vec<Option<Book>>> {
        list(ctx.library().books())
    }

    /// A Single Author
    async fn author(&self, ctx: &Context<'_>, id: Option<i32>) -> Option<Author> {
        ctx.library().author(id?).map(Into::into)
    }

    /// List of All Authors
    async fn authors(&self, ctx: &Context<'_>) -> Option<Vec<Option<Author>>> {
        list(ctx.library().authors())
    }
}

pub struct RootMutation;

#[Object(name = "Mutation")]
impl RootMutation {
    /// Add a book
    async fn add_book(&self, ctx: &Context<'_>, name: String, author_id: i32) -> Option<Book> {
        ctx.null_on_error(ctx.library().add_book(name, author_id))
    }

    /// Update a book
    async fn update_book(
        &self,
        ctx: &Context<'_>,
        id: i32,
        name: String,
        author_id: i32,
    ) -> Option<Book> {
        ctx.null_on_error(ctx.library().update_book(id, name, author_id))
    }

    /// Delete a book
    async fn delete_book(&self, ctx: &Context<'_>, id: Option<i32>) -> Option<Book> {
        ctx.library().delete_book(id?).map(Into::into)
    }

    /// Add an author
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> Option<Author> {
        ctx.null_on_error(ctx.library().add_author(name))
    }

    /// Delete an author
    async fn delete_author(&self, ctx: &Context<'_>, id: i32) -> Option<Author> {
        ctx.library().delete_author(id).map(Into::into)
    }
}
