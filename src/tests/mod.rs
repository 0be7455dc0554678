use cynic::{MutationBuilder as _, QueryBuilder as _};

use crate::client::{
    AddBook, AddBookVariables, AuthorById, AuthorName, BookFields, BookWithAuthor,
    BooksWithAuthors, ByIdVariables, Client, DeleteBook, UpdateBook, UpdateBookVariables,
};
use crate::datamodel::{Author, Book, Library, Seed};


fn single_book_library() -> Library {
    Library::new(Seed {
        authors: vec![Author {
            id: 1,
            name: "Author1".into(),
        }],
        books: vec![Book {
            id: 1,
            name: "Name1".into(),
            author_id: 1,
        }],
    })
}

#[tokio::test]
async fn test_books_with_authors() {
    let server = testserver::Server::start(single_book_library());
    let client = Client::new(server.url());

    let res = client.run(BooksWithAuthors::build(())).await;

    assert!(res.errors.is_none());
    assert_eq!(
        res.data.unwrap().books,
        Some(vec![Some(BookWithAuthor {
            name: "Name1".into(),
            author: Some(AuthorName {
                name: "Author1".into()
            }),
        })])
    );
}

#[tokio::test]
async fn test_author_with_books() {
    let server = testserver::Server::start(Library::default());
    let client = Client::new(server.url());

    let res = client.run(AuthorById::build(ByIdVariables { id: Some(2) })).await;
    let author = res.data.unwrap().author.unwrap();

    assert_eq!(author.name, "Thomas Mann");
    assert_eq!(
        author.books,
        Some(vec![Some(BookFields {
            id: 3,
            name: "Zauberberg".into(),
            author_id: 2,
        })])
    );

    let res = client.run(AuthorById::build(ByIdVariables { id: None })).await;
    assert!(res.data.unwrap().author.is_none());
}

#[tokio::test]
async fn test_add_then_delete_book() {
    let library = single_book_library();
    let server = testserver::Server::start(library.clone());
    let client = Client::new(server.url());

    let added = client
        .run(AddBook::build(AddBookVariables {
            name: "Name2".into(),
            author_id: 1,
        }))
        .await
        .data
        .unwrap()
        .add_book
        .unwrap();
    assert_eq!(added.id, 2);
    assert_eq!(library.books().len(), 2);

    let deleted = client
        .run(DeleteBook::build(ByIdVariables { id: Some(added.id) }))
        .await
        .data
        .unwrap()
        .delete_book;
    assert_eq!(deleted, Some(added));
    assert_eq!(library.books().len(), 1);

    let missing = client
        .run(DeleteBook::build(ByIdVariables { id: Some(2) }))
        .await
        .data
        .unwrap()
        .delete_book;
    assert!(missing.is_none());
    assert_eq!(library.books().len(), 1);
}

#[tokio::test]
async fn test_update_missing_book() {
    let server = testserver::Server::start(single_book_library());
    let client = Client::new(server.url());

    let res = client
        .run(UpdateBook::build(UpdateBookVariables {
            id: 9,
            name: "Nope".into(),
            author_id: 1,
        }))
        .await;

    assert!(res.data.unwrap().update_book.is_none());
    let errors = res.errors.unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Book not found");
}

#[tokio::test]
async fn test_add_book_when_ids_run_out() {
    let library = Library::new(Seed {
        authors: vec![],
        books: vec![Book {
            id: i32::MAX,
            name: "Last".into(),
            author_id: 1,
        }],
    });
    let server = testserver::Server::start(library.clone());
    let client = Client::new(server.url());

    let res = client
        .run(AddBook::build(AddBookVariables {
            name: "Overflow".into(),
            author_id: 1,
        }))
        .await;

    assert!(res.data.unwrap().add_book.is_none());
    let errors = res.errors.unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "No book ids left to assign");
    assert_eq!(library.books().len(), 1);
}

#[tokio::test]
async fn test_graphiql_page() {
    let server = testserver::Server::start(Library::default());

    let res = reqwest::get(server.url()).await.unwrap();

    assert!(res.status().is_success());
    let body = res.text().await.unwrap();
    assert!(body.contains("graphiql"));
}
