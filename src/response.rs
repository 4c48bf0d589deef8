//! Response bodies for the books endpoints.

use crate::model::Book;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct BooksBody {
    pub books: Vec<Book>,
}

#[derive(Serialize, Deserialize)]
pub struct BookBody {
    pub book: Book,
}

#[derive(Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn deleted() -> Self {
        MessageBody {
            message: "Book deleted".to_string(),
        }
    }
}
