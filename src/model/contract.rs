use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{ApplicationStatus, ContractType};

/// Contract application together with the usernames of its author and reviewer.
#[derive(Clone, Debug, PartialEq)]
pub struct ApplicationDto {
    pub id: i32,
    pub author_id: i32,
    pub author_username: String,
    pub title: String,
    pub pen_name: String,
    pub contract_type: ContractType,
    pub status: ApplicationStatus,
    pub reject_reason: Option<String>,
    /// `None` while pending or when the reviewing admin has since been deleted.
    pub reviewer_username: Option<String>,
    pub created_at: NaiveDateTime,
    pub processed_at: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookDto {
    pub id: i32,
    pub title: String,
    pub author_id: i32,
    pub author_username: String,
    pub pen_name: String,
    pub contract_type: ContractType,
    pub buyout_amount: Option<f64>,
    pub created_at: NaiveDateTime,
}

impl BookDto {
    pub fn from_model(book: entity::book::Model, author_username: String) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author_id: book.author_id,
            author_username,
            pen_name: book.pen_name,
            contract_type: book.contract_type,
            buyout_amount: book.buyout_amount,
            created_at: book.created_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RoyaltyDto {
    pub month: String,
    pub amount: f64,
}

/// One of an author's books with its royalty for the selected month and all other months.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthorBookDto {
    pub book: BookDto,
    pub current_royalty: Option<f64>,
    /// Newest month first, excluding the selected month.
    pub history: Vec<RoyaltyDto>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContractsOverviewDto {
    pub month: String,
    pub books: Vec<AuthorBookDto>,
}

/// Row on the admin royalty page.
#[derive(Clone, Debug, PartialEq)]
pub struct RoyaltyRowDto {
    pub book: BookDto,
    /// Amount recorded for the selected month, guaranteed books only.
    pub amount: Option<f64>,
}
