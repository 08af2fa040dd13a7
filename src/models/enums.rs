//! Shared domain enums
//!
//! `Category` and `BookStatus` are stored as plain INTEGER columns, so these
//! definitions are the only place their allowed values are enforced. Both
//! serialize to JSON as their numeric code and accept either the code or the
//! name on input.

use serde::{Deserialize, Serialize};
use sqlx::{
    database::HasArguments,
    encode::IsNull,
    error::BoxDynError,
    sqlite::{SqliteTypeInfo, SqliteValueRef},
    Decode, Encode, Sqlite,
};

/// Wire representation accepted for enum fields: a numeric code or a name
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CodeOrName {
    Code(i64),
    Name(String),
}

/// Implements the code conversions, JSON and SQLite plumbing shared by the
/// code-backed enums below.
macro_rules! code_enum {
    ($name:ident, $label:literal) => {
        impl $name {
            /// Numeric code stored in the database
            pub fn code(self) -> i64 {
                self as i64
            }
        }

        impl TryFrom<i64> for $name {
            type Error = String;

            fn try_from(code: i64) -> Result<Self, Self::Error> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.code() == code)
                    .ok_or_else(|| format!("Invalid {} code: {}", $label, code))
            }
        }

        impl TryFrom<CodeOrName> for $name {
            type Error = String;

            fn try_from(value: CodeOrName) -> Result<Self, Self::Error> {
                match value {
                    CodeOrName::Code(code) => Self::try_from(code),
                    CodeOrName::Name(name) => name.parse(),
                }
            }
        }

        impl From<$name> for i64 {
            fn from(v: $name) -> Self {
                v.code()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl sqlx::Type<Sqlite> for $name {
            fn type_info() -> SqliteTypeInfo {
                <i64 as sqlx::Type<Sqlite>>::type_info()
            }

            fn compatible(ty: &SqliteTypeInfo) -> bool {
                <i64 as sqlx::Type<Sqlite>>::compatible(ty)
            }
        }

        impl<'r> Decode<'r, Sqlite> for $name {
            fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
                let code: i64 = Decode::<Sqlite>::decode(value)?;
                Self::try_from(code).map_err(Into::into)
            }
        }

        impl<'q> Encode<'q, Sqlite> for $name {
            fn encode_by_ref(&self, buf: &mut <Sqlite as HasArguments<'q>>::ArgumentBuffer) -> IsNull {
                <i64 as Encode<Sqlite>>::encode(self.code(), buf)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Book category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "CodeOrName")]
#[repr(i64)]
pub enum Category {
    Romance = 1,
    Action = 2,
    Fiction = 3,
    Comedy = 4,
    Suspense = 5,
    Horror = 6,
    Other = 99,
}

impl Category {
    /// Every category, in code order
    pub const ALL: [Category; 7] = [
        Category::Romance,
        Category::Action,
        Category::Fiction,
        Category::Comedy,
        Category::Suspense,
        Category::Horror,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Romance => "romance",
            Category::Action => "action",
            Category::Fiction => "fiction",
            Category::Comedy => "comedy",
            Category::Suspense => "suspense",
            Category::Horror => "horror",
            Category::Other => "other",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "romance" => Ok(Category::Romance),
            "action" | "acao" | "ação" => Ok(Category::Action),
            "fiction" | "ficcao" | "ficção" => Ok(Category::Fiction),
            "comedy" | "comedia" | "comédia" => Ok(Category::Comedy),
            "suspense" => Ok(Category::Suspense),
            "horror" | "terror" => Ok(Category::Horror),
            "other" | "outros" => Ok(Category::Other),
            _ => Err(format!("Invalid category: {}", s)),
        }
    }
}

code_enum!(Category, "category");

// ---------------------------------------------------------------------------
// BookStatus
// ---------------------------------------------------------------------------

/// Record status of a book.
///
/// `Inactive` has no operation that sets it; only `Active -> Deleted` is
/// reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "CodeOrName")]
#[repr(i64)]
pub enum BookStatus {
    #[default]
    Active = 1,
    Inactive = 2,
    Deleted = 9,
}

impl BookStatus {
    /// Every status, in code order
    pub const ALL: [BookStatus; 3] = [BookStatus::Active, BookStatus::Inactive, BookStatus::Deleted];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Active => "active",
            BookStatus::Inactive => "inactive",
            BookStatus::Deleted => "deleted",
        }
    }
}

impl std::str::FromStr for BookStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" | "ativo" => Ok(BookStatus::Active),
            "inactive" | "inativo" => Ok(BookStatus::Inactive),
            "deleted" | "excluido" | "excluído" => Ok(BookStatus::Deleted),
            _ => Err(format!("Invalid status: {}", s)),
        }
    }
}

code_enum!(BookStatus, "status");
