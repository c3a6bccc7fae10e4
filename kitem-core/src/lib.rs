pub mod choices;
pub mod error;
pub mod filter;
pub mod guard;
pub mod model;
pub mod prep_time;
pub mod stats;
pub mod store;
pub mod toggle;
pub mod validate;

pub use choices::{Category, Choice, Difficulty, ListStatus, PrepTimeOperator, RecipeKind, ReportReason};
pub use error::{CoreError, StoreError, StoreResult, ValidationError};
pub use filter::{FavoriteFilter, QueryParams, RecipeFilter, ReportFilter, ShoppingListFilter};
pub use prep_time::PrepTimeBucket;
pub use stats::{CategoryStatistics, ListStatusSummary, ReportStatistics, TOP_N};
pub use store::{
    FavoriteRepository, MemoryStore, RecipeIngredientRepository, RecipeRepository,
    ReportRepository, ShoppingListRepository,
};
pub use toggle::FavoriteToggle;
