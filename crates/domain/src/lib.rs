//! Domain logic for the Cascade personal-finance client.
//!
//! Everything in this crate is pure, synchronous, and single-owner: each
//! screen of the client owns its own dataset and derives view state from it
//! on demand. There is no I/O and no shared mutable store here.

pub use assistant::{Assistant, ChatMessage, SendOutcome, REPLY_DELAY};
pub use budget::{summarize, BudgetCategory, BudgetSummary, MonthCursor, WARN_THRESHOLD};
pub use error::DomainError;
pub use forms::{BudgetDraft, TransactionDraft, TransactionKind, CATEGORIES};
pub use money::MoneyCents;
pub use overview::{AccountOverview, SpendingSlice, TimeFrame};
pub use transactions::{filter, ClassFilter, Transaction, TransactionQuery};

mod assistant;
mod budget;
mod error;
mod forms;
mod money;
mod overview;
pub mod seed;
mod transactions;

type ResultDomain<T> = Result<T, DomainError>;
