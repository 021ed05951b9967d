//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.
//! Every ledger mutation takes an [`AdminGrant`](maktab_core::auth::AdminGrant).

pub mod admin_user;
pub mod donation;
pub mod expense;
pub mod salary;

pub use admin_user::AdminUserRepository;
pub use donation::DonationRepository;
pub use expense::ExpenseRepository;
pub use salary::SalaryRepository;
