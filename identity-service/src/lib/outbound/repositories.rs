pub mod user;

pub use user::PostgresUserStore;
