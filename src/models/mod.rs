pub mod season;
pub mod transaction;

pub use season::Season;
pub use transaction::Transaction;
