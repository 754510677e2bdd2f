pub mod bill;
pub mod category;
pub mod debt;
pub mod goal;
pub mod period;
pub mod profile;
pub mod transaction;

pub use bill::Bill;
pub use category::Category;
pub use debt::Debt;
pub use goal::Goal;
pub use period::Period;
pub use profile::Profile;
pub use transaction::{Transaction, TxKind};
