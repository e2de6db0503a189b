pub mod load;
pub mod table;
pub mod types;

pub use load::{load_records, parse_records};
pub use table::RouteTable;
pub use types::{DirectRoutes, Record};
