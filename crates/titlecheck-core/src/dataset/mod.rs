pub mod io;
pub mod split;

pub use io::{load_records, write_labeled_titles, write_publishers, write_records, DELIMITER};
pub use split::{shuffle, train_test_split, Split};
