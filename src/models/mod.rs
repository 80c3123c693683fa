mod category;
mod goal;
mod insight;
mod monthly;
mod summary;
mod tone;
mod transaction;

pub use category::CategorySlice;
pub use goal::Goal;
pub use insight::Insight;
pub use monthly::MonthlyRecord;
pub use summary::Summary;
pub use tone::Tone;
pub use transaction::Transaction;

#[cfg(test)]
mod tests;
