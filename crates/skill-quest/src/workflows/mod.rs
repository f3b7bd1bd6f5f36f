pub mod assessment;
pub mod catalog;
pub mod dashboard;
pub mod generators;
pub mod learner;

#[cfg(test)]
mod tests;
