pub mod gallery;
pub mod models;
#[cfg(test)]
mod tests;
pub mod views;
