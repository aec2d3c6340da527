pub mod constants;
pub mod costs;
pub mod electrical;
pub mod error;
pub mod profile;
pub mod result;
pub mod sizing;
pub mod specs;
pub mod validation;
