/// Service document tests

pub mod listing;
