pub mod beds;
pub mod plantings;
pub mod plants;
