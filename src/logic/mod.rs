pub mod footprint;
pub mod occupancy;
pub mod validator;
