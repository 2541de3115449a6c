pub mod a001_travel_request;
pub mod system;
