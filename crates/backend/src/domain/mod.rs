pub mod a001_travel_request;
