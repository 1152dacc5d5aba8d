//! Car service module for the `cars` collection

mod service;


pub use service::CarService;
