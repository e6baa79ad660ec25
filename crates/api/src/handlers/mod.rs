//! HTTP request handlers, one module per resource.

pub mod activities;
pub mod auth;
pub mod contacts;
pub mod employees;
pub mod expenses;
pub mod invoices;
pub mod payments;
pub mod quotations;
pub mod rentals;
pub mod settings;
