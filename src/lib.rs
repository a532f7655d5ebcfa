pub mod controllers;
pub mod db;
pub mod errors;
pub mod models;
