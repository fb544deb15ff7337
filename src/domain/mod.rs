pub mod cloud;
pub mod interface;
pub mod model;
pub mod service;
pub mod text;
