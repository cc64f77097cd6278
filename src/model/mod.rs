pub mod postman;
pub mod yaak;
