pub mod attorneys;
pub mod clients;
pub mod export;
pub mod info;
pub mod overview;
pub mod practice;
pub mod trending;
