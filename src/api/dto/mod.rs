//! Data Transfer Objects for REST request/response serialization.

pub mod book_dto;
pub mod common_dto;
pub mod reader_dto;
pub mod shelf_dto;

pub use book_dto::*;
pub use common_dto::*;
pub use reader_dto::*;
pub use shelf_dto::*;
