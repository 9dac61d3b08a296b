//! Catalog handlers - product browsing and quiz schema queries.

mod browse_products;
mod quiz_schema;

pub use browse_products::{
    GetProductHandler, GetProductQuery, GetProductsHandler, GetProductsQuery, ListBrandsHandler,
};
pub use quiz_schema::{GetQuizQuestionsHandler, GetSkinTypesHandler};
