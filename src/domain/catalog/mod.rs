pub mod filters;
pub mod hateoas;
pub mod order_by;
pub mod pagination;
