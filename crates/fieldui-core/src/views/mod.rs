pub mod sort;

pub use sort::{
    OrderBy, SortDirection, SortHandler, SortHandlerDefinition, SortHandlerRegistry, SortQuery,
};
