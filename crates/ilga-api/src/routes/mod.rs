mod advocacy;
mod graphql;
mod health;

pub use advocacy::{advocacy_form, advocacy_search};
pub use graphql::{graphiql, graphql_handler};
pub use health::health;
