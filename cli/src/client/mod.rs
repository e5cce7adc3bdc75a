mod client_models;
mod dothttp_client;

pub use dothttp_client::DotHttpClient;
