// Interface adapters: HTTP surface, upstream client and credential lookup.

pub mod clients;
pub mod credentials;
pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
