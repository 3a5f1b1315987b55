// Interface adapters: HTTP clients, persisted state and page location.

pub mod clients;
pub mod location;
pub mod protocol;
pub mod stores;
