pub mod relay_chat;
#[cfg(test)]
pub(crate) mod test_support;

pub use relay_chat::RelayChatUseCase;
