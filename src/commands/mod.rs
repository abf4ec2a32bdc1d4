mod embed;
pub use embed::EmbedCommand;
