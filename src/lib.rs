//! skillscope - Compare two revisions of a game-skill description with an LLM
//!
//! A small web service: a browser form submits an old and a new skill
//! description, the server embeds both in a fixed Traditional-Chinese analysis
//! prompt, sends it to the OpenAI Responses API with the caller's own API key,
//! and returns the model's verdict as JSON. Finished analyses can be
//! snapshotted to disk as timestamped JSON files.

pub mod config;
pub mod error;
pub mod llm;
pub mod server;
pub mod store;
pub mod util;
