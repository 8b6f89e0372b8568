pub mod confidence;
pub mod decision;
pub mod engine;
pub mod evidence;
pub mod lexicon;
pub mod script;
pub mod types;
