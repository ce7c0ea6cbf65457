#![forbid(unsafe_code)]

pub mod app;
pub mod catalog;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod lemmatize;
pub mod logging;
pub mod lookup;
pub mod normalize;
pub mod recommender;
pub mod render;
pub mod stopwords;
pub mod vectorize;
