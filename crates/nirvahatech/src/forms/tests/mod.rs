mod common;
mod registry;
mod rules;
