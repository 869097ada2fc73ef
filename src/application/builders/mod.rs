pub mod command_builder;
