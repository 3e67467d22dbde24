#[allow(non_snake_case)]
pub mod Chemistry;
#[allow(non_snake_case)]
pub mod Utils;
pub mod cli;
pub mod settings;
