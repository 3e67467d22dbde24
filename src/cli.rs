/// Command line arguments and the interactive menu
pub mod cli_main;
/// Sample equations to try from the menu
pub mod cli_examples;
