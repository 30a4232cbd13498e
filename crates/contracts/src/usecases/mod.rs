pub mod common;
pub mod u101_ask_analyst;
